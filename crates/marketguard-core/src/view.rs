//! Counterparty-facing user projection.
//!
//! [`mask_user_for_order`] is the single seam raw user records pass through
//! before being shown to the other side of an order. The output type is a
//! closed projection: fields the counterparty may never see at the current
//! disclosure level simply don't survive the mapping.

use serde::{Deserialize, Serialize};

use crate::disclosure::{mask_level, ContactExposure, IdentityExposure};
use crate::identity::anonymous_display_name;
use crate::masker::{mask_email, mask_phone};

/// Raw participant record as the caller's storage layer holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical lowercase role: "seller", "buyer", "admin", ...
    pub role: String,
    /// State/region of the registered business, when verified
    pub business_state: Option<String>,
}

/// PII-safe view of a counterparty. This is everything the other side of an
/// order is allowed to know about a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContactView {
    pub id: String,
    pub name: String,
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Project a user record to what a counterparty may see for this order.
///
/// Admin viewers bypass the policy entirely and get ground truth; everyone
/// else gets the disclosure level the order status has earned.
pub fn mask_user_for_order(user: &UserRecord, order_status: &str, is_admin: bool) -> UserContactView {
    if is_admin {
        return UserContactView {
            id: user.id.clone(),
            name: user.name.clone(),
            business_name: user.business_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        };
    }

    let level = mask_level(order_status);

    let (name, business_name) = match level.identity {
        IdentityExposure::Full => (user.name.clone(), user.business_name.clone()),
        IdentityExposure::Anonymous => (
            anonymous_display_name(&user.role, user.business_state.as_deref(), Some(&user.id)),
            None,
        ),
    };

    let (email, phone) = match level.contact {
        ContactExposure::Full => (user.email.clone(), user.phone.clone()),
        ContactExposure::Masked => (
            user.email.as_deref().map(mask_email),
            user.phone.as_deref().map(mask_phone),
        ),
        ContactExposure::Hidden => (None, None),
    };

    UserContactView {
        id: user.id.clone(),
        name,
        business_name,
        email,
        phone,
    }
}
