use serde::{Deserialize, Serialize};

/// Whether a counterparty sees the real business identity or a pseudonym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityExposure {
    Anonymous,
    Full,
}

/// How much of the contact fields a counterparty sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactExposure {
    Hidden,
    Masked,
    Full,
}

/// Disclosure policy for one order state – identity exposure × contact
/// exposure. A pure function of order status alone; no other signal may
/// reveal identity early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisclosureLevel {
    pub identity: IdentityExposure,
    pub contact: ContactExposure,
}

/// Map an order lifecycle status to its disclosure level.
///
/// Total over any string: statuses this version doesn't recognize (including
/// future lifecycle states) fall through to maximal privacy rather than
/// erroring.
pub fn mask_level(order_status: &str) -> DisclosureLevel {
    match order_status {
        "delivered" | "completed" => DisclosureLevel {
            identity: IdentityExposure::Full,
            contact: ContactExposure::Full,
        },
        "shipped" => DisclosureLevel {
            identity: IdentityExposure::Anonymous,
            contact: ContactExposure::Masked,
        },
        _ => DisclosureLevel {
            identity: IdentityExposure::Anonymous,
            contact: ContactExposure::Hidden,
        },
    }
}

/// True exactly for the order states that have earned full disclosure.
pub fn should_reveal_identity(order_status: &str) -> bool {
    mask_level(order_status).identity == IdentityExposure::Full
}
