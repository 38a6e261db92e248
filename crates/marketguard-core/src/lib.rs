//! Anti-circumvention core for the Marketguard B2B marketplace.
//!
//! The marketplace earns its fee by mediating every transaction; the risk it
//! engineers against is buyers and sellers swapping contact details and
//! settling off-platform. This crate is that defense, in two halves:
//!
//! - **Content filtering** – a whitelist-stripping, two-tier pattern scan
//!   over free-form text (listing descriptions, chat messages). High
//!   confidence hits (phones, emails, URLs) block the submission; medium
//!   confidence hits (handles, "at/dot" obfuscation, solicitation phrases)
//!   are routed to review and never block.
//! - **Identity disclosure** – an order-status-driven policy that keeps
//!   counterparties pseudonymous and contact fields hidden or masked until
//!   an order reaches a trusted state.
//!
//! Everything is a pure function over in-memory data: no I/O, no shared
//! mutable state, safe for unbounded concurrent calls. Persistence of
//! violations, the review queue, and request-level enforcement belong to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use marketguard_core::{analyze_content, mask_user_for_order, no_contact_info, UserRecord};
//!
//! // Filtering free text
//! let result = analyze_content("Happy to deal direct, call me at 555-123-4567");
//! assert!(!result.allowed);
//!
//! // As a field validation rule
//! let rule = no_contact_info("Listing description");
//! assert!(rule.validate("48\" x 40\" pallets, $4.25/sq ft").is_ok());
//!
//! // Projecting a counterparty for an in-flight order
//! let seller = UserRecord {
//!     id: "user-318".into(),
//!     name: "Dana Whitfield".into(),
//!     business_name: Some("Whitfield Lumber Co".into()),
//!     email: Some("dana@whitfieldlumber.com".into()),
//!     phone: Some("(612) 555-0137".into()),
//!     role: "seller".into(),
//!     business_state: Some("Minnesota".into()),
//! };
//! let view = mask_user_for_order(&seller, "pending", false);
//! assert!(view.name.starts_with("Verified "));
//! assert_eq!(view.email, None);
//! ```

pub mod detector;
pub mod disclosure;
pub mod filter;
pub mod identity;
pub mod masker;
pub mod types;
pub mod validate;
pub mod view;
pub mod whitelist;

pub use disclosure::{
    mask_level, should_reveal_identity, ContactExposure, DisclosureLevel, IdentityExposure,
};
pub use filter::{analyze_content, blocked_content_message, ContentFilter, ContentFilterBuilder};
pub use identity::{
    anonymous_display_name, anonymous_initials, role_label, PLATFORM_SUPPORT_NAME,
};
pub use masker::{mask_email, mask_phone};
pub use types::{Confidence, ContentFilterResult, Detection, DetectionKind};
pub use validate::{no_contact_info, ContactInfoValidator, ContactInfoViolation};
pub use view::{mask_user_for_order, UserContactView, UserRecord};
pub use whitelist::strip_whitelisted;
