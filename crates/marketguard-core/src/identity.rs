//! Anonymous identity generation – deterministic pseudonyms shown in place
//! of a real business identity until the order earns full disclosure.

/// Display name used for platform staff regardless of state.
pub const PLATFORM_SUPPORT_NAME: &str = "Platform Support";

const SELLER_LABELS: [&str; 2] = ["Seller", "Supplier"];
const BUYER_LABELS: [&str; 2] = ["Buyer", "Professional"];

/// Pseudonymous role label for a participant.
///
/// Each role has two synonyms and a user is pinned to one of them by a hash
/// of their id, so the same user always reads the same while the marketplace
/// as a whole shows lexical variety (a single fixed label per role would let
/// counterparties correlate accounts across orders). Without an id the first
/// synonym is used. Unrecognized roles read as buyers, the default audience.
pub fn role_label(role: &str, user_id: Option<&str>) -> &'static str {
    let labels = match role {
        "seller" => &SELLER_LABELS,
        _ => &BUYER_LABELS,
    };
    labels[user_id.map(synonym_index).unwrap_or(0)]
}

/// Rolling 32-bit hash selecting a synonym per user.
///
/// The algorithm is part of the contract, not an implementation detail:
/// `hash = (hash << 5) - hash + char_code`, folded with wrapping 32-bit
/// arithmetic, reduced mod 2. Changing it would flip the label every
/// existing user sees.
fn synonym_index(user_id: &str) -> usize {
    let mut hash: i32 = 0;
    for c in user_id.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(c as i32);
    }
    hash.rem_euclid(2) as usize
}

/// Pseudonym shown while identity exposure is anonymous.
///
/// Admins always read as platform support, whatever their state. Everyone
/// else reads as `"Verified {RoleLabel}"`, with the business state appended
/// when known.
pub fn anonymous_display_name(
    role: &str,
    business_state: Option<&str>,
    user_id: Option<&str>,
) -> String {
    if role == "admin" {
        return PLATFORM_SUPPORT_NAME.to_string();
    }
    let label = role_label(role, user_id);
    match business_state {
        Some(state) if !state.is_empty() => format!("Verified {label} in {state}"),
        _ => format!("Verified {label}"),
    }
}

/// Fixed avatar initials per role.
pub fn anonymous_initials(role: &str) -> &'static str {
    match role {
        "admin" => "PS",
        "seller" => "VS",
        _ => "VB",
    }
}
