//! Field-level contact masking for the partially-disclosed order states.
//!
//! Masking is display-layer obfuscation for counterparties, not a security
//! boundary: anyone with database access sees the raw fields. Both functions
//! are total and degrade to best effort on malformed input – a bad string is
//! a data-quality problem, never a panic.

/// Partially mask an email address: `john.doe@example.com` -> `jo***@example.com`.
///
/// Keeps one leading character when the local part is a single character,
/// two otherwise; the domain stays verbatim so the counterparty can judge
/// legitimacy. Strings without both halves of an address come back unchanged.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }
    let keep = if local.chars().count() == 1 { 1 } else { 2 };
    let kept: String = local.chars().take(keep).collect();
    format!("{kept}***@{domain}")
}

/// Partially mask a phone number, keeping the last four digits visible.
///
/// The mask re-emits the punctuation family of the input – parenthesized,
/// hyphenated, or bare – so the masked value still reads like the original:
/// `(555) 123-4567` -> `(***) ***-4567`, `555-123-4567` -> `***-***-4567`,
/// `5551234567` -> `******4567`.
pub fn mask_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let visible = &digits[digits.len().saturating_sub(4)..];

    if phone.contains('(') {
        format!("(***) ***-{visible}")
    } else if phone.contains('-') {
        format!("***-***-{visible}")
    } else {
        format!("******{visible}")
    }
}
