//! Tiered contact-information detectors.
//!
//! High-confidence hits (phones, emails, URLs) block a submission outright.
//! Medium-confidence hits (social handles, "at/dot" obfuscation, contact
//! solicitation phrases) are review signals and never block.
//!
//! Every pattern runs independently over the same stripped text; overlapping
//! matches for the same substring each produce their own detection. Review
//! tooling consumes the raw, non-deduplicated stream.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Confidence, Detection, DetectionKind};

struct PatternSpec {
    kind: DetectionKind,
    pattern: Regex,
}

impl PatternSpec {
    fn new(kind: DetectionKind, pattern: &str) -> Self {
        // Static patterns are known-good; compilation is covered by tests
        Self {
            kind,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

/// High-confidence patterns: five phone formats, one email, two URL shapes.
static HIGH_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        // (555) 123-4567
        PatternSpec::new(DetectionKind::Phone, r"\(\d{3}\)\s*\d{3}[-.\s]?\d{4}"),
        // 555-123-4567 / 555.123.4567 / 555 123 4567
        PatternSpec::new(DetectionKind::Phone, r"\b\d{3}[-.\s]\d{3}[-.\s]\d{4}\b"),
        // 5551234567
        PatternSpec::new(DetectionKind::Phone, r"\b\d{10}\b"),
        // +1 555 123 4567, +1 (555) 123-4567
        PatternSpec::new(
            DetectionKind::Phone,
            r"\+1[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        ),
        // 1-800 and friends
        PatternSpec::new(
            DetectionKind::Phone,
            r"\b1[-.\s]?(?:800|888|877|866|855|844|833)[-.\s]?\d{3}[-.\s]?\d{4}\b",
        ),
        PatternSpec::new(
            DetectionKind::Email,
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        ),
        // Explicit scheme or www prefix
        PatternSpec::new(DetectionKind::Url, r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#),
        // Bare domains, restricted to common commercial TLDs
        PatternSpec::new(
            DetectionKind::Url,
            r"(?i)\b(?:[a-z0-9-]+\.)+(?:com|net|org|io|co|biz|info)\b",
        ),
    ]
});

/// `@handle` candidates. The email-local and TLD guards live in
/// [`detect_social_handles`] because the `regex` crate has no lookaround.
static SOCIAL_HANDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]{2,30}").unwrap());

/// `name at domain dot com` obfuscation
static EMAIL_SUBSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._-]+\s+at\s+[a-z0-9-]+(?:\s+dot\s+[a-z0-9-]+)*\s+dot\s+(?:com|net|org|io|co)\b")
        .unwrap()
});

/// Contact-solicitation phrases
static INTENT_PHRASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:call\s+me\s+at|my\s+phone\s+is|reach\s+me\s+at|get\s+in\s+touch\s+at|message\s+me\s+at)\b",
    )
    .unwrap()
});

/// Scan stripped text for blocking contact info. Offsets are byte offsets
/// into the stripped text, not the original input.
pub fn detect_high_confidence(text: &str) -> Vec<Detection> {
    let mut detections = Vec::new();
    for spec in HIGH_PATTERNS.iter() {
        for m in spec.pattern.find_iter(text) {
            detections.push(Detection::new(
                spec.kind,
                Confidence::High,
                m.as_str(),
                m.start(),
            ));
        }
    }
    detections
}

/// Scan stripped text for review-only contact signals.
pub fn detect_medium_confidence(text: &str) -> Vec<Detection> {
    let mut detections = detect_social_handles(text);
    for m in EMAIL_SUBSTITUTION.find_iter(text) {
        detections.push(Detection::new(
            DetectionKind::EmailSubstitution,
            Confidence::Medium,
            m.as_str(),
            m.start(),
        ));
    }
    for m in INTENT_PHRASES.find_iter(text) {
        detections.push(Detection::new(
            DetectionKind::IntentPhrase,
            Confidence::Medium,
            m.as_str(),
            m.start(),
        ));
    }
    detections
}

fn detect_social_handles(text: &str) -> Vec<Detection> {
    SOCIAL_HANDLE
        .find_iter(text)
        .filter_map(|m| {
            // The char before `@` must not belong to an email local part,
            // otherwise this is the `@` of an address the email pattern
            // already owns.
            if let Some(prev) = text[..m.start()].chars().next_back() {
                if is_email_local_char(prev) {
                    return None;
                }
            }
            // An `@name.tld` suffix means this is a domain, not a handle.
            let rest = &text[m.end()..];
            if rest.starts_with('.')
                && rest[1..].chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            {
                return None;
            }
            Some(Detection::new(
                DetectionKind::SocialHandle,
                Confidence::Medium,
                m.as_str(),
                m.start(),
            ))
        })
        .collect()
}

fn is_email_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(detections: &[Detection]) -> Vec<DetectionKind> {
        detections.iter().map(|d| d.kind).collect()
    }

    #[test]
    fn test_detects_all_phone_formats() {
        for phone in [
            "(555) 123-4567",
            "555-123-4567",
            "555.123.4567",
            "5551234567",
            "+1 555 123 4567",
            "1-800-555-0199",
        ] {
            let text = format!("interested? {phone}");
            let detections = detect_high_confidence(&text);
            assert!(
                kinds(&detections).contains(&DetectionKind::Phone),
                "missed phone format: {phone}"
            );
        }
    }

    #[test]
    fn test_detects_email() {
        let detections = detect_high_confidence("write to john.doe+sales@example.com today");
        let emails: Vec<_> = detections
            .iter()
            .filter(|d| d.kind == DetectionKind::Email)
            .collect();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].matched, "john.doe+sales@example.com");
    }

    #[test]
    fn test_detects_urls() {
        for url in ["https://example.com/shop", "www.example.com", "example.io"] {
            let text = format!("see {url}");
            assert!(
                kinds(&detect_high_confidence(&text)).contains(&DetectionKind::Url),
                "missed url: {url}"
            );
        }
    }

    #[test]
    fn test_bare_domain_requires_whitelisted_tld() {
        let detections = detect_high_confidence("file named archive.xyz here");
        assert!(detections.is_empty());
    }

    #[test]
    fn test_overlapping_matches_are_not_deduplicated() {
        // "+1-555-123-4567" satisfies both the international and the
        // separated pattern; both detections must survive.
        let detections = detect_high_confidence("+1-555-123-4567");
        let phones = detections
            .iter()
            .filter(|d| d.kind == DetectionKind::Phone)
            .count();
        assert!(phones >= 2, "expected overlapping phone detections");
    }

    #[test]
    fn test_detection_offsets_point_into_scanned_text() {
        let text = "padding before 555-123-4567";
        let detections = detect_high_confidence(text);
        let d = &detections[0];
        assert_eq!(&text[d.index..d.index + d.matched.len()], d.matched);
    }

    #[test]
    fn test_detects_social_handle() {
        let detections = detect_medium_confidence("DM @mike_77 anytime");
        assert_eq!(kinds(&detections), vec![DetectionKind::SocialHandle]);
        assert_eq!(detections[0].matched, "@mike_77");
    }

    #[test]
    fn test_handle_guard_skips_email_locals() {
        // The high tier owns full email addresses; the handle scan must not
        // re-flag the `@domain` tail.
        let detections = detect_medium_confidence("john@example.com");
        assert!(detections.is_empty());
    }

    #[test]
    fn test_handle_guard_skips_domains() {
        let detections = detect_medium_confidence("ping me @example.com maybe");
        assert!(detections.is_empty());
    }

    #[test]
    fn test_detects_at_dot_obfuscation() {
        let detections = detect_medium_confidence("write john at gmail dot com please");
        assert_eq!(kinds(&detections), vec![DetectionKind::EmailSubstitution]);
        assert_eq!(detections[0].matched, "john at gmail dot com");
    }

    #[test]
    fn test_detects_subdomain_obfuscation() {
        let detections = detect_medium_confidence("sales at mail dot example dot com");
        assert_eq!(kinds(&detections), vec![DetectionKind::EmailSubstitution]);
    }

    #[test]
    fn test_detects_intent_phrases() {
        for phrase in [
            "call me at",
            "my phone is",
            "reach me at",
            "get in touch at",
            "message me at",
        ] {
            let text = format!("hey, {phrase} the usual place");
            assert!(
                kinds(&detect_medium_confidence(&text)).contains(&DetectionKind::IntentPhrase),
                "missed phrase: {phrase}"
            );
        }
    }

    #[test]
    fn test_medium_tier_ignores_plain_prose() {
        let detections = detect_medium_confidence("We met at the trade show in March.");
        assert!(detections.is_empty());
    }
}
