//! Content filter orchestration – strip, scan, combine.
//!
//! The pipeline is pure and stateless: whitelist stripping first, then both
//! detector tiers over the same stripped text. Safe for unbounded concurrent
//! calls; the pattern tables are compiled once into immutable statics.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::detector::{detect_high_confidence, detect_medium_confidence};
use crate::types::{Confidence, ContentFilterResult, Detection, DetectionKind};
use crate::whitelist::strip_whitelisted;

/// Content filter engine – owns deployment-specific additions on top of the
/// fixed pattern tiers.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Extra literal terms stripped like whitelist matches (e.g. a tenant's
    /// own product codes)
    extra_whitelist: Vec<String>,
    /// Extra literal solicitation phrases flagged at medium confidence
    extra_intent_phrases: Vec<String>,
}

impl ContentFilter {
    /// Filter with the fixed defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for ergonomic configuration
    pub fn builder() -> ContentFilterBuilder {
        ContentFilterBuilder::default()
    }

    /// Run the full pipeline over one piece of content.
    pub fn analyze(&self, text: &str) -> ContentFilterResult {
        let mut stripped = strip_whitelisted(text);
        for term in &self.extra_whitelist {
            if !term.is_empty() && stripped.contains(term.as_str()) {
                stripped = stripped.replace(term.as_str(), " ");
            }
        }

        let high = detect_high_confidence(&stripped);
        let mut medium = detect_medium_confidence(&stripped);
        for phrase in &self.extra_intent_phrases {
            medium.extend(find_phrase(&stripped, phrase));
        }

        debug!(
            high = high.len(),
            medium = medium.len(),
            "content analyzed"
        );

        let mut detections = Vec::with_capacity(high.len() + medium.len());
        detections.extend(high.iter().cloned());
        detections.extend(medium.iter().cloned());

        ContentFilterResult {
            allowed: high.is_empty(),
            detections,
            high_confidence_detections: high,
            medium_confidence_detections: medium,
        }
    }
}

/// Builder for [`ContentFilter`] – fluent deployment configuration.
#[derive(Debug, Default)]
pub struct ContentFilterBuilder {
    filter: ContentFilter,
}

impl ContentFilterBuilder {
    pub fn with_whitelist_terms(mut self, terms: Vec<&str>) -> Self {
        self.filter.extra_whitelist = terms.into_iter().map(String::from).collect();
        self
    }

    pub fn with_intent_phrases(mut self, phrases: Vec<&str>) -> Self {
        self.filter.extra_intent_phrases = phrases.into_iter().map(String::from).collect();
        self
    }

    pub fn build(self) -> ContentFilter {
        self.filter
    }
}

/// Case-insensitive literal scan for a configured solicitation phrase.
fn find_phrase(text: &str, phrase: &str) -> Vec<Detection> {
    if phrase.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    let needle = phrase.to_lowercase();
    let mut detections = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        // Offsets are reported against the lowercased text; for ASCII
        // content this equals the stripped text, which is all we promise.
        detections.push(Detection::new(
            DetectionKind::IntentPhrase,
            Confidence::Medium,
            &haystack[start..start + needle.len()],
            start,
        ));
        from = start + needle.len();
    }
    detections
}

static DEFAULT_FILTER: Lazy<ContentFilter> = Lazy::new(ContentFilter::new);

/// Analyze free-form content with the default filter.
///
/// `allowed` is false exactly when at least one high-confidence detection
/// fired; medium-confidence detections never block.
///
/// Cost is O(patterns × text length); matching is linear-time (the `regex`
/// crate does not backtrack), but callers should still cap input length at
/// listing-description/chat-message scale before handing text in.
pub fn analyze_content(text: &str) -> ContentFilterResult {
    DEFAULT_FILTER.analyze(text)
}

/// One-sentence rejection message naming the de-duplicated detection
/// categories, attributed to the offending field.
pub fn blocked_content_message(field_label: &str, detections: &[Detection]) -> String {
    let mut labels: Vec<&'static str> = Vec::new();
    for detection in detections {
        let label = detection.kind.label();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    if labels.is_empty() {
        return format!("Your {field_label} contains contact information and cannot be submitted.");
    }
    format!(
        "Your {field_label} appears to contain a {} and cannot be submitted.",
        join_with_or(&labels)
    )
}

fn join_with_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} or {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_phone_email_url() {
        for leak in [
            "call (555) 123-4567",
            "email john@example.com",
            "see www.sidechannel.com",
        ] {
            let result = analyze_content(leak);
            assert!(!result.allowed, "should block: {leak}");
            assert!(!result.high_confidence_detections.is_empty());
        }
    }

    #[test]
    fn test_allowed_tracks_high_confidence_only() {
        let result = analyze_content("DM @mike_77 about the pallets");
        assert!(result.allowed);
        assert!(result.high_confidence_detections.is_empty());
        assert_eq!(result.medium_confidence_detections.len(), 1);
        assert_eq!(result.detections.len(), 1);
    }

    #[test]
    fn test_whitelisted_content_is_clean() {
        let result = analyze_content(
            "Maple boards, $3.99/sq ft, pallets 48\" x 40\", SKU: MPL-2210, ships from 55401",
        );
        assert!(result.allowed);
        assert!(result.detections.is_empty());
    }

    #[test]
    fn test_detectors_run_on_stripped_text() {
        // ZIP stripped, phone kept: offsets must index the stripped string
        let result = analyze_content("From 55401, call 6125551234");
        assert!(!result.allowed);
        let phone = &result.high_confidence_detections[0];
        assert_eq!(phone.matched, "6125551234");
    }

    #[test]
    fn test_analysis_is_stable_across_calls() {
        let text = "reach me at gmail, or call 555-123-4567";
        let first = analyze_content(text);
        let second = analyze_content(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder_extra_whitelist_term() {
        let filter = ContentFilter::builder()
            .with_whitelist_terms(vec!["QB-5551234567"])
            .build();
        // Without the tenant code whitelisted this digit run reads as a phone
        let result = filter.analyze("quote QB-5551234567 accepted");
        assert!(result.allowed, "{:?}", result.detections);
    }

    #[test]
    fn test_builder_extra_intent_phrase() {
        let filter = ContentFilter::builder()
            .with_intent_phrases(vec!["find me on"])
            .build();
        let result = filter.analyze("Find me on the usual app");
        assert!(result.allowed);
        assert_eq!(result.medium_confidence_detections.len(), 1);
        assert_eq!(
            result.medium_confidence_detections[0].kind,
            DetectionKind::IntentPhrase
        );
    }

    #[test]
    fn test_blocked_message_single_category() {
        let result = analyze_content("call 555-123-4567");
        let message = blocked_content_message("Description", &result.high_confidence_detections);
        assert_eq!(
            message,
            "Your Description appears to contain a phone number and cannot be submitted."
        );
    }

    #[test]
    fn test_blocked_message_deduplicates_and_joins_with_or() {
        let result = analyze_content("call 555-123-4567 or 555-987-6543, mail a@b.com, www.c.com");
        let message = blocked_content_message("Message", &result.high_confidence_detections);
        assert_eq!(
            message,
            "Your Message appears to contain a phone number, email address or website URL \
             and cannot be submitted."
        );
    }

    #[test]
    fn test_blocked_message_two_categories() {
        let detections = vec![
            Detection::new(DetectionKind::Phone, Confidence::High, "5551234567", 0),
            Detection::new(DetectionKind::Email, Confidence::High, "a@b.com", 11),
        ];
        let message = blocked_content_message("Bio", &detections);
        assert_eq!(
            message,
            "Your Bio appears to contain a phone number or email address and cannot be submitted."
        );
    }

    #[test]
    fn test_result_round_trips_through_serde() {
        let result = analyze_content("email a@b.com");
        let json = serde_json::to_string(&result).unwrap();
        let back: ContentFilterResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
