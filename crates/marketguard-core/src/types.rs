use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Categories of contact-information leakage the filter recognizes.
///
/// Design principles:
/// - Only categories with a fixed lexical/regex signature (English-only)
/// - Excludes anything requiring language understanding
/// - No heap allocations in enum (all variants are `Copy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    Phone,
    Email,
    Url,
    SocialHandle,
    EmailSubstitution, // "name at domain dot com" obfuscation
    IntentPhrase,      // "call me at", "reach me at", ...
}

impl DetectionKind {
    /// Human-readable category label used in blocked-submission messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "phone number",
            Self::Email => "email address",
            Self::Url => "website URL",
            Self::SocialHandle => "social media handle",
            Self::EmailSubstitution => "email address",
            Self::IntentPhrase => "contact request",
        }
    }
}

/// How strong a detection is, and therefore what it is allowed to do.
///
/// `High` blocks the submission outright. `Medium` is a review signal only
/// and never affects whether content is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
}

/// A single pattern hit with memory safety guarantees.
///
/// `index` is a UTF-8 byte offset into the *stripped* text the detectors ran
/// on, NOT the original input; whitelist stripping rewrites the string before
/// any scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: DetectionKind,
    pub confidence: Confidence,
    /// The offending substring – will be zeroized on drop
    pub matched: String,
    pub index: usize,
}

impl Detection {
    pub(crate) fn new(
        kind: DetectionKind,
        confidence: Confidence,
        matched: &str,
        index: usize,
    ) -> Self {
        Self {
            kind,
            confidence,
            matched: matched.to_string(),
            index,
        }
    }
}

impl Zeroize for Detection {
    fn zeroize(&mut self) {
        self.matched.zeroize();
    }
}

impl Drop for Detection {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Outcome of running the full filter pipeline over one piece of content.
///
/// Invariant: `allowed == high_confidence_detections.is_empty()`. Medium
/// detections ride along for moderation review but never flip `allowed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFilterResult {
    pub allowed: bool,
    pub detections: Vec<Detection>,
    pub high_confidence_detections: Vec<Detection>,
    pub medium_confidence_detections: Vec<Detection>,
}
