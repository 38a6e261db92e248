//! Validation adapter – plugs the content filter into field validators.
//!
//! The factory is the only place a filter failure becomes an error. Callers
//! at the request boundary must surface the error as a rejected submission;
//! a silent strip-and-continue would defeat the blocking contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::filter::{analyze_content, blocked_content_message};
use crate::types::Detection;

/// Structured rejection for a field that contains blocking contact info.
///
/// Carries the high-confidence detections so the caller can write its own
/// violation audit record; this crate never persists them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ContactInfoViolation {
    pub field_label: String,
    pub message: String,
    pub detections: Vec<Detection>,
}

/// Validator for one user-facing field, produced by [`no_contact_info`].
#[derive(Debug, Clone)]
pub struct ContactInfoValidator {
    field_label: String,
}

impl ContactInfoValidator {
    /// The label violations are attributed to.
    pub fn field_label(&self) -> &str {
        &self.field_label
    }

    /// Accept or reject one field value.
    ///
    /// Medium-confidence hits pass silently; they are emitted as a `warn`
    /// event for the moderation channel and otherwise dropped here.
    pub fn validate(&self, text: &str) -> Result<(), ContactInfoViolation> {
        let result = analyze_content(text);

        if !result.medium_confidence_detections.is_empty() {
            let kinds: Vec<_> = result
                .medium_confidence_detections
                .iter()
                .map(|d| d.kind)
                .collect();
            // Kinds only – the matched strings are the PII we're containing
            warn!(
                field = %self.field_label,
                ?kinds,
                "contact signals routed to review"
            );
        }

        if result.allowed {
            return Ok(());
        }

        let message =
            blocked_content_message(&self.field_label, &result.high_confidence_detections);
        Err(ContactInfoViolation {
            field_label: self.field_label.clone(),
            message,
            detections: result.high_confidence_detections,
        })
    }
}

/// Factory: a reusable "no contact info" rule for the named field.
pub fn no_contact_info(field_label: impl Into<String>) -> ContactInfoValidator {
    ContactInfoValidator {
        field_label: field_label.into(),
    }
}
