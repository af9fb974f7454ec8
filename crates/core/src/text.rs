//! Shared text helpers and generic filler phrases.
//!
//! Optional input fields may be blank; composition substitutes these fixed
//! fallbacks so every section reads as finished copy. Keeping them in one
//! place keeps the wording consistent across sections.

// ---------------------------------------------------------------------------
// Fallback phrases
// ---------------------------------------------------------------------------

/// Used when `niche` is blank.
pub const FALLBACK_NICHE: &str = "short-form content";

/// Used when `persona` is blank.
pub const FALLBACK_PERSONA: &str = "a sharp, no-fluff creator";

/// Used when `vibe` is blank.
pub const FALLBACK_VIBE: &str = "punchy and upbeat";

/// Used when `targetAudience` is blank.
pub const FALLBACK_AUDIENCE: &str = "short-form creators";

/// Used when `callToAction` is blank.
pub const FALLBACK_CTA: &str = "Follow for the next one";

/// Return `value` unless it is blank after trimming, else `fallback`.
pub fn non_blank<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Derive a URL-safe slug from a label: lowercase, runs of non-alphanumeric
/// characters collapsed to single hyphens.
///
/// `"Call to Action"` becomes `"call-to-action"`.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_hyphen = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Format a second count as `m:ss` (`65` becomes `"1:05"`).
pub fn format_timestamp(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
