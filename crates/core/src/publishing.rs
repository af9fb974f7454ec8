//! Publishing package composition: title, description, hashtags, schedule,
//! and thumbnail concept.
//!
//! The title and description always carry the topic and the call to action
//! verbatim so the published metadata traces back to the request. Hashtags
//! are derived from the niche and topic, with a fixed stop-word list and a
//! hard cap; the stop-word list and the cap are part of the output contract
//! and must not change silently between releases.

use serde::Serialize;

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_AUDIENCE, FALLBACK_CTA, FALLBACK_PERSONA, FALLBACK_VIBE};

// ---------------------------------------------------------------------------
// Hashtag derivation constants
// ---------------------------------------------------------------------------

/// Maximum number of hashtags in the published list.
pub const MAX_HASHTAGS: usize = 8;

/// Platform tag appended after the derived tags (also guarantees the list is
/// never empty when the niche and topic are all stop-words).
const PLATFORM_TAG: &str = "#shorts";

/// Tokens dropped during hashtag derivation. Frozen: changing it changes
/// published output for existing inputs.
const STOP_WORDS: [&str; 29] = [
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "how", "in", "into",
    "is", "it", "my", "of", "on", "or", "our", "so", "that", "the", "this", "to", "with", "you",
    "your",
];

/// The ready-to-paste publishing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publishing {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub schedule: String,
    pub thumbnail_concept: String,
}

// ---------------------------------------------------------------------------
// Hashtag derivation
// ---------------------------------------------------------------------------

/// Derive hashtags from the niche and topic.
///
/// Tokenizes on anything that is not ASCII alphanumeric, lowercases, drops
/// stop-words, prefixes `#`, dedupes preserving first occurrence, caps the
/// derived tags at [`MAX_HASHTAGS`]` - 1`, then appends the platform tag.
pub fn derive_hashtags(niche: &str, topic: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    let tokens = format!("{niche} {topic}");
    for token in tokens.split(|c: char| !c.is_ascii_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        let lowered = token.to_ascii_lowercase();
        if STOP_WORDS.contains(&lowered.as_str()) {
            continue;
        }
        let tag = format!("#{lowered}");
        if !tags.contains(&tag) {
            tags.push(tag);
        }
        if tags.len() == MAX_HASHTAGS - 1 {
            break;
        }
    }

    if !tags.contains(&PLATFORM_TAG.to_string()) {
        tags.push(PLATFORM_TAG.to_string());
    }
    tags
}

// ---------------------------------------------------------------------------
// Package composition
// ---------------------------------------------------------------------------

/// Build the publishing package for a normalized input.
pub fn build_publishing(input: &GenerationInput) -> Publishing {
    let topic = &input.topic;
    let persona = text::non_blank(&input.persona, FALLBACK_PERSONA);
    let vibe = text::non_blank(&input.vibe, FALLBACK_VIBE);
    let audience = text::non_blank(&input.target_audience, FALLBACK_AUDIENCE);
    let cta = text::non_blank(&input.call_to_action, FALLBACK_CTA);

    Publishing {
        title: format!("{topic} | {cta}"),
        description: format!(
            "{persona} breaks down {topic} for {audience}.\n\n\
             Inside:\n\
             - The hook that earns the first 3 seconds\n\
             - The three moves behind the payoff\n\
             - The exact timeline markers used in the edit\n\n\
             {cta}"
        ),
        hashtags: derive_hashtags(&input.niche, topic),
        schedule: format!(
            "Publish within 24 hours of export; prime windows are 11:00 and 19:00 \
             wherever {audience} actually scroll."
        ),
        thumbnail_concept: format!(
            "High-contrast close-up, a three-word promise pulled from \"{topic}\", \
             {vibe} color grade"
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
