//! QA checklist composition: the final gate before publishing.

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_AUDIENCE, FALLBACK_CTA, FALLBACK_NICHE};

/// Build the pre-publish checklist: fixed platform checks plus checks
/// parameterized by the resolved runtime and call to action.
pub fn build_qa_checklist(input: &GenerationInput) -> Vec<String> {
    let niche = text::non_blank(&input.niche, FALLBACK_NICHE);
    let audience = text::non_blank(&input.target_audience, FALLBACK_AUDIENCE);
    let cta = text::non_blank(&input.call_to_action, FALLBACK_CTA);

    vec![
        "Vertical 9:16 at 1080x1920 with title-safe margins respected".to_string(),
        "Captions match the voiceover word for word".to_string(),
        "Loudness normalized to -14 LUFS with no clipping on the hook".to_string(),
        "Hook text readable without sound inside the first 2 seconds".to_string(),
        format!("Runtime is exactly {}s end to end", input.duration),
        format!("Call to action \"{cta}\" is both spoken and shown on screen"),
        format!("Opening frame makes sense to {audience} with zero context"),
        format!("Hashtags sanity-checked against current {niche} trends"),
    ]
}
