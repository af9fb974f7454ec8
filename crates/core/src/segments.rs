//! Content segment composition: the timed script beats of the short.
//!
//! One segment per script phase. Narration, on-screen text, visuals, motion,
//! and sound design are all templated from the normalized input; the hook
//! always foregrounds the topic and the final segment closes on the call to
//! action. Timestamps come straight from the segment tiling, so ordering and
//! closure hold by construction.

use serde::Serialize;

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_AUDIENCE, FALLBACK_CTA, FALLBACK_NICHE, FALLBACK_PERSONA};
use crate::timing::{TimeSlot, SEGMENT_PHASES};

/// One timed script beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSegment {
    pub id: String,
    pub label: String,
    /// Start offset in whole seconds from the top of the short.
    pub timestamp: u32,
    /// Length in whole seconds.
    pub duration: u32,
    pub narration: String,
    pub on_screen_text: Vec<String>,
    pub visuals: Vec<String>,
    pub motion: String,
    pub sound_design: String,
}

fn segment(slot: &TimeSlot, narration: String, on_screen: Vec<String>, visuals: Vec<String>, motion: &str, sound: &str) -> ContentSegment {
    ContentSegment {
        id: text::slug(slot.label),
        label: slot.label.to_string(),
        timestamp: slot.start,
        duration: slot.duration(),
        narration,
        on_screen_text: on_screen,
        visuals,
        motion: motion.to_string(),
        sound_design: sound.to_string(),
    }
}

/// Build the four script segments from the normalized input and the segment
/// tiling.
pub fn build_segments(
    input: &GenerationInput,
    slots: &[TimeSlot; SEGMENT_PHASES.len()],
) -> Vec<ContentSegment> {
    let [hook, setup, payoff, cta_slot] = slots;

    let topic = &input.topic;
    let niche = text::non_blank(&input.niche, FALLBACK_NICHE);
    let persona = text::non_blank(&input.persona, FALLBACK_PERSONA);
    let audience = text::non_blank(&input.target_audience, FALLBACK_AUDIENCE);
    let cta = text::non_blank(&input.call_to_action, FALLBACK_CTA);

    vec![
        segment(
            hook,
            format!(
                "Stop scrolling: {topic}. Give me {} seconds and you can copy it.",
                input.duration
            ),
            vec![
                topic.to_uppercase(),
                format!("{}s, no fluff", input.duration),
            ],
            vec![
                format!("Fast push-in on {persona} mid-sentence"),
                format!("Flash-cut montage teasing the payoff of {topic}"),
            ],
            "Hard cut every 0.8s with a 2% punch-in on each beat",
            "Music enters at full energy, bass hit on the first word",
        ),
        segment(
            setup,
            format!(
                "Here is the setup for {audience}: {topic} comes down to three moves \
                 you can steal today."
            ),
            vec!["THE SETUP".to_string(), format!("Built for {audience}")],
            vec![
                format!("Screen recording walking through {topic}"),
                format!("Cutaway b-roll from the {niche} world"),
            ],
            "Steady center framing, captions revealed word by word",
            "Music ducks 6 dB under the voice",
        ),
        segment(
            payoff,
            format!(
                "The payoff: stack those three moves back to back and {topic} runs \
                 itself. That is the whole trick."
            ),
            vec!["THE PAYOFF".to_string(), "Screenshot this".to_string()],
            vec![
                format!("Before-and-after split showing {topic} in action"),
                "Tight insert shots of each result landing".to_string(),
            ],
            "Slow 4% zoom while the results land, freeze on the reveal",
            "Riser into the reveal, then one clean hit",
        ),
        segment(
            cta_slot,
            format!("Want the full system? {cta}."),
            vec![cta.to_string(), format!("More from {niche}")],
            vec![
                "Direct-to-camera close-up".to_string(),
                "End card with handle and next-video thumbnail".to_string(),
            ],
            "Static frame with an oversized caption pop",
            "Music resolves into a subtle outro swell",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
