//! Audio direction: voice profile, pacing, emphasis beats, and music prompt.

use serde::Serialize;

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_PERSONA, FALLBACK_VIBE};
use crate::timing::{TimeSlot, SEGMENT_PHASES};

/// Tone directives for the voiceover and music stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlan {
    pub voice_profile: String,
    pub pacing: String,
    pub emphasis_beats: Vec<String>,
    pub music_prompt: String,
}

/// Pacing directive for a resolved runtime. Shorter runtimes read faster.
fn pacing_for(duration: u32) -> String {
    let directive = if duration <= 44 {
        "Rapid: ~170 wpm, trim every pause under 250 ms"
    } else if duration <= 55 {
        "Brisk: ~155 wpm with micro-pauses on beat changes"
    } else {
        "Measured: ~140 wpm, let the payoff breathe"
    };
    directive.to_string()
}

/// Build the audio plan from the normalized input and the segment tiling.
///
/// Emphasis beats are pinned to the tiling so the voice read and the edit
/// agree on where the energy shifts.
pub fn build_audio_plan(
    input: &GenerationInput,
    slots: &[TimeSlot; SEGMENT_PHASES.len()],
) -> AudioPlan {
    let persona = text::non_blank(&input.persona, FALLBACK_PERSONA);
    let vibe = text::non_blank(&input.vibe, FALLBACK_VIBE);
    let [_, _, payoff, cta] = slots;

    AudioPlan {
        voice_profile: format!("{persona}; close-mic, conversational, {vibe} delivery"),
        pacing: pacing_for(input.duration),
        emphasis_beats: vec![
            "Punch the first word of the hook at 0s".to_string(),
            format!("Lift the energy into the payoff at {}s", payoff.start),
            format!(
                "Drop to a single instrument for the call to action at {}s",
                cta.start
            ),
        ],
        music_prompt: format!(
            "Instrumental, {vibe}, no vocals, a {} loop that builds into the payoff \
             and resolves on the outro",
            text::format_timestamp(input.duration)
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
