//! Editing timeline composition: editor markers over the editing tiling.
//!
//! The blocks tile the same runtime as the content segments but are cut for
//! the editor's workflow rather than the script, so the boundaries need not
//! line up.

use serde::Serialize;

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_AUDIENCE, FALLBACK_CTA};
use crate::timing::{TimeSlot, EDITING_BLOCKS};

/// One editor marker block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingBlock {
    pub label: String,
    pub start: u32,
    pub end: u32,
    pub instructions: String,
    pub shot_type: String,
    pub overlay: String,
}

fn block(slot: &TimeSlot, instructions: String, shot_type: &str, overlay: String) -> EditingBlock {
    EditingBlock {
        label: slot.label.to_string(),
        start: slot.start,
        end: slot.end,
        instructions,
        shot_type: shot_type.to_string(),
        overlay,
    }
}

/// Build the five editor blocks from the normalized input and the editing
/// tiling.
pub fn build_editing_timeline(
    input: &GenerationInput,
    slots: &[TimeSlot; EDITING_BLOCKS.len()],
) -> Vec<EditingBlock> {
    let [cold_open, context, proof, momentum, outro] = slots;

    let topic = &input.topic;
    let audience = text::non_blank(&input.target_audience, FALLBACK_AUDIENCE);
    let cta = text::non_blank(&input.call_to_action, FALLBACK_CTA);

    vec![
        block(
            cold_open,
            format!("Open mid-action. The first frame must sell \"{topic}\" without sound."),
            "Extreme close-up, direct address",
            "Oversized hook text, top third".to_string(),
        ),
        block(
            context,
            format!("Lay out the problem {audience} actually have. Trim every pause."),
            "Medium talking head with inserts",
            "Word-by-word captions".to_string(),
        ),
        block(
            proof,
            format!("Show {topic} working on screen. Real footage beats stock."),
            "Screen capture with picture-in-picture",
            "Step counter badge (1/3, 2/3, 3/3)".to_string(),
        ),
        block(
            momentum,
            "Quickfire recap of the three moves, one beat each.".to_string(),
            "Jump cuts, alternating angles",
            "Checklist ticks animating in".to_string(),
        ),
        block(
            outro,
            format!("Hold the end card for the whole block so \"{cta}\" lands."),
            "Static end card",
            "Handle, CTA text, next-video thumbnail".to_string(),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
