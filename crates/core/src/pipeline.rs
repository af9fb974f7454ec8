//! Automation pipeline composition.
//!
//! A fixed six-step chain from ideation through publishing. Each step names
//! who drives it, the tool class to reach for, and a ready-to-paste prompt
//! interpolated from the generation input.

use serde::Serialize;

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_AUDIENCE, FALLBACK_CTA, FALLBACK_NICHE, FALLBACK_PERSONA, FALLBACK_VIBE};

/// One stage of producing the short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationStep {
    pub id: String,
    pub label: String,
    pub ownership: String,
    pub tool: String,
    pub prompt: String,
    pub notes: String,
}

impl AutomationStep {
    fn new(label: &str, ownership: &str, tool: &str, prompt: String, notes: String) -> Self {
        Self {
            id: text::slug(label),
            label: label.to_string(),
            ownership: ownership.to_string(),
            tool: tool.to_string(),
            prompt,
            notes,
        }
    }
}

/// Build the ideation-to-publishing pipeline for a normalized input.
pub fn build_pipeline(input: &GenerationInput) -> Vec<AutomationStep> {
    let topic = &input.topic;
    let niche = text::non_blank(&input.niche, FALLBACK_NICHE);
    let persona = text::non_blank(&input.persona, FALLBACK_PERSONA);
    let vibe = text::non_blank(&input.vibe, FALLBACK_VIBE);
    let audience = text::non_blank(&input.target_audience, FALLBACK_AUDIENCE);
    let cta = text::non_blank(&input.call_to_action, FALLBACK_CTA);
    let duration = input.duration;

    vec![
        AutomationStep::new(
            "Ideation",
            "AI agent",
            "LLM brainstorm session",
            format!(
                "List 10 hooks for a short about \"{topic}\" aimed at {audience}. \
                 Keep each under 12 words and rank them by scroll-stopping power."
            ),
            format!("Keep the winning angle native to {niche}."),
        ),
        AutomationStep::new(
            "Scripting",
            "AI agent",
            "LLM with this blueprint pasted as context",
            format!(
                "Write a {duration}-second script on \"{topic}\" in the voice of {persona}. \
                 One idea per sentence, hook first, no preamble."
            ),
            "Read it aloud once and cut anything you stumble on.".to_string(),
        ),
        AutomationStep::new(
            "Voiceover",
            "AI agent",
            "Neural text-to-speech",
            format!(
                "Narrate the script with a {vibe} read. Re-take the hook line until it snaps."
            ),
            "Export 48 kHz WAV; leave normalization to the edit.".to_string(),
        ),
        AutomationStep::new(
            "Visuals",
            "Creator + AI",
            "Image generation plus personal b-roll library",
            format!(
                "Generate b-roll matching the asset checklist for \"{topic}\". \
                 Favor motion over stills."
            ),
            "Three strong clips beat ten filler clips.".to_string(),
        ),
        AutomationStep::new(
            "Editing",
            "Creator",
            "Editor with the timeline blocks below as markers",
            "Assemble the five timeline blocks, then make one pass purely for pace: \
             every cut a beat earlier."
                .to_string(),
            format!("Total runtime must land on {duration}s exactly."),
        ),
        AutomationStep::new(
            "Publishing",
            "Creator",
            "Platform studio and scheduler",
            format!(
                "Use the publishing package below as written. Close every reply in the \
                 first hour with \"{cta}\"."
            ),
            "Upload at least two hours before the prime slot.".to_string(),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{normalize, RawGenerationInput};

    fn input() -> GenerationInput {
        normalize(RawGenerationInput {
            topic: Some("Automate your mornings".to_string()),
            persona: Some("Calm systems nerd".to_string()),
            ..RawGenerationInput::default()
        })
        .unwrap()
    }

    #[test]
    fn six_steps_in_fixed_order() {
        let labels: Vec<String> = build_pipeline(&input())
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(
            labels,
            [
                "Ideation",
                "Scripting",
                "Voiceover",
                "Visuals",
                "Editing",
                "Publishing"
            ]
        );
    }

    #[test]
    fn ids_are_slugs_of_labels() {
        for step in build_pipeline(&input()) {
            assert_eq!(step.id, crate::text::slug(&step.label));
        }
    }

    #[test]
    fn ideation_prompt_references_topic() {
        let steps = build_pipeline(&input());
        assert!(steps[0].prompt.contains("Automate your mornings"));
    }

    #[test]
    fn scripting_prompt_references_persona_and_duration() {
        let steps = build_pipeline(&input());
        assert!(steps[1].prompt.contains("Calm systems nerd"));
        assert!(steps[1].prompt.contains("55-second"));
    }

    #[test]
    fn blank_optional_fields_use_fallbacks() {
        let steps = build_pipeline(&input());
        // No call-to-action supplied, so the publishing prompt carries the
        // generic fallback instead of an empty quote.
        assert!(steps[5].prompt.contains(crate::text::FALLBACK_CTA));
    }

    #[test]
    fn every_step_fully_populated() {
        for step in build_pipeline(&input()) {
            assert!(!step.id.is_empty());
            assert!(!step.ownership.is_empty());
            assert!(!step.tool.is_empty());
            assert!(!step.prompt.is_empty());
            assert!(!step.notes.is_empty());
        }
    }
}
