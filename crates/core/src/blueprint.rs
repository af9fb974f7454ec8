//! Blueprint assembly: the single entry point of the generation engine.
//!
//! [`generate`] is a pure, single-pass function: normalize the input,
//! allocate both timings, compose every section, merge. It holds no state,
//! reads no clock, and fails only on input validation, so identical input
//! always produces byte-identical output.

use serde::Serialize;

use crate::assets::{self, AssetChecklist};
use crate::audio::{self, AudioPlan};
use crate::editing::{self, EditingBlock};
use crate::error::CoreError;
use crate::input::{self, RawGenerationInput};
use crate::pipeline::{self, AutomationStep};
use crate::publishing::{self, Publishing};
use crate::qa;
use crate::segments::{self, ContentSegment};
use crate::text::{self, FALLBACK_AUDIENCE, FALLBACK_CTA, FALLBACK_PERSONA};
use crate::timing;

/// Human-readable synopsis of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Resolved runtime in seconds.
    pub runtime: u32,
    /// The hook segment's narration, surfaced for quick review.
    pub audience_hook: String,
    pub summary: String,
}

/// The full production blueprint for one short.
///
/// A value produced fresh per call; nothing in it is shared or mutated after
/// assembly. Field names are the wire contract: the rendering side
/// destructures them by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub metadata: Metadata,
    pub automation_pipeline: Vec<AutomationStep>,
    pub content_segments: Vec<ContentSegment>,
    pub audio_plan: AudioPlan,
    pub asset_checklist: AssetChecklist,
    pub editing_timeline: Vec<EditingBlock>,
    pub publishing: Publishing,
    pub qa_checklist: Vec<String>,
}

/// Generate a complete blueprint from a raw, partially-populated input.
///
/// The only failure mode is [`CoreError::Validation`] for a topic that is
/// empty after trimming; every other irregularity is defaulted or clamped
/// during normalization.
pub fn generate(raw: RawGenerationInput) -> Result<Blueprint, CoreError> {
    let input = input::normalize(raw)?;

    let segment_slots = timing::segment_slots(input.duration);
    let editing_slots = timing::editing_slots(input.duration);

    let content_segments = segments::build_segments(&input, &segment_slots);
    let audience_hook = content_segments
        .first()
        .map(|segment| segment.narration.clone())
        .unwrap_or_default();

    let persona = text::non_blank(&input.persona, FALLBACK_PERSONA);
    let audience = text::non_blank(&input.target_audience, FALLBACK_AUDIENCE);
    let cta = text::non_blank(&input.call_to_action, FALLBACK_CTA);
    let summary = format!(
        "A {}s short where {persona} walks {audience} through {}, closing on \"{cta}\".",
        input.duration, input.topic
    );

    Ok(Blueprint {
        metadata: Metadata {
            runtime: input.duration,
            audience_hook,
            summary,
        },
        automation_pipeline: pipeline::build_pipeline(&input),
        content_segments,
        audio_plan: audio::build_audio_plan(&input, &segment_slots),
        asset_checklist: assets::build_asset_checklist(&input),
        editing_timeline: editing::build_editing_timeline(&input, &editing_slots),
        publishing: publishing::build_publishing(&input),
        qa_checklist: qa::build_qa_checklist(&input),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MAX_DURATION_SECS, MIN_DURATION_SECS};

    fn raw(topic: &str) -> RawGenerationInput {
        RawGenerationInput {
            topic: Some(topic.to_string()),
            ..RawGenerationInput::default()
        }
    }

    fn full_raw() -> RawGenerationInput {
        RawGenerationInput {
            topic: Some("Automate your mornings".to_string()),
            niche: Some("Creator systems".to_string()),
            persona: Some("High-energy strategist".to_string()),
            vibe: Some("Punchy, kinetic".to_string()),
            target_audience: Some("Solo creators".to_string()),
            call_to_action: Some("Follow for more".to_string()),
            duration: Some(48),
        }
    }

    // -- validation --

    #[test]
    fn empty_topic_fails() {
        assert!(generate(raw("")).is_err());
    }

    #[test]
    fn whitespace_topic_fails() {
        assert!(generate(raw("   ")).is_err());
    }

    #[test]
    fn minimal_topic_succeeds() {
        assert!(generate(raw("x")).is_ok());
    }

    // -- duration clamping --

    #[test]
    fn low_duration_clamps_to_minimum() {
        let mut input = raw("x");
        input.duration = Some(10);
        assert_eq!(generate(input).unwrap().metadata.runtime, MIN_DURATION_SECS);
    }

    #[test]
    fn high_duration_clamps_to_maximum() {
        let mut input = raw("x");
        input.duration = Some(999);
        assert_eq!(generate(input).unwrap().metadata.runtime, MAX_DURATION_SECS);
    }

    #[test]
    fn absent_duration_uses_default() {
        assert_eq!(generate(raw("x")).unwrap().metadata.runtime, 55);
    }

    // -- determinism --

    #[test]
    fn identical_input_identical_blueprint() {
        let a = generate(full_raw()).unwrap();
        let b = generate(full_raw()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn identical_input_identical_json_bytes() {
        let a = serde_json::to_string(&generate(full_raw()).unwrap()).unwrap();
        let b = serde_json::to_string(&generate(full_raw()).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    // -- tiling closure across the whole valid range --

    #[test]
    fn segment_tiling_closes_for_every_duration() {
        for duration in MIN_DURATION_SECS..=MAX_DURATION_SECS {
            let mut input = full_raw();
            input.duration = Some(i64::from(duration));
            let blueprint = generate(input).unwrap();

            let total: u32 = blueprint.content_segments.iter().map(|s| s.duration).sum();
            assert_eq!(total, blueprint.metadata.runtime);

            let mut cursor = 0;
            for segment in &blueprint.content_segments {
                assert_eq!(segment.timestamp, cursor, "segments must not gap or overlap");
                assert!(segment.duration > 0);
                cursor += segment.duration;
            }
        }
    }

    #[test]
    fn editing_tiling_closes_for_every_duration() {
        for duration in MIN_DURATION_SECS..=MAX_DURATION_SECS {
            let mut input = full_raw();
            input.duration = Some(i64::from(duration));
            let blueprint = generate(input).unwrap();

            let timeline = &blueprint.editing_timeline;
            assert_eq!(timeline[0].start, 0);
            assert_eq!(timeline[timeline.len() - 1].end, blueprint.metadata.runtime);
            for pair in timeline.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    // -- metadata --

    #[test]
    fn audience_hook_is_hook_narration() {
        let blueprint = generate(full_raw()).unwrap();
        assert_eq!(
            blueprint.metadata.audience_hook,
            blueprint.content_segments[0].narration
        );
    }

    #[test]
    fn summary_references_persona_audience_and_cta() {
        let blueprint = generate(full_raw()).unwrap();
        assert!(blueprint.metadata.summary.contains("High-energy strategist"));
        assert!(blueprint.metadata.summary.contains("Solo creators"));
        assert!(blueprint.metadata.summary.contains("Follow for more"));
    }

    // -- traceability --

    #[test]
    fn publishing_traces_topic_and_cta() {
        let blueprint = generate(full_raw()).unwrap();
        for field in [&blueprint.publishing.title, &blueprint.publishing.description] {
            assert!(field.contains("Automate your mornings"));
            assert!(field.contains("Follow for more"));
        }
    }

    // -- non-empty lists with fully blank optional input --

    #[test]
    fn derived_lists_non_empty_with_blank_optionals() {
        let blueprint = generate(raw("x")).unwrap();
        assert!(!blueprint.automation_pipeline.is_empty());
        assert!(!blueprint.content_segments.is_empty());
        assert!(!blueprint.asset_checklist.color_palette.is_empty());
        assert!(!blueprint.asset_checklist.fonts.is_empty());
        assert!(!blueprint.asset_checklist.overlays.is_empty());
        assert!(!blueprint.asset_checklist.broll_prompts.is_empty());
        assert!(!blueprint.asset_checklist.sfx_library.is_empty());
        assert!(!blueprint.editing_timeline.is_empty());
        assert!(!blueprint.publishing.hashtags.is_empty());
        assert!(!blueprint.qa_checklist.is_empty());
    }

    // -- hashtag shape on the assembled output --

    #[test]
    fn hashtags_match_shape_and_are_unique() {
        let blueprint = generate(full_raw()).unwrap();
        let tags = &blueprint.publishing.hashtags;
        for tag in tags {
            let body = tag.strip_prefix('#').expect("tag must start with #");
            assert!(body
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
            assert!(!body.is_empty());
        }
        let unique: std::collections::HashSet<&String> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len(), "hashtags must be unique");
    }

    // -- wire field names --

    #[test]
    fn serializes_with_camel_case_contract_names() {
        let value = serde_json::to_value(generate(full_raw()).unwrap()).unwrap();
        assert!(value.get("automationPipeline").is_some());
        assert!(value.get("contentSegments").is_some());
        assert!(value.get("audioPlan").is_some());
        assert!(value.get("assetChecklist").is_some());
        assert!(value.get("editingTimeline").is_some());
        assert!(value.get("publishing").is_some());
        assert!(value.get("qaChecklist").is_some());
        assert!(value["metadata"].get("audienceHook").is_some());
        assert!(value["contentSegments"][0].get("onScreenText").is_some());
        assert!(value["audioPlan"].get("voiceProfile").is_some());
        assert!(value["assetChecklist"].get("brollPrompts").is_some());
        assert!(value["editingTimeline"][0].get("shotType").is_some());
        assert!(value["publishing"].get("thumbnailConcept").is_some());
    }
}
