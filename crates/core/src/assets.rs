//! Asset checklist composition: palette, fonts, overlays, b-roll prompts,
//! and sound effects.
//!
//! Palette and font pairing are selected from fixed tables by a SHA-256
//! digest of the topic and vibe. The digest makes the choice feel tailored to
//! the input while staying byte-identical across runs, builds, and platforms,
//! which `std`'s hashers do not guarantee.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::input::GenerationInput;
use crate::text::{self, FALLBACK_NICHE, FALLBACK_VIBE};

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

/// Candidate color palettes (hex plus a working name per swatch).
const PALETTES: [&[&str]; 5] = [
    &["#0EA5E9 electric sky", "#0F172A ink", "#F8FAFC paper", "#F59E0B amber pop"],
    &["#8B5CF6 voltage violet", "#111827 charcoal", "#F9FAFB chalk", "#22D3EE cyan edge"],
    &["#10B981 signal green", "#052E16 deep moss", "#ECFDF5 mint paper", "#FACC15 highlight"],
    &["#F43F5E flare red", "#1E1B4B midnight", "#FFF1F2 blush paper", "#38BDF8 cool accent"],
    &["#F97316 ember", "#0C0A09 soot", "#FAFAF9 bone", "#A3E635 lime kick"],
];

/// Candidate font pairings (display face + caption face).
const FONT_PAIRINGS: [&[&str]; 4] = [
    &["Archivo Black (display)", "Inter (captions)"],
    &["Bebas Neue (display)", "Work Sans (captions)"],
    &["Space Grotesk (display)", "IBM Plex Sans (captions)"],
    &["Anton (display)", "Manrope (captions)"],
];

/// The checklist of visual and sound assets to produce before the edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetChecklist {
    pub color_palette: Vec<String>,
    pub fonts: Vec<String>,
    pub overlays: Vec<String>,
    pub broll_prompts: Vec<String>,
    pub sfx_library: Vec<String>,
}

// ---------------------------------------------------------------------------
// Deterministic selection
// ---------------------------------------------------------------------------

/// Pick an entry from `table` by hashing the topic, vibe, and a per-table
/// salt. The salt keeps the palette and font choices independent of each
/// other for the same input.
fn pick<'a>(table: &'a [&'a [&'a str]], input: &GenerationInput, salt: &str) -> &'a [&'a str] {
    let mut hasher = Sha256::new();
    hasher.update(input.topic.as_bytes());
    hasher.update([0x1f]);
    hasher.update(input.vibe.as_bytes());
    hasher.update([0x1f]);
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    let index = u16::from_be_bytes([digest[0], digest[1]]) as usize % table.len();
    table[index]
}

/// Build the asset checklist for a normalized input.
pub fn build_asset_checklist(input: &GenerationInput) -> AssetChecklist {
    let topic = &input.topic;
    let niche = text::non_blank(&input.niche, FALLBACK_NICHE);
    let vibe = text::non_blank(&input.vibe, FALLBACK_VIBE);

    let to_strings = |entries: &[&str]| entries.iter().map(|s| s.to_string()).collect();

    AssetChecklist {
        color_palette: to_strings(pick(&PALETTES, input, "palette")),
        fonts: to_strings(pick(&FONT_PAIRINGS, input, "fonts")),
        overlays: vec![
            "Word-by-word caption track, bottom third".to_string(),
            format!("Progress bar across the full {}s runtime", input.duration),
            format!("Corner badge: {niche}"),
        ],
        broll_prompts: vec![
            format!("Macro shot of hands working through {topic}, shallow depth"),
            format!("Overhead desk scene that says {niche} at a glance, {vibe} grade"),
            format!("Screen capture of the result of {topic}, cursor visible"),
        ],
        sfx_library: vec![
            "Whoosh for every transition".to_string(),
            "Soft keyboard clicks under screen captures".to_string(),
            "Riser into the payoff".to_string(),
            "Pop on each on-screen keyword".to_string(),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
