//! Timing allocation: two independent integer-second tilings of the runtime.
//!
//! The segment tiling drives the script (hook, setup, payoff, call to
//! action); the editing tiling drives editor markers and need not align with
//! it. Both are built from fixed percentage weights so identical input always
//! yields identical boundaries: each slot gets the floor of its share and the
//! final slot absorbs the integer-division remainder, so the last `end`
//! always equals the runtime exactly.

// ---------------------------------------------------------------------------
// Weight tables
// ---------------------------------------------------------------------------

/// Script phases with their percentage weights. Weights sum to 100.
///
/// The hook and the call to action get deliberately small fixed shares; the
/// middle phases carry the body of the short.
pub const SEGMENT_PHASES: [(&str, u32); 4] = [
    ("Hook", 15),
    ("Setup", 40),
    ("Payoff", 30),
    ("Call to Action", 15),
];

/// Editing blocks with their percentage weights. Weights sum to 100.
pub const EDITING_BLOCKS: [(&str, u32); 5] = [
    ("Cold Open", 10),
    ("Context", 25),
    ("Proof", 30),
    ("Momentum", 20),
    ("Outro Card", 15),
];

// ---------------------------------------------------------------------------
// Time slots
// ---------------------------------------------------------------------------

/// One contiguous slot of a tiling: `[start, end)` in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: &'static str,
    pub start: u32,
    pub end: u32,
}

impl TimeSlot {
    /// Slot length in seconds.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// Tile `[0, duration]` across `N` weighted slots.
///
/// Slot `i` starts at the sum of the floored shares before it; every slot but
/// the last spans its own floored share, and the last slot runs to `duration`.
/// With the weight tables above and durations of 35 s or more, every slot is
/// at least 1 s wide.
fn tile<const N: usize>(duration: u32, weights: &[(&'static str, u32); N]) -> [TimeSlot; N] {
    std::array::from_fn(|i| {
        let start: u32 = weights[..i].iter().map(|(_, w)| duration * w / 100).sum();
        let end = if i == N - 1 {
            duration
        } else {
            start + duration * weights[i].1 / 100
        };
        TimeSlot {
            label: weights[i].0,
            start,
            end,
        }
    })
}

/// The script-phase tiling for a resolved runtime.
pub fn segment_slots(duration: u32) -> [TimeSlot; SEGMENT_PHASES.len()] {
    tile(duration, &SEGMENT_PHASES)
}

/// The editing-block tiling for a resolved runtime.
pub fn editing_slots(duration: u32) -> [TimeSlot; EDITING_BLOCKS.len()] {
    tile(duration, &EDITING_BLOCKS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
