//! Pure counter core: mutations, history-entry formatting, step coercion,
//! and the milestone/large-change predicates the UI watchers evaluate.
//!
//! Nothing in this module touches the browser, so the whole core is
//! exercised by native `cargo test`.

use std::fmt;

pub mod particles;

/// Thresholds for the derived visual effects.
pub mod thresholds {
    /// A nonzero count divisible by this value is a milestone.
    pub const MILESTONE_INTERVAL: i64 = 100;
    /// Minimum per-operation delta magnitude that triggers the bounce pulse.
    pub const LARGE_CHANGE: i64 = 50;
}

pub type Count = i64;

/// One completed counter mutation, carrying enough context to render its
/// history entry and to evaluate the post-mutation effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Incremented { step: i64, new_count: Count },
    Decremented { step: i64, new_count: Count },
    Reset { old_count: Count },
}

impl Mutation {
    pub fn increment(count: Count, step: i64) -> Self {
        Mutation::Incremented {
            step,
            new_count: count + step,
        }
    }

    pub fn decrement(count: Count, step: i64) -> Self {
        Mutation::Decremented {
            step,
            new_count: count - step,
        }
    }

    pub fn reset(count: Count) -> Self {
        Mutation::Reset { old_count: count }
    }

    /// Count value after this mutation is applied.
    pub fn new_count(&self) -> Count {
        match self {
            Mutation::Incremented { new_count, .. } | Mutation::Decremented { new_count, .. } => {
                *new_count
            }
            Mutation::Reset { .. } => 0,
        }
    }
}

// History entries are the Display form, so the exact wording lives in one place.
impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Incremented { step, new_count } => {
                write!(f, "Incremented by {}: {}", step, format_count(*new_count))
            }
            Mutation::Decremented { step, new_count } => {
                write!(f, "Decremented by {}: {}", step, format_count(*new_count))
            }
            Mutation::Reset { old_count } => {
                write!(f, "Reset from {} to 0", format_count(*old_count))
            }
        }
    }
}

/// Coerce raw step-field input to an effective step.
///
/// The magnitude of the parsed number wins, rounded to the nearest integer;
/// zero, unparsable, or non-finite input falls back to 1. Negative input is
/// therefore a valid way to type a step ("-5" steps by 5).
pub fn parse_step(raw: &str) -> i64 {
    let parsed: f64 = raw.trim().parse().unwrap_or(0.0);
    if !parsed.is_finite() {
        return 1;
    }
    let magnitude = parsed.abs().round();
    if magnitude < 1.0 {
        1
    } else {
        // `as` saturates, so absurdly large input clamps instead of wrapping
        magnitude as i64
    }
}

/// Format a count with thousands separators, e.g. `-1234567` → `"-1,234,567"`.
pub fn format_count(n: Count) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whether a count is a celebration milestone (nonzero multiple of 100,
/// negative multiples included).
#[inline]
pub fn is_milestone(count: Count) -> bool {
    count != 0 && count % thresholds::MILESTONE_INTERVAL == 0
}

/// Whether a per-operation delta is large enough to trigger the bounce pulse.
#[inline]
pub fn is_large_change(delta: i64) -> bool {
    delta.abs() >= thresholds::LARGE_CHANGE
}

/// Display color for a count: positive → green, negative → red, zero → blue,
/// with a lighter shade in dark mode for contrast.
pub fn counter_color(count: Count, dark_mode: bool) -> &'static str {
    if count > 0 {
        if dark_mode {
            "#81C784"
        } else {
            "#4CAF50"
        }
    } else if count < 0 {
        if dark_mode {
            "#E57373"
        } else {
            "#F44336"
        }
    } else if dark_mode {
        "#64B5F6"
    } else {
        "#2196F3"
    }
}
