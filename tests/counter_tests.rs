//! Tests for the pure counter core: mutations, history entries, step
//! coercion, formatting, and the effect predicates.

use ultimate_counter::{
    counter_color, format_count, is_large_change, is_milestone, parse_step, thresholds, Mutation,
};

/// Drive a mutation the way the widget does: append its history entry, then
/// take its resulting count.
fn apply(count: &mut i64, history: &mut Vec<String>, mutation: Mutation) {
    history.push(mutation.to_string());
    *count = mutation.new_count();
}

// === Mutation arithmetic ===

#[test]
fn increment_adds_step() {
    assert_eq!(Mutation::increment(0, 1).new_count(), 1);
    assert_eq!(Mutation::increment(95, 5).new_count(), 100);
    assert_eq!(Mutation::increment(-3, 7).new_count(), 4);
}

#[test]
fn decrement_subtracts_step() {
    assert_eq!(Mutation::decrement(0, 1).new_count(), -1);
    assert_eq!(Mutation::decrement(11, 10).new_count(), 1);
}

#[test]
fn reset_always_lands_on_zero() {
    assert_eq!(Mutation::reset(1).new_count(), 0);
    assert_eq!(Mutation::reset(-42).new_count(), 0);
    assert_eq!(Mutation::reset(0).new_count(), 0);
}

#[test]
fn count_is_signed_sum_of_contributions() {
    let mut count = 0;
    let mut history = Vec::new();
    let ops: &[(bool, i64)] = &[
        (true, 1),
        (true, 10),
        (false, 4),
        (true, 25),
        (false, 100),
        (true, 3),
    ];
    let mut expected = 0;
    for &(up, step) in ops {
        let mutation = if up {
            Mutation::increment(count, step)
        } else {
            Mutation::decrement(count, step)
        };
        apply(&mut count, &mut history, mutation);
        expected += if up { step } else { -step };
    }
    assert_eq!(count, expected);
    assert_eq!(history.len(), ops.len());
}

// === History entries ===

#[test]
fn history_entries_describe_each_mutation() {
    assert_eq!(Mutation::increment(0, 1).to_string(), "Incremented by 1: 1");
    assert_eq!(
        Mutation::increment(1, 10).to_string(),
        "Incremented by 10: 11"
    );
    assert_eq!(
        Mutation::decrement(11, 10).to_string(),
        "Decremented by 10: 1"
    );
    assert_eq!(Mutation::reset(1).to_string(), "Reset from 1 to 0");
}

#[test]
fn history_entries_use_thousands_separators() {
    assert_eq!(
        Mutation::increment(0, 1_000_000).to_string(),
        "Incremented by 1000000: 1,000,000"
    );
    assert_eq!(
        Mutation::reset(-1234).to_string(),
        "Reset from -1,234 to 0"
    );
}

#[test]
fn reset_entry_records_the_count_before_reset() {
    let mut count = 0;
    let mut history = Vec::new();
    let m = Mutation::increment(count, 1);
    apply(&mut count, &mut history, m);
    let m = Mutation::increment(count, 10);
    apply(&mut count, &mut history, m);
    let m = Mutation::decrement(count, 10);
    apply(&mut count, &mut history, m);
    let m = Mutation::reset(count);
    apply(&mut count, &mut history, m);

    assert_eq!(count, 0);
    assert_eq!(
        history,
        vec![
            "Incremented by 1: 1",
            "Incremented by 10: 11",
            "Decremented by 10: 1",
            "Reset from 1 to 0",
        ]
    );
}

// === Step coercion ===

#[test]
fn parse_step_accepts_positive_integers() {
    assert_eq!(parse_step("1"), 1);
    assert_eq!(parse_step("10"), 10);
    assert_eq!(parse_step("  7 "), 7);
}

#[test]
fn parse_step_takes_the_magnitude_of_negative_input() {
    assert_eq!(parse_step("-5"), 5);
    assert_eq!(parse_step("-1"), 1);
}

#[test]
fn parse_step_coerces_zero_and_garbage_to_one() {
    assert_eq!(parse_step("0"), 1);
    assert_eq!(parse_step("-0"), 1);
    assert_eq!(parse_step(""), 1);
    assert_eq!(parse_step("abc"), 1);
    assert_eq!(parse_step("1x"), 1);
    assert_eq!(parse_step("NaN"), 1);
    assert_eq!(parse_step("inf"), 1);
}

#[test]
fn parse_step_rounds_fractional_magnitudes() {
    assert_eq!(parse_step("2.7"), 3);
    assert_eq!(parse_step("2.2"), 2);
    assert_eq!(parse_step("0.4"), 1);
    assert_eq!(parse_step("-0.9"), 1);
}

// === Count formatting ===

#[test]
fn format_count_groups_digits_in_threes() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn format_count_keeps_the_sign() {
    assert_eq!(format_count(-1), "-1");
    assert_eq!(format_count(-1_234), "-1,234");
    assert_eq!(format_count(-1_000_000), "-1,000,000");
}

// === Effect predicates ===

#[test]
fn milestones_are_nonzero_multiples_of_the_interval() {
    assert!(!is_milestone(0));
    assert!(is_milestone(thresholds::MILESTONE_INTERVAL));
    assert!(is_milestone(300));
    assert!(is_milestone(-200));
    assert!(!is_milestone(150));
    assert!(!is_milestone(60));
}

#[test]
fn large_changes_meet_the_delta_threshold() {
    assert!(!is_large_change(0));
    assert!(!is_large_change(thresholds::LARGE_CHANGE - 1));
    assert!(is_large_change(thresholds::LARGE_CHANGE));
    assert!(is_large_change(60));
    assert!(is_large_change(-60));
}

#[test]
fn reaching_a_milestone_with_a_small_step_does_not_bounce() {
    let mutation = Mutation::increment(95, 5);
    assert_eq!(mutation.new_count(), 100);
    assert!(is_milestone(mutation.new_count()));
    assert!(!is_large_change(mutation.new_count() - 95));
}

#[test]
fn a_large_step_bounces_without_celebrating() {
    let before = 0;
    let mutation = Mutation::increment(before, 60);
    assert_eq!(mutation.new_count(), 60);
    assert!(is_large_change(mutation.new_count() - before));
    assert!(!is_milestone(mutation.new_count()));
}

// === Color derivation ===

#[test]
fn counter_color_follows_the_sign() {
    assert_eq!(counter_color(5, false), "#4CAF50");
    assert_eq!(counter_color(-5, false), "#F44336");
    assert_eq!(counter_color(0, false), "#2196F3");
}

#[test]
fn counter_color_lightens_in_dark_mode() {
    assert_eq!(counter_color(5, true), "#81C784");
    assert_eq!(counter_color(-5, true), "#E57373");
    assert_eq!(counter_color(0, true), "#64B5F6");
}
