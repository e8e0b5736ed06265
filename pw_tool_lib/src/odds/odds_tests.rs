// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use crate::odds::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{actual} differs from {expected}"
    );
}

#[test]
fn exact_draw_probabilities() {
    assert_close(hypergeometric(50, 4, 5, 0), 0.646960);
    assert_close(hypergeometric(50, 4, 5, 1), 0.308076);
    assert_close(hypergeometric(50, 4, 5, 4), 0.000022);
}

#[test]
fn impossible_draws_have_zero_probability() {
    assert_eq!(hypergeometric(50, 4, 5, 6), 0.0);
    assert_eq!(hypergeometric(50, 60, 5, 1), 0.0);
    assert_eq!(hypergeometric(10, 4, 11, 1), 0.0);
}

#[test]
fn at_least_sums_the_tail() {
    assert_close(at_least(50, 4, 5, 1), 0.353040);
    assert_close(at_least(50, 4, 5, 0), 1.0);
    // can't draw five of a playset of four
    assert_eq!(at_least(50, 4, 5, 5), 0.0);
}

#[test]
fn mulligan_compounds_two_tries() {
    assert_close(with_mulligan(50, 4, 5, 1), 0.581442);
    assert_close(with_mulligan(50, 4, 4, 0), 1.0);
}

#[test]
fn both_present_by_inclusion_exclusion() {
    assert_close(both_present(50, 4, 4, 5), 0.107572);
    // with no copies of the second card it can never be drawn
    assert_eq!(both_present(50, 4, 0, 5), 0.0);
}

#[test]
fn both_present_mulligan_compounds() {
    assert_close(both_present_with_mulligan(50, 4, 4, 5), 0.203573);
}

#[test]
fn hand_distribution_covers_all_amounts() {
    let distribution = hand_distribution(50, 12, 5, 0, 0);
    assert_eq!(distribution.len(), 6);
    assert_eq!(distribution[0].amount, 0);
    assert_close(distribution[0].probability, 0.236904);
    let total: f64 = distribution.iter().map(|p| p.probability).sum();
    assert_close(total, 1.0);
}

#[test]
fn known_cards_zero_out_the_leading_amounts() {
    let distribution = hand_distribution(50, 12, 5, 0, 2);
    assert_eq!(distribution.len(), 6);
    assert_eq!(distribution[0].probability, 0.0);
    assert_eq!(distribution[1].probability, 0.0);
    assert_close(distribution[2].probability, 0.487743);
}

#[test]
fn discarded_cards_leave_the_deck() {
    let distribution = hand_distribution(50, 12, 5, 10, 0);
    assert_eq!(distribution.len(), 3);
    let total: f64 = distribution.iter().map(|p| p.probability).sum();
    assert_close(total, 1.0);
}
