// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use serde::{Deserialize, Serialize};

// Binomial coefficient via the multiplicative rule, rounded back to a
// whole number to undo accumulated float error.
fn combinations(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let mut product = 1.0f64;
    for index in 1..=r {
        product *= (n - index + 1) as f64 / index as f64;
    }
    product.round()
}

/// Probability of drawing exactly `hits` of a card with `copies` copies in
/// a deck of `deck_size` when `drawn` cards are drawn.
///
/// Example:
/// ```
/// use pw_tool_lib::odds::hypergeometric;
///
/// let p = hypergeometric(50, 4, 5, 1);
/// assert!((p - 0.30808).abs() < 1e-5);
/// ```
pub fn hypergeometric(deck_size: u64, copies: u64, drawn: u64, hits: u64) -> f64 {
    if hits > drawn || copies > deck_size || drawn > deck_size {
        return 0.0;
    }
    combinations(copies, hits) * combinations(deck_size - copies, drawn - hits)
        / combinations(deck_size, drawn)
}

/// Probability of drawing `minimum` or more of the card.
pub fn at_least(deck_size: u64, copies: u64, drawn: u64, minimum: u64) -> f64 {
    let mut probability = 0.0;
    for hits in minimum..=drawn.min(copies) {
        probability += hypergeometric(deck_size, copies, drawn, hits);
    }
    probability
}

/// As [`at_least`] but allowing one full mulligan when the first hand
/// misses.
pub fn with_mulligan(deck_size: u64, copies: u64, drawn: u64, minimum: u64) -> f64 {
    compound(at_least(deck_size, copies, drawn, minimum))
}

/// Probability of seeing at least one each of two different cards in the
/// same drawn hand, by inclusion-exclusion over the hands missing either.
pub fn both_present(deck_size: u64, copies_a: u64, copies_b: u64, drawn: u64) -> f64 {
    let hands = combinations(deck_size, drawn);
    let p_no_a = combinations(deck_size.saturating_sub(copies_a), drawn) / hands;
    let p_no_b = combinations(deck_size.saturating_sub(copies_b), drawn) / hands;
    let p_neither =
        combinations(deck_size.saturating_sub(copies_a + copies_b), drawn) / hands;
    1.0 - p_no_a - p_no_b + p_neither
}

/// As [`both_present`] but allowing one full mulligan.
pub fn both_present_with_mulligan(
    deck_size: u64,
    copies_a: u64,
    copies_b: u64,
    drawn: u64,
) -> f64 {
    compound(both_present(deck_size, copies_a, copies_b, drawn))
}

// A mulligan is a second independent try at the same hand.
fn compound(probability: f64) -> f64 {
    probability + (1.0 - probability) * probability
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandProbability {
    pub amount: u64,
    pub probability: f64,
}

/// Probability of each possible number of relevant cards in a hand, given
/// what has already been seen.
///
/// `discarded` relevant cards have left the deck entirely and
/// `known_in_hand` relevant cards are already confirmed to be in the hand,
/// so every amount below `known_in_hand` has probability zero and the
/// remainder is hypergeometric over the unseen cards.
pub fn hand_distribution(
    deck_size: u64,
    relevant: u64,
    hand_size: u64,
    discarded: u64,
    known_in_hand: u64,
) -> Vec<HandProbability> {
    let adjusted_deck = deck_size.saturating_sub(discarded);
    let adjusted_relevant = relevant.saturating_sub(discarded);
    let remaining_hand = hand_size.saturating_sub(known_in_hand);
    let remaining_relevant = adjusted_relevant.saturating_sub(known_in_hand);
    let max_possible = remaining_relevant.min(remaining_hand) + known_in_hand;

    (0..=max_possible)
        .map(|amount| {
            let probability = if amount < known_in_hand {
                0.0
            } else {
                hypergeometric(
                    adjusted_deck.saturating_sub(known_in_hand),
                    remaining_relevant,
                    remaining_hand,
                    amount - known_in_hand,
                )
            };
            HandProbability {
                amount,
                probability,
            }
        })
        .collect()
}

#[cfg(test)]
mod odds_tests;
