// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entry::{consolidate, CardEntry};
use crate::export::{export_url, ExportFormat};
use crate::import::parse_deck_input;

lazy_static! {
    static ref CARD_LINE: Regex = Regex::new(r"(?i)^\s*(\d+)(?:x|\s)\s*([A-Z0-9]+-?\d+)").unwrap();
    static ref URL_LINE: Regex = Regex::new(r"(?i)^https?://").unwrap();
}

/// One deck recovered from a pasted blob of several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDeck {
    pub title: String,
    pub cards: Vec<CardEntry>,
    pub original: String,
}

/// Split a pasted blob holding several deck lists into separate decks.
///
/// A URL line becomes a deck of its own, a card line joins the deck being
/// built (starting an untitled one if necessary) and any other nonblank
/// line closes the deck being built and titles the next one. A trailing
/// colon is trimmed off titles, so "Red Shanks:" titles a deck
/// "Red Shanks".
pub fn parse_batch_input(input: &str) -> Vec<ParsedDeck> {
    let mut decks = vec![];
    let mut current: Option<ParsedDeck> = None;

    for line in input.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if URL_LINE.is_match(trimmed) {
            if let Some(deck) = current.take() {
                decks.push(deck);
            }
            let cards = parse_deck_input(trimmed);
            if !cards.is_empty() {
                decks.push(ParsedDeck {
                    title: "Imported Deck (Link)".to_string(),
                    cards,
                    original: trimmed.to_string(),
                });
            }
        } else if CARD_LINE.is_match(trimmed) {
            let deck = current.get_or_insert_with(|| ParsedDeck {
                title: "Untitled Deck".to_string(),
                cards: vec![],
                original: String::new(),
            });
            if !deck.original.is_empty() {
                deck.original.push('\n');
            }
            deck.original.push_str(trimmed);
            deck.cards.extend(parse_deck_input(trimmed));
        } else {
            if let Some(deck) = current.take() {
                decks.push(deck);
            }
            let title = trimmed.strip_suffix(':').unwrap_or(trimmed);
            current = Some(ParsedDeck {
                title: title.to_string(),
                cards: vec![],
                original: trimmed.to_string(),
            });
        }
    }
    if let Some(deck) = current {
        decks.push(deck);
    }

    decks
        .into_iter()
        .map(|deck| ParsedDeck {
            cards: consolidate(deck.cards),
            ..deck
        })
        .collect()
}

/// One line of a batch conversion and the URL generated for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConversion {
    pub original: String,
    pub generated: String,
    pub valid: bool,
}

/// Convert every nonblank line (a deck builder URL or a single card
/// line) into a deck builder URL in the requested format.
pub fn convert_lines(input: &str, format: ExportFormat) -> Vec<LineConversion> {
    input
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let cards = parse_deck_input(line);
            let generated = export_url(&cards, format);
            let valid = !cards.is_empty() && !generated.is_empty();
            LineConversion {
                original: line.to_string(),
                generated,
                valid,
            }
        })
        .collect()
}
