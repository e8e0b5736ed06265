// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use url::Url;

use pw_tool_lib::codec;

use crate::entry::{consolidate, CardEntry};

lazy_static! {
    static ref STANDARD_LINE: Regex = Regex::new(r"^(\d+)(x|\s)(\S+)").unwrap();
    static ref TOP_DECKS_ENTRY: Regex = Regex::new(r"^(\d+)n([A-Z]+\d{2}-\d{3})").unwrap();
    static ref GUMGUM_ENTRY: Regex = Regex::new(r"^(\d+)x([A-Z]+\d{2}-\d{3})").unwrap();
}

/// Parse a pasted deck into entries.
///
/// Each nonblank line is either a deck builder URL (recognised by its
/// prefix) or a plain `NxCODE` / `N CODE` card line. Unrecognised lines
/// are ignored. The result is consolidated with [`consolidate`], so a
/// card pasted twice comes back as one entry.
pub fn parse_deck_input(input: &str) -> Vec<CardEntry> {
    if input.trim().is_empty() {
        return vec![];
    }

    let mut entries = vec![];
    for line in input.split('\n').filter(|line| !line.trim().is_empty()) {
        if line.starts_with("https://onepiecetopdecks.com/deck-list/") {
            entries.extend(top_decks_entries(line));
        } else if line.starts_with("https://deckbuilder.egmanevents.com") {
            entries.extend(egman_entries(line));
        } else if line.starts_with("https://gumgum.gg/deckbuilder") {
            entries.extend(gumgum_entries(line));
        } else if line.starts_with("https://deckbuilder.cardkaizoku.com") {
            entries.extend(cardkaizoku_entries(line));
        } else if let Some(captures) = STANDARD_LINE.captures(line.trim()) {
            if let Ok(quantity) = captures[1].parse() {
                entries.push(CardEntry {
                    code: captures[3].to_string(),
                    quantity,
                });
            }
        }
    }
    consolidate(entries)
}

// Query values come back percent decoded, the way a browser hands them over.
fn deck_query_param(line: &str, name: &str) -> Option<String> {
    let url = match Url::parse(line) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("skipping malformed deck URL {line:?}: {err}");
            return None;
        }
    };
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn top_decks_entries(line: &str) -> Vec<CardEntry> {
    match deck_query_param(line, "dg") {
        Some(deck) => deck
            .split('a')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| {
                let captures = TOP_DECKS_ENTRY.captures(entry)?;
                Some(CardEntry {
                    code: captures[2].to_string(),
                    quantity: captures[1].parse().ok()?,
                })
            })
            .collect(),
        None => vec![],
    }
}

fn egman_entries(line: &str) -> Vec<CardEntry> {
    match deck_query_param(line, "deck") {
        Some(deck) => deck
            .split(',')
            .filter_map(|entry| {
                let mut fields = entry.split(':');
                let code = fields.next()?;
                let quantity = fields.next()?;
                if code.is_empty() {
                    return None;
                }
                Some(CardEntry {
                    code: code.to_string(),
                    quantity: quantity.parse().ok()?,
                })
            })
            .collect(),
        None => vec![],
    }
}

fn gumgum_entries(line: &str) -> Vec<CardEntry> {
    match deck_query_param(line, "deck") {
        Some(deck) => deck
            .split(';')
            .filter_map(|entry| {
                let captures = GUMGUM_ENTRY.captures(entry)?;
                Some(CardEntry {
                    code: captures[2].to_string(),
                    quantity: captures[1].parse().ok()?,
                })
            })
            .collect(),
        None => vec![],
    }
}

fn cardkaizoku_entries(line: &str) -> Vec<CardEntry> {
    let deck = match deck_query_param(line, "deck") {
        Some(deck) => deck,
        None => return vec![],
    };
    let bytes = match codec::decode_base64_relaxed(&deck) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("skipping undecodable cardkaizoku deck: {err}");
            return vec![];
        }
    };
    let value: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("skipping unparseable cardkaizoku deck: {err}");
            return vec![];
        }
    };
    match value.as_object() {
        Some(object) => object
            .iter()
            .filter_map(|(code, quantity)| {
                if code.is_empty() {
                    return None;
                }
                Some(CardEntry {
                    code: code.clone(),
                    quantity: quantity.as_u64()? as u32,
                })
            })
            .collect(),
        None => vec![],
    }
}
