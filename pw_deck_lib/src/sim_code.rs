// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use lazy_static::lazy_static;
use regex::Regex;

use crate::entry::CardEntry;

lazy_static! {
    static ref LOOSE_LINE: Regex = Regex::new(r"^(\d+)(x|\s)(\S+)").unwrap();
    static ref SIM_CODE_LINE: Regex = Regex::new(r"^(\d+)x([A-Z0-9-]+)").unwrap();
}

/// Rewrite one deck list line into the simulator's `NxCODE` shape.
///
/// Lines that don't look like card lines are passed through untouched so
/// that deck list headings and notes survive a normalization pass.
///
/// Example:
/// ```
/// use pw_deck_lib::sim_code::normalize_line;
///
/// assert_eq!(normalize_line("4 OP01-001"), "4xOP01-001");
/// assert_eq!(normalize_line("Leader:"), "Leader:");
/// ```
pub fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match LOOSE_LINE.captures(trimmed) {
        Some(captures) => format!("{}x{}", &captures[1], &captures[3]),
        None => line.to_string(),
    }
}

/// Apply [`normalize_line`] to every line of `content`.
pub fn normalize(content: &str) -> String {
    content
        .split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a document in the simulator shape back into entries, skipping
/// every line that doesn't match.
pub fn parse_decklist(content: &str) -> Vec<CardEntry> {
    if content.trim().is_empty() {
        return vec![];
    }
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let captures = SIM_CODE_LINE.captures(line)?;
            Some(CardEntry {
                code: captures[2].to_string(),
                quantity: captures[1].parse().ok()?,
            })
        })
        .collect()
}
