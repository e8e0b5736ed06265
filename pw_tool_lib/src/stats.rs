// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Summary counts for a piece of text.
///
/// A sentence is anything delimited by a run of `.`, `!` or `?` and a
/// paragraph is anything delimited by a blank (or whitespace only) line,
/// in both cases ignoring empty fragments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

impl TextStats {
    pub fn new(text: &str) -> Self {
        let blank = text.trim().is_empty();
        Self {
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            words: if blank {
                0
            } else {
                text.split_whitespace().count()
            },
            lines: text.split('\n').count(),
            sentences: if blank {
                0
            } else {
                text.split(['.', '!', '?'])
                    .filter(|fragment| !fragment.is_empty())
                    .count()
            },
            paragraphs: if blank {
                0
            } else {
                PARAGRAPH_BREAK
                    .split(text)
                    .filter(|fragment| !fragment.is_empty())
                    .count()
            },
        }
    }
}
