// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How far ahead of the current cursor a window search will look for a
/// resynchronisation line.
pub const LOOKAHEAD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Equal,
    Removed,
    Added,
}

impl ChangeKind {
    pub fn marker(self) -> &'static str {
        match self {
            ChangeKind::Equal => "  ",
            ChangeKind::Removed => "- ",
            ChangeKind::Added => "+ ",
        }
    }
}

/// One output line of a diff together with its disposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: ChangeKind,
    pub content: String,
}

impl DiffLine {
    pub fn equal(content: &str) -> Self {
        Self {
            kind: ChangeKind::Equal,
            content: content.to_string(),
        }
    }

    pub fn removed(content: &str) -> Self {
        Self {
            kind: ChangeKind::Removed,
            content: content.to_string(),
        }
    }

    pub fn added(content: &str) -> Self {
        Self {
            kind: ChangeKind::Added,
            content: content.to_string(),
        }
    }
}

/// Compare two texts line by line using a greedy scan with a bounded
/// lookahead window.
///
/// Both texts are split on `'\n'` so an empty text still contributes one
/// (empty) line.  Every line of `before` appears in the output as `Equal`
/// or `Removed` and every line of `after` as `Equal` or `Added`, in their
/// original relative order.  When the cursors disagree an insertion is
/// looked for in `after` before a deletion is looked for in `before`, and
/// anything further than [`LOOKAHEAD`] lines away is written off as a
/// paired removal and addition.
///
/// Example:
/// ```
/// use pw_tool_lib::diff::{diff_lines, ChangeKind};
///
/// let kinds: Vec<ChangeKind> = diff_lines("a\nb\nc", "a\nc")
///     .iter()
///     .map(|line| line.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![ChangeKind::Equal, ChangeKind::Removed, ChangeKind::Equal]
/// );
/// ```
pub fn diff_lines(before: &str, after: &str) -> Vec<DiffLine> {
    let before_lines: Vec<&str> = before.split('\n').collect();
    let after_lines: Vec<&str> = after.split('\n').collect();
    let mut result = vec![];

    let mut i = 0;
    let mut j = 0;
    while i < before_lines.len() || j < after_lines.len() {
        if i >= before_lines.len() {
            result.push(DiffLine::added(after_lines[j]));
            j += 1;
        } else if j >= after_lines.len() {
            result.push(DiffLine::removed(before_lines[i]));
            i += 1;
        } else if before_lines[i] == after_lines[j] {
            result.push(DiffLine::equal(before_lines[i]));
            i += 1;
            j += 1;
        } else if let Some(k) = find_within_window(&after_lines, j, before_lines[i]) {
            // Lines between the cursor and the match were inserted.
            for line in &after_lines[j..k] {
                result.push(DiffLine::added(line));
            }
            result.push(DiffLine::equal(before_lines[i]));
            i += 1;
            j = k + 1;
        } else if let Some(k) = find_within_window(&before_lines, i, after_lines[j]) {
            // Lines between the cursor and the match were deleted.
            for line in &before_lines[i..k] {
                result.push(DiffLine::removed(line));
            }
            result.push(DiffLine::equal(after_lines[j]));
            i = k + 1;
            j += 1;
        } else {
            result.push(DiffLine::removed(before_lines[i]));
            result.push(DiffLine::added(after_lines[j]));
            i += 1;
            j += 1;
        }
    }

    result
}

fn find_within_window(lines: &[&str], from: usize, wanted: &str) -> Option<usize> {
    let end = lines.len().min(from + LOOKAHEAD + 1);
    (from + 1..end).find(|&k| lines[k] == wanted)
}

/// A line diff of two files together with where they came from.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiffReport {
    before_path: PathBuf,
    after_path: PathBuf,
    lines: Vec<DiffLine>,
}

impl DiffReport {
    pub fn new(before_file_path: &Path, after_file_path: &Path) -> io::Result<Self> {
        let before = fs::read_to_string(before_file_path)?;
        let after = fs::read_to_string(after_file_path)?;

        Ok(Self {
            before_path: before_file_path.to_path_buf(),
            after_path: after_file_path.to_path_buf(),
            lines: diff_lines(&before, &after),
        })
    }

    pub fn from_reader<R: io::Read>(reader: &mut R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn before_path(&self) -> &Path {
        &self.before_path
    }

    pub fn after_path(&self) -> &Path {
        &self.after_path
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn to_writer<W: io::Write>(&self, writer: &mut W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }

    pub fn write_into<W: io::Write>(&self, into: &mut W) -> io::Result<()> {
        for line in self.lines.iter() {
            writeln!(into, "{}{}", line.kind.marker(), line.content)?;
        }
        Ok(())
    }
}
