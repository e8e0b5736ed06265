// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

/// Drop every line that is empty after trimming and rejoin the rest.
///
/// Example:
/// ```
/// use pw_tool_lib::lines::strip_blank_lines;
///
/// assert_eq!(strip_blank_lines("a\n\n  \nb\n"), "a\nb");
/// ```
pub fn strip_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod lines_tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        assert_eq!(strip_blank_lines("a\n\nb\n \t\nc"), "a\nb\nc");
    }

    #[test]
    fn inner_whitespace_is_untouched() {
        assert_eq!(strip_blank_lines("  a  \n\n  b  "), "  a  \n  b  ");
    }

    #[test]
    fn wholly_blank_text_becomes_empty() {
        assert_eq!(strip_blank_lines("\n \n\t\n"), "");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(strip_blank_lines(""), "");
    }
}
