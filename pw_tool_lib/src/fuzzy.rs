// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

/// Case insensitive match of `term` against `haystack`.
///
/// A substring always matches.  Otherwise each character of `term` found
/// anywhere in `haystack` scores one point and each character not found
/// loses one, and the term matches when the score reaches `ratio` of the
/// haystack length.  Tolerant of transposed letters, which is all it is
/// meant to be.
pub fn fuzzy_match(haystack: &str, term: &str, ratio: f64) -> bool {
    let haystack = haystack.to_lowercase();
    let term = term.to_lowercase();
    if haystack.contains(&term) {
        return true;
    }
    let mut matches = 0i64;
    for needle in term.chars() {
        if haystack.contains(needle) {
            matches += 1;
        } else {
            matches -= 1;
        }
    }
    matches as f64 / haystack.chars().count() as f64 >= ratio
}
