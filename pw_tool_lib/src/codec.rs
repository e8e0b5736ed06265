// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::string::FromUtf8Error;

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine as _};

// Padding is emitted when encoding but not demanded when decoding, the
// way browsers treat pasted base64.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug)]
pub enum CodecError {
    Base64(base64::DecodeError),
    Utf8(FromUtf8Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecError::Base64(err) => write!(f, "invalid base64: {err}"),
            CodecError::Utf8(err) => write!(f, "decoded data is not UTF-8 text: {err}"),
        }
    }
}

impl Error for CodecError {}

pub type CodecResult<T> = Result<T, CodecError>;

pub fn encode_base64(input: &str) -> String {
    STANDARD_LENIENT.encode(input)
}

/// Decode base64 text, ignoring any whitespace mixed into it.
pub fn decode_base64(input: &str) -> CodecResult<String> {
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD_LENIENT.decode(cleaned).map_err(CodecError::Base64)?;
    String::from_utf8(bytes).map_err(CodecError::Utf8)
}

/// Decode base64 in either the standard or the URL safe alphabet, padded
/// or not.  This is the tolerant decoder JSON web token segments and deck
/// builder payloads need.
pub fn decode_base64_relaxed(input: &str) -> CodecResult<Vec<u8>> {
    let mut base64: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while base64.len() % 4 != 0 {
        base64.push('=');
    }
    STANDARD_LENIENT.decode(base64).map_err(CodecError::Base64)
}

pub fn encode_url_component(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn decode_url_component(input: &str) -> CodecResult<String> {
    urlencoding::decode(input)
        .map(Cow::into_owned)
        .map_err(CodecError::Utf8)
}

#[cfg(test)]
mod codec_tests {
    use super::*;

    #[test]
    fn base64_encodes_with_padding() {
        assert_eq!(encode_base64("hello"), "aGVsbG8=");
        assert_eq!(encode_base64(""), "");
    }

    #[test]
    fn base64_decode_forgives_whitespace_and_padding() {
        assert_eq!(decode_base64("aGVsbG8=").unwrap(), "hello");
        assert_eq!(decode_base64("aGVs\nbG8=\n").unwrap(), "hello");
        assert_eq!(decode_base64("aGVsbG8").unwrap(), "hello");
    }

    #[test]
    fn base64_round_trips_unicode_text() {
        let text = "héllo ✓ world";
        assert_eq!(decode_base64(&encode_base64(text)).unwrap(), text);
    }

    #[test]
    fn broken_base64_is_reported() {
        assert!(matches!(
            decode_base64("not base64!"),
            Err(CodecError::Base64(_))
        ));
        assert!(matches!(decode_base64("/w=="), Err(CodecError::Utf8(_))));
    }

    #[test]
    fn relaxed_decode_accepts_the_url_safe_alphabet() {
        assert_eq!(decode_base64_relaxed("PDw_Pz8-Pg").unwrap(), b"<<???>>");
        assert_eq!(decode_base64_relaxed("PDw/Pz8+Pg==").unwrap(), b"<<???>>");
    }

    #[test]
    fn url_component_encoding() {
        assert_eq!(encode_url_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(decode_url_component("a%20b%26c%3Dd").unwrap(), "a b&c=d");
        assert_eq!(decode_url_component("%E2%9C%93").unwrap(), "✓");
    }

    #[test]
    fn percent_sequences_must_decode_to_utf8() {
        assert!(matches!(
            decode_url_component("%FF"),
            Err(CodecError::Utf8(_))
        ));
    }
}
