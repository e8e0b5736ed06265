// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, CodecError};

#[derive(Debug)]
pub enum TokenError {
    WrongPartCount(usize),
    Segment(CodecError),
    Json(serde_json::Error),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenError::WrongPartCount(count) => write!(
                f,
                "token has {count} dot separated parts where 3 are needed"
            ),
            TokenError::Segment(err) => write!(f, "token segment could not be decoded: {err}"),
            TokenError::Json(err) => write!(f, "token segment is not valid JSON: {err}"),
        }
    }
}

impl Error for TokenError {}

pub type TokenResult<T> = Result<T, TokenError>;

/// The three parts of a JSON web token, decoded but not verified.  The
/// signature is carried verbatim since there is no key to check it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

/// Split and decode a JSON web token without verifying its signature.
pub fn decode_token(token: &str) -> TokenResult<DecodedToken> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::WrongPartCount(parts.len()));
    }
    Ok(DecodedToken {
        header: decode_segment(parts[0])?,
        payload: decode_segment(parts[1])?,
        signature: parts[2].to_string(),
    })
}

fn decode_segment(segment: &str) -> TokenResult<Value> {
    let bytes = codec::decode_base64_relaxed(segment).map_err(TokenError::Segment)?;
    serde_json::from_slice(&bytes).map_err(TokenError::Json)
}

impl DecodedToken {
    /// A numeric claim from the payload, `None` when absent or not a
    /// number.
    pub fn seconds_claim(&self, name: &str) -> Option<f64> {
        self.payload.get(name)?.as_f64()
    }

    pub fn is_expired(&self, now: f64) -> Option<bool> {
        Some(self.seconds_claim("exp")? < now)
    }

    pub fn not_yet_valid(&self, now: f64) -> Option<bool> {
        Some(self.seconds_claim("nbf")? > now)
    }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    // The well worn example token: HS256 header and a payload with sub,
    // name and iat claims.
    const EXAMPLE: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                           eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                           SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    #[test]
    fn example_token_decodes() {
        let token = decode_token(EXAMPLE).unwrap();
        assert_eq!(token.header["alg"], "HS256");
        assert_eq!(token.header["typ"], "JWT");
        assert_eq!(token.payload["name"], "John Doe");
        assert_eq!(token.payload["sub"], "1234567890");
        assert_eq!(token.signature, "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let padded = format!("  {EXAMPLE}\n");
        assert_eq!(decode_token(&padded).unwrap(), decode_token(EXAMPLE).unwrap());
    }

    #[test]
    fn claims_are_read_as_seconds() {
        let token = decode_token(EXAMPLE).unwrap();
        assert_eq!(token.seconds_claim("iat"), Some(1516239022.0));
        assert_eq!(token.seconds_claim("exp"), None);
        // without exp or nbf claims there is nothing to judge
        assert_eq!(token.is_expired(1e12), None);
        assert_eq!(token.not_yet_valid(0.0), None);
    }

    #[test]
    fn expiry_and_not_before_compare_against_now() {
        let json = serde_json::json!({ "exp": 2000.0, "nbf": 1000.0 });
        let token = DecodedToken {
            header: serde_json::json!({ "alg": "none" }),
            payload: json,
            signature: String::new(),
        };
        assert_eq!(token.is_expired(1999.0), Some(false));
        assert_eq!(token.is_expired(2001.0), Some(true));
        assert_eq!(token.not_yet_valid(999.0), Some(true));
        assert_eq!(token.not_yet_valid(1001.0), Some(false));
    }

    #[test]
    fn wrong_part_counts_are_rejected() {
        assert!(matches!(
            decode_token("abc.def"),
            Err(TokenError::WrongPartCount(2))
        ));
        assert!(matches!(
            decode_token(""),
            Err(TokenError::WrongPartCount(1))
        ));
    }

    #[test]
    fn undecodable_segments_are_rejected() {
        assert!(matches!(
            decode_token("!!!.e30.sig"),
            Err(TokenError::Segment(_))
        ));
        // "aGVsbG8" is valid base64 but decodes to plain text, not JSON
        assert!(matches!(
            decode_token("aGVsbG8.e30.sig"),
            Err(TokenError::Json(_))
        ));
    }
}
