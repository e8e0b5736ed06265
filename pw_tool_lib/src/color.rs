// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref RGB_FUNCTION: Regex = Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)").unwrap();
}

#[derive(Debug)]
pub enum ColorParseError {
    Unrecognised,
    BadChannel(ParseIntError),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorParseError::Unrecognised => {
                write!(f, "expected \"#rgb\", \"#rrggbb\" or \"rgb(r, g, b)\"")
            }
            ColorParseError::BadChannel(err) => write!(f, "bad colour channel: {err}"),
        }
    }
}

impl Error for ColorParseError {}

pub type ColorParseResult<T> = Result<T, ColorParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Read a colour written as `#rgb`, `#rrggbb` or `rgb(r, g, b)` (an alpha
/// component, if present, is ignored).
pub fn parse_color(input: &str) -> ColorParseResult<Rgb> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(captures) = RGB_FUNCTION.captures(input) {
        return Ok(Rgb {
            r: channel(&captures[1])?,
            g: channel(&captures[2])?,
            b: channel(&captures[3])?,
        });
    }
    Err(ColorParseError::Unrecognised)
}

fn channel(digits: &str) -> ColorParseResult<u8> {
    digits.parse().map_err(ColorParseError::BadChannel)
}

fn parse_hex(hex: &str) -> ColorParseResult<Rgb> {
    if !hex.is_ascii() {
        return Err(ColorParseError::Unrecognised);
    }
    let digit = |index| {
        u8::from_str_radix(&hex[index..index + 1], 16)
            .map(|value| value * 17)
            .map_err(ColorParseError::BadChannel)
    };
    let pair = |index| {
        u8::from_str_radix(&hex[index..index + 2], 16).map_err(ColorParseError::BadChannel)
    };
    match hex.len() {
        3 => Ok(Rgb {
            r: digit(0)?,
            g: digit(1)?,
            b: digit(2)?,
        }),
        6 => Ok(Rgb {
            r: pair(0)?,
            g: pair(2)?,
            b: pair(4)?,
        }),
        _ => Err(ColorParseError::Unrecognised),
    }
}

/// The opacities the ladder is rendered at, full strength down to a wash.
pub const OPACITY_LEVELS: [f64; 11] = [1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.05];

/// Blend a colour at the given opacity onto a white background.
pub fn flatten(color: Rgb, opacity: f64) -> Rgb {
    let blend = |channel: u8| (channel as f64 * opacity + 255.0 * (1.0 - opacity)).round() as u8;
    Rgb {
        r: blend(color.r),
        g: blend(color.g),
        b: blend(color.b),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderStep {
    pub opacity: f64,
    pub hex: String,
}

/// The colour flattened onto white at each of [`OPACITY_LEVELS`].
pub fn opacity_ladder(color: Rgb) -> Vec<LadderStep> {
    OPACITY_LEVELS
        .iter()
        .map(|&opacity| LadderStep {
            opacity,
            hex: flatten(color, opacity).to_hex(),
        })
        .collect()
}

#[cfg(test)]
mod color_tests {
    use super::*;

    #[test]
    fn long_hex_form() {
        assert_eq!(
            parse_color("#3B82F6").unwrap(),
            Rgb {
                r: 59,
                g: 130,
                b: 246
            }
        );
    }

    #[test]
    fn short_hex_form_doubles_the_digits() {
        assert_eq!(
            parse_color("#abc").unwrap(),
            Rgb {
                r: 170,
                g: 187,
                b: 204
            }
        );
        assert_eq!(
            parse_color(" #fff ").unwrap(),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn rgb_function_form() {
        assert_eq!(
            parse_color("rgb(59, 130, 246)").unwrap(),
            Rgb {
                r: 59,
                g: 130,
                b: 246
            }
        );
        // the alpha component is ignored
        assert_eq!(
            parse_color("rgba(12,34,56, 0.5)").unwrap(),
            Rgb {
                r: 12,
                g: 34,
                b: 56
            }
        );
    }

    #[test]
    fn unparseable_colors_are_rejected() {
        assert!(matches!(
            parse_color("blue"),
            Err(ColorParseError::Unrecognised)
        ));
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorParseError::Unrecognised)
        ));
        assert!(matches!(
            parse_color("#gg0000"),
            Err(ColorParseError::BadChannel(_))
        ));
        assert!(matches!(
            parse_color("rgb(300, 0, 0)"),
            Err(ColorParseError::BadChannel(_))
        ));
    }

    #[test]
    fn hex_rendering_is_lowercase_and_padded() {
        let color = Rgb { r: 9, g: 130, b: 246 };
        assert_eq!(color.to_hex(), "#0982f6");
    }

    #[test]
    fn flattening_blends_towards_white() {
        let blue = Rgb {
            r: 59,
            g: 130,
            b: 246,
        };
        assert_eq!(flatten(blue, 1.0), blue);
        assert_eq!(
            flatten(blue, 0.5),
            Rgb {
                r: 157,
                g: 193,
                b: 251
            }
        );
        assert_eq!(
            flatten(blue, 0.0),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn ladder_runs_from_full_strength_to_a_wash() {
        let steps = opacity_ladder(Rgb {
            r: 59,
            g: 130,
            b: 246,
        });
        assert_eq!(steps.len(), OPACITY_LEVELS.len());
        assert_eq!(steps[0].opacity, 1.0);
        assert_eq!(steps[0].hex, "#3b82f6");
        assert_eq!(steps[5].hex, "#9dc1fb");
        assert_eq!(steps[10].opacity, 0.05);
        assert_eq!(steps[10].hex, "#f5f9ff");
    }
}
