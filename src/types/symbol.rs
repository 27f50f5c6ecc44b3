//! Symbol placement and styling types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One placed glyph: a rectangular footprint on the grid plus optional
/// visual parameters.
///
/// `start` and `end` are inclusive linear cell indices addressing the two
/// corners of the footprint; either corner may come first, downstream
/// geometry normalizes direction. `glyph` is usually one character but may
/// be a longer literal (a multi-letter name or quoted string).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSpec {
    #[serde(rename = "char")]
    pub glyph: String,
    pub start: usize,
    pub end: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip: Option<Flip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<BoxValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<f32>,
}

impl SymbolSpec {
    /// A bare symbol with no styling.
    pub fn new(glyph: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            glyph: glyph.into(),
            start,
            end,
            opacity: None,
            color: None,
            rotate: None,
            flip: None,
            font_family: None,
            id: None,
            class_name: None,
            name: None,
            scale: None,
            margin: None,
            position: None,
            transition: None,
        }
    }
}

/// Mirror axis for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Flip {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "hv")]
    Both,
}

impl Flip {
    /// The DSL spelling: `h`, `v`, or `hv`.
    pub fn as_str(self) -> &'static str {
        match self {
            Flip::Horizontal => "h",
            Flip::Vertical => "v",
            Flip::Both => "hv",
        }
    }
}

impl FromStr for Flip {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Flip::Horizontal),
            "v" => Ok(Flip::Vertical),
            "hv" => Ok(Flip::Both),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-axis scale factors; both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    /// Parse one or two comma-separated positive floats; a missing second
    /// value defaults to the first (uniform scale).
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(',').map(str::trim);
        let x: f32 = parts.next()?.parse().ok()?;
        let y: f32 = match parts.next() {
            Some(second) => second.parse().ok()?,
            None => x,
        };
        if parts.next().is_some() || x <= 0.0 || y <= 0.0 {
            return None;
        }
        Some(Self { x, y })
    }

    pub fn is_uniform(self) -> bool {
        self.x == self.y
    }
}

/// A 4-sided numeric box used by the `margin` and `position` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoxValue {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BoxValue {
    pub fn uniform(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Parse a box value. Two grammars are tried in order:
    ///
    /// 1. Direction-suffixed shorthand: space-separated `<number><t|r|b|l>`
    ///    tokens (`"1t 2r"`), omitted sides defaulting to 0.
    /// 2. CSS-shorthand numbers: 1 value sets all sides; 2 sets
    ///    top/bottom then left/right; 3 sets top, left/right, bottom;
    ///    4 or more set top, right, bottom, left (extras ignored).
    ///
    /// Unparseable fragments are skipped, never an error; an input with no
    /// usable numbers yields all zeroes.
    pub fn parse(value: &str) -> Self {
        let mut result = Self::default();
        let mut used_directional = false;

        for part in value.split_whitespace() {
            if let Some((amount, side)) = split_directional(part) {
                used_directional = true;
                match side {
                    't' => result.top = amount,
                    'r' => result.right = amount,
                    'b' => result.bottom = amount,
                    'l' => result.left = amount,
                    _ => unreachable!(),
                }
            }
        }

        if used_directional {
            return result;
        }

        let nums: Vec<f32> = value
            .split_whitespace()
            .filter_map(|v| v.parse().ok())
            .collect();

        match nums.len() {
            0 => {}
            1 => result = Self::uniform(nums[0]),
            2 => {
                result.top = nums[0];
                result.bottom = nums[0];
                result.left = nums[1];
                result.right = nums[1];
            }
            3 => {
                result.top = nums[0];
                result.left = nums[1];
                result.right = nums[1];
                result.bottom = nums[2];
            }
            _ => {
                result.top = nums[0];
                result.right = nums[1];
                result.bottom = nums[2];
                result.left = nums[3];
            }
        }

        result
    }
}

/// Split a `<number><t|r|b|l>` fragment; `None` when the fragment has no
/// direction suffix or its numeric part does not parse.
fn split_directional(part: &str) -> Option<(f32, char)> {
    let last = part.chars().last()?;
    let side = last.to_ascii_lowercase();
    if !matches!(side, 't' | 'r' | 'b' | 'l') {
        return None;
    }
    let amount: f32 = part[..part.len() - last.len_utf8()].parse().ok()?;
    Some((amount, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_round_trip() {
        for (text, flip) in [("h", Flip::Horizontal), ("v", Flip::Vertical), ("hv", Flip::Both)] {
            assert_eq!(text.parse::<Flip>(), Ok(flip));
            assert_eq!(flip.as_str(), text);
        }
        assert!("vh".parse::<Flip>().is_err());
        assert!("".parse::<Flip>().is_err());
    }

    #[test]
    fn test_scale_single_value_is_uniform() {
        let s = Scale::parse("1.5").unwrap();
        assert_eq!(s, Scale { x: 1.5, y: 1.5 });
        assert!(s.is_uniform());
    }

    #[test]
    fn test_scale_two_values() {
        let s = Scale::parse("1.5, 2").unwrap();
        assert_eq!(s, Scale { x: 1.5, y: 2.0 });
        assert!(!s.is_uniform());
    }

    #[test]
    fn test_scale_rejects_nonpositive() {
        assert!(Scale::parse("0").is_none());
        assert!(Scale::parse("-1").is_none());
        assert!(Scale::parse("1,0").is_none());
        assert!(Scale::parse("abc").is_none());
        assert!(Scale::parse("1,2,3").is_none());
    }

    #[test]
    fn test_box_directional_suffixes() {
        let b = BoxValue::parse("1t 2r 3b 4l");
        assert_eq!(
            b,
            BoxValue {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0
            }
        );
    }

    #[test]
    fn test_box_directional_partial_defaults_zero() {
        let b = BoxValue::parse("2.5t");
        assert_eq!(
            b,
            BoxValue {
                top: 2.5,
                right: 0.0,
                bottom: 0.0,
                left: 0.0
            }
        );
    }

    #[test]
    fn test_box_directional_negative_and_uppercase() {
        let b = BoxValue::parse("-1T 2L");
        assert_eq!(b.top, -1.0);
        assert_eq!(b.left, 2.0);
    }

    #[test]
    fn test_box_css_one_value() {
        assert_eq!(BoxValue::parse("3"), BoxValue::uniform(3.0));
    }

    #[test]
    fn test_box_css_two_values() {
        let b = BoxValue::parse("1 2");
        assert_eq!(b.top, 1.0);
        assert_eq!(b.bottom, 1.0);
        assert_eq!(b.left, 2.0);
        assert_eq!(b.right, 2.0);
    }

    #[test]
    fn test_box_css_three_values() {
        let b = BoxValue::parse("1 2 3");
        assert_eq!(b.top, 1.0);
        assert_eq!(b.left, 2.0);
        assert_eq!(b.right, 2.0);
        assert_eq!(b.bottom, 3.0);
    }

    #[test]
    fn test_box_css_four_values_extras_ignored() {
        let b = BoxValue::parse("1 2 3 4 5");
        assert_eq!(
            b,
            BoxValue {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0
            }
        );
    }

    #[test]
    fn test_box_garbage_yields_zeroes() {
        assert_eq!(BoxValue::parse("wat"), BoxValue::default());
        assert_eq!(BoxValue::parse(""), BoxValue::default());
    }
}
