//! Contrast classification: the AA verdict and the 1–5 star rating.
//!
//! Both are pure functions of the unrounded ratio. The two-decimal form
//! exists only for display and never feeds a threshold comparison, so a
//! ratio of 4.4999 fails AA even though it prints as `4.50:1`.
//!
//! | Ratio         | Rating | AA (normal text) |
//! |---------------|--------|------------------|
//! | >= 7.0        | 5      | pass             |
//! | >= 4.5        | 4      | pass             |
//! | >= 3.0        | 3      | fail             |
//! | >= 2.0        | 2      | fail             |
//! | below 2.0     | 1      | fail             |

use std::fmt;

use ck_color::{Color, ParseColorError};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::wcag::contrast_ratio;

/// WCAG 2.x level AA minimum for normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Lower bounds for ratings 5, 4, 3 and 2, checked top-down.
const RATING_FLOORS: [(f64, u8); 4] = [(7.0, 5), (4.5, 4), (3.0, 3), (2.0, 2)];

/// Star rating for a contrast ratio, 1 (unreadable) to 5 (excellent).
///
/// Each floor is inclusive: 7.0 rates 5, 4.5 rates 4.
#[must_use]
pub fn rating_for(ratio: f64) -> u8 {
    RATING_FLOORS
        .iter()
        .find(|(floor, _)| ratio >= *floor)
        .map_or(1, |&(_, stars)| stars)
}

/// Whether a ratio meets [`AA_NORMAL_TEXT`].
#[inline]
#[must_use]
pub fn passes_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL_TEXT
}

// ---------------------------------------------------------------------------
// ContrastResult
// ---------------------------------------------------------------------------

/// The verdict for one color pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Unrounded contrast ratio in [1.0, 21.0].
    pub ratio: f64,
    /// `ratio >= 4.5`.
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    /// 1..=5, see [`rating_for`].
    pub rating: u8,
}

impl ContrastResult {
    /// Classify an already-computed ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            passes_aa: passes_aa(ratio),
            rating: rating_for(ratio),
        }
    }

    /// Evaluate two parsed colors.
    #[must_use]
    pub fn between(a: Color, b: Color) -> Self {
        let result = Self::from_ratio(contrast_ratio(a, b));
        trace!("contrast {a} / {b}: {:.4} rating={}", result.ratio, result.rating);
        result
    }

    /// The ratio rounded to two decimal places.
    #[must_use]
    pub fn display_ratio(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.passes_aa {
            Verdict::Readable
        } else {
            Verdict::NotReadable
        }
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.ratio)
    }
}

/// Human-facing label for the AA verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Readable,
    NotReadable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Readable => "Readable",
            Self::NotReadable => "Not Readable",
        })
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Evaluate two parsed colors. Alias of [`ContrastResult::between`].
#[must_use]
pub fn evaluate(a: Color, b: Color) -> ContrastResult {
    ContrastResult::between(a, b)
}

/// Evaluate two `#RRGGBB` strings.
///
/// # Errors
///
/// Returns [`ParseColorError::InvalidColorFormat`] carrying whichever input
/// failed to parse, checking `color_a` first.
pub fn evaluate_contrast(color_a: &str, color_b: &str) -> Result<ContrastResult, ParseColorError> {
    let a = Color::parse(color_a)?;
    let b = Color::parse(color_b)?;
    Ok(ContrastResult::between(a, b))
}

/// Black or white, whichever reads better on `background`.
///
/// Ties go to black.
#[must_use]
pub fn readable_text_on(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Thresholds ──────────────────────────────────────────────────

    #[test]
    fn rating_floors_are_inclusive() {
        assert_eq!(rating_for(7.0), 5);
        assert_eq!(rating_for(4.5), 4);
        assert_eq!(rating_for(3.0), 3);
        assert_eq!(rating_for(2.0), 2);
        assert_eq!(rating_for(1.0), 1);
    }

    #[test]
    fn rating_just_below_each_floor() {
        assert_eq!(rating_for(6.9999), 4);
        assert_eq!(rating_for(4.4999), 3);
        assert_eq!(rating_for(2.9999), 2);
        assert_eq!(rating_for(1.9999), 1);
    }

    #[test]
    fn rating_is_monotonic() {
        let mut prev = 0;
        let mut ratio = 1.0;
        while ratio <= 21.0 {
            let stars = rating_for(ratio);
            assert!(stars >= prev, "rating dropped at {ratio}");
            assert!((1..=5).contains(&stars));
            prev = stars;
            ratio += 0.01;
        }
    }

    #[test]
    fn aa_boundary() {
        let at = ContrastResult::from_ratio(4.5);
        assert!(at.passes_aa);
        assert_eq!(at.rating, 4);

        let below = ContrastResult::from_ratio(4.4999);
        assert!(!below.passes_aa);
        assert_eq!(below.rating, 3);
    }

    #[test]
    fn rounded_display_does_not_change_verdict() {
        let result = ContrastResult::from_ratio(4.4999);
        assert!(approx_eq(result.display_ratio(), 4.5, 1e-12));
        assert_eq!(result.to_string(), "4.50:1");
        assert!(!result.passes_aa);
        assert_eq!(result.ratio, 4.4999);
    }

    // ── evaluate_contrast ───────────────────────────────────────────

    #[test]
    fn black_on_white() {
        let result = evaluate_contrast("#000000", "#FFFFFF").unwrap();
        assert!(approx_eq(result.ratio, 21.0, 1e-6), "{}", result.ratio);
        assert_eq!(result.rating, 5);
        assert!(result.passes_aa);
        assert_eq!(result.verdict(), Verdict::Readable);
    }

    #[test]
    fn identical_colors() {
        let result = evaluate_contrast("#777777", "#777777").unwrap();
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.rating, 1);
        assert!(!result.passes_aa);
        assert_eq!(result.verdict().to_string(), "Not Readable");
    }

    #[test]
    fn case_does_not_matter() {
        let upper = evaluate_contrast("#3B82F6", "#F8FAFC").unwrap();
        let lower = evaluate_contrast("#3b82f6", "#f8fafc").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn symmetric_result() {
        let ab = evaluate_contrast("#b91c1c", "#fef2f2").unwrap();
        let ba = evaluate_contrast("#fef2f2", "#b91c1c").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn invalid_first_input() {
        let err = evaluate_contrast("not-a-color", "#FFFFFF").unwrap_err();
        assert_eq!(err.input(), "not-a-color");
    }

    #[test]
    fn invalid_second_input() {
        let err = evaluate_contrast("#FFFFFF", "#FFF").unwrap_err();
        assert_eq!(err.input(), "#FFF");
    }

    #[test]
    fn mid_range_pair() {
        // #767676 on white: 4.54:1, just inside AA.
        let result = evaluate_contrast("#767676", "#ffffff").unwrap();
        assert_eq!(result.to_string(), "4.54:1");
        assert!(result.passes_aa);
        assert_eq!(result.rating, 4);
    }

    // ── readable_text_on ────────────────────────────────────────────

    #[test]
    fn text_on_dark_is_white() {
        assert_eq!(readable_text_on(Color::rgb(0x1e, 0x29, 0x3b)), Color::WHITE);
    }

    #[test]
    fn text_on_light_is_black() {
        assert_eq!(readable_text_on(Color::rgb(0xfe, 0xf3, 0xc7)), Color::BLACK);
    }

    // ── Serde ───────────────────────────────────────────────────────

    #[test]
    fn serializes_with_external_field_names() {
        let json = serde_json::to_value(ContrastResult::from_ratio(7.0)).unwrap();
        assert_eq!(json["passesAA"], serde_json::Value::Bool(true));
        assert_eq!(json["rating"], serde_json::json!(5));
    }
}
