//! Background/text pairings and their contrast reports.
//!
//! A palette of N distinct colors has N·(N−1) ordered pairings: every color
//! as a background under every other color as text. Contrast is symmetric,
//! but both directions are listed because a user selects them separately.

use std::fmt;
use std::str::FromStr;

use ck_color::{Color, ParseColorError};
use ck_contrast::ContrastResult;
use serde::{Deserialize, Serialize};

/// One background/text combination.
///
/// Serialized as its key, `"#rrggbb-#rrggbb"` (background first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pairing {
    pub background: Color,
    pub text: Color,
}

impl Pairing {
    #[must_use]
    pub const fn new(background: Color, text: Color) -> Self {
        Self { background, text }
    }

    /// Whether either side is `color`.
    #[must_use]
    pub fn involves(&self, color: Color) -> bool {
        self.background == color || self.text == color
    }

    #[must_use]
    pub fn evaluate(&self) -> ContrastResult {
        ContrastResult::between(self.background, self.text)
    }

    /// The same pairing with each side passed through `f`.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Color) -> Color) -> Self {
        Self::new(f(self.background), f(self.text))
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.background, self.text)
    }
}

impl FromStr for Pairing {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (background, text) =
            s.split_once('-')
                .ok_or_else(|| ParseColorError::InvalidColorFormat {
                    input: s.to_owned(),
                })?;
        Ok(Self::new(background.parse()?, text.parse()?))
    }
}

impl From<Pairing> for String {
    fn from(pairing: Pairing) -> Self {
        pairing.to_string()
    }
}

impl TryFrom<String> for Pairing {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Every ordered pairing of `colors`, backgrounds in palette order.
///
/// A color never pairs with itself or with another entry of equal value.
#[must_use]
pub fn pairings(colors: &[Color]) -> Vec<Pairing> {
    colors
        .iter()
        .flat_map(|&background| {
            colors
                .iter()
                .filter(move |&&text| text != background)
                .map(move |&text| Pairing::new(background, text))
        })
        .collect()
}

/// A pairing with its contrast verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairReport {
    pub pairing: Pairing,
    pub result: ContrastResult,
}

/// Evaluate every pairing of `colors`.
#[must_use]
pub fn evaluate_pairings(colors: &[Color]) -> Vec<PairReport> {
    pairings(colors)
        .into_iter()
        .map(|pairing| PairReport {
            pairing,
            result: pairing.evaluate(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    #[test]
    fn n_colors_give_n_times_n_minus_one_pairs() {
        let colors = [hex("#000000"), hex("#ffffff"), hex("#ff0000"), hex("#00ff00")];
        assert_eq!(pairings(&colors).len(), 12);
        assert!(pairings(&colors[..1]).is_empty());
        assert!(pairings(&[]).is_empty());
    }

    #[test]
    fn pairs_follow_palette_order() {
        let (a, b, c) = (hex("#111111"), hex("#222222"), hex("#333333"));
        assert_eq!(
            pairings(&[a, b, c]),
            vec![
                Pairing::new(a, b),
                Pairing::new(a, c),
                Pairing::new(b, a),
                Pairing::new(b, c),
                Pairing::new(c, a),
                Pairing::new(c, b),
            ]
        );
    }

    #[test]
    fn no_self_pairs() {
        let colors = [hex("#123456"), hex("#654321")];
        assert!(pairings(&colors).iter().all(|p| p.background != p.text));
    }

    #[test]
    fn key_format() {
        let pairing = Pairing::new(hex("#FFFFFF"), hex("#000000"));
        assert_eq!(pairing.to_string(), "#ffffff-#000000");
        assert_eq!("#FFFFFF-#000000".parse::<Pairing>().unwrap(), pairing);
    }

    #[test]
    fn bad_keys_are_rejected() {
        assert!("#ffffff".parse::<Pairing>().is_err());
        assert!("#ffffff-#00".parse::<Pairing>().is_err());
        assert!("white-black".parse::<Pairing>().is_err());
    }

    #[test]
    fn pairing_serializes_as_key() {
        let pairing = Pairing::new(hex("#ffffff"), hex("#000000"));
        let json = serde_json::to_string(&pairing).unwrap();
        assert_eq!(json, "\"#ffffff-#000000\"");
        assert_eq!(serde_json::from_str::<Pairing>(&json).unwrap(), pairing);
    }

    #[test]
    fn reports_are_symmetric_per_direction() {
        let reports = evaluate_pairings(&[hex("#000000"), hex("#ffffff")]);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].result, reports[1].result);
        assert_eq!(reports[0].result.rating, 5);
    }
}
