//! The saved palette record.

use chrono::{DateTime, Utc};
use ck_color::Color;
use ck_names::{NearestError, Table, nearest, snap_to_design_system};
use serde::{Deserialize, Serialize};

use crate::pairing::{PairReport, Pairing};

/// Name given to palettes saved without one.
pub const UNTITLED: &str = "Untitled";

/// A named palette with its selected pairings, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Creation time in milliseconds since the epoch, as a string. Unique
    /// within a store.
    pub id: String,
    pub name: String,
    pub colors: Vec<Color>,
    /// Pairings the user selected, in selection order.
    #[serde(default)]
    pub combinations: Vec<Pairing>,
    pub timestamp: DateTime<Utc>,
    /// Optional descriptive theme label, searched alongside `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_name: Option<String>,
}

impl Palette {
    /// A new record stamped with the current time.
    #[must_use]
    pub fn new(name: &str, colors: Vec<Color>, combinations: Vec<Pairing>) -> Self {
        Self::with_timestamp(name, colors, combinations, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(
        name: &str,
        colors: Vec<Color>,
        combinations: Vec<Pairing>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: timestamp.timestamp_millis().to_string(),
            name: normalize_name(name),
            colors,
            combinations,
            timestamp,
            theme_name: None,
        }
    }

    /// Contrast reports for the selected pairings.
    #[must_use]
    pub fn evaluate(&self) -> Vec<PairReport> {
        self.combinations
            .iter()
            .map(|&pairing| PairReport {
                pairing,
                result: pairing.evaluate(),
            })
            .collect()
    }

    /// The nearest named color for each palette color, in order.
    ///
    /// # Errors
    ///
    /// Propagates [`NearestError::EmptyReferenceTable`].
    pub fn color_names(&self) -> Result<Vec<&'static str>, NearestError> {
        self.colors
            .iter()
            .map(|&color| nearest(color, Table::Named).map(|m| m.name))
            .collect()
    }

    /// A copy with every color, including those inside pairings, snapped to
    /// its nearest design-system swatch.
    ///
    /// Colors that snap to the same swatch merge into one, kept at the first
    /// one's position. Pairings that become duplicates or self-pairs are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Propagates [`NearestError::EmptyReferenceTable`].
    pub fn snapped(&self) -> Result<Self, NearestError> {
        let mut colors = Vec::with_capacity(self.colors.len());
        for &color in &self.colors {
            let snapped = snap_to_design_system(color)?;
            if !colors.contains(&snapped) {
                colors.push(snapped);
            }
        }

        let mut combinations = Vec::with_capacity(self.combinations.len());
        for pairing in &self.combinations {
            let snapped = Pairing::new(
                snap_to_design_system(pairing.background)?,
                snap_to_design_system(pairing.text)?,
            );
            if snapped.background != snapped.text && !combinations.contains(&snapped) {
                combinations.push(snapped);
            }
        }

        Ok(Self {
            colors,
            combinations,
            ..self.clone()
        })
    }
}

/// Trimmed name, or [`UNTITLED`] when blank.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNTITLED.to_owned()
    } else {
        trimmed.to_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
