//! Nearest-entry search by CIEDE2000 distance.
//!
//! Every query is a linear scan in table order. Only a strictly smaller
//! distance replaces the current best, so ties resolve to the earliest
//! entry and a color that appears verbatim in a table always matches
//! itself (distance 0).
//!
//! Plain Euclidean distance over RGB bytes misranks hues against human
//! perception and is not offered as an alternative.

use ck_color::{Color, ParseColorError};
use deltae::{DEMethod, DeltaE, LabValue};
use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

use crate::table::{NamedColor, ReferenceTable, Table};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NearestError {
    /// The query is not a `#RRGGBB` color.
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    /// The selected table has no entries. Indicates a packaging defect,
    /// never a user error.
    #[error("reference table {table:?} has no entries")]
    EmptyReferenceTable { table: String },
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

#[allow(clippy::cast_possible_truncation)]
fn lab_value(color: Color) -> LabValue {
    let lab = color.to_lab();
    LabValue {
        l: lab.l as f32,
        a: lab.a as f32,
        b: lab.b as f32,
    }
}

/// CIEDE2000 color difference between two colors, via CIE Lab (D65).
///
/// 0 for identical colors; about 1 is the threshold of a just-noticeable
/// difference. Symmetric: the pair is evaluated in order of ascending hue
/// angle whichever way round it is passed.
#[must_use]
pub fn delta_e_2000(a: Color, b: Color) -> f32 {
    delta_e_lab(lab_value(a), lab_value(b))
}

fn delta_e_lab(a: LabValue, b: LabValue) -> f32 {
    // `deltae` only wraps a hue difference correctly when the second hue is
    // the larger one.
    let (first, second) = if hue_angle(b) < hue_angle(a) { (b, a) } else { (a, b) };
    *DeltaE::new(first, second, DEMethod::DE2000).value()
}

/// Hue angle in degrees, [0, 360).
fn hue_angle(lab: LabValue) -> f32 {
    let h = lab.b.atan2(lab.a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// The winning entry of a scan, with its position and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Closest<'a> {
    pub index: usize,
    pub entry: &'a NamedColor,
    pub delta_e: f32,
}

/// Scan `entries` for the one closest to `color`.
///
/// Returns `None` only when `entries` is empty.
#[must_use]
pub fn nearest_in(color: Color, entries: &[NamedColor]) -> Option<Closest<'_>> {
    if entries.is_empty() {
        return None;
    }

    let query = lab_value(color);
    let mut best_idx = 0;
    let mut best_dist = f32::INFINITY;

    for (idx, entry) in entries.iter().enumerate() {
        let dist = delta_e_lab(query, lab_value(entry.color));
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    Some(Closest {
        index: best_idx,
        entry: &entries[best_idx],
        delta_e: best_dist,
    })
}

/// The closest reference entry to a query color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestMatch {
    pub name: &'static str,
    /// The entry's color. Present only for tables that report hex
    /// (the design-system swatches).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<Color>,
    /// CIEDE2000 distance from the query.
    #[serde(rename = "deltaE")]
    pub delta_e: f32,
}

impl ReferenceTable<'_> {
    /// Find the entry in this table closest to `color`.
    ///
    /// # Errors
    ///
    /// [`NearestError::EmptyReferenceTable`] if the table has no entries.
    pub fn nearest(&self, color: Color) -> Result<NearestMatch, NearestError> {
        let Some(closest) = nearest_in(color, self.entries) else {
            error!("reference table {:?} has no entries", self.label);
            return Err(NearestError::EmptyReferenceTable {
                table: self.label.to_owned(),
            });
        };

        debug!(
            "{color} → {} ({}) in {}, ΔE2000 {:.3}",
            closest.entry.name, closest.entry.color, self.label, closest.delta_e
        );

        Ok(NearestMatch {
            name: closest.entry.name,
            hex: self.reports_hex.then_some(closest.entry.color),
            delta_e: closest.delta_e,
        })
    }
}

/// Find the entry of a built-in table closest to a parsed color.
///
/// # Errors
///
/// [`NearestError::EmptyReferenceTable`] if the table has no entries.
pub fn nearest(color: Color, table: Table) -> Result<NearestMatch, NearestError> {
    table.reference().nearest(color)
}

/// Find the entry of a built-in table closest to a `#RRGGBB` string.
///
/// # Errors
///
/// [`NearestError::InvalidColor`] if `color` is not `#RRGGBB`;
/// [`NearestError::EmptyReferenceTable`] if the table has no entries.
pub fn find_nearest(color: &str, table: Table) -> Result<NearestMatch, NearestError> {
    nearest(Color::parse(color)?, table)
}

/// The design-system swatch color closest to `color`.
///
/// # Errors
///
/// [`NearestError::EmptyReferenceTable`] if the swatch table has no entries.
pub fn snap_to_design_system(color: Color) -> Result<Color, NearestError> {
    let closest = Table::DesignSystem.reference().nearest(color)?;
    Ok(closest.hex.unwrap_or(color))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
