//! Reference table types and the built-in table selector.

use std::fmt;
use std::str::FromStr;

use ck_color::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::named::NAMED_COLORS;
use crate::swatch::DESIGN_SYSTEM_SWATCHES;

/// One `(name, color)` entry in a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

impl NamedColor {
    /// Build an entry from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn new(name: &'static str, rgb: u32) -> Self {
        Self {
            name,
            color: Color::from_u32(rgb),
        }
    }
}

// ---------------------------------------------------------------------------
// ReferenceTable
// ---------------------------------------------------------------------------

/// A borrowed reference table: a label for diagnostics, the entries in
/// tie-breaking order, and whether matches report the entry's hex.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable<'a> {
    pub label: &'a str,
    pub entries: &'a [NamedColor],
    pub reports_hex: bool,
}

impl<'a> ReferenceTable<'a> {
    #[must_use]
    pub const fn new(label: &'a str, entries: &'a [NamedColor], reports_hex: bool) -> Self {
        Self {
            label,
            entries,
            reports_hex,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose color is exactly `color`, if any.
    #[must_use]
    pub fn lookup(&self, color: Color) -> Option<&'a NamedColor> {
        self.entries.iter().find(|entry| entry.color == color)
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Selects one of the built-in reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Table {
    /// Named colors ("Alice Blue", "Tomato", ...). Matches report a name only.
    #[default]
    Named,
    /// The design-system swatch grid ("blue-500", ...). Matches report the
    /// swatch hex as well, for snapping.
    #[serde(alias = "designSystem", alias = "tailwind")]
    DesignSystem,
}

impl Table {
    pub const ALL: [Self; 2] = [Self::Named, Self::DesignSystem];

    /// The table's entries, in tie-breaking order.
    #[must_use]
    pub const fn entries(self) -> &'static [NamedColor] {
        match self {
            Self::Named => NAMED_COLORS,
            Self::DesignSystem => DESIGN_SYSTEM_SWATCHES,
        }
    }

    /// Stable identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Named => "named",
            Self::DesignSystem => "design-system",
        }
    }

    #[must_use]
    pub const fn reports_hex(self) -> bool {
        matches!(self, Self::DesignSystem)
    }

    #[must_use]
    pub const fn reference(self) -> ReferenceTable<'static> {
        ReferenceTable::new(self.label(), self.entries(), self.reports_hex())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A table identifier that names no built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reference table {0:?} (expected \"named\" or \"design-system\")")]
pub struct UnknownTable(pub String);

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "named" => Ok(Self::Named),
            "design-system" | "designSystem" | "tailwind" => Ok(Self::DesignSystem),
            other => Err(UnknownTable(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::swatch::SHADES;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_tables_are_populated() {
        for table in Table::ALL {
            assert!(!table.reference().is_empty(), "{table} is empty");
        }
        assert!(Table::Named.entries().len() >= 500);
        assert_eq!(Table::DesignSystem.entries().len(), 21 * SHADES.len());
    }

    #[test]
    fn builtin_hex_values_are_unique() {
        for table in Table::ALL {
            let mut seen = HashSet::new();
            for entry in table.entries() {
                assert!(
                    seen.insert(entry.color),
                    "{table}: {} duplicates an earlier entry ({})",
                    entry.name,
                    entry.color
                );
            }
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        for table in Table::ALL {
            let mut seen = HashSet::new();
            for entry in table.entries() {
                assert!(seen.insert(entry.name), "{table}: duplicate name {}", entry.name);
            }
        }
    }

    #[test]
    fn swatch_names_follow_hue_shade_grid() {
        for group in Table::DesignSystem.entries().chunks(SHADES.len()) {
            let hue = group[0].name.split('-').next().unwrap();
            for (entry, shade) in group.iter().zip(SHADES) {
                assert_eq!(entry.name, format!("{hue}-{shade}"));
            }
        }
    }

    #[test]
    fn swatch_shades_darken_within_a_hue() {
        for group in Table::DesignSystem.entries().chunks(SHADES.len()) {
            let lightness: Vec<f64> = group.iter().map(|e| e.color.to_lab().l).collect();
            for pair in lightness.windows(2) {
                assert!(pair[0] > pair[1], "{} not monotonic: {lightness:?}", group[0].name);
            }
        }
    }

    #[test]
    fn lookup_exact() {
        let table = Table::Named.reference();
        let entry = table.lookup(Color::rgb(0xff, 0x63, 0x47)).unwrap();
        assert_eq!(entry.name, "Tomato");
        assert!(table.lookup(Color::rgb(0xff, 0x63, 0x48)).is_none());
    }

    #[test]
    fn table_from_str() {
        assert_eq!("named".parse::<Table>().unwrap(), Table::Named);
        assert_eq!("design-system".parse::<Table>().unwrap(), Table::DesignSystem);
        assert_eq!("designSystem".parse::<Table>().unwrap(), Table::DesignSystem);
        assert_eq!("tailwind".parse::<Table>().unwrap(), Table::DesignSystem);
        assert_eq!(
            "pantone".parse::<Table>().unwrap_err(),
            UnknownTable("pantone".to_owned())
        );
    }

    #[test]
    fn label_roundtrip() {
        for table in Table::ALL {
            assert_eq!(table.label().parse::<Table>().unwrap(), table);
        }
    }

    #[test]
    fn only_design_system_reports_hex() {
        assert!(!Table::Named.reports_hex());
        assert!(Table::DesignSystem.reports_hex());
    }
}
