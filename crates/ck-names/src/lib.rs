//! # ck-names — nearest reference color matching
//!
//! Maps an arbitrary color to the perceptually closest entry of a fixed
//! reference table, for human-readable labels ("Tomato") or for snapping
//! to a design-system swatch ("red-500").
//!
//! # Tables
//!
//! | [`Table`]                  | Entries | Match reports  |
//! |----------------------------|---------|----------------|
//! | [`Table::Named`]           | 506     | name           |
//! | [`Table::DesignSystem`]    | 231     | name and hex   |
//!
//! Both tables are `'static` data: built into the binary, never mutated,
//! safe to read from any number of threads.
//!
//! # Distance
//!
//! CIEDE2000 on CIE Lab (D65), computed with the `deltae` crate.

pub mod named;
pub mod nearest;
pub mod swatch;
pub mod table;

pub use nearest::{
    Closest, NearestError, NearestMatch, delta_e_2000, find_nearest, nearest, nearest_in,
    snap_to_design_system,
};
pub use table::{NamedColor, ReferenceTable, Table, UnknownTable};
