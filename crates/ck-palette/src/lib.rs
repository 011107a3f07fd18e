//! # ck-palette — palettes, pairings and the saved-palette store
//!
//! ```text
//! colors ─▶ PaletteDraft ──pairings()──▶ [Pairing] ──evaluate──▶ [PairReport]
//!               │
//!               └─into_palette(name)─▶ Palette ──save──▶ PaletteStore (JSON file)
//! ```
//!
//! A [`Pairing`] is one background/text combination. A [`PaletteDraft`]
//! keeps the color list duplicate-free and its selections consistent. A
//! [`Palette`] is the persisted record, and [`PaletteStore`] is the file it
//! lives in.

pub mod draft;
pub mod pairing;
pub mod record;
pub mod store;

pub use draft::{DraftError, PaletteDraft};
pub use pairing::{PairReport, Pairing, evaluate_pairings, pairings};
pub use record::{Palette, UNTITLED, normalize_name};
pub use store::{Page, PaletteQuery, PaletteStore, StoreError, page};
