//! A palette under construction: an ordered, duplicate-free color list
//! plus the set of pairings the user has selected.
//!
//! Selections always refer to colors that are still in the draft. Removing
//! or replacing a color drops every selected pairing that touched it.

use ck_color::Color;
use thiserror::Error;

use crate::pairing::{PairReport, Pairing, evaluate_pairings, pairings};
use crate::record::Palette;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is already in the palette")]
    DuplicateColor(Color),

    #[error("{0} is not in the palette")]
    UnknownColor(Color),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteDraft {
    colors: Vec<Color>,
    selected: Vec<Pairing>,
}

impl PaletteDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, keeping only its selections that
    /// still refer to two distinct palette colors.
    #[must_use]
    pub fn from_palette(palette: &Palette) -> Self {
        let mut draft = Self::new();
        draft.add_many(palette.colors.iter().copied());
        for pairing in &palette.combinations {
            // Stale selections are dropped rather than failing the load.
            let _ = draft.toggle(*pairing, true);
        }
        draft
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Selected pairings, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Pairing] {
        &self.selected
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Append a color.
    ///
    /// # Errors
    ///
    /// [`DraftError::DuplicateColor`] if the color is already present.
    pub fn add(&mut self, color: Color) -> Result<(), DraftError> {
        if self.contains(color) {
            return Err(DraftError::DuplicateColor(color));
        }
        self.colors.push(color);
        Ok(())
    }

    /// Append every color not already present. Returns how many were added.
    pub fn add_many(&mut self, colors: impl IntoIterator<Item = Color>) -> usize {
        colors
            .into_iter()
            .filter(|&color| self.add(color).is_ok())
            .count()
    }

    /// Remove a color and every selection involving it.
    ///
    /// # Errors
    ///
    /// [`DraftError::UnknownColor`] if the color is not present.
    pub fn remove(&mut self, color: Color) -> Result<(), DraftError> {
        let idx = self.index_of(color)?;
        self.colors.remove(idx);
        self.selected.retain(|p| !p.involves(color));
        Ok(())
    }

    /// Swap `old` for `new` in place, dropping selections involving `old`.
    ///
    /// # Errors
    ///
    /// [`DraftError::UnknownColor`] if `old` is absent;
    /// [`DraftError::DuplicateColor`] if `new` is already a different entry.
    pub fn replace(&mut self, old: Color, new: Color) -> Result<(), DraftError> {
        let idx = self.index_of(old)?;
        if old == new {
            return Ok(());
        }
        if self.contains(new) {
            return Err(DraftError::DuplicateColor(new));
        }
        self.colors[idx] = new;
        self.selected.retain(|p| !p.involves(old));
        Ok(())
    }

    /// Select (`on`) or deselect a pairing.
    ///
    /// # Errors
    ///
    /// [`DraftError::UnknownColor`] if selecting a pairing whose colors are
    /// not both in the draft, or whose two sides are the same color.
    pub fn toggle(&mut self, pairing: Pairing, on: bool) -> Result<(), DraftError> {
        if !on {
            self.selected.retain(|p| *p != pairing);
            return Ok(());
        }
        self.index_of(pairing.background)?;
        self.index_of(pairing.text)?;
        if pairing.background == pairing.text {
            return Err(DraftError::UnknownColor(pairing.text));
        }
        if !self.selected.contains(&pairing) {
            self.selected.push(pairing);
        }
        Ok(())
    }

    /// Every possible pairing of the current colors.
    #[must_use]
    pub fn pairings(&self) -> Vec<Pairing> {
        pairings(&self.colors)
    }

    #[must_use]
    pub fn evaluate(&self) -> Vec<PairReport> {
        evaluate_pairings(&self.colors)
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.pairings().iter().all(|p| self.selected.contains(p))
    }

    pub fn select_all(&mut self) {
        self.selected = self.pairings();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Select everything, or nothing if everything is already selected.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.clear_selection();
        } else {
            self.select_all();
        }
    }

    /// Drop all colors and selections.
    pub fn reset(&mut self) {
        self.colors.clear();
        self.selected.clear();
    }

    /// Freeze the draft into a record.
    #[must_use]
    pub fn into_palette(self, name: &str) -> Palette {
        Palette::new(name, self.colors, self.selected)
    }

    fn index_of(&self, color: Color) -> Result<usize, DraftError> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .ok_or(DraftError::UnknownColor(color))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
