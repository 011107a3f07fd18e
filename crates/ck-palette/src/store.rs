//! A JSON file holding the list of saved palette records.
//!
//! The file is a single JSON array. Reads tolerate records that no longer
//! validate (a hand-edited color, a missing field): they are skipped with a
//! warning and left untouched on disk, so a later write never discards data
//! the current version cannot understand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::record::{Palette, normalize_name};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access palette store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("palette store {path} is not a JSON list of records: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no saved palette with id {id:?}")]
    NotFound { id: String },
}

// ---------------------------------------------------------------------------
// PaletteStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PaletteStore {
    path: PathBuf,
}

impl PaletteStore {
    /// Use the record file at `path`. The file is created on first save.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record. Its id is bumped until unique within the store.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] or [`StoreError::Format`] if the file cannot be
    /// read or written.
    pub fn save(&self, mut palette: Palette) -> Result<Palette, StoreError> {
        let mut raw = self.read_raw()?;
        palette.id = unique_id(&palette.id, &raw);
        let value = serde_json::to_value(&palette).map_err(|source| self.format_err(source))?;
        raw.push(value);
        self.write_raw(&raw)?;
        info!("saved palette {:?} ({}) to {}", palette.name, palette.id, self.path.display());
        Ok(palette)
    }

    /// Every valid record, newest first.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] or [`StoreError::Format`] if the file cannot be read.
    pub fn all(&self) -> Result<Vec<Palette>, StoreError> {
        let mut palettes: Vec<Palette> = self
            .read_raw()?
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Palette>(value) {
                Ok(palette) => Some(palette),
                Err(e) => {
                    warn!("skipping invalid palette record in {}: {e}", self.path.display());
                    None
                }
            })
            .collect();
        palettes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(palettes)
    }

    /// The record with `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no valid record has that id.
    pub fn load(&self, id: &str) -> Result<Palette, StoreError> {
        self.all()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Remove the first valid record with `id` and return it. Unreadable
    /// records are kept, even one that shares the id.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no valid record has that id.
    pub fn delete(&self, id: &str) -> Result<Palette, StoreError> {
        let mut raw = self.read_raw()?;
        let (idx, removed) = find_valid(&raw, id).ok_or_else(|| not_found(id))?;
        raw.remove(idx);
        self.write_raw(&raw)?;
        info!("deleted palette {id}");
        Ok(removed)
    }

    /// Rename a record. A blank name becomes "Untitled".
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no valid record has that id.
    pub fn rename(&self, id: &str, name: &str) -> Result<Palette, StoreError> {
        self.update(id, |palette| palette.name = normalize_name(name))
    }

    /// Set or clear (`None`, or a blank string) a record's theme name.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no valid record has that id.
    pub fn set_theme_name(&self, id: &str, theme: Option<&str>) -> Result<Palette, StoreError> {
        let theme = theme
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);
        self.update(id, |palette| palette.theme_name = theme)
    }

    /// Valid records matching `query`, newest first.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] or [`StoreError::Format`] if the file cannot be read.
    pub fn search(&self, query: &PaletteQuery) -> Result<Vec<Palette>, StoreError> {
        let mut palettes = self.all()?;
        palettes.retain(|p| query.matches(p));
        debug!("{} palette(s) match {query:?}", palettes.len());
        Ok(palettes)
    }

    fn update(&self, id: &str, edit: impl FnOnce(&mut Palette)) -> Result<Palette, StoreError> {
        let mut raw = self.read_raw()?;
        let (idx, mut palette) = find_valid(&raw, id).ok_or_else(|| not_found(id))?;
        edit(&mut palette);
        raw[idx] = serde_json::to_value(&palette).map_err(|source| self.format_err(source))?;

        self.write_raw(&raw)?;
        Ok(palette)
    }

    fn read_raw(&self) -> Result<Vec<Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_err(source)),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(|source| self.format_err(source))
    }

    fn write_raw(&self, raw: &[Value]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_err(source))?;
        }
        let text = serde_json::to_string_pretty(raw).map_err(|source| self.format_err(source))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|source| self.io_err(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_err(source))
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn format_err(&self, source: serde_json::Error) -> StoreError {
        StoreError::Format {
            path: self.path.clone(),
            source,
        }
    }
}

fn record_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

/// Position and contents of the first record with `id` that parses.
fn find_valid(raw: &[Value], id: &str) -> Option<(usize, Palette)> {
    raw.iter().enumerate().find_map(|(idx, value)| {
        if record_id(value) != Some(id) {
            return None;
        }
        Palette::deserialize(value).ok().map(|palette| (idx, palette))
    })
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound { id: id.to_owned() }
}

/// `id`, or the next integer after it not already taken in `raw`.
fn unique_id(id: &str, raw: &[Value]) -> String {
    let taken = |candidate: &str| raw.iter().any(|v| record_id(v) == Some(candidate));
    if !taken(id) {
        return id.to_owned();
    }
    let Ok(mut n) = id.parse::<i64>() else {
        let mut suffix = 1;
        while taken(&format!("{id}-{suffix}")) {
            suffix += 1;
        }
        return format!("{id}-{suffix}");
    };
    while taken(&n.to_string()) {
        n += 1;
    }
    n.to_string()
}

// ---------------------------------------------------------------------------
// Queries and pagination
// ---------------------------------------------------------------------------

/// Filters for [`PaletteStore::search`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteQuery {
    /// Case-insensitive substring of the name or theme name.
    pub text: Option<String>,
    /// Saved on or after the start of this day (UTC).
    pub from: Option<NaiveDate>,
    /// Saved on or before the end of this day (UTC).
    pub to: Option<NaiveDate>,
}

impl PaletteQuery {
    #[must_use]
    pub fn matches(&self, palette: &Palette) -> bool {
        if let Some(text) = self.text.as_deref().map(str::to_lowercase).filter(|t| !t.is_empty()) {
            let in_name = palette.name.to_lowercase().contains(&text);
            let in_theme = palette
                .theme_name
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&text));
            if !in_name && !in_theme {
                return false;
            }
        }

        let saved = palette.timestamp.naive_utc();
        if let Some(from) = self.from {
            if saved < from.and_time(NaiveTime::MIN) {
                return false;
            }
        }
        if let Some(to) = self.to {
            if saved.date() > to {
                return false;
            }
        }
        true
    }
}

/// One page of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number actually shown.
    pub number: usize,
    pub total_pages: usize,
}

/// Slice out page `number` (1-based) of `per_page` items.
///
/// A page past the end falls back to page 1. `per_page` of 0 is treated as 1.
#[must_use]
pub fn page<T>(items: &[T], number: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let number = if number == 0 || number > total_pages { 1 } else { number };
    let start = ((number - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start..end],
        number,
        total_pages,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::Pairing;
    use chrono::{TimeZone, Utc};
    use ck_color::Color;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    fn store() -> (TempDir, PaletteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PaletteStore::open(dir.path().join("nested").join("palettes.json"));
        (dir, store)
    }

    fn at(day: u32, hour: u32) -> Palette {
        let (a, b) = (hex("#0f172a"), hex("#f8fafc"));
        let ts = Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap();
        Palette::with_timestamp(&format!("May {day}"), vec![a, b], vec![Pairing::new(a, b)], ts)
    }

    #[test]
    fn missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let (_dir, store) = store();
        let saved = store.save(at(1, 9)).unwrap();
        assert_eq!(store.load(&saved.id).unwrap(), saved);
        assert!(store.path().exists());
    }

    #[test]
    fn save_always_appends_with_unique_ids() {
        let (_dir, store) = store();
        let first = store.save(at(1, 9)).unwrap();
        let second = store.save(at(1, 9)).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(
            second.id,
            (first.id.parse::<i64>().unwrap() + 1).to_string()
        );
        assert_eq!(store.all().unwrap().len(), 2);
    }

    #[test]
    fn all_is_newest_first() {
        let (_dir, store) = store();
        store.save(at(2, 9)).unwrap();
        store.save(at(5, 9)).unwrap();
        store.save(at(3, 9)).unwrap();
        let names: Vec<String> = store.all().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["May 5", "May 3", "May 2"]);
    }

    #[test]
    fn delete_removes_only_that_record() {
        let (_dir, store) = store();
        let keep = store.save(at(1, 9)).unwrap();
        let gone = store.save(at(2, 9)).unwrap();
        assert_eq!(store.delete(&gone.id).unwrap(), gone);
        assert_eq!(store.all().unwrap(), vec![keep]);
        assert!(matches!(store.delete(&gone.id), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn rename_and_theme() {
        let (_dir, store) = store();
        let saved = store.save(at(1, 9)).unwrap();

        let renamed = store.rename(&saved.id, "  Night  ").unwrap();
        assert_eq!(renamed.name, "Night");
        assert_eq!(store.rename(&saved.id, "").unwrap().name, "Untitled");

        let themed = store.set_theme_name(&saved.id, Some("Deep Sea")).unwrap();
        assert_eq!(themed.theme_name.as_deref(), Some("Deep Sea"));
        assert_eq!(store.load(&saved.id).unwrap().theme_name.as_deref(), Some("Deep Sea"));

        let cleared = store.set_theme_name(&saved.id, Some("  ")).unwrap();
        assert_eq!(cleared.theme_name, None);

        assert!(matches!(
            store.rename("nope", "x"),
            Err(StoreError::NotFound { id }) if id == "nope"
        ));
    }

    #[test]
    fn invalid_records_are_skipped_and_preserved() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r##"[{"id":"1","name":"broken","colors":["#zzzzzz"],"timestamp":"2024-01-01T00:00:00Z"},
                 {"id":"2","name":"fine","colors":["#000000"],"timestamp":"2024-01-02T00:00:00Z"}]"##,
        )
        .unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "fine");

        store.rename("2", "still fine").unwrap();
        assert!(matches!(store.load("1"), Err(StoreError::NotFound { .. })));
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("broken"));
        assert!(raw.contains("still fine"));
    }

    #[test]
    fn delete_keeps_invalid_record_sharing_the_id() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r##"[{"id":"2","name":"broken","colors":["#zzzzzz"],"timestamp":"2024-01-01T00:00:00Z"},
                 {"id":"2","name":"fine","colors":["#000000"],"timestamp":"2024-01-02T00:00:00Z"}]"##,
        )
        .unwrap();

        assert_eq!(store.delete("2").unwrap().name, "fine");
        let raw: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0]["name"], "broken");
        assert!(matches!(store.delete("2"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.all(), Err(StoreError::Format { .. })));
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[test]
    fn text_query_checks_name_and_theme() {
        let mut palette = at(1, 9);
        palette.theme_name = Some("Ocean Breeze".to_owned());

        let text = |t: &str| PaletteQuery {
            text: Some(t.to_owned()),
            ..Default::default()
        };
        assert!(text("may").matches(&palette));
        assert!(text("BREEZE").matches(&palette));
        assert!(!text("autumn").matches(&palette));
    }

    #[test]
    fn date_range_is_inclusive_of_whole_days() {
        let query = PaletteQuery {
            text: None,
            from: NaiveDate::from_ymd_opt(2024, 5, 2),
            to: NaiveDate::from_ymd_opt(2024, 5, 3),
        };
        assert!(!query.matches(&at(1, 23)));
        assert!(query.matches(&at(2, 0)));
        assert!(query.matches(&at(3, 23)));
        assert!(!query.matches(&at(4, 0)));
    }

    #[test]
    fn search_filters_store() {
        let (_dir, store) = store();
        for day in 1..=4 {
            store.save(at(day, 12)).unwrap();
        }
        let query = PaletteQuery {
            from: NaiveDate::from_ymd_opt(2024, 5, 3),
            ..Default::default()
        };
        let names: Vec<String> = store
            .search(&query)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["May 4", "May 3"]);
    }

    // ── Pagination ──────────────────────────────────────────────────

    #[test]
    fn paging() {
        let items: Vec<u32> = (1..=7).collect();
        let p = page(&items, 2, 3);
        assert_eq!(p.items, &[4, 5, 6]);
        assert_eq!(p.total_pages, 3);
        assert_eq!(page(&items, 3, 3).items, &[7]);
    }

    #[test]
    fn page_out_of_range_falls_back_to_first() {
        let items: Vec<u32> = (1..=7).collect();
        let p = page(&items, 9, 3);
        assert_eq!(p.number, 1);
        assert_eq!(p.items, &[1, 2, 3]);
        assert_eq!(page(&items, 0, 3).number, 1);
    }

    #[test]
    fn empty_list_pages() {
        let items: Vec<u32> = Vec::new();
        let p = page(&items, 1, 10);
        assert!(p.items.is_empty());
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.number, 1);
    }
}
