//! Command dispatch and output formatting.
//!
//! Every command writes to the given sink, either as aligned text or (with
//! `--json`) as one pretty-printed JSON document.

use std::io::Write;

use anyhow::{Context, Result};
use ck_color::Color;
use ck_contrast::{ContrastResult, readable_text_on};
use ck_names::{NearestMatch, Table, nearest};
use ck_palette::{PairReport, Palette, PaletteDraft, PaletteQuery, PaletteStore, page};
use log::{debug, warn};
use serde::Serialize;

use crate::cli::Command;
use crate::config::Config;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    pub json: bool,
    /// Paint swatches with ANSI truecolor backgrounds.
    pub color: bool,
}

pub struct Session<'a> {
    pub config: &'a Config,
    pub store: PaletteStore,
    pub output: Output,
}

pub fn run(command: Command, ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    debug!("running {command:?}");
    match command {
        Command::Check { a, b } => check(a, b, ctx, out),
        Command::Pairs { colors } => pairs(colors, ctx, out),
        Command::Name { color, table } => {
            let table = table.unwrap_or(ctx.config.default_table);
            name(color, table, ctx, out)
        }
        Command::Snap { colors } => snap(&colors, ctx, out),
        Command::Save {
            name,
            colors,
            select_all,
            theme,
        } => save(&name, colors, select_all, theme.as_deref(), ctx, out),
        Command::List {
            query,
            from,
            to,
            page,
        } => list(PaletteQuery { text: query, from, to }, page, ctx, out),
        Command::Show { id, snap } => show(&id, snap, ctx, out),
        Command::Delete { id } => {
            let removed = ctx.store.delete(&id)?;
            emit(ctx, out, &removed, |out| {
                writeln!(out, "deleted {} ({})", removed.name, removed.id)
            })
        }
        Command::Rename { id, name } => {
            let renamed = ctx.store.rename(&id, &name)?;
            emit(ctx, out, &renamed, |out| {
                writeln!(out, "renamed {} to {}", renamed.id, renamed.name)
            })
        }
        Command::Theme { id, theme } => {
            let updated = ctx.store.set_theme_name(&id, theme.as_deref())?;
            emit(ctx, out, &updated, |out| match &updated.theme_name {
                Some(theme) => writeln!(out, "{} theme set to {theme}", updated.id),
                None => writeln!(out, "{} theme cleared", updated.id),
            })
        }
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn check(a: Color, b: Color, ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let result = ContrastResult::between(a, b);
    emit(ctx, out, &result, |out| {
        writeln!(
            out,
            "{} {}  {}",
            swatch(ctx.output, a),
            swatch(ctx.output, b),
            describe(&result)
        )
    })
}

fn pairs(colors: Vec<Color>, ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let mut draft = PaletteDraft::new();
    for color in colors {
        if draft.add(color).is_err() {
            warn!("ignoring repeated color {color}");
        }
    }
    let reports = draft.evaluate();
    emit(ctx, out, &reports, |out| write_reports(ctx.output, &reports, out))
}

fn name(color: Color, table: Table, ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let matched = nearest(color, table)?;
    emit(ctx, out, &matched, |out| {
        writeln!(out, "{}  {}", swatch(ctx.output, color), describe_match(&matched))
    })
}

#[derive(Serialize)]
struct SnapRow {
    input: Color,
    #[serde(flatten)]
    swatch: NearestMatch,
}

fn snap(colors: &[Color], ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let rows = colors
        .iter()
        .map(|&input| {
            nearest(input, Table::DesignSystem).map(|swatch| SnapRow { input, swatch })
        })
        .collect::<Result<Vec<_>, _>>()?;

    emit(ctx, out, &rows, |out| {
        for row in &rows {
            let snapped = row.swatch.hex.unwrap_or(row.input);
            writeln!(
                out,
                "{} -> {}  {}",
                swatch(ctx.output, row.input),
                swatch(ctx.output, snapped),
                describe_match(&row.swatch)
            )?;
        }
        Ok(())
    })
}

fn save(
    name: &str,
    colors: Vec<Color>,
    select_all: bool,
    theme: Option<&str>,
    ctx: &Session<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    let mut draft = PaletteDraft::new();
    let given = colors.len();
    let added = draft.add_many(colors);
    if added < given {
        warn!("dropped {} repeated color(s)", given - added);
    }
    if select_all {
        draft.select_all();
    }

    let mut palette = draft.into_palette(name);
    palette.theme_name = theme.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
    let saved = ctx.store.save(palette)?;

    emit(ctx, out, &saved, |out| {
        writeln!(
            out,
            "saved {} ({}) with {} color(s) and {} pairing(s)",
            saved.name,
            saved.id,
            saved.colors.len(),
            saved.combinations.len()
        )
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListView<'a> {
    items: &'a [Palette],
    page: usize,
    total_pages: usize,
    total: usize,
}

fn list(query: PaletteQuery, number: usize, ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let found = ctx.store.search(&query)?;
    let shown = page(&found, number, ctx.config.page_size);
    if shown.number != number {
        debug!("page {number} out of range, showing page {}", shown.number);
    }
    let view = ListView {
        items: shown.items,
        page: shown.number,
        total_pages: shown.total_pages,
        total: found.len(),
    };

    emit(ctx, out, &view, |out| {
        if found.is_empty() {
            return writeln!(out, "no saved palettes");
        }
        for palette in shown.items {
            write!(
                out,
                "{:<14} {}  {}",
                palette.id,
                palette.timestamp.format("%Y-%m-%d %H:%M"),
                palette.name
            )?;
            if let Some(theme) = &palette.theme_name {
                write!(out, " [{theme}]")?;
            }
            writeln!(out, "  ({} colors)", palette.colors.len())?;
        }
        writeln!(
            out,
            "page {} of {} ({} palettes)",
            shown.number,
            shown.total_pages,
            found.len()
        )
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteView<'a> {
    #[serde(flatten)]
    palette: &'a Palette,
    color_names: Vec<&'static str>,
    results: Vec<PairReport>,
}

fn show(id: &str, snap: bool, ctx: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let mut palette = ctx.store.load(id)?;
    if snap {
        palette = palette
            .snapped()
            .with_context(|| format!("failed to snap palette {id}"))?;
    }
    let view = PaletteView {
        palette: &palette,
        color_names: palette.color_names()?,
        results: palette.evaluate(),
    };

    emit(ctx, out, &view, |out| {
        writeln!(out, "{} ({})", palette.name, palette.id)?;
        if let Some(theme) = &palette.theme_name {
            writeln!(out, "theme: {theme}")?;
        }
        writeln!(out, "saved: {}", palette.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(out)?;
        for (&color, name) in palette.colors.iter().zip(&view.color_names) {
            writeln!(out, "  {}  {name}", swatch(ctx.output, color))?;
        }
        if view.results.is_empty() {
            return writeln!(out, "\nno pairings selected");
        }
        writeln!(out)?;
        write_reports(ctx.output, &view.results, out)
    })
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Write `value` as JSON, or call `text` to write the human form.
fn emit<T, F>(ctx: &Session<'_>, out: &mut dyn Write, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    if ctx.output.json {
        serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON")?;
        writeln!(out)?;
    } else {
        text(out)?;
    }
    Ok(())
}

fn write_reports(
    output: Output,
    reports: &[PairReport],
    out: &mut dyn Write,
) -> std::io::Result<()> {
    if reports.is_empty() {
        return writeln!(out, "need at least two distinct colors");
    }
    for report in reports {
        writeln!(
            out,
            "{} on {}  {}",
            swatch(output, report.pairing.text),
            swatch(output, report.pairing.background),
            describe(&report.result)
        )?;
    }
    let passing = reports.iter().filter(|r| r.result.passes_aa).count();
    writeln!(out, "{passing} of {} pairings pass AA", reports.len())
}

fn describe(result: &ContrastResult) -> String {
    format!(
        "{:>8}  {}/5  {}",
        result.to_string(),
        result.rating,
        result.verdict()
    )
}

fn describe_match(matched: &NearestMatch) -> String {
    match matched.hex {
        Some(hex) => format!("{} {hex}  (ΔE {:.2})", matched.name, matched.delta_e),
        None => format!("{}  (ΔE {:.2})", matched.name, matched.delta_e),
    }
}

/// `#rrggbb`, painted as a chip with legible text when color is on.
fn swatch(output: Output, color: Color) -> String {
    if !output.color {
        return color.to_hex();
    }
    let (r, g, b) = color.to_rgb8();
    let (fr, fg, fb) = readable_text_on(color).to_rgb8();
    format!("\x1b[48;2;{r};{g};{b};38;2;{fr};{fg};{fb}m {color} \x1b[0m")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
