use crate::error::Result;
use itertools::Itertools;
use shared::library::{LibrarySection, MediaItem, Variant};
use shared::report::DuplicateReport;
use std::io::Write;

/// Presentation switches for the duplicate tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Add a FILE column with each variant's path
    pub show_paths: bool,
    /// Print sizes as KiB/MiB/GiB instead of raw bytes
    pub human_sizes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
    cells: Vec<String>,
}

impl Column {
    fn new(header: &'static str, align: Align, cells: Vec<String>) -> Self {
        Self {
            header,
            align,
            cells,
        }
    }

    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.chars().count())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments = widths.iter().map(|w| "─".repeat(w + 2)).join(&mid.to_string());
    format!("{left}{segments}{right}")
}

/// Formats a byte count with binary units, e.g. `4.66 GiB`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

fn size_cell(variant: &Variant, options: TableOptions) -> String {
    match (options.human_sizes, variant.size_bytes()) {
        (true, Some(bytes)) => human_size(bytes),
        _ => variant.size.clone(),
    }
}

/// Renders ranked variants as a light box-drawing table.
///
/// An empty slice still yields the header block.
pub fn render_table(variants: &[Variant], options: TableOptions) -> String {
    let mut columns = vec![
        Column::new(
            "ID",
            Align::Left,
            variants.iter().map(|v| v.id.clone()).collect(),
        ),
        Column::new(
            "SIZE",
            Align::Right,
            variants.iter().map(|v| size_cell(v, options)).collect(),
        ),
        Column::new(
            "WIDTH",
            Align::Right,
            variants.iter().map(|v| v.width.clone()).collect(),
        ),
        Column::new(
            "CODEC",
            Align::Left,
            variants.iter().map(|v| v.video_codec.clone()).collect(),
        ),
    ];
    if options.show_paths {
        columns.push(Column::new(
            "FILE",
            Align::Left,
            variants.iter().map(|v| v.file.clone()).collect(),
        ));
    }

    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let row = |cells: Vec<String>| format!("│ {} │", cells.join(" │ "));

    let mut lines = vec![border(&widths, '┌', '┬', '┐')];
    lines.push(row(columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c.header, *w, Align::Left))
        .collect()));
    lines.push(border(&widths, '├', '┼', '┤'));
    for i in 0..variants.len() {
        lines.push(row(columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(&c.cells[i], *w, c.align))
            .collect()));
    }
    lines.push(border(&widths, '└', '┴', '┘'));

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

pub fn render_library_heading<W: Write>(out: &mut W, library: &LibrarySection) -> Result<()> {
    writeln!(
        out,
        "Library: {}, Type: {}, Key: {}",
        library.title, library.kind, library.key
    )?;
    Ok(())
}

/// One line per library section: key, type, title.
pub fn render_library_list<W: Write>(out: &mut W, libraries: &[LibrarySection]) -> Result<()> {
    let key_width = libraries
        .iter()
        .map(|l| l.key.chars().count())
        .max()
        .unwrap_or(0);
    for library in libraries {
        writeln!(
            out,
            "{:<key_width$}  {:<6}  {}",
            library.key, library.kind, library.title
        )?;
    }
    Ok(())
}

/// Writes the title line and the comparison table for one duplicate item.
pub fn render<W: Write>(out: &mut W, item: &MediaItem, options: TableOptions) -> Result<()> {
    writeln!(out, "{} {}", item.display_title(), item.key)?;
    out.write_all(render_table(&item.variants, options).as_bytes())?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &DuplicateReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
