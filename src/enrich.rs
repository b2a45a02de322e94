// src/enrich.rs

// The row loop. For each sheet row from first_row to the end: skip it when
// the ISSN cell is empty, otherwise resolve the DOI, extract the six fields
// with whichever schema the resolution chain selected, and write them into
// the inserted columns. The whole workbook is saved to the versioned output
// every CHECKPOINT_EVERY visited rows and once more after the last row, so
// an interrupted run loses at most the in-progress row.

use std::error::Error;
use std::path::Path;

use crate::{
    config::consts::{CHECKPOINT_EVERY, NEW_COLUMNS, SHEET_NAME},
    config::options::RunOptions,
    core::net::Fetch,
    progress::Progress,
    resolve::{ResolvedPage, resolve_book_page},
    specs::{BookFields, Schema, book_page, landolt},
    workbook::{Workbook, column_index, versioned_name},
};

/// Column positions for one run, fixed once up front. The six new fields
/// start in the slot right after the ISSN column.
pub struct Layout {
    pub doi: u32,
    pub issn: u32,
    pub series: u32,
}

impl Layout {
    pub fn from_options(opts: &RunOptions) -> Result<Self, Box<dyn Error>> {
        let doi = column_index(opts.doi_col)?;
        let issn = column_index(opts.issn_col)?;
        Ok(Self { doi, issn, series: issn + 1 })
    }
}

/// Full run: open the right workbook for the mode, insert the columns on a
/// fresh pass, then enrich. Returns the number of books enhanced.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<u32, Box<dyn Error>> {
    let out_path = versioned_name(&opts.filename);
    let layout = Layout::from_options(opts)?;

    let mut wb = if opts.rerun {
        // Columns were inserted on the original pass; reopen the output.
        Workbook::load(&out_path, SHEET_NAME)?
    } else {
        let mut wb = Workbook::load(Path::new(&opts.filename), SHEET_NAME)?;
        wb.insert_cols(layout.series, NEW_COLUMNS);
        wb
    };

    enrich_rows(&mut wb, &layout, opts.first_row, &out_path, fetcher, progress)
}

/// The loop proper, separated from file selection so it can run against a
/// workbook built in memory.
pub fn enrich_rows(
    wb: &mut Workbook,
    layout: &Layout,
    first_row: u32,
    out_path: &Path,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<u32, Box<dyn Error>> {
    let last = wb.max_row();
    let mut book_count = 0u32;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(last.saturating_sub(first_row).saturating_add(1) as usize);
    }

    for row in first_row..=last {
        if !wb.cell(row, layout.issn).is_empty() {
            book_count += 1;
            let doi = wb.text(row, layout.doi);
            let fields = match resolve_book_page(fetcher, doi.trim()) {
                ResolvedPage::Found { doc, schema: Schema::Standard } => book_page::extract(&doc),
                ResolvedPage::Found { doc, schema: Schema::LegacySeries } => landolt::extract(&doc),
                ResolvedPage::Absent => BookFields::default(),
            };
            logd!("Row {row}: {}", fields.series);
            write_fields(wb, row, layout.series, &fields);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(row);
            }
        }
        // Checkpoint cadence counts rows visited, not books enriched.
        if row % CHECKPOINT_EVERY == 0 {
            wb.save(out_path)?;
        }
    }

    wb.save(out_path)?;
    logf!("Enhanced {book_count} books.");
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(book_count)
}

fn write_fields(wb: &mut Workbook, row: u32, series_col: u32, fields: &BookFields) {
    wb.set_text(row, series_col, &fields.series);
    wb.set_text(row, series_col + 1, &fields.acronym);
    wb.set_text(row, series_col + 2, &fields.volume);
    match fields.year {
        Some(y) => wb.set_number(row, series_col + 3, y as f64),
        None => wb.set_text(row, series_col + 3, ""),
    }
    wb.set_text(row, series_col + 4, &fields.package);
    wb.set_text(row, series_col + 5, &fields.subseries);
}
