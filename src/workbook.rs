// src/workbook.rs

// In-memory workbook grid. Loaded from .xlsx with calamine, written back
// with rust_xlsxwriter; the whole grid is rewritten on every save, which is
// what makes block checkpoints cheap to reason about (the file on disk is
// always a complete snapshot).
//
// The public API is 1-based in both rows and columns, matching spreadsheet
// conventions; reads outside the grid yield empty cells.

use std::error::Error;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook as OutBook;

use crate::config::consts::VERSION;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

const EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Empty for the skip rule: no cell, or text that is all whitespace.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

pub struct Workbook {
    sheet: String,
    grid: Vec<Vec<Cell>>, // row-major; 0-based internally
}

impl Workbook {
    pub fn new(sheet: &str) -> Self {
        Self { sheet: s!(sheet), grid: Vec::new() }
    }

    pub fn load(path: &Path, sheet: &str) -> Result<Self, Box<dyn Error>> {
        let mut book: Xlsx<_> = open_workbook(path)
            .map_err(|e| format!("open {}: {e}", path.display()))?;
        let range = book
            .worksheet_range(sheet)
            .map_err(|e| format!("sheet {sheet} in {}: {e}", path.display()))?;

        // calamine ranges start at the first used cell; re-anchor at A1 so
        // sheet coordinates and grid coordinates line up.
        let (r0, c0) = range.start().unwrap_or((0, 0));
        let (height, width) = range.get_size();
        let mut grid = vec![Vec::new(); r0 as usize + height];

        for (i, row) in range.rows().enumerate() {
            let line = &mut grid[r0 as usize + i];
            line.resize(c0 as usize + width, Cell::Empty);
            for (j, value) in row.iter().enumerate() {
                line[c0 as usize + j] = convert(value);
            }
        }

        Ok(Self { sheet: s!(sheet), grid })
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let mut out = OutBook::new();
        let ws = out.add_worksheet();
        ws.set_name(&self.sheet)?;
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => {}
                    Cell::Text(s) => { ws.write_string(r as u32, c as u16, s)?; }
                    Cell::Number(n) => { ws.write_number(r as u32, c as u16, *n)?; }
                    Cell::Bool(b) => { ws.write_boolean(r as u32, c as u16, *b)?; }
                }
            }
        }
        out.save(path)
            .map_err(|e| format!("save {}: {e}", path.display()))?;
        Ok(())
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Number of the last row (1-based). 0 for an empty workbook.
    pub fn max_row(&self) -> u32 {
        self.grid.len() as u32
    }

    pub fn cell(&self, row: u32, col: u32) -> &Cell {
        debug_assert!(row >= 1 && col >= 1);
        self.grid
            .get((row - 1) as usize)
            .and_then(|line| line.get((col - 1) as usize))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Cell content rendered as text; empty string for empty cells.
    pub fn text(&self, row: u32, col: u32) -> String {
        match self.cell(row, col) {
            Cell::Empty => s!(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => s!(if *b { "TRUE" } else { "FALSE" }),
        }
    }

    pub fn set_text(&mut self, row: u32, col: u32, value: &str) {
        *self.slot(row, col) = Cell::Text(s!(value));
    }

    pub fn set_number(&mut self, row: u32, col: u32, value: f64) {
        *self.slot(row, col) = Cell::Number(value);
    }

    /// Insert `count` empty columns before 1-based column `at`, shifting the
    /// rest of each row right. Rows too short to reach `at` are left alone;
    /// their missing cells are empty either way.
    pub fn insert_cols(&mut self, at: u32, count: usize) {
        debug_assert!(at >= 1);
        let idx = (at - 1) as usize;
        for line in &mut self.grid {
            if line.len() >= idx {
                line.splice(idx..idx, std::iter::repeat_n(Cell::Empty, count));
            }
        }
    }

    fn slot(&mut self, row: u32, col: u32) -> &mut Cell {
        debug_assert!(row >= 1 && col >= 1);
        let r = (row - 1) as usize;
        let c = (col - 1) as usize;
        if self.grid.len() <= r {
            self.grid.resize(r + 1, Vec::new());
        }
        let line = &mut self.grid[r];
        if line.len() <= c {
            line.resize(c + 1, Cell::Empty);
        }
        &mut line[c]
    }
}

fn convert(value: &Data) -> Cell {
    match value {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// 1-based column index for a letter: A → 1 … Z → 26.
pub fn column_index(letter: char) -> Result<u32, Box<dyn Error>> {
    let c = letter.to_ascii_uppercase();
    if c.is_ascii_uppercase() {
        Ok(c as u32 - 'A' as u32 + 1)
    } else {
        Err(format!("Bad column letter: {letter}").into())
    }
}

/// `report.xlsx` → `report_v1.xlsx`, keeping any directory prefix.
/// Repeated runs never touch the source file.
pub fn versioned_name(filename: &str) -> PathBuf {
    let p = Path::new(filename);
    let stem = p
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tagged = match p.extension() {
        Some(ext) => format!("{stem}_v{VERSION}.{}", ext.to_string_lossy()),
        None => format!("{stem}_v{VERSION}"),
    };
    match p.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(tagged),
        _ => PathBuf::from(tagged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_index('A').unwrap(), 1);
        assert_eq!(column_index('D').unwrap(), 4);
        assert_eq!(column_index('g').unwrap(), 7);
        assert!(column_index('7').is_err());
    }

    #[test]
    fn versioned_names() {
        assert_eq!(versioned_name("report.xlsx"), PathBuf::from("report_v1.xlsx"));
        assert_eq!(versioned_name("a/b/report.xlsx"), PathBuf::from("a/b/report_v1.xlsx"));
        assert_eq!(versioned_name("report"), PathBuf::from("report_v1"));
        assert_eq!(versioned_name("my.report.xlsx"), PathBuf::from("my.report_v1.xlsx"));
    }

    #[test]
    fn insert_shifts_existing_cells() {
        let mut wb = Workbook::new("Sheet0");
        wb.set_text(1, 7, "1234-5678");
        wb.set_text(1, 8, "next");
        wb.insert_cols(8, 6);
        assert_eq!(wb.text(1, 7), "1234-5678");
        assert!(wb.cell(1, 8).is_empty());
        assert_eq!(wb.text(1, 14), "next");
    }

    #[test]
    fn empty_cell_rule() {
        let mut wb = Workbook::new("Sheet0");
        wb.set_text(2, 1, "   ");
        wb.set_number(2, 2, 0.0);
        assert!(wb.cell(2, 1).is_empty());
        assert!(!wb.cell(2, 2).is_empty());
        assert!(wb.cell(99, 99).is_empty());
    }
}
