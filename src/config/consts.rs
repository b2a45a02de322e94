// src/config/consts.rs

// Net config
pub const SPRINGER_BASE: &str = "https://link.springer.com";
pub const DOI_BASE: &str = "https://dx.doi.org";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Report layout
pub const SHEET_NAME: &str = "Sheet0";
pub const NEW_COLUMNS: usize = 6; // series, acronym, volume, year, package, subseries

// CLI defaults
pub const DEFAULT_FIRST_ROW: u32 = 10;
pub const DEFAULT_DOI_COL: char = 'D';
pub const DEFAULT_ISSN_COL: char = 'G';
pub const DEFAULT_FILENAME: &str = "Springer2018BookReport3.xlsx";

// Output versioning: report.xlsx -> report_v1.xlsx
pub const VERSION: u32 = 1;

// Checkpointing: full workbook save every N visited rows
pub const CHECKPOINT_EVERY: u32 = 1000;
