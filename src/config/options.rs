// src/config/options.rs
use crate::config::consts::{
    DEFAULT_DOI_COL, DEFAULT_FILENAME, DEFAULT_FIRST_ROW, DEFAULT_ISSN_COL,
};

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub first_row: u32,   // sheet row of the first book (header rows above)
    pub doi_col: char,    // column letter containing the DOI
    pub issn_col: char,   // column letter containing the ISSN
    pub filename: String, // source report; output gets a version tag
    pub rerun: bool,      // resume against the versioned output
}

impl RunOptions {
    pub fn new() -> Self {
        Self {
            first_row: DEFAULT_FIRST_ROW,
            doi_col: DEFAULT_DOI_COL,
            issn_col: DEFAULT_ISSN_COL,
            filename: s!(DEFAULT_FILENAME),
            rerun: false,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}
