//! Reading CAS numbers from newline-delimited text.

use crate::types::CasNumber;
use std::io::{self, BufRead};

/// Read one CAS number per line, trimming whitespace and dropping blank
/// lines. Input order is preserved and duplicates are kept.
pub fn read_cas_numbers<R: BufRead>(reader: R) -> io::Result<Vec<CasNumber>> {
    reader
        .lines()
        .filter_map(|line| line.map(|line| CasNumber::new(&line)).transpose())
        .collect()
}

/// Same as [`read_cas_numbers`] for text already in memory.
pub fn parse_cas_numbers(text: &str) -> Vec<CasNumber> {
    text.lines().filter_map(CasNumber::new).collect()
}
