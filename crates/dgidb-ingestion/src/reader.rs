//! Lazy tab-separated row reader.
//!
//! Every line is yielded as a [`RawRecord`], the header included. Fields are
//! split on tabs with the usual `"` quoting (`""` inside a quoted field is a
//! literal quote), and rows may differ in length.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter};
use dgidb_common::Result;

use crate::models::RawRecord;

/// Forward-only iterator over the rows of a TSV source.
pub struct TsvRows<R> {
    records: StringRecordsIntoIter<R>,
}

impl TsvRows<File> {
    /// Opens a TSV file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let reader = builder().from_path(path)?;
        Ok(Self { records: reader.into_records() })
    }
}

impl<R: Read> TsvRows<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { records: builder().from_reader(reader).into_records() }
    }
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true);
    builder
}

impl<R: Read> Iterator for TsvRows<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields = record.iter().map(String::from).collect();
        Some(Ok(RawRecord::new(line, fields)))
    }
}
