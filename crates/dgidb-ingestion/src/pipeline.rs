//! Interaction document stream.
//!
//! Orchestrates the flow for one interactions table:
//!   1. Read the header row and build the column index
//!   2. For each data row, resolve gene and drug identifiers
//!   3. Assemble the subject/object/association document, or drop the row
//!   4. Sweep empty values and unwrap singleton lists
//!
//! Rows are processed one at a time, lookups included, as the consumer pulls
//! documents. The first error ends the stream.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use dgidb_common::{IngestError, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::cleanup::{clean_document, SweepPolicy};
use crate::models::{AssociationFields, ColumnIndex};
use crate::normalise::normalise_record;
use crate::reader::TsvRows;
use crate::sources::IdentifierLookup;

pub const DEFAULT_FILE_NAME: &str = "interactions.tsv";

// ── Options ───────────────────────────────────────────────────────────────────

/// Output shaping for a parser run.
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    pub association_fields: AssociationFields,
    pub sweep: SweepPolicy,
}

// ── Run counters ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Data rows read, header excluded.
    pub rows: usize,
    pub emitted: usize,
    /// Rows without a usable gene or drug identity.
    pub discarded: usize,
}

// ── Parser ────────────────────────────────────────────────────────────────────

/// Lazy, single-pass iterator of cleaned interaction documents.
pub struct InteractionParser<R, L> {
    rows: TsvRows<R>,
    columns: ColumnIndex,
    lookup: L,
    options: ParserOptions,
    stats: ParseStats,
    finished: bool,
}

impl<L: IdentifierLookup> InteractionParser<File, L> {
    /// Opens a TSV file and reads its header.
    pub fn open(path: &Path, lookup: L, options: ParserOptions) -> Result<Self> {
        info!(path = %path.display(), "Opening interactions table");
        Self::from_rows(TsvRows::open(path)?, lookup, options, &path.display().to_string())
    }
}

impl<R: Read, L: IdentifierLookup> InteractionParser<R, L> {
    pub fn from_reader(reader: R, lookup: L, options: ParserOptions) -> Result<Self> {
        Self::from_rows(TsvRows::from_reader(reader), lookup, options, "<reader>")
    }

    fn from_rows(
        mut rows: TsvRows<R>,
        lookup: L,
        options: ParserOptions,
        source: &str,
    ) -> Result<Self> {
        let header = rows
            .next()
            .ok_or_else(|| IngestError::EmptyFile(source.to_string()))??;
        let columns = ColumnIndex::from_header(header.fields())?;
        debug!(columns = columns.len(), "Header parsed");

        Ok(Self {
            rows,
            columns,
            lookup,
            options,
            stats: ParseStats::default(),
            finished: false,
        })
    }

    /// Counters so far; final once the iterator returned `None`.
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    fn fail(&mut self, err: IngestError) -> Option<Result<Value>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<R: Read, L: IdentifierLookup> Iterator for InteractionParser<R, L> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let record = match self.rows.next() {
                Some(Ok(record)) => record,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.finished = true;
                    info!(
                        rows = self.stats.rows,
                        emitted = self.stats.emitted,
                        discarded = self.stats.discarded,
                        "Interactions table exhausted"
                    );
                    return None;
                }
            };
            self.stats.rows += 1;

            match normalise_record(&record, &self.columns, &self.lookup) {
                Ok(Some(doc)) => {
                    self.stats.emitted += 1;
                    let value = doc.to_value(&self.options.association_fields);
                    return Some(Ok(clean_document(value, &self.options.sweep)));
                }
                Ok(None) => self.stats.discarded += 1,
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl<R: Read, L: IdentifierLookup> std::iter::FusedIterator for InteractionParser<R, L> {}

/// Opens `{data_dir}/interactions.tsv`.
pub fn load_annotations<L: IdentifierLookup>(
    data_dir: &Path,
    lookup: L,
    options: ParserOptions,
) -> Result<InteractionParser<File, L>> {
    load_annotations_from(data_dir, DEFAULT_FILE_NAME, lookup, options)
}

/// Opens `{data_dir}/{file_name}`.
pub fn load_annotations_from<L: IdentifierLookup>(
    data_dir: &Path,
    file_name: &str,
    lookup: L,
    options: ParserOptions,
) -> Result<InteractionParser<File, L>> {
    InteractionParser::open(&data_dir.join(file_name), lookup, options)
}
