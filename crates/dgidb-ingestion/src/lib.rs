//! dgidb-ingestion: DGIdb drug-gene interaction parsing.
//!
//! - Tab-separated row reading (`reader`)
//! - Gene/drug identifier resolution and record normalisation (`normalise`)
//! - MyGene.info / MyChem.info identifier lookups (`sources`)
//! - Document cleanup (`cleanup`)
//! - The lazy document stream tying it together (`pipeline`)

pub mod cleanup;
pub mod models;
pub mod normalise;
pub mod pipeline;
pub mod reader;
pub mod sources;

pub use cleanup::SweepPolicy;
pub use models::{AssociationFields, ColumnIndex, InteractionDocument, RawRecord};
pub use pipeline::{
    load_annotations, load_annotations_from, InteractionParser, ParseStats, ParserOptions,
};
pub use sources::{IdentifierLookup, NoLookup};
