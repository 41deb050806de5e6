//! Identifier resolution and record normalisation.
//!
//! - `identifiers`: gene/drug id decisions, optionally backed by a lookup
//! - `record`: one raw row -> one [`InteractionDocument`](crate::models::InteractionDocument)

pub mod identifiers;
pub mod record;

pub use identifiers::{
    build_drug_subject_id, build_gene_object_id, is_empty, resolve_chembl_id, resolve_entrez_id,
};
pub use record::{create_doc_id, normalise_record, parse_interaction_types, NOT_APPLICABLE};
