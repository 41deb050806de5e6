//! Gene and drug identifier resolution.
//!
//! Resolution prefers the id already present in the row, falls back to a
//! catalog lookup by name, and finally to a `name:` CURIE. A `None` object or
//! subject id means the row cannot be identified and is discarded.

use dgidb_common::{IngestError, Result};

use crate::sources::IdentifierLookup;

pub const NCBI_GENE_PREFIX: &str = "NCBIGene:";
pub const CHEMBL_COMPOUND_PREFIX: &str = "CHEMBL.COMPOUND:";
pub const NAME_PREFIX: &str = "name:";

const WIKIDATA_CONCEPT: &str = "wikidata:";
const CHEMBL_CONCEPT: &str = "chembl:";

/// Absent or zero-length. `"0"` and whitespace are values.
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Keeps a present `entrez_id` as-is, otherwise looks the gene symbol up.
pub fn resolve_entrez_id<L>(entrez_id: &str, gene_name: &str, lookup: &L) -> Option<String>
where
    L: IdentifierLookup + ?Sized,
{
    if !entrez_id.is_empty() {
        return Some(entrez_id.to_string());
    }
    if gene_name.is_empty() {
        return None;
    }
    lookup.entrez_id(gene_name)
}

pub fn build_gene_object_id(entrez_id: Option<&str>, gene_name: &str) -> Option<String> {
    build_id(NCBI_GENE_PREFIX, entrez_id, gene_name)
}

/// Derives a ChEMBL id from a DGIdb drug concept id.
///
/// A concept id is empty, a `wikidata:` CURIE or a `chembl:` CURIE. The first
/// two need a lookup by drug name; the last carries the id after its first
/// colon. Any other shape is an input error.
pub fn resolve_chembl_id<L>(
    drug_concept_id: &str,
    drug_name: &str,
    lookup: &L,
) -> Result<Option<String>>
where
    L: IdentifierLookup + ?Sized,
{
    if drug_concept_id.is_empty() || drug_concept_id.starts_with(WIKIDATA_CONCEPT) {
        if drug_name.is_empty() {
            return Ok(None);
        }
        return Ok(lookup.chembl_id(drug_name));
    }

    if drug_concept_id.starts_with(CHEMBL_CONCEPT) {
        let chembl_id = drug_concept_id
            .split_once(':')
            .map(|(_, id)| id.to_string());
        return Ok(chembl_id);
    }

    Err(IngestError::DrugConceptId {
        concept_id: drug_concept_id.to_string(),
        drug_name: drug_name.to_string(),
    })
}

pub fn build_drug_subject_id(chembl_id: Option<&str>, drug_name: &str) -> Option<String> {
    build_id(CHEMBL_COMPOUND_PREFIX, chembl_id, drug_name)
}

fn build_id(prefix: &str, id: Option<&str>, name: &str) -> Option<String> {
    if !is_empty(id) {
        return id.map(|id| format!("{prefix}{id}"));
    }
    if name.is_empty() {
        // the caller discards the whole record
        return None;
    }
    Some(format!("{NAME_PREFIX}{name}"))
}
