//! Assembly of one interaction document from one raw row.

use blake2::digest::consts::U8;
use blake2::{Blake2b, Digest};
use dgidb_common::{IngestError, Result};
use tracing::trace;

use super::identifiers::{
    build_drug_subject_id, build_gene_object_id, resolve_chembl_id, resolve_entrez_id,
};
use crate::models::{
    Association, ColumnIndex, DrugSubject, GeneObject, InteractionDocument, RawRecord,
    DRUG_CONCEPT_ID, DRUG_NAME, ENTREZ_ID, GENE_NAME, INTERACTION_CLAIM_SOURCE,
    INTERACTION_GROUP_SCORE, INTERACTION_TYPES, PMIDS,
};
use crate::sources::IdentifierLookup;

/// BLAKE2b with an 8-byte digest.
type Blake2b64 = Blake2b<U8>;

/// Tag used when a row lists no interaction type.
pub const NOT_APPLICABLE: &str = "not_applicable";

const FIELD_SEPARATOR: &str = "-";

/// Hex BLAKE2b-64 digest of the row's fields joined with `-`.
pub fn create_doc_id(fields: &[String]) -> String {
    let mut hasher = Blake2b64::new();
    hasher.update(fields.join(FIELD_SEPARATOR).as_bytes());
    hex::encode(hasher.finalize())
}

/// `"partial agonist"` -> `["partial_agonist"]`,
/// `"agonist,antagonist"` -> `["agonist", "antagonist"]`.
pub fn parse_interaction_types(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return vec![NOT_APPLICABLE.to_string()];
    }
    raw.replace(' ', "_").split(',').map(String::from).collect()
}

/// Comma-separated PubMed ids. Empty input gives `[""]`, left for the sweep.
pub fn parse_pmids(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}

/// Whitespace-trimmed `f64`. NaN and infinities have no JSON form and are rejected.
pub fn parse_score(raw: &str) -> Result<f64> {
    let score = raw.trim().parse::<f64>().map_err(|source| IngestError::Score {
        value: raw.to_string(),
        source,
    })?;
    if !score.is_finite() {
        return Err(IngestError::NonFiniteScore(raw.to_string()));
    }
    Ok(score)
}

/// Builds the document for `record`, or `Ok(None)` when either side of the
/// interaction cannot be identified.
///
/// The gene side is resolved first; a row dropped there never reaches the
/// drug lookup or the drug concept id check.
pub fn normalise_record<L>(
    record: &RawRecord,
    columns: &ColumnIndex,
    lookup: &L,
) -> Result<Option<InteractionDocument>>
where
    L: IdentifierLookup + ?Sized,
{
    let id = create_doc_id(record.fields());

    // Object
    let gene_name = columns.field(record, GENE_NAME)?;
    let entrez_id = resolve_entrez_id(columns.field(record, ENTREZ_ID)?, gene_name, lookup);
    let Some(object_id) = build_gene_object_id(entrez_id.as_deref(), gene_name) else {
        trace!(line = record.line(), "Discarding row without gene identity");
        return Ok(None);
    };
    let object = GeneObject {
        ncbi_gene: entrez_id.unwrap_or_default(),
        symbol: gene_name.to_string(),
        id: object_id,
    };

    // Subject
    let drug_name = columns.field(record, DRUG_NAME)?;
    let chembl_id = resolve_chembl_id(columns.field(record, DRUG_CONCEPT_ID)?, drug_name, lookup)?;
    let Some(subject_id) = build_drug_subject_id(chembl_id.as_deref(), drug_name) else {
        trace!(line = record.line(), "Discarding row without drug identity");
        return Ok(None);
    };
    let subject = DrugSubject {
        chembl_compound: chembl_id.unwrap_or_default(),
        drug_name: drug_name.to_string(),
        id: subject_id,
    };

    // Association
    let association = Association {
        interaction_types: parse_interaction_types(columns.field(record, INTERACTION_TYPES)?),
        interaction_claim_source: columns.field(record, INTERACTION_CLAIM_SOURCE)?.to_string(),
        interaction_group_score: parse_score(columns.field(record, INTERACTION_GROUP_SCORE)?)?,
        pmids: parse_pmids(columns.field(record, PMIDS)?),
    };

    Ok(Some(InteractionDocument { id, subject, object, association }))
}
