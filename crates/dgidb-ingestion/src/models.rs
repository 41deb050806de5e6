//! Core data models for the interaction parser.
//!
//! ```text
//!   | Column Names             | Key Names
//! --+--------------------------+--------------------------------------
//! 0 | gene_name                | object.SYMBOL
//! 1 | gene_claim_name          |
//! 2 | entrez_id                | object.NCBIGene
//! 3 | interaction_claim_source | association.interaction_claim_source
//! 4 | interaction_types        | association.interaction_types
//! 5 | drug_claim_name          |
//! 6 | drug_claim_primary_name  |
//! 7 | drug_name                | subject.drug_name
//! 8 | drug_concept_id          | subject.CHEMBL_COMPOUND
//! 9 | interaction_group_score  | association.interaction_group_score
//! 10| PMIDs                    | association.pmids
//! ```

use std::collections::HashMap;

use dgidb_common::{IngestError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// ── Columns ──────────────────────────────────────────────────────────────────

pub const GENE_NAME: &str = "gene_name";
pub const GENE_CLAIM_NAME: &str = "gene_claim_name";
pub const ENTREZ_ID: &str = "entrez_id";
pub const INTERACTION_CLAIM_SOURCE: &str = "interaction_claim_source";
pub const INTERACTION_TYPES: &str = "interaction_types";
pub const DRUG_CLAIM_NAME: &str = "drug_claim_name";
pub const DRUG_CLAIM_PRIMARY_NAME: &str = "drug_claim_primary_name";
pub const DRUG_NAME: &str = "drug_name";
pub const DRUG_CONCEPT_ID: &str = "drug_concept_id";
pub const INTERACTION_GROUP_SCORE: &str = "interaction_group_score";
pub const PMIDS: &str = "PMIDs";

/// Every column of the DGIdb interactions table, in file order.
pub const COLUMNS: [&str; 11] = [
    GENE_NAME,
    GENE_CLAIM_NAME,
    ENTREZ_ID,
    INTERACTION_CLAIM_SOURCE,
    INTERACTION_TYPES,
    DRUG_CLAIM_NAME,
    DRUG_CLAIM_PRIMARY_NAME,
    DRUG_NAME,
    DRUG_CONCEPT_ID,
    INTERACTION_GROUP_SCORE,
    PMIDS,
];

/// Columns the normaliser reads. A header without any of these is rejected.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    GENE_NAME,
    ENTREZ_ID,
    INTERACTION_CLAIM_SOURCE,
    INTERACTION_TYPES,
    DRUG_NAME,
    DRUG_CONCEPT_ID,
    INTERACTION_GROUP_SCORE,
    PMIDS,
];

// ── Raw rows ─────────────────────────────────────────────────────────────────

/// One data row of the source table, fields in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    line: u64,
    fields: Vec<String>,
}

impl RawRecord {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// 1-based line number in the source file (0 when unknown).
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Column-name to position mapping, built once from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Builds the index and checks that every column in [`REQUIRED_COLUMNS`]
    /// is present. With duplicate header names the last one wins.
    pub fn from_header(header: &[String]) -> Result<Self> {
        let positions: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !positions.contains_key(**c)) {
            return Err(IngestError::MissingColumn(missing.to_string()));
        }

        Ok(Self { positions })
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Returns the value of `column` in `record`.
    pub fn field<'r>(&self, record: &'r RawRecord, column: &str) -> Result<&'r str> {
        let index = self
            .position(column)
            .ok_or_else(|| IngestError::MissingColumn(column.to_string()))?;

        record
            .fields()
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| IngestError::ShortRow {
                line: record.line(),
                found: record.fields().len(),
                column: column.to_string(),
                index,
            })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

// ── Output documents ─────────────────────────────────────────────────────────

/// Drug side of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrugSubject {
    /// ChEMBL id without prefix, empty when it could not be resolved
    #[serde(rename = "CHEMBL_COMPOUND")]
    pub chembl_compound: String,
    pub drug_name: String,
    /// `CHEMBL.COMPOUND:<id>` or `name:<drug name>`
    pub id: String,
}

/// Gene side of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneObject {
    /// Entrez gene id, empty when it could not be resolved
    #[serde(rename = "NCBIGene")]
    pub ncbi_gene: String,
    #[serde(rename = "SYMBOL")]
    pub symbol: String,
    /// `NCBIGene:<id>` or `name:<gene name>`
    pub id: String,
}

/// Interaction evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub interaction_types: Vec<String>,
    pub interaction_claim_source: String,
    pub interaction_group_score: f64,
    pub pmids: Vec<String>,
}

/// A fully assembled (not yet cleaned) interaction document.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionDocument {
    pub id: String,
    pub subject: DrugSubject,
    pub object: GeneObject,
    pub association: Association,
}

/// Key names used for the association sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationFields {
    pub interaction_types: String,
    pub interaction_claim_source: String,
    pub interaction_group_score: String,
    pub pmids: String,
}

impl Default for AssociationFields {
    fn default() -> Self {
        Self {
            interaction_types: "interaction_types".to_string(),
            interaction_claim_source: "interaction_claim_source".to_string(),
            interaction_group_score: "interaction_group_score".to_string(),
            pmids: "pmids".to_string(),
        }
    }
}

impl InteractionDocument {
    /// Converts the document into a JSON value tree, naming the association
    /// keys after `fields`.
    pub fn to_value(&self, fields: &AssociationFields) -> Value {
        let a = &self.association;
        let mut association = Map::new();
        association.insert(fields.interaction_types.clone(), json!(a.interaction_types));
        association.insert(
            fields.interaction_claim_source.clone(),
            json!(a.interaction_claim_source),
        );
        association.insert(
            fields.interaction_group_score.clone(),
            json!(a.interaction_group_score),
        );
        association.insert(fields.pmids.clone(), json!(a.pmids));

        json!({
            "_id": self.id,
            "subject": self.subject,
            "object": self.object,
            "association": association,
        })
    }
}
