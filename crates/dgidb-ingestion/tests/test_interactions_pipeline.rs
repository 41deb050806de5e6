//! End-to-end parsing of an on-disk interactions table with a stub lookup.
//!
//! Run with: cargo test --package dgidb-ingestion --test test_interactions_pipeline

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use dgidb_common::IngestError;
use dgidb_ingestion::{
    load_annotations, load_annotations_from, AssociationFields, IdentifierLookup, NoLookup,
    ParseStats, ParserOptions, SweepPolicy,
};
use serde_json::{json, Value};

const HEADER: &str = "gene_name\tgene_claim_name\tentrez_id\tinteraction_claim_source\tinteraction_types\tdrug_claim_name\tdrug_claim_primary_name\tdrug_name\tdrug_concept_id\tinteraction_group_score\tPMIDs";

/// In-memory catalog that records every query it answers.
#[derive(Default)]
struct StubCatalog {
    genes: HashMap<&'static str, &'static str>,
    drugs: HashMap<&'static str, &'static str>,
    queries: RefCell<Vec<String>>,
}

impl StubCatalog {
    fn new() -> Self {
        Self {
            genes: HashMap::from([("BRCA1", "672"), ("ABL1", "25")]),
            drugs: HashMap::from([("IMATINIB", "CHEMBL941")]),
            queries: RefCell::default(),
        }
    }
}

impl IdentifierLookup for StubCatalog {
    fn entrez_id(&self, gene_symbol: &str) -> Option<String> {
        self.queries.borrow_mut().push(format!("gene:{gene_symbol}"));
        self.genes.get(gene_symbol).map(|id| id.to_string())
    }

    fn chembl_id(&self, drug_name: &str) -> Option<String> {
        self.queries.borrow_mut().push(format!("drug:{drug_name}"));
        self.drugs.get(drug_name).map(|id| id.to_string())
    }
}

fn write_table(dir: &Path, name: &str, rows: &[&str]) {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(dir.join(name), content).unwrap();
}

fn row(fields: [&str; 11]) -> String {
    fields.join("\t")
}

#[test]
fn test_brca1_lookup_and_chembl_concept() {
    let dir = tempfile::tempdir().unwrap();
    let r = row([
        "BRCA1", "BRCA1", "", "ChemblInteractions", "inhibitor", "CHEMBL942", "CHEMBL942",
        "OLAPARIB", "chembl:CHEMBL942", "1.5", "12345",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&r]);

    let catalog = StubCatalog::new();
    let docs: Vec<Value> = load_annotations(dir.path(), &catalog, ParserOptions::default())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        docs,
        [json!({
            "_id": "6d301acf1f44d5d0",
            "subject": {
                "CHEMBL_COMPOUND": "CHEMBL942",
                "drug_name": "OLAPARIB",
                "id": "CHEMBL.COMPOUND:CHEMBL942"
            },
            "object": {
                "NCBIGene": "672",
                "SYMBOL": "BRCA1",
                "id": "NCBIGene:672"
            },
            "association": {
                "interaction_types": "inhibitor",
                "interaction_claim_source": "ChemblInteractions",
                "interaction_group_score": 1.5,
                "pmids": "12345"
            }
        })]
    );
    // chembl: concept ids never reach the drug catalog
    assert_eq!(*catalog.queries.borrow(), ["gene:BRCA1"]);
}

#[test]
fn test_unidentifiable_rows_yield_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let no_ids = row(["", "", "", "DTC", "", "", "", "", "", "1", ""]);
    let wikidata_unnamed = row([
        "ABL1", "", "25", "DTC", "", "", "", "", "wikidata:Q419808", "1", "",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&no_ids, &wikidata_unnamed]);

    let catalog = StubCatalog::new();
    let mut parser = load_annotations(dir.path(), &catalog, ParserOptions::default()).unwrap();
    assert!(parser.next().is_none());
    assert_eq!(parser.stats(), ParseStats { rows: 2, emitted: 0, discarded: 2 });
    assert!(catalog.queries.borrow().is_empty());
}

#[test]
fn test_name_fallback_and_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let r = row([
        "NOVELGENE", "", "", "DTC", "", "", "", "IMATINIB", "wikidata:Q177094", "0.25", "",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&r]);

    let catalog = StubCatalog::new();
    let doc = load_annotations(dir.path(), &catalog, ParserOptions::default())
        .unwrap()
        .next()
        .unwrap()
        .unwrap();

    // unresolved NCBIGene and empty PMIDs are swept, the sentinel tag survives
    assert_eq!(doc["object"], json!({"SYMBOL": "NOVELGENE", "id": "name:NOVELGENE"}));
    assert_eq!(doc["subject"]["id"], "CHEMBL.COMPOUND:CHEMBL941");
    assert_eq!(
        doc["association"],
        json!({
            "interaction_types": "not_applicable",
            "interaction_claim_source": "DTC",
            "interaction_group_score": 0.25
        })
    );
    assert_eq!(
        *catalog.queries.borrow(),
        ["gene:NOVELGENE", "drug:IMATINIB"]
    );
}

#[test]
fn test_multi_valued_fields_stay_lists() {
    let dir = tempfile::tempdir().unwrap();
    let r = row([
        "ABL1", "", "25", "GuideToPharmacology", "partial agonist,antagonist", "", "",
        "IMATINIB", "chembl:CHEMBL941", "3", "111,222",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&r]);

    let doc = load_annotations(dir.path(), NoLookup, ParserOptions::default())
        .unwrap()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(
        doc["association"]["interaction_types"],
        json!(["partial_agonist", "antagonist"])
    );
    assert_eq!(doc["association"]["pmids"], json!(["111", "222"]));
    assert_eq!(doc["association"]["interaction_group_score"], 3.0);
}

#[test]
fn test_bad_concept_prefix_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = row([
        "ABL1", "", "25", "DTC", "", "", "", "IMATINIB", "chembl:CHEMBL941", "1", "",
    ]);
    let bad = row([
        "ABL1", "", "25", "DTC", "", "", "", "IMATINIB", "notaprefix:123", "1", "",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&good, &bad, &good]);

    let results: Vec<_> = load_annotations(dir.path(), NoLookup, ParserOptions::default())
        .unwrap()
        .collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    match &results[1] {
        Err(IngestError::DrugConceptId { concept_id, drug_name }) => {
            assert_eq!(concept_id, "notaprefix:123");
            assert_eq!(drug_name, "IMATINIB");
        }
        other => panic!("expected a drug concept id error, got {other:?}"),
    }
}

#[test]
fn test_quoted_drug_name_is_unquoted() {
    let dir = tempfile::tempdir().unwrap();
    let quoted = row(["ABL1", "", "25", "DTC", "", "", "", "\"IMATINIB\"", "", "1", ""]);
    write_table(dir.path(), "interactions.tsv", &[&quoted]);

    let docs: Vec<Value> = load_annotations(dir.path(), NoLookup, ParserOptions::default())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["_id"], "2f4d40e20500ac8c");
    assert_eq!(docs[0]["subject"], json!({"drug_name": "IMATINIB", "id": "name:IMATINIB"}));
}

#[test]
fn test_non_finite_score_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let nan = row([
        "ABL1", "", "25", "DTC", "", "", "", "IMATINIB", "chembl:CHEMBL941", "nan", "",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&nan]);

    let mut parser = load_annotations(dir.path(), NoLookup, ParserOptions::default()).unwrap();
    assert!(matches!(parser.next(), Some(Err(IngestError::NonFiniteScore(_)))));
    assert!(parser.next().is_none());
}

#[test]
fn test_bad_score_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let bad = row([
        "ABL1", "", "25", "DTC", "", "", "", "IMATINIB", "chembl:CHEMBL941", "high", "",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&bad]);

    let mut parser = load_annotations(dir.path(), NoLookup, ParserOptions::default()).unwrap();
    assert!(matches!(parser.next(), Some(Err(IngestError::Score { .. }))));
    assert!(parser.next().is_none());
}

#[test]
fn test_identical_rows_share_id() {
    let dir = tempfile::tempdir().unwrap();
    let a = row([
        "ABL1", "", "25", "DTC", "", "", "", "IMATINIB", "chembl:CHEMBL941", "1", "",
    ]);
    let b = row([
        "ABL1", "", "25", "DTC", "", "", "", "IMATINIB", "chembl:CHEMBL941", "2", "",
    ]);
    write_table(dir.path(), "interactions.tsv", &[&a, &a, &b]);

    let ids: Vec<Value> = load_annotations(dir.path(), NoLookup, ParserOptions::default())
        .unwrap()
        .map(|doc| doc.unwrap()["_id"].clone())
        .collect();

    assert_eq!(ids[0], ids[1]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn test_custom_file_and_field_naming() {
    let dir = tempfile::tempdir().unwrap();
    let r = row([
        "ABL1", "", "25", "DTC", "inhibitor", "", "", "IMATINIB", "chembl:CHEMBL941", "1", "9",
    ]);
    write_table(dir.path(), "dgidb_2024.tsv", &[&r]);

    let options = ParserOptions {
        association_fields: AssociationFields {
            interaction_types: "edge_label".to_string(),
            interaction_claim_source: "provided_by".to_string(),
            interaction_group_score: "score".to_string(),
            pmids: "publications".to_string(),
        },
        sweep: SweepPolicy::empty_only(),
    };
    let doc = load_annotations_from(dir.path(), "dgidb_2024.tsv", NoLookup, options)
        .unwrap()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(
        doc["association"],
        json!({"edge_label": "inhibitor", "provided_by": "DTC", "score": 1.0, "publications": "9"})
    );
}

#[test]
fn test_missing_table_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_annotations(dir.path(), NoLookup, ParserOptions::default()).is_err());
}
