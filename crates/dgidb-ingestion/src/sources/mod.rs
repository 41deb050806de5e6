//! Identifier lookup sources.
//!
//! Resolution only needs two questions answered: which Entrez id belongs to
//! a gene symbol, and which ChEMBL id belongs to a drug name. Both answers
//! are optional; an implementation never reports why it has no answer.

pub mod biothings;
pub mod mychem;
pub mod mygene;

pub use biothings::BioThingsClient;

/// Common interface for identifier lookup services.
pub trait IdentifierLookup {
    /// Entrez gene id for an exact human gene symbol.
    fn entrez_id(&self, gene_symbol: &str) -> Option<String>;

    /// ChEMBL compound id for an exact preferred drug name.
    fn chembl_id(&self, drug_name: &str) -> Option<String>;
}

impl<T: IdentifierLookup + ?Sized> IdentifierLookup for &T {
    fn entrez_id(&self, gene_symbol: &str) -> Option<String> {
        (**self).entrez_id(gene_symbol)
    }

    fn chembl_id(&self, drug_name: &str) -> Option<String> {
        (**self).chembl_id(drug_name)
    }
}

impl<T: IdentifierLookup + ?Sized> IdentifierLookup for Box<T> {
    fn entrez_id(&self, gene_symbol: &str) -> Option<String> {
        (**self).entrez_id(gene_symbol)
    }

    fn chembl_id(&self, drug_name: &str) -> Option<String> {
        (**self).chembl_id(drug_name)
    }
}

/// Offline lookup: never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl IdentifierLookup for NoLookup {
    fn entrez_id(&self, _gene_symbol: &str) -> Option<String> {
        None
    }

    fn chembl_id(&self, _drug_name: &str) -> Option<String> {
        None
    }
}

/// `None` for the empty string, so an empty catalog id reads as "no result".
pub(crate) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
