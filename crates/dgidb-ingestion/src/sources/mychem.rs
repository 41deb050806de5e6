//! MyChem.info compound query.
//!
//! Query docs: https://docs.mychem.info/en/latest/doc/chem_query_service.html
//! Endpoint: http://mychem.info/v1/query
//!
//! A ChEMBL preferred-name search returning only `chembl.molecule_chembl_id`.

use serde_json::Value;
use url::Url;

use super::non_empty;

pub const MYCHEM_QUERY_URL: &str = "http://mychem.info/v1/query";

/// `{base}?q=chembl.pref_name:{drug_name}&fields=chembl.molecule_chembl_id`
pub fn drug_query_url(base: &str, drug_name: &str) -> Result<Url, url::ParseError> {
    let q = format!("chembl.pref_name:{drug_name}");
    Url::parse_with_params(
        base,
        &[("q", q.as_str()), ("fields", "chembl.molecule_chembl_id")],
    )
}

/// ChEMBL id of the first hit. A hit merged from several ChEMBL records
/// carries a list under `chembl`; its first entry is used.
pub fn chembl_id_from_response(body: &Value) -> Option<String> {
    let hit = body.get("hits")?.as_array()?.first()?;
    let chembl = match hit.get("chembl")? {
        Value::Array(entries) => entries.first()?,
        other => other,
    };
    non_empty(chembl.get("molecule_chembl_id")?.as_str()?)
}
