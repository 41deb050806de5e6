//! MyGene.info gene query.
//!
//! Query docs: https://docs.mygene.info/en/latest/doc/query_service.html
//! Endpoint: http://mygene.info/v3/query
//!
//! A symbol search restricted to human genes, returning only `entrezgene`.

use serde_json::Value;
use url::Url;

use super::non_empty;

pub const MYGENE_QUERY_URL: &str = "http://mygene.info/v3/query";

/// `{base}?q=symbol:{gene_symbol}&fields=entrezgene&species=human`
pub fn gene_query_url(base: &str, gene_symbol: &str) -> Result<Url, url::ParseError> {
    let q = format!("symbol:{gene_symbol}");
    Url::parse_with_params(
        base,
        &[("q", q.as_str()), ("fields", "entrezgene"), ("species", "human")],
    )
}

/// Entrez id of the first hit. MyGene has served `entrezgene` both as a
/// string and as an integer.
pub fn entrez_id_from_response(body: &Value) -> Option<String> {
    let hit = body.get("hits")?.as_array()?.first()?;
    match hit.get("entrezgene")? {
        Value::String(id) => non_empty(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
