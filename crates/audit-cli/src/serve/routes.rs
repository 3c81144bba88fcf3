//! Request routing, independent of the HTTP transport.
//!
//! ```text
//! GET  /data/audits.json                      export artifact
//! GET  /api/navigation                        navigation tree
//! GET  /api/stats                             aggregate counts
//! GET  /api/filters                           filter options
//! GET  /api/audits?q=&limit=&<criterion>=     search + filters
//! GET  /api/audits/{id}                       one audit
//! GET  /api/categories/{slug}                 category node + audits
//! GET  /api/categories/{slug}/{subcategory}   subcategory node + audits
//! POST /api/cache/clear                       drop cached catalog state
//! ```

use std::borrow::Cow;

use audit_catalog::{CatalogContext, CatalogError};
use audit_core::{FilterCriteria, InventoryRecord, NavCategory, NavSubcategory, SearchHit};
use audit_search::set_criterion;
use serde::Serialize;
use serde_json::{Value, json};
use tiny_http::Method;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self { status: 200, body },
            Err(error) => Self::error(500, &format!("failed to serialize response: {error}")),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    total: usize,
    hits: &'a [SearchHit],
}

#[derive(Serialize)]
struct CategoryResponse<'a> {
    category: &'a NavCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    subcategory: Option<&'a NavSubcategory>,
    audits: Vec<&'a InventoryRecord>,
}

/// Answer one request against `catalog`.
pub fn route(catalog: &mut CatalogContext, method: &Method, url: &str) -> ApiResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let segments = match path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode)
        .collect::<Option<Vec<_>>>()
    {
        Some(segments) => segments,
        None => return ApiResponse::error(400, "path is not valid UTF-8"),
    };
    let segments: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();

    match (method, segments.as_slice()) {
        (Method::Post, ["api", "cache", "clear"]) => {
            catalog.clear_cache();
            ApiResponse::ok(&json!({ "cleared": true }))
        }
        (Method::Get, segments) => get(catalog, segments, query).unwrap_or_else(|error| {
            tracing::error!(%error, url, "request failed");
            ApiResponse::error(500, &format!("{error:#}"))
        }),
        _ => ApiResponse::error(405, "method not allowed"),
    }
}

fn get(
    catalog: &CatalogContext,
    segments: &[&str],
    query: &str,
) -> Result<ApiResponse, CatalogError> {
    let response = match segments {
        ["data", "audits.json"] => ApiResponse::ok(&catalog.export()?),
        ["api", "navigation"] => ApiResponse::ok(catalog.navigation()?),
        ["api", "stats"] => ApiResponse::ok(&catalog.stats()?),
        ["api", "filters"] => ApiResponse::ok(&catalog.filter_options()?),
        ["api", "audits"] => search(catalog, query)?,
        ["api", "audits", id] => catalog.audit(id)?.map_or_else(
            || ApiResponse::error(404, &format!("audit '{id}' not found")),
            ApiResponse::ok,
        ),
        ["api", "categories", slug] => match catalog.category(slug)? {
            Some(category) => ApiResponse::ok(&CategoryResponse {
                category,
                subcategory: None,
                audits: catalog.audits_by_category(slug)?,
            }),
            None => ApiResponse::error(404, &format!("category '{slug}' not found")),
        },
        ["api", "categories", slug, sub] => {
            let category = catalog.category(slug)?;
            match category.and_then(|c| c.subcategory(sub).map(|s| (c, s))) {
                Some((category, subcategory)) => ApiResponse::ok(&CategoryResponse {
                    category,
                    subcategory: Some(subcategory),
                    audits: catalog.audits_by_subcategory(slug, sub)?,
                }),
                None => ApiResponse::error(404, &format!("subcategory '{slug}/{sub}' not found")),
            }
        }
        _ => ApiResponse::error(404, "not found"),
    };
    Ok(response)
}

/// `q` is the search text, `limit` caps the hits, every other key is a
/// filter criterion.
fn search(catalog: &CatalogContext, query: &str) -> Result<ApiResponse, CatalogError> {
    let mut text = String::new();
    let mut limit = None;
    let mut criteria = FilterCriteria::default();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let Some(value) = decode(&raw.replace('+', " ")).map(Cow::into_owned) else {
            return Ok(ApiResponse::error(400, &format!("invalid encoding for '{key}'")));
        };
        match key {
            "q" => text = value,
            "limit" => match value.parse::<usize>() {
                Ok(parsed) => limit = Some(parsed),
                Err(_) => return Ok(ApiResponse::error(400, &format!("invalid limit '{value}'"))),
            },
            _ => {
                if let Err(error) = set_criterion(&mut criteria, key, &value) {
                    return Ok(ApiResponse::error(400, &error.to_string()));
                }
            }
        }
    }

    let mut hits = catalog.search(&text, (!criteria.is_empty()).then_some(&criteria))?;
    let total = hits.len();
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    Ok(ApiResponse::ok(&SearchResponse {
        query: &text,
        total,
        hits: &hits,
    }))
}

fn decode(component: &str) -> Option<Cow<'_, str>> {
    urlencoding::decode(component).ok()
}

#[cfg(test)]
mod tests {
    use audit_catalog::InventoryLoader;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const CSV: &str = "\
audit_id,file_path,audit_name,category,category_number,subcategory,tier,status,tdd,requires_source_code
1.1.sql-injection,a.yaml,SQL Injection,security-and-trust,1,input-validation,expert,active,yes,yes
1.2.xss,b.yaml,Cross Site Scripting,security-and-trust,1,output-encoding,focused,planned,no,yes
2.1.runbooks,c.yaml,Runbook Review,operations,2,incident-response,standard,active,no,no
";

    fn catalog(dir: &tempfile::TempDir) -> CatalogContext {
        let path = dir.path().join("AUDIT-INVENTORY.csv");
        std::fs::write(&path, CSV).unwrap();
        CatalogContext::new(InventoryLoader::new(path))
    }

    fn get(catalog: &mut CatalogContext, url: &str) -> ApiResponse {
        route(catalog, &Method::Get, url)
    }

    #[rstest]
    #[case("/data/audits.json", 200)]
    #[case("/api/navigation", 200)]
    #[case("/api/stats", 200)]
    #[case("/api/filters", 200)]
    #[case("/api/audits", 200)]
    #[case("/api/audits/1.2.xss", 200)]
    #[case("/api/audits/9.9.none", 404)]
    #[case("/api/categories/operations", 200)]
    #[case("/api/categories/security-and-trust/output-encoding", 200)]
    #[case("/api/categories/security-and-trust/nope", 404)]
    #[case("/api/categories/nope", 404)]
    #[case("/favicon.ico", 404)]
    #[case("/api/audits?tier=legendary", 400)]
    #[case("/api/audits?limit=many", 400)]
    fn status_codes(#[case] url: &str, #[case] status: u16) {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = catalog(&dir);
        assert_eq!(get(&mut catalog, url).status, status, "{url}");
    }

    #[test]
    fn search_applies_query_filters_and_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = catalog(&dir);

        let body = get(&mut catalog, "/api/audits?requiresSourceCode=true&status=active").body;
        assert_eq!(body["total"], 1);
        assert_eq!(body["hits"][0]["audit"]["audit_id"], "1.1.sql-injection");

        let body = get(&mut catalog, "/api/audits?q=cross+site").body;
        assert_eq!(body["query"], "cross site");
        assert_eq!(body["hits"][0]["audit"]["audit_id"], "1.2.xss");

        let body = get(&mut catalog, "/api/audits?limit=1").body;
        assert_eq!(body["total"], 3);
        assert_eq!(body["hits"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn category_responses_carry_node_and_audits() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = catalog(&dir);

        let body = get(&mut catalog, "/api/categories/security-and-trust").body;
        assert_eq!(body["category"]["title"], "Security & Trust");
        assert_eq!(body["audits"].as_array().map(Vec::len), Some(2));
        assert!(body.get("subcategory").is_none());

        let body = get(&mut catalog, "/api/categories/security-and-trust/input-validation").body;
        assert_eq!(body["subcategory"]["title"], "Input Validation");
        assert_eq!(body["audits"][0]["audit_id"], "1.1.sql-injection");
    }

    #[test]
    fn cache_clear_reloads_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = catalog(&dir);
        assert_eq!(get(&mut catalog, "/api/stats").body["total"], 3);

        let trimmed = CSV.lines().take(2).collect::<Vec<_>>().join("\n");
        std::fs::write(dir.path().join("AUDIT-INVENTORY.csv"), trimmed).unwrap();
        assert_eq!(get(&mut catalog, "/api/stats").body["total"], 3);

        let cleared = route(&mut catalog, &Method::Post, "/api/cache/clear");
        assert_eq!(cleared.status, 200);
        assert_eq!(get(&mut catalog, "/api/stats").body["total"], 1);
    }

    #[test]
    fn other_methods_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = catalog(&dir);
        assert_eq!(route(&mut catalog, &Method::Delete, "/api/stats").status, 405);
    }
}
