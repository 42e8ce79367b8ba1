//! Pagination metadata for paginated responses.

use serde::Serialize;

/// Pagination block returned alongside ranked search results.
///
/// Field names follow the surrounding system's API contract (camelCase).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let meta = PaginationMeta {
            page: 2,
            limit: 20,
            total: 45,
            total_pages: 3,
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["page"], 2);
        assert_eq!(json["totalPages"], 3);
        assert!(json.get("total_pages").is_none());
    }
}
