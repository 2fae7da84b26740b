use super::types::ResourceKind;

pub const ENDPOINT: &str = "search";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub parts: Vec<String>,
    pub query: String,
    pub max_results: u32,
    pub kind: Option<ResourceKind>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, max_results: u32) -> Self {
        Self {
            parts: vec!["id".to_owned(), "snippet".to_owned()],
            query: query.into(),
            max_results,
            kind: None,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", self.parts.join(",")),
            ("q", self.query.clone()),
            ("maxResults", self.max_results.to_string()),
        ];
        if let Some(kind) = self.kind {
            params.push(("type", kind.type_param().to_owned()));
        }
        params
    }
}
