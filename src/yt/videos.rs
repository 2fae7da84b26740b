pub const ENDPOINT: &str = "videos";

#[derive(Debug, Clone, PartialEq)]
pub struct VideosRequest {
    pub parts: Vec<String>,
    pub id: String,
}

impl VideosRequest {
    pub fn new(id: impl Into<String>, parts: &[String]) -> Self {
        Self {
            parts: parts.to_vec(),
            id: id.into(),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![("part", self.parts.join(",")), ("id", self.id.clone())]
    }
}
