pub const ENDPOINT: &str = "channels";

pub const UPLOADS_FIELDS: &str = "items/contentDetails/relatedPlaylists/uploads";
/// JSON pointer to the uploads playlist id inside a channel item.
pub const UPLOADS_POINTER: &str = "/contentDetails/relatedPlaylists/uploads";

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelsRequest {
    pub parts: Vec<String>,
    pub id: String,
    pub max_results: Option<u32>,
    pub fields: Option<String>,
}

impl ChannelsRequest {
    pub fn new(id: impl Into<String>, parts: &[String]) -> Self {
        Self {
            parts: parts.to_vec(),
            id: id.into(),
            max_results: None,
            fields: None,
        }
    }

    /// Just enough of `contentDetails` to find the uploads playlist.
    pub fn uploads(id: impl Into<String>) -> Self {
        Self {
            parts: vec!["contentDetails".to_owned()],
            id: id.into(),
            max_results: Some(1),
            fields: Some(UPLOADS_FIELDS.to_owned()),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("part", self.parts.join(",")), ("id", self.id.clone())];
        if let Some(max) = self.max_results {
            params.push(("maxResults", max.to_string()));
        }
        if let Some(fields) = &self.fields {
            params.push(("fields", fields.clone()));
        }
        params
    }
}
