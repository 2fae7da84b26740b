pub const ITEMS_ENDPOINT: &str = "playlistItems";
pub const ENDPOINT: &str = "playlists";

pub const ITEMS_MAX_RESULTS: u32 = 3;
pub const ITEMS_FIELDS: &str = "items/snippet/title,items/snippet/resourceId/videoId,nextPageToken";

pub const PLAYLISTS_MAX_RESULTS: u32 = 50;
pub const PLAYLISTS_FIELDS: &str = "items/snippet/title,items/id";

/// `playlistItems.list` for one playlist, one page at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistItemsRequest {
    pub parts: Vec<String>,
    pub playlist_id: String,
    pub max_results: u32,
    pub fields: Option<String>,
    pub page_token: Option<String>,
}

impl PlaylistItemsRequest {
    pub fn new(playlist_id: impl Into<String>, parts: &[String]) -> Self {
        Self {
            parts: parts.to_vec(),
            playlist_id: playlist_id.into(),
            max_results: ITEMS_MAX_RESULTS,
            fields: Some(ITEMS_FIELDS.to_owned()),
            page_token: None,
        }
    }

    pub fn page_token(mut self, token: Option<&str>) -> Self {
        self.page_token = token.filter(|t| !t.is_empty()).map(str::to_owned);
        self
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", self.parts.join(",")),
            ("playlistId", self.playlist_id.clone()),
            ("maxResults", self.max_results.to_string()),
        ];
        if let Some(fields) = &self.fields {
            params.push(("fields", fields.clone()));
        }
        if let Some(token) = &self.page_token {
            params.push(("pageToken", token.clone()));
        }
        params
    }
}

/// `playlists.list` for every playlist owned by a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistsRequest {
    pub parts: Vec<String>,
    pub channel_id: String,
    pub max_results: u32,
    pub fields: Option<String>,
}

impl PlaylistsRequest {
    pub fn new(channel_id: impl Into<String>, parts: &[String]) -> Self {
        Self {
            parts: parts.to_vec(),
            channel_id: channel_id.into(),
            max_results: PLAYLISTS_MAX_RESULTS,
            fields: Some(PLAYLISTS_FIELDS.to_owned()),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", self.parts.join(",")),
            ("channelId", self.channel_id.clone()),
            ("maxResults", self.max_results.to_string()),
        ];
        if let Some(fields) = &self.fields {
            params.push(("fields", fields.clone()));
        }
        params
    }
}
