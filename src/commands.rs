use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::output;
use crate::yt::channels::{self, UPLOADS_POINTER};
use crate::yt::{
    ChannelsRequest, DataApi, ListResponse, PlaylistItemsRequest, PlaylistsRequest, ResourceKind,
    SearchItem, SearchRequest, VideosRequest, playlists, videos,
};

/// Search results split by what they point at, id -> title.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchGroups {
    pub videos: BTreeMap<String, String>,
    pub channels: BTreeMap<String, String>,
    pub playlists: BTreeMap<String, String>,
}

impl SearchGroups {
    pub fn from_items(items: &[SearchItem]) -> Self {
        let mut groups = Self::default();
        for item in items {
            let Some((kind, id)) = item.id.resource() else {
                debug!(kind = %item.id.kind, "skipping search result");
                continue;
            };
            let target = match kind {
                ResourceKind::Video => &mut groups.videos,
                ResourceKind::Channel => &mut groups.channels,
                ResourceKind::Playlist => &mut groups.playlists,
            };
            target.insert(id.to_owned(), item.title().to_owned());
        }
        groups
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        output::write_ids(out, "Videos", &self.videos)?;
        output::write_ids(out, "Channels", &self.channels)?;
        output::write_ids(out, "Playlists", &self.playlists)?;
        Ok(())
    }
}

pub async fn search<A: DataApi, W: Write>(
    api: &A,
    query: &str,
    max_results: u32,
    out: &mut W,
) -> Result<SearchGroups> {
    info!(query, max_results, "search");
    let response = api.search_list(&SearchRequest::new(query, max_results)).await?;
    let groups = SearchGroups::from_items(&response.items);
    groups.write(out)?;
    Ok(groups)
}

fn ensure_items<T: Serialize>(endpoint: &'static str, response: &ListResponse<T>) -> Result<()> {
    if response.items.is_empty() {
        let raw = output::to_json_string(response).unwrap_or_default();
        warn!(endpoint, response = %raw, "empty item list");
        return Err(Error::NoContent { endpoint });
    }
    Ok(())
}

pub async fn video_details<A: DataApi, W: Write>(
    api: &A,
    id: &str,
    parts: &[String],
    out: &mut W,
) -> Result<()> {
    info!(id, ?parts, "get video");
    let response = api.videos_list(&VideosRequest::new(id, parts)).await?;
    ensure_items(videos::ENDPOINT, &response)?;
    output::write_json(out, &response.items[0])
}

pub async fn playlist_items<A: DataApi, W: Write>(
    api: &A,
    playlist_id: &str,
    parts: &[String],
    page_token: Option<&str>,
    out: &mut W,
) -> Result<()> {
    info!(playlist_id, ?parts, page_token, "get playlist items");
    let req = PlaylistItemsRequest::new(playlist_id, parts).page_token(page_token);
    let response = api.playlist_items_list(&req).await?;
    ensure_items(playlists::ITEMS_ENDPOINT, &response)?;
    output::write_json(out, &response)
}

pub async fn playlists<A: DataApi, W: Write>(
    api: &A,
    channel_id: &str,
    parts: &[String],
    out: &mut W,
) -> Result<()> {
    info!(channel_id, ?parts, "get playlists");
    let response = api
        .playlists_list(&PlaylistsRequest::new(channel_id, parts))
        .await?;
    ensure_items(playlists::ENDPOINT, &response)?;
    output::write_json(out, &response)
}

pub async fn channels<A: DataApi, W: Write>(
    api: &A,
    id: &str,
    parts: &[String],
    out: &mut W,
) -> Result<()> {
    info!(id, ?parts, "get channels");
    let response = api.channels_list(&ChannelsRequest::new(id, parts)).await?;
    ensure_items(channels::ENDPOINT, &response)?;
    output::write_json(out, &response)
}

/// Resolves a channel name to its id through a one-result channel search.
/// The raw response is printed before the id is returned.
pub async fn channel_id<A: DataApi, W: Write>(api: &A, name: &str, out: &mut W) -> Result<String> {
    info!(name, "get channel id");
    let req = SearchRequest {
        parts: vec!["id".to_owned()],
        kind: Some(ResourceKind::Channel),
        ..SearchRequest::new(name, 1)
    };
    let response = api.search_list(&req).await?;

    let item = response.items.first().ok_or(Error::NoResult)?;
    if item.id.kind != ResourceKind::Channel.kind() {
        return Err(Error::NotChannel {
            kind: item.id.kind.clone(),
        });
    }
    let id = item
        .id
        .channel_id
        .clone()
        .ok_or(Error::MissingField { field: "id.channelId" })?;

    output::write_json(out, &response)?;
    Ok(id)
}

pub async fn uploads_playlist_id<A: DataApi>(api: &A, channel_id: &str) -> Result<String> {
    info!(channel_id, "get uploads playlist");
    let response = api.channels_list(&ChannelsRequest::uploads(channel_id)).await?;
    ensure_items(channels::ENDPOINT, &response)?;
    response.items[0]
        .pointer(UPLOADS_POINTER)
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .ok_or(Error::MissingField {
            field: "contentDetails.relatedPlaylists.uploads",
        })
}

/// Prints the uploads playlist id of a channel, then one page of its items.
pub async fn uploads<A: DataApi, W: Write>(
    api: &A,
    channel_id: &str,
    parts: &[String],
    page_token: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let uploads = uploads_playlist_id(api, channel_id).await?;
    writeln!(out, "{uploads}")?;
    playlist_items(api, &uploads, parts, page_token, out).await
}
