pub mod channels;
pub mod client;
pub mod playlists;
pub mod search;
pub mod types;
pub mod videos;

pub use channels::ChannelsRequest;
pub use client::YtClient;
pub use playlists::{PlaylistItemsRequest, PlaylistsRequest};
pub use search::SearchRequest;
pub use types::{ListResponse, ResourceKind, SearchItem, SearchListResponse};
pub use videos::VideosRequest;

use crate::error::Result;

/// The Data API v3 list endpoints the commands talk to.
#[allow(async_fn_in_trait)]
pub trait DataApi {
    async fn search_list(&self, req: &SearchRequest) -> Result<SearchListResponse>;
    async fn videos_list(&self, req: &VideosRequest) -> Result<ListResponse>;
    async fn playlist_items_list(&self, req: &PlaylistItemsRequest) -> Result<ListResponse>;
    async fn playlists_list(&self, req: &PlaylistsRequest) -> Result<ListResponse>;
    async fn channels_list(&self, req: &ChannelsRequest) -> Result<ListResponse>;
}
