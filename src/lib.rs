//! A client for the [HubbleSite](https://hubblesite.org) v3 api.
//!
//! Every endpoint takes a [`Selection`] of pages, ids, terms, or dates.
//! A single value gives a single [`Body`] back,
//! while a list issues one request per element in order and gives a list back.

mod body;
mod client;
mod endpoint;
mod error;
mod page;
mod return_type;
mod selection;
mod types;

pub use crate::{
    body::Body,
    client::Client,
    endpoint::Endpoint,
    error::Error,
    page::Page,
    return_type::ReturnType,
    selection::Selection,
    types::{
        FeedItem,
        GlossaryTerm,
        Image,
        ImageFile,
        ImageSummary,
        NewsItem,
        NewsRelease,
        Video,
        VideoFile,
        VideoSummary,
    },
};
pub use bytes::Bytes;
pub use url::Url;

/// The default api base url.
pub const API_BASE_URL: &str = "http://hubblesite.org/api/v3/";

/// Known image and video collections.
pub mod collection {
    /// Images and videos attached to news releases.
    pub const NEWS: &str = "news";
    /// The print shop.
    pub const PRINTSHOP: &str = "printshop";
    /// The STScI gallery.
    pub const STSCI_GALLERY: &str = "stsci_gallery";
    /// Spacecraft imagery.
    pub const SPACECRAFT: &str = "spacecraft";
    /// Desktop wallpapers.
    pub const WALLPAPER: &str = "wallpaper";
    /// Everything.
    pub const ALL: &str = "all";
}

/// Known external feed names.
pub mod feed {
    /// The ESA/Hubble news feed.
    pub const ESA: &str = "esa_feed";
    /// The JWST news feed.
    pub const JWST: &str = "jwst_feed";
    /// Hubble live.
    pub const ST_LIVE: &str = "st_live";
    /// JWST live.
    pub const ST_JWST: &str = "st_jwst";
}
