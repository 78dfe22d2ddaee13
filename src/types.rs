use std::collections::HashMap;
use url::Url;

/// An entry in a page of news.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewsItem {
    /// The release name
    pub name: String,

    /// The release id, like `2016-24`.
    pub news_id: String,

    /// The release url
    pub url: Option<String>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A news release
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewsRelease {
    /// The release name
    pub name: String,

    /// The release id
    pub news_id: String,

    /// The release url
    pub url: Option<String>,

    /// The publication date
    pub publication: Option<String>,

    /// The mission
    pub mission: Option<String>,

    /// The abstract.
    ///
    /// This is html.
    #[serde(rename = "abstract")]
    pub abstract_: Option<String>,

    /// Thumbnail url
    pub thumbnail: Option<Url>,

    /// Retina thumbnail url
    pub thumbnail_retina: Option<Url>,

    /// Ids of the images in this release
    #[serde(default)]
    pub release_images: Vec<u64>,

    /// Ids of the videos in this release
    #[serde(default)]
    pub release_videos: Vec<u64>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// An entry in a page of an image collection.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ImageSummary {
    /// The image id
    pub id: u64,

    /// The image name
    pub name: String,

    /// The name of the news release this belongs to
    pub news_name: Option<String>,

    /// The collection name
    pub collection_name: Option<String>,

    /// The mission
    pub mission: Option<String>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// An image
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Image {
    /// The image name
    pub name: String,

    /// The description.
    ///
    /// This is html.
    pub description: Option<String>,

    /// Image credits.
    ///
    /// This is html.
    pub credits: Option<String>,

    /// The name of the news release this belongs to
    pub news_name: Option<String>,

    /// The mission
    pub mission: Option<String>,

    /// The collection
    pub collection: Option<String>,

    /// The image files, in various sizes and formats
    #[serde(default)]
    pub image_files: Vec<ImageFile>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Image {
    /// Get the largest image file, by pixel count.
    pub fn largest_file(&self) -> Option<&ImageFile> {
        self.image_files
            .iter()
            .max_by_key(|file| u64::from(file.width) * u64::from(file.height))
    }
}

/// An image file
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ImageFile {
    /// The file url
    pub file_url: String,

    /// The file size, in bytes
    pub file_size: u64,

    /// The width
    #[serde(default)]
    pub width: u32,

    /// The height
    #[serde(default)]
    pub height: u32,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// An entry in a page of a video collection.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VideoSummary {
    /// The video id
    pub id: u64,

    /// The video name
    pub name: String,

    /// The collection name
    pub collection_name: Option<String>,

    /// The mission
    pub mission: Option<String>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A video
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Video {
    /// The video name
    pub name: String,

    /// A short description
    pub short_description: Option<String>,

    /// The youtube id, if it is on youtube
    pub youtube_id: Option<String>,

    /// The length, like `00:00:30`
    pub formatted_length: Option<String>,

    /// Video credits.
    ///
    /// This is html.
    pub credits: Option<String>,

    /// The mission
    pub mission: Option<String>,

    /// The collection
    pub collection: Option<String>,

    /// The video files, in various sizes and formats
    #[serde(default)]
    pub video_files: Vec<VideoFile>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A video file
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VideoFile {
    /// The file url
    pub file_url: String,

    /// The file size, in bytes
    pub file_size: u64,

    /// The format, like `MPEG-4`.
    pub format: Option<String>,

    /// The width
    pub width: Option<u32>,

    /// The height
    pub height: Option<u32>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A glossary term
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GlossaryTerm {
    /// The term
    pub name: String,

    /// The definition.
    ///
    /// Pages of glossary terms may omit this.
    pub definition: Option<String>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// An external rss feed item
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FeedItem {
    /// The title
    pub title: String,

    /// The description
    pub description: Option<String>,

    /// The publication date
    pub pub_date: Option<String>,

    /// The item link
    pub link: Option<Url>,

    /// An image url
    pub image: Option<Url>,

    /// A thumbnail url
    pub thumbnail: Option<Url>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;

    const NEWS: &str = include_str!("../test_data/news.json");
    const NEWS_RELEASE: &str = include_str!("../test_data/news_release.json");
    const IMAGES: &str = include_str!("../test_data/images.json");
    const IMAGE: &str = include_str!("../test_data/image.json");
    const VIDEO: &str = include_str!("../test_data/video.json");
    const GLOSSARY_TERM: &str = include_str!("../test_data/glossary_term.json");
    const EXTERNAL_FEED: &str = include_str!("../test_data/external_feed.json");

    #[test]
    fn parse_news() {
        let news: Vec<NewsItem> = serde_json::from_str(NEWS).expect("failed to parse");
        assert_eq!(news.len(), 3);
        assert!(news.iter().all(|item| item.unknown.is_empty()));
    }

    #[test]
    fn parse_news_release() {
        let release: NewsRelease = serde_json::from_str(NEWS_RELEASE).expect("failed to parse");
        assert_eq!(release.news_id, "2016-24");
        assert_eq!(release.release_images, [3825, 3826]);
        assert!(release.abstract_.is_some());
        // Fields not modeled are kept
        assert!(release.unknown.contains_key("keystone_image_2x"));
    }

    #[test]
    fn parse_images() {
        let images: Vec<ImageSummary> = serde_json::from_str(IMAGES).expect("failed to parse");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, 3825);
    }

    #[test]
    fn parse_image() {
        let image: Image = serde_json::from_str(IMAGE).expect("failed to parse");
        let largest = image.largest_file().expect("missing image files");
        assert_eq!(largest.width, 3000);
    }

    #[test]
    fn parse_video() {
        let video: Video = serde_json::from_str(VIDEO).expect("failed to parse");
        assert_eq!(video.video_files.len(), 2);
        assert_eq!(video.video_files[0].format.as_deref(), Some("MPEG-4"));
    }

    #[test]
    fn parse_glossary_term() {
        let term: GlossaryTerm = serde_json::from_str(GLOSSARY_TERM).expect("failed to parse");
        assert_eq!(term.name, "Big Bang");
        assert!(term.definition.is_some());
    }

    #[test]
    fn parse_external_feed() {
        let feed: Vec<FeedItem> = serde_json::from_str(EXTERNAL_FEED).expect("failed to parse");
        assert_eq!(feed.len(), 2);
        assert!(feed[0].link.is_some());
    }
}
