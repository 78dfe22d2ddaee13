use crate::{
    Error,
    Page,
};
use url::Url;

/// An api endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// A page of news.
    News { page: Page },

    /// A news release.
    NewsRelease { id: &'a str },

    /// A page of an image collection.
    Images { collection: &'a str, page: Page },

    /// An image.
    Image { id: &'a str },

    /// A page of a video collection.
    Videos { collection: &'a str, page: Page },

    /// A video.
    Video { id: &'a str },

    /// A page of glossary terms.
    Glossary { page: Page },

    /// A glossary term.
    GlossaryTerm { term: &'a str },

    /// An external rss feed.
    ExternalFeed { feed_name: &'a str },

    /// An external rss feed, starting from a publication date.
    ExternalFeedSince { feed_name: &'a str, pub_date: &'a str },
}

impl Endpoint<'_> {
    /// Get the path segments, relative to the api base.
    fn path_segments(&self) -> ([&str; 3], usize) {
        match *self {
            Self::News { .. } => (["news", "", ""], 1),
            Self::NewsRelease { id } => (["news_release", id, ""], 2),
            Self::Images { collection, .. } => (["images", collection, ""], 2),
            Self::Image { id } => (["image", id, ""], 2),
            Self::Videos { collection, .. } => (["videos", collection, ""], 2),
            Self::Video { id } => (["video", id, ""], 2),
            Self::Glossary { .. } => (["glossary", "", ""], 1),
            Self::GlossaryTerm { term } => (["glossary", term, ""], 2),
            Self::ExternalFeed { feed_name } => (["external_feed", feed_name, ""], 2),
            Self::ExternalFeedSince {
                feed_name,
                pub_date,
            } => (["external_feed", feed_name, pub_date], 3),
        }
    }

    /// Get the page, if this endpoint is paginated.
    pub fn page(&self) -> Option<Page> {
        match *self {
            Self::News { page } | Self::Glossary { page } => Some(page),
            Self::Images { page, .. } | Self::Videos { page, .. } => Some(page),
            _ => None,
        }
    }

    /// Get the url for this endpoint, relative to the given api base.
    ///
    /// Path segments are percent-encoded.
    /// The base may or may not end with a slash.
    ///
    /// # Errors
    /// This fails if `base` cannot be a base, like a `mailto:` url.
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.clone();
        let (segments, len) = self.path_segments();

        url.path_segments_mut()
            .map_err(|_| Error::CannotBeABase(base.as_str().into()))?
            .pop_if_empty()
            .extend(&segments[..len]);

        if let Some(page) = self.page() {
            let mut buffer = itoa::Buffer::new();
            url.query_pairs_mut()
                .append_pair("page", page.format(&mut buffer));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn base() -> Url {
        Url::parse(crate::API_BASE_URL).expect("invalid base url")
    }

    #[test]
    fn news() {
        let url = Endpoint::News {
            page: Page::Number(2),
        }
        .url(&base())
        .unwrap();
        assert_eq!(url.as_str(), "http://hubblesite.org/api/v3/news?page=2");

        let url = Endpoint::News { page: Page::All }.url(&base()).unwrap();
        assert_eq!(url.as_str(), "http://hubblesite.org/api/v3/news?page=all");
    }

    #[test]
    fn paths() {
        let cases = [
            (
                Endpoint::NewsRelease { id: "2016-24" },
                "http://hubblesite.org/api/v3/news_release/2016-24",
            ),
            (
                Endpoint::Images {
                    collection: "spacecraft",
                    page: Page::Number(1),
                },
                "http://hubblesite.org/api/v3/images/spacecraft?page=1",
            ),
            (
                Endpoint::Image { id: "3825" },
                "http://hubblesite.org/api/v3/image/3825",
            ),
            (
                Endpoint::Videos {
                    collection: "news",
                    page: Page::Number(3),
                },
                "http://hubblesite.org/api/v3/videos/news?page=3",
            ),
            (
                Endpoint::Video { id: "1143" },
                "http://hubblesite.org/api/v3/video/1143",
            ),
            (
                Endpoint::Glossary {
                    page: Page::Number(1),
                },
                "http://hubblesite.org/api/v3/glossary?page=1",
            ),
            (
                Endpoint::GlossaryTerm { term: "Big Bang" },
                "http://hubblesite.org/api/v3/glossary/Big%20Bang",
            ),
            (
                Endpoint::ExternalFeed {
                    feed_name: "esa_feed",
                },
                "http://hubblesite.org/api/v3/external_feed/esa_feed",
            ),
            (
                Endpoint::ExternalFeedSince {
                    feed_name: "jwst_feed",
                    pub_date: "2017-01-01",
                },
                "http://hubblesite.org/api/v3/external_feed/jwst_feed/2017-01-01",
            ),
        ];

        for (endpoint, expected) in cases {
            let url = endpoint.url(&base()).expect("failed to build url");
            assert_eq!(url.as_str(), expected, "{endpoint:?}");
        }
    }

    #[test]
    fn segments_are_escaped() {
        let url = Endpoint::NewsRelease { id: "a/b?c" }.url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://hubblesite.org/api/v3/news_release/a%2Fb%3Fc"
        );
    }

    #[test]
    fn base_without_trailing_slash() {
        let base = Url::parse("http://localhost:8080/api/v3").unwrap();
        let url = Endpoint::Image { id: "1" }.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v3/image/1");
    }

    #[test]
    fn cannot_be_a_base() {
        let base = Url::parse("mailto:hubble@example.com").unwrap();
        let error = Endpoint::Glossary { page: Page::All }
            .url(&base)
            .expect_err("built a url from a non-base url");
        assert!(matches!(error, Error::CannotBeABase(_)));
    }
}
