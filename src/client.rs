use crate::{
    Body,
    Endpoint,
    Error,
    Page,
    ReturnType,
    Selection,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const DEFAULT_USER_AGENT: &str = "hubble-rs";

/// A HubbleSite api client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The api base url
    base_url: Url,
}

impl Client {
    /// Make a new [`Client`].
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .expect("failed to build client");
        let base_url = Url::parse(crate::API_BASE_URL).expect("invalid `API_BASE_URL`");

        Self { client, base_url }
    }

    /// Make a new [`Client`] that talks to the api at the given base url.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::new()
        }
    }

    /// Make a new [`Client`] from an existing http client and a base url.
    pub fn from_reqwest(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Get the api base url.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a GET request to an endpoint and decode the body with the given [`ReturnType`].
    pub async fn get(
        &self,
        endpoint: Endpoint<'_>,
        return_type: ReturnType,
    ) -> Result<Body, Error> {
        let url = endpoint.url(&self.base_url)?;
        self.get_url(url, return_type).await
    }

    /// Send a GET request to an endpoint and deserialize the json body.
    pub async fn get_typed<T>(&self, endpoint: Endpoint<'_>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!(%url, "fetching typed");
        Ok(self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    /// Send one GET request per endpoint, in order.
    ///
    /// A single endpoint gives a single body back, a list gives a list of the same length back.
    /// The first error aborts the remaining requests.
    pub async fn get_each(
        &self,
        endpoints: Selection<Endpoint<'_>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let urls = endpoints.try_map(|endpoint| endpoint.url(&self.base_url))?;

        match urls {
            Selection::One(url) => Ok(Selection::One(self.get_url(url, return_type).await?)),
            Selection::Many(urls) => {
                let total = urls.len();
                let mut bodies = Vec::with_capacity(total);
                for (i, url) in urls.into_iter().enumerate() {
                    tracing::trace!(index = i, total, "fetching selection entry");
                    bodies.push(self.get_url(url, return_type).await?);
                }
                Ok(Selection::Many(bodies))
            }
        }
    }

    async fn get_url(&self, url: Url, return_type: ReturnType) -> Result<Body, Error> {
        tracing::debug!(%url, %return_type, "fetching");
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?;
        Body::from_response(response, return_type).await
    }

    /// Get pages of news.
    pub async fn news(
        &self,
        pages: impl Into<Selection<Page>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let endpoints = pages.into().map(|page| Endpoint::News { page });
        self.get_each(endpoints, return_type).await
    }

    /// Get news releases by id.
    ///
    /// Ids look like `2016-24`. `first` and `last` are also accepted.
    pub async fn news_release(
        &self,
        ids: impl Into<Selection<String>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let ids = ids.into();
        let endpoints = ids.as_ref().map(|id| Endpoint::NewsRelease { id: id.as_str() });
        self.get_each(endpoints, return_type).await
    }

    /// Get pages of an image collection.
    pub async fn images(
        &self,
        collection: &str,
        pages: impl Into<Selection<Page>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let endpoints = pages
            .into()
            .map(|page| Endpoint::Images { collection, page });
        self.get_each(endpoints, return_type).await
    }

    /// Get images by id.
    pub async fn image(
        &self,
        ids: impl Into<Selection<String>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let ids = ids.into();
        let endpoints = ids.as_ref().map(|id| Endpoint::Image { id: id.as_str() });
        self.get_each(endpoints, return_type).await
    }

    /// Get pages of a video collection.
    pub async fn videos(
        &self,
        collection: &str,
        pages: impl Into<Selection<Page>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let endpoints = pages
            .into()
            .map(|page| Endpoint::Videos { collection, page });
        self.get_each(endpoints, return_type).await
    }

    /// Get videos by id.
    pub async fn video(
        &self,
        ids: impl Into<Selection<String>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let ids = ids.into();
        let endpoints = ids.as_ref().map(|id| Endpoint::Video { id: id.as_str() });
        self.get_each(endpoints, return_type).await
    }

    /// Get pages of glossary terms.
    pub async fn glossary(
        &self,
        pages: impl Into<Selection<Page>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let endpoints = pages.into().map(|page| Endpoint::Glossary { page });
        self.get_each(endpoints, return_type).await
    }

    /// Lookup glossary terms.
    pub async fn glossary_term(
        &self,
        terms: impl Into<Selection<String>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let terms = terms.into();
        let endpoints = terms.as_ref().map(|term| Endpoint::GlossaryTerm {
            term: term.as_str(),
        });
        self.get_each(endpoints, return_type).await
    }

    /// Get external rss feeds by name.
    pub async fn external_feed(
        &self,
        feed_names: impl Into<Selection<String>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let feed_names = feed_names.into();
        let endpoints = feed_names
            .as_ref()
            .map(|feed_name| Endpoint::ExternalFeed {
                feed_name: feed_name.as_str(),
            });
        self.get_each(endpoints, return_type).await
    }

    /// Get an external rss feed, starting from each of the given publication dates.
    pub async fn external_feed_since(
        &self,
        feed_name: &str,
        pub_dates: impl Into<Selection<String>>,
        return_type: ReturnType,
    ) -> Result<Selection<Body>, Error> {
        let pub_dates = pub_dates.into();
        let endpoints = pub_dates
            .as_ref()
            .map(|pub_date| Endpoint::ExternalFeedSince {
                feed_name,
                pub_date: pub_date.as_str(),
            });
        self.get_each(endpoints, return_type).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
