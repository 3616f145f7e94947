use crate::{
    config::Environment, donation::Donation, errors::FetchError, news::News, page::ResourcePage,
    pagination::Pager, person::Person, query::build_url,
};
use log::{debug, info, warn};
use reqwest::{Response, Url};
use serde::Deserialize;
use std::time::Duration;

pub struct StnClient {
    url: String,
    client: reqwest::Client,
}

#[derive(Default)]
pub struct StnClientBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
}

impl StnClientBuilder {
    pub fn from_environment(env: &Environment) -> StnClientBuilder {
        StnClientBuilder {
            url: Some(env.server_url.clone()),
            timeout: env.timeout,
        }
    }
    pub fn set_url(mut self, url: &str) -> StnClientBuilder {
        self.url = Some(url.to_owned());
        self
    }
    /// Without this the HTTP stack's default applies, which never times out.
    pub fn set_timeout(mut self, timeout: Duration) -> StnClientBuilder {
        self.timeout = Some(timeout);
        self
    }
    pub fn build(&self) -> Result<StnClient, FetchError> {
        let Some(url) = self.url.as_deref() else {
            return Err(FetchError::IncompleteConfig());
        };
        let parsed = Url::parse(url)?;
        if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(FetchError::MalformedUrl(format!(
                "{url} must be a server URL without query or fragment"
            )));
        }

        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        let client = client.build().map_err(|e| {
            warn!("HTTP client could not be built: {e}");
            FetchError::IncompleteConfig()
        })?;
        Ok(StnClient::new(url.trim_end_matches('/').to_string(), client))
    }
}

impl StnClient {
    fn new(url: String, client: reqwest::Client) -> StnClient {
        StnClient { url, client }
    }

    fn url_from_path(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.url
    }

    async fn raw_get(&self, url: &str) -> Result<Response, FetchError> {
        let url = Url::parse(url)?;
        Ok(self.client.get(url).send().await?)
    }

    /// Issues one GET against `url` and decodes the body as a page of `T`.
    ///
    /// Non-2xx responses are reported as [`FetchError::Status`] without
    /// looking at the body.
    pub async fn fetch<T>(&self, url: &str) -> Result<ResourcePage<T>, FetchError>
    where
        for<'de2> T: Deserialize<'de2>,
    {
        let resp = self.raw_get(url).await?;
        let status = resp.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}");
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.bytes().await?;
        let page = ResourcePage::<T>::from_slice(&body)?;
        debug!(
            "Page len={}, next={:?}, prev={:?}",
            page.len(),
            page.link.next,
            page.link.prev
        );
        Ok(page)
    }

    /// Fetches `path` on the configured server with `params` as its query.
    pub async fn fetch_resource<T, I, K, V>(
        &self,
        path: &str,
        params: I,
    ) -> Result<ResourcePage<T>, FetchError>
    where
        for<'de2> T: Deserialize<'de2>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = build_url(&self.url_from_path(path), params)?;
        info!("Fetching {url}");
        self.fetch(&url).await
    }

    pub async fn search(&self, query: &str) -> Result<ResourcePage<Person>, FetchError> {
        info!("Searching for {query:?}");
        self.fetch_resource("/api/search", [("query", query)]).await
    }

    pub async fn people(&self) -> Result<ResourcePage<Person>, FetchError> {
        self.fetch_resource("/api/people", None::<(&str, &str)>).await
    }

    pub async fn donations(&self) -> Result<ResourcePage<Donation>, FetchError> {
        self.fetch_resource("/api/donations", None::<(&str, &str)>).await
    }

    pub async fn donations_of_type(
        &self,
        kind: &str,
    ) -> Result<ResourcePage<Donation>, FetchError> {
        self.fetch_resource("/api/donations", [("type", kind)]).await
    }

    pub async fn news(&self) -> Result<ResourcePage<News>, FetchError> {
        self.fetch_resource("/api/news", None::<(&str, &str)>).await
    }

    /// The page behind `page.link.next`, or `None` on the last page.
    pub async fn next_page<T>(
        &self,
        page: &ResourcePage<T>,
    ) -> Result<Option<ResourcePage<T>>, FetchError>
    where
        for<'de2> T: Deserialize<'de2>,
    {
        match &page.link.next {
            Some(url) => Ok(Some(self.fetch(url).await?)),
            None => Ok(None),
        }
    }

    /// The page behind `page.link.prev`, or `None` on the first page.
    pub async fn prev_page<T>(
        &self,
        page: &ResourcePage<T>,
    ) -> Result<Option<ResourcePage<T>>, FetchError>
    where
        for<'de2> T: Deserialize<'de2>,
    {
        match &page.link.prev {
            Some(url) => Ok(Some(self.fetch(url).await?)),
            None => Ok(None),
        }
    }

    /// Follows `next` links from `url` and returns every record, in order.
    pub async fn fetch_all<T>(&self, url: &str) -> Result<Vec<T>, FetchError>
    where
        for<'de2> T: Deserialize<'de2>,
    {
        let mut all: Vec<T> = Vec::new();
        let mut next_url = url.to_string();

        loop {
            let mut page: ResourcePage<T> = self.fetch(&next_url).await?;
            all.append(&mut page.all);
            if let Some(n) = page.link.next {
                next_url = n;
            } else {
                return Ok(all);
            }
        }
    }

    /// A restartable walker over the pages that follow `start`.
    pub fn pager<T>(&self, start: ResourcePage<T>) -> Pager<'_, T>
    where
        for<'de2> T: Deserialize<'de2>,
    {
        Pager::new(self, start)
    }
}
