//! Link-following pagination.
//!
//! A [`Pager`] remembers the page a walk starts from. Every call to
//! [`Pager::walk`] hands out an independent [`PageCursor`], so the same pager
//! can be walked again from the start. Cursors fetch one page per step and
//! never read ahead.

use crate::{client::StnClient, errors::FetchError, page::ResourcePage};
use futures::stream::{self, Stream};
use serde::Deserialize;
use std::sync::Arc;

pub struct Pager<'c, T> {
    client: &'c StnClient,
    start: Arc<ResourcePage<T>>,
}

impl<'c, T> Pager<'c, T>
where
    for<'de2> T: Deserialize<'de2>,
{
    pub fn new(client: &'c StnClient, start: ResourcePage<T>) -> Pager<'c, T> {
        Pager {
            client,
            start: Arc::new(start),
        }
    }

    pub fn first(&self) -> &ResourcePage<T> {
        &self.start
    }

    pub fn walk(&self) -> PageCursor<'c, T> {
        PageCursor {
            client: self.client,
            step: Step::Start(Arc::clone(&self.start)),
        }
    }

    /// The same sequence as [`Pager::walk`], as a [`Stream`].
    pub fn stream(&self) -> impl Stream<Item = Result<Arc<ResourcePage<T>>, FetchError>> + 'c
    where
        T: 'c,
    {
        stream::unfold(self.walk(), |mut cursor| async move {
            let item = cursor.next().await?;
            Some((item, cursor))
        })
    }

    /// Walking backwards is not part of a walk; this only fetches `page.link.prev`.
    pub async fn prev_of(
        &self,
        page: &ResourcePage<T>,
    ) -> Result<Option<ResourcePage<T>>, FetchError> {
        self.client.prev_page(page).await
    }
}

enum Step<T> {
    Start(Arc<ResourcePage<T>>),
    After(Arc<ResourcePage<T>>),
    Done,
}

pub struct PageCursor<'c, T> {
    client: &'c StnClient,
    step: Step<T>,
}

impl<'c, T> PageCursor<'c, T>
where
    for<'de2> T: Deserialize<'de2>,
{
    /// Yields the start page, then each page behind `link.next`.
    ///
    /// Returns `None` after the last page. A failed fetch is yielded once and
    /// ends the walk. Dropping the returned future before it completes leaves
    /// the cursor where it was.
    pub async fn next(&mut self) -> Option<Result<Arc<ResourcePage<T>>, FetchError>> {
        let current = match &self.step {
            Step::Done => return None,
            Step::Start(page) => {
                let page = Arc::clone(page);
                self.step = Step::After(Arc::clone(&page));
                return Some(Ok(page));
            }
            Step::After(page) => Arc::clone(page),
        };

        let Some(next_url) = current.link.next.as_deref() else {
            self.step = Step::Done;
            return None;
        };

        match self.client.fetch::<T>(next_url).await {
            Ok(page) => {
                let page = Arc::new(page);
                self.step = Step::After(Arc::clone(&page));
                Some(Ok(page))
            }
            Err(e) => {
                self.step = Step::Done;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StnClientBuilder;
    use crate::donation::Donation;
    use assert_matches::assert_matches;
    use futures::StreamExt;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body(ids: &[i32], next: Option<String>) -> Value {
        let data: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": id, "title": format!("donation {id}")}))
            .collect();
        json!({"data": data, "links": {"next": next}})
    }

    fn start_page(ids: &[i32], next: Option<String>) -> ResourcePage<Donation> {
        serde_json::from_value(body(ids, next)).unwrap()
    }

    fn ids(page: &ResourcePage<Donation>) -> Vec<i32> {
        page.all.iter().map(|d| d.id).collect()
    }

    async fn mount_page(
        server: &MockServer,
        at: &str,
        ids: &[i32],
        next: Option<String>,
        times: u64,
    ) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(ids, next)))
            .expect(times)
            .mount(server)
            .await;
    }

    async fn chained(server: &MockServer, times: u64) -> ResourcePage<Donation> {
        let uri = server.uri();
        mount_page(server, "/pages/2", &[3, 4], Some(format!("{uri}/pages/3")), times).await;
        mount_page(server, "/pages/3", &[5], None, times).await;
        start_page(&[1, 2], Some(format!("{uri}/pages/2")))
    }

    fn client_for(server: &MockServer) -> StnClient {
        StnClientBuilder::default()
            .set_url(&server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn single_page_yields_once() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let pager = client.pager(start_page(&[1], None));

        let mut cursor = pager.walk();
        let first = cursor.next().await.unwrap().unwrap();
        assert_eq!(ids(&first), vec![1]);
        assert!(cursor.next().await.is_none());
        assert!(cursor.next().await.is_none());
    }

    #[tokio::test]
    async fn walks_three_pages_in_order() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let pager = client.pager(chained(&server, 1).await);

        let mut cursor = pager.walk();
        let mut seen = Vec::new();
        while let Some(page) = cursor.next().await {
            seen.push(ids(&page.unwrap()));
        }
        assert_eq!(seen, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[tokio::test]
    async fn walk_restarts_from_first_page() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let pager = client.pager(chained(&server, 2).await);

        let mut partial = pager.walk();
        partial.next().await.unwrap().unwrap();
        partial.next().await.unwrap().unwrap();

        let mut fresh = pager.walk();
        assert_eq!(ids(&fresh.next().await.unwrap().unwrap()), vec![1, 2]);
        assert_eq!(ids(&fresh.next().await.unwrap().unwrap()), vec![3, 4]);

        assert_eq!(ids(&partial.next().await.unwrap().unwrap()), vec![5]);
        assert!(partial.next().await.is_none());

        assert_eq!(ids(&fresh.next().await.unwrap().unwrap()), vec![5]);
        assert!(fresh.next().await.is_none());
        assert_eq!(ids(pager.first()), vec![1, 2]);
    }

    #[tokio::test]
    async fn no_prefetch() {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_page(&server, "/pages/2", &[2], Some(format!("{uri}/pages/3")), 1).await;
        mount_page(&server, "/pages/3", &[3], None, 0).await;
        let client = client_for(&server);
        let pager = client.pager(start_page(&[1], Some(format!("{uri}/pages/2"))));

        let mut cursor = pager.walk();
        cursor.next().await.unwrap().unwrap();
        cursor.next().await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn failed_step_ends_walk() {
        let server = MockServer::start().await;
        let uri = server.uri();
        Mock::given(method("GET"))
            .and(path("/pages/2"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);
        let pager = client.pager(start_page(&[1], Some(format!("{uri}/pages/2"))));

        let mut cursor = pager.walk();
        assert!(cursor.next().await.unwrap().is_ok());
        assert_matches!(cursor.next().await, Some(Err(FetchError::Status(500))));
        assert!(cursor.next().await.is_none());
    }

    #[tokio::test]
    async fn stream_yields_all_pages() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let pager = client.pager(chained(&server, 1).await);

        let pages: Vec<_> = pager.stream().collect().await;
        let seen: Vec<Vec<i32>> = pages.into_iter().map(|p| ids(&p.unwrap())).collect();
        assert_eq!(seen, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[tokio::test]
    async fn prev_of_start() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let pager = client.pager(start_page(&[1], None));
        assert!(pager.prev_of(pager.first()).await.unwrap().is_none());
    }
}
