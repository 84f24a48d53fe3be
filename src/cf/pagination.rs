//! Sequential traversal of v2 collections
//!
//! Each page names the location of the next one, so pages are fetched one
//! after another starting from a root path until `next_url` is null.

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use super::models::{Page, Resource};
use super::traits::{fetch_typed, PlatformApi};
use crate::error::{CfError, Result};

/// Walks the linked list of pages of one collection
///
/// The paginator is single-use: once a page fails or the last page has been
/// returned, it yields nothing more.
pub struct Paginator<'a, A: ?Sized, T> {
    api: &'a A,
    next: Option<String>,
    pages_fetched: usize,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, A, T> Paginator<'a, A, T>
where
    A: PlatformApi + ?Sized,
    T: DeserializeOwned,
{
    /// Create a paginator starting at `root_path`
    pub fn new(api: &'a A, root_path: &str) -> Self {
        Self {
            api,
            next: Some(root_path.to_string()),
            pages_fetched: 0,
            _entity: PhantomData,
        }
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch the next page, or `None` once the collection is exhausted
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        let Some(path) = self.next.take() else {
            return Ok(None);
        };

        let page: Page<T> = fetch_typed(self.api, &path).await?;
        self.pages_fetched += 1;
        self.next = page.next_url().map(str::to_string);

        debug!(
            "Page {} ({}) returned {} resources, total {:?}, next: {:?}",
            self.pages_fetched,
            path,
            page.resources.len(),
            page.total_results,
            self.next
        );
        Ok(Some(page))
    }

    /// Turn the paginator into a lazy stream of resources in page order
    pub fn into_stream(self) -> impl Stream<Item = Result<Resource<T>>> + 'a
    where
        T: 'a,
    {
        stream::try_unfold(self, |mut paginator| async move {
            let page = paginator.next_page().await?;
            Ok::<_, CfError>(page.map(move |page| {
                let resources = stream::iter(page.resources.into_iter().map(Ok::<_, CfError>));
                (resources, paginator)
            }))
        })
        .try_flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::mock::{apps_page, FixtureApi};
    use crate::cf::models::AppEntity;

    fn page_path(n: usize) -> String {
        format!("/v2/apps?page={}", n)
    }

    /// Build `count` linked pages holding two apps each
    fn linked_pages(count: usize) -> FixtureApi {
        let mut api = FixtureApi::new();
        for n in 1..=count {
            let path = if n == 1 {
                "/v2/apps".to_string()
            } else {
                page_path(n)
            };
            let next = (n < count).then(|| page_path(n + 1));
            let first = format!("app-{}-a", n);
            let second = format!("app-{}-b", n);
            api = api.with_document(
                &path,
                apps_page(
                    &[(first.as_str(), "/v2/spaces/s1"), (second.as_str(), "/v2/spaces/s1")],
                    next.as_deref(),
                ),
            );
        }
        api
    }

    async fn collect_names(api: &FixtureApi) -> Result<Vec<String>> {
        Paginator::<_, AppEntity>::new(api, "/v2/apps")
            .into_stream()
            .map_ok(|r| r.entity.name)
            .try_collect()
            .await
    }

    #[tokio::test]
    async fn test_single_page() {
        let api = linked_pages(1);
        let names = collect_names(&api).await.unwrap();
        assert_eq!(names, vec!["app-1-a", "app-1-b"]);
        assert_eq!(api.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_multiple_pages_in_order() {
        for count in 2..=4 {
            let api = linked_pages(count);
            let names = collect_names(&api).await.unwrap();

            let expected: Vec<String> = (1..=count)
                .flat_map(|n| [format!("app-{}-a", n), format!("app-{}-b", n)])
                .collect();
            assert_eq!(names, expected);
            assert_eq!(api.total_calls(), count);
        }
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let api = FixtureApi::new().with_document("/v2/apps", apps_page(&[], None));
        let names = collect_names(&api).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_follows_next_url_in_call_order() {
        let api = linked_pages(3);
        collect_names(&api).await.unwrap();
        assert_eq!(
            api.calls(),
            vec!["/v2/apps".to_string(), page_path(2), page_path(3)]
        );
    }

    #[tokio::test]
    async fn test_error_on_later_page() {
        let api = linked_pages(5).with_failure(&page_path(3), 500);
        let result = collect_names(&api).await;

        match result.unwrap_err() {
            CfError::Fetch { path, source } => {
                assert_eq!(path, page_path(3));
                assert!(matches!(*source, CfError::Api { status: 500, .. }));
            }
            other => panic!("Expected CfError::Fetch, got {:?}", other),
        }
        // No page after the failing one is requested
        assert_eq!(api.total_calls(), 3);
    }

    #[tokio::test]
    async fn test_next_page_is_not_restartable() {
        let api = linked_pages(1);
        let mut paginator = Paginator::<_, AppEntity>::new(&api, "/v2/apps");

        assert!(paginator.next_page().await.unwrap().is_some());
        assert!(paginator.next_page().await.unwrap().is_none());
        assert!(paginator.next_page().await.unwrap().is_none());
        assert_eq!(paginator.pages_fetched(), 1);
        assert_eq!(api.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_page() {
        let api = FixtureApi::new()
            .with_document("/v2/apps", serde_json::json!({"resources": "nope"}));
        let result = collect_names(&api).await;
        assert!(matches!(result.unwrap_err(), CfError::DataContract { .. }));
    }
}
