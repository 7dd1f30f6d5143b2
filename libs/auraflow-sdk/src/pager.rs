//! Page-number pagination with the Stream API
//!
//! Turns a page-fetching function into a `Stream` of pages or of items. Pages
//! are requested in order starting from the given [`PageRequest`], one at a
//! time, and only when the consumer polls for more.
//!
//! # Example
//!
//! ```rust,ignore
//! use auraflow_sdk::pager;
//! use futures_util::StreamExt;
//!
//! let mut users = pager::items(PageRequest::default(), |page| {
//!     let client = client.clone();
//!     async move { client.list(UserQuery { page, ..Default::default() }).await }
//! });
//!
//! while let Some(user) = users.next().await {
//!     println!("{:?}", user?);
//! }
//! ```
//!
//! A stream ends after the last page (`number + 1 >= totalPages`), after an
//! empty page, or right after yielding the first error.

use crate::page::{PageRequest, PagedResponse};
use futures_core::Stream;
use pin_project_lite::pin_project;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Stream of whole pages
    pub struct PagesPager<T, E, F, Fut>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<PagedResponse<T>, E>>,
    {
        next: Option<PageRequest>,
        fetcher: F,
        #[pin]
        current_fetch: Option<Fut>,
    }
}

impl<T, E, F, Fut> PagesPager<T, E, F, Fut>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, E>>,
{
    pub fn new(start: PageRequest, fetcher: F) -> Self {
        Self {
            next: Some(start),
            fetcher,
            current_fetch: None,
        }
    }
}

/// Follow-up request after `page`, `None` when the listing is exhausted
fn following<T>(page: &PagedResponse<T>) -> Option<PageRequest> {
    if page.is_empty() {
        return None;
    }
    page.next_page()
}

impl<T, E, F, Fut> Stream for PagesPager<T, E, F, Fut>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, E>>,
{
    type Item = Result<PagedResponse<T>, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(fut) = this.current_fetch.as_mut().as_pin_mut() {
                return match fut.poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.current_fetch.set(None);
                        *this.next = following(&page);
                        Poll::Ready(Some(Ok(page)))
                    }
                    Poll::Ready(Err(e)) => {
                        this.current_fetch.set(None);
                        *this.next = None;
                        Poll::Ready(Some(Err(e)))
                    }
                    Poll::Pending => Poll::Pending,
                };
            }

            let Some(request) = this.next.take() else {
                return Poll::Ready(None);
            };
            // Polled on the next iteration so it registers the waker itself
            this.current_fetch.set(Some((this.fetcher)(request)));
        }
    }
}

pin_project! {
    /// Stream of individual items across pages
    pub struct ItemsPager<T, E, F, Fut>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<PagedResponse<T>, E>>,
    {
        next: Option<PageRequest>,
        buffer: VecDeque<T>,
        fetcher: F,
        #[pin]
        current_fetch: Option<Fut>,
    }
}

impl<T, E, F, Fut> ItemsPager<T, E, F, Fut>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, E>>,
{
    pub fn new(start: PageRequest, fetcher: F) -> Self {
        Self {
            next: Some(start),
            buffer: VecDeque::new(),
            fetcher,
            current_fetch: None,
        }
    }
}

impl<T, E, F, Fut> Stream for ItemsPager<T, E, F, Fut>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(item) = this.buffer.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.current_fetch.as_mut().as_pin_mut() {
                match fut.poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.current_fetch.set(None);
                        *this.next = following(&page);
                        this.buffer.extend(page.content);
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.current_fetch.set(None);
                        *this.next = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            let Some(request) = this.next.take() else {
                return Poll::Ready(None);
            };
            this.current_fetch.set(Some((this.fetcher)(request)));
        }
    }
}

/// Stream every page from `start` on
pub fn pages<T, E, F, Fut>(start: PageRequest, fetcher: F) -> PagesPager<T, E, F, Fut>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, E>>,
{
    PagesPager::new(start, fetcher)
}

/// Stream every item from page `start` on
pub fn items<T, E, F, Fut>(start: PageRequest, fetcher: F) -> ItemsPager<T, E, F, Fut>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, E>>,
{
    ItemsPager::new(start, fetcher)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct FakeError(String);

    /// Serves `total` items in pages of the requested size and records requests
    #[derive(Clone)]
    struct FakeBackend {
        total: u32,
        fail_on_page: Option<u32>,
        requests: Arc<Mutex<Vec<PageRequest>>>,
    }

    impl FakeBackend {
        fn new(total: u32) -> Self {
            Self {
                total,
                fail_on_page: None,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn fetch(&self, req: PageRequest) -> Result<PagedResponse<u32>, FakeError> {
            self.requests.lock().unwrap().push(req);
            if self.fail_on_page == Some(req.page()) {
                return Err(FakeError(format!("page {} failed", req.page())));
            }
            let size = req.size();
            let start = req.page() * size;
            let end = (start + size).min(self.total);
            Ok(PagedResponse {
                content: (start..end.max(start)).collect(),
                total_elements: u64::from(self.total),
                total_pages: self.total.div_ceil(size),
                size,
                number: req.page(),
            })
        }

        fn requested_pages(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(PageRequest::page).collect()
        }
    }

    #[tokio::test]
    async fn test_items_across_pages() {
        let backend = FakeBackend::new(5);
        let fetcher = backend.clone();
        let pager = items(PageRequest::new(0, 2).unwrap(), move |req| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(req) }
        });

        let items: Vec<u32> = pager.map(Result::unwrap).collect().await;
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
        assert_eq!(backend.requested_pages(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_pages_stop_at_last_page() {
        let backend = FakeBackend::new(4);
        let fetcher = backend.clone();
        let pager = pages(PageRequest::new(0, 2).unwrap(), move |req| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(req) }
        });

        let pages: Vec<_> = pager.collect().await;
        assert_eq!(pages.len(), 2);
        assert!(pages[1].as_ref().unwrap().is_last());
        assert_eq!(backend.requested_pages(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_empty_listing_yields_one_empty_page() {
        let backend = FakeBackend::new(0);
        let fetcher = backend.clone();
        let pager = pages(PageRequest::default(), move |req| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(req) }
        });

        let pages: Vec<_> = pager.collect().await;
        assert_eq!(pages.len(), 1);
        assert!(pages[0].as_ref().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_page_respected() {
        let backend = FakeBackend::new(6);
        let fetcher = backend.clone();
        let pager = items(PageRequest::new(1, 2).unwrap(), move |req| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(req) }
        });

        let items: Vec<u32> = pager.map(Result::unwrap).collect().await;
        assert_eq!(items, vec![2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let mut backend = FakeBackend::new(10);
        backend.fail_on_page = Some(1);
        let fetcher = backend.clone();
        let pager = items(PageRequest::new(0, 3).unwrap(), move |req| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(req) }
        });

        let results: Vec<Result<u32, FakeError>> = pager.collect().await;
        assert_eq!(results.len(), 4);
        assert!(results[..3].iter().all(Result::is_ok));
        assert_eq!(results[3], Err(FakeError("page 1 failed".to_owned())));
        assert_eq!(backend.requested_pages(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_lazy_fetching() {
        let backend = FakeBackend::new(10);
        let fetcher = backend.clone();
        let mut pager = Box::pin(items(PageRequest::new(0, 5).unwrap(), move |req| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(req) }
        }));

        assert_eq!(pager.next().await, Some(Ok(0)));
        assert_eq!(backend.requested_pages(), vec![0]);
    }
}
