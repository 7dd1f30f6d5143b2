//! Page-number pagination: the request side ([`PageRequest`]) and the uniform
//! response envelope ([`PagedResponse`]) every list endpoint returns.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// Zero-based page index plus a non-zero page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: NonZeroU32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// # Errors
    /// Returns `ApiError::InvalidRequest` when `size` is zero.
    pub fn new(page: u32, size: u32) -> Result<Self, ApiError> {
        let size = NonZeroU32::new(size)
            .ok_or_else(|| ApiError::InvalidRequest("page size must be greater than 0".to_owned()))?;
        Ok(Self { page, size })
    }

    /// First page with the given size
    #[must_use]
    pub const fn first(size: NonZeroU32) -> Self {
        Self { page: 0, size }
    }

    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: NonZeroU32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size.get()
    }

    /// Same size, following page
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }
}

/// One page of a list endpoint
///
/// Fields echo what the backend sent; the client never re-sorts, re-filters
/// or re-pages `content`. Extra fields of Spring's `Page` JSON (`pageable`,
/// `sort`, `first`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
}

impl<T> PagedResponse<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a page after this one holds rows
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Request for the following page, `None` on the last page
    #[must_use]
    pub fn next_page(&self) -> Option<PageRequest> {
        if !self.has_next() {
            return None;
        }
        NonZeroU32::new(self.size).map(|size| PageRequest {
            page: self.number + 1,
            size,
        })
    }

    /// Transform the items, keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResponse<U> {
        PagedResponse {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
        }
    }

    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}
