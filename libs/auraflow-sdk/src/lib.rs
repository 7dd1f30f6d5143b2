#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! `AuraFlow` client contract
//!
//! Shared by every resource SDK:
//!
//! - [`PagedResponse`] / [`PageRequest`] - the list envelope and its request side
//! - [`Filter`], [`StatusFilter`], [`QueryString`] - typed filters and their
//!   normalization into query strings
//! - [`RestClient`] - JSON round-trips, the [`ApiError`] taxonomy and the
//!   global [`UnauthorizedHandler`] hook
//! - [`pager`] - page-number streams over any list call
//! - [`wire_enum!`] - enums that travel as fixed strings

pub mod auth;
pub mod error;
pub mod page;
pub mod pager;
pub mod query;
pub mod rest;
pub mod timestamp;
mod wire_enum;

pub use auth::{NoopUnauthorized, RedirectToLogin, UnauthorizedEvent, UnauthorizedHandler};
pub use error::{ApiError, ErrorPayload, UnknownVariant};
pub use http::{Method, StatusCode};
pub use page::{PageRequest, PagedResponse};
pub use query::{Filter, QueryString, StatusFilter};
pub use rest::RestClient;
pub use timestamp::Timestamp;

/// Numeric identifier used by every backend entity
pub type Id = i64;
