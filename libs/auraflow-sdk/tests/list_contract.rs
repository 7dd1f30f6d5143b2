#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end behavior of a list endpoint: query normalization on the wire,
//! idempotent reads, page boundaries and streaming across pages.

use auraflow_http::HttpClientBuilder;
use auraflow_sdk::{PageRequest, PagedResponse, QueryString, RestClient, StatusFilter, pager};
use futures_util::StreamExt;
use httpmock::prelude::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Item {
    id: i64,
    name: String,
}

fn client(server: &MockServer) -> RestClient {
    let http = HttpClientBuilder::new()
        .allow_insecure_http()
        .build()
        .expect("http client");
    RestClient::new(http, &server.base_url()).expect("rest client")
}

fn page_json(number: u32, ids: &[i64], total: u64, size: u32) -> serde_json::Value {
    let content: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("item-{id}")}))
        .collect();
    json!({
        "content": content,
        "totalElements": total,
        "totalPages": total.div_ceil(u64::from(size)),
        "size": size,
        "number": number,
    })
}

#[tokio::test]
async fn sentinel_filters_never_reach_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/items")
            .query_param("page", "0")
            .query_param("size", "10")
            .query_param_missing("status")
            .query_param_missing("name");
        then.status(200).json_body(page_json(0, &[], 0, 10));
    });

    let query = QueryString::paged(PageRequest::default())
        .text("name", None)
        .status::<&str>("status", &StatusFilter::All);
    let _: PagedResponse<Item> = client(&server)
        .get_with("/api/items", &query)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn identical_reads_are_identical() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/items");
        then.status(200).json_body(page_json(0, &[1, 2], 2, 10));
    });

    let client = client(&server);
    let query = QueryString::paged(PageRequest::default());
    let first: PagedResponse<Item> = client.get_with("/api/items", &query).await.unwrap();
    let second: PagedResponse<Item> = client.get_with("/api/items", &query).await.unwrap();

    mock.assert_calls(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn page_beyond_total_is_empty_with_accurate_totals() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/items").query_param("page", "9");
        then.status(200).json_body(page_json(9, &[], 25, 10));
    });

    let page: PagedResponse<Item> = client(&server)
        .get_with(
            "/api/items",
            &QueryString::paged(PageRequest::new(9, 10).unwrap()),
        )
        .await
        .unwrap();

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages, 3);
    assert!(page.next_page().is_none());
}

#[tokio::test]
async fn pager_walks_every_page_once() {
    let server = MockServer::start();
    let p0 = server.mock(|when, then| {
        when.method(GET).path("/api/items").query_param("page", "0");
        then.status(200).json_body(page_json(0, &[1, 2], 3, 2));
    });
    let p1 = server.mock(|when, then| {
        when.method(GET).path("/api/items").query_param("page", "1");
        then.status(200).json_body(page_json(1, &[3], 3, 2));
    });

    let client = client(&server);
    let stream = pager::items(PageRequest::new(0, 2).unwrap(), |page| {
        let client = client.clone();
        async move {
            client
                .get_with::<PagedResponse<Item>>("/api/items", &QueryString::paged(page))
                .await
        }
    });
    let ids: Vec<i64> = stream.map(|item| item.unwrap().id).collect().await;

    p0.assert_calls(1);
    p1.assert_calls(1);
    assert_eq!(ids, vec![1, 2, 3]);
}
