use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use clap::Parser;
use pawcare_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};

pub const OWNER_HEADER: &str = "x-owner-id";

/// Full router over a fresh in-memory database with the demo data seeded.
pub async fn test_server() -> TestServer {
    let args = Arc::new(Args::parse_from([
        "pawcare-api",
        "--database-url",
        "sqlite::memory:",
        "--seed-demo-data",
        "true",
    ]));
    let state = state(args).await.expect("application state");

    TestServer::new(router(state).expect("router")).expect("test server")
}

pub fn owner_header(owner_id: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(OWNER_HEADER),
        HeaderValue::from_str(owner_id).expect("header value"),
    )
}
