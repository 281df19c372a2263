#![allow(unused_crate_dependencies, clippy::panic)]

//! Shared harness for the blog mock schema tests.

use std::sync::OnceLock;

use blog_mocks::BlogSchema;
use tokio::runtime::Runtime;

#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("blog_mocks=debug".to_string()))
        .unwrap();
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .without_time()
        .init();
}

pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    })
}

/// Runs a request against a fresh blog schema.
pub async fn execute(request: impl Into<async_graphql::Request>) -> async_graphql::Response {
    BlogSchema::default().execute(request).await
}
