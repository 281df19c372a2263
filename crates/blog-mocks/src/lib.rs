//! A canned blog GraphQL schema, servable over HTTP, for exercising
//! GraphQL clients and tooling in tests

use std::{sync::Arc, time::Duration};

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, routing::post, Router};

mod blog;

pub use blog::{BlogSchema, Comment, CommentLoader, LoadCounter, Post};

pub struct MockGraphQlServer {
    pub schema: Arc<dyn Schema>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    port: u16,
}

impl Drop for MockGraphQlServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

impl MockGraphQlServer {
    pub async fn new(schema: impl Schema + 'static) -> MockGraphQlServer {
        Self::new_impl(Arc::new(schema)).await
    }

    async fn new_impl(schema: Arc<dyn Schema>) -> Self {
        let state = AppState { schema: schema.clone() };
        let app = Router::new().route("/", post(graphql_handler)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let (shutdown_sender, shutdown_receiver) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_receiver.await.ok();
                })
                .await
                .unwrap();
        });

        // Let the accept loop come up before handing the server out
        tokio::time::sleep(Duration::from_millis(20)).await;

        MockGraphQlServer {
            schema,
            shutdown: Some(shutdown_sender),
            port,
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

#[derive(Clone)]
struct AppState {
    schema: Arc<dyn Schema>,
}

/// Object-safe view of a schema, so the server doesn't have to be generic
/// over the root types
#[async_trait::async_trait]
pub trait Schema: Send + Sync {
    async fn execute(&self, request: async_graphql::Request) -> async_graphql::Response;

    fn sdl(&self) -> String;
}

#[async_trait::async_trait]
impl<Q, M, S> Schema for async_graphql::Schema<Q, M, S>
where
    Q: async_graphql::ObjectType + 'static,
    M: async_graphql::ObjectType + 'static,
    S: async_graphql::SubscriptionType + 'static,
{
    async fn execute(&self, request: async_graphql::Request) -> async_graphql::Response {
        async_graphql::Schema::execute(self, request).await
    }

    fn sdl(&self) -> String {
        self.sdl_with_options(async_graphql::SDLExportOptions::new())
    }
}
