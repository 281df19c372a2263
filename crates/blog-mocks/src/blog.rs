use async_graphql::{
    dataloader::DataLoader, Context, EmptySubscription, InputObject, Object, SimpleObject, ID,
};

mod loader;

pub use loader::{CommentLoader, LoadCounter};

/// The blog fixture: a post with batched comment loading and a create
/// mutation, canned so responses are fully predictable.
pub struct BlogSchema {
    schema: async_graphql::Schema<Query, Mutation, EmptySubscription>,
    loads: LoadCounter,
}

impl Default for BlogSchema {
    fn default() -> Self {
        let loads = LoadCounter::default();
        let comment_loader = DataLoader::new(CommentLoader::new(loads.clone()), tokio::spawn);
        let schema = async_graphql::Schema::build(Query, Mutation, EmptySubscription)
            .data(comment_loader)
            .finish();
        BlogSchema { schema, loads }
    }
}

impl BlogSchema {
    pub async fn execute(&self, request: impl Into<async_graphql::Request>) -> async_graphql::Response {
        self.schema.execute(request).await
    }

    /// Comment loads performed so far, for asserting on batching behavior.
    pub fn loads(&self) -> &LoadCounter {
        &self.loads
    }
}

#[async_trait::async_trait]
impl crate::Schema for BlogSchema {
    async fn execute(&self, request: async_graphql::Request) -> async_graphql::Response {
        self.schema.execute(request).await
    }

    fn sdl(&self) -> String {
        self.schema.sdl_with_options(async_graphql::SDLExportOptions::new())
    }
}

/// A blog comment
#[derive(Clone, SimpleObject)]
pub struct Comment {
    pub id: ID,
    pub body: String,
}

#[derive(Clone)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
}

/// A blog post
#[Object]
impl Post {
    async fn id(&self) -> &ID {
        &self.id
    }

    async fn title(&self, upcase: Option<bool>) -> String {
        if upcase.unwrap_or_default() {
            self.title.to_uppercase()
        } else {
            self.title.clone()
        }
    }

    async fn body(&self, #[graphql(default = false)] truncate: bool) -> String {
        if truncate {
            let mut truncated: String = self.body.chars().take(10).collect();
            truncated.push_str("...");
            truncated
        } else {
            self.body.clone()
        }
    }

    #[graphql(deprecation = "Use `body` instead.")]
    async fn deprecated_body(&self) -> &str {
        &self.body
    }

    async fn comments(
        &self,
        ctx: &Context<'_>,
        ids: Option<Vec<ID>>,
        tags: Option<Vec<String>>,
    ) -> async_graphql::Result<Option<Vec<Comment>>> {
        let _ = tags;
        let Some(ids) = ids else {
            return Ok(None);
        };
        let loader = ctx.data_unchecked::<DataLoader<CommentLoader>>();
        let comments = loader.load_many(ids.clone()).await?;
        Ok(Some(ids.iter().filter_map(|id| comments.get(id).cloned()).collect()))
    }
}

#[derive(InputObject)]
pub struct PostInput {
    /// Title for the post
    pub title: String,
    /// Body of the post
    pub body: String,
}

#[derive(SimpleObject)]
pub struct PostCreatePayload {
    post: Post,
}

pub struct Query;

#[Object]
impl Query {
    async fn post(&self, id: ID, #[graphql(default = "en-us")] locale: String) -> Option<Post> {
        let _ = (id, locale);
        Some(Post {
            id: ID::from("1"),
            title: "Hello, world!".to_string(),
            body: "... you're still here?".to_string(),
        })
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    async fn post_create(&self, post: PostInput) -> PostCreatePayload {
        PostCreatePayload {
            post: Post {
                id: ID::from("42"),
                title: post.title,
                body: post.body,
            },
        }
    }
}
