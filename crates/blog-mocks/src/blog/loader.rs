use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_graphql::{dataloader::Loader, ID};

use super::Comment;

/// Observes the batches a [`CommentLoader`] performs, so tests can assert
/// that sibling resolvers were grouped into a single deduplicated load.
#[derive(Clone, Default)]
pub struct LoadCounter {
    batches: Arc<AtomicUsize>,
    keys: Arc<AtomicUsize>,
}

impl LoadCounter {
    /// Number of `load` calls performed.
    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::Relaxed)
    }

    /// Total number of distinct keys seen across all batches.
    pub fn keys(&self) -> usize {
        self.keys.load(Ordering::Relaxed)
    }
}

/// Fulfils every requested comment id with a canned body.
pub struct CommentLoader {
    loads: LoadCounter,
}

impl CommentLoader {
    pub fn new(loads: LoadCounter) -> Self {
        Self { loads }
    }
}

impl Loader<ID> for CommentLoader {
    type Value = Comment;
    type Error = Infallible;

    async fn load(&self, keys: &[ID]) -> Result<HashMap<ID, Comment>, Infallible> {
        self.loads.batches.fetch_add(1, Ordering::Relaxed);
        self.loads.keys.fetch_add(keys.len(), Ordering::Relaxed);

        Ok(keys
            .iter()
            .map(|id| {
                let comment = Comment {
                    id: id.clone(),
                    body: "Great blog!".to_string(),
                };
                (id.clone(), comment)
            })
            .collect())
    }
}
