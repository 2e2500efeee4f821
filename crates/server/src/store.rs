use axum::extract::FromRef;
use chrono::Utc;
use shared_types::{CreatePostRequest, Post};
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<PostStore>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: PostStore,
}

/// In-memory post storage. Cloning shares the same underlying list.
#[derive(Clone, Default)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a post built from an already validated request.
    pub async fn insert(&self, req: CreatePostRequest) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            title: req.title,
            categories: req.categories,
            content: req.content,
            created_at: Utc::now(),
        };
        self.posts.write().await.push(post.clone());
        post
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        let mut out: Vec<Post> = posts.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    pub async fn get(&self, id: Uuid) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Remove a post. Returns whether anything was deleted.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        posts.len() != before
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Insert the example posts used when `seed_posts` is enabled.
    pub async fn seed(&self) {
        let samples = [
            ("Hello, posts", "meta", "The first post on the board."),
            ("Forms without magic", "rust, dioxus", "Values, touched flags and errors live in one struct."),
        ];
        for (title, categories, content) in samples {
            self.insert(CreatePostRequest {
                title: title.to_string(),
                categories: categories.to_string(),
                content: content.to_string(),
            })
            .await;
        }
        tracing::info!(count = samples.len(), "seeded example posts");
    }
}

static STORE: OnceLock<PostStore> = OnceLock::new();

/// Process-wide store shared by server functions and the REST router.
pub fn get_store() -> &'static PostStore {
    STORE.get_or_init(PostStore::new)
}
