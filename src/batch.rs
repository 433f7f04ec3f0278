// Batch input for the CLI: JSON arrays of posts fed through a WallStore
use std::path::Path;

use crate::error::AppResult;
use crate::wall::{Post, PostId, WallStore};

/// Outcome of applying a list of updates
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub applied: usize,
    pub missed: Vec<PostId>,
}

/// Read a JSON array of posts
pub fn load_posts(path: &Path) -> AppResult<Vec<Post>> {
    let content = std::fs::read_to_string(path)?;
    let posts: Vec<Post> = serde_json::from_str(&content)?;
    tracing::info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Add drafts in order, returning the stored copies
pub fn add_all(store: &mut WallStore, drafts: Vec<Post>) -> Vec<Post> {
    drafts.into_iter().map(|draft| store.add(draft)).collect()
}

/// Apply each update; unknown ids are collected rather than treated as fatal
pub fn apply_updates(store: &mut WallStore, updates: Vec<Post>) -> UpdateReport {
    let mut report = UpdateReport::default();

    for post in updates {
        let id = post.id;
        if store.update(post) {
            report.applied += 1;
        } else {
            tracing::warn!("Skipping update for unknown post {}", id);
            report.missed.push(id);
        }
    }

    report
}
