// Wall store - the only mutable state in the system
use crate::error::{AppError, AppResult};
use crate::wall::domain::{Post, PostId};
use parking_lot::Mutex;
use std::sync::Arc;

const FIRST_ID: u64 = 1;

/// Ordered collection of posts plus the next-id counter.
///
/// Insertion order is display order. Reads hand out owned copies, never
/// references into the backing `Vec`.
#[derive(Debug)]
pub struct WallStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl WallStore {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Store a draft under the next id and return the stored copy
    pub fn add(&mut self, post: Post) -> Post {
        let id = PostId::new(self.next_id);
        self.next_id += 1;

        let stored = Post { id, ..post };
        tracing::debug!(
            "Added post {} ({} attachments)",
            id,
            stored.attachments.len()
        );

        self.posts.push(stored.clone());
        stored
    }

    /// Replace the stored post whose id matches `post.id`.
    /// Returns false and leaves the wall untouched when no post matches.
    pub fn update(&mut self, post: Post) -> bool {
        match self.posts.iter_mut().find(|stored| stored.id == post.id) {
            Some(slot) => {
                tracing::debug!(
                    "Updated post {} ({} attachments)",
                    post.id,
                    post.attachments.len()
                );
                *slot = post;
                true
            }
            None => {
                tracing::debug!("No post {} to update", post.id);
                false
            }
        }
    }

    /// Like `update`, but a miss is reported as `AppError::NotFound`
    pub fn replace(&mut self, post: Post) -> AppResult<Post> {
        let id = post.id;
        if self.update(post.clone()) {
            Ok(post)
        } else {
            Err(AppError::NotFound(id))
        }
    }

    /// Drop every post and restart ids from 1
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} posts", self.posts.len());
        self.posts = Vec::new();
        self.next_id = FIRST_ID;
    }

    /// Fresh copy of the whole wall, in display order
    pub fn posts(&self) -> Vec<Post> {
        self.posts.to_vec()
    }

    pub fn get(&self, id: PostId) -> Option<Post> {
        self.posts.iter().find(|post| post.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for WallStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle for using one wall from several threads.
/// Every operation holds the lock for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct SharedWall {
    inner: Arc<Mutex<WallStore>>,
}

impl SharedWall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, post: Post) -> Post {
        self.inner.lock().add(post)
    }

    pub fn update(&self, post: Post) -> bool {
        self.inner.lock().update(post)
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.inner.lock().posts()
    }
}

impl From<WallStore> for SharedWall {
    fn from(store: WallStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::domain::{Attachment, Document, Link, Photo};

    fn draft(text: &str) -> Post {
        Post::new(1, 1, 1234567890, text)
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = WallStore::new();

        let ids: Vec<u64> = (0..5)
            .map(|i| store.add(draft(&format!("post {}", i))).id.get())
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_add_overwrites_caller_id() {
        let mut store = WallStore::new();

        let post = Post {
            id: PostId::new(42),
            ..draft("has an id already")
        };
        let added = store.add(post);

        assert_eq!(added.id, PostId::new(1));
        assert_eq!(added.text, "has an id already");
    }

    #[test]
    fn test_add_appends_without_touching_existing() {
        let mut store = WallStore::new();
        let first = store.add(draft("first"));
        let second = store.add(draft("second"));

        assert_eq!(store.posts(), vec![first, second]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = WallStore::new();
        let first = store.add(draft("first"));
        let second = store.add(draft("second"));

        let updated = Post {
            text: "Updated".to_string(),
            attachments: vec![Link::new("https://example.com", "Example").into()],
            ..first
        };
        assert!(store.update(updated.clone()));

        assert_eq!(store.posts(), vec![updated, second]);
    }

    #[test]
    fn test_update_miss_leaves_state_unchanged() {
        let mut store = WallStore::new();
        store.add(draft("only"));
        let before = store.posts();

        let post = Post {
            id: PostId::new(999),
            ..draft("Non-existent")
        };
        assert!(!store.update(post));
        assert_eq!(store.posts(), before);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = WallStore::new();
        store.add(draft("first"));
        let middle = store.add(draft("second"));
        store.add(draft("third"));

        assert!(store.update(Post {
            text: "edited".to_string(),
            ..middle
        }));

        let texts: Vec<String> = store.posts().into_iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["first", "edited", "third"]);
    }

    #[test]
    fn test_replace_maps_miss_to_not_found() {
        let mut store = WallStore::new();
        let added = store.add(draft("first"));

        let replaced = store
            .replace(Post {
                text: "changed".to_string(),
                ..added
            })
            .unwrap();
        assert_eq!(replaced.text, "changed");

        let result = store.replace(Post {
            id: PostId::new(999),
            ..draft("missing")
        });
        assert!(matches!(result, Err(AppError::NotFound(id)) if id == PostId::new(999)));
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut store = WallStore::new();
        store.add(draft("First"));
        store.add(draft("Second"));

        store.clear();
        assert!(store.is_empty());
        assert!(store.posts().is_empty());

        let added = store.add(draft("Third"));
        assert_eq!(added.id, PostId::new(1));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = WallStore::new();
        store.add(draft("Test").with_attachments(vec![Photo::new(1, 1, "u").into()]));

        let mut snapshot = store.posts();
        snapshot[0].text = "mutated".to_string();
        snapshot[0].attachments.clear();
        snapshot.push(draft("extra"));

        let fresh = store.posts();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].text, "Test");
        assert_eq!(fresh[0].attachments.len(), 1);
    }

    #[test]
    fn test_snapshots_are_distinct_allocations() {
        let mut store = WallStore::new();
        store.add(draft("Test"));

        let posts1 = store.posts();
        let posts2 = store.posts();

        assert_eq!(posts1, posts2);
        assert_ne!(posts1.as_ptr(), posts2.as_ptr());
    }

    #[test]
    fn test_attachment_order_preserved() {
        let mut store = WallStore::new();
        let attachments: Vec<Attachment> = vec![
            Document::new(1, 1, "doc.pdf", 1024, "pdf").into(),
            Photo::new(2, 1, "u").into(),
            Link::new("https://example.com", "Example").into(),
        ];

        let added = store.add(draft("ordered").with_attachments(attachments.clone()));

        assert_eq!(added.attachments, attachments);
        assert_eq!(store.get(added.id).unwrap().attachments, attachments);
    }

    #[test]
    fn test_shared_wall_assigns_unique_ids_across_threads() {
        let wall = SharedWall::new();

        std::thread::scope(|scope| {
            for t in 0..4 {
                let wall = wall.clone();
                scope.spawn(move || {
                    for i in 0..25 {
                        wall.add(draft(&format!("thread {} post {}", t, i)));
                    }
                });
            }
        });

        let mut ids: Vec<u64> = wall.posts().iter().map(|p| p.id.get()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<u64>>());
    }

    #[test]
    fn test_shared_wall_wraps_existing_store() {
        let mut store = WallStore::new();
        store.add(draft("before sharing"));

        let wall = SharedWall::from(store);
        let added = wall.add(draft("after sharing"));
        assert_eq!(added.id, PostId::new(2));

        assert!(wall.update(Post {
            text: "edited".to_string(),
            ..added
        }));
        assert_eq!(wall.posts()[1].text, "edited");

        wall.clear();
        assert!(wall.posts().is_empty());
    }
}
