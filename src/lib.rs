// Library exports for the wall store
// This allows integration tests and external code to use wall modules

pub mod batch;
pub mod config;
pub mod error;
pub mod wall;

pub use error::{AppError, AppResult};
pub use wall::{Attachment, AttachmentKind, Post, PostId, SharedWall, WallStore};
