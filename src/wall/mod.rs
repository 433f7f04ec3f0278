pub mod domain;
pub mod store;

pub use domain::{Attachment, AttachmentKind, Audio, Document, Link, Photo, Post, PostId, Video};
pub use store::{SharedWall, WallStore};
