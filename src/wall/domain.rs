// Domain types - Pure, immutable, no side effects
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a post on the wall. Zero means "not yet stored".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    pub const UNASSIGNED: PostId = PostId(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub owner_id: i64,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl Photo {
    /// Photo with unknown dimensions (width and height stay 0)
    pub fn new(id: i64, owner_id: i64, url: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            url: url.into(),
            width: 0,
            height: 0,
        }
    }

    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    /// Seconds
    pub duration: i64,
}

impl Video {
    pub fn new(id: i64, owner_id: i64, title: impl Into<String>, duration: i64) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audio {
    pub id: i64,
    pub owner_id: i64,
    pub artist: String,
    pub title: String,
    /// Seconds
    pub duration: i64,
}

impl Audio {
    pub fn new(
        id: i64,
        owner_id: i64,
        artist: impl Into<String>,
        title: impl Into<String>,
        duration: i64,
    ) -> Self {
        Self {
            id,
            owner_id,
            artist: artist.into(),
            title: title.into(),
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    /// Bytes
    pub size: i64,
    /// File extension without the dot (e.g. "pdf")
    pub ext: String,
}

impl Document {
    pub fn new(
        id: i64,
        owner_id: i64,
        title: impl Into<String>,
        size: i64,
        ext: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            size,
            ext: ext.into(),
        }
    }
}

/// External link, identified by its URL alone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: String,
}

impl Link {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Kind tag of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Photo,
    Video,
    Audio,
    Document,
    Link,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "doc",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of media or link content attached to a post.
///
/// The kind tag is computed from the variant, and the serde `type` field is
/// written from the variant name, so tag and payload always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Attachment {
    Photo(Photo),
    Video(Video),
    Audio(Audio),
    #[serde(rename = "doc")]
    Document(Document),
    Link(Link),
}

impl Attachment {
    pub fn kind(&self) -> AttachmentKind {
        match self {
            Self::Photo(_) => AttachmentKind::Photo,
            Self::Video(_) => AttachmentKind::Video,
            Self::Audio(_) => AttachmentKind::Audio,
            Self::Document(_) => AttachmentKind::Document,
            Self::Link(_) => AttachmentKind::Link,
        }
    }

    pub fn as_photo(&self) -> Option<&Photo> {
        match self {
            Self::Photo(photo) => Some(photo),
            _ => None,
        }
    }

    pub fn as_video(&self) -> Option<&Video> {
        match self {
            Self::Video(video) => Some(video),
            _ => None,
        }
    }

    pub fn as_audio(&self) -> Option<&Audio> {
        match self {
            Self::Audio(audio) => Some(audio),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }
}

impl From<Photo> for Attachment {
    fn from(photo: Photo) -> Self {
        Self::Photo(photo)
    }
}

impl From<Video> for Attachment {
    fn from(video: Video) -> Self {
        Self::Video(video)
    }
}

impl From<Audio> for Attachment {
    fn from(audio: Audio) -> Self {
        Self::Audio(audio)
    }
}

impl From<Document> for Attachment {
    fn from(doc: Document) -> Self {
        Self::Document(doc)
    }
}

impl From<Link> for Attachment {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

/// A wall post. Updates replace the whole record, never single fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Assigned by the store; whatever a draft carries here is overwritten on add
    #[serde(default)]
    pub id: PostId,
    /// Wall owner
    pub owner_id: i64,
    /// Author
    pub from_id: i64,
    /// Unix timestamp, seconds
    pub date: i64,
    pub text: String,
    /// Display order; no attachments and an empty list are the same thing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Post {
    /// Draft post without an id and without attachments
    pub fn new(owner_id: i64, from_id: i64, date: i64, text: impl Into<String>) -> Self {
        Self {
            id: PostId::UNASSIGNED,
            owner_id,
            from_id,
            date,
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachments(self, attachments: Vec<Attachment>) -> Self {
        Self {
            attachments,
            ..self
        }
    }
}
