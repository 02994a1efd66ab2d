//! Forum entities.
//!
//! Categories are fixed at startup. Posts reference their category by
//! identifier only; nothing enforces that the referenced category exists
//! beyond the check done at creation time.

/// Author recorded on every post created from this application.
pub const CURRENT_USER: &str = "You";

/// A named bucket that posts belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category
{
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description shown under the name
    pub description: String,
    /// Icon glyph
    pub icon: String,
    /// Display color as `#RRGGBB`
    pub color: String,
    /// Advisory post count. Never recomputed, so it can drift from the real
    /// number of posts in the category.
    pub post_count: u32,
}

impl Category
{
    /// Returns `true` if the name or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool
    {
        self.name.to_lowercase().contains(needle) ||
            self.description
                .to_lowercase()
                .contains(needle)
    }
}

/// A single forum entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post
{
    /// Unique identifier, derived from the creation timestamp
    pub id: String,
    /// Post title
    pub title: String,
    /// Body text
    pub content: String,
    /// Author display name
    pub author: String,
    /// Identifier of the owning category
    pub category_id: String,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: u64,
    /// Pinned posts are listed ahead of the rest of their category
    pub pinned: bool,
}

impl Post
{
    /// Returns `true` if the title or content contains `needle`.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool
    {
        self.title
            .to_lowercase()
            .contains(needle) ||
            self.content
                .to_lowercase()
                .contains(needle)
    }
}
