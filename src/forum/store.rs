//! In-memory forum state.
//!
//! The store owns the authoritative lists of categories and posts. The UI
//! only ever reads derived views from it and applies the single supported
//! mutation, post creation.
use log::{debug, info};
use thiserror::Error;

use super::model::{CURRENT_USER, Category, Post};
use super::seed;

/// Reasons a post draft is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftRejection
{
    /// Title is empty or only whitespace
    #[error("post title is empty")]
    EmptyTitle,
    /// Content is empty or only whitespace
    #[error("post content is empty")]
    EmptyContent,
    /// No category was selected when submitting
    #[error("no category selected")]
    NoCategorySelected,
    /// The selected category is not known to the store
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

/// Holds categories and posts and derives the filtered views shown on
/// screen.
#[derive(Debug, Clone, Default)]
pub struct ForumStore
{
    /// Categories in display order
    categories: Vec<Category>,
    /// Posts, newest first
    posts: Vec<Post>,
}

impl ForumStore
{
    /// Creates a store from existing data.
    ///
    /// # Arguments
    ///
    /// * `categories` - Categories in display order
    /// * `posts` - Posts, newest first
    #[must_use]
    pub const fn new(categories: Vec<Category>, posts: Vec<Post>) -> Self
    {
        Self { categories, posts }
    }

    /// Creates a store with the seed categories and seed posts.
    ///
    /// # Arguments
    ///
    /// * `now` - Current time in milliseconds, used to back-date seed posts
    #[must_use]
    pub fn seeded(now: u64) -> Self
    {
        Self::new(seed::categories(), seed::posts(now))
    }

    /// Creates a store with the seed categories and no posts.
    #[must_use]
    pub fn unseeded() -> Self
    {
        Self::new(seed::categories(), Vec::new())
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category]
    {
        &self.categories
    }

    /// All posts, newest first.
    #[must_use]
    pub fn posts(&self) -> &[Post]
    {
        &self.posts
    }

    /// Looks up a category by identifier.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category>
    {
        self.categories
            .iter()
            .find(|category| category.id == id)
    }

    /// Number of posts that actually reference `category_id`.
    ///
    /// Unlike [`Category::post_count`] this is always accurate.
    #[must_use]
    pub fn live_post_count(&self, category_id: &str) -> usize
    {
        self.posts
            .iter()
            .filter(|post| post.category_id == category_id)
            .count()
    }

    /// Lists the categories whose name or description contains `term`.
    ///
    /// Matching is case-insensitive and keeps display order. An empty term
    /// matches every category.
    #[must_use]
    pub fn search_categories(&self, term: &str) -> Vec<&Category>
    {
        let needle = term.to_lowercase();

        self.categories
            .iter()
            .filter(|category| category.matches(&needle))
            .collect()
    }

    /// Lists the posts of one category whose title or content contains
    /// `term`.
    ///
    /// Matching is case-insensitive. Pinned posts come first; otherwise the
    /// storage order (newest first) is kept. An unknown category yields an
    /// empty list.
    ///
    /// # Arguments
    ///
    /// * `category_id` - The category to list
    /// * `term` - Search term, may be empty
    #[must_use]
    pub fn posts_in_category(&self, category_id: &str, term: &str) -> Vec<&Post>
    {
        let needle = term.to_lowercase();

        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| post.category_id == category_id && post.matches(&needle))
            .collect();

        // `sort_by_key` is stable, so insertion order survives within each
        // partition.
        posts.sort_by_key(|post| !post.pinned);
        posts
    }

    /// Creates a post and puts it at the front of the post list.
    ///
    /// Nothing is modified when the draft is rejected.
    ///
    /// # Arguments
    ///
    /// * `title` - Post title
    /// * `content` - Post body
    /// * `category_id` - The currently selected category, if any
    /// * `now` - Current time in milliseconds
    ///
    /// # Returns
    ///
    /// The newly created post.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftRejection`] if the title or content is blank, or if
    /// no known category is selected.
    pub fn create_post(
        &mut self,
        title: &str,
        content: &str,
        category_id: Option<&str>,
        now: u64,
    ) -> Result<&Post, DraftRejection>
    {
        if title.trim().is_empty()
        {
            return Err(DraftRejection::EmptyTitle);
        }
        if content.trim().is_empty()
        {
            return Err(DraftRejection::EmptyContent);
        }
        let category_id = category_id.ok_or(DraftRejection::NoCategorySelected)?;
        if self.category(category_id).is_none()
        {
            return Err(DraftRejection::UnknownCategory(
                category_id.to_owned(),
            ));
        }

        let id = self.unique_id(now);
        debug!("Creating post {id} in category {category_id}");

        self.posts.insert(
            0,
            Post {
                id,
                title: title.to_owned(),
                content: content.to_owned(),
                author: CURRENT_USER.to_owned(),
                category_id: category_id.to_owned(),
                created_at: now,
                pinned: false,
            },
        );

        info!("Post created, {} posts in total", self.posts.len());

        Ok(&self.posts[0])
    }

    /// Derives a post identifier from `now`, adding a numeric suffix when
    /// another post was created in the same millisecond.
    fn unique_id(&self, now: u64) -> String
    {
        let base = now.to_string();
        let is_taken = |candidate: &str| {
            self.posts
                .iter()
                .any(|post| post.id == candidate)
        };

        if !is_taken(&base)
        {
            return base;
        }

        let mut suffix: u32 = 1;
        loop
        {
            let candidate = format!("{base}-{suffix}");
            if !is_taken(&candidate)
            {
                return candidate;
            }
            suffix = suffix.saturating_add(1);
        }
    }
}
