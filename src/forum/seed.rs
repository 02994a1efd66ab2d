//! Initial forum data present before any user action.
use super::model::{Category, Post};

/// Milliseconds in an hour, used to back-date seed posts.
const HOUR_MS: u64 = 60 * 60 * 1000;

/// Builds the fixed category list in display order.
#[must_use]
pub fn categories() -> Vec<Category>
{
    [
        ("1", "General Discussion", "Talk about anything and everything", "◆", "#6B2BBE", 128),
        ("2", "Study Help", "Ask doubts and help others learn", "✎", "#2B7BBE", 94),
        ("3", "Exam Preparation", "Tips, schedules and mock tests", "✔", "#BE2B5A", 76),
        ("4", "Career Guidance", "Jobs, internships and higher studies", "▲", "#2BBE7B", 53),
        ("5", "Events", "Workshops, fests and meetups", "★", "#BE8A2B", 31),
        ("6", "Off Topic", "Music, movies, memes and more", "♫", "#7B7B7B", 210),
    ]
    .into_iter()
    .map(|(id, name, description, icon, color, post_count)| Category {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
        color: color.to_owned(),
        post_count,
    })
    .collect()
}

/// Builds the seed posts, newest first, back-dated relative to `now`.
///
/// Only the welcome post in the first category is pinned.
#[must_use]
pub fn posts(now: u64) -> Vec<Post>
{
    vec![
        Post {
            id: "3".to_owned(),
            title: "Mock test series starts Monday".to_owned(),
            content: "Full-length papers every week, with solutions posted the day after."
                .to_owned(),
            author: "Exam Cell".to_owned(),
            category_id: "3".to_owned(),
            created_at: now.saturating_sub(3 * HOUR_MS),
            pinned: false,
        },
        Post {
            id: "2".to_owned(),
            title: "Resume review thread".to_owned(),
            content: "Drop a link to your resume and get feedback from seniors.".to_owned(),
            author: "Mentor".to_owned(),
            category_id: "4".to_owned(),
            created_at: now.saturating_sub(20 * HOUR_MS),
            pinned: false,
        },
        Post {
            id: "1".to_owned(),
            title: "Welcome to the Bodha community".to_owned(),
            content: "Be kind, stay on topic and search before posting a new question."
                .to_owned(),
            author: "Admin".to_owned(),
            category_id: "1".to_owned(),
            created_at: now.saturating_sub(48 * HOUR_MS),
            pinned: true,
        },
    ]
}
