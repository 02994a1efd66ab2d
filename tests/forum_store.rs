use bodha::forum::{CURRENT_USER, time_ago};
use bodha::{DraftRejection, ForumStore};

const NOW: u64 = 1_760_000_000_000;

#[test]
fn seeded_forum_walkthrough()
{
    let mut store = ForumStore::seeded(NOW);
    assert_eq!(store.categories().len(), 6);

    let general = store.posts_in_category("1", "");
    assert_eq!(general.len(), 1);
    assert!(general[0].pinned);

    let created = store
        .create_post("Hi", "Hello", Some("1"), NOW)
        .unwrap();
    assert_eq!(created.author, CURRENT_USER);

    let general = store.posts_in_category("1", "");
    let titles: Vec<_> = general
        .iter()
        .map(|post| post.title.as_str())
        .collect();
    assert_eq!(titles, ["Welcome to the Bodha community", "Hi"]);

    // Newest first in storage order
    assert_eq!(store.posts()[0].title, "Hi");
}

#[test]
fn each_valid_creation_grows_the_view_by_one()
{
    let mut store = ForumStore::seeded(NOW);

    for (offset, category) in ["2", "2", "5", "2"].into_iter().enumerate()
    {
        let before = store.posts_in_category(category, "").len();
        let stamp = NOW + u64::try_from(offset).unwrap();

        store
            .create_post("Title", "Body", Some(category), stamp)
            .unwrap();

        let view = store.posts_in_category(category, "");
        assert_eq!(view.len(), before + 1);
        // No pinned posts in these categories, so the newest leads
        assert_eq!(view[0].created_at, stamp);
    }
}

#[test]
fn rejected_drafts_do_not_change_any_view()
{
    let mut store = ForumStore::seeded(NOW);
    let snapshot = store.posts().to_vec();

    assert_eq!(
        store.create_post("", "Body", Some("1"), NOW).unwrap_err(),
        DraftRejection::EmptyTitle
    );
    assert_eq!(
        store.create_post("Title", "", Some("1"), NOW).unwrap_err(),
        DraftRejection::EmptyContent
    );
    assert_eq!(
        store.create_post("Title", "Body", None, NOW).unwrap_err(),
        DraftRejection::NoCategorySelected
    );

    assert_eq!(store.posts(), snapshot.as_slice());
}

#[test]
fn search_spans_title_and_content_case_insensitively()
{
    let mut store = ForumStore::unseeded();
    store
        .create_post("Physics doubts", "Kinematics chapter 3", Some("2"), NOW)
        .unwrap();
    store
        .create_post("Weekend plan", "Group study for PHYSICS", Some("2"), NOW + 1)
        .unwrap();
    store
        .create_post("Physics in Events?", "wrong category", Some("5"), NOW + 2)
        .unwrap();

    let found = store.posts_in_category("2", "physics");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].title, "Weekend plan");
    assert_eq!(found[1].title, "Physics doubts");
}

#[test]
fn labels_age_of_seed_posts()
{
    let store = ForumStore::seeded(NOW);
    let welcome = store.posts_in_category("1", "")[0];

    assert_eq!(time_ago(welcome.created_at, NOW), "2 days ago");
    assert_eq!(time_ago(NOW - 150_000, NOW), "2 min ago");
}
