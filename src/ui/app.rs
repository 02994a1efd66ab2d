//! Application module for the forum browser.
//!
//! Holds the complete view state and exposes one method per user action.
//! Rendering is delegated to the screen modules; this file only decides
//! what is shown.
use log::debug;
use ratatui::Frame;
use ratatui::widgets::ListState;

use super::{forum_view, screens};
use crate::forum::{Category, ForumStore, Post};
use crate::login::PhoneInput;

/// Top-level screen shown by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen
{
    /// Categorized forum browser
    Forum,
    /// Mobile-number login form
    Login,
    /// Logo placeholder
    Logo,
}

/// Which list the forum screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View
{
    /// All categories
    Categories,
    /// Posts of the selected category
    Posts,
}

/// Application mode that determines how user input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode
{
    /// Browsing - default state
    Normal,
    /// Typing into the search bar
    Search,
    /// The new-post dialog is open
    Compose,
    /// Help overlay is displayed
    Help,
}

/// Field of the new-post dialog that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField
{
    /// Post title
    #[default]
    Title,
    /// Post body
    Content,
}

/// Unsubmitted contents of the new-post dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft
{
    /// Title being typed
    pub title: String,
    /// Body being typed
    pub content: String,
    /// Field with keyboard focus
    pub field: ComposeField,
}

impl Draft
{
    /// The text of the focused field.
    const fn focused_mut(&mut self) -> &mut String
    {
        match self.field
        {
            ComposeField::Title => &mut self.title,
            ComposeField::Content => &mut self.content,
        }
    }
}

/// Main application state.
pub struct App
{
    /// Categories and posts
    pub store: ForumStore,
    /// Screen being shown
    pub screen: Screen,
    /// List shown on the forum screen
    pub view: View,
    /// Current input mode
    pub mode: AppMode,
    /// Search text applied to the current list
    pub search_text: String,
    /// Identifier of the category whose posts are shown
    pub selected_category: Option<String>,
    /// New-post dialog contents
    pub draft: Draft,
    /// Login screen phone field
    pub phone: PhoneInput,
    /// Flag indicating if the application should exit
    pub should_quit: bool,
    /// Cursor in the category list
    category_state: ListState,
    /// Cursor in the post list
    post_state: ListState,
}

impl App
{
    /// Creates the application on the given screen.
    ///
    /// # Arguments
    ///
    /// * `store` - Initial forum data
    /// * `screen` - Screen to show
    #[must_use]
    pub fn new(store: ForumStore, screen: Screen) -> Self
    {
        let mut app = Self {
            store,
            screen,
            view: View::Categories,
            mode: AppMode::Normal,
            search_text: String::new(),
            selected_category: None,
            draft: Draft::default(),
            phone: PhoneInput::new(),
            should_quit: false,
            category_state: ListState::default(),
            post_state: ListState::default(),
        };
        app.reset_cursor();
        app
    }

    /// Categories matching the search text, in display order.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<&Category>
    {
        self.store
            .search_categories(&self.search_text)
    }

    /// Posts of the selected category matching the search text.
    ///
    /// Empty when no category is selected.
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&Post>
    {
        self.selected_category
            .as_deref()
            .map(|id| {
                self.store
                    .posts_in_category(id, &self.search_text)
            })
            .unwrap_or_default()
    }

    /// Index of the highlighted row in the current list.
    #[must_use]
    pub fn cursor(&self) -> Option<usize>
    {
        match self.view
        {
            View::Categories => self.category_state.selected(),
            View::Posts => self.post_state.selected(),
        }
    }

    /// Returns `true` while the new-post dialog is shown.
    #[must_use]
    pub fn is_dialog_open(&self) -> bool
    {
        self.mode == AppMode::Compose
    }

    /// Renders the current screen to the provided frame.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render the UI to
    /// * `now` - Current time in milliseconds, for relative timestamps
    pub fn render(&mut self, frame: &mut Frame, now: u64)
    {
        match self.screen
        {
            Screen::Logo => screens::render_logo(frame),
            Screen::Login => screens::render_login(frame, &self.phone),
            Screen::Forum => self.render_forum(frame, now),
        }
    }

    /// Renders the forum list and any overlay on top of it.
    fn render_forum(&mut self, frame: &mut Frame, now: u64)
    {
        let area = frame.area();

        match self.view
        {
            View::Categories =>
            {
                let categories = self
                    .store
                    .search_categories(&self.search_text);
                forum_view::render_categories(
                    frame,
                    area,
                    &categories,
                    &self.search_text,
                    &mut self.category_state,
                );
            }
            View::Posts =>
            {
                let category_id = self
                    .selected_category
                    .as_deref()
                    .unwrap_or_default();
                let posts = self
                    .store
                    .posts_in_category(category_id, &self.search_text);
                forum_view::render_posts(
                    frame,
                    area,
                    &forum_view::PostsHeader {
                        category: self.store.category(category_id),
                        live_count: self
                            .store
                            .live_post_count(category_id),
                        search_text: &self.search_text,
                    },
                    &posts,
                    now,
                    &mut self.post_state,
                );
            }
        }

        match self.mode
        {
            AppMode::Normal =>
            {}
            AppMode::Search => forum_view::render_search(frame, &self.search_text),
            AppMode::Compose => forum_view::render_compose(frame, &self.draft),
            AppMode::Help => forum_view::render_help(frame),
        }
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self)
    {
        self.mode = if self.mode == AppMode::Help
        {
            AppMode::Normal
        }
        else
        {
            AppMode::Help
        };
    }

    /// Enters search mode, clearing any previous search.
    pub fn enter_search_mode(&mut self)
    {
        self.mode = AppMode::Search;
        self.set_search_text(String::new());
    }

    /// Leaves search mode, keeping the filter applied.
    pub fn exit_search_mode(&mut self)
    {
        self.mode = AppMode::Normal;
    }

    /// Leaves search mode and drops the filter.
    pub fn cancel_search(&mut self)
    {
        self.mode = AppMode::Normal;
        self.set_search_text(String::new());
    }

    /// Adds a character to the search text.
    ///
    /// # Arguments
    ///
    /// * `ch` - The character to add
    pub fn add_search_char(&mut self, ch: char)
    {
        let mut text = std::mem::take(&mut self.search_text);
        text.push(ch);
        self.set_search_text(text);
    }

    /// Removes the last character from the search text.
    pub fn remove_search_char(&mut self)
    {
        let mut text = std::mem::take(&mut self.search_text);
        text.pop();
        self.set_search_text(text);
    }

    /// Replaces the search text and moves the cursor to the first match.
    fn set_search_text(&mut self, text: String)
    {
        self.search_text = text;
        self.reset_cursor();
    }

    /// Moves the cursor one row down, stopping at the last row.
    pub fn select_next(&mut self)
    {
        let len = self.visible_len();
        let state = self.list_state_mut();

        let next = match state.selected()
        {
            Some(index) if index.saturating_add(1) < len => Some(index.saturating_add(1)),
            Some(index) => Some(index),
            None if len > 0 => Some(0),
            None => None,
        };
        state.select(next);
    }

    /// Moves the cursor one row up, stopping at the first row.
    pub fn select_previous(&mut self)
    {
        let state = self.list_state_mut();

        if let Some(index) = state.selected()
        {
            state.select(Some(index.saturating_sub(1)));
        }
    }

    /// Opens the post list of the highlighted category.
    ///
    /// Does nothing outside the category list or when no category is
    /// highlighted.
    pub fn open_selected_category(&mut self)
    {
        if self.view != View::Categories
        {
            return;
        }

        let Some(id) = self
            .category_state
            .selected()
            .and_then(|index| {
                self.visible_categories()
                    .get(index)
                    .map(|category| category.id.clone())
            })
        else
        {
            return;
        };

        debug!("Opening category {id}");
        self.selected_category = Some(id);
        self.view = View::Posts;
        self.set_search_text(String::new());
    }

    /// Opens the new-post dialog for the selected category.
    ///
    /// Only available from a category's post list.
    pub fn open_compose(&mut self)
    {
        if self.view == View::Posts && self.selected_category.is_some()
        {
            self.mode = AppMode::Compose;
        }
    }

    /// Moves keyboard focus to the other dialog field.
    pub fn compose_switch_field(&mut self)
    {
        self.draft.field = match self.draft.field
        {
            ComposeField::Title => ComposeField::Content,
            ComposeField::Content => ComposeField::Title,
        };
    }

    /// Types a character into the focused dialog field.
    pub fn compose_char(&mut self, ch: char)
    {
        self.draft.focused_mut().push(ch);
    }

    /// Deletes the last character of the focused dialog field.
    pub fn compose_backspace(&mut self)
    {
        self.draft.focused_mut().pop();
    }

    /// Handles Enter in the dialog: the title field advances to the content
    /// field, the content field submits.
    ///
    /// # Arguments
    ///
    /// * `now` - Current time in milliseconds
    pub fn compose_enter(&mut self, now: u64)
    {
        match self.draft.field
        {
            ComposeField::Title => self.draft.field = ComposeField::Content,
            ComposeField::Content =>
            {
                self.submit_post(now);
            }
        }
    }

    /// Creates a post from the draft in the selected category.
    ///
    /// On success the draft is cleared, the dialog closes and the cursor
    /// moves to the new post. An invalid draft changes nothing.
    ///
    /// # Arguments
    ///
    /// * `now` - Current time in milliseconds
    ///
    /// # Returns
    ///
    /// `true` if a post was created.
    pub fn submit_post(&mut self, now: u64) -> bool
    {
        let created = self.store.create_post(
            &self.draft.title,
            &self.draft.content,
            self.selected_category.as_deref(),
            now,
        );

        let id = match created
        {
            Ok(post) => post.id.clone(),
            Err(rejection) =>
            {
                debug!("Ignoring post submission: {rejection}");
                return false;
            }
        };

        self.draft = Draft::default();
        self.mode = AppMode::Normal;

        let position = self
            .visible_posts()
            .iter()
            .position(|post| post.id == id);
        // The new post can be hidden by a filter left over from a search
        match position
        {
            Some(index) => self.post_state.select(Some(index)),
            None => self.reset_cursor(),
        }

        true
    }

    /// Handles the back-navigation signal.
    ///
    /// Closes an open overlay first, then drops a leftover search filter,
    /// then returns from a post list to the category list, and finally
    /// requests exit.
    pub fn back(&mut self)
    {
        match (self.mode, self.view)
        {
            (AppMode::Compose | AppMode::Help, _) =>
            {
                self.mode = AppMode::Normal;
            }
            (AppMode::Search, _) => self.cancel_search(),
            (AppMode::Normal, View::Categories) if !self.search_text.is_empty() =>
            {
                self.set_search_text(String::new());
            }
            (AppMode::Normal, View::Posts) =>
            {
                debug!("Returning to category list");
                self.view = View::Categories;
                self.selected_category = None;
                self.post_state.select(None);
                self.set_search_text(String::new());
            }
            (AppMode::Normal, View::Categories) =>
            {
                self.should_quit = true;
            }
        }
    }

    /// Number of rows in the current list.
    fn visible_len(&self) -> usize
    {
        match self.view
        {
            View::Categories => self.visible_categories().len(),
            View::Posts => self.visible_posts().len(),
        }
    }

    /// Cursor state of the current list.
    const fn list_state_mut(&mut self) -> &mut ListState
    {
        match self.view
        {
            View::Categories => &mut self.category_state,
            View::Posts => &mut self.post_state,
        }
    }

    /// Puts the cursor on the first row of the current list, or clears it
    /// when the list is empty.
    fn reset_cursor(&mut self)
    {
        let first = (self.visible_len() > 0).then_some(0);
        self.list_state_mut().select(first);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const NOW: u64 = 1_760_000_000_000;

    fn forum() -> App
    {
        App::new(ForumStore::seeded(NOW), Screen::Forum)
    }

    fn type_search(app: &mut App, text: &str)
    {
        text.chars()
            .for_each(|ch| app.add_search_char(ch));
    }

    fn type_draft(app: &mut App, title: &str, content: &str)
    {
        title
            .chars()
            .for_each(|ch| app.compose_char(ch));
        app.compose_switch_field();
        content
            .chars()
            .for_each(|ch| app.compose_char(ch));
    }

    /// Opens the category at `index` of the unfiltered list.
    fn open_category(app: &mut App, index: usize)
    {
        for _ in 0..index
        {
            app.select_next();
        }
        app.open_selected_category();
    }

    #[test]
    fn starts_on_first_category()
    {
        let app = forum();

        assert_eq!(app.view, View::Categories);
        assert_eq!(app.cursor(), Some(0));
        assert_eq!(app.visible_categories().len(), 6);
    }

    #[test]
    fn cursor_stays_inside_the_list()
    {
        let mut app = forum();

        app.select_previous();
        assert_eq!(app.cursor(), Some(0));

        for _ in 0..20
        {
            app.select_next();
        }
        assert_eq!(app.cursor(), Some(5));
    }

    #[test]
    fn search_filters_and_resets_cursor()
    {
        let mut app = forum();
        app.select_next();
        app.select_next();

        app.enter_search_mode();
        type_search(&mut app, "exam");

        let names: Vec<_> = app
            .visible_categories()
            .iter()
            .map(|category| category.name.clone())
            .collect();
        assert_eq!(names, ["Exam Preparation"]);
        assert_eq!(app.cursor(), Some(0));

        type_search(&mut app, "zzz");
        assert_eq!(app.cursor(), None);

        app.cancel_search();
        assert_eq!(app.visible_categories().len(), 6);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn opening_a_filtered_category_uses_the_filtered_row()
    {
        let mut app = forum();
        app.enter_search_mode();
        type_search(&mut app, "career");
        app.exit_search_mode();

        app.open_selected_category();

        assert_eq!(app.view, View::Posts);
        assert_eq!(app.selected_category.as_deref(), Some("4"));
        assert!(app.search_text.is_empty());
        assert_eq!(app.visible_posts().len(), 1);
    }

    #[test]
    fn compose_only_from_post_list()
    {
        let mut app = forum();

        app.open_compose();
        assert!(!app.is_dialog_open());

        app.open_selected_category();
        app.open_compose();
        assert!(app.is_dialog_open());
    }

    #[test]
    fn submitting_adds_post_behind_pinned_one()
    {
        let mut app = forum();
        app.open_selected_category();
        assert_eq!(app.visible_posts().len(), 1);

        app.open_compose();
        type_draft(&mut app, "Hi", "Hello");
        app.compose_enter(NOW);

        let posts = app.visible_posts();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].pinned);
        assert_eq!(posts[1].title, "Hi");
        assert_eq!(posts[1].content, "Hello");

        assert!(!app.is_dialog_open());
        assert_eq!(app.draft, Draft::default());
        assert_eq!(app.cursor(), Some(1));
    }

    #[test]
    fn enter_on_title_moves_to_content()
    {
        let mut app = forum();
        app.open_selected_category();
        app.open_compose();

        app.compose_char('x');
        app.compose_enter(NOW);

        assert_eq!(app.draft.field, ComposeField::Content);
        assert!(app.is_dialog_open());
        assert_eq!(app.store.posts().len(), 3);
    }

    #[test]
    fn invalid_submission_is_a_no_op()
    {
        let mut app = forum();
        open_category(&mut app, 1);
        app.open_compose();
        type_draft(&mut app, "Only a title", "");

        let before = app.store.posts().to_vec();
        let draft = app.draft.clone();

        assert!(!app.submit_post(NOW));
        assert_eq!(app.store.posts(), before.as_slice());
        assert_eq!(app.draft, draft);
        assert!(app.is_dialog_open());
    }

    #[test]
    fn backspace_edits_focused_field()
    {
        let mut app = forum();
        app.open_selected_category();
        app.open_compose();
        type_draft(&mut app, "Tilte", "Body!");

        app.compose_backspace();
        app.compose_switch_field();
        app.compose_backspace();

        assert_eq!(app.draft.title, "Tilt");
        assert_eq!(app.draft.content, "Body");
    }

    #[test]
    fn back_unwinds_dialog_then_posts_then_exits()
    {
        let mut app = forum();
        open_category(&mut app, 2);
        app.open_compose();
        app.compose_char('a');

        app.back();
        assert!(!app.is_dialog_open());
        assert_eq!(app.view, View::Posts);
        assert_eq!(app.draft.title, "a");

        app.back();
        assert_eq!(app.view, View::Categories);
        assert_eq!(app.selected_category, None);
        assert!(!app.should_quit);

        app.back();
        assert!(app.should_quit);
        app.back();
        assert!(app.should_quit);
    }

    #[test]
    fn back_closes_help_and_search_first()
    {
        let mut app = forum();
        app.open_selected_category();

        app.toggle_help();
        app.back();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.view, View::Posts);

        app.enter_search_mode();
        type_search(&mut app, "welcome");
        app.back();
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.search_text.is_empty());
        assert_eq!(app.view, View::Posts);
    }

    #[test]
    fn back_drops_category_filter_before_exiting()
    {
        let mut app = forum();
        app.enter_search_mode();
        type_search(&mut app, "events");
        app.exit_search_mode();
        assert_eq!(app.visible_categories().len(), 1);

        app.back();
        assert!(!app.should_quit);
        assert!(app.search_text.is_empty());
        assert_eq!(app.visible_categories().len(), 6);
        assert_eq!(app.cursor(), Some(0));

        app.back();
        assert!(app.should_quit);
    }

    #[test]
    fn submitting_under_a_hiding_filter_leaves_no_cursor()
    {
        let mut app = forum();
        app.open_selected_category();

        app.enter_search_mode();
        type_search(&mut app, "zzz");
        app.exit_search_mode();

        app.open_compose();
        type_draft(&mut app, "Hi", "Hello");
        assert!(app.submit_post(NOW));

        assert!(app.visible_posts().is_empty());
        assert_eq!(app.cursor(), None);
        assert_eq!(app.store.live_post_count("1"), 2);
    }

    #[test]
    fn post_search_applies_within_category()
    {
        let mut app = forum();
        app.open_selected_category();

        app.enter_search_mode();
        type_search(&mut app, "KIND");
        assert_eq!(app.visible_posts().len(), 1);

        app.remove_search_char();
        type_search(&mut app, "x");
        assert!(app.visible_posts().is_empty());
        assert_eq!(app.cursor(), None);
    }
}
