//! Forum screen widgets.
//!
//! Stateless rendering helpers for the category list, the post list and the
//! overlays drawn on top of them. All state lives in [`super::App`].
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use textwrap::wrap;

use super::app::{ComposeField, Draft};
use super::screens::BRAND_COLOR;
use crate::forum::{Category, Post, time_ago};

/// Style of the row under the cursor.
const HIGHLIGHT_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

/// Secondary text such as descriptions and hints.
const DIM_STYLE: Style = Style::new().fg(Color::Gray);

/// Border of the dialog field with keyboard focus.
const FOCUSED_BORDER_STYLE: Style = Style::new().fg(Color::LightYellow);

/// Prefix drawn before the row under the cursor.
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Lines of post content shown in the list before truncating.
const PREVIEW_LINES: usize = 2;

/// Header information for a category's post list.
pub struct PostsHeader<'a>
{
    /// The category being listed, if it still exists
    pub category: Option<&'a Category>,
    /// Number of posts actually stored for the category
    pub live_count: usize,
    /// Active search filter
    pub search_text: &'a str,
}

/// Renders the category list.
///
/// # Arguments
///
/// * `frame` - The frame to render to
/// * `area` - The area to fill
/// * `categories` - Categories matching the current search
/// * `search_text` - Active search filter, shown in the header
/// * `state` - Cursor state of the list
pub fn render_categories(
    frame: &mut Frame,
    area: Rect,
    categories: &[&Category],
    search_text: &str,
    state: &mut ListState,
)
{
    let [header, body, footer] = split_screen(area);

    render_header(frame, header, "Bodha Forum", "Pick a category", search_text);

    if categories.is_empty()
    {
        render_empty(frame, body, "No categories match your search.");
    }
    else
    {
        let items: Vec<ListItem> = categories
            .iter()
            .map(|&category| category_item(category))
            .collect();

        let list = List::new(items)
            .highlight_style(HIGHLIGHT_STYLE)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, body, state);
    }

    render_footer(frame, footer, "Enter: open  /: search  ?: help  q: quit");
}

/// Renders the post list of one category.
///
/// # Arguments
///
/// * `frame` - The frame to render to
/// * `area` - The area to fill
/// * `header` - Category details for the header
/// * `posts` - Posts to list, already filtered and sorted
/// * `now` - Current time in milliseconds
/// * `state` - Cursor state of the list
pub fn render_posts(
    frame: &mut Frame,
    area: Rect,
    header: &PostsHeader<'_>,
    posts: &[&Post],
    now: u64,
    state: &mut ListState,
)
{
    let [header_area, body, footer] = split_screen(area);

    let (title, subtitle) = header.category.map_or_else(
        || ("Unknown category".to_owned(), String::new()),
        |category| {
            (
                format!("{} {}", category.icon, category.name),
                format!(
                    "{} posts here, {} across the community",
                    header.live_count, category.post_count
                ),
            )
        },
    );
    render_header(frame, header_area, &title, &subtitle, header.search_text);

    if posts.is_empty()
    {
        let message = if header.search_text.is_empty()
        {
            "No posts yet. Press n to start a discussion."
        }
        else
        {
            "No posts match your search."
        };
        render_empty(frame, body, message);
    }
    else
    {
        // 2 for the highlight symbol, 1 for the right edge
        let wrap_width = usize::from(body.width).saturating_sub(HIGHLIGHT_SYMBOL.len() + 1);

        let items: Vec<ListItem> = posts
            .iter()
            .map(|post| post_item(post, wrap_width, now))
            .collect();

        let list = List::new(items)
            .highlight_style(HIGHLIGHT_STYLE)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, body, state);
    }

    render_footer(
        frame,
        footer,
        "n: new post  /: search  Esc: back  ?: help  q: quit",
    );
}

/// Renders the search input box.
pub fn render_search(frame: &mut Frame, search_text: &str)
{
    let area = Rect::new(
        frame.area().width / 4,
        frame.area().height.saturating_sub(3),
        frame.area().width / 2,
        3.min(frame.area().height),
    );

    frame.render_widget(Clear, area);

    let search_box = Paragraph::new(format!("/{search_text}")).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search"),
    );

    frame.render_widget(search_box, area);
}

/// Renders the new-post dialog.
pub fn render_compose(frame: &mut Frame, draft: &Draft)
{
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title("New post")
        .border_style(Style::new().fg(BRAND_COLOR));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [title_area, content_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let field_block = |label: &'static str, field: ComposeField| {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(label);
        if draft.field == field
        {
            block.border_style(FOCUSED_BORDER_STYLE)
        }
        else
        {
            block
        }
    };

    frame.render_widget(
        Paragraph::new(draft.title.as_str()).block(field_block("Title", ComposeField::Title)),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(draft.content.as_str())
            .wrap(Wrap { trim: false })
            .block(field_block("Content", ComposeField::Content)),
        content_area,
    );
    frame.render_widget(
        Paragraph::new("Tab: switch field  Enter: next/post  Esc: close").style(DIM_STYLE),
        hint_area,
    );
}

/// Renders the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame)
{
    let area = centered_rect(60, 60, frame.area());

    frame.render_widget(Clear, area);

    let text = Text::from(vec![
        Line::from("Bodha Forum Help:"),
        Line::from(""),
        Line::from("j/k or ↓/↑: Move selection"),
        Line::from("Enter: Open category"),
        Line::from("/: Search categories or posts"),
        Line::from("n: New post in this category"),
        Line::from("Tab: Switch field in the new post dialog"),
        Line::from("Esc: Back"),
        Line::from("q: Quit"),
        Line::from("?: Toggle help"),
    ]);

    let help_box = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help"),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help_box, area);
}

/// Splits the screen into header, list and footer rows.
fn split_screen(area: Rect) -> [Rect; 3]
{
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Renders a title, subtitle and the active search filter.
fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, search_text: &str)
{
    let mut second_line = vec![Span::styled(subtitle.to_owned(), DIM_STYLE)];
    if !search_text.is_empty()
    {
        second_line.push(Span::raw(format!("  [filter: {search_text}]")));
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_owned(),
            Style::new()
                .fg(BRAND_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(second_line),
    ])
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Renders the key hint row.
fn render_footer(frame: &mut Frame, area: Rect, hint: &str)
{
    frame.render_widget(Paragraph::new(hint.to_owned()).style(DIM_STYLE), area);
}

/// Renders a placeholder message in place of an empty list.
fn render_empty(frame: &mut Frame, area: Rect, message: &str)
{
    frame.render_widget(
        Paragraph::new(message.to_owned())
            .style(DIM_STYLE)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Builds the two-line list entry for a category.
fn category_item(category: &Category) -> ListItem<'static>
{
    let color = category
        .color
        .parse::<Color>()
        .unwrap_or(Color::White);

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", category.icon), Style::new().fg(color)),
            Span::styled(
                category.name.clone(),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} posts", category.post_count), DIM_STYLE),
        ]),
        Line::from(Span::styled(
            format!("  {}", category.description),
            DIM_STYLE,
        )),
    ])
}

/// Builds the list entry for a post: title, content preview and byline.
fn post_item(post: &Post, wrap_width: usize, now: u64) -> ListItem<'static>
{
    let mut title = Vec::with_capacity(2);
    if post.pinned
    {
        title.push(Span::styled(
            "[pinned] ",
            Style::new().fg(BRAND_COLOR),
        ));
    }
    title.push(Span::styled(
        post.title.clone(),
        Style::new().add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![Line::from(title)];

    // textwrap panics on zero width
    let preview = wrap(&post.content, wrap_width.max(1));
    let truncated = preview.len() > PREVIEW_LINES;
    lines.extend(
        preview
            .into_iter()
            .take(PREVIEW_LINES)
            .map(|line| Line::raw(line.into_owned())),
    );
    if truncated
    {
        lines.push(Line::raw("…"));
    }

    lines.push(Line::from(Span::styled(
        format!("{} · {}", post.author, time_ago(post.created_at, now)),
        DIM_STYLE,
    )));
    lines.push(Line::raw(""));

    ListItem::new(lines)
}

/// Creates a centered rectangle inside the given area.
///
/// # Arguments
///
/// * `percent_x` - Width of the rectangle as a percentage of the parent area
/// * `percent_y` - Height of the rectangle as a percentage of the parent area
/// * `parent` - Parent rectangle
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect
{
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
