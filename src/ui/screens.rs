//! Standalone screens: the logo placeholder and the login form.
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::login::{PHONE_DIGITS, PhoneInput};

/// Purple used by the logo and accents across the app.
pub const BRAND_COLOR: Color = Color::Rgb(0x6B, 0x2B, 0xBE);

/// Size of the logo box.
const LOGO_WIDTH: u16 = 20;
const LOGO_HEIGHT: u16 = 9;

/// Size of the login form.
const LOGIN_WIDTH: u16 = 44;
const LOGIN_HEIGHT: u16 = 13;

/// Renders the logo box centered on screen.
pub fn render_logo(frame: &mut Frame)
{
    let area = centered_fixed(frame.area(), LOGO_WIDTH, LOGO_HEIGHT);

    let letter = Style::new()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let logo = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("█▀▀▄", letter)),
        Line::from(Span::styled("█▀▀▄", letter)),
        Line::from(Span::styled("▀▀▀ ", letter)),
        Line::from(Span::styled("    ▁▂▃", Style::new().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::new().bg(BRAND_COLOR)),
    );

    frame.render_widget(logo, area);
}

/// Renders the mobile-number login form.
///
/// # Arguments
///
/// * `frame` - The frame to render to
/// * `phone` - Current contents of the phone field
pub fn render_login(frame: &mut Frame, phone: &PhoneInput)
{
    let area = centered_fixed(frame.area(), LOGIN_WIDTH, LOGIN_HEIGHT);

    // Unfilled positions show as underscores so the 10-digit limit is visible
    let field = format!(
        "{}{}",
        phone.digits(),
        "_".repeat(PHONE_DIGITS.saturating_sub(phone.digits().len()))
    );

    let button_style = if phone.is_complete()
    {
        Style::new()
            .fg(Color::White)
            .bg(BRAND_COLOR)
            .add_modifier(Modifier::BOLD)
    }
    else
    {
        Style::new().fg(Color::DarkGray)
    };

    let form = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to Bodha",
            Style::new()
                .fg(BRAND_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter your mobile number"),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {field} ]"),
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  Send OTP  ", button_style)),
        Line::from(""),
        Line::from(Span::styled(
            "We will send you a one time password",
            Style::new().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: send OTP  Esc: quit",
            Style::new().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Login"),
    );

    frame.render_widget(form, area);
}

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect
{
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect::new(
        area.x
            .saturating_add(area.width.saturating_sub(width) / 2),
        area.y
            .saturating_add(area.height.saturating_sub(height) / 2),
        width,
        height,
    )
}
