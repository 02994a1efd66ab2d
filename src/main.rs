use anyhow::{Context, Result};
use bodha::forum::now_millis;
use bodha::ui::CrosstermTerminal;
use bodha::{App, AppMode, Event, EventHandler, ForumStore, Screen, Tui, View};
use bodha::{init_panic_hook, logging};
use clap::{Arg, ArgAction, Command, crate_version};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use std::time::Duration;

fn main() -> Result<()>
{
    // `--help` still works when the platform has no cache directory
    let log_path = logging::log_file_path();
    let log_location = log_path.as_ref().map_or_else(
        |_| "<unavailable: no cache directory>".to_owned(),
        |path| path.display().to_string(),
    );

    let matches = build_cli(&log_location).get_matches();

    let log_path = log_path?;

    if matches.get_flag("clear-log")
    {
        logging::clear_log_file(&log_path)?;
        println!("Removed {}", log_path.display());
        return Ok(());
    }

    logging::init_logging(&log_path)?;
    init_panic_hook();

    let screen = match matches
        .get_one::<String>("screen")
        .map(String::as_str)
    {
        Some("login") => Screen::Login,
        Some("logo") => Screen::Logo,
        _ => Screen::Forum,
    };

    let store = if matches.get_flag("no-seed")
    {
        ForumStore::unseeded()
    }
    else
    {
        ForumStore::seeded(now_millis())
    };

    info!("Starting on {screen:?} screen with {} posts", store.posts().len());

    let app = App::new(store, screen);

    // Restores the terminal when dropped, including on early `?` returns
    let mut tui = Tui::new()?;

    // Ticks keep relative timestamps fresh
    let event_handler = EventHandler::new(Duration::from_millis(250));

    run_app(tui.terminal_mut(), app, &event_handler)
}

/// Builds the command line interface.
///
/// # Arguments
///
/// * `log_location` - Where logs are written, shown in the help text
fn build_cli(log_location: &str) -> Command
{
    Command::new("bodha")
        .version(crate_version!())
        .about("A terminal-based community forum")
        // Inform about the log file
        .after_help(format!(
            "Posts live in memory and are lost on exit.\nLogs are written to: {log_location}"
        ))
        .arg(
            Arg::new("screen")
                .long("screen")
                .short('s')
                .help("Screen to open")
                .value_parser(["forum", "login", "logo"])
                .default_value("forum"),
        )
        .arg(
            Arg::new("no-seed")
                .long("no-seed")
                .help("Start without the sample posts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear-log")
                .long("clear-log")
                .help("Delete the log file and exit")
                .action(ArgAction::SetTrue),
        )
}

/// Run the main loop
///
/// # Arguments
///
/// * `terminal` - The terminal to draw to
/// * `app` - The app to run
/// * `event_handler` - The event handler to handle events
///
/// # Errors
///
/// Returns an error if drawing fails or the event channel disconnects.
fn run_app(
    terminal: &mut CrosstermTerminal,
    mut app: App,
    event_handler: &EventHandler,
) -> Result<()>
{
    while !app.should_quit
    {
        terminal
            .draw(|frame| app.render(frame, now_millis()))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event_handler.next()?
        {
            handle_key(&mut app, key);
        }
    }

    info!("Exiting");
    Ok(())
}

/// Applies one key press to the application state.
fn handle_key(app: &mut App, key: KeyEvent)
{
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    match app.screen
    {
        Screen::Logo =>
        {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                app.should_quit = true;
            }
        }
        Screen::Login => match key.code
        {
            KeyCode::Char(ch) if ch.is_ascii_digit() =>
            {
                app.phone.push(ch);
            }
            KeyCode::Backspace => app.phone.pop(),
            KeyCode::Enter => app.phone.send_otp(),
            KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
            _ =>
            {}
        },
        Screen::Forum => handle_forum_key(app, key.code),
    }
}

/// Key bindings of the forum screen.
fn handle_forum_key(app: &mut App, code: KeyCode)
{
    match (app.mode, code)
    {
        // Quit with 'q' in normal mode
        (AppMode::Normal, KeyCode::Char('q')) =>
        {
            app.should_quit = true;
        }

        // Help toggle with '?'
        (AppMode::Normal | AppMode::Help, KeyCode::Char('?')) =>
        {
            app.toggle_help();
        }

        // Navigation in normal mode
        (AppMode::Normal, KeyCode::Char('j') | KeyCode::Down) =>
        {
            app.select_next();
        }
        (AppMode::Normal, KeyCode::Char('k') | KeyCode::Up) =>
        {
            app.select_previous();
        }
        (AppMode::Normal, KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right)
            if app.view == View::Categories =>
        {
            app.open_selected_category();
        }
        (AppMode::Normal, KeyCode::Char('n')) =>
        {
            app.open_compose();
        }

        // Search handling
        (AppMode::Normal, KeyCode::Char('/')) =>
        {
            app.enter_search_mode();
        }
        (AppMode::Search, KeyCode::Enter) =>
        {
            app.exit_search_mode();
        }
        (AppMode::Search, KeyCode::Backspace) =>
        {
            app.remove_search_char();
        }
        (AppMode::Search, KeyCode::Char(ch)) =>
        {
            app.add_search_char(ch);
        }

        // New post dialog
        (AppMode::Compose, KeyCode::Tab | KeyCode::BackTab) =>
        {
            app.compose_switch_field();
        }
        (AppMode::Compose, KeyCode::Enter) =>
        {
            app.compose_enter(now_millis());
        }
        (AppMode::Compose, KeyCode::Backspace) =>
        {
            app.compose_backspace();
        }
        (AppMode::Compose, KeyCode::Char(ch)) =>
        {
            app.compose_char(ch);
        }

        // Back navigation closes overlays, then leaves the post list
        (_, KeyCode::Esc) |
        (AppMode::Normal, KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace) =>
        {
            app.back();
        }

        _ =>
        {} // Ignore other key combinations
    }
}

#[cfg(test)]
mod tests
{
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn help_does_not_need_a_log_path()
    {
        let err = build_cli("<unavailable: no cache directory>")
            .try_get_matches_from(["bodha", "--help"])
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("<unavailable: no cache directory>"));
    }

    #[test]
    fn screen_defaults_to_forum()
    {
        let matches = build_cli("bodha.log")
            .try_get_matches_from(["bodha"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("screen").map(String::as_str),
            Some("forum")
        );
        assert!(!matches.get_flag("no-seed"));
    }

    #[test]
    fn unknown_screen_is_rejected()
    {
        let err = build_cli("bodha.log")
            .try_get_matches_from(["bodha", "--screen", "settings"])
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
