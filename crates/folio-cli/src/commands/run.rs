use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use folio_core::{profile, AppConfig, Profile};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{truncate_str, HelpWidget, PortfolioWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, profile_override: Option<PathBuf>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Resolve the profile: CLI flag, then config, then the built-in sample
    let profile = load_profile_or_sample(&config, profile_override)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create app state
    let mut app = App::new(config.clone(), profile, theme)?;

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    let result = main_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_profile_or_sample(
    config: &AppConfig,
    profile_override: Option<PathBuf>,
) -> Result<Profile> {
    match profile_override.or_else(|| config.profile_path()) {
        Some(path) => profile::load_profile(&path)
            .with_context(|| format!("Failed to load profile {}", path.display())),
        None => Ok(profile::sample_profile()),
    }
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    // Track if we need high frame rate for animations. Checked at the
    // END of each iteration to set the NEXT iteration's poll rate.
    // Starts true: the typewriter is on screen at startup.
    let mut needs_fast_update = true;

    loop {
        let now = Instant::now();
        app.update_animations(now);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: page + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            app.viewport_height = main_layout[0].height;

            PortfolioWidget::render(frame, main_layout[0], app, now);
            StatusBarWidget::render(frame, main_layout[1], app);

            if app.mode == Mode::Help {
                HelpWidget::render(frame, app);
            }
        })?;

        // Handle events (faster poll rate while animations run)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Resize(_, _) => {
                    // The page is rebuilt from scratch on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except the 'g' prefix itself
    if action != Action::PendingG {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.navigator.scroll_down(),
        Action::ScrollUp => app.navigator.scroll_up(),
        Action::ScrollHalfPageDown => app.navigator.scroll_half_page_down(app.viewport_height),
        Action::ScrollHalfPageUp => app.navigator.scroll_half_page_up(app.viewport_height),
        Action::ScrollPageDown => app.navigator.scroll_full_page_down(app.viewport_height),
        Action::ScrollPageUp => app.navigator.scroll_full_page_up(app.viewport_height),
        Action::JumpToTop => app.navigator.scroll_to_top(),
        Action::JumpToBottom => app.navigator.scroll_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => app.navigator.next_section(),
        Action::PrevSection => app.navigator.prev_section(),
        Action::GoToSection(section) => {
            if app.navigator.scroll_to_section(section.id()) {
                app.set_status(format!("→ {}", section.title()));
            }
        }
        Action::OpenGithub => {
            let url = app.profile.contact.github.clone();
            open_link(app, url, "GitHub");
        }
        Action::OpenLinkedin => {
            let url = app.profile.contact.linkedin.clone();
            open_link(app, url, "LinkedIn");
        }
        Action::OpenMail => {
            let url = app.profile.contact.mailto();
            open_link(app, url, "email");
        }
        Action::OpenPaper => {
            let url = app.profile.contact.paper.clone();
            open_link(app, url, "paper");
        }
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}

/// Open a link in the system handler, reporting the outcome in the status bar
fn open_link(app: &mut App, url: Option<String>, label: &str) {
    match url {
        Some(url) => {
            if let Err(e) = open::that(&url) {
                app.set_status(format!("Failed to open {}: {}", label, e));
            } else {
                app.set_status(format!("Opening {}", truncate_str(&url, 50)));
            }
        }
        None => {
            app.set_status(format!("No {} link in this profile", label));
        }
    }
}
