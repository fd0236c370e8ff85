use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tracing::info;

use aimcentre_core::AppConfig;
use aimcentre_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{CarouselWidget, CategoryBarWidget, HeaderWidget, PopupWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.carousel.frame_rate);
    let mut app = App::new(config);
    info!(category = app.controller.category_id(), "Starting carousel");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("AIM Centre 360"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        // Advance the carousel by the real time since the last frame
        let now = Instant::now();
        app.on_tick(now.duration_since(last_frame));
        last_frame = now;

        terminal.draw(|frame| render(frame, app))?;

        if let Some(event) = event_handler.next(app.is_animating())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(_, _) => app.on_resize(),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), size);

    let card_height = CarouselWidget::card_height(app.config.ui.card_features);
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(CategoryBarWidget::HEIGHT), // Categories
            Constraint::Length(1),                        // Spacer
            Constraint::Length(card_height),              // Track
            Constraint::Min(0),                           // Filler
            Constraint::Length(1),                        // Status bar
        ])
        .split(size);

    let header = inset(main_layout[0]);
    let categories = inset(main_layout[1]);
    let track = main_layout[3];

    // Track width is reported every frame; category changes drop it
    app.set_track_area(track);

    HeaderWidget::render(frame, header, app);
    CategoryBarWidget::render(frame, categories, app);
    CarouselWidget::render(frame, track, app);
    StatusBarWidget::render(frame, main_layout[5], app);

    match app.mode {
        Mode::Enroll => {
            if let Some(item) = app.controller.enrolling() {
                PopupWidget::render_enroll(frame, item, app.controller.locale(), &app.theme);
            }
        }
        Mode::Help => PopupWidget::render_help(frame, &app.keymap, &app.theme),
        Mode::Normal => {}
    }
}

/// Horizontal padding for the text rows above the track
fn inset(area: Rect) -> Rect {
    let pad = 2.min(area.width / 2);
    Rect::new(area.x + pad, area.y, area.width - 2 * pad, area.height)
}
