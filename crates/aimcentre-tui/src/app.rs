use std::sync::Arc;
use std::time::Duration;

use aimcentre_core::{
    AppConfig, CatalogController, CatalogHooks, CatalogItem, EngineState, PauseReason,
    ScrollDirection, Tick,
};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Enrollment dialog open for the controller's `enrolling()` item
    Enroll,
    Help,
}

/// Routes catalog callbacks into the status line
struct StatusHooks<'a> {
    status: &'a mut Option<String>,
}

impl CatalogHooks for StatusHooks<'_> {
    fn on_enroll(&mut self, item: &CatalogItem) {
        *self.status = Some(format!("Enroll in {}?", item.name));
    }

    fn on_wishlist(&mut self, name: &str, wishlisted: bool) {
        *self.status = Some(if wishlisted {
            format!("Added {} to wishlist", name)
        } else {
            format!("Removed {} from wishlist", name)
        });
    }
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub controller: CatalogController,
    pub keymap: Keymap,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Screen area of the carousel track, known after the first draw
    pub track_area: Option<Rect>,
    /// Column where the current pointer drag was last seen
    drag_anchor: Option<u16>,
    /// Whether the pointer moved since the button went down
    dragged: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            controller: CatalogController::from_config(&config),
            keymap: Keymap::from_config(&config.keymap),
            theme: load_theme(&config.ui.theme),
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            track_area: None,
            drag_anchor: None,
            dragged: false,
            config,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Track pixels represented by one terminal column
    pub fn px_per_column(&self) -> f64 {
        self.config.carousel.card_width_px / f64::from(self.config.ui.card_columns.max(1))
    }

    /// Whether frames should be produced at the animation rate
    pub fn is_animating(&self) -> bool {
        matches!(
            self.controller.state(),
            EngineState::AutoScrolling | EngineState::ManualScrolling
        )
    }

    /// Record where the track was drawn and report its width to the engine.
    ///
    /// Called on every draw, since selecting a category drops the measured
    /// width. A change of width counts as a resize.
    pub fn set_track_area(&mut self, area: Rect) {
        if let Some(previous) = self.track_area {
            if previous.width != area.width {
                debug!(from = previous.width, to = area.width, "Track resized");
                self.controller.on_resize();
            }
        }
        self.track_area = Some(area);
        let width = self.controller.uniform_track_width();
        self.controller.set_track_width(width);
    }

    /// Advance the carousel by wall-clock time since the previous call
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.controller.tick(Tick::Elapsed(elapsed));
    }

    pub fn on_resize(&mut self) {
        self.controller.on_resize();
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextCategory | Action::PrevCategory => {
                self.controller.cycle_category(action == Action::NextCategory);
                self.announce_selection();
            }
            Action::NextSubCategory | Action::PrevSubCategory => {
                self.controller.cycle_sub_category(action == Action::NextSubCategory);
                self.announce_selection();
            }
            Action::ClearSubCategory => {
                self.controller.clear_sub_category();
                self.announce_selection();
            }
            Action::PageLeft => self.controller.scroll_by(ScrollDirection::Left),
            Action::PageRight => self.controller.scroll_by(ScrollDirection::Right),
            Action::TogglePause => self.toggle_pause(),
            Action::Enroll => {
                if let Some(index) = self.controller.focused_index() {
                    self.open_enrollment(index);
                }
            }
            Action::ToggleWishlist => {
                if let Some(index) = self.controller.focused_index() {
                    let mut hooks = StatusHooks {
                        status: &mut self.status_message,
                    };
                    self.controller.toggle_wishlist(index, &mut hooks);
                }
            }
            Action::ToggleLocale => {
                let locale = self.controller.locale().toggled();
                self.controller.set_locale(locale);
                self.announce_selection();
            }
            Action::Help => {
                self.mode = Mode::Help;
                self.controller.pause(PauseReason::Modal);
            }
            Action::ExitMode | Action::Cancel => self.exit_mode(),
            Action::Confirm => {
                if let Some(item) = self.controller.enrolling() {
                    self.status_message =
                        Some(format!("Enrollment request sent for {}", item.name));
                }
                self.controller.close_enrollment();
                self.mode = Mode::Normal;
            }
            Action::None => {}
        }
    }

    fn exit_mode(&mut self) {
        match self.mode {
            Mode::Help => self.controller.resume(PauseReason::Modal),
            Mode::Enroll => self.controller.close_enrollment(),
            Mode::Normal => self.clear_status(),
        }
        self.mode = Mode::Normal;
    }

    fn toggle_pause(&mut self) {
        if self.controller.engine().is_held(PauseReason::User) {
            self.controller.resume(PauseReason::User);
            self.set_status("Resumed");
        } else {
            self.controller.pause(PauseReason::User);
            self.set_status("Paused");
        }
    }

    fn open_enrollment(&mut self, visual_index: usize) {
        let mut hooks = StatusHooks {
            status: &mut self.status_message,
        };
        if self.controller.enroll(visual_index, &mut hooks).is_some() {
            self.mode = Mode::Enroll;
        }
    }

    fn announce_selection(&mut self) {
        let locale = self.controller.locale();
        let category = match self.controller.category() {
            Some(category) => category.label(locale).to_string(),
            None => self.controller.category_id().to_string(),
        };
        let message = match self.controller.sub_category() {
            Some(sub) => format!("{} / {}", category, sub.label(locale)),
            None => category,
        };
        self.set_status(message);
    }

    /// Visual index of the card under a terminal column, if the column is
    /// over a card rather than a gap or outside the track
    pub fn card_at_column(&self, column: u16) -> Option<usize> {
        let area = self.track_area?;
        if column < area.x || column >= area.x + area.width || self.controller.buffer().is_empty() {
            return None;
        }
        let carousel = &self.config.carousel;
        let pitch = carousel.card_pitch();
        if pitch <= 0.0 {
            return None;
        }
        let px = self.controller.offset() + f64::from(column - area.x) * self.px_per_column();
        let within = px.rem_euclid(pitch);
        (within < carousel.card_width_px).then(|| (px / pitch).floor() as usize)
    }

    /// Pointer input: hovering the track pauses it, dragging moves it,
    /// clicking a card opens enrollment and the wheel pages.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.mode != Mode::Normal {
            return;
        }
        let inside = self
            .track_area
            .is_some_and(|area| area.contains(Position::new(event.column, event.row)));

        match event.kind {
            MouseEventKind::Moved => {
                if inside {
                    self.controller.pause(PauseReason::Hover);
                } else {
                    self.controller.resume(PauseReason::Hover);
                }
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.controller.pause(PauseReason::Touch);
                self.drag_anchor = Some(event.column);
                self.dragged = false;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(anchor) = self.drag_anchor {
                    let delta_columns = f64::from(anchor) - f64::from(event.column);
                    if delta_columns != 0.0 {
                        self.controller.drag_by(delta_columns * self.px_per_column());
                        self.drag_anchor = Some(event.column);
                        self.dragged = true;
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_anchor.take().is_some() {
                    self.controller.resume(PauseReason::Touch);
                    if !self.dragged {
                        if let Some(index) = self.card_at_column(event.column) {
                            self.open_enrollment(index);
                        }
                    }
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight if inside => {
                self.controller.scroll_by(ScrollDirection::Right);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft if inside => {
                self.controller.scroll_by(ScrollDirection::Left);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimcentre_core::config::CarouselConfig;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.general.default_category = "IELTS".to_string();
        // 10 px per column: 35-column cards with a 2-column gap
        config.carousel = CarouselConfig {
            card_width_px: 350.0,
            card_gap_px: 20.0,
            ..CarouselConfig::default()
        };
        config.ui.card_columns = 35;
        let mut app = App::new(Arc::new(config));
        app.set_track_area(Rect::new(0, 5, 80, 12));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_measured_track_starts_scrolling() {
        let mut app = app();
        assert_eq!(app.controller.state(), EngineState::AutoScrolling);
        assert_eq!(app.controller.engine().copy_width(), Some(1850.0));
        assert!(app.is_animating());
        app.on_tick(Duration::from_secs(1));
        // 60 frames at 0.8 px
        assert!((app.controller.offset() - 48.0).abs() < 1e-6);
    }

    #[test]
    fn test_hover_pauses_and_leaving_resumes() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Moved, 10, 8));
        assert_eq!(app.controller.state(), EngineState::Paused);
        assert!(!app.is_animating());

        app.handle_mouse(mouse(MouseEventKind::Moved, 10, 30));
        assert_eq!(app.controller.state(), EngineState::AutoScrolling);
    }

    #[test]
    fn test_drag_moves_track_while_held() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 8));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 8));
        assert!((app.controller.offset() - 100.0).abs() < 1e-6);
        assert_eq!(app.controller.state(), EngineState::Paused);

        app.on_tick(Duration::from_millis(500));
        assert!((app.controller.offset() - 100.0).abs() < 1e-6);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 8));
        assert_eq!(app.controller.state(), EngineState::AutoScrolling);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_click_on_card_opens_enrollment() {
        let mut app = app();
        // Second card spans columns 37..72
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 8));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 8));
        assert_eq!(app.mode, Mode::Enroll);
        assert_eq!(
            app.controller.enrolling().map(|i| i.name.as_str()),
            Some("Comprehensive")
        );
        assert_eq!(app.controller.state(), EngineState::Paused);
    }

    #[test]
    fn test_card_at_column_skips_gaps() {
        let app = app();
        assert_eq!(app.card_at_column(0), Some(0));
        assert_eq!(app.card_at_column(34), Some(0));
        assert_eq!(app.card_at_column(35), None);
        assert_eq!(app.card_at_column(37), Some(1));
        assert_eq!(app.card_at_column(200), None);
    }

    #[test]
    fn test_enroll_confirm_resumes() {
        let mut app = app();
        app.handle_action(Action::Enroll);
        assert_eq!(app.mode, Mode::Enroll);
        assert_eq!(app.controller.state(), EngineState::Paused);

        app.handle_action(Action::Confirm);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.controller.enrolling().is_none());
        assert_eq!(app.controller.state(), EngineState::AutoScrolling);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Enrollment request sent for Express Prep")
        );
    }

    #[test]
    fn test_user_pause_survives_hover_leave() {
        let mut app = app();
        app.handle_action(Action::TogglePause);
        app.handle_mouse(mouse(MouseEventKind::Moved, 10, 8));
        app.handle_mouse(mouse(MouseEventKind::Moved, 10, 30));
        assert_eq!(app.controller.state(), EngineState::Paused);

        app.handle_action(Action::TogglePause);
        assert_eq!(app.controller.state(), EngineState::AutoScrolling);
    }

    #[test]
    fn test_help_pauses_until_closed() {
        let mut app = app();
        app.handle_action(Action::Help);
        assert_eq!(app.mode, Mode::Help);
        assert_eq!(app.controller.state(), EngineState::Paused);
        app.handle_action(Action::ExitMode);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.controller.state(), EngineState::AutoScrolling);
    }

    #[test]
    fn test_wishlist_action_reports_status() {
        let mut app = app();
        app.handle_action(Action::ToggleWishlist);
        assert_eq!(app.controller.wishlist().len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Added Express Prep to wishlist")
        );
        app.handle_action(Action::ToggleWishlist);
        assert!(app.controller.wishlist().is_empty());
    }

    #[test]
    fn test_category_change_is_remeasured_on_draw() {
        let mut app = app();
        app.handle_action(Action::NextCategory);
        assert_eq!(app.controller.category_id(), "Spoken English");
        assert!(app.controller.engine().copy_width().is_none());

        app.set_track_area(Rect::new(0, 5, 80, 12));
        assert_eq!(app.controller.engine().copy_width(), Some(1850.0));
        assert_eq!(app.status_message.as_deref(), Some("Spoken English"));
    }

    #[test]
    fn test_width_change_resets_offset() {
        let mut app = app();
        app.on_tick(Duration::from_secs(1));
        assert!(app.controller.offset() > 0.0);
        app.set_track_area(Rect::new(0, 5, 120, 12));
        assert_eq!(app.controller.offset(), 0.0);
    }
}
