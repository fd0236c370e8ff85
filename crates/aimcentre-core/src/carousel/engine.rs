//! Infinite scroll engine
//!
//! Drives the horizontal offset of a track whose content is the active list
//! repeated three times. The offset always stays inside one copy's width, so
//! subtracting a full copy when it is exceeded shows identical content
//! before and after the reset.

use std::time::Duration;

use tracing::{debug, trace};

use super::buffer::COPIES;
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{frame_duration, lerp, progress, wrap};
use crate::config::CarouselConfig;

/// One step of the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Exactly one display frame
    Frame,
    /// Wall-clock time since the previous tick, converted to frames
    Elapsed(Duration),
}

impl Tick {
    /// Number of frames this tick stands for at the given frame rate
    pub fn frames(&self, frame_rate: u32) -> f64 {
        match self {
            Tick::Frame => 1.0,
            Tick::Elapsed(elapsed) => {
                let rate = if frame_rate == 0 { 60.0 } else { frame_rate as f64 };
                elapsed.as_secs_f64() * rate
            }
        }
    }

    /// Wall-clock time this tick stands for at the given frame rate
    pub fn duration(&self, frame_rate: u32) -> Duration {
        match self {
            Tick::Frame => frame_duration(frame_rate),
            Tick::Elapsed(elapsed) => *elapsed,
        }
    }
}

/// Direction of a manual page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn sign(&self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

/// Why auto-advance is suspended. Each reason is an independent hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseReason {
    /// Pointer is over the track
    Hover,
    /// Track is being touched or dragged
    Touch,
    /// A dependent dialog (enrollment) is open
    Modal,
    /// Explicit pause toggle
    User,
}

impl PauseReason {
    #[inline]
    fn bit(&self) -> u8 {
        match self {
            PauseReason::Hover => 1,
            PauseReason::Touch => 1 << 1,
            PauseReason::Modal => 1 << 2,
            PauseReason::User => 1 << 3,
        }
    }
}

/// Observable engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Buffer is empty, nothing to animate
    Idle,
    /// Advancing at constant velocity
    AutoScrolling,
    /// Auto-advance suspended by at least one hold
    Paused,
    /// A prev/next page transition is in flight
    ManualScrolling,
}

/// In-flight prev/next transition, expressed in unwrapped coordinates
#[derive(Debug, Clone)]
struct PagingAnimation {
    from: f64,
    to: f64,
    position: f64,
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
}

/// Frame-driven controller for the seamless carousel offset
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    config: CarouselConfig,
    /// Items in one copy of the buffer
    copy_len: usize,
    /// Measured width of one copy; `None` until the layout is known
    copy_width: Option<f64>,
    /// Current offset, always in `[0, copy_width)`
    offset: f64,
    /// Active pause holds as a bit set of [`PauseReason`]
    holds: u8,
    paging: Option<PagingAnimation>,
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl CarouselEngine {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            copy_len: 0,
            copy_width: None,
            offset: 0.0,
            holds: 0,
            paging: None,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Re-initialize for a freshly built buffer.
    ///
    /// The previous width no longer applies, so the offset returns to 0 and
    /// the track waits for a new measurement. Pause holds are kept.
    pub fn load(&mut self, copy_len: usize) {
        debug!(copy_len, "Carousel buffer reloaded");
        self.copy_len = copy_len;
        self.copy_width = None;
        self.offset = 0.0;
        self.paging = None;
    }

    /// Report the rendered width of the whole (tripled) track.
    ///
    /// Non-finite or non-positive widths mark the track as unmeasurable.
    pub fn set_track_width(&mut self, total_width: f64) {
        if self.copy_len == 0 || !total_width.is_finite() || total_width <= 0.0 {
            self.copy_width = None;
            return;
        }
        let width = total_width / COPIES as f64;
        self.copy_width = Some(width);
        self.offset = wrap(self.offset, width);
    }

    /// Return to the start of the track, keeping the current measurement
    pub fn reset_offset(&mut self) {
        self.offset = 0.0;
        self.paging = None;
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn copy_width(&self) -> Option<f64> {
        self.copy_width
    }

    #[inline]
    pub fn copy_len(&self) -> usize {
        self.copy_len
    }

    pub fn state(&self) -> EngineState {
        if self.copy_len == 0 {
            EngineState::Idle
        } else if self.paging.is_some() {
            EngineState::ManualScrolling
        } else if self.holds != 0 {
            EngineState::Paused
        } else {
            EngineState::AutoScrolling
        }
    }

    /// Whether any pause hold is active
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.holds != 0
    }

    pub fn is_held(&self, reason: PauseReason) -> bool {
        self.holds & reason.bit() != 0
    }

    pub fn pause(&mut self, reason: PauseReason) {
        self.holds |= reason.bit();
    }

    /// Release one hold; auto-advance resumes once no hold remains
    pub fn resume(&mut self, reason: PauseReason) {
        self.holds &= !reason.bit();
    }

    /// Start an animated page by one step in `direction`.
    ///
    /// A page requested while another is in flight extends it, so rapid
    /// presses accumulate instead of restarting from the current position.
    pub fn scroll_by(&mut self, direction: ScrollDirection) {
        if self.copy_len == 0 {
            return;
        }
        let delta = direction.sign() * self.config.page_step_px;
        if !delta.is_finite() {
            trace!(delta, "Ignoring non-finite page step");
            return;
        }

        if self.config.page_animation_ms == 0 {
            self.shift(delta);
            return;
        }

        let remaining = self
            .paging
            .as_ref()
            .map(|anim| anim.to - anim.position)
            .unwrap_or(0.0);

        self.paging = Some(PagingAnimation {
            from: self.offset,
            to: self.offset + remaining + delta,
            position: self.offset,
            elapsed: Duration::ZERO,
            duration: Duration::from_millis(self.config.page_animation_ms),
            easing: self.config.easing,
        });
    }

    /// Move the track immediately by a dragged distance
    pub fn drag_by(&mut self, delta_px: f64) {
        if self.copy_len == 0 || !delta_px.is_finite() {
            return;
        }
        self.paging = None;
        self.shift(delta_px);
    }

    fn shift(&mut self, delta: f64) {
        match self.copy_width {
            Some(width) if delta.is_finite() => self.offset = wrap(self.offset + delta, width),
            Some(_) => trace!(delta, "Ignoring non-finite shift"),
            None => trace!("Ignoring shift on unmeasured track"),
        }
    }

    /// Advance the engine by one tick and return the new offset
    pub fn tick(&mut self, tick: Tick) -> f64 {
        if self.copy_len == 0 {
            return self.offset;
        }
        let Some(width) = self.copy_width else {
            trace!("Track width not measured yet, skipping frame");
            return self.offset;
        };

        if let Some(anim) = self.paging.as_mut() {
            anim.elapsed += tick.duration(self.config.frame_rate);
            let t = progress(anim.elapsed, anim.duration);
            anim.position = lerp(anim.from, anim.to, anim.easing.apply(t));
            if anim.position.is_finite() {
                self.offset = wrap(anim.position, width);
            }
            if t >= 1.0 || !anim.position.is_finite() {
                self.paging = None;
            }
            return self.offset;
        }

        if self.holds != 0 {
            return self.offset;
        }

        let advance = self.config.velocity_px_per_frame * tick.frames(self.config.frame_rate);
        if advance.is_finite() {
            self.offset = wrap(self.offset + advance, width);
        }
        self.offset
    }

    /// Index within one copy of the card at the leading (left) edge
    pub fn leading_index(&self, card_pitch: f64) -> Option<usize> {
        if self.copy_len == 0 || card_pitch <= 0.0 || !card_pitch.is_finite() {
            return None;
        }
        Some((self.offset / card_pitch).floor() as usize % self.copy_len)
    }
}
