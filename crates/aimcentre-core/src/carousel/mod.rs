//! Seamless infinite carousel
//!
//! - `buffer` - the tripled render sequence and circular indexing
//! - `easing` - easing curves for the prev/next page transition
//! - `timing` - progress, interpolation and wrap helpers
//! - `engine` - the frame-driven state machine owning the offset
//!
//! ```ignore
//! use aimcentre_core::carousel::{CarouselEngine, ScrollBuffer, Tick};
//!
//! let buffer = ScrollBuffer::from_items(&items);
//! let mut engine = CarouselEngine::default();
//! engine.load(buffer.copy_len());
//!
//! // once per frame, after layout
//! engine.set_track_width(measured_width);
//! let offset = engine.tick(Tick::Elapsed(dt));
//! ```

pub mod buffer;
pub mod easing;
pub mod engine;
pub mod timing;

pub use buffer::{ScrollBuffer, COPIES};
pub use easing::{EasingType, EasingTypeExt};
pub use engine::{CarouselEngine, EngineState, PauseReason, ScrollDirection, Tick};
