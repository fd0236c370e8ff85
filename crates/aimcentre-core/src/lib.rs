pub mod carousel;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;

pub use carousel::{CarouselEngine, EngineState, PauseReason, ScrollBuffer, ScrollDirection, Tick};
pub use catalog::{resolve, resolve_category, CatalogItem, Category, Locale, Price, SubCategory};
pub use config::{AppConfig, CarouselConfig, EasingType};
pub use controller::{CatalogController, CatalogHooks, NoopHooks, Wishlist};
pub use error::{Error, Result};
