//! Course catalog: categories, sub-categories and the resolver that maps a
//! selection to an ordered list of displayable items.

mod data;
pub mod models;
pub mod resolver;

pub use models::{CatalogItem, Category, Locale, Price, PricePeriod, SubCategory};
pub use resolver::{resolve, resolve_category};
