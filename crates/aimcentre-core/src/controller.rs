//! Single owner of the catalog view state.
//!
//! Every change goes through a discrete event (`select_category`,
//! `select_sub_category`, `tick`, `pause`, `resume`, `scroll_by`, ...), so a
//! view adapter only renders what the controller exposes.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::carousel::{
    CarouselEngine, EngineState, PauseReason, ScrollBuffer, ScrollDirection, Tick,
};
use crate::catalog::{resolve_category, CatalogItem, Category, Locale, SubCategory};
use crate::config::{AppConfig, CarouselConfig};

/// Callbacks for actions whose handling lives outside the catalog
/// (payment dialog, wishlist persistence). Both default to doing nothing.
pub trait CatalogHooks {
    /// A course was chosen for enrollment
    fn on_enroll(&mut self, _item: &CatalogItem) {}

    /// A course was added to (`true`) or removed from the wishlist
    fn on_wishlist(&mut self, _name: &str, _wishlisted: bool) {}
}

/// Hooks that ignore every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl CatalogHooks for NoopHooks {}

/// Course names marked by the user
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    names: BTreeSet<String>,
}

impl Wishlist {
    /// Flip membership and return whether the name is now wishlisted
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Catalog selection, derived items and carousel state
#[derive(Debug, Clone)]
pub struct CatalogController {
    locale: Locale,
    /// Raw identifier of the selected category, kept even if unknown
    category_id: String,
    category: Option<Category>,
    sub_category: Option<SubCategory>,
    items: Vec<CatalogItem>,
    buffer: ScrollBuffer,
    engine: CarouselEngine,
    wishlist: Wishlist,
    /// Item whose enrollment dialog is open
    enrolling: Option<CatalogItem>,
}

impl CatalogController {
    /// Build from application config, selecting the configured default category
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.carousel.clone(),
            config.general.locale,
            &config.general.default_category,
        )
    }

    pub fn new(carousel: CarouselConfig, locale: Locale, category_id: &str) -> Self {
        let mut controller = Self {
            locale,
            category_id: category_id.to_string(),
            category: Category::from_id(category_id),
            sub_category: None,
            items: Vec::new(),
            buffer: ScrollBuffer::default(),
            engine: CarouselEngine::new(carousel),
            wishlist: Wishlist::default(),
            enrolling: None,
        };
        controller.refresh();
        controller
    }

    /// Recompute items and buffer from the current selection
    fn refresh(&mut self) {
        self.items = match self.category {
            Some(category) => resolve_category(category, self.sub_category),
            None => Vec::new(),
        };
        self.buffer = ScrollBuffer::from_items(&self.items);
        self.engine.load(self.buffer.copy_len());
        debug!(
            category = %self.category_id,
            sub_category = ?self.sub_category.map(|s| s.id()),
            items = self.items.len(),
            "Catalog resolved"
        );
    }

    /// Select a top-level category. Always clears the sub-category.
    pub fn select_category(&mut self, category_id: &str) {
        if self.category_id == category_id && self.sub_category.is_none() {
            return;
        }
        info!(category = category_id, "Category selected");
        self.category_id = category_id.to_string();
        self.category = Category::from_id(category_id);
        self.sub_category = None;
        self.refresh();
    }

    /// Select a sub-category of the active category.
    ///
    /// Returns `false` (and changes nothing) when the identifier does not
    /// belong to the active category.
    pub fn select_sub_category(&mut self, sub_category_id: &str) -> bool {
        let parsed = self
            .category
            .and_then(|c| SubCategory::parse(sub_category_id).filter(|s| s.belongs_to(c)));
        let Some(sub_category) = parsed else {
            debug!(
                category = %self.category_id,
                sub_category = sub_category_id,
                "Ignoring sub-category outside the active category"
            );
            return false;
        };
        if self.sub_category != Some(sub_category) {
            self.sub_category = Some(sub_category);
            self.refresh();
        }
        true
    }

    /// Return to the category overview
    pub fn clear_sub_category(&mut self) {
        if self.sub_category.take().is_some() {
            self.refresh();
        }
    }

    /// Step to the next (`forward`) or previous category, wrapping around
    pub fn cycle_category(&mut self, forward: bool) {
        let all = Category::ALL;
        let next = match self.category.and_then(|c| all.iter().position(|x| *x == c)) {
            Some(i) if forward => all[(i + 1) % all.len()],
            Some(i) => all[(i + all.len() - 1) % all.len()],
            None => all[0],
        };
        self.select_category(next.id());
    }

    /// Step through the sub-categories of the active category, wrapping around
    pub fn cycle_sub_category(&mut self, forward: bool) {
        let Some(category) = self.category else {
            return;
        };
        let subs = category.sub_categories();
        if subs.is_empty() {
            return;
        }
        let current = self
            .sub_category
            .and_then(|s| subs.iter().position(|x| *x == s));
        let next = match current {
            Some(i) if forward => subs[(i + 1) % subs.len()],
            Some(i) => subs[(i + subs.len() - 1) % subs.len()],
            None if forward => subs[0],
            None => subs[subs.len() - 1],
        };
        self.select_sub_category(&next.id());
    }

    /// Change the label language. Items and offset are unaffected.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn sub_category(&self) -> Option<SubCategory> {
        self.sub_category
    }

    /// The resolved item list
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn offset(&self) -> f64 {
        self.engine.offset()
    }

    pub fn tick(&mut self, tick: Tick) -> f64 {
        self.engine.tick(tick)
    }

    pub fn pause(&mut self, reason: PauseReason) {
        self.engine.pause(reason);
    }

    pub fn resume(&mut self, reason: PauseReason) {
        self.engine.resume(reason);
    }

    pub fn scroll_by(&mut self, direction: ScrollDirection) {
        self.engine.scroll_by(direction);
    }

    pub fn drag_by(&mut self, delta_px: f64) {
        self.engine.drag_by(delta_px);
    }

    pub fn set_track_width(&mut self, total_width: f64) {
        self.engine.set_track_width(total_width);
    }

    /// Viewport was resized: the old offset may reference a stale width
    pub fn on_resize(&mut self) {
        self.engine.reset_offset();
    }

    /// Width of the whole track when every card has the configured pitch
    pub fn uniform_track_width(&self) -> f64 {
        self.buffer.len() as f64 * self.engine.config().card_pitch()
    }

    /// Index within one copy of the card at the left edge of the track
    pub fn focused_index(&self) -> Option<usize> {
        self.engine.leading_index(self.engine.config().card_pitch())
    }

    pub fn focused_item(&self) -> Option<&CatalogItem> {
        self.focused_index().and_then(|i| self.items.get(i))
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn is_wishlisted(&self, item: &CatalogItem) -> bool {
        self.wishlist.contains(&item.name)
    }

    /// Toggle the wishlist entry for the card at `visual_index`.
    ///
    /// Returns the new membership, or `None` if there is no card there.
    pub fn toggle_wishlist(
        &mut self,
        visual_index: usize,
        hooks: &mut impl CatalogHooks,
    ) -> Option<bool> {
        let name = self.buffer.item_at(visual_index)?.name.clone();
        let wishlisted = self.wishlist.toggle(&name);
        hooks.on_wishlist(&name, wishlisted);
        Some(wishlisted)
    }

    /// Open enrollment for the card at `visual_index`; pauses the carousel
    /// until [`close_enrollment`](Self::close_enrollment).
    pub fn enroll(
        &mut self,
        visual_index: usize,
        hooks: &mut impl CatalogHooks,
    ) -> Option<&CatalogItem> {
        let item = self.buffer.item_at(visual_index)?.clone();
        info!(course = %item.name, "Enrollment opened");
        self.engine.pause(PauseReason::Modal);
        hooks.on_enroll(&item);
        self.enrolling = Some(item);
        self.enrolling.as_ref()
    }

    /// Item whose enrollment dialog is open
    pub fn enrolling(&self) -> Option<&CatalogItem> {
        self.enrolling.as_ref()
    }

    pub fn close_enrollment(&mut self) {
        if self.enrolling.take().is_some() {
            self.engine.resume(PauseReason::Modal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(category: &str) -> CatalogController {
        CatalogController::new(CarouselConfig::default(), Locale::En, category)
    }

    /// Measure the track the way a view would and run `frames` frames
    fn run(c: &mut CatalogController, frames: usize) {
        let width = c.uniform_track_width();
        c.set_track_width(width);
        for _ in 0..frames {
            c.tick(Tick::Frame);
        }
    }

    #[derive(Default)]
    struct Recorder {
        enrolled: Vec<String>,
        wishlisted: Vec<(String, bool)>,
    }

    impl CatalogHooks for Recorder {
        fn on_enroll(&mut self, item: &CatalogItem) {
            self.enrolled.push(item.name.clone());
        }

        fn on_wishlist(&mut self, name: &str, wishlisted: bool) {
            self.wishlisted.push((name.to_string(), wishlisted));
        }
    }

    #[test]
    fn test_default_selection_from_config() {
        let c = CatalogController::from_config(&AppConfig::default());
        assert_eq!(c.category(), Some(Category::EnglishVersion));
        assert_eq!(c.sub_category(), None);
        assert_eq!(c.items().len(), 15);
        assert_eq!(c.buffer().len(), 45);
        assert_eq!(c.state(), EngineState::AutoScrolling);
    }

    #[test]
    fn test_ielts_then_special_needs_scenario() {
        let mut c = controller("IELTS");
        assert_eq!(c.items().len(), 5);
        assert_eq!(c.buffer().len(), 15);
        assert_eq!(c.offset(), 0.0);

        // one copy is 5 * 374 = 1870px; run past it
        let copy_width = 5.0 * 374.0;
        let frames = (copy_width / 0.8) as usize + 10;
        run(&mut c, frames);
        let expected = (frames as f64 * 0.8) % copy_width;
        assert!((c.offset() - expected).abs() < 1e-6);
        assert!(c.offset() < copy_width);

        c.select_category("Special Needs");
        assert!(c.select_sub_category("Autism Level 1"));
        assert_eq!(c.items().len(), 3);
        assert_eq!(c.buffer().len(), 9);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn test_category_switch_clears_sub_category_and_offset() {
        let mut c = controller("English Medium");
        assert!(c.select_sub_category("Class 7"));
        assert_eq!(c.items().len(), 6);
        run(&mut c, 200);
        assert!(c.offset() > 0.0);

        c.select_category("Bangla Medium");
        assert_eq!(c.sub_category(), None);
        assert_eq!(c.items(), resolve_category(Category::BanglaMedium, None).as_slice());
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let mut c = controller("Tiny Explorers");
        run(&mut c, 50);
        let offset = c.offset();
        let items = c.items().to_vec();
        c.select_category("Tiny Explorers");
        assert_eq!(c.items(), items.as_slice());
        assert_eq!(c.offset(), offset);
    }

    #[test]
    fn test_foreign_sub_category_is_ignored() {
        let mut c = controller("IELTS");
        let before = c.items().to_vec();
        assert!(!c.select_sub_category("Class 2"));
        assert_eq!(c.sub_category(), None);
        assert_eq!(c.items(), before.as_slice());

        let mut c = controller("Special Needs");
        assert!(!c.select_sub_category("Class 2"));
        assert_eq!(c.items().len(), 9);
    }

    #[test]
    fn test_unknown_category_goes_idle() {
        let mut c = controller("IELTS");
        run(&mut c, 10);
        c.select_category("Robotics");
        assert!(c.items().is_empty());
        assert!(c.buffer().is_empty());
        assert_eq!(c.state(), EngineState::Idle);
        run(&mut c, 10);
        assert_eq!(c.offset(), 0.0);
        assert!(!c.offset().is_nan());

        c.select_category("IELTS");
        assert_eq!(c.state(), EngineState::AutoScrolling);
    }

    #[test]
    fn test_clear_sub_category_restores_overview() {
        let mut c = controller("Special Needs");
        c.select_sub_category("Autism Level 3");
        assert_eq!(c.items().len(), 3);
        c.clear_sub_category();
        assert_eq!(c.items().len(), 9);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut c = controller("Spoken English");
        c.cycle_category(true);
        assert_eq!(c.category(), Some(Category::EnglishMedium));
        c.cycle_category(false);
        assert_eq!(c.category(), Some(Category::SpokenEnglish));

        let mut c = controller("nope");
        c.cycle_category(true);
        assert_eq!(c.category(), Some(Category::EnglishMedium));
    }

    #[test]
    fn test_cycle_sub_category() {
        let mut c = controller("Special Needs");
        c.cycle_sub_category(false);
        assert_eq!(c.sub_category(), Some(SubCategory::AutismLevel(3)));
        c.cycle_sub_category(true);
        assert_eq!(c.sub_category(), Some(SubCategory::AutismLevel(1)));

        let mut c = controller("IELTS");
        c.cycle_sub_category(true);
        assert_eq!(c.sub_category(), None);
    }

    #[test]
    fn test_locale_does_not_change_items() {
        let mut c = controller("English Version");
        let items = c.items().to_vec();
        c.set_locale(Locale::Bn);
        assert_eq!(c.locale(), Locale::Bn);
        assert_eq!(c.items(), items.as_slice());
    }

    #[test]
    fn test_enroll_pauses_until_closed() {
        let mut c = controller("IELTS");
        let mut hooks = Recorder::default();
        run(&mut c, 5);

        let name = c.enroll(6, &mut hooks).map(|i| i.name.clone());
        assert_eq!(name.as_deref(), Some("Comprehensive"));
        assert_eq!(hooks.enrolled, vec!["Comprehensive"]);
        assert_eq!(c.state(), EngineState::Paused);

        // leaving the track must not resume while the dialog is open
        c.pause(PauseReason::Hover);
        c.resume(PauseReason::Hover);
        assert_eq!(c.state(), EngineState::Paused);

        c.close_enrollment();
        assert!(c.enrolling().is_none());
        assert_eq!(c.state(), EngineState::AutoScrolling);
    }

    #[test]
    fn test_enroll_out_of_range_is_none() {
        let mut c = controller("Robotics");
        assert!(c.enroll(0, &mut NoopHooks).is_none());
        assert!(!c.engine().is_paused());
    }

    #[test]
    fn test_wishlist_toggle_covers_every_copy() {
        let mut c = controller("Spoken English");
        let mut hooks = Recorder::default();

        assert_eq!(c.toggle_wishlist(1, &mut hooks), Some(true));
        let copy = c.buffer().get(6).cloned();
        assert!(copy.map(|i| c.is_wishlisted(&i)).unwrap_or(false));

        assert_eq!(c.toggle_wishlist(11, &mut hooks), Some(false));
        assert!(c.wishlist().is_empty());
        assert_eq!(
            hooks.wishlisted,
            vec![
                ("Business Pro".to_string(), true),
                ("Business Pro".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_focused_item_follows_offset() {
        let mut c = controller("IELTS");
        run(&mut c, 0);
        assert_eq!(c.focused_item().map(|i| i.name.as_str()), Some("Express Prep"));
        c.drag_by(374.0 * 2.0 + 10.0);
        assert_eq!(c.focused_item().map(|i| i.name.as_str()), Some("Weekend Batch"));
    }

    #[test]
    fn test_resize_resets_offset() {
        let mut c = controller("IELTS");
        run(&mut c, 100);
        c.on_resize();
        assert_eq!(c.offset(), 0.0);
    }
}
