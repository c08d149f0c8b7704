//! Page-level UI state shared between the showcase and the listings.
//!
//! The carousel index and the selected tab live side by side in one [`PortfolioState`]
//! so that the tab can change while the carousel keeps rotating. Components get it
//! from context.

use leptos::prelude::*;

use crate::carousel::{Autoplay, CarouselState, Scheduler};
use crate::tab::Tab;

#[derive(Debug, Clone, Copy)]
pub struct PortfolioState {
    carousel: RwSignal<CarouselState>,
    tab: RwSignal<Tab>,
}

impl PortfolioState {
    pub fn new(project_count: usize) -> Self {
        Self {
            carousel: RwSignal::new(CarouselState::new(project_count)),
            tab: RwSignal::new(Tab::default()),
        }
    }

    pub fn carousel(&self) -> ReadSignal<CarouselState> {
        self.carousel.read_only()
    }

    pub fn active_index(&self) -> usize {
        self.carousel.with(CarouselState::active_index)
    }

    pub fn advance(&self) {
        self.carousel.update(CarouselState::advance);
    }

    pub fn active_tab(&self) -> Tab {
        self.tab.get()
    }

    pub fn select_tab(&self, tab: Tab) {
        self.tab.set(tab);
    }

    /// Starts rotating the carousel. Returns `Ok(None)` when there is nothing to rotate.
    pub fn start_autoplay<S: Scheduler>(
        &self,
        scheduler: &S,
    ) -> Result<Option<Autoplay<S::Task>>, S::Error> {
        if self.carousel.with_untracked(CarouselState::is_empty) {
            return Ok(None);
        }
        let carousel = self.carousel;
        Autoplay::start(scheduler, move || carousel.update(CarouselState::advance)).map(Some)
    }
}

/// An `<img>` that finished loading with no pixels failed to load. This also catches
/// images whose `error` event fired before the page was hydrated.
pub fn image_load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{testing::VirtualScheduler, ROTATE_INTERVAL};

    #[test]
    fn test_switching_tabs_keeps_carousel_rotating() {
        Owner::new().with(|| {
            let scheduler = VirtualScheduler::default();
            let state = PortfolioState::new(3);
            let _autoplay = state.start_autoplay(&scheduler).unwrap();

            scheduler.advance(ROTATE_INTERVAL);
            assert_eq!(state.active_index(), 1);

            state.select_tab(Tab::Blog);
            assert_eq!(state.active_tab(), Tab::Blog);
            assert_eq!(state.active_index(), 1);

            scheduler.advance(ROTATE_INTERVAL);
            assert_eq!(state.active_index(), 2);
            assert_eq!(state.active_tab(), Tab::Blog);

            state.select_tab(Tab::Projects);
            scheduler.advance(ROTATE_INTERVAL);
            assert_eq!(state.active_index(), 0);
        });
    }

    #[test]
    fn test_no_autoplay_for_empty_list() {
        Owner::new().with(|| {
            let scheduler = VirtualScheduler::default();
            let state = PortfolioState::new(0);
            assert!(state.start_autoplay(&scheduler).unwrap().is_none());
            assert_eq!(scheduler.active_timers(), 0);
            state.advance();
            assert_eq!(state.active_index(), 0);
        });
    }

    #[test]
    fn test_dropped_autoplay_stops_state() {
        Owner::new().with(|| {
            let scheduler = VirtualScheduler::default();
            let state = PortfolioState::new(2);
            drop(state.start_autoplay(&scheduler).unwrap());
            scheduler.advance(ROTATE_INTERVAL * 3);
            assert_eq!(state.active_index(), 0);
        });
    }

    #[test]
    fn test_image_load_failed() {
        assert!(image_load_failed(true, 0));
        assert!(!image_load_failed(true, 96));
        // still loading: the error event will decide
        assert!(!image_load_failed(false, 0));
    }
}
