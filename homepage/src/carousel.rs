//! Autoplay carousel state.
//!
//! The browser script drives the real carousel; this type is the reference
//! behaviour it follows and supplies the initial slide for server rendering.

use std::time::{Duration, Instant};

/// Autoplay timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Delay between automatic advances
    pub autoplay: Duration,
    /// Pause after the last user interaction
    pub resume_after: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: Duration::from_millis(4000),
            resume_after: Duration::from_millis(4000),
        }
    }
}

/// Position and pause state of one carousel.
#[derive(Clone, Debug)]
pub struct CarouselState {
    len: usize,
    index: usize,
    hovered: bool,
    last_interaction: Option<Instant>,
    last_advance: Option<Instant>,
    settings: CarouselSettings,
}

impl CarouselState {
    pub fn new(len: usize, settings: CarouselSettings) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
            last_interaction: None,
            last_advance: None,
            settings,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn settings(&self) -> CarouselSettings {
        self.settings
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Record a drag, click or keyboard interaction.
    pub fn interact(&mut self, now: Instant) {
        self.last_interaction = Some(now);
    }

    /// Autoplay is paused while hovered or shortly after an interaction.
    pub fn is_paused(&self, now: Instant) -> bool {
        self.hovered
            || self
                .last_interaction
                .is_some_and(|at| now.saturating_duration_since(at) < self.settings.resume_after)
    }

    /// User navigation to the next slide, looping at the end.
    pub fn next(&mut self, now: Instant) {
        self.interact(now);
        self.step_forward();
    }

    /// User navigation to the previous slide, looping at the start.
    pub fn prev(&mut self, now: Instant) {
        self.interact(now);
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide (dot navigation). Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        self.interact(now);
        if index < self.len {
            self.index = index;
        }
    }

    /// Autoplay clock. Returns `true` when the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len < 2 {
            return false;
        }
        if self.is_paused(now) {
            self.last_advance = Some(now);
            return false;
        }
        let Some(previous) = self.last_advance else {
            self.last_advance = Some(now);
            return false;
        };
        if now.saturating_duration_since(previous) < self.settings.autoplay {
            return false;
        }
        self.step_forward();
        self.last_advance = Some(now);
        true
    }

    /// Re-initialise after the slide collection changed size.
    pub fn resize(&mut self, len: usize) {
        if len == self.len {
            return;
        }
        self.len = len;
        self.index = if len == 0 { 0 } else { self.index.min(len - 1) };
        self.last_advance = None;
    }

    fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CarouselSettings {
        CarouselSettings {
            autoplay: Duration::from_secs(3),
            resume_after: Duration::from_secs(5),
        }
    }

    #[test]
    fn autoplay_advances_and_loops() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(3, settings());

        assert!(!carousel.tick(start));
        assert!(!carousel.tick(start + Duration::from_secs(1)));
        assert!(carousel.tick(start + Duration::from_secs(3)));
        assert!(carousel.tick(start + Duration::from_secs(6)));
        assert!(carousel.tick(start + Duration::from_secs(9)));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(3, settings());
        carousel.tick(start);

        carousel.set_hovered(true);
        assert!(carousel.is_paused(start));
        assert!(!carousel.tick(start + Duration::from_secs(10)));
        assert_eq!(carousel.index(), 0);

        carousel.set_hovered(false);
        assert!(!carousel.tick(start + Duration::from_secs(11)));
        assert!(carousel.tick(start + Duration::from_secs(14)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn interaction_pauses_until_resume_window_passes() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(4, settings());
        carousel.tick(start);

        carousel.next(start + Duration::from_secs(1));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_paused(start + Duration::from_secs(5)));
        assert!(!carousel.tick(start + Duration::from_secs(5)));
        assert!(!carousel.is_paused(start + Duration::from_secs(6)));
        assert!(carousel.tick(start + Duration::from_secs(8)));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn manual_navigation_wraps() {
        let now = Instant::now();
        let mut carousel = CarouselState::new(3, settings());
        carousel.prev(now);
        assert_eq!(carousel.index(), 2);
        carousel.next(now);
        assert_eq!(carousel.index(), 0);
        carousel.go_to(7, now);
        assert_eq!(carousel.index(), 0);
        carousel.go_to(2, now);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn resize_clamps_and_tolerates_empty() {
        let now = Instant::now();
        let mut carousel = CarouselState::new(5, settings());
        carousel.go_to(4, now);

        carousel.resize(2);
        assert_eq!(carousel.index(), 1);

        carousel.resize(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), 0);
        carousel.next(now);
        carousel.prev(now);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.tick(now + Duration::from_secs(60)));
    }

    #[test]
    fn single_slide_never_advances() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(1, settings());
        assert!(!carousel.tick(start));
        assert!(!carousel.tick(start + Duration::from_secs(30)));
    }
}
