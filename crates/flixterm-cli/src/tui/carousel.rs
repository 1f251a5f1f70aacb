//! Windowed carousel controller.
//!
//! A carousel shows a window of `W` tiles out of a longer item list and
//! advances one full window at a time, wrapping around at either end.
//! While a slide animation is in flight the controller rejects further
//! advances; the guard is released by [`Carousel::finish_transition`]
//! when the animation completes.

/// Direction of a window advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance toward higher window indices.
    Forward,
    /// Advance toward lower window indices.
    Backward,
}

/// Result of an advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The window moved and a slide is now in flight.
    Moved {
        /// Window index before the move.
        from: usize,
        /// Window index after the move.
        to: usize,
        /// Direction the window moved in.
        direction: Direction,
    },
    /// Fewer than two windows exist, so there is nowhere to go.
    NoOp,
    /// A previous slide has not finished yet.
    Rejected,
}

/// Window position and transition guard for one item list.
///
/// The leading exclusion skips items at the head of the list that are
/// rendered elsewhere (the banner) and must never appear in a window.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    window_index: usize,
    lead_exclusion: usize,
    transitioning: bool,
}

impl Carousel {
    /// Creates a carousel at window 0 with the given leading exclusion.
    #[must_use]
    pub const fn new(lead_exclusion: usize) -> Self {
        Self {
            window_index: 0,
            lead_exclusion,
            transitioning: false,
        }
    }

    /// Returns the current window index.
    #[must_use]
    pub const fn window_index(&self) -> usize {
        self.window_index
    }

    /// Returns the number of items skipped at the head of the list.
    #[must_use]
    pub const fn lead_exclusion(&self) -> usize {
        self.lead_exclusion
    }

    /// Returns `true` while a slide is in flight.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Returns the highest reachable window index, or `None` when the
    /// usable items do not fill even one window.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub const fn max_index(&self, item_count: usize, window: usize) -> Option<usize> {
        if window == 0 {
            return None;
        }
        let usable = item_count.saturating_sub(self.lead_exclusion);
        (usable / window).checked_sub(1)
    }

    /// Requests a one-window advance.
    ///
    /// Wraps past either end instead of clamping. Returns [`Advance::NoOp`]
    /// when only one window (or none) exists, leaving the guard released,
    /// and [`Advance::Rejected`] while a slide is already in flight.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn advance(
        &mut self,
        item_count: usize,
        window: usize,
        direction: Direction,
    ) -> Advance {
        if self.transitioning {
            return Advance::Rejected;
        }
        let Some(max_index) = self.max_index(item_count, window) else {
            return Advance::NoOp;
        };
        if max_index == 0 {
            return Advance::NoOp;
        }
        let from = self.window_index;
        let to = match direction {
            Direction::Forward => {
                if from == max_index {
                    0
                } else {
                    from + 1
                }
            }
            Direction::Backward => {
                if from == 0 {
                    max_index
                } else {
                    from - 1
                }
            }
        };
        self.window_index = to;
        self.transitioning = true;
        Advance::Moved {
            from,
            to,
            direction,
        }
    }

    /// Releases the transition guard once the slide animation completes.
    pub const fn finish_transition(&mut self) {
        self.transitioning = false;
    }

    /// Returns the `[start, end)` item range of the current window,
    /// clipped to the list length.
    #[must_use]
    pub fn visible_range(&self, item_count: usize, window: usize) -> (usize, usize) {
        let start = self
            .lead_exclusion
            .saturating_add(self.window_index.saturating_mul(window))
            .min(item_count);
        let end = start.saturating_add(window).min(item_count);
        (start, end)
    }

    /// Returns the items of the current window. A final window shorter
    /// than `window` is returned as-is; an out-of-range window is empty.
    #[must_use]
    pub fn visible_slice<'a, T>(&self, items: &'a [T], window: usize) -> &'a [T] {
        let (start, end) = self.visible_range(items.len(), window);
        items.get(start..end).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_max_index() {
        // Arrange
        let plain = Carousel::new(0);
        let banner_fed = Carousel::new(1);

        // Act & Assert
        assert_eq!(banner_fed.max_index(13, 6), Some(1));
        assert_eq!(plain.max_index(12, 6), Some(1));
        assert_eq!(plain.max_index(6, 6), Some(0));
        assert_eq!(plain.max_index(5, 6), None);
        assert_eq!(plain.max_index(0, 6), None);
        assert_eq!(plain.max_index(13, 0), None);
        assert_eq!(Carousel::new(20).max_index(13, 6), None);
    }

    #[test]
    fn test_advance_forward_moves_window() {
        // Arrange: 13 items with 1 excluded leaves 12 usable, two windows of 6
        let mut carousel = Carousel::new(1);

        // Act
        let outcome = carousel.advance(13, 6, Direction::Forward);

        // Assert
        assert_eq!(
            outcome,
            Advance::Moved {
                from: 0,
                to: 1,
                direction: Direction::Forward,
            }
        );
        assert_eq!(carousel.window_index(), 1);
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn test_advance_forward_wraps_to_zero() {
        // Arrange
        let mut carousel = Carousel::new(1);
        carousel.advance(13, 6, Direction::Forward);
        carousel.finish_transition();

        // Act: at max index, forward wraps around
        let outcome = carousel.advance(13, 6, Direction::Forward);

        // Assert
        assert_eq!(
            outcome,
            Advance::Moved {
                from: 1,
                to: 0,
                direction: Direction::Forward,
            }
        );
        assert_eq!(carousel.window_index(), 0);
    }

    #[test]
    fn test_advance_backward_wraps_to_max() {
        // Arrange
        let mut carousel = Carousel::new(1);

        // Act: at window 0, backward wraps to the max index
        let outcome = carousel.advance(13, 6, Direction::Backward);

        // Assert
        assert_eq!(
            outcome,
            Advance::Moved {
                from: 0,
                to: 1,
                direction: Direction::Backward,
            }
        );
        assert_eq!(carousel.window_index(), 1);
    }

    #[test]
    fn test_advance_backward_steps_down() {
        // Arrange
        let mut carousel = Carousel::new(0);
        carousel.advance(18, 6, Direction::Forward);
        carousel.finish_transition();
        assert_eq!(carousel.window_index(), 1);

        // Act
        let outcome = carousel.advance(18, 6, Direction::Backward);

        // Assert
        assert_eq!(
            outcome,
            Advance::Moved {
                from: 1,
                to: 0,
                direction: Direction::Backward,
            }
        );
    }

    #[test]
    fn test_single_item_is_noop() {
        // Arrange
        let mut carousel = Carousel::new(0);

        // Act & Assert: nothing to advance to, guard stays released
        assert_eq!(carousel.advance(1, 6, Direction::Forward), Advance::NoOp);
        assert_eq!(carousel.advance(1, 6, Direction::Backward), Advance::NoOp);
        assert_eq!(carousel.window_index(), 0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_single_window_is_noop() {
        // Arrange: exactly one full window
        let mut carousel = Carousel::new(0);

        // Act & Assert
        assert_eq!(carousel.advance(6, 6, Direction::Forward), Advance::NoOp);
        assert_eq!(carousel.window_index(), 0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_rejects_while_transitioning() {
        // Arrange
        let mut carousel = Carousel::new(1);
        carousel.advance(13, 6, Direction::Forward);

        // Act: a second advance before the slide completes
        let outcome = carousel.advance(13, 6, Direction::Forward);

        // Assert: rejected without moving
        assert_eq!(outcome, Advance::Rejected);
        assert_eq!(carousel.window_index(), 1);

        // Act: completion releases the guard for the next advance
        carousel.finish_transition();
        let outcome = carousel.advance(13, 6, Direction::Forward);
        assert!(matches!(outcome, Advance::Moved { .. }));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        // Arrange: 20 items, no exclusion, windows of 6 -> max index 2
        let mut carousel = Carousel::new(0);
        let max = carousel.max_index(20, 6).unwrap();
        assert_eq!(max, 2);

        // Act: advance forward through every window and once more
        for _ in 0..=max {
            assert!(matches!(
                carousel.advance(20, 6, Direction::Forward),
                Advance::Moved { .. }
            ));
            carousel.finish_transition();
        }

        // Assert
        assert_eq!(carousel.window_index(), 0);
    }

    #[test]
    fn test_visible_slice_skips_lead_exclusion() {
        // Arrange
        let items: Vec<u32> = (0..13).collect();
        let carousel = Carousel::new(1);

        // Act
        let slice = carousel.visible_slice(&items, 6);

        // Assert: window 0 starts after the excluded banner item
        assert_eq!(slice, &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_visible_slice_second_window() {
        // Arrange
        let items: Vec<u32> = (0..13).collect();
        let mut carousel = Carousel::new(1);
        carousel.advance(items.len(), 6, Direction::Forward);

        // Act
        let slice = carousel.visible_slice(&items, 6);

        // Assert
        assert_eq!(slice, &[7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_visible_slice_clips_when_items_shrink() {
        // Arrange: index advanced while the list was longer
        let mut carousel = Carousel::new(1);
        carousel.advance(13, 6, Direction::Forward);
        let items: Vec<u32> = (0..8).collect();

        // Act
        let slice = carousel.visible_slice(&items, 6);

        // Assert: clipped partial window, no panic
        assert_eq!(slice, &[7]);
    }

    #[test]
    fn test_visible_slice_empty_when_out_of_range() {
        // Arrange
        let items: Vec<u32> = (0..3).collect();
        let carousel = Carousel::new(5);

        // Act
        let slice = carousel.visible_slice(&items, 6);

        // Assert
        assert!(slice.is_empty());
    }
}
