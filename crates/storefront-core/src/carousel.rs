//! Carousel State
//!
//! Wrap-around slide index shared by the testimonials and steps carousels.

/// Index of the active slide among `len` slides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.current == index
    }

    /// Advance one slide, wrapping to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping to the last
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indexes are ignored
    pub fn show(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn test_show_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.show(3);
        assert_eq!(carousel.current(), 3);
        carousel.show(4);
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.show(0);
        assert_eq!(carousel.current(), 0);
        assert!(!carousel.is_active(0));
    }
}
