//! Campus slideshow position.

/// Cyclic index over a fixed number of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideShow {
    index: usize,
    len: usize,
}

impl SlideShow {
    /// A show over `len` slides, starting at the first. `len` is clamped to 1.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides in the show.
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn back(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut show = SlideShow::new(4);
        for expected in [1, 2, 3, 0, 1] {
            show.advance();
            assert_eq!(show.index(), expected);
        }
    }

    #[test]
    fn test_back_wraps() {
        let mut show = SlideShow::new(4);
        show.back();
        assert_eq!(show.index(), 3);
        show.back();
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut show = SlideShow::new(4);
        show.select(2);
        assert_eq!(show.index(), 2);
        show.select(4);
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn test_zero_len_clamps() {
        let mut show = SlideShow::new(0);
        show.advance();
        show.back();
        assert_eq!(show.index(), 0);
        assert_eq!(show.count(), 1);
    }
}
