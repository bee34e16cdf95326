use crate::Price;
use std::collections::VecDeque;

/// Fixed-size window over the most recent prices with a running sum.
#[derive(Clone, Debug)]
pub(crate) struct PriceWindow {
    size: usize,
    window: VecDeque<Price>,
    /// Maintained incrementally via add/subtract. May accumulate FP rounding
    /// drift over very long runs, negligible for chart-sized histories.
    sum: Price,
}

impl PriceWindow {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            window: VecDeque::with_capacity(size),
            sum: 0.0,
        }
    }

    #[inline]
    pub fn add(&mut self, price: Price) {
        if self.is_ready()
            && let Some(evicted) = self.window.pop_front()
        {
            self.sum -= evicted;
        }

        self.window.push_back(price);
        self.sum += price;
    }

    /// Sum of the window, or `None` until it holds `size` prices.
    #[inline]
    pub fn sum(&self) -> Option<Price> {
        self.is_ready().then_some(self.sum)
    }

    #[inline]
    fn is_ready(&self) -> bool {
        self.window.len() == self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod filling {
        use super::*;

        #[test]
        fn sum_is_none_when_empty() {
            let w = PriceWindow::new(3);
            assert_eq!(w.sum(), None);
        }

        #[test]
        fn sum_is_none_until_window_full() {
            let mut w = PriceWindow::new(3);
            w.add(10.0);
            assert_eq!(w.sum(), None);
            w.add(20.0);
            assert_eq!(w.sum(), None);
        }

        #[test]
        fn sum_returns_value_when_full() {
            let mut w = PriceWindow::new(2);
            w.add(10.0);
            w.add(20.0);
            assert_eq!(w.sum(), Some(30.0));
        }
    }

    mod sliding {
        use super::*;

        #[test]
        fn oldest_value_drops_on_advance() {
            let mut w = PriceWindow::new(2);
            w.add(10.0);
            w.add(20.0);
            w.add(30.0);
            // 10 dropped, 20 + 30 = 50
            assert_eq!(w.sum(), Some(50.0));
        }

        #[test]
        fn size_one_tracks_latest() {
            let mut w = PriceWindow::new(1);
            w.add(4.0);
            w.add(7.0);
            assert_eq!(w.sum(), Some(7.0));
        }
    }
}
