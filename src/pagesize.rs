//! Pre-defined ISO A-series page sizes.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape.
//!
//! # Example
//!
//! ```
//! use qr_card::pagesize::{A6, PageOrientation};
//!
//! // greeting cards are printed on A6, turned on its side
//! let (width, height) = A6.landscape();
//! assert!(width > height);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a6_landscape_swaps_sides() {
        let (w, h) = A6.landscape();
        assert_eq!(w, A6.1);
        assert_eq!(h, A6.0);
        assert!((*w - 419.53).abs() < 0.01);
        assert!((*h - 297.64).abs() < 0.01);
    }

    #[test]
    fn orientation_is_idempotent() {
        assert_eq!(A5.portrait(), A5);
        assert_eq!(A4.landscape().landscape(), A4.landscape());
        assert_eq!(A4.landscape().portrait(), A4);
    }
}
