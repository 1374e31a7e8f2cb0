use crate::units::Pt;

/// Blank space around the edge of a [`Page`](crate::Page), written to the
/// PDF as the page's `ArtBox`. Nothing stops content from being drawn over it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// The same margin on every side
    pub fn uniform<D: Into<Pt>>(margin: D) -> Margins {
        let m = margin.into();
        Margins {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }

    /// One margin for top and bottom, another for left and right
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let (v, h) = (vertical.into(), horizontal.into());
        Margins {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }
}
