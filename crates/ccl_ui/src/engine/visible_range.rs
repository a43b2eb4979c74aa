//! Which items intersect the viewport.

use std::ops::Range;

/// Contiguous range of items of size `extent` visible through a pane of
/// size `viewport` scrolled by `offset`.
///
/// Starts at `clamp(floor(offset / extent), 0, count - 1)` and extends while
/// `i * extent - offset < viewport`. Empty when there is nothing to show.
pub fn visible_range(offset: f64, extent: f32, viewport: f32, count: usize) -> Range<usize> {
    if count == 0 || !(extent > 0.0) || !(viewport > 0.0) {
        return 0..0;
    }
    let (extent, viewport) = (f64::from(extent), f64::from(viewport));

    let first = (offset / extent).floor();
    let first = if first.is_nan() || first <= 0.0 {
        0
    } else {
        (first as usize).min(count - 1)
    };

    let mut end = first;
    while end < count && end as f64 * extent - offset < viewport {
        end += 1;
    }
    first..end
}

/// Visible rows and columns of a 2D grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCells {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl VisibleCells {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Row-major iteration over every visible cell.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .clone()
            .flat_map(move |r| self.cols.clone().map(move |c| (r, c)))
    }
}

/// The 1D calculation composed once per axis.
pub fn visible_cells(
    offset: (f64, f64),
    extent: (f32, f32),
    viewport: (f32, f32),
    rows: usize,
    cols: usize,
) -> VisibleCells {
    VisibleCells {
        rows: visible_range(offset.1, extent.1, viewport.1, rows),
        cols: visible_range(offset.0, extent.0, viewport.0, cols),
    }
}
