//! Paint dispatch for scrollable content.
//!
//! The dispatcher owns the canvas state bracketing: the frame is drawn
//! first and unclipped, then the scrollable pane is wrapped in
//! save/clip/restore while a per-item callback paints each visible item at
//! its scrolled position.

use std::ops::Range;

use ccl_canvas::{Canvas, Point, Rect};

use super::hit_test::locate;
use super::visible_range::{visible_cells, visible_range, VisibleCells};

/// A pane of uniformly sized rows scrolled vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    /// Pane rectangle in widget coordinates
    pub pane: Rect,
    /// Row height
    pub extent: f32,
    /// Vertical scroll offset
    pub offset: f64,
    pub count: usize,
}

impl Strip {
    pub fn new(pane: Rect, extent: f32, offset: f64, count: usize) -> Self {
        Self {
            pane,
            extent,
            offset,
            count,
        }
    }

    pub fn visible(&self) -> Range<usize> {
        visible_range(self.offset, self.extent, self.pane.height, self.count)
    }

    /// Where item `index` is painted: `pane.y + index * extent - offset`.
    pub fn slot(&self, index: usize) -> Rect {
        Rect::new(
            self.pane.x,
            self.pane.y + pane_relative(index, self.extent, self.offset),
            self.pane.width,
            self.extent,
        )
    }

    /// Item under `point`, which must lie inside the pane.
    pub fn locate(&self, point: Point) -> Option<usize> {
        if !self.pane.contains(point) {
            return None;
        }
        locate(point.y - self.pane.y, self.offset, self.extent, self.count)
    }
}

/// `index * extent - offset`, computed wide and narrowed once it is small.
fn pane_relative(index: usize, extent: f32, offset: f64) -> f32 {
    (index as f64 * f64::from(extent) - offset) as f32
}

/// Paint a frame and then every visible row of `strip`.
///
/// Returns the range that was painted.
pub fn paint_list(
    canvas: &mut dyn Canvas,
    strip: &Strip,
    draw_frame: impl FnOnce(&mut dyn Canvas),
    mut draw_item: impl FnMut(&mut dyn Canvas, usize, Rect),
) -> Range<usize> {
    draw_frame(canvas);

    let range = strip.visible();
    if range.is_empty() {
        return range;
    }

    canvas.save_state();
    canvas.clip_rect(strip.pane);
    for index in range.clone() {
        draw_item(canvas, index, strip.slot(index));
    }
    canvas.restore_state();

    log::trace!("paint_list: rows {:?} of {} at offset {}", range, strip.count, strip.offset);
    range
}

/// What a grid tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    Header(usize),
    Cell { row: usize, col: usize },
}

/// Geometry of a grid with a pinned header row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub bounds: Rect,
    pub header_height: f32,
    pub column_width: f32,
    pub row_height: f32,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rows: usize,
    pub cols: usize,
}

impl GridGeometry {
    pub fn header_pane(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.header_height.min(self.bounds.height),
        )
    }

    /// Everything below the header.
    pub fn data_pane(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.header_height,
            self.bounds.width,
            (self.bounds.height - self.header_height).max(0.0),
        )
    }

    pub fn visible(&self) -> VisibleCells {
        visible_cells(
            (self.offset_x, self.offset_y),
            (self.column_width, self.row_height),
            (self.bounds.width, self.data_pane().height),
            self.rows,
            self.cols,
        )
    }

    /// Header cells scroll horizontally only.
    pub fn header_slot(&self, col: usize) -> Rect {
        Rect::new(
            self.bounds.x + pane_relative(col, self.column_width, self.offset_x),
            self.bounds.y,
            self.column_width,
            self.header_height,
        )
    }

    pub fn cell_slot(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.bounds.x + pane_relative(col, self.column_width, self.offset_x),
            self.bounds.y + self.header_height + pane_relative(row, self.row_height, self.offset_y),
            self.column_width,
            self.row_height,
        )
    }

    pub fn hit(&self, point: Point) -> Option<GridHit> {
        if !self.bounds.contains(point) {
            return None;
        }
        let x = point.x - self.bounds.x;
        let col = locate(x, self.offset_x, self.column_width, self.cols)?;

        if self.header_pane().contains(point) {
            return Some(GridHit::Header(col));
        }
        let y = point.y - self.bounds.y - self.header_height;
        let row = locate(y, self.offset_y, self.row_height, self.rows)?;
        Some(GridHit::Cell { row, col })
    }
}

/// Paint a grid: frame, pinned header bracket, then the clipped data pane.
pub fn paint_grid(
    canvas: &mut dyn Canvas,
    grid: &GridGeometry,
    draw_frame: impl FnOnce(&mut dyn Canvas),
    mut draw_header: impl FnMut(&mut dyn Canvas, usize, Rect),
    mut draw_cell: impl FnMut(&mut dyn Canvas, usize, usize, Rect),
) -> VisibleCells {
    draw_frame(canvas);

    let visible = grid.visible();
    if visible.cols.is_empty() {
        return visible;
    }

    canvas.save_state();
    for col in visible.cols.clone() {
        draw_header(canvas, col, grid.header_slot(col));
    }
    canvas.restore_state();

    if !visible.rows.is_empty() {
        canvas.save_state();
        canvas.clip_rect(grid.data_pane());
        for (row, col) in visible.iter() {
            draw_cell(canvas, row, col, grid.cell_slot(row, col));
        }
        canvas.restore_state();
    }

    log::trace!("paint_grid: rows {:?} cols {:?}", visible.rows, visible.cols);
    visible
}
