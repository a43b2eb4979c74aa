//! Grid widget
//!
//! A table of optional string cells under a pinned header row. The data pane
//! scrolls in both directions; the header follows the horizontal offset only.

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, Rect, Size, VAlign};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    BACKGROUND_COLOR, DEFAULT_FONT_SIZE, FRAME_COLOR, FRAME_WIDTH, GRID_COLUMN_WIDTH, GRID_DATA_ROW_HEIGHT,
    GRID_HEADER_COLOR, GRID_HEADER_ROW_HEIGHT, GRID_LINE_COLOR, SELECTION_COLOR, TEXT_COLOR, TEXT_PADDING,
};
use crate::engine::{paint_grid, GridGeometry, GridHit, ScrollBound, ScrollLimits, Viewport};
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Configuration for the grid widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub column_width: f32,
    pub data_row_height: f32,
    pub header_row_height: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub background_color: Color,
    pub header_color: Color,
    pub line_color: Color,
    pub frame_color: Color,
    pub selection_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_width: GRID_COLUMN_WIDTH,
            data_row_height: GRID_DATA_ROW_HEIGHT,
            header_row_height: GRID_HEADER_ROW_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            text_color: TEXT_COLOR,
            background_color: BACKGROUND_COLOR,
            header_color: GRID_HEADER_COLOR,
            line_color: GRID_LINE_COLOR,
            frame_color: FRAME_COLOR,
            selection_color: SELECTION_COLOR,
        }
    }
}

/// A scrollable table with a header row
pub struct Grid<M> {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    config: GridConfig,
    size: Size,
    viewport: Viewport,
    selected: Option<(usize, usize)>,
    on_cell_tap: Callback<(usize, usize), M>,
    on_header_tap: Callback<usize, M>,
}

impl<M> Grid<M> {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            config: GridConfig::default(),
            size: Size::new(300.0, 150.0),
            viewport: Viewport::new(),
            selected: None,
            on_cell_tap: Callback::none(),
            on_header_tap: Callback::none(),
        }
    }

    callback_setter!(on_cell_tap, (usize, usize));
    callback_setter!(on_header_tap, usize);
    builder_field!(config, GridConfig);
    builder_field!(column_width, config.column_width, f32);

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.resize(Size::new(width, height));
        self
    }

    /// Builder form of [`Grid::set_rows`].
    pub fn with_rows(mut self, rows: Vec<Vec<Option<String>>>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replace the data rows. Missing cells are painted empty.
    pub fn set_rows(&mut self, rows: Vec<Vec<Option<String>>>) {
        self.rows = rows;
        if self
            .selected
            .is_some_and(|(row, col)| row >= self.row_count() || col >= self.column_count())
        {
            self.selected = None;
        }
        self.reclamp();
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest of the header row and every data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        (self.viewport.offset_x, self.viewport.offset_y)
    }

    fn limits(&self) -> ScrollLimits {
        let max_x = ScrollBound::LastItemAtOrigin {
            count: self.column_count(),
            extent: self.config.column_width,
        }
        .max_offset();
        let max_y = ScrollBound::LastItemAtOrigin {
            count: self.row_count(),
            extent: self.config.data_row_height,
        }
        .max_offset();
        ScrollLimits::new(max_x, max_y)
    }

    fn reclamp(&mut self) {
        self.viewport = self.viewport.reclamp(self.limits()).viewport;
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            bounds: Rect::from_size(self.size),
            header_height: self.config.header_row_height,
            column_width: self.config.column_width,
            row_height: self.config.data_row_height,
            offset_x: self.viewport.offset_x,
            offset_y: self.viewport.offset_y,
            rows: self.row_count(),
            cols: self.column_count(),
        }
    }
}

impl<M> Paintable for Grid<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.reclamp();
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let geometry = self.geometry();
        let bounds = geometry.bounds;
        let config = &self.config;
        let font = FontSpec::new(config.font_size).with_color(config.text_color);
        let header_font = font.bold();
        let headers = &self.headers;
        let selected_row = self.selected.map(|(row, _)| row);

        paint_grid(
            canvas,
            &geometry,
            |canvas| {
                canvas.fill_rect(bounds, config.background_color);
                canvas.stroke_rect(bounds, config.frame_color, FRAME_WIDTH);
            },
            |canvas, col, slot| {
                canvas.fill_rect(slot, config.header_color);
                canvas.stroke_rect(slot, config.line_color, FRAME_WIDTH);
                if let Some(title) = headers.get(col) {
                    canvas.draw_string(title, slot, HAlign::Center, VAlign::Center, &header_font);
                }
            },
            |canvas, row, col, slot| {
                if selected_row == Some(row) {
                    canvas.fill_rect(slot, config.selection_color);
                }
                canvas.stroke_rect(slot, config.line_color, FRAME_WIDTH);
                let Some(text) = self.rows[row].get(col).and_then(Option::as_deref) else {
                    return;
                };
                let text_rect = Rect::new(slot.x + TEXT_PADDING, slot.y, slot.width - TEXT_PADDING, slot.height);
                canvas.draw_string(text, text_rect, HAlign::Left, VAlign::Center, &font);
            },
        );
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for Grid<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } => match self.geometry().hit(position) {
                Some(GridHit::Header(col)) => {
                    log::debug!("Grid: header {} tapped", col);
                    EventResult::from_parts(false, self.on_header_tap.call(col))
                }
                Some(GridHit::Cell { row, col }) => {
                    self.selected = Some((row, col));
                    log::debug!("Grid: cell ({}, {}) selected", row, col);
                    EventResult::from_parts(true, self.on_cell_tap.call((row, col)))
                }
                None => EventResult::None,
            },
            Gesture::Pan {
                phase,
                total_x,
                total_y,
            } => {
                let update = self.viewport.apply_pan(phase, total_x, total_y, self.limits());
                self.viewport = update.viewport;
                EventResult::from_parts(update.repaint, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PanPhase;
    use ccl_canvas::{DrawCommand, Point, RecordingCanvas};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Header(usize),
        Cell(usize, usize),
    }

    fn cells(rows: usize, cols: usize) -> Vec<Vec<Option<String>>> {
        (0..rows)
            .map(|r| (0..cols).map(|c| Some(format!("r{}c{}", r, c))).collect())
            .collect()
    }

    fn sample() -> Grid<Msg> {
        Grid::new(["A", "B", "C"])
            .with_size(300.0, 150.0)
            .with_rows(cells(5, 3))
            .on_cell_tap(|(r, c)| Msg::Cell(r, c))
            .on_header_tap(Msg::Header)
    }

    #[test]
    fn test_tap_cell() {
        let mut grid = sample();
        let result = grid.on_gesture(&Gesture::tap(150.0, 80.0));
        assert_eq!(result, EventResult::RedrawWithMessage(Msg::Cell(1, 1)));
        assert_eq!(grid.selected(), Some((1, 1)));
    }

    #[test]
    fn test_tap_header_does_not_select() {
        let mut grid = sample();
        assert_eq!(grid.on_gesture(&Gesture::tap(250.0, 10.0)), EventResult::Message(Msg::Header(2)));
        assert_eq!(grid.selected(), None);
    }

    #[test]
    fn test_tap_outside_bounds() {
        let mut grid = sample();
        assert_eq!(grid.on_gesture(&Gesture::tap(350.0, 80.0)), EventResult::None);
    }

    #[test]
    fn test_pan_both_axes_clamped() {
        let mut grid = Grid::<Msg>::new(["A", "B", "C", "D", "E"])
            .with_size(300.0, 150.0)
            .with_rows(cells(20, 5));
        let _ = grid.on_gesture(&Gesture::pan(PanPhase::Started, 0.0, 0.0));
        let result = grid.on_gesture(&Gesture::pan(PanPhase::Running, 1000.0, 1000.0));
        assert!(result.needs_redraw());
        assert_eq!(grid.scroll_offset(), (400.0, 475.0));
    }

    #[test]
    fn test_tap_after_scroll() {
        let mut grid = Grid::new(["A", "B", "C", "D", "E"])
            .with_size(300.0, 150.0)
            .with_rows(cells(20, 5))
            .on_cell_tap(|(r, c)| Msg::Cell(r, c))
            .on_header_tap(Msg::Header);
        let _ = grid.on_gesture(&Gesture::pan(PanPhase::Running, 100.0, 50.0));
        assert_eq!(grid.on_gesture(&Gesture::tap(150.0, 80.0)).into_message(), Some(Msg::Cell(3, 2)));
        assert_eq!(grid.on_gesture(&Gesture::tap(150.0, 10.0)).into_message(), Some(Msg::Header(2)));
    }

    #[test]
    fn test_hit_matches_paint_for_every_pixel_after_pans() {
        let mut grid = Grid::<Msg>::new(["A", "B", "C", "D", "E"])
            .with_size(300.0, 150.0)
            .with_rows(cells(20, 5));
        let mut checked = 0;
        for (dx, dy) in [(37.0, 58.0), (63.5, 13.25), (1000.0, 1000.0), (-450.0, -200.0)] {
            let _ = grid.on_gesture(&Gesture::pan(PanPhase::Started, 0.0, 0.0));
            let _ = grid.on_gesture(&Gesture::pan(PanPhase::Running, dx, dy));
            let _ = grid.on_gesture(&Gesture::pan(PanPhase::Completed, dx, dy));
            assert_ne!(grid.scroll_offset(), (0.0, 0.0));

            let geometry = grid.geometry();
            let mut headers = Vec::new();
            let mut slots = Vec::new();
            paint_grid(
                &mut RecordingCanvas::new(),
                &geometry,
                |_| {},
                |_, col, rect| headers.push((col, rect)),
                |_, row, col, rect| slots.push((row, col, rect)),
            );

            // Cells are clipped to the data pane, headers stay in their own pane
            let header_pane = geometry.header_pane();
            let data_pane = geometry.data_pane();
            for y in 0..150 {
                for x in 0..300 {
                    let point = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                    let painted = if header_pane.contains(point) {
                        headers
                            .iter()
                            .find(|(_, r)| r.contains(point))
                            .map(|(col, _)| GridHit::Header(*col))
                    } else if data_pane.contains(point) {
                        slots
                            .iter()
                            .find(|(_, _, r)| r.contains(point))
                            .map(|(row, col, _)| GridHit::Cell { row: *row, col: *col })
                    } else {
                        None
                    };
                    if let Some(painted) = painted {
                        assert_eq!(
                            geometry.hit(point),
                            Some(painted),
                            "offset {:?} point {:?}",
                            grid.scroll_offset(),
                            point
                        );
                        checked += 1;
                    }
                }
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_ragged_rows_skip_missing_cells() {
        let rows = vec![
            vec![Some("a".to_string()), None, Some("c".to_string())],
            vec![Some("d".to_string())],
        ];
        let mut grid: Grid<Msg> = Grid::new(["A", "B"]).with_size(300.0, 150.0).with_rows(rows);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(1, 0), Some("d"));

        let mut canvas = RecordingCanvas::new();
        let _ = grid.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["A", "B", "a", "c", "d"]);
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut grid = sample();
        let _ = grid.on_gesture(&Gesture::tap(150.0, 80.0));
        let mut canvas = RecordingCanvas::new();
        let _ = grid.paint(&mut canvas);
        let highlighted = canvas
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { color, .. } if *color == SELECTION_COLOR))
            .count();
        // Every visible column of row 1
        assert_eq!(highlighted, 3);
    }

    #[test]
    fn test_header_pinned_when_scrolled_vertically() {
        let mut grid = Grid::<Msg>::new(["A", "B", "C"])
            .with_size(300.0, 150.0)
            .with_rows(cells(20, 3));
        let _ = grid.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 120.0));
        let mut canvas = RecordingCanvas::new();
        let _ = grid.paint(&mut canvas);
        assert_eq!(canvas.text_rect("A").map(|r| r.y), Some(0.0));
        // First visible row is 4, drawn 20px above the data pane top
        assert_eq!(canvas.text_rect("r4c0").map(|r| r.y), Some(30.0));
    }

    #[test]
    fn test_shrinking_rows_drops_selection() {
        let mut grid = sample();
        let _ = grid.on_gesture(&Gesture::tap(150.0, 130.0));
        assert_eq!(grid.selected(), Some((3, 1)));
        grid.set_rows(cells(2, 3));
        assert_eq!(grid.selected(), None);
    }
}
