//! Treeview widget
//!
//! Nested labeled nodes with per-node expand/collapse state. Expanded nodes
//! are flattened into uniform rows, so vertical scrolling and painting reuse
//! the list engine. Taps are resolved through a region table holding one
//! expand/collapse button and one label area per row.

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, ImageData, Point, Rect, Size, VAlign};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    BACKGROUND_COLOR, DEFAULT_FONT_SIZE, FRAME_COLOR, FRAME_WIDTH, TEXT_COLOR, TEXT_PADDING,
    TREE_BUTTON_LABEL_SPACING, TREE_BUTTON_SIZE, TREE_NODE_HEIGHT, TREE_PER_LEVEL_INDENT,
};
use crate::engine::{paint_list, HitRegionTable, ScrollBound, ScrollLimits, Strip, Viewport};
use crate::event::Gesture;
use crate::state::ExpandState;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Child indices from the roots down to a node.
pub type NodePath = Vec<usize>;

/// Configuration for the treeview widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeviewConfig {
    /// Horizontal indent added per nesting level
    pub per_level_indent: f32,
    /// Gap between the expand/collapse button and the label
    pub button_label_spacing: f32,
    pub node_height: f32,
    /// Width and height of the expand/collapse button
    pub button_size: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub background_color: Color,
    pub frame_color: Color,
}

impl Default for TreeviewConfig {
    fn default() -> Self {
        Self {
            per_level_indent: TREE_PER_LEVEL_INDENT,
            button_label_spacing: TREE_BUTTON_LABEL_SPACING,
            node_height: TREE_NODE_HEIGHT,
            button_size: TREE_BUTTON_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            text_color: TEXT_COLOR,
            background_color: BACKGROUND_COLOR,
            frame_color: FRAME_COLOR,
        }
    }
}

/// How expand/collapse buttons are drawn.
#[derive(Debug, Clone, Default)]
pub enum ButtonStyle {
    /// "+" or "−" inside a stroked box
    #[default]
    Glyph,
    /// One image per state
    Image { expanded: ImageData, collapsed: ImageData },
}

/// A node in the tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
    pub state: ExpandState,
    /// Drawn between the button and the label
    pub image: Option<ImageData>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            state: ExpandState::Collapsed,
            image: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn expanded(mut self) -> Self {
        self.state = ExpandState::Expanded;
        self
    }

    pub fn with_image(mut self, image: ImageData) -> Self {
        self.image = Some(image);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A node as laid out in the flattened, scrollable row list.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub path: NodePath,
    pub depth: usize,
    pub has_children: bool,
    pub state: ExpandState,
}

/// Tappable part of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRegion {
    ExpandCollapse(NodePath),
    Label(NodePath),
}

/// Placement of one row's parts for a given scroll position.
struct RowLayout {
    button: Option<Rect>,
    label: Rect,
}

/// A scrollable tree of expandable nodes
pub struct Treeview<M> {
    roots: Vec<TreeNode>,
    config: TreeviewConfig,
    button_style: ButtonStyle,
    size: Size,
    viewport: Viewport,
    /// Widest row measured during the last paint
    content_width: f32,
    on_activate: Callback<NodePath, M>,
    on_toggle: Callback<(NodePath, ExpandState), M>,
}

impl<M> Treeview<M> {
    pub fn new(roots: impl IntoIterator<Item = TreeNode>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            config: TreeviewConfig::default(),
            button_style: ButtonStyle::Glyph,
            size: Size::new(250.0, 200.0),
            viewport: Viewport::new(),
            content_width: 0.0,
            on_activate: Callback::none(),
            on_toggle: Callback::none(),
        }
    }

    callback_setter!(on_activate, NodePath);
    callback_setter!(on_toggle, (NodePath, ExpandState));
    builder_field!(config, TreeviewConfig);

    /// Image buttons take their size from the expanded image.
    pub fn button_style(mut self, style: ButtonStyle) -> Self {
        if let ButtonStyle::Image { expanded, .. } = &style {
            self.config.button_size = expanded.width() as f32;
        }
        self.button_style = style;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.resize(Size::new(width, height));
        self
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn node(&self, path: &[usize]) -> Option<&TreeNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, &i| node.children.get(i))
    }

    fn node_mut(&mut self, path: &[usize]) -> Option<&mut TreeNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get_mut(*first)?, |node, &i| node.children.get_mut(i))
    }

    /// Flip a node's expansion. Returns the new state, or `None` for a
    /// missing path or a leaf.
    pub fn toggle(&mut self, path: &[usize]) -> Option<ExpandState> {
        let node = self.node_mut(path).filter(|n| n.has_children())?;
        node.state = node.state.toggled();
        let state = node.state;
        self.reclamp();
        Some(state)
    }

    /// Rows for every node whose ancestors are all expanded, in display order.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        fn walk(nodes: &[TreeNode], depth: usize, prefix: &mut NodePath, out: &mut Vec<TreeRow>) {
            for (i, node) in nodes.iter().enumerate() {
                prefix.push(i);
                out.push(TreeRow {
                    path: prefix.clone(),
                    depth,
                    has_children: node.has_children(),
                    state: node.state,
                });
                if node.state.is_expanded() {
                    walk(&node.children, depth + 1, prefix, out);
                }
                prefix.pop();
            }
        }

        let mut rows = Vec::new();
        walk(&self.roots, 0, &mut Vec::new(), &mut rows);
        rows
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        (self.viewport.offset_x, self.viewport.offset_y)
    }

    fn limits_for(&self, rows: usize) -> ScrollLimits {
        let max_x = ScrollBound::ContentFit {
            content: self.content_width + self.config.font_size,
            viewport: self.size.width,
        }
        .max_offset();
        let max_y = ScrollBound::LastItemAtOrigin {
            count: rows,
            extent: self.config.node_height,
        }
        .max_offset();
        ScrollLimits::new(max_x, max_y)
    }

    fn limits(&self) -> ScrollLimits {
        self.limits_for(self.visible_rows().len())
    }

    fn reclamp(&mut self) {
        self.viewport = self.viewport.reclamp(self.limits()).viewport;
    }

    fn strip(&self, rows: usize) -> Strip {
        Strip::new(
            Rect::from_size(self.size),
            self.config.node_height,
            self.viewport.offset_y,
            rows,
        )
    }

    /// Left edge of a row's button column at the current horizontal offset.
    fn indent(&self, depth: usize) -> f32 {
        (depth as f64 * f64::from(self.config.per_level_indent) - self.viewport.offset_x) as f32
    }

    fn layout(&self, row: &TreeRow, slot: Rect) -> RowLayout {
        let config = &self.config;
        let x = self.indent(row.depth);
        let button = row.has_children.then(|| {
            Rect::new(
                x,
                slot.y + (config.node_height - config.button_size) / 2.0,
                config.button_size,
                config.button_size,
            )
        });
        let label_x = x + config.button_size + config.button_label_spacing;
        RowLayout {
            button,
            label: Rect::new(label_x, slot.y, self.size.width - label_x, config.node_height),
        }
    }

    /// Hit regions for the rows currently in view.
    pub fn regions(&self) -> HitRegionTable<TreeRegion> {
        let rows = self.visible_rows();
        let strip = self.strip(rows.len());
        let mut table = HitRegionTable::new();
        for index in strip.visible() {
            let row = &rows[index];
            let layout = self.layout(row, strip.slot(index));
            if let Some(button) = layout.button {
                table.push(button, TreeRegion::ExpandCollapse(row.path.clone()));
            }
            table.push(layout.label, TreeRegion::Label(row.path.clone()));
        }
        table
    }

    /// Rightmost extent of any visible row's label, unscrolled.
    fn measure_content(&self, canvas: &mut dyn Canvas, rows: &[TreeRow], font: &FontSpec) -> f32 {
        let config = &self.config;
        rows.iter()
            .filter_map(|row| {
                let node = self.node(&row.path)?;
                let mut width = row.depth as f32 * config.per_level_indent
                    + config.button_size
                    + config.button_label_spacing
                    + canvas.measure_string(&node.label, font).width;
                if node.image.is_some() {
                    width += config.button_size + TEXT_PADDING;
                }
                Some(width)
            })
            .fold(0.0, f32::max)
    }

    fn draw_button(&self, canvas: &mut dyn Canvas, rect: Rect, state: ExpandState, font: &FontSpec) {
        match &self.button_style {
            ButtonStyle::Glyph => {
                canvas.stroke_rect(rect, self.config.frame_color, FRAME_WIDTH);
                let glyph = if state.is_expanded() { "−" } else { "+" };
                canvas.draw_string(glyph, rect, HAlign::Center, VAlign::Center, font);
            }
            ButtonStyle::Image { expanded, collapsed } => {
                let image = if state.is_expanded() { expanded } else { collapsed };
                canvas.draw_image(image, rect);
            }
        }
    }

    fn draw_row(&self, canvas: &mut dyn Canvas, row: &TreeRow, slot: Rect, font: &FontSpec) {
        let Some(node) = self.node(&row.path) else {
            return;
        };
        let layout = self.layout(row, slot);
        if let Some(button) = layout.button {
            self.draw_button(canvas, button, row.state, font);
        }

        let mut text_x = layout.label.x;
        if let Some(image) = &node.image {
            let size = self.config.button_size;
            let rect = Rect::new(text_x, slot.y + (self.config.node_height - size) / 2.0, size, size);
            canvas.draw_image(image, rect);
            text_x += size + TEXT_PADDING;
        }
        let text_rect = Rect::new(text_x, slot.y, (slot.right() - text_x).max(0.0), slot.height);
        canvas.draw_string(&node.label, text_rect, HAlign::Left, VAlign::Center, font);
    }

    fn label_tapped(&self, path: NodePath) -> EventResult<M> {
        log::debug!("Treeview: node {:?} activated", path);
        EventResult::from_parts(false, self.on_activate.call(path))
    }

    fn button_tapped(&mut self, path: NodePath) -> EventResult<M> {
        let Some(state) = self.toggle(&path) else {
            return EventResult::None;
        };
        log::debug!("Treeview: node {:?} now {:?}", path, state);
        EventResult::from_parts(true, self.on_toggle.call((path, state)))
    }
}

impl<M> Paintable for Treeview<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.reclamp();
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let font = FontSpec::new(self.config.font_size).with_color(self.config.text_color);
        let rows = self.visible_rows();

        self.content_width = self.measure_content(canvas, &rows, &font);
        self.viewport = self.viewport.reclamp(self.limits_for(rows.len())).viewport;

        let bounds = self.bounds();
        let strip = self.strip(rows.len());
        let config = &self.config;
        paint_list(
            canvas,
            &strip,
            |canvas| {
                canvas.fill_rect(bounds, config.background_color);
                canvas.stroke_rect(bounds, config.frame_color, FRAME_WIDTH);
            },
            |canvas, index, slot| self.draw_row(canvas, &rows[index], slot, &font),
        );
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for Treeview<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } => self.tap(position),
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

impl<M> Treeview<M> {
    fn tap(&mut self, position: Point) -> EventResult<M> {
        if !self.bounds().contains(position) {
            return EventResult::None;
        }
        let region = self.regions().hit(position).map(|r| r.tag.clone());
        match region {
            Some(TreeRegion::ExpandCollapse(path)) => self.button_tapped(path),
            Some(TreeRegion::Label(path)) => self.label_tapped(path),
            None => EventResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PanPhase;
    use ccl_canvas::{DrawCommand, RecordingCanvas};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Activated(NodePath),
        Toggled(NodePath, ExpandState),
    }

    fn sample() -> Treeview<Msg> {
        Treeview::new([
            TreeNode::new("fruits").with_children([TreeNode::new("apple"), TreeNode::new("pear")]),
            TreeNode::new("vegetables")
                .expanded()
                .with_children([TreeNode::new("carrot"), TreeNode::new("leek")]),
            TreeNode::new("bread"),
        ])
        .with_size(250.0, 200.0)
        .on_activate(Msg::Activated)
        .on_toggle(|(path, state)| Msg::Toggled(path, state))
    }

    fn labels(tree: &Treeview<Msg>) -> Vec<String> {
        tree.visible_rows()
            .iter()
            .filter_map(|row| tree.node(&row.path).map(|n| n.label.clone()))
            .collect()
    }

    /// Path, button rect and label rect of every row an image-style tree
    /// painted, in paint order.
    fn painted_rows(tree: &Treeview<Msg>, canvas: &RecordingCanvas) -> Vec<(NodePath, Option<Rect>, Rect)> {
        let rows = tree.visible_rows();
        let mut painted = Vec::new();
        let mut button = None;
        for cmd in canvas.commands() {
            match cmd {
                DrawCommand::DrawImage { rect, .. } => button = Some(*rect),
                DrawCommand::DrawString { text, rect, .. } => {
                    let row = rows
                        .iter()
                        .find(|row| tree.node(&row.path).is_some_and(|n| n.label == *text));
                    if let Some(row) = row {
                        painted.push((row.path.clone(), button.take(), *rect));
                    }
                }
                _ => {}
            }
        }
        painted
    }

    #[test]
    fn test_flatten_follows_expansion() {
        let tree = sample();
        assert_eq!(labels(&tree), vec!["fruits", "vegetables", "carrot", "leek", "bread"]);
        let rows = tree.visible_rows();
        assert_eq!(rows[2].path, vec![1, 0]);
        assert_eq!(rows[2].depth, 1);
        assert!(!rows[2].has_children);
    }

    #[test]
    fn test_button_tap_expands() {
        let mut tree = sample();
        // Row 0 button at (0, 7.5) sized 20x20
        let result = tree.on_gesture(&Gesture::tap(10.0, 17.0));
        assert_eq!(
            result,
            EventResult::RedrawWithMessage(Msg::Toggled(vec![0], ExpandState::Expanded))
        );
        assert_eq!(labels(&tree)[..3], ["fruits", "apple", "pear"]);
    }

    #[test]
    fn test_label_tap_activates_without_redraw() {
        let mut tree = sample();
        // Row 2 ("carrot", depth 1) spans y in [70, 105)
        let result = tree.on_gesture(&Gesture::tap(100.0, 80.0));
        assert_eq!(result, EventResult::Message(Msg::Activated(vec![1, 0])));
    }

    #[test]
    fn test_gap_between_button_and_label_is_inert() {
        let mut tree = sample();
        assert_eq!(tree.on_gesture(&Gesture::tap(30.0, 17.0)), EventResult::None);
    }

    #[test]
    fn test_leaf_has_no_button_region() {
        let tree = sample();
        let regions = tree.regions();
        let buttons = regions
            .iter()
            .filter(|r| matches!(r.tag, TreeRegion::ExpandCollapse(_)))
            .count();
        assert_eq!(buttons, 2);
        assert_eq!(regions.len(), 5 + 2);
    }

    #[test]
    fn test_collapse_reclamps_scroll() {
        let mut tree = sample();
        let _ = tree.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 500.0));
        // Five rows: last row at the top is 4 * 35
        assert_eq!(tree.scroll_offset().1, 140.0);
        assert_eq!(tree.toggle(&[1]), Some(ExpandState::Collapsed));
        assert_eq!(tree.scroll_offset().1, 70.0);
    }

    #[test]
    fn test_toggle_leaf_is_noop() {
        let mut tree = sample();
        assert_eq!(tree.toggle(&[2]), None);
        assert_eq!(tree.toggle(&[9, 9]), None);
    }

    #[test]
    fn test_tap_after_vertical_scroll() {
        let mut tree = sample();
        let _ = tree.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 35.0));
        // Row 1 ("vegetables") is now the top row
        let result = tree.on_gesture(&Gesture::tap(100.0, 10.0));
        assert_eq!(result.into_message(), Some(Msg::Activated(vec![1])));
    }

    #[test]
    fn test_horizontal_pan_bounded_by_widest_node() {
        let mut tree: Treeview<Msg> = Treeview::new([TreeNode::new("x".repeat(60))]).with_size(100.0, 100.0);
        let _ = tree.paint(&mut RecordingCanvas::new());
        let _ = tree.on_gesture(&Gesture::pan(PanPhase::Running, 10_000.0, 0.0));
        // 60 chars * 14 * 0.6 = 504, plus 40 of button column, plus font size
        let expected = 504.0 + 40.0 + f64::from(DEFAULT_FONT_SIZE) - 100.0;
        assert!((tree.scroll_offset().0 - expected).abs() < 1e-3);
    }

    #[test]
    fn test_regions_match_paint_for_every_pixel_after_pans() {
        let image = |color| ImageData::solid(20, 20, color).unwrap();
        let mut tree = Treeview::<Msg>::new([
            TreeNode::new("fruits")
                .expanded()
                .with_children([TreeNode::new("apple"), TreeNode::new("pear")]),
            TreeNode::new("x".repeat(40)).with_children([TreeNode::new("deep")]),
            TreeNode::new("vegetables")
                .expanded()
                .with_children([TreeNode::new("carrot").with_children([TreeNode::new("baby")])]),
            TreeNode::new("bread"),
        ])
        .button_style(ButtonStyle::Image {
            expanded: image(Color::BLUE),
            collapsed: image(Color::RED),
        })
        .with_size(200.0, 120.0);
        // Horizontal bound comes from the measured content
        let _ = tree.paint(&mut RecordingCanvas::new());

        let mut checked = 0;
        for (dx, dy) in [(45.0, 0.0), (0.0, 52.5), (-20.25, 17.0), (1e4, 1e4)] {
            let _ = tree.on_gesture(&Gesture::pan(PanPhase::Started, 0.0, 0.0));
            let _ = tree.on_gesture(&Gesture::pan(PanPhase::Running, dx, dy));
            let _ = tree.on_gesture(&Gesture::pan(PanPhase::Completed, dx, dy));

            let mut canvas = RecordingCanvas::new();
            let _ = tree.paint(&mut canvas);
            let painted = painted_rows(&tree, &canvas);
            assert!(!painted.is_empty());
            let regions = tree.regions();

            for y in 0..120 {
                for x in 0..200 {
                    let point = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                    let expected = painted.iter().find_map(|(path, button, label)| {
                        if button.is_some_and(|b| b.contains(point)) {
                            Some(TreeRegion::ExpandCollapse(path.clone()))
                        } else if label.contains(point) {
                            Some(TreeRegion::Label(path.clone()))
                        } else {
                            None
                        }
                    });
                    let hit = regions.hit(point).map(|r| r.tag.clone());
                    assert_eq!(hit, expected, "offset {:?} point {:?}", tree.scroll_offset(), point);
                    if expected.is_some() {
                        checked += 1;
                    }
                }
            }
        }
        assert!(checked > 0);
        assert_ne!(tree.scroll_offset().0, 0.0);
    }

    #[test]
    fn test_paint_uses_glyph_buttons() {
        let mut tree = sample();
        let mut canvas = RecordingCanvas::new();
        let _ = tree.paint(&mut canvas);
        let texts = canvas.texts();
        assert_eq!(texts[..4], ["+", "fruits", "−", "vegetables"]);
        assert_eq!(canvas.text_rect("carrot").map(|r| r.x), Some(15.0 + 20.0 + 20.0));
    }

    #[test]
    fn test_image_style_and_node_image() {
        let expanded = ImageData::solid(16, 16, Color::BLUE).unwrap();
        let collapsed = ImageData::solid(16, 16, Color::RED).unwrap();
        let mut tree: Treeview<Msg> = Treeview::new([TreeNode::new("root")
            .with_image(ImageData::solid(8, 8, Color::GREEN).unwrap())
            .with_children([TreeNode::new("leaf")])])
        .button_style(ButtonStyle::Image { expanded, collapsed })
        .with_size(200.0, 100.0);

        let mut canvas = RecordingCanvas::new();
        let _ = tree.paint(&mut canvas);
        let images: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawImage { width, rect, .. } => Some((*width, *rect)),
                _ => None,
            })
            .collect();
        // Collapsed button image, then the node image after the 20px gap
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].0, 16);
        assert_eq!(images[1].1.x, 16.0 + 20.0);
        assert_eq!(canvas.text_rect("root").map(|r| r.x), Some(36.0 + 16.0 + TEXT_PADDING));
    }

    #[test]
    fn test_empty_tree() {
        let mut tree: Treeview<Msg> = Treeview::new([]);
        assert!(tree.regions().is_empty());
        assert_eq!(tree.on_gesture(&Gesture::tap(10.0, 10.0)), EventResult::None);
        let mut canvas = RecordingCanvas::new();
        let _ = tree.paint(&mut canvas);
        assert!(canvas.texts().is_empty());
    }
}
