//! Gallery host: owns one instance of every widget, routes gestures to
//! them, applies the resulting messages and renders settled snapshots.

use std::path::PathBuf;

use ccl_canvas::{icons, CanvasError, Color, IconCache, ImageData, RasterCanvas, Rect, TextEngine};
use ccl_ui::prelude::*;
use ccl_ui::{
    Arrangement, Button, ButtonStyle, Checkbox, Combobox, Grid, IconLabelButton, Image, Label, Listbox, ProgressBar,
    RadioGroup, TreeNode, Treeview,
};
use web_time::Instant;

use crate::config::{ConfigError, GalleryConfig};
use crate::message::{Message, WidgetId};
use crate::script::{Script, ScriptError};

/// Upper bound on paint passes per snapshot.
pub const MAX_PAINT_PASSES: usize = 4;

/// Amount a button tap advances the progress bar.
const PROGRESS_STEP: f64 = 10.0;

const FRUITS: [&str; 8] = ["Apple", "Banana", "Cherry", "Date", "Elderberry", "Fig", "Grape", "Honeydew"];

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

// ============================================================================
// Gallery
// ============================================================================

pub struct Gallery {
    config: GalleryConfig,
    listbox: Listbox<Message>,
    combobox: Combobox<Message>,
    grid: Grid<Message>,
    treeview: Treeview<Message>,
    button: Button<Message>,
    checkbox: Checkbox<Message>,
    radio_group: RadioGroup<Message>,
    progress_bar: ProgressBar<Message>,
    label: Label,
    image: Image<Message>,
    icon_button: IconLabelButton<Message>,
    /// Messages emitted so far, in order
    messages: Vec<Message>,
    /// Shared between raster canvases so fonts load once
    text_engine: Option<TextEngine>,
    last_paint_passes: usize,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Result<Self> {
        let (width, height) = (config.viewport_width, config.viewport_height);
        let font_size = config.font_size;

        let mut icon_cache = IconCache::new();
        let button_px = ccl_ui::constants::TREE_BUTTON_SIZE as u32;
        let expanded = icon_cache.get_or_rasterize("dash-square", icons::DASH_SQUARE, button_px, Color::BLACK)?;
        let collapsed = icon_cache.get_or_rasterize("plus-square", icons::PLUS_SQUARE, button_px, Color::BLACK)?;
        let star = icon_cache.get_or_rasterize("star", icons::STAR, ccl_ui::constants::ICON_SIZE as u32, Color::WHITE)?;
        log::debug!("Gallery: rasterized {} icons", icon_cache.len());

        let listbox = Listbox::new(FRUITS)
            .row_height(config.row_height)
            .font_size(font_size)
            .with_size(width, height)
            .on_select(Message::ListboxSelected);

        let mut combobox = Combobox::new(FRUITS)
            .with_width(width)
            .on_select(Message::ComboboxSelectionChanged)
            .on_toggle(Message::ComboboxToggled);
        combobox.select(Some(0));

        let grid = Grid::new(["Name", "Color", "Calories", "Origin"])
            .with_rows(grid_rows())
            .with_size(width, height)
            .on_cell_tap(|(row, col)| Message::GridCellTapped { row, col })
            .on_header_tap(Message::GridHeaderTapped);

        let treeview = Treeview::new(sample_tree(star.clone()))
            .button_style(ButtonStyle::Image { expanded, collapsed })
            .with_size(width, height)
            .on_activate(Message::TreeNodeActivated)
            .on_toggle(|(path, state)| Message::TreeNodeToggled { path, state });

        Ok(Self {
            listbox,
            combobox,
            grid,
            treeview,
            button: button("Advance").font_size(font_size).on_tap(|| Message::ButtonTapped),
            checkbox: Checkbox::new(false).on_toggle(Message::CheckboxToggled),
            radio_group: RadioGroup::new(["Small", "Medium", "Large"])
                .arrangement(Arrangement::Horizontal)
                .with_size(width, 30.0)
                .on_select(Message::RadioSelectionChanged),
            progress_bar: ProgressBar::new(0.0)
                .with_size(width, 30.0)
                .on_tap(Message::ProgressTapped),
            label: label("Unchecked").with_size(width, 30.0),
            image: Image::new(checkerboard(64, 8)?)
                .title("checkerboard")
                .tap_areas(vec![Rect::new(0.0, 0.0, 32.0, 32.0), Rect::new(16.0, 16.0, 48.0, 48.0)])
                .on_tap(Message::ImageAreasTapped),
            icon_button: IconLabelButton::new(Some(star), "Favorite").on_tap(|| Message::IconButtonTapped),
            config,
            messages: Vec::new(),
            text_engine: None,
            last_paint_passes: 0,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of paint passes the last render needed to settle.
    pub fn last_paint_passes(&self) -> usize {
        self.last_paint_passes
    }

    pub fn widget(&self, id: WidgetId) -> &dyn Widget<Message> {
        match id {
            WidgetId::Listbox => &self.listbox,
            WidgetId::Combobox => &self.combobox,
            WidgetId::Grid => &self.grid,
            WidgetId::Treeview => &self.treeview,
            WidgetId::Button => &self.button,
            WidgetId::Checkbox => &self.checkbox,
            WidgetId::RadioGroup => &self.radio_group,
            WidgetId::ProgressBar => &self.progress_bar,
            WidgetId::Label => &self.label,
            WidgetId::Image => &self.image,
            WidgetId::IconLabelButton => &self.icon_button,
        }
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> &mut dyn Widget<Message> {
        match id {
            WidgetId::Listbox => &mut self.listbox,
            WidgetId::Combobox => &mut self.combobox,
            WidgetId::Grid => &mut self.grid,
            WidgetId::Treeview => &mut self.treeview,
            WidgetId::Button => &mut self.button,
            WidgetId::Checkbox => &mut self.checkbox,
            WidgetId::RadioGroup => &mut self.radio_group,
            WidgetId::ProgressBar => &mut self.progress_bar,
            WidgetId::Label => &mut self.label,
            WidgetId::Image => &mut self.image,
            WidgetId::IconLabelButton => &mut self.icon_button,
        }
    }

    pub fn listbox(&self) -> &Listbox<Message> {
        &self.listbox
    }

    pub fn combobox(&self) -> &Combobox<Message> {
        &self.combobox
    }

    pub fn progress_bar(&self) -> &ProgressBar<Message> {
        &self.progress_bar
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    // ========================================================================
    // Gesture routing
    // ========================================================================

    /// Deliver one gesture to one widget and apply whatever it emits.
    pub fn dispatch(&mut self, id: WidgetId, gesture: &Gesture) -> EventResult<Message> {
        let result = self.widget_mut(id).on_gesture(gesture);
        log::trace!("Gallery: {} handled {:?} -> redraw={}", id.name(), gesture, result.needs_redraw());

        if let Some(message) = result.message() {
            log::info!("Gallery: {} emitted {:?}", id.name(), message);
            self.update(message.clone());
            self.messages.push(message.clone());
        }
        result
    }

    /// Replay every step of `script`. Returns the number of messages emitted.
    pub fn run_script(&mut self, script: &Script) -> usize {
        let before = self.messages.len();
        for step in script.steps() {
            let _ = self.dispatch(step.widget, &step.gesture);
        }
        let emitted = self.messages.len() - before;
        log::info!("Gallery: replayed {} steps, {} messages", script.len(), emitted);
        emitted
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ListboxSelected(index) => {
                if self.combobox.selected() != Some(index) {
                    self.combobox.select(Some(index));
                }
            }
            Message::ComboboxSelectionChanged(index) => {
                if self.listbox.selected() != Some(index) {
                    self.listbox.select(Some(index));
                }
            }
            Message::ButtonTapped => {
                let snapshot = self.progress_bar.snapshot();
                let next = snapshot.value + PROGRESS_STEP;
                let next = if next > snapshot.max { snapshot.min } else { next };
                self.progress_bar.set_value(next);
            }
            Message::CheckboxToggled(checked) => {
                self.label.set_text(if checked { "Checked" } else { "Unchecked" });
            }
            _ => {}
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Paint `id` onto a fresh raster surface until it settles.
    ///
    /// Hand the canvas back with [`Gallery::recycle`] to reuse its fonts.
    pub fn render(&mut self, id: WidgetId) -> Result<RasterCanvas> {
        let start = Instant::now();
        let size = self.widget(id).size();
        let width = (size.width.ceil() as u32).max(1);
        let height = (size.height.ceil() as u32).max(1);

        let mut text = self.text_engine.take().unwrap_or_default();
        let mut passes = 0;
        loop {
            let mut canvas = RasterCanvas::with_text_engine(width, height, text)?;
            canvas.clear(Color::WHITE);
            passes += 1;
            let outcome = self.widget_mut(id).paint(&mut canvas);

            if !outcome.needs_repaint() || passes >= MAX_PAINT_PASSES {
                if outcome.needs_repaint() {
                    log::warn!("Gallery: {} still invalid after {} passes", id.name(), passes);
                }
                self.last_paint_passes = passes;
                log::debug!(
                    "Gallery: rendered {} ({}x{}) in {} passes, {:.2}ms",
                    id.name(),
                    width,
                    height,
                    passes,
                    start.elapsed().as_secs_f64() * 1000.0
                );
                return Ok(canvas);
            }
            text = canvas.into_text_engine();
        }
    }

    /// Return a rendered canvas's text engine for the next render.
    pub fn recycle(&mut self, canvas: RasterCanvas) {
        self.text_engine = Some(canvas.into_text_engine());
    }

    /// Render `id` and write it to `dir/<name>.png`.
    pub fn save_snapshot(&mut self, id: WidgetId, dir: &std::path::Path) -> Result<PathBuf> {
        let canvas = self.render(id)?;
        let path = dir.join(format!("{}.png", id.name()));
        let saved = canvas.save_png(&path);
        self.recycle(canvas);
        saved?;
        Ok(path)
    }

    /// Write a snapshot of every widget into the configured snapshot directory.
    pub fn render_all(&mut self) -> Result<Vec<PathBuf>> {
        let dir = self.config.snapshot_dir.clone();
        std::fs::create_dir_all(&dir)?;

        let mut paths = Vec::with_capacity(WidgetId::all().len());
        for &id in WidgetId::all() {
            paths.push(self.save_snapshot(id, &dir)?);
        }
        log::info!("Gallery: wrote {} snapshots to {:?}", paths.len(), dir);
        Ok(paths)
    }
}

// ============================================================================
// Sample content
// ============================================================================

fn grid_rows() -> Vec<Vec<Option<String>>> {
    let rows: [[Option<&str>; 4]; 6] = [
        [Some("Apple"), Some("Red"), Some("52"), Some("Asia")],
        [Some("Banana"), Some("Yellow"), Some("89"), None],
        [Some("Cherry"), Some("Red"), Some("50"), Some("Europe")],
        [Some("Date"), Some("Brown"), None, Some("Middle East")],
        [Some("Elderberry"), Some("Purple"), Some("73"), Some("Europe")],
        [Some("Fig"), None, Some("74"), Some("Asia")],
    ];
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.map(str::to_string)).collect())
        .collect()
}

fn sample_tree(leaf_icon: ImageData) -> Vec<TreeNode> {
    vec![
        TreeNode::new("Fruits")
            .with_children([
                TreeNode::new("Citrus").with_children([TreeNode::new("Lemon"), TreeNode::new("Orange")]),
                TreeNode::new("Berries")
                    .with_children([TreeNode::new("Strawberry").with_image(leaf_icon), TreeNode::new("Blueberry")]),
            ])
            .expanded(),
        TreeNode::new("Vegetables").with_children([TreeNode::new("Carrot"), TreeNode::new("Leek")]),
        TreeNode::new("Grains"),
    ]
}

/// A gray checkerboard of `size`x`size` pixels with `cell` pixel squares.
fn checkerboard(size: u32, cell: u32) -> std::result::Result<ImageData, CanvasError> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 { 0x40 } else { 0xc0 };
            data.extend_from_slice(&[v, v, v, 0xff]);
        }
    }
    ImageData::from_rgba8(size, size, data)
}
