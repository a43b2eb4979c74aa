//! Combobox widget
//!
//! A textbox showing the current selection, a button that opens and closes a
//! dropdown list below it, and the list itself. The list scrolls like a
//! listbox, offset by the button row.

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, ImageData, Point, Rect, Size, VAlign};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    BACKGROUND_COLOR, BUTTON_COLOR, BUTTON_TAPPED_COLOR, BUTTON_TEXT_COLOR, COMBOBOX_BUTTON_HEIGHT,
    COMBOBOX_BUTTON_WIDTH, COMBOBOX_LIST_HEIGHT, CORNER_RADIUS, DEFAULT_FONT_SIZE, FRAME_COLOR, FRAME_WIDTH,
    ROW_HEIGHT, SELECTION_COLOR, TEXT_COLOR, TEXT_PADDING,
};
use crate::engine::{paint_list, HitRegionTable, ScrollBound, ScrollLimits, Strip, Viewport};
use crate::event::Gesture;
use crate::state::TapFlash;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Glyph on the dropdown button
const BUTTON_GLYPH: &str = "▼";

/// Configuration for the combobox widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    pub button_width: f32,
    pub button_height: f32,
    /// Height of the dropdown list when open
    pub list_height: f32,
    pub row_height: f32,
    pub corner_radius: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub background_color: Color,
    pub frame_color: Color,
    pub selection_color: Color,
    pub button_color: Color,
    /// Button color for the one frame after a tap
    pub button_tapped_color: Color,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            button_width: COMBOBOX_BUTTON_WIDTH,
            button_height: COMBOBOX_BUTTON_HEIGHT,
            list_height: COMBOBOX_LIST_HEIGHT,
            row_height: ROW_HEIGHT,
            corner_radius: CORNER_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
            text_color: TEXT_COLOR,
            background_color: BACKGROUND_COLOR,
            frame_color: FRAME_COLOR,
            selection_color: SELECTION_COLOR,
            button_color: BUTTON_COLOR,
            button_tapped_color: BUTTON_TAPPED_COLOR,
        }
    }
}

/// How the dropdown button is drawn.
#[derive(Debug, Clone, Default)]
pub enum DropdownStyle {
    /// "▼" on a filled rounded rect
    #[default]
    Glyph,
    /// Drawn into the button rect; `pressed` shows for the flash frame
    Image { normal: ImageData, pressed: ImageData },
}

/// Named parts of the combobox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboRegion {
    Button,
    Textbox,
    List,
}

/// A dropdown selector
pub struct Combobox<M> {
    labels: Vec<String>,
    config: ComboboxConfig,
    dropdown_style: DropdownStyle,
    size: Size,
    viewport: Viewport,
    selected: Option<usize>,
    is_open: bool,
    flash: TapFlash,
    on_select: Callback<usize, M>,
    on_toggle: Callback<bool, M>,
}

impl<M> Combobox<M> {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        let config = ComboboxConfig::default();
        let size = Size::new(200.0, config.button_height);
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            config,
            dropdown_style: DropdownStyle::Glyph,
            size,
            viewport: Viewport::new(),
            selected: None,
            is_open: false,
            flash: TapFlash::Idle,
            on_select: Callback::none(),
            on_toggle: Callback::none(),
        }
    }

    callback_setter!(on_select, usize);
    callback_setter!(on_toggle, bool);
    builder_field!(config, ComboboxConfig);

    /// Image buttons take their size from the normal image.
    pub fn dropdown_style(mut self, style: DropdownStyle) -> Self {
        if let DropdownStyle::Image { normal, .. } = &style {
            self.config.button_width = normal.width() as f32;
            self.config.button_height = normal.height() as f32;
            self.size.height = self.desired_height();
        }
        self.dropdown_style = style;
        self
    }

    /// Set the width; height follows the open state.
    pub fn with_width(mut self, width: f32) -> Self {
        self.size = Size::new(width, self.desired_height());
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn set_labels<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.labels = labels.into_iter().map(Into::into).collect();
        if self.selected.is_some_and(|i| i >= self.labels.len()) {
            self.selected = None;
        }
        self.viewport = self.viewport.reclamp(self.limits()).viewport;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.labels.len());
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.labels.get(i)).map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.offset_y
    }

    /// Height the host should give the widget: the button row, plus the
    /// list while open.
    pub fn desired_height(&self) -> f32 {
        if self.is_open {
            self.config.button_height + self.config.list_height
        } else {
            self.config.button_height
        }
    }

    pub fn max_offset(&self) -> f64 {
        ScrollBound::LastItemAtOrigin {
            count: self.labels.len(),
            extent: self.config.row_height,
        }
        .max_offset()
    }

    fn limits(&self) -> ScrollLimits {
        ScrollLimits::vertical(self.max_offset())
    }

    fn button_rect(&self) -> Rect {
        Rect::new(
            self.size.width - self.config.button_width,
            0.0,
            self.config.button_width,
            self.config.button_height,
        )
    }

    fn textbox_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            (self.size.width - self.config.button_width).max(0.0),
            self.config.button_height,
        )
    }

    fn list_pane(&self) -> Rect {
        let height = self
            .config
            .list_height
            .min(self.size.height - self.config.button_height)
            .max(0.0);
        Rect::new(0.0, self.config.button_height, self.size.width, height)
    }

    fn strip(&self) -> Strip {
        Strip::new(
            self.list_pane(),
            self.config.row_height,
            self.viewport.offset_y,
            self.labels.len(),
        )
    }

    /// Button first so it wins over the textbox at the shared edge.
    pub fn regions(&self) -> HitRegionTable<ComboRegion> {
        let mut table = HitRegionTable::new();
        table.push(self.button_rect(), ComboRegion::Button);
        table.push(self.textbox_rect(), ComboRegion::Textbox);
        if self.is_open {
            table.push(self.list_pane(), ComboRegion::List);
        }
        table
    }

    fn toggle(&mut self) -> EventResult<M> {
        self.is_open = !self.is_open;
        self.flash.press();
        self.size.height = self.desired_height();
        if !self.is_open {
            self.viewport = self.viewport.end_pan();
        }
        log::debug!("Combobox: list {}", if self.is_open { "opened" } else { "closed" });
        EventResult::from_parts(true, self.on_toggle.call(self.is_open))
    }

    fn pick(&mut self, position: Point) -> EventResult<M> {
        let Some(index) = self.strip().locate(position) else {
            return EventResult::None;
        };
        self.selected = Some(index);
        self.is_open = false;
        self.size.height = self.desired_height();
        self.viewport = self.viewport.end_pan();
        log::debug!("Combobox: selected index {} ('{}')", index, self.labels[index]);
        EventResult::from_parts(true, self.on_select.call(index))
    }
}

impl<M> Paintable for Combobox<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let pressed = self.flash.take();
        let config = &self.config;
        let font = FontSpec::new(config.font_size).with_color(config.text_color);
        let row = Rect::new(0.0, 0.0, self.size.width, config.button_height);
        let textbox = self.textbox_rect();
        let button = self.button_rect();
        let selected_label = self.selected_label().unwrap_or("");
        let dropdown_style = &self.dropdown_style;

        let draw_header = |canvas: &mut dyn Canvas| {
            canvas.fill_rounded_rect(row, config.corner_radius, config.background_color);
            canvas.stroke_rounded_rect(row, config.corner_radius, config.frame_color, FRAME_WIDTH);

            let text_rect = Rect::new(textbox.x + TEXT_PADDING, textbox.y, textbox.width - TEXT_PADDING, textbox.height);
            canvas.draw_string(selected_label, text_rect, HAlign::Left, VAlign::Center, &font);

            match dropdown_style {
                DropdownStyle::Glyph => {
                    let color = if pressed {
                        config.button_tapped_color
                    } else {
                        config.button_color
                    };
                    canvas.fill_rounded_rect(button, config.corner_radius, color);
                    let glyph_font = FontSpec::new(config.font_size).with_color(BUTTON_TEXT_COLOR);
                    canvas.draw_string(BUTTON_GLYPH, button, HAlign::Center, VAlign::Center, &glyph_font);
                }
                DropdownStyle::Image { normal, pressed: pressed_image } => {
                    canvas.draw_image(if pressed { pressed_image } else { normal }, button);
                }
            }
        };

        if self.is_open {
            let strip = self.strip();
            let pane = strip.pane;
            let labels = &self.labels;
            let selected = self.selected;
            paint_list(
                canvas,
                &strip,
                |canvas| {
                    draw_header(canvas);
                    canvas.fill_rect(pane, config.background_color);
                    canvas.stroke_rect(pane, config.frame_color, FRAME_WIDTH);
                },
                |canvas, index, slot| {
                    if selected == Some(index) {
                        canvas.fill_rect(slot, config.selection_color);
                    }
                    let text_rect = Rect::new(slot.x + TEXT_PADDING, slot.y, slot.width - TEXT_PADDING, slot.height);
                    canvas.draw_string(&labels[index], text_rect, HAlign::Left, VAlign::Center, &font);
                },
            );
        } else {
            draw_header(canvas);
        }

        if pressed {
            PaintOutcome::Invalidate
        } else {
            PaintOutcome::Settled
        }
    }
}

impl<M> HitTestable<M> for Combobox<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } => {
                let region = self.regions().hit(position).map(|r| r.tag);
                match region {
                    Some(ComboRegion::Button) => self.toggle(),
                    Some(ComboRegion::List) => self.pick(position),
                    Some(ComboRegion::Textbox) | None => EventResult::None,
                }
            }
            Gesture::Pan {
                phase,
                total_x,
                total_y,
            } => {
                if !self.is_open {
                    return EventResult::None;
                }
                let update = self.viewport.apply_pan(phase, total_x, total_y, self.limits());
                self.viewport = update.viewport;
                EventResult::from_parts(update.repaint, None)
            }
        }
    }
}
