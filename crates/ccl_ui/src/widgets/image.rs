//! Image widget with tappable areas

use ccl_canvas::{Canvas, ImageData, Point, Rect, Size};

use crate::callback::Callback;
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// An image scaled into its bounds.
///
/// Any number of tap areas may be registered; a tap reports the indices of
/// every area containing the point, possibly none.
pub struct Image<M> {
    image: Option<ImageData>,
    title: String,
    size: Size,
    tap_areas: Vec<Rect>,
    on_tap: Callback<Vec<usize>, M>,
}

impl<M> Image<M> {
    /// Sized to the image's natural size
    pub fn new(image: ImageData) -> Self {
        let size = Size::new(image.width() as f32, image.height() as f32);
        Self {
            image: Some(image),
            title: String::new(),
            size,
            tap_areas: Vec::new(),
            on_tap: Callback::none(),
        }
    }

    pub fn empty() -> Self {
        Self {
            image: None,
            title: String::new(),
            size: Size::zero(),
            tap_areas: Vec::new(),
            on_tap: Callback::none(),
        }
    }

    callback_setter!(on_tap, Vec<usize>);
    builder_field!(tap_areas, Vec<Rect>);

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<ImageData>) {
        self.image = image;
    }

    pub fn image_title(&self) -> &str {
        &self.title
    }

    /// Indices of every tap area containing `point`, in registration order.
    pub fn areas_at(&self, point: Point) -> Vec<usize> {
        self.tap_areas
            .iter()
            .enumerate()
            .filter(|(_, area)| area.contains(point))
            .map(|(i, _)| i)
            .collect()
    }
}

impl<M> Paintable for Image<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        if let Some(image) = &self.image {
            canvas.draw_image(image, self.bounds());
        }
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for Image<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } if self.bounds().contains(position) => {
                let areas = self.areas_at(position);
                log::debug!("Image '{}': tapped areas {:?}", self.title, areas);
                EventResult::from_parts(true, self.on_tap.call(areas))
            }
            _ => EventResult::None,
        }
    }
}
