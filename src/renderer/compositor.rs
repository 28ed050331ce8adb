//! Frame compositor
//!
//! Holds the layers of one scene in stacking order. Each frame is two phases:
//! [`Compositor::advance`] animates every layer, then [`Compositor::render_frame`]
//! folds the layers bottom to top at every strip position.

use crate::color::Rgba;
use crate::draw::Layer;
use crate::field::Field;

pub struct Compositor {
    field: Field,
    /// Sorted by z-index, ties in registration order
    layers: Vec<Layer>,
    /// Color each position starts from before any layer is applied
    background: Rgba,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("field", &self.field)
            .field("layers", &self.layers.len())
            .field("background", &self.background)
            .finish()
    }
}

impl Compositor {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            layers: Vec::new(),
            background: Rgba::TRANSPARENT,
        }
    }

    /// Start every position from `background` instead of transparent black
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Register a layer. It goes after every layer with a lower or equal z-index.
    pub fn add(&mut self, layer: Layer) {
        let z = layer.borrow().z_index();
        let index = self.layers.partition_point(|l| l.borrow().z_index() <= z);
        self.layers.insert(index, layer);
    }

    /// Animate every layer by `dt` seconds and drop the ones that finished
    pub fn advance(&mut self, dt: f64) {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.borrow_mut().animate(dt));

        let dropped = before - self.layers.len();
        if dropped > 0 {
            log::info!("Dropped {dropped} finished layer(s), {} remain", self.layers.len());
        }
    }

    /// Final color at one position
    pub fn render(&self, position: usize) -> Rgba {
        let p = position as f64;
        self.layers
            .iter()
            .fold(self.background, |color, layer| layer.borrow().color_at(p, color))
    }

    /// Render the whole strip into `frame`, one color per position.
    /// Only the first `width` entries are written.
    pub fn render_into(&self, frame: &mut [Rgba]) {
        for (position, pixel) in frame.iter_mut().take(self.field.width() as usize).enumerate() {
            *pixel = self.render(position);
        }
    }

    /// Render the whole strip
    pub fn render_frame(&self) -> Vec<Rgba> {
        let mut frame = vec![self.background; self.field.width() as usize];
        self.render_into(&mut frame);
        frame
    }
}
