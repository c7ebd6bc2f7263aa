//! Scene: The drawing state accumulated between commits.

use crate::config;
use crate::geometry::{Point, Rect};
use crate::op::{draw_border, draw_shape, BorderSpec, Shape};
use crate::surface::Surface;
use crate::surface::Rgb;

/// Everything a commit renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Background color.
    pub background: Rgb,
    /// Region filled with the region color, if any.
    pub region: Option<Rect>,
    /// Frame drawn last, if any.
    pub border: Option<BorderSpec>,
    /// Tracked shapes, in submission order.
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// The start-up scene: default background and one shape at `position`.
    pub fn seeded(position: Point) -> Self {
        Self {
            shapes: vec![Shape::new(
                position.x,
                position.y,
                config::SEED_FIGURE_SIZE,
                config::FIGURE_COLOR,
            )],
            ..Self::default()
        }
    }

    /// Restore the default background and drop everything else.
    pub fn reset(&mut self) {
        self.background = config::DEFAULT_BACKGROUND;
        self.region = None;
        self.border = None;
        self.shapes.clear();
    }

    /// Move every shape to `position`.
    pub fn reposition(&mut self, position: Point) {
        for shape in &mut self.shapes {
            shape.move_to(position);
        }
    }

    /// Paint background, region, shapes and border, in that order.
    pub fn render(&self, surface: &mut dyn Surface) {
        let bounds = surface.bounds();
        surface.fill(bounds, self.background);

        if let Some(rect) = self.region {
            surface.fill(rect, config::REGION_FILL_COLOR);
        }

        for shape in &self.shapes {
            draw_shape(surface, shape);
        }

        if let Some(border) = &self.border {
            draw_border(surface, border);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            background: config::DEFAULT_BACKGROUND,
            region: None,
            border: None,
            shapes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    #[test]
    fn test_seeded_scene() {
        let scene = Scene::seeded(Point::new(400, 400));
        assert_eq!(scene.background, Rgb::GREEN);
        assert_eq!(scene.shapes, vec![Shape::new(400, 400, 200, Rgb::YELLOW)]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut scene = Scene {
            background: Rgb::WHITE,
            region: Some(Rect::new(0, 0, 5, 5)),
            border: Some(BorderSpec::new(10, Rgb::RED)),
            shapes: vec![Shape::figure(1, 2)],
        };
        scene.reset();
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn test_reposition_moves_all() {
        let mut scene = Scene::default();
        scene.shapes.push(Shape::figure(10, 10));
        scene.shapes.push(Shape::figure(500, 20));
        scene.reposition(Point::new(300, 400));
        assert!(scene.shapes.iter().all(|s| s.center() == Point::new(300, 400)));
    }

    #[test]
    fn test_render_layer_order() {
        let mut scene = Scene::default();
        scene.background = Rgb::WHITE;
        scene.region = Some(Rect::new(0, 0, 100, 100));
        scene.shapes.push(Shape::new(50, 50, 40, Rgb::YELLOW));
        scene.border = Some(BorderSpec::new(5, Rgb::RED));

        let mut canvas = Canvas::new(200, 200);
        scene.render(&mut canvas);

        assert_eq!(canvas.get(150, 150), Some(Rgb::WHITE));
        assert_eq!(canvas.get(20, 80), Some(Rgb::BLACK));
        // Shape over region, border over both.
        assert_eq!(canvas.get(50, 50), Some(Rgb::YELLOW));
        assert_eq!(canvas.get(2, 2), Some(Rgb::RED));
    }
}
