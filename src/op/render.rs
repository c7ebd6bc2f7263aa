//! Rasterisation of shapes, borders and the fallback scene.
//!
//! Two shape renderers exist. [`draw_t180`] is used for committed frames and
//! draws the full mark: the vertical bar spans `±size/2` around the center.
//! [`draw_t180_upper`] is used by the on-screen fallback before any frame has
//! been published and only draws the vertical bar above the horizontal one.
//! Both are kept as they are; they are not meant to agree.

use super::shape::{BorderSpec, Shape};
use crate::config;
use crate::geometry::{border_rects, Point, Rect};
use crate::surface::{Rgb, Surface};

/// Draw the full mark centered on `(cx, cy)`.
pub fn draw_t180(surface: &mut dyn Surface, cx: i32, cy: i32, size: i32, color: Rgb) {
    let thickness = size / 5;
    let half = size / 2;

    surface.fill(horizontal_bar(cx, cy, half, thickness), color);

    // Saturating: a center near the i32 limits clips instead of wrapping.
    let vertical = Rect::new(
        cx.saturating_sub(thickness / 2),
        cy.saturating_sub(half),
        cx.saturating_add(thickness / 2),
        cy.saturating_add(half),
    );
    surface.fill(vertical, color);
}

fn horizontal_bar(cx: i32, cy: i32, half: i32, thickness: i32) -> Rect {
    Rect::new(
        cx.saturating_sub(half),
        cy.saturating_sub(thickness / 2),
        cx.saturating_add(half),
        cy.saturating_add(thickness / 2),
    )
}

/// Draw the half mark used by the fallback scene: the horizontal bar plus
/// only the part of the vertical bar above it.
pub fn draw_t180_upper(surface: &mut dyn Surface, center: Point, size: i32, color: Rgb) {
    let thickness = size / 5;
    let half = size / 2;
    let Point { x: cx, y: cy } = center;

    let vertical = Rect::new(
        cx.saturating_sub(thickness / 2),
        cy.saturating_sub(thickness / 2),
        cx.saturating_add(thickness / 2),
        cy.saturating_sub(half),
    );

    surface.fill(horizontal_bar(cx, cy, half, thickness), color);
    surface.fill(vertical, color);
}

/// Draw a shape with the full-mark renderer.
pub fn draw_shape(surface: &mut dyn Surface, shape: &Shape) {
    draw_t180(surface, shape.x, shape.y, shape.size, shape.color);
}

/// Draw a frame just inside the surface edge.
pub fn draw_border(surface: &mut dyn Surface, border: &BorderSpec) {
    for strip in border_rects(surface.bounds(), border.thickness) {
        surface.fill(strip, border.color);
    }
}

/// Draw the scene shown before the first frame arrives.
pub fn draw_fallback_scene(surface: &mut dyn Surface, figure: Point, size: i32) {
    let bounds = surface.bounds();
    surface.fill(bounds, config::DEFAULT_BACKGROUND);
    draw_t180_upper(surface, figure, size, config::FIGURE_COLOR);
    draw_border(
        surface,
        &BorderSpec::with_color(config::FALLBACK_BORDER_COLOR),
    );
}
