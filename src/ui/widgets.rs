//! Gradient-filled shapes: the category buttons and the input group box.

use std::f32::consts::{FRAC_PI_2, PI};

use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Margin, Mesh, Pos2, Rect, Response, Sense, Shape,
    Stroke, StrokeKind, Ui, Vec2,
};

use crate::ui::colors::{self, GROUP_BORDER, GROUP_BOTTOM, GROUP_TOP, INDIGO, INDIGO_LIGHT};

const CORNER_SEGMENTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left edge to right edge.
    Horizontal,
    /// Top-left corner to bottom-right corner.
    Diagonal,
}

/// Position of `p` along the gradient of `rect`, in `0..=1`.
pub fn gradient_t(rect: Rect, p: Pos2, direction: Direction) -> f32 {
    let t = match direction {
        Direction::Horizontal => (p.x - rect.min.x) / rect.width(),
        Direction::Diagonal => {
            ((p.x - rect.min.x) + (p.y - rect.min.y)) / (rect.width() + rect.height())
        }
    };
    if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
}

/// Outline of a rounded rectangle, clockwise from the top-left arc.
pub fn rounded_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let corners = [
        (Pos2::new(rect.min.x + r, rect.min.y + r), PI),
        (Pos2::new(rect.max.x - r, rect.min.y + r), PI + FRAC_PI_2),
        (Pos2::new(rect.max.x - r, rect.max.y - r), 0.0),
        (Pos2::new(rect.min.x + r, rect.max.y - r), FRAC_PI_2),
    ];
    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * i as f32 / CORNER_SEGMENTS as f32;
            points.push(center + r * Vec2::angled(angle));
        }
    }
    points
}

/// Rounded rectangle filled with a two-stop linear gradient.
pub fn gradient_shape(
    rect: Rect,
    radius: f32,
    from: Color32,
    to: Color32,
    direction: Direction,
) -> Shape {
    let color_at = |p: Pos2| colors::mix(from, to, gradient_t(rect, p, direction));
    let outline = rounded_outline(rect, radius);

    let mut mesh = Mesh::default();
    let center = rect.center();
    mesh.colored_vertex(center, color_at(center));
    for p in &outline {
        mesh.colored_vertex(*p, color_at(*p));
    }
    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    Shape::mesh(mesh)
}

/// A fixed-size button painted with the indigo gradient. A selected button
/// gets a white outline.
pub fn gradient_button(ui: &mut Ui, text: &str, size: Vec2, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let (from, to) = if response.hovered() {
            (colors::mix(INDIGO_LIGHT, Color32::WHITE, 0.15), INDIGO_LIGHT)
        } else {
            (INDIGO_LIGHT, INDIGO)
        };
        let painter = ui.painter();
        painter.add(gradient_shape(rect, 10.0, from, to, Direction::Horizontal));
        if selected {
            painter.rect_stroke(
                rect.shrink(2.0),
                CornerRadius::same(9),
                Stroke::new(2.0, Color32::WHITE),
                StrokeKind::Inside,
            );
        }
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(15.0),
            Color32::WHITE,
        );
    }
    response
}

/// Bordered box with a diagonal white-to-lavender background.
pub fn gradient_group<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let background = ui.painter().add(Shape::Noop);
    let inner = egui::Frame::new()
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(12))
        .stroke(Stroke::new(2.0, GROUP_BORDER))
        .show(ui, add_contents);
    ui.painter().set(
        background,
        gradient_shape(
            inner.response.rect,
            12.0,
            GROUP_TOP,
            GROUP_BOTTOM,
            Direction::Diagonal,
        ),
    );
    inner.inner
}
