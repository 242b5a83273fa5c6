//! Pie chart drawn with the egui painter: wedge geometry, hover lookup,
//! and a legend underneath.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Mesh, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use rust_decimal::prelude::ToPrimitive;

use crate::engine::mortgage::Slice;
use crate::ui::colors::{self, TEXT};
use crate::utils::format_currency;

/// Segments used for a full circle; wedges get a proportional share.
const CIRCLE_SEGMENTS: f32 = 96.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    /// Screen angle in radians; `-PI/2` is twelve o'clock, increasing clockwise.
    pub start: f32,
    pub sweep: f32,
    pub fraction: f32,
}

/// Wedges for `values`, starting at twelve o'clock. Negative values count as
/// zero. Returns an empty list when nothing is positive.
pub fn wedges(values: &[f64]) -> Vec<Wedge> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let fraction = (v.max(0.0) / total) as f32;
            let wedge = Wedge {
                start,
                sweep: fraction * TAU,
                fraction,
            };
            start += wedge.sweep;
            wedge
        })
        .collect()
}

/// Index of the wedge containing the screen angle `angle`.
pub fn wedge_at(wedges: &[Wedge], angle: f32) -> Option<usize> {
    let first = wedges.first()?;
    let offset = (angle - first.start).rem_euclid(TAU);
    let mut acc = 0.0;
    for (i, wedge) in wedges.iter().enumerate() {
        acc += wedge.sweep;
        if offset < acc && wedge.sweep > 0.0 {
            return Some(i);
        }
    }
    None
}

fn wedge_mesh(center: Pos2, radius: f32, wedge: &Wedge, color: Color32) -> Mesh {
    let segments = ((wedge.sweep / TAU) * CIRCLE_SEGMENTS).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..=segments {
        let angle = wedge.start + wedge.sweep * i as f32 / segments as f32;
        mesh.colored_vertex(center + radius * Vec2::angled(angle), color);
    }
    for i in 0..segments {
        mesh.add_triangle(0, 1 + i, 2 + i);
    }
    mesh
}

/// Titled pie chart of `slices` filling `height`, with a legend below.
pub fn pie_chart(ui: &mut Ui, title: &str, slices: &[Slice], height: f32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).strong().size(16.0).color(TEXT));
    });

    let values: Vec<f64> = slices
        .iter()
        .map(|s| s.value.to_f64().unwrap_or(0.0))
        .collect();
    let wedges = wedges(&values);

    let legend_height = 22.0 * slices.len().div_ceil(2) as f32;
    let chart_height = (height - legend_height - 24.0).max(80.0);
    let size = Vec2::new(ui.available_width(), chart_height);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;
    let hovered = response
        .hover_pos()
        .filter(|p| p.distance(center) <= radius)
        .and_then(|p| {
            let d = p - center;
            wedge_at(&wedges, d.y.atan2(d.x))
        });

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        for (i, wedge) in wedges.iter().enumerate() {
            if wedge.sweep <= 0.0 {
                continue;
            }
            // Hovered wedge pops out slightly.
            let shift = if hovered == Some(i) {
                6.0 * Vec2::angled(wedge.start + wedge.sweep / 2.0)
            } else {
                Vec2::ZERO
            };
            painter.add(Shape::mesh(wedge_mesh(
                center + shift,
                radius,
                wedge,
                colors::slice_color(i),
            )));
        }
        if wedges.len() > 1 {
            for wedge in wedges.iter().filter(|w| w.fraction < 1.0) {
                painter.line_segment(
                    [center, center + radius * Vec2::angled(wedge.start)],
                    Stroke::new(1.5, Color32::WHITE),
                );
            }
        }
    }

    if let Some(i) = hovered {
        response.on_hover_text(format!(
            "{}: {} ({:.1}%)",
            slices[i].label,
            format_currency(slices[i].value),
            wedges[i].fraction * 100.0
        ));
    }

    egui::Grid::new("pie_legend")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (i, slice) in slices.iter().enumerate() {
                let fraction = wedges.get(i).map_or(0.0, |w| w.fraction);
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, colors::slice_color(i));
                    ui.label(format!("{} {:.1}%", slice.label, fraction * 100.0));
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}
