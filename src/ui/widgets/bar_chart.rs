use crate::report::{BarChart, Rgb};
use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Sense, Stroke};

const CHART_HEIGHT: f32 = 240.0;
/// Below this slot width the per-bar texts would overlap
const MIN_LABELLED_SLOT: f32 = 36.0;

pub struct BarChartView;

impl BarChartView {
    pub fn show(ui: &mut egui::Ui, chart: &BarChart) {
        ui.label(egui::RichText::new(&chart.title).strong().size(16.0));

        if chart.bars.is_empty() {
            ui.weak("No data");
            return;
        }

        let text_color = ui.visuals().text_color();
        let axis_color = ui.visuals().weak_text_color();

        let (response, painter) =
            ui.allocate_painter(vec2(ui.available_width(), CHART_HEIGHT), Sense::hover());
        let plot = response.rect.shrink2(vec2(8.0, 20.0));

        let (lo, hi) = chart.value_range();
        let span = if hi > lo { hi - lo } else { 1.0 };
        let y_of = |v: f64| plot.bottom() - ((v - lo) / span) as f32 * plot.height();
        let zero_y = y_of(0.0);

        painter.line_segment(
            [pos2(plot.left(), zero_y), pos2(plot.right(), zero_y)],
            Stroke::new(1.0, axis_color),
        );

        let slot = plot.width() / chart.bars.len() as f32;
        let bar_width = (slot * 0.7).max(1.0);
        let labelled = slot >= MIN_LABELLED_SLOT;
        let mut hovered = None;

        for (i, bar) in chart.bars.iter().enumerate() {
            if !bar.value.is_finite() {
                continue;
            }
            let x = plot.left() + slot * (i as f32 + 0.5);
            let y = y_of(bar.value);
            let bar_rect = Rect::from_min_max(
                pos2(x - bar_width / 2.0, y.min(zero_y)),
                pos2(x + bar_width / 2.0, y.max(zero_y)),
            );
            painter.rect_filled(bar_rect, 2.0, to_color32(bar.color));

            if labelled {
                let (anchor, at) = if bar.value >= 0.0 {
                    (Align2::CENTER_BOTTOM, pos2(x, bar_rect.top() - 2.0))
                } else {
                    (Align2::CENTER_TOP, pos2(x, bar_rect.bottom() + 2.0))
                };
                painter.text(at, anchor, &bar.text, FontId::proportional(10.0), text_color);
                painter.text(
                    pos2(x, response.rect.bottom() - 2.0),
                    Align2::CENTER_BOTTOM,
                    &bar.category,
                    FontId::proportional(10.0),
                    axis_color,
                );
            }

            if let Some(pointer) = response.hover_pos() {
                let column = Rect::from_min_max(
                    pos2(x - slot / 2.0, plot.top()),
                    pos2(x + slot / 2.0, plot.bottom()),
                );
                if column.contains(pointer) {
                    hovered = Some(format!("{}: {}", bar.category, bar.text));
                }
            }
        }

        if let Some(text) = hovered {
            response.on_hover_text(text);
        }

        ui.horizontal(|ui| {
            ui.small(format!("x: {}", chart.x_label));
            ui.small(format!("y: {}", chart.y_label));
        });
    }
}

pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}
