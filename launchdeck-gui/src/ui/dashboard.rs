use super::*;
use chrono::{Datelike, NaiveDate};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use launchdeck_core::{ActivityPoint, ActivityStats};

use crate::theme::accent_colors;

impl GuiApp {
    /// Renders the activity dashboard: headline metrics, launch trend,
    /// per-project totals and the yearly contribution grid.
    pub(crate) fn render_dashboard_page(&mut self, ui: &mut egui::Ui) {
        self.stats
            .ensure_loaded(self.backend.as_ref(), self.selector.version());

        ui.horizontal(|ui| {
            ui.heading("Dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Refresh").clicked() {
                    self.stats.invalidate();
                }
            });
        });
        ui.separator();

        let Some(stats) = self.stats.stats().cloned() else {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label("Activity stats are not available.");
            });
            return;
        };

        self.metric_row(ui, &stats);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Launch trend").strong());
            for period in [ChartPeriod::Week, ChartPeriod::Month] {
                if ui
                    .selectable_label(self.chart_period == period, period.label())
                    .clicked()
                {
                    self.chart_period = period;
                }
            }
        });
        let trend = match self.chart_period {
            ChartPeriod::Week => &stats.weekly_activity,
            ChartPeriod::Month => &stats.monthly_activity,
        };
        self.trend_chart(ui, trend);
        ui.add_space(12.0);

        ui.label(RichText::new("Launches per project").strong());
        self.project_counts_chart(ui, &stats);
        ui.add_space(12.0);

        ui.label(RichText::new("Past year").strong());
        self.contribution_grid(ui, &stats.yearly_activity);
    }

    fn metric_row(&self, ui: &mut egui::Ui, stats: &ActivityStats) {
        let metrics = [
            ("Projects", stats.total_projects.to_string()),
            ("Total launches", stats.total_launches.to_string()),
            (
                "Avg. daily launches",
                format!("{:.1}", stats.average_daily_launches),
            ),
        ];
        ui.horizontal(|ui| {
            for (label, value) in metrics {
                egui::Frame::group(ui.style())
                    .rounding(egui::Rounding::same(6.0))
                    .show(ui, |ui| {
                        ui.set_width(150.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(value).strong().size(22.0));
                            ui.label(RichText::new(label).weak());
                        });
                    });
            }
        });
    }

    fn trend_chart(&self, ui: &mut egui::Ui, activity: &[ActivityPoint]) {
        let days = self.chart_period.days();
        let window = &activity[activity.len().saturating_sub(days)..];
        let points: PlotPoints = window
            .iter()
            .enumerate()
            .map(|(i, point)| [i as f64, f64::from(point.count)])
            .collect();
        let (accent, _) = accent_colors(&self.settings.settings().accent_color);
        Plot::new("launch_trend")
            .height(160.0)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .show_grid(true)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(accent).name("launches"));
            });
        if let (Some(first), Some(last)) = (window.first(), window.last()) {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&first.date).weak().small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&last.date).weak().small());
                });
            });
        }
    }

    fn project_counts_chart(&self, ui: &mut egui::Ui, stats: &ActivityStats) {
        if stats.project_counts.is_empty() {
            ui.label(RichText::new("No launches recorded yet.").weak());
            return;
        }
        let (accent, _) = accent_colors(&self.settings.settings().accent_color);
        let bars: Vec<Bar> = stats
            .project_counts
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(i as f64, entry.count as f64)
                    .name(entry.name.clone())
                    .fill(accent)
            })
            .collect();
        Plot::new("project_counts")
            .height(160.0)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
        ui.horizontal_wrapped(|ui| {
            for (i, entry) in stats.project_counts.iter().enumerate() {
                ui.label(
                    RichText::new(format!("{}: {} ({})", i + 1, entry.name, entry.count))
                        .weak()
                        .small(),
                );
            }
        });
    }

    /// GitHub-style heatmap of the past year, one cell per day, columns are
    /// weeks. Painted directly; a plot widget is a poor fit for this.
    fn contribution_grid(&self, ui: &mut egui::Ui, activity: &[ActivityPoint]) {
        if activity.is_empty() {
            ui.label(RichText::new("No activity recorded yet.").weak());
            return;
        }

        let cell = 10.0;
        let gap = 2.0;
        // Offset the first day to its weekday row so columns align to weeks.
        let first_offset = activity
            .first()
            .and_then(|point| NaiveDate::parse_from_str(&point.date, "%Y-%m-%d").ok())
            .map(|date| date.weekday().num_days_from_sunday() as usize)
            .unwrap_or(0);
        let slots = first_offset + activity.len();
        let weeks = (slots + 6) / 7;
        let size = egui::Vec2 {
            x: weeks as f32 * (cell + gap),
            y: 7.0 * (cell + gap),
        };
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;
        let (accent, _) = accent_colors(&self.settings.settings().accent_color);
        let empty = ui.visuals().faint_bg_color;

        for (i, point) in activity.iter().enumerate() {
            let slot = first_offset + i;
            let week = slot / 7;
            let day = slot % 7;
            let min = egui::pos2(
                origin.x + week as f32 * (cell + gap),
                origin.y + day as f32 * (cell + gap),
            );
            let rect = egui::Rect::from_min_size(min, egui::vec2(cell, cell));
            let color = match point.count {
                0 => empty,
                1..=2 => accent.linear_multiply(0.35),
                3..=5 => accent.linear_multiply(0.65),
                _ => accent,
            };
            painter.rect_filled(rect, 2.0, color);
        }

        if let Some(pos) = response.hover_pos() {
            let rel = pos - origin;
            let week = (rel.x / (cell + gap)) as usize;
            let day = (rel.y / (cell + gap)) as usize;
            let slot = week * 7 + day;
            if let Some(point) = slot
                .checked_sub(first_offset)
                .and_then(|i| activity.get(i))
            {
                response.on_hover_text(format!("{}: {} launches", point.date, point.count));
            }
        }
    }
}
