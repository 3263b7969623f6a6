use std::ops::RangeInclusive;

use eframe::egui::{Id, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use overdose_trends::data::model::Series;

use crate::color::ChartColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trend charts (central panel)
// ---------------------------------------------------------------------------

/// Render the long-window line chart above the short-window bar chart.
pub fn trend_charts(ui: &mut Ui, state: &AppState, colors: ChartColors) {
    ui.heading("Drug Overdose Death Trends");

    if state.charts.long.is_empty() && state.charts.short.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No data for this selection.");
        });
        return;
    }

    let drug = state.selection.label();
    let line_height = (ui.available_height() * 0.55).max(200.0);

    let series = &state.charts.long;
    let points: PlotPoints = series
        .values()
        .into_iter()
        .enumerate()
        .map(|(i, v)| [i as f64, v])
        .collect();

    base_plot(Id::new("trend_line"), series)
        .height(line_height)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name(format!("Overdose Deaths - {drug}"))
                    .color(colors.line)
                    .width(3.0)
                    .fill(0.0),
            );
        });

    ui.add_space(8.0);
    ui.strong(format!("Last {} Months", state.windows.short));

    let series = &state.charts.short;
    let bars: Vec<Bar> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| Bar::new(i as f64, p.value).name(&p.label).fill(colors.bar))
        .collect();

    base_plot(Id::new("trend_bars"), series).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).name(format!("Monthly Average - {drug}")));
    });
}

/// Shared chart setup: zero-based y axis and month labels on integer x ticks.
fn base_plot(id: Id, series: &Series) -> Plot {
    let labels: Vec<String> = series.labels().into_iter().map(str::to_string).collect();

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Time Period")
        .y_axis_label("Number of Deaths")
        .include_y(0.0)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            tick_label(&labels, mark.value)
        })
}

fn tick_label(labels: &[String], x: f64) -> String {
    if x.fract() != 0.0 || x < 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}
