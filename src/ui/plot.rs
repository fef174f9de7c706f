use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::config::FigureConfig;
use crate::data::model::SampleTable;

// ---------------------------------------------------------------------------
// Phase plot (central panel)
// ---------------------------------------------------------------------------

/// Render the phase time series as a single line.
pub fn phase_plot(ui: &mut Ui, table: &SampleTable, figure: &FigureConfig) {
    Plot::new("phase_plot")
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(series(table))
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}

/// Plot points in row order, one per table row.
pub fn series(table: &SampleTable) -> PlotPoints<'static> {
    table.points().collect()
}
