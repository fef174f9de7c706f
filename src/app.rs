use eframe::egui;

use crate::config::FigureConfig;
use crate::data::model::SampleTable;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Owns the loaded table for the lifetime of the window.
pub struct PhiPlotApp {
    table: SampleTable,
    figure: FigureConfig,
}

impl PhiPlotApp {
    pub fn new(table: SampleTable, figure: FigureConfig) -> Self {
        Self { table, figure }
    }
}

impl eframe::App for PhiPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::phase_plot(ui, &self.table, &self.figure);
        });
    }
}

/// Open the plot window and block until the viewer closes it.
pub fn show(table: SampleTable, figure: FigureConfig) -> anyhow::Result<()> {
    let options = figure.native_options();
    log::debug!("opening {:?} window", figure.inner_size());

    let title = figure.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PhiPlotApp::new(table, figure)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open the plot window: {e}"))
}
