use eframe::egui;

// ---------------------------------------------------------------------------
// Figure configuration
// ---------------------------------------------------------------------------

/// Fixed layout of the plot window. Nothing here depends on the loaded data.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Window title.
    pub title: String,
    /// Figure width in inches.
    pub width_in: f32,
    /// Figure height in inches.
    pub height_in: f32,
    /// Logical points per inch.
    pub dpi: f32,
    pub x_label: String,
    /// Rendered form of the `$\phi$` mathtext label.
    pub y_label: String,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: "phi-plot".to_owned(),
            width_in: 10.0,
            height_in: 8.0,
            dpi: 100.0,
            x_label: "time [s]".to_owned(),
            y_label: "φ".to_owned(),
        }
    }
}

impl FigureConfig {
    /// Window size in logical points.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.width_in * self.dpi, self.height_in * self.dpi]
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.inner_size()),
            ..Default::default()
        }
    }
}
