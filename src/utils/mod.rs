pub mod heatmap;
pub mod line_plot;
