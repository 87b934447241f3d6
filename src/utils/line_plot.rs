use crate::config::F;
use itertools::multizip;
use ndarray::prelude::*;
use plotters::prelude::*;

/// Saves a single line plot of y against x.
pub fn plot_line(
    x_values: &Array1<F>,
    y_values: &Array1<F>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    file_path: &str,
) {
    let root = BitMapBackend::new(file_path, (600, 500)).into_drawing_area();
    root.fill(&WHITE).unwrap();

    let x_min = x_values[[0]];
    let x_max = x_values[[x_values.len() - 1]];
    let y_min = y_values.fold(F::INFINITY, |a, &b| a.min(b));
    let y_max = y_values.fold(F::NEG_INFINITY, |a, &b| a.max(b));
    // keep the y range non-degenerate for flat series
    let pad = ((y_max - y_min) * 0.05).max(1e-12);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .unwrap();

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(
            multizip((x_values.iter(), y_values.iter())).map(|(&x, &y)| (x, y)),
            BLUE.stroke_width(1),
        ))
        .unwrap();

    root.present().expect("failure while writing file");
}
