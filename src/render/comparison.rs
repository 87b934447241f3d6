use crate::config::{F, TIME_STEP};
use crate::macros::check_path;
use crate::quantum_state::{frame_timestamp, QuantumState};
use crate::scenario::Scenario;
use crate::utils::heatmap::{heatmap_with_colorbar, Colorbar};
use colorous::RED_BLUE;
use ndarray::prelude::*;
use plotters::prelude::*;

/// Real part at one frame next to the imaginary part at another, on one
/// symmetric color scale computed across both selected frames.
pub fn plot_real_imag_comparison(
    state: &QuantumState,
    scenario: Scenario,
    frame_real: usize,
    frame_imag: usize,
) {
    let real = state.real_part();
    let imag = state.imag_part();
    let real_frame = real.slice(s![.., .., frame_real]);
    let imag_frame = imag.slice(s![.., .., frame_imag]);

    let time_real = frame_timestamp(frame_real, TIME_STEP);
    let time_imag = frame_timestamp(frame_imag, TIME_STEP);

    let extremum = real_frame
        .fold(0.0, |acc: F, &value| acc.max(value.abs()))
        .max(imag_frame.fold(0.0, |acc: F, &value| acc.max(value.abs())));

    let path = scenario.comparison_path(time_real, time_imag);
    check_path!(&path);

    let root = BitMapBackend::new(&path, (1160, 560)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let panels = root.split_evenly((1, 2));

    heatmap_with_colorbar(
        &panels[0],
        real_frame,
        &Colorbar::symmetric(extremum, RED_BLUE),
        &format!("Real part at t={time_real}"),
    );
    heatmap_with_colorbar(
        &panels[1],
        imag_frame,
        &Colorbar::symmetric(extremum, RED_BLUE),
        &format!("Imaginary part at t={time_imag}"),
    );

    root.present().expect("failure while writing file");
}
