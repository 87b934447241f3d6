use crate::config::{F, TIME_STEP};
use crate::macros::check_path;
use crate::quantum_state::{frame_timestamp, QuantumState};
use crate::scenario::Scenario;
use crate::utils::heatmap::{heatmap_on, heatmap_with_colorbar, Colorbar};
use colorous::{INFERNO, RED_BLUE};
use ndarray::prelude::*;
use plotters::prelude::*;

/// Probability-density, real-part and imaginary-part heatmaps at the
/// first, middle and last timestep, one stacked figure per frame. The
/// real/imag panels share a symmetric color scale so the diverging map is
/// centered on zero.
pub fn plot_quantum_state(state: &QuantumState, scenario: Scenario) {
    let timesteps = state.timesteps();
    let density = state.probability_density();
    let real = state.real_part();
    let imag = state.imag_part();

    for frame in [0, timesteps / 2 - 1, timesteps - 1] {
        let timestamp = frame_timestamp(frame, TIME_STEP);
        let path = scenario.state_frame_path(timestamp);
        check_path!(&path);

        let root = BitMapBackend::new(&path, (560, 1160)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        let titled = root
            .titled(
                &format!("{} at t = {timestamp}", scenario.title_label()),
                ("sans-serif", 28),
            )
            .unwrap();
        let panels = titled.split_evenly((3, 1));

        let density_frame = density.slice(s![.., .., frame]);
        let real_frame = real.slice(s![.., .., frame]);
        let imag_frame = imag.slice(s![.., .., frame]);

        // density scales to its own frame maximum; re/im share one bound
        let density_max = density_frame.fold(0.0, |acc: F, &value| acc.max(value));
        let extremum = real_frame
            .fold(0.0, |acc: F, &value| acc.max(value.abs()))
            .max(imag_frame.fold(0.0, |acc: F, &value| acc.max(value.abs())));

        heatmap_on(
            &panels[0],
            density_frame,
            &Colorbar::sequential(density_max, INFERNO),
            "Probability distribution",
        );
        heatmap_with_colorbar(
            &panels[1],
            real_frame,
            &Colorbar::symmetric(extremum, RED_BLUE),
            "Real part",
        );
        heatmap_with_colorbar(
            &panels[2],
            imag_frame,
            &Colorbar::symmetric(extremum, RED_BLUE),
            "Imaginary part",
        );

        root.present().expect("failure while writing file");
    }
}
