use crate::config::TIME_STEP;
use crate::macros::check_path;
use crate::quantum_state::{frame_timestamp, QuantumState};
use crate::scenario::Scenario;
use crate::utils::line_plot::plot_line;
use ndarray::prelude::*;

/// Deviation of the total spatial probability from one, over time.
pub fn plot_probability_deviation(state: &QuantumState, scenario: Scenario) {
    let deviation = state.probability_deviation();
    let time = Array::linspace(
        0.0,
        frame_timestamp(deviation.len() - 1, TIME_STEP),
        deviation.len(),
    );

    let title = match scenario {
        Scenario::Slits(_) => format!(
            "Deviation of probability over time for {}",
            scenario.title_label()
        ),
        Scenario::NoPotential => String::from("Deviation of probability for no potential"),
    };
    let path = scenario.deviation_path();
    check_path!(&path);
    plot_line(
        &time,
        &deviation,
        &title,
        "Time, t",
        "Probability deviation",
        &path,
    );
}
