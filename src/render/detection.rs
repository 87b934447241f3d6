use crate::config::F;
use crate::macros::check_path;
use crate::quantum_state::QuantumState;
use crate::scenario::Scenario;
use crate::utils::line_plot::plot_line;
use ndarray::prelude::*;

/// Detection-probability distribution along the vertical axis at the
/// detector column, final timestep.
pub fn plot_detection_probability(state: &QuantumState, scenario: Scenario, x_position: F) {
    let profile = state.detection_profile(x_position);
    let position = Array::linspace(0.0, 1.0, profile.len());

    let title = format!(
        "Detection probability at x={x_position} for {}",
        scenario.title_label()
    );
    let path = scenario.detection_path();
    check_path!(&path);
    plot_line(
        &position,
        &profile,
        &title,
        "x",
        "Detection probability",
        &path,
    );
}
