use qsviz::config::{COMPARISON_FRAME_IMAG, COMPARISON_FRAME_REAL, DETECTOR_POSITION};
use qsviz::quantum_state::QuantumState;
use qsviz::render::{animation, comparison, detection, deviation, state_frames};
use qsviz::scenario::Scenario;
use qsviz::{measure_time, print_and_log};

fn main() {
    match std::env::args().nth(1) {
        // one scenario, all five renderers
        Some(raw) => {
            let selector: i32 = raw.parse().expect("scenario argument must be an integer");
            render_scenario(Scenario::from_arg(selector), true);
        }
        // default sweep over the slit-count scenarios, no comparison figure
        None => {
            for slits in 1..=3 {
                print_and_log!("\nFor {} slit(s), plotting ... ({}/3)", slits, slits);
                render_scenario(Scenario::Slits(slits), false);
            }
        }
    }
}

fn render_scenario(scenario: Scenario, include_comparison: bool) {
    let state = QuantumState::load(scenario).expect("failed to load quantum state");
    let total = if include_comparison { 5 } else { 4 };
    let mut step = 0;
    let mut progress = |label: &str| {
        step += 1;
        print_and_log!("{}/{} - {}", step, total, label);
    };

    progress("Plotting probability deviation");
    deviation::plot_probability_deviation(&state, scenario);

    if include_comparison {
        progress("Plotting comparison between real and imaginary parts");
        comparison::plot_real_imag_comparison(
            &state,
            scenario,
            COMPARISON_FRAME_REAL,
            COMPARISON_FRAME_IMAG,
        );
    }

    progress("Plotting detection probability");
    detection::plot_detection_probability(&state, scenario, DETECTOR_POSITION);

    progress("Plotting probability, real and imaginary heatmaps");
    state_frames::plot_quantum_state(&state, scenario);

    progress("Animating probability distribution");
    measure_time!("animation", {
        animation::animate_probability_distribution(&state, scenario);
    });

    // derived series next to the figures, for further analysis
    state
        .save_probability_deviation_npy(&scenario.deviation_npy_path())
        .unwrap();
    state
        .save_detection_profile_npy(DETECTOR_POSITION, &scenario.detection_npy_path())
        .unwrap();
}
