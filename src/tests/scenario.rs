use crate::scenario::Scenario;

#[test]
fn negative_selectors_mean_the_baseline_run() {
    assert_eq!(Scenario::from_arg(-1), Scenario::NoPotential);
    assert_eq!(Scenario::from_arg(0), Scenario::Slits(0));
    assert_eq!(Scenario::from_arg(2), Scenario::Slits(2));
}

#[test]
fn input_file_names_match_the_simulator() {
    assert_eq!(
        Scenario::Slits(2).input_path(),
        "quantum_state_vec_2_slit(s).bin"
    );
    assert_eq!(
        Scenario::NoPotential.input_path(),
        "quantum_state_vec_no_potential.bin"
    );
}

#[test]
fn figure_paths_follow_the_naming_scheme() {
    let scenario = Scenario::Slits(1);
    assert_eq!(
        scenario.detection_path(),
        "figures/particle_detection_1_slit(s).png"
    );
    assert_eq!(
        scenario.deviation_path(),
        "figures/probability_deviation_1_slit(s).png"
    );
    assert_eq!(
        scenario.state_frame_path(0.00195),
        "figures/quantum_state_1_slit(s)_at_t_0.00195.png"
    );
    assert_eq!(
        scenario.comparison_path(0.00195, 0.00225),
        "figures/comparison_real_0.00195_imag_0.00225_1_slit(s).png"
    );
}

#[test]
fn the_baseline_animation_keeps_its_historical_name() {
    assert_eq!(
        Scenario::Slits(3).animation_path(),
        "figures/probability_distribution_3_slit(s).mp4"
    );
    assert_eq!(
        Scenario::NoPotential.animation_path(),
        "figures/probability_distribution_no_slits.mp4"
    );
}
