use crate::config::{F, FIGURES_DIR, TIME_STEP};
use crate::macros::check_path;
use crate::quantum_state::{frame_timestamp, QuantumState};
use crate::scenario::Scenario;
use crate::utils::heatmap::{heatmap_on, Colorbar};
use colorous::INFERNO;
use ndarray::prelude::*;
use plotters::prelude::*;
use std::process::Command;

pub const FRAME_RATE: u32 = 30;
pub const BITRATE: &str = "10000k";
pub const CODEC: &str = "h264";

/// Frame-by-frame heatmap animation of |ψ|² over every timestep, encoded
/// to MP4 by a synchronous ffmpeg invocation.
pub fn animate_probability_distribution(state: &QuantumState, scenario: Scenario) {
    let density = state.probability_density();
    let timesteps = state.timesteps();

    let output = scenario.animation_path();
    check_path!(&output);
    let frames_dir = format!("{FIGURES_DIR}/animation_frames_{}", scenario.label());
    std::fs::create_dir_all(&frames_dir).expect("failed to create animation frames directory");

    for frame in 0..timesteps {
        let density_frame = density.slice(s![.., .., frame]);
        let frame_max = density_frame.fold(0.0, |acc: F, &value| acc.max(value));
        let timestamp = frame_timestamp(frame, TIME_STEP);

        let frame_path = format!("{frames_dir}/frame_{frame:05}.png");
        let root = BitMapBackend::new(&frame_path, (560, 560)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        heatmap_on(
            &root,
            density_frame,
            &Colorbar::sequential(frame_max, INFERNO),
            &format!(
                "Probability distribution for {} at t={timestamp:.6}",
                scenario.title_label()
            ),
        );
        root.present().expect("failure while writing file");
    }

    // blocks until the whole video is written
    let framerate = FRAME_RATE.to_string();
    let frame_pattern = format!("{frames_dir}/frame_%05d.png");
    let status = Command::new("ffmpeg")
        .args([
            "-y",
            "-framerate",
            framerate.as_str(),
            "-i",
            frame_pattern.as_str(),
            "-c:v",
            CODEC,
            "-b:v",
            BITRATE,
            "-pix_fmt",
            "yuv420p",
            output.as_str(),
        ])
        .status()
        .expect("failed to launch ffmpeg");
    if !status.success() {
        panic!("ffmpeg exited with {status}");
    }

    std::fs::remove_dir_all(&frames_dir).expect("failed to remove animation frames directory");
}
