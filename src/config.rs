use num_complex::Complex;

// data type: f64, matching the simulator's complex<double> output
pub type F = f64;

// complex data type consistent with F
pub type C = Complex<F>;

// per-step duration of the simulation output; every timestamp derives from it
pub const TIME_STEP: F = 5e-5;

// fraction of the grid width where the detection screen sits
pub const DETECTOR_POSITION: F = 0.8;

// demonstration frames for the real/imaginary comparison figure
pub const COMPARISON_FRAME_REAL: usize = 39;
pub const COMPARISON_FRAME_IMAG: usize = 45;

// every figure and video lands here
pub const FIGURES_DIR: &str = "figures";
