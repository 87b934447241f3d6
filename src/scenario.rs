use crate::config::{F, FIGURES_DIR};

/// Which barrier configuration the loaded data corresponds to.
///
/// The simulator names its output after the slit count, with a separate
/// file for the free-propagation baseline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Slits(u32),
    NoPotential,
}

impl Scenario {
    /// CLI convention: a negative selector means the baseline run.
    pub fn from_arg(selector: i32) -> Self {
        if selector >= 0 {
            Self::Slits(selector as u32)
        } else {
            Self::NoPotential
        }
    }

    /// Fragment used in every input and output file name.
    pub fn label(&self) -> String {
        match self {
            Self::Slits(count) => format!("{count}_slit(s)"),
            Self::NoPotential => String::from("no_potential"),
        }
    }

    /// Human-readable form for plot titles.
    pub fn title_label(&self) -> String {
        match self {
            Self::Slits(count) => format!("{count} slit(s)"),
            Self::NoPotential => String::from("no potential"),
        }
    }

    pub fn input_path(&self) -> String {
        format!("quantum_state_vec_{}.bin", self.label())
    }

    pub fn detection_path(&self) -> String {
        format!("{FIGURES_DIR}/particle_detection_{}.png", self.label())
    }

    pub fn detection_npy_path(&self) -> String {
        format!("{FIGURES_DIR}/particle_detection_{}.npy", self.label())
    }

    pub fn deviation_path(&self) -> String {
        format!("{FIGURES_DIR}/probability_deviation_{}.png", self.label())
    }

    pub fn deviation_npy_path(&self) -> String {
        format!("{FIGURES_DIR}/probability_deviation_{}.npy", self.label())
    }

    pub fn state_frame_path(&self, timestamp: F) -> String {
        format!("{FIGURES_DIR}/quantum_state_{}_at_t_{timestamp}.png", self.label())
    }

    pub fn comparison_path(&self, time_real: F, time_imag: F) -> String {
        format!(
            "{FIGURES_DIR}/comparison_real_{time_real}_imag_{time_imag}_{}.png",
            self.label()
        )
    }

    // the baseline animation has historically been named "no_slits"
    pub fn animation_path(&self) -> String {
        match self {
            Self::Slits(_) => {
                format!("{FIGURES_DIR}/probability_distribution_{}.mp4", self.label())
            }
            Self::NoPotential => format!("{FIGURES_DIR}/probability_distribution_no_slits.mp4"),
        }
    }
}
