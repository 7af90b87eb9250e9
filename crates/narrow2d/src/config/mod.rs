//! Configuration for the narrow-phase algorithms
//!
//! The convergence tolerance and iteration bounds are explicit design
//! parameters, not derived values; they trade exactness for guaranteed
//! termination and are expected to be tuned per game.

pub use serde::{Serialize, Deserialize};

/// Configuration trait for loadable/savable settings
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tuning knobs for the GJK/EPA narrow phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowPhaseConfig {
    /// EPA convergence threshold, doubling as the outward bias added to
    /// the penetration vector so the same contact is not re-detected next
    /// tick from floating-point coincidence
    pub tolerance: f32,

    /// Iteration cap for the GJK simplex loop
    pub gjk_max_iterations: usize,

    /// Iteration cap for the EPA expansion loop
    pub epa_max_iterations: usize,

    /// Hard cap on EPA polytope vertices; exceeding it means the inputs
    /// are too close to degenerate for the algorithm
    pub max_polytope_points: usize,
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.001,
            gjk_max_iterations: 64,
            epa_max_iterations: 64,
            max_polytope_points: 64,
        }
    }
}

impl Config for NarrowPhaseConfig {}
