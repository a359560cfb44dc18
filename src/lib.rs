pub mod config;
pub mod error;
pub mod gray_scott_model;
pub mod laplacian;
pub mod model_presets;
pub mod parameter_patterns;
pub mod progress;
pub mod seed;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use error::GridError;
pub use gray_scott_model::{Cell, ChemicalSpecies, Grid};
pub use parameter_patterns::{ParameterField, ParameterPattern};
