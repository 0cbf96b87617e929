pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod options;
pub mod plan;
pub mod render;
pub mod synth;
pub mod types;

pub use error::{GtmError, Result};
pub use input::{normalize, EnumMode, GtmInput};
pub use plan::GtmPlan;
pub use synth::generate_plan;
