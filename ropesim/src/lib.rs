pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{ConfigError, RopeError, StateError};

pub use simulation::states::{Particle, ParticleState, NVec2};
pub use simulation::params::{SimulationConstants, MIN_SEGMENT_LENGTH};
pub use simulation::forces::{Force, ForceSet, SpringDamper, UniformGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, RopeConfig, ParametersConfig, WindowConfig};

pub use visualization::adapters::{FrameInput, FrameReport, InputAdapter, RenderAdapter, run_frames};
pub use visualization::headless::{run_headless, ScriptedInput, TraceRenderer};
pub use visualization::rope_vis2d::run_2d;

pub use benchmark::benchmark::{bench_substeps, bench_spring_forces};
