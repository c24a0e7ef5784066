pub mod animation;
pub mod engine;

pub use animation::{Anim, AnimSettings};
pub use engine::{Engine, Snapshot, StepConfig, StepTarget, Tracks};
