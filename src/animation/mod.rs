pub mod driver;
pub mod scale_state;

pub use driver::AnimationDriver;
pub use scale_state::{ScaleState, ScaleUpdate, StartOutcome};
