pub mod block_view_controller;

pub use block_view_controller::{is_tap, BlockViewController, TapOutcome, TickOutcome};
