// The goalie itself, plus a headless arena to play it in.

pub mod engine;
pub use engine::*;

#[cfg(feature = "arena")]
pub mod arena;
