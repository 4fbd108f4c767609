pub mod accel;
pub mod motion;
pub mod stoch;

pub use accel::*;
pub use motion::*;
pub use stoch::*;
