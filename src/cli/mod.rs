pub mod analyze;
pub mod bits;
pub mod hexdump;
pub mod input;
pub mod visible;

pub use analyze::*;
pub use bits::*;
pub use hexdump::*;
pub use input::*;
pub use visible::*;
