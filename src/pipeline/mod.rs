pub mod ascii;
pub mod binary;
pub mod classify;
pub mod stack;

pub use ascii::*;
pub use binary::*;
pub use classify::*;
pub use stack::*;
