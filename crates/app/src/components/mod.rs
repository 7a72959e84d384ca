pub mod expand_toggle;

pub use expand_toggle::*;
