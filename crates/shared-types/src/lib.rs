pub mod collapsible;
pub mod config;
pub mod error;
pub mod style;

pub use collapsible::*;
pub use config::*;
pub use error::*;
pub use style::*;
