pub mod button;
pub mod collapsible;
pub mod separator;

pub use button::*;
pub use collapsible::*;
pub use separator::*;
