#![forbid(unsafe_code)]

pub mod calculator;
pub mod error;
pub mod model;
pub mod navigation;
pub mod time;

pub use error::Error;
pub use navigation::{LinkStyle, NavigationContext};
pub use time::Clock;
