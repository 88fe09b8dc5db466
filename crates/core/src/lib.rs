pub mod config;
pub mod error;
pub mod interaction;

pub use config::*;
pub use error::*;
pub use interaction::*;
