#[macro_use]
mod macros;
mod error;
mod tag_config;

pub use error::ConfigError;
pub use tag_config::TagConfig;
