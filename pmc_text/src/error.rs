use crate::config::ConfigError;
use crate::europepmc::error::EuropePmcError;
use crate::sanitizer::error::SanitizerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PmcTextError {
    #[error("Sanitizer failed: {0}")]
    Sanitizer(#[from] SanitizerError),
    #[error("Config failed: {0}")]
    Config(#[from] ConfigError),
    #[error("Europe PMC failed: {0}")]
    EuropePmc(#[from] EuropePmcError),
}
