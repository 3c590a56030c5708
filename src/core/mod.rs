pub mod config;
pub mod constants;
pub mod error;

pub use config::{load_config, OddsConfig, ReportConfig};
pub use constants::CARD_TOTAL;
pub use error::{OddsError, Result};
