/*!
 * Configuration Module
 * Simulator configuration loading and validation
 */

pub mod parser;
pub mod types;

// Re-export public API
pub use parser::{load_config, parse_config, CONFIG_FOOTER, CONFIG_HEADER};
pub use types::{ConfigError, ConfigResult, LogTo, SimConfig};
