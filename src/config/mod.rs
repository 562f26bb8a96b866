//! CLI configuration

use std::path::PathBuf;

use clap::Parser;

use crate::{config::observability::LoggingConfig, session::CartCommand};

pub mod observability;

/// Tally CLI configuration
#[derive(Debug, Parser)]
#[command(
    name = "tally",
    about = "Replay a shopping session against a product catalog",
    long_about = None
)]
pub struct CliConfig {
    /// Directory containing the `products/` fixtures
    #[arg(long, env = "TALLY_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Catalog fixture name (without extension)
    #[arg(short, long, env = "TALLY_CATALOG", default_value = "store")]
    pub catalog: String,

    /// Print the catalog instead of replaying commands
    #[arg(long)]
    pub list: bool,

    /// Check out the cart after replaying commands
    #[arg(long)]
    pub checkout: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Cart commands: add:ID[:N], remove:ID, inc:ID, dec:ID, clear
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<CartCommand>,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::observability::LogFormat;

    use super::*;

    #[test]
    fn parses_commands_and_defaults() -> TestResult {
        let config =
            CliConfig::try_parse_from(["tally", "--catalog", "demo", "add:1", "add:2:3", "dec:1"])?;

        assert_eq!(config.catalog, "demo");
        assert_eq!(config.commands.len(), 3);
        assert!(!config.list);
        assert!(!config.checkout);
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn rejects_malformed_command() {
        let result = CliConfig::try_parse_from(["tally", "add:1:0"]);

        assert!(result.is_err());
    }

    #[test]
    fn parses_json_log_format() -> TestResult {
        let config = CliConfig::try_parse_from(["tally", "--list", "--log-format", "json"])?;

        assert!(config.list);
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }
}
