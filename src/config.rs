use clap::Parser;
use std::path::{Path, PathBuf};

/// Trait for reading configuration parameters
pub trait Config {
    /// Input file, or `None` to read standard input
    fn input_path(&self) -> Option<&Path>;
}

/// CLI configuration
#[derive(Parser, Debug)]
#[command(
    name = "account-authorizer",
    about = "Authorizes account operations read as JSON lines",
    version
)]
pub struct CliConfig {
    /// Path to the input file with one JSON operation per line; standard input when omitted
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,
}

impl Config for CliConfig {
    fn input_path(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_is_optional() {
        let config = CliConfig::try_parse_from(["account-authorizer"]).unwrap();
        assert_eq!(config.input_path(), None);

        let config = CliConfig::try_parse_from(["account-authorizer", "operations"]).unwrap();
        assert_eq!(config.input_path(), Some(Path::new("operations")));
    }
}
