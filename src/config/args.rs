use crate::core::ConfigProvider;
use crate::utils::error::{RankError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "garage-rank")]
#[command(about = "Rank your vehicles by performance, value and total cost")]
pub struct CliConfig {
    #[arg(long, help = "Vehicle export file (.json or .csv)")]
    pub input: Option<String>,

    #[arg(long, help = "Vehicle API endpoint returning a JSON array")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "Only rank vehicles belonging to this owner")]
    pub owner_id: Option<u64>,

    #[arg(long, default_value = "3")]
    pub top_n: usize,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Bundle all outputs into rankings.zip")]
    pub compress: bool,

    #[arg(long, help = "Print the vehicle list ordered by horsepower")]
    pub list: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Where the vehicles come from, picked from `--input` / `--api-endpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    File(&'a str),
    Api(&'a str),
}

impl CliConfig {
    pub fn input_source(&self) -> Result<InputSource<'_>> {
        match (&self.input, &self.api_endpoint) {
            (Some(path), None) => Ok(InputSource::File(path)),
            (None, Some(endpoint)) => Ok(InputSource::Api(endpoint)),
            (Some(_), Some(_)) => Err(RankError::ConfigError {
                message: "Use either --input or --api-endpoint, not both".to_string(),
            }),
            (None, None) => Err(RankError::MissingConfigError {
                field: "--input or --api-endpoint".to_string(),
            }),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn owner_id(&self) -> Option<u64> {
        self.owner_id
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn compress_output(&self) -> bool {
        self.compress
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.input_source()? {
            InputSource::File(path) => validation::validate_path("input", path)?,
            InputSource::Api(endpoint) => validation::validate_url("api_endpoint", endpoint)?,
        }

        validation::validate_positive_number("top_n", self.top_n, 1)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["garage-rank", "--input", "cars.json"]);

        assert_eq!(config.top_n, 3);
        assert_eq!(config.output_path, "./output");
        assert_eq!(config.formats, vec!["json".to_string()]);
        assert!(!config.compress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_format_list() {
        let config = CliConfig::parse_from([
            "garage-rank",
            "--api-endpoint",
            "https://cars.example.com/vehicles",
            "--owner-id",
            "42",
            "--formats",
            "csv,tsv",
            "--top-n",
            "1",
        ]);

        assert_eq!(config.owner_id, Some(42));
        assert_eq!(config.formats, vec!["csv".to_string(), "tsv".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_must_be_unique() {
        let neither = CliConfig::parse_from(["garage-rank"]);
        assert!(matches!(
            neither.validate(),
            Err(RankError::MissingConfigError { .. })
        ));

        let both = CliConfig::parse_from([
            "garage-rank",
            "--input",
            "cars.csv",
            "--api-endpoint",
            "https://cars.example.com",
        ]);
        assert!(both.validate().is_err());
    }

    #[test]
    fn test_input_source_selection() {
        let file = CliConfig::parse_from(["garage-rank", "--input", "cars.csv"]);
        assert_eq!(file.input_source().unwrap(), InputSource::File("cars.csv"));

        let api = CliConfig::parse_from(["garage-rank", "--api-endpoint", "https://cars.example.com"]);
        assert_eq!(
            api.input_source().unwrap(),
            InputSource::Api("https://cars.example.com")
        );

        let neither = CliConfig::parse_from(["garage-rank"]);
        assert!(matches!(
            neither.input_source(),
            Err(RankError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_zero_top_n_fails_validation() {
        let config = CliConfig::parse_from(["garage-rank", "--input", "cars.csv", "--top-n", "0"]);
        assert!(config.validate().is_err());
    }
}
