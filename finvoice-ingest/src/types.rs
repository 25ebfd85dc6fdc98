use finvoice_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How amount and description are pulled out of an expense statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseStrategy {
    /// First numeral anywhere; "add" removed wherever it appears
    #[default]
    #[serde(rename = "general")]
    General,
    /// "add <description> <amount>" by token position, else General
    #[serde(rename = "strict")]
    Strict,
}

impl ParseStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            ParseStrategy::General => "general",
            ParseStrategy::Strict => "strict",
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParseStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(ParseStrategy::General),
            "strict" => Ok(ParseStrategy::Strict),
            other => Err(Error::invalid_input(format!(
                "unknown parse strategy '{other}'; use 'general' or 'strict'"
            ))),
        }
    }
}
