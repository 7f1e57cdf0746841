// Average basis value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Numeric field averaged by the third KPI card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageBasis {
    #[default]
    Score,
    Amount,
}

impl AverageBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            AverageBasis::Score => "score",
            AverageBasis::Amount => "amount",
        }
    }
}

impl FromStr for AverageBasis {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(AverageBasis::Score),
            "amount" => Ok(AverageBasis::Amount),
            _ => Err(DomainError::InvalidAverageBasis(s.to_string())),
        }
    }
}

impl fmt::Display for AverageBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
