use std::fmt;

use serde::{Deserialize, Serialize};

/// How a two-earner household is assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingMethod {
    /// Both incomes summed and taxed against the joint schedule.
    Joint,
    /// Each income taxed on its own against the individual schedule.
    Individual,
}

impl FilingMethod {
    pub fn all() -> &'static [FilingMethod] {
        &[FilingMethod::Joint, FilingMethod::Individual]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joint => "joint",
            Self::Individual => "individual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "joint" => Some(Self::Joint),
            "individual" => Some(Self::Individual),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Joint => "Joint Taxation",
            Self::Individual => "Individual Taxation",
        }
    }
}

impl fmt::Display for FilingMethod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
