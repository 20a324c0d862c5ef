//! Layer filter for ASS/SSA Dialogue lines.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Which Dialogue layers a retime applies to.
///
/// Built once per batch and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LayerSet {
    /// Every layer, including layers absent from the document.
    #[default]
    All,
    /// Only the listed layers.
    Only(BTreeSet<i64>),
}

impl LayerSet {
    /// Parse a layer list such as `"0,2,5"`.
    ///
    /// An empty string or `all` (any case) selects every layer. Any token
    /// that is not an integer rejects the whole list.
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let trimmed = spec.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let layers = trimmed
            .split(',')
            .map(|token| {
                token.trim().parse::<i64>().map_err(|_| ConfigError::InvalidLayers {
                    spec: spec.to_string(),
                    token: token.trim().to_string(),
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self::Only(layers))
    }

    /// Whether a Dialogue line on `layer` should be retimed.
    pub fn includes(&self, layer: i64) -> bool {
        match self {
            Self::All => true,
            Self::Only(layers) => layers.contains(&layer),
        }
    }
}

impl FromStr for LayerSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LayerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(layers) => {
                let list: Vec<String> = layers.iter().map(i64::to_string).collect();
                f.write_str(&list.join(","))
            }
        }
    }
}
