//! Domain value objects: the CI/CD pipeline variant.
//!
//! Pure value types: `Copy`, equality-by-value, no identity, no I/O.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CicdType ──────────────────────────────────────────────────────────────────

/// CI/CD pipeline flavour merged into a generated project.
///
/// Each non-`None` variant maps to a `cicd/<name>/` subtree of the shared
/// assets directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CicdType {
    #[default]
    None,
    Azure,
    GitHub,
}

impl CicdType {
    pub const ALL: [Self; 3] = [Self::None, Self::Azure, Self::GitHub];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Azure => "azure",
            Self::GitHub => "github",
        }
    }

    /// Name of the asset directory under `<shared>/cicd/`, if any.
    pub const fn asset_dir(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            other => Some(other.as_str()),
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for CicdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CicdType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "azure" | "azure-pipelines" => Ok(Self::Azure),
            "github" | "gh" | "github-actions" => Ok(Self::GitHub),
            other => Err(DomainError::UnknownCicdType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Azure".parse::<CicdType>().unwrap(), CicdType::Azure);
        assert_eq!("GH".parse::<CicdType>().unwrap(), CicdType::GitHub);
        assert_eq!("".parse::<CicdType>().unwrap(), CicdType::None);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert_eq!(
            "jenkins".parse::<CicdType>(),
            Err(DomainError::UnknownCicdType("jenkins".into()))
        );
    }

    #[test]
    fn none_has_no_asset_dir() {
        assert_eq!(CicdType::None.asset_dir(), None);
        assert_eq!(CicdType::GitHub.asset_dir(), Some("github"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for variant in CicdType::ALL {
            assert_eq!(variant.to_string().parse::<CicdType>().unwrap(), variant);
        }
    }
}
