//! Asset store backend identifiers shared between configuration and the
//! storage crate.

use serde::{Deserialize, Serialize};

/// Which backend holds externally-stored assets (thumbnails).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetBackend {
    /// Remote media API reached over HTTP (production).
    Http,
    /// Local filesystem directory (development and tests).
    Local,
}

impl AssetBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetBackend::Http => "http",
            AssetBackend::Local => "local",
        }
    }
}

impl std::str::FromStr for AssetBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(AssetBackend::Http),
            "local" => Ok(AssetBackend::Local),
            other => Err(format!(
                "Unknown asset backend '{}', expected 'http' or 'local'",
                other
            )),
        }
    }
}

impl std::fmt::Display for AssetBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_round_trips_from_str() {
        assert_eq!("http".parse::<AssetBackend>().unwrap(), AssetBackend::Http);
        assert_eq!(
            "LOCAL".parse::<AssetBackend>().unwrap(),
            AssetBackend::Local
        );
        assert!("s3".parse::<AssetBackend>().is_err());
    }
}
