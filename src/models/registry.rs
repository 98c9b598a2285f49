//! Registry model and package-type enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

/// Package ecosystem of an artifact.
///
/// Closed set; stored rows carrying any other string are data-integrity
/// errors and fail validation with [`AppError::InvalidPackageType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "package_type", rename_all = "UPPERCASE")]
pub enum PackageType {
    Docker,
    Generic,
    Helm,
    Maven,
}

impl PackageType {
    /// Wire form of the package type, as stored and served.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docker => "DOCKER",
            Self::Generic => "GENERIC",
            Self::Helm => "HELM",
            Self::Maven => "MAVEN",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOCKER" => Ok(Self::Docker),
            "GENERIC" => Ok(Self::Generic),
            "HELM" => Ok(Self::Helm),
            "MAVEN" => Ok(Self::Maven),
            other => Err(AppError::InvalidPackageType(other.to_string())),
        }
    }
}

/// Registry entity
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registry {
    pub id: Uuid,
    pub name: String,
    pub package_type: PackageType,
}

/// OCI-style manifest for a versioned artifact.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Manifest {
    pub digest: String,
    pub total_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_type_round_trip() {
        for package_type in [
            PackageType::Docker,
            PackageType::Generic,
            PackageType::Helm,
            PackageType::Maven,
        ] {
            assert_eq!(package_type.as_str().parse::<PackageType>().unwrap(), package_type);
        }
    }

    #[test]
    fn test_package_type_rejects_unknown() {
        let err = "NPM".parse::<PackageType>().unwrap_err();
        assert!(matches!(err, AppError::InvalidPackageType(ref v) if v == "NPM"));
    }

    #[test]
    fn test_package_type_is_case_sensitive() {
        assert!("docker".parse::<PackageType>().is_err());
    }

    #[test]
    fn test_package_type_serializes_uppercase() {
        let json = serde_json::to_string(&PackageType::Maven).unwrap();
        assert_eq!(json, "\"MAVEN\"");
    }
}
