//! Artifact, version, and file-node models.
//!
//! Read-only projections produced by the metadata store for a single
//! request. Aggregated artifact rows carry an already-validated
//! [`PackageType`]; per-version rows carry the raw stored string, validated
//! during mapping so one malformed row cannot abort a whole listing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::registry::PackageType;

/// Aggregated artifact row, one per image in a listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtifactMetadata {
    pub repo_name: String,
    pub name: String,
    pub version: String,
    pub package_type: PackageType,
    pub labels: Vec<String>,
    pub download_count: i64,
    pub latest_version: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// OCI tag row within a version listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagMetadata {
    pub name: String,
    pub size: i64,
    pub digest_count: i64,
    pub download_count: i64,
    pub modified_at: DateTime<Utc>,
    /// Raw stored value; validated during mapping.
    pub package_type: String,
}

/// Non-OCI version row (file-backed ecosystems).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NonOciArtifactMetadata {
    pub name: String,
    pub size: i64,
    pub file_count: i64,
    pub download_count: i64,
    pub modified_at: DateTime<Utc>,
    /// Raw stored value; validated during mapping.
    pub package_type: String,
}

/// Full tag row backing the Docker/Helm detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagDetail {
    pub image_name: String,
    pub name: String,
    pub download_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Image entity
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: Uuid,
    pub name: String,
}

/// A single stored version of an image.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtifactVersion {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single file within an artifact version.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FileNodeMetadata {
    /// Ecosystem-specific virtual path, e.g. `/mylib/1.0/mylib-1.0.jar`.
    pub path: String,
    pub size: i64,
    pub sha512: String,
    pub sha256: String,
    pub sha1: String,
    pub md5: String,
    pub created_at: DateTime<Utc>,
}
