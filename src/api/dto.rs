//! Data Transfer Objects (DTOs) served by the registry metadata API.
//!
//! Every list endpoint shares one paginated envelope and every detail
//! endpoint shares one single-entity envelope, so the ceiling-division and
//! status-wrapping logic exists exactly once.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::registry::PackageType;

/// Fixed status tag carried by every successful response. Failure responses
/// are not constructed by this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
}

/// Paginated list envelope shared by every list endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub item_count: i64,
    pub page_count: i64,
    pub page_index: i64,
    pub page_size: i64,
    pub status: Status,
}

impl<T> ListResponse<T> {
    /// Wrap mapped items with pagination fields.
    pub fn new(items: Vec<T>, item_count: i64, page_index: i64, page_size: i64) -> Self {
        Self {
            items,
            item_count,
            page_count: page_count(item_count, page_size),
            page_index,
            page_size,
            status: Status::Success,
        }
    }
}

/// Single-entity envelope shared by every detail endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetailResponse<T> {
    pub data: T,
    pub status: Status,
}

impl<T> DetailResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            status: Status::Success,
        }
    }
}

/// Number of pages needed for `item_count` items at `page_size` per page.
///
/// A non-positive page size yields zero pages rather than faulting.
pub fn page_count(item_count: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    (item_count + page_size - 1) / page_size
}

/// One artifact row in a cross-registry listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtifactMetadata {
    pub registry_identifier: String,
    pub name: String,
    pub version: String,
    pub labels: Vec<String>,
    /// Epoch milliseconds.
    pub last_modified: String,
    pub package_type: PackageType,
    pub downloads_count: i64,
    pub pull_command: String,
}

/// One artifact row in a registry-scoped listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistryArtifactMetadata {
    pub registry_identifier: String,
    pub name: String,
    pub latest_version: String,
    pub labels: Vec<String>,
    /// Epoch milliseconds.
    pub last_modified: String,
    pub package_type: PackageType,
    pub downloads_count: i64,
}

/// One version row in an artifact version listing.
///
/// OCI versions carry a digest count, file-backed versions a file count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtifactVersionMetadata {
    pub package_type: PackageType,
    pub name: String,
    /// Human-readable size.
    pub size: String,
    /// Epoch milliseconds.
    pub last_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<i64>,
    pub pull_command: String,
    pub downloads_count: i64,
}

/// One file row in an artifact file listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FileDetail {
    pub name: String,
    /// Human-readable size.
    pub size: String,
    /// Exactly four entries, fixed order: SHA-512, SHA-256, SHA-1, MD5.
    pub checksums: Vec<String>,
    /// Epoch milliseconds.
    pub created_at: String,
    pub download_command: String,
}

/// Detail view for Maven and generic artifacts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtifactDetail {
    pub name: String,
    pub version: String,
    /// Epoch milliseconds.
    pub created_at: String,
    /// Epoch milliseconds.
    pub modified_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Detail view for Docker images.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DockerArtifactDetail {
    pub image_name: String,
    pub version: String,
    pub package_type: PackageType,
    /// Epoch milliseconds.
    pub created_at: String,
    /// Epoch milliseconds.
    pub modified_at: String,
    pub registry_path: String,
    pub pull_command: String,
    pub url: String,
    /// Human-readable size.
    pub size: String,
    pub downloads_count: i64,
}

/// Detail view for Helm charts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HelmArtifactDetail {
    pub artifact: String,
    pub version: String,
    pub package_type: PackageType,
    /// Epoch milliseconds.
    pub created_at: String,
    /// Epoch milliseconds.
    pub modified_at: String,
    pub registry_path: String,
    pub pull_command: String,
    pub url: String,
    /// Human-readable size.
    pub size: String,
    pub downloads_count: i64,
}

/// Artifact summary header.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtifactSummary {
    pub image_name: String,
    pub package_type: PackageType,
    pub labels: Vec<String>,
    pub downloads_count: i64,
    /// Epoch milliseconds.
    pub created_at: String,
    /// Epoch milliseconds.
    pub modified_at: String,
}

/// Artifact version summary header.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtifactVersionSummary {
    pub image_name: String,
    pub package_type: PackageType,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // page_count
    // -----------------------------------------------------------------------

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_page_count_exact_division() {
        assert_eq!(page_count(30, 10), 3);
    }

    #[test]
    fn test_page_count_zero_items() {
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_page_count_single_item() {
        assert_eq!(page_count(1, 10), 1);
    }

    #[test]
    fn test_page_count_non_positive_page_size() {
        assert_eq!(page_count(25, 0), 0);
        assert_eq!(page_count(25, -5), 0);
    }

    // -----------------------------------------------------------------------
    // Envelopes
    // -----------------------------------------------------------------------

    #[test]
    fn test_list_response_pagination_fields() {
        let response = ListResponse::new(vec!["a", "b"], 25, 2, 10);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.item_count, 25);
        assert_eq!(response.page_count, 3);
        assert_eq!(response.page_index, 2);
        assert_eq!(response.page_size, 10);
        assert_eq!(response.status, Status::Success);
    }

    #[test]
    fn test_list_response_serializes_status_literal() {
        let response = ListResponse::new(vec!["x".to_string()], 1, 0, 10);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["item_count"], 1);
        assert_eq!(json["items"][0], "x");
    }

    #[test]
    fn test_detail_response_wraps_entity() {
        let response = DetailResponse::new("entity");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], "entity");
        assert_eq!(json["status"], "SUCCESS");
    }
}
