//! Record-to-response mapping.
//!
//! Pure transformations from storage rows to the DTOs in [`crate::api::dto`].
//! List mappers tolerate malformed rows: a version row whose stored package
//! type fails validation is logged and dropped, and the remaining rows still
//! produce a successful (shorter) listing.

use crate::api::display;
use crate::api::dto;
use crate::formats;
use crate::models::artifact::{
    ArtifactMetadata, ArtifactVersion, FileNodeMetadata, Image, NonOciArtifactMetadata, TagDetail,
    TagMetadata,
};
use crate::models::registry::{Manifest, PackageType, Registry};
use crate::url::UrlProvider;

// ---------------------------------------------------------------------------
// Item mapping
// ---------------------------------------------------------------------------

/// Map artifact rows for a cross-registry listing, resolving each row's
/// registry URL through the provider.
pub fn artifact_metadata_list(
    artifacts: &[ArtifactMetadata],
    root_identifier: &str,
    urls: &dyn UrlProvider,
) -> Vec<dto::ArtifactMetadata> {
    artifacts
        .iter()
        .map(|artifact| {
            let registry_url = resolve_registry_url(artifact, root_identifier, urls);
            map_artifact(artifact, &registry_url)
        })
        .collect()
}

/// Generic packages are served under a dedicated `generic` path segment;
/// every other ecosystem uses the plain repository URL.
fn resolve_registry_url(
    artifact: &ArtifactMetadata,
    root_identifier: &str,
    urls: &dyn UrlProvider,
) -> String {
    match artifact.package_type {
        PackageType::Generic => {
            urls.registry_url(root_identifier, &["generic", &artifact.repo_name])
        }
        _ => urls.registry_url(root_identifier, &[&artifact.repo_name]),
    }
}

fn map_artifact(artifact: &ArtifactMetadata, registry_url: &str) -> dto::ArtifactMetadata {
    dto::ArtifactMetadata {
        registry_identifier: artifact.repo_name.clone(),
        name: artifact.name.clone(),
        version: artifact.version.clone(),
        labels: artifact.labels.clone(),
        last_modified: display::millis(artifact.modified_at),
        package_type: artifact.package_type,
        downloads_count: artifact.download_count,
        pull_command: formats::pull_command(
            &artifact.name,
            &artifact.version,
            artifact.package_type,
            registry_url,
        ),
    }
}

/// Map artifact rows for a registry-scoped listing.
pub fn registry_artifact_metadata_list(
    artifacts: &[ArtifactMetadata],
) -> Vec<dto::RegistryArtifactMetadata> {
    artifacts
        .iter()
        .map(|artifact| dto::RegistryArtifactMetadata {
            registry_identifier: artifact.repo_name.clone(),
            name: artifact.name.clone(),
            latest_version: artifact.latest_version.clone(),
            labels: artifact.labels.clone(),
            last_modified: display::millis(artifact.modified_at),
            package_type: artifact.package_type,
            downloads_count: artifact.download_count,
        })
        .collect()
}

/// Map OCI tag rows for a version listing, skipping rows with an invalid
/// stored package type.
pub fn tag_metadata_list(
    tags: &[TagMetadata],
    image: &str,
    registry_url: &str,
) -> Vec<dto::ArtifactVersionMetadata> {
    let mut versions = Vec::with_capacity(tags.len());
    for tag in tags {
        let package_type = match tag.package_type.parse::<PackageType>() {
            Ok(package_type) => package_type,
            Err(error) => {
                tracing::error!(
                    %error,
                    package_type = %tag.package_type,
                    tag = %tag.name,
                    "Skipping version with invalid package type"
                );
                continue;
            }
        };
        versions.push(dto::ArtifactVersionMetadata {
            package_type,
            name: tag.name.clone(),
            size: display::human_size(tag.size),
            last_modified: display::millis(tag.modified_at),
            digest_count: Some(tag.digest_count),
            file_count: None,
            pull_command: formats::pull_command(image, &tag.name, package_type, registry_url),
            downloads_count: tag.download_count,
        });
    }
    versions
}

/// Map non-OCI version rows for a version listing, with the same
/// skip-invalid tolerance as [`tag_metadata_list`].
pub fn non_oci_artifact_metadata_list(
    artifacts: &[NonOciArtifactMetadata],
    image: &str,
    registry_url: &str,
) -> Vec<dto::ArtifactVersionMetadata> {
    let mut versions = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let package_type = match artifact.package_type.parse::<PackageType>() {
            Ok(package_type) => package_type,
            Err(error) => {
                tracing::error!(
                    %error,
                    package_type = %artifact.package_type,
                    version = %artifact.name,
                    "Skipping version with invalid package type"
                );
                continue;
            }
        };
        versions.push(dto::ArtifactVersionMetadata {
            package_type,
            name: artifact.name.clone(),
            size: display::human_size(artifact.size),
            last_modified: display::millis(artifact.modified_at),
            digest_count: None,
            file_count: Some(artifact.file_count),
            pull_command: formats::pull_command(image, &artifact.name, package_type, registry_url),
            downloads_count: artifact.download_count,
        });
    }
    versions
}

/// Map file rows for a file listing.
pub fn file_detail_list(
    files: &[FileNodeMetadata],
    registry_url: &str,
    artifact_name: &str,
    version: &str,
    package_type: PackageType,
) -> Vec<dto::FileDetail> {
    files
        .iter()
        .map(|file| {
            let resolved =
                formats::resolve_file(&file.path, artifact_name, version, package_type, registry_url);
            dto::FileDetail {
                name: resolved.name,
                size: display::human_size(file.size),
                checksums: checksums(file),
                created_at: display::millis(file.created_at),
                download_command: resolved.download_command,
            }
        })
        .collect()
}

/// Labeled digests in fixed order: SHA-512, SHA-256, SHA-1, MD5. Empty
/// digests still produce their entry, so the list length is always four.
pub fn checksums(file: &FileNodeMetadata) -> Vec<String> {
    vec![
        format!("SHA-512: {}", file.sha512),
        format!("SHA-256: {}", file.sha256),
        format!("SHA-1: {}", file.sha1),
        format!("MD5: {}", file.md5),
    ]
}

// ---------------------------------------------------------------------------
// List responses
// ---------------------------------------------------------------------------

/// Cross-registry artifact listing.
pub fn all_artifacts_response(
    artifacts: &[ArtifactMetadata],
    item_count: i64,
    page_index: i64,
    page_size: i64,
    root_identifier: &str,
    urls: &dyn UrlProvider,
) -> dto::ListResponse<dto::ArtifactMetadata> {
    dto::ListResponse::new(
        artifact_metadata_list(artifacts, root_identifier, urls),
        item_count,
        page_index,
        page_size,
    )
}

/// Registry-scoped artifact listing.
pub fn registry_artifacts_response(
    artifacts: &[ArtifactMetadata],
    item_count: i64,
    page_index: i64,
    page_size: i64,
) -> dto::ListResponse<dto::RegistryArtifactMetadata> {
    dto::ListResponse::new(
        registry_artifact_metadata_list(artifacts),
        item_count,
        page_index,
        page_size,
    )
}

/// OCI version listing for one image.
pub fn artifact_versions_response(
    tags: &[TagMetadata],
    image: &str,
    item_count: i64,
    page_index: i64,
    page_size: i64,
    registry_url: &str,
) -> dto::ListResponse<dto::ArtifactVersionMetadata> {
    dto::ListResponse::new(
        tag_metadata_list(tags, image, registry_url),
        item_count,
        page_index,
        page_size,
    )
}

/// Non-OCI version listing for one image.
pub fn non_oci_artifact_versions_response(
    artifacts: &[NonOciArtifactMetadata],
    image: &str,
    item_count: i64,
    page_index: i64,
    page_size: i64,
    registry_url: &str,
) -> dto::ListResponse<dto::ArtifactVersionMetadata> {
    dto::ListResponse::new(
        non_oci_artifact_metadata_list(artifacts, image, registry_url),
        item_count,
        page_index,
        page_size,
    )
}

/// Label listing for one artifact.
pub fn artifact_labels_response(
    labels: Vec<String>,
    item_count: i64,
    page_index: i64,
    page_size: i64,
) -> dto::ListResponse<String> {
    dto::ListResponse::new(labels, item_count, page_index, page_size)
}

/// File listing for one artifact version.
#[allow(clippy::too_many_arguments)]
pub fn artifact_files_response(
    files: &[FileNodeMetadata],
    item_count: i64,
    page_index: i64,
    page_size: i64,
    registry_url: &str,
    artifact_name: &str,
    version: &str,
    package_type: PackageType,
) -> dto::ListResponse<dto::FileDetail> {
    dto::ListResponse::new(
        file_detail_list(files, registry_url, artifact_name, version, package_type),
        item_count,
        page_index,
        page_size,
    )
}

// ---------------------------------------------------------------------------
// Detail responses
// ---------------------------------------------------------------------------

/// Docker image detail view.
pub fn docker_artifact_detail_response(
    registry: &Registry,
    tag: &TagDetail,
    manifest: &Manifest,
    registry_url: &str,
) -> dto::DetailResponse<dto::DockerArtifactDetail> {
    dto::DetailResponse::new(dto::DockerArtifactDetail {
        image_name: tag.image_name.clone(),
        version: tag.name.clone(),
        package_type: registry.package_type,
        created_at: display::millis(tag.created_at),
        modified_at: display::millis(tag.updated_at),
        registry_path: registry_path(&registry.name, &tag.image_name, &manifest.digest),
        pull_command: formats::docker::pull_command(&tag.image_name, &tag.name, registry_url),
        url: formats::version_url(&tag.image_name, &tag.name, registry_url),
        size: display::human_size(manifest.total_size),
        downloads_count: tag.download_count,
    })
}

/// Helm chart detail view.
pub fn helm_artifact_detail_response(
    registry: &Registry,
    tag: &TagDetail,
    manifest: &Manifest,
    registry_url: &str,
) -> dto::DetailResponse<dto::HelmArtifactDetail> {
    dto::DetailResponse::new(dto::HelmArtifactDetail {
        artifact: tag.image_name.clone(),
        version: tag.name.clone(),
        package_type: registry.package_type,
        created_at: display::millis(tag.created_at),
        modified_at: display::millis(tag.updated_at),
        registry_path: registry_path(&registry.name, &tag.image_name, &manifest.digest),
        pull_command: formats::helm::pull_command(&tag.image_name, &tag.name, registry_url),
        url: formats::version_url(&tag.image_name, &tag.name, registry_url),
        size: display::human_size(manifest.total_size),
        downloads_count: tag.download_count,
    })
}

/// Maven artifact detail view, sized as the sum of its file nodes.
pub fn maven_artifact_detail_response(
    image: &Image,
    version: &ArtifactVersion,
    files: &[FileNodeMetadata],
) -> dto::DetailResponse<dto::ArtifactDetail> {
    let total_size: i64 = files.iter().map(|file| file.size).sum();
    dto::DetailResponse::new(dto::ArtifactDetail {
        name: image.name.clone(),
        version: version.version.clone(),
        created_at: display::millis(version.created_at),
        modified_at: display::millis(version.updated_at),
        size: Some(display::human_size(total_size)),
        description: None,
    })
}

/// Generic artifact detail view, carrying an optional description instead
/// of a size.
pub fn generic_artifact_detail_response(
    image: &Image,
    version: &ArtifactVersion,
    description: Option<String>,
) -> dto::DetailResponse<dto::ArtifactDetail> {
    dto::DetailResponse::new(dto::ArtifactDetail {
        name: image.name.clone(),
        version: version.version.clone(),
        created_at: display::millis(version.created_at),
        modified_at: display::millis(version.updated_at),
        size: None,
        description,
    })
}

/// Artifact summary header.
pub fn artifact_summary_response(
    artifact: &ArtifactMetadata,
) -> dto::DetailResponse<dto::ArtifactSummary> {
    dto::DetailResponse::new(dto::ArtifactSummary {
        image_name: artifact.name.clone(),
        package_type: artifact.package_type,
        labels: artifact.labels.clone(),
        downloads_count: artifact.download_count,
        created_at: display::millis(artifact.created_at),
        modified_at: display::millis(artifact.modified_at),
    })
}

/// Artifact version summary header.
pub fn artifact_version_summary_response(
    artifact_name: &str,
    package_type: PackageType,
    version: &str,
) -> dto::DetailResponse<dto::ArtifactVersionSummary> {
    dto::DetailResponse::new(dto::ArtifactVersionSummary {
        image_name: artifact_name.to_string(),
        package_type,
        version: version.to_string(),
    })
}

/// Registry-relative path shown in the Docker/Helm detail views.
fn registry_path(registry: &str, image: &str, digest: &str) -> String {
    format!("{}/{}/{}", registry, image, digest)
}
