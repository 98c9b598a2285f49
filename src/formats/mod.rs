//! Ecosystem-specific command and path derivation.
//!
//! Everything the API layer displays about how to fetch an artifact comes
//! through here: the per-ecosystem pull command shown in listings, the
//! per-file download command, and the prefix-stripped display filename.

pub mod docker;
pub mod generic;
pub mod helm;
pub mod maven;

use crate::models::registry::PackageType;

/// A file resolved for display: prefix-stripped name plus the ecosystem
/// download command (empty for ecosystems without a file download path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub name: String,
    pub download_command: String,
}

/// Client command a user runs to pull `name`:`version` from the registry.
pub fn pull_command(
    name: &str,
    version: &str,
    package_type: PackageType,
    registry_url: &str,
) -> String {
    match package_type {
        PackageType::Docker => docker::pull_command(name, version, registry_url),
        PackageType::Helm => helm::pull_command(name, version, registry_url),
        PackageType::Maven => maven::pull_command(name, version, registry_url),
        PackageType::Generic => generic::pull_command(name, version, registry_url),
    }
}

/// Resolve a stored virtual file path into its display name and download
/// command.
///
/// The stored path begins with `/{artifact_name}/{version}/`; only the first
/// occurrence of that prefix is removed. A path without the prefix is kept
/// whole. For Maven the artifact name is a coordinate (`group.id:artifact`)
/// and is rewritten into directory form before the prefix is computed.
pub fn resolve_file(
    path: &str,
    artifact_name: &str,
    version: &str,
    package_type: PackageType,
    registry_url: &str,
) -> ResolvedFile {
    match package_type {
        PackageType::Maven => {
            let artifact_path = maven::coordinate_path(artifact_name);
            let name = strip_version_prefix(path, &artifact_path, version);
            let download_command =
                maven::download_command(registry_url, &artifact_path, version, &name);
            ResolvedFile {
                name,
                download_command,
            }
        }
        PackageType::Generic => {
            let name = strip_version_prefix(path, artifact_name, version);
            let download_command =
                generic::download_command(registry_url, artifact_name, version, &name);
            ResolvedFile {
                name,
                download_command,
            }
        }
        PackageType::Docker | PackageType::Helm => ResolvedFile {
            name: strip_version_prefix(path, artifact_name, version),
            download_command: String::new(),
        },
    }
}

/// Web link to a specific artifact version.
pub fn version_url(image: &str, version: &str, registry_url: &str) -> String {
    format!("{}/{}/version/{}", registry_url, image, version)
}

fn strip_version_prefix(path: &str, artifact_name: &str, version: &str) -> String {
    let prefix = format!("/{}/{}/", artifact_name, version);
    path.replacen(&prefix, "", 1)
}

/// Registry URL with its scheme stripped, as container tools expect.
pub(crate) fn registry_host(registry_url: &str) -> &str {
    registry_url
        .strip_prefix("https://")
        .or_else(|| registry_url.strip_prefix("http://"))
        .unwrap_or(registry_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_file_strips_prefix() {
        let file = resolve_file(
            "/foo/1.0/bar.jar",
            "foo",
            "1.0",
            PackageType::Generic,
            "https://pkg.example.com/acme/generic/raw",
        );
        assert_eq!(file.name, "bar.jar");
    }

    #[test]
    fn test_resolve_file_without_prefix_keeps_path() {
        let file = resolve_file(
            "/other/2.0/bar.jar",
            "foo",
            "1.0",
            PackageType::Generic,
            "https://pkg.example.com/acme/generic/raw",
        );
        assert_eq!(file.name, "/other/2.0/bar.jar");
    }

    #[test]
    fn test_resolve_file_maven_coordinate_rewrite() {
        let file = resolve_file(
            "/com/example/mylib/1.0/mylib-1.0.jar",
            "com.example:mylib",
            "1.0",
            PackageType::Maven,
            "https://pkg.example.com/acme/libs",
        );
        assert_eq!(file.name, "mylib-1.0.jar");
        assert_eq!(
            file.download_command,
            "curl --location 'https://pkg.example.com/acme/libs/com/example/mylib/1.0/mylib-1.0.jar' -O"
        );
    }

    #[test]
    fn test_resolve_file_docker_has_no_download_command() {
        let file = resolve_file(
            "/app/v1/manifest.json",
            "app",
            "v1",
            PackageType::Docker,
            "https://pkg.example.com/acme/images",
        );
        assert_eq!(file.name, "manifest.json");
        assert_eq!(file.download_command, "");
    }

    #[test]
    fn test_pull_command_dispatch() {
        let url = "https://pkg.example.com/acme/repo";
        assert!(pull_command("app", "v1", PackageType::Docker, url).starts_with("docker pull "));
        assert!(pull_command("app", "v1", PackageType::Helm, url).starts_with("helm pull oci://"));
        assert!(pull_command("lib", "1.0", PackageType::Maven, url).starts_with("mvn "));
        assert!(pull_command("raw", "1.0", PackageType::Generic, url).starts_with("curl "));
    }

    #[test]
    fn test_version_url() {
        assert_eq!(
            version_url("app", "v1", "https://pkg.example.com/acme/images"),
            "https://pkg.example.com/acme/images/app/version/v1"
        );
    }

    #[test]
    fn test_registry_host_strips_scheme() {
        assert_eq!(registry_host("https://pkg.example.com/acme"), "pkg.example.com/acme");
        assert_eq!(registry_host("http://localhost:8080/r"), "localhost:8080/r");
        assert_eq!(registry_host("pkg.example.com/acme"), "pkg.example.com/acme");
    }
}
