//! Maven command and path derivation.
//!
//! Maven artifacts are stored under the repository layout
//! `group/id/artifact/version/file`, while listings identify them by
//! coordinate (`group.id:artifact`). The rewrite between the two is the
//! only name mangling in the mapping layer.

/// Rewrite a Maven coordinate (`group.id:artifact`) into the directory
/// form used by stored file paths.
pub fn coordinate_path(artifact_name: &str) -> String {
    artifact_name.replace('.', "/").replace(':', "/")
}

/// `mvn dependency:get` command resolving the artifact from this registry.
pub fn pull_command(artifact_name: &str, version: &str, registry_url: &str) -> String {
    format!(
        "mvn dependency:get -DremoteRepositories={} -Dartifact={}:{}",
        registry_url, artifact_name, version
    )
}

/// Download command for one file of a Maven artifact version.
///
/// `artifact_path` is the already-rewritten directory form of the
/// coordinate.
pub fn download_command(
    registry_url: &str,
    artifact_path: &str,
    version: &str,
    filename: &str,
) -> String {
    format!(
        "curl --location '{}/{}/{}/{}' -O",
        registry_url, artifact_path, version, filename
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_path() {
        assert_eq!(coordinate_path("com.example:mylib"), "com/example/mylib");
    }

    #[test]
    fn test_coordinate_path_without_group_separator() {
        assert_eq!(coordinate_path("mylib"), "mylib");
    }

    #[test]
    fn test_pull_command() {
        assert_eq!(
            pull_command("com.example:mylib", "1.0", "https://pkg.example.com/acme/libs"),
            "mvn dependency:get -DremoteRepositories=https://pkg.example.com/acme/libs \
             -Dartifact=com.example:mylib:1.0"
        );
    }

    #[test]
    fn test_download_command() {
        assert_eq!(
            download_command(
                "https://pkg.example.com/acme/libs",
                "com/example/mylib",
                "1.0",
                "mylib-1.0.pom"
            ),
            "curl --location 'https://pkg.example.com/acme/libs/com/example/mylib/1.0/mylib-1.0.pom' -O"
        );
    }
}
