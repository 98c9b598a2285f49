//! Generic-package command derivation.
//!
//! Generic downloads address a file as `artifact:version:filename` on the
//! registry's generic route.

/// Pull command shown in listings, where the concrete file is not yet
/// known; carries a literal `<FILENAME>` placeholder for the user to fill.
pub fn pull_command(artifact: &str, version: &str, registry_url: &str) -> String {
    download_command(registry_url, artifact, version, "<FILENAME>")
}

/// Download command for one file of a generic artifact version.
pub fn download_command(
    registry_url: &str,
    artifact: &str,
    version: &str,
    filename: &str,
) -> String {
    format!(
        "curl --location '{}/{}:{}:{}' -J -O",
        registry_url, artifact, version, filename
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_command() {
        assert_eq!(
            download_command("https://pkg.example.com/acme/generic/raw", "bundle", "1.0", "bundle.tgz"),
            "curl --location 'https://pkg.example.com/acme/generic/raw/bundle:1.0:bundle.tgz' -J -O"
        );
    }

    #[test]
    fn test_pull_command_uses_placeholder() {
        assert_eq!(
            pull_command("bundle", "1.0", "https://pkg.example.com/acme/generic/raw"),
            "curl --location 'https://pkg.example.com/acme/generic/raw/bundle:1.0:<FILENAME>' -J -O"
        );
    }
}
