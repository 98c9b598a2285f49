//! Docker pull-command derivation.

use super::registry_host;

/// `docker pull` command for an image tag.
pub fn pull_command(image: &str, tag: &str, registry_url: &str) -> String {
    format!(
        "docker pull {}/{}:{}",
        registry_host(registry_url),
        image,
        tag
    )
}
