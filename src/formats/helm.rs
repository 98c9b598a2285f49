//! Helm pull-command derivation.

use super::registry_host;

/// `helm pull` command for an OCI-hosted chart version.
pub fn pull_command(chart: &str, version: &str, registry_url: &str) -> String {
    format!(
        "helm pull oci://{}/{} --version {}",
        registry_host(registry_url),
        chart,
        version
    )
}
