use semver::{
    BuildMetadata,
    Version,
};

use crate::errors::*;

// Clusters at or above this version get the GCP CSI driver (and volume snapshots); below it we
// stick with the in-tree volume plugin.
pub const CSI_MIN_VERSION: Version = Version::new(1, 18, 0);

// Build metadata has no bearing on precedence, but the semver crate uses it as a tie-breaker in
// its Ord impl, so we strip it here.
pub fn parse_kubernetes_version(version: &str) -> anyhow::Result<Version> {
    let mut v = Version::parse(version).map_err(|e| ValuesError::version_error(&format!("{version}: {e}")))?;
    v.build = BuildMetadata::EMPTY;
    Ok(v)
}

pub fn csi_enabled(version: &str) -> anyhow::Result<bool> {
    Ok(parse_kubernetes_version(version)? >= CSI_MIN_VERSION)
}
