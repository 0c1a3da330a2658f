use gcp_core::prelude::*;

pub fn cmd() -> EmptyResult {
    print!("---\n{}", serde_yaml::to_string(&ControlPlane::crd())?);
    print!("---\n{}", serde_yaml::to_string(&ClusterResource::crd())?);

    Ok(())
}
