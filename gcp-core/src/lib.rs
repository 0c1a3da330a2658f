pub mod certs;
pub mod charts;
pub mod cluster;
pub mod constants;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod macros;
pub mod provider;
pub mod scheme;
pub mod secrets;
pub mod version;

pub mod prelude {
    pub use gcp_api::provider::{
        ControlPlaneConfig,
        InfrastructureStatus,
    };
    pub use gcp_api::shoot::Cluster;
    pub use gcp_api::v1alpha1::{
        ClusterResource,
        ControlPlane,
    };
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::{
        CustomResourceExt,
        ResourceExt,
    };
    pub use tokio_util::sync::CancellationToken;

    pub use crate::charts::{
        Checksums,
        Values,
    };
    pub use crate::constants::*;
    pub use crate::errors::{
        EmptyResult,
        ValuesError,
    };
    pub use crate::k8s::KubeResourceExt;
    pub use crate::provider::ValuesProvider;
}

#[cfg(test)]
mod tests;
