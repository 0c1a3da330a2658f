use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use serde::{
    Deserialize,
    Serialize,
};

// Only the bits of the core.gardener.cloud/v1beta1 Shoot that the provider actually reads are
// modeled here; everything else in the serialized object is ignored on decode.
pub const SHOOT_API_VERSION: &str = "core.gardener.cloud/v1beta1";
pub const SHOOT_KIND: &str = "Shoot";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalPodAutoscaler {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kubernetes {
    pub version: String,
    pub vertical_pod_autoscaler: Option<VerticalPodAutoscaler>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Networking {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub pods: Option<String>,
    pub nodes: Option<String>,
    pub services: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootSpec {
    pub kubernetes: Kubernetes,

    #[serde(default)]
    pub networking: Networking,
    pub region: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoot {
    #[serde(default)]
    pub metadata: metav1::ObjectMeta,
    pub spec: ShootSpec,
}

impl Shoot {
    pub fn vpa_enabled(&self) -> bool {
        self.spec
            .kubernetes
            .vertical_pod_autoscaler
            .as_ref()
            .is_some_and(|vpa| vpa.enabled)
    }
}

// Decoded view of a Cluster resource; this is what the values provider works against.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub shoot: Shoot,
}

impl Cluster {
    pub fn kubernetes_version(&self) -> &str {
        &self.shoot.spec.kubernetes.version
    }

    pub fn pod_network(&self) -> Option<&str> {
        self.shoot.spec.networking.pods.as_deref()
    }
}
