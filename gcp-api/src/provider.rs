use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

pub const PROVIDER_API_VERSION: &str = "gcp.provider.extensions.gardener.cloud/v1alpha1";

// Types that can show up embedded as a raw blob inside some other object (i.e., the
// providerConfig of a ControlPlane) and need to be registered with a scheme before decoding.
pub trait ProviderObject {
    const API_VERSION: &'static str;
    const KIND: &'static str;
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudControllerManagerConfig {
    pub feature_gates: Option<BTreeMap<String, bool>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneConfig {
    pub zone: String,
    pub cloud_controller_manager: Option<CloudControllerManagerConfig>,
}

impl ProviderObject for ControlPlaneConfig {
    const API_VERSION: &'static str = PROVIDER_API_VERSION;
    const KIND: &'static str = "ControlPlaneConfig";
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubnetPurpose {
    Internal,
    Nodes,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub name: String,
    pub purpose: SubnetPurpose,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudRouter {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vpc {
    pub name: String,
    pub cloud_router: Option<CloudRouter>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub vpc: Vpc,

    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    pub networks: NetworkStatus,
    pub service_account_email: Option<String>,
}

impl ProviderObject for InfrastructureStatus {
    const API_VERSION: &'static str = PROVIDER_API_VERSION;
    const KIND: &'static str = "InfrastructureStatus";
}
