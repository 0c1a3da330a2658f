use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::raw_extension_schema;

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPlanePurpose {
    #[default]
    Normal,
    Exposure,
}

// The namespace defaults to the namespace of the ControlPlane object if it's not set
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    pub name: String,
    pub namespace: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "extensions.gardener.cloud", version = "v1alpha1", kind = "ControlPlane")]
#[kube(namespaced, shortname = "cp")]
#[kube(
    printcolumn = r#"{"name":"type", "type":"string", "description":"provider type", "jsonPath":".spec.type"}"#,
    printcolumn = r#"{"name":"purpose", "type":"string", "description":"control plane purpose", "jsonPath":".spec.purpose"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneSpec {
    // Required fields
    #[serde(rename = "type")]
    pub type_: String,
    pub region: String,
    pub secret_ref: SecretReference,

    // Optional fields
    pub purpose: Option<ControlPlanePurpose>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "raw_extension_schema")]
    pub provider_config: Option<RawExtension>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "raw_extension_schema")]
    pub infrastructure_provider_status: Option<RawExtension>,
}
