use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::raw_extension_schema;

// The host writes one of these per shoot; everything in it is serialized verbatim from the
// corresponding garden objects, so the provider has to decode the pieces it cares about.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "extensions.gardener.cloud", version = "v1alpha1", kind = "Cluster")]
#[kube(root = "ClusterResource")]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "raw_extension_schema")]
    pub cloud_profile: Option<RawExtension>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "raw_extension_schema")]
    pub seed: Option<RawExtension>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "raw_extension_schema")]
    pub shoot: Option<RawExtension>,
}
