use gcp_api::shoot::{
    Cluster,
    SHOOT_API_VERSION,
    SHOOT_KIND,
    Shoot,
};
use gcp_api::v1alpha1::ClusterResource;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde_json::Value;

use crate::errors::*;
use crate::k8s::KubeResourceExt;

pub fn cluster_from_resource(res: &ClusterResource) -> anyhow::Result<Cluster> {
    let name = res.namespaced_name();
    let shoot_obj = match &res.spec.shoot {
        Some(RawExtension(obj @ Value::Object(_))) => obj,
        _ => bail!(ValuesError::decode_error(&format!("cluster {name} has no shoot"))),
    };

    // The shoot is serialized with its type metadata, but older hosts left it off so we only
    // complain if it's there and wrong.
    if let Some(kind) = shoot_obj.get("kind").and_then(Value::as_str)
        && kind != SHOOT_KIND
    {
        bail!(ValuesError::decode_error(&format!("cluster {name} embeds a {kind}, not a {SHOOT_KIND}")));
    }
    if let Some(api_version) = shoot_obj.get("apiVersion").and_then(Value::as_str)
        && api_version != SHOOT_API_VERSION
    {
        bail!(ValuesError::decode_error(&format!("cluster {name} embeds an unknown shoot version {api_version}")));
    }

    let shoot: Shoot = serde_json::from_value(shoot_obj.clone())
        .map_err(|e| ValuesError::decode_error(&format!("malformed shoot in cluster {name}: {e}")))?;
    Ok(Cluster { shoot })
}
