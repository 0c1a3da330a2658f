use std::collections::BTreeMap;

use gcp_api::provider::PROVIDER_API_VERSION;
use gcp_api::shoot::{
    Cluster,
    Kubernetes,
    Networking,
    SHOOT_API_VERSION,
    SHOOT_KIND,
    Shoot,
    ShootSpec,
    VerticalPodAutoscaler,
};
use gcp_api::v1alpha1::{
    ClusterResource,
    ClusterSpec,
    ControlPlane,
    ControlPlaneSpec,
    SecretReference,
};
use k8s_openapi::ByteString;
use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

pub fn test_control_plane_config() -> serde_json::Value {
    json!({
        "apiVersion": PROVIDER_API_VERSION,
        "kind": "ControlPlaneConfig",
        "zone": TEST_ZONE,
        "cloudControllerManager": {
            "featureGates": {TEST_FEATURE_GATE: true},
        },
    })
}

pub fn test_infrastructure_status() -> serde_json::Value {
    json!({
        "apiVersion": PROVIDER_API_VERSION,
        "kind": "InfrastructureStatus",
        "networks": {
            "vpc": {"name": TEST_VPC_NAME, "cloudRouter": {"name": "router-1234"}},
            "subnets": [
                {"name": TEST_NODES_SUBNET_NAME, "purpose": "nodes"},
                {"name": TEST_SUBNET_NAME, "purpose": "internal"},
            ],
        },
    })
}

#[fixture]
pub fn test_control_plane() -> ControlPlane {
    let mut cp = ControlPlane::new(
        TEST_CONTROL_PLANE_NAME,
        ControlPlaneSpec {
            type_: "gcp".into(),
            region: TEST_REGION.into(),
            secret_ref: SecretReference { name: TEST_SECRET_NAME.into(), namespace: Some(TEST_NAMESPACE.into()) },
            purpose: None,
            provider_config: Some(RawExtension(test_control_plane_config())),
            infrastructure_provider_status: Some(RawExtension(test_infrastructure_status())),
        },
    );
    cp.metadata.namespace = Some(TEST_NAMESPACE.into());
    cp
}

#[fixture]
pub fn test_shoot(#[default(TEST_K8S_VERSION_118)] version: &str, #[default(true)] vpa_enabled: bool) -> Shoot {
    Shoot {
        metadata: metav1::ObjectMeta {
            name: Some("shoot".into()),
            namespace: Some("garden-dev".into()),
            ..Default::default()
        },
        spec: ShootSpec {
            kubernetes: Kubernetes {
                version: version.into(),
                vertical_pod_autoscaler: Some(VerticalPodAutoscaler { enabled: vpa_enabled }),
            },
            networking: Networking {
                type_: Some("calico".into()),
                pods: Some(TEST_POD_CIDR.into()),
                ..Default::default()
            },
            region: Some(TEST_REGION.into()),
        },
    }
}

#[fixture]
pub fn test_cluster(#[default(TEST_K8S_VERSION_118)] version: &str, #[default(true)] vpa_enabled: bool) -> Cluster {
    Cluster { shoot: test_shoot(version, vpa_enabled) }
}

#[fixture]
pub fn test_cluster_resource(#[default(TEST_K8S_VERSION_118)] version: &str) -> ClusterResource {
    let mut shoot = serde_json::to_value(test_shoot(version, true)).unwrap();
    shoot["apiVersion"] = json!(SHOOT_API_VERSION);
    shoot["kind"] = json!(SHOOT_KIND);

    ClusterResource::new(
        TEST_NAMESPACE,
        ClusterSpec {
            cloud_profile: None,
            seed: None,
            shoot: Some(RawExtension(shoot)),
        },
    )
}

#[fixture]
pub fn test_provider_secret(#[default(TEST_PROJECT_ID)] project_id: &str) -> corev1::Secret {
    let service_account = json!({"project_id": project_id, "type": "service_account"}).to_string();
    corev1::Secret {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(TEST_SECRET_NAME.into()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([("serviceaccount.json".into(), ByteString(service_account.into_bytes()))])),
        ..Default::default()
    }
}

#[fixture]
pub fn test_checksums() -> BTreeMap<String, String> {
    TEST_CHECKSUMS.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
