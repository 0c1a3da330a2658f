use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde_json::json;

use super::*;
use crate::cluster::*;
use crate::prelude::*;

#[rstest]
fn test_cluster_from_resource(test_cluster_resource: ClusterResource) {
    let cluster = cluster_from_resource(&test_cluster_resource).unwrap();
    assert_eq!(cluster, test_cluster(TEST_K8S_VERSION_118, true));
}

#[rstest]
fn test_cluster_from_resource_no_type_meta() {
    let mut res = test_cluster_resource(TEST_K8S_VERSION_PRE_118);
    res.spec.shoot = Some(RawExtension(json!({
        "spec": {"kubernetes": {"version": TEST_K8S_VERSION_PRE_118}},
    })));

    let cluster = cluster_from_resource(&res).unwrap();
    assert_eq!(cluster.kubernetes_version(), TEST_K8S_VERSION_PRE_118);
    assert_eq!(cluster.pod_network(), None);
    assert!(!cluster.shoot.vpa_enabled());
}

#[rstest]
#[case::absent(None)]
#[case::not_an_object(Some(RawExtension(json!("shoot"))))]
#[case::wrong_kind(Some(RawExtension(json!({"kind": "Seed", "spec": {"kubernetes": {"version": "1.18.0"}}}))))]
#[case::wrong_api_version(Some(RawExtension(json!({
    "apiVersion": "core.gardener.cloud/v1alpha1",
    "spec": {"kubernetes": {"version": "1.18.0"}},
}))))]
#[case::no_version(Some(RawExtension(json!({"spec": {"kubernetes": {}}}))))]
fn test_cluster_from_resource_bad(mut test_cluster_resource: ClusterResource, #[case] shoot: Option<RawExtension>) {
    test_cluster_resource.spec.shoot = shoot;
    let err = cluster_from_resource(&test_cluster_resource).unwrap_err();
    assert!(matches!(error_kind(&err), ValuesError::DecodeError(_)));
}
