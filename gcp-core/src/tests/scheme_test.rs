use assertables::*;
use gcp_api::provider::*;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde_json::json;

use super::*;
use crate::scheme::*;

#[fixture]
fn scheme() -> Scheme {
    Scheme::with_provider_types()
}

#[rstest]
fn test_decode_control_plane_config(scheme: Scheme) {
    let raw = RawExtension(test_control_plane_config());
    let config: ControlPlaneConfig = scheme.decode(Some(&raw)).unwrap();

    assert_eq!(config.zone, TEST_ZONE);
    let gates = config.cloud_controller_manager.unwrap().feature_gates.unwrap();
    assert_eq!(gates.get(TEST_FEATURE_GATE), Some(&true));
}

#[rstest]
fn test_decode_infrastructure_status(scheme: Scheme) {
    let raw = RawExtension(test_infrastructure_status());
    let status: InfrastructureStatus = scheme.decode(Some(&raw)).unwrap();

    assert_eq!(status.networks.vpc.name, TEST_VPC_NAME);
    assert_eq!(status.networks.subnets.len(), 2);
    assert_eq!(status.networks.subnets[1].purpose, SubnetPurpose::Internal);
}

#[rstest]
fn test_decode_no_type_meta(scheme: Scheme) {
    let raw = RawExtension(json!({"zone": TEST_ZONE}));
    let config: ControlPlaneConfig = scheme.decode(Some(&raw)).unwrap();
    assert_eq!(config.zone, TEST_ZONE);
    assert_none!(config.cloud_controller_manager);
}

#[rstest]
fn test_decode_unregistered() {
    let mut scheme = Scheme::new();
    scheme.register::<InfrastructureStatus>();
    assert!(!scheme.is_registered::<ControlPlaneConfig>());

    let raw = RawExtension(test_control_plane_config());
    let err = scheme.decode::<ControlPlaneConfig>(Some(&raw)).unwrap_err();
    assert!(matches!(error_kind(&err), ValuesError::DecodeError(_)));
}

#[rstest]
#[case::absent(None)]
#[case::null(Some(RawExtension(json!(null))))]
#[case::not_an_object(Some(RawExtension(json!(["zone"]))))]
#[case::wrong_kind(Some(RawExtension(test_infrastructure_status())))]
#[case::wrong_api_version(Some(RawExtension(json!({"apiVersion": "gcp.provider.extensions.gardener.cloud/v2", "zone": "z"}))))]
#[case::non_string_kind(Some(RawExtension(json!({"kind": 42, "zone": "z"}))))]
#[case::missing_zone(Some(RawExtension(json!({"kind": "ControlPlaneConfig"}))))]
#[case::wrong_field_type(Some(RawExtension(json!({"zone": 17}))))]
fn test_decode_control_plane_config_bad(scheme: Scheme, #[case] raw: Option<RawExtension>) {
    let err = scheme.decode::<ControlPlaneConfig>(raw.as_ref()).unwrap_err();
    assert!(matches!(error_kind(&err), ValuesError::DecodeError(_)));
}
