use gcp_api::provider::*;
use serde_json::json;

use super::*;
use crate::charts::*;
use crate::prelude::*;

#[fixture]
fn cp_config() -> ControlPlaneConfig {
    serde_json::from_value(test_control_plane_config()).unwrap()
}

#[fixture]
fn infra_status() -> InfrastructureStatus {
    serde_json::from_value(test_infrastructure_status()).unwrap()
}

fn inputs<'a>(checksums: &'a Checksums, scaled_down: bool, csi_enabled: bool) -> ControlPlaneChartInputs<'a> {
    ControlPlaneChartInputs {
        namespace: TEST_NAMESPACE,
        project_id: TEST_PROJECT_ID,
        checksums,
        scaled_down,
        csi_enabled,
    }
}

#[rstest]
fn test_checksum_annotations(test_checksums: Checksums) {
    let annotations = checksum_annotations(
        &test_checksums,
        &[CLOUD_PROVIDER_SECRET_NAME],
        &[CLOUD_PROVIDER_CONFIG_NAME],
    )
    .unwrap();

    assert_eq!(
        json!(annotations),
        json!({
            "checksum/secret-cloudprovider": test_checksums[CLOUD_PROVIDER_SECRET_NAME],
            "checksum/configmap-cloud-provider-config": test_checksums[CLOUD_PROVIDER_CONFIG_NAME],
        })
    );
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
fn test_checksum_annotations_missing(mut test_checksums: Checksums, #[case] replacement: Option<&str>) {
    match replacement {
        Some(sum) => test_checksums.insert(CSI_RESIZER_NAME.into(), sum.into()),
        None => test_checksums.remove(CSI_RESIZER_NAME),
    };

    let err = checksum_annotations(&test_checksums, &[CSI_ATTACHER_NAME, CSI_RESIZER_NAME], &[]).unwrap_err();
    assert!(matches!(error_kind(&err), ValuesError::MissingChecksum(name) if name == CSI_RESIZER_NAME));
}

#[rstest]
fn test_internal_subnet_none(mut infra_status: InfrastructureStatus) {
    infra_status.networks.subnets.retain(|s| s.purpose != SubnetPurpose::Internal);
    assert_eq!(internal_subnet(&infra_status).unwrap(), None);

    let values = config_chart_values(&cp_config(), &infra_status, TEST_NAMESPACE, TEST_PROJECT_ID).unwrap();
    assert_eq!(values["subNetworkName"], json!(""));
}

#[rstest]
fn test_internal_subnet_multiple(mut infra_status: InfrastructureStatus) {
    infra_status
        .networks
        .subnets
        .push(Subnet { name: "subnet-other".into(), purpose: SubnetPurpose::Internal });

    let err = internal_subnet(&infra_status).unwrap_err();
    assert!(matches!(error_kind(&err), ValuesError::DecodeError(_)));
}

#[rstest]
fn test_ccm_chart_values_no_feature_gates(mut cp_config: ControlPlaneConfig, test_checksums: Checksums) {
    cp_config.cloud_controller_manager = None;
    let cluster = test_cluster(TEST_K8S_VERSION_118, false);

    let values = ccm_chart_values(&cp_config, &cluster, &inputs(&test_checksums, false, true)).unwrap();
    assert!(!values.contains_key("featureGates"));
}

#[rstest]
fn test_ccm_chart_values_no_pod_network(cp_config: ControlPlaneConfig, test_checksums: Checksums) {
    let mut cluster = test_cluster(TEST_K8S_VERSION_118, false);
    cluster.shoot.spec.networking.pods = None;

    let err = ccm_chart_values(&cp_config, &cluster, &inputs(&test_checksums, false, true)).unwrap_err();
    assert!(matches!(error_kind(&err), ValuesError::MissingField(_)));
}

#[rstest]
fn test_control_plane_chart_values_scaled_down(cp_config: ControlPlaneConfig, test_checksums: Checksums) {
    let cluster = test_cluster(TEST_K8S_VERSION_118, true);

    let values = control_plane_chart_values(&cp_config, &cluster, &inputs(&test_checksums, true, true)).unwrap();
    assert_eq!(values[CLOUD_CONTROLLER_MANAGER_NAME]["replicas"], json!(0));
    assert_eq!(values[CSI_CONTROLLER_NAME]["replicas"], json!(0));
    assert_eq!(values[CSI_CONTROLLER_NAME]["csiSnapshotController"]["replicas"], json!(0));
}

#[rstest]
fn test_control_plane_chart_values_csi_disabled_skips_csi_checksums(
    cp_config: ControlPlaneConfig,
    mut test_checksums: Checksums,
) {
    test_checksums.retain(|k, _| !k.starts_with("csi-"));
    let cluster = test_cluster(TEST_K8S_VERSION_PRE_118, true);

    let values = control_plane_chart_values(&cp_config, &cluster, &inputs(&test_checksums, false, false)).unwrap();
    assert_eq!(values[CSI_CONTROLLER_NAME], json!({"enabled": false}));
}

// Every annotation value anywhere in the tree has to be one of the checksums we were given
#[rstest]
fn test_control_plane_chart_values_annotations_from_checksums(
    cp_config: ControlPlaneConfig,
    test_checksums: Checksums,
) {
    let cluster = test_cluster(TEST_K8S_VERSION_118, true);
    let values = control_plane_chart_values(&cp_config, &cluster, &inputs(&test_checksums, false, true)).unwrap();

    let all_annotations = [
        &values[CLOUD_CONTROLLER_MANAGER_NAME]["podAnnotations"],
        &values[CSI_CONTROLLER_NAME]["podAnnotations"],
        &values[CSI_CONTROLLER_NAME]["csiSnapshotController"]["podAnnotations"],
    ];
    let mut count = 0;
    for annotations in all_annotations {
        for (key, sum) in annotations.as_object().unwrap() {
            let name = key
                .strip_prefix(CHECKSUM_SECRET_PREFIX)
                .or_else(|| key.strip_prefix(CHECKSUM_CONFIGMAP_PREFIX))
                .unwrap();
            assert_eq!(sum, &json!(test_checksums[name]));
            count += 1;
        }
    }
    assert_eq!(count, 10);
}

#[rstest]
#[case::vpa_on(true)]
#[case::vpa_off(false)]
fn test_shoot_chart_values_vpa(#[case] vpa_enabled: bool) {
    let cluster = test_cluster(TEST_K8S_VERSION_118, vpa_enabled);
    let values = shoot_chart_values(&cluster, true);
    assert_eq!(values[CSI_NODE_NAME]["vpaEnabled"], json!(vpa_enabled));
}

#[rstest]
fn test_replicas() {
    assert_eq!(replicas(true), 0);
    assert_eq!(replicas(false), 1);
}
