use std::collections::BTreeMap;

use gcp_api::provider::{
    ControlPlaneConfig,
    InfrastructureStatus,
    Subnet,
    SubnetPurpose,
};
use gcp_api::shoot::Cluster;
use serde_json::json;

use crate::constants::*;
use crate::errors::*;
use crate::macros::*;

pub type Values = serde_json::Map<String, Value>;
pub type Checksums = BTreeMap<String, String>;

// Inputs for the control plane chart that don't come from the ControlPlane object itself
#[derive(Clone, Debug)]
pub struct ControlPlaneChartInputs<'a> {
    pub namespace: &'a str,
    pub project_id: &'a str,
    pub checksums: &'a Checksums,
    pub scaled_down: bool,
    pub csi_enabled: bool,
}

pub fn replicas(scaled_down: bool) -> i32 {
    if scaled_down { 0 } else { 1 }
}

// Every annotation value has to come from the checksums the host computed; we never make one up,
// so a missing or empty entry is an error.
pub fn checksum_annotations(checksums: &Checksums, secrets: &[&str], configmaps: &[&str]) -> anyhow::Result<Values> {
    let mut annotations = Values::new();
    for (prefix, names) in [(CHECKSUM_SECRET_PREFIX, secrets), (CHECKSUM_CONFIGMAP_PREFIX, configmaps)] {
        for name in names {
            match checksums.get(*name) {
                Some(sum) if !sum.is_empty() => {
                    annotations.insert(format!("{prefix}{name}"), Value::from(sum.as_str()));
                },
                _ => bail!(ValuesError::missing_checksum(name)),
            }
        }
    }
    Ok(annotations)
}

pub fn internal_subnet(infra_status: &InfrastructureStatus) -> anyhow::Result<Option<&Subnet>> {
    let internal: Vec<_> = infra_status
        .networks
        .subnets
        .iter()
        .filter(|s| s.purpose == SubnetPurpose::Internal)
        .collect();

    match internal.as_slice() {
        [] => Ok(None),
        [subnet] => Ok(Some(*subnet)),
        subnets => {
            let names: Vec<_> = subnets.iter().map(|s| s.name.as_str()).collect();
            bail!(ValuesError::decode_error(&format!("multiple internal subnets: {}", names.join(", "))))
        },
    }
}

pub fn config_chart_values(
    cp_config: &ControlPlaneConfig,
    infra_status: &InfrastructureStatus,
    namespace: &str,
    project_id: &str,
) -> anyhow::Result<Values> {
    let sub_network_name = internal_subnet(infra_status)?.map(|s| s.name.clone()).unwrap_or_default();

    Ok(values! {
        "projectID" => project_id,
        "networkName" => infra_status.networks.vpc.name.as_str(),
        "subNetworkName" => sub_network_name,
        "zone" => cp_config.zone.as_str(),
        "nodeTags" => namespace,
    })
}

pub fn ccm_chart_values(
    cp_config: &ControlPlaneConfig,
    cluster: &Cluster,
    inputs: &ControlPlaneChartInputs,
) -> anyhow::Result<Values> {
    let Some(pod_network) = cluster.pod_network() else {
        bail!(ValuesError::missing_field("shoot.spec.networking.pods"));
    };

    let mut values = values! {
        "enabled" => true,
        "replicas" => replicas(inputs.scaled_down),
        "clusterName" => inputs.namespace,
        "kubernetesVersion" => cluster.kubernetes_version(),
        "podNetwork" => pod_network,
        "podLabels" => values! { MAINTENANCE_RESTART_LABEL_KEY => "true" },
        "podAnnotations" => checksum_annotations(
            inputs.checksums,
            &[CLOUD_CONTROLLER_MANAGER_NAME, CLOUD_CONTROLLER_MANAGER_SERVER_NAME, CLOUD_PROVIDER_SECRET_NAME],
            &[CLOUD_PROVIDER_CONFIG_NAME],
        )?,
        "tlsCipherSuites" => TLS_CIPHER_SUITES,
    };

    if let Some(feature_gates) = cp_config
        .cloud_controller_manager
        .as_ref()
        .and_then(|ccm| ccm.feature_gates.as_ref())
    {
        values.insert("featureGates".into(), json!(feature_gates));
    }

    Ok(values)
}

pub fn csi_controller_chart_values(
    cp_config: &ControlPlaneConfig,
    inputs: &ControlPlaneChartInputs,
) -> anyhow::Result<Values> {
    if !inputs.csi_enabled {
        return Ok(values! { "enabled" => false });
    }

    Ok(values! {
        "enabled" => true,
        "replicas" => replicas(inputs.scaled_down),
        "projectID" => inputs.project_id,
        "zone" => cp_config.zone.as_str(),
        "podAnnotations" => checksum_annotations(
            inputs.checksums,
            &[
                CSI_PROVISIONER_NAME,
                CSI_ATTACHER_NAME,
                CSI_SNAPSHOTTER_NAME,
                CSI_RESIZER_NAME,
                CLOUD_PROVIDER_SECRET_NAME,
            ],
            &[],
        )?,
        "csiSnapshotController" => values! {
            "replicas" => replicas(inputs.scaled_down),
            "podAnnotations" => checksum_annotations(inputs.checksums, &[CSI_SNAPSHOT_CONTROLLER_NAME], &[])?,
        },
    })
}

pub fn control_plane_chart_values(
    cp_config: &ControlPlaneConfig,
    cluster: &Cluster,
    inputs: &ControlPlaneChartInputs,
) -> anyhow::Result<Values> {
    Ok(values! {
        CLOUD_CONTROLLER_MANAGER_NAME => ccm_chart_values(cp_config, cluster, inputs)?,
        CSI_CONTROLLER_NAME => csi_controller_chart_values(cp_config, inputs)?,
    })
}

pub fn shoot_chart_values(cluster: &Cluster, csi_enabled: bool) -> Values {
    values! {
        CLOUD_CONTROLLER_MANAGER_NAME => values! { "enabled" => true },
        CSI_NODE_NAME => values! {
            "enabled" => csi_enabled,
            "kubernetesVersion" => cluster.kubernetes_version(),
            "vpaEnabled" => cluster.shoot.vpa_enabled(),
        },
    }
}

pub fn shoot_crds_chart_values(csi_enabled: bool) -> Values {
    values! {
        VOLUME_SNAPSHOTS_NAME => values! { "enabled" => csi_enabled },
    }
}

pub fn storage_classes_chart_values(csi_enabled: bool) -> Values {
    values! { "useLegacyProvisioner" => !csi_enabled }
}
