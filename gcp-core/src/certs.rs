use serde::{
    Deserialize,
    Serialize,
};

use crate::constants::*;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CertType {
    Client,
    Server,
}

// The generated client certificate gets wrapped in a kubeconfig for talking to the shoot's
// apiserver (which lives in the same namespace as everything else).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeconfigRequest {
    pub cluster_name: String,
    pub api_server_host: String,
}

/// Describes one of the certificate secrets that the host generates for the control plane
/// components before asking us for chart values; the checksums of these secrets are what end up
/// in the pod annotations.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSecretConfig {
    pub name: String,
    pub common_name: String,
    pub cert_type: CertType,
    pub signing_ca: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<KubeconfigRequest>,
}

impl CertificateSecretConfig {
    fn client(name: &str, namespace: &str) -> CertificateSecretConfig {
        CertificateSecretConfig {
            name: name.into(),
            common_name: format!("system:{name}"),
            cert_type: CertType::Client,
            signing_ca: CA_SECRET_NAME.into(),
            dns_names: vec![],
            kubeconfig: Some(KubeconfigRequest {
                cluster_name: namespace.into(),
                api_server_host: KUBE_APISERVER_NAME.into(),
            }),
        }
    }

    fn server(name: &str, service: &str, namespace: &str) -> CertificateSecretConfig {
        CertificateSecretConfig {
            name: name.into(),
            common_name: service.into(),
            cert_type: CertType::Server,
            signing_ca: CA_SECRET_NAME.into(),
            dns_names: service_dns_names(service, namespace),
            kubeconfig: None,
        }
    }
}

pub fn service_dns_names(service: &str, namespace: &str) -> Vec<String> {
    vec![
        service.into(),
        format!("{service}.{namespace}"),
        format!("{service}.{namespace}.svc"),
        format!("{service}.{namespace}.svc.{CLUSTER_DOMAIN}"),
    ]
}

pub fn control_plane_secret_configs(namespace: &str) -> Vec<CertificateSecretConfig> {
    vec![
        CertificateSecretConfig::client(CLOUD_CONTROLLER_MANAGER_NAME, namespace),
        CertificateSecretConfig::server(CLOUD_CONTROLLER_MANAGER_SERVER_NAME, CLOUD_CONTROLLER_MANAGER_NAME, namespace),
        CertificateSecretConfig::client(CSI_PROVISIONER_NAME, namespace),
        CertificateSecretConfig::client(CSI_ATTACHER_NAME, namespace),
        CertificateSecretConfig::client(CSI_SNAPSHOTTER_NAME, namespace),
        CertificateSecretConfig::client(CSI_RESIZER_NAME, namespace),
        CertificateSecretConfig::client(CSI_SNAPSHOT_CONTROLLER_NAME, namespace),
    ]
}
