// Chart and component names; the checksum keys handed to us by the host use the same names
pub const CLOUD_CONTROLLER_MANAGER_NAME: &str = "cloud-controller-manager";
pub const CLOUD_CONTROLLER_MANAGER_SERVER_NAME: &str = "cloud-controller-manager-server";
pub const CSI_CONTROLLER_NAME: &str = "csi-controller";
pub const CSI_NODE_NAME: &str = "csi-node";
pub const CSI_PROVISIONER_NAME: &str = "csi-provisioner";
pub const CSI_ATTACHER_NAME: &str = "csi-attacher";
pub const CSI_SNAPSHOTTER_NAME: &str = "csi-snapshotter";
pub const CSI_RESIZER_NAME: &str = "csi-resizer";
pub const CSI_SNAPSHOT_CONTROLLER_NAME: &str = "csi-snapshot-controller";
pub const VOLUME_SNAPSHOTS_NAME: &str = "volumesnapshots";

// Well-known secrets and config maps
pub const CLOUD_PROVIDER_SECRET_NAME: &str = "cloudprovider";
pub const CLOUD_PROVIDER_CONFIG_NAME: &str = "cloud-provider-config";
pub const CA_SECRET_NAME: &str = "ca";
pub const KUBE_APISERVER_NAME: &str = "kube-apiserver";
pub const SERVICE_ACCOUNT_JSON_FIELD: &str = "serviceaccount.json";

// Well-known labels and annotations
pub const MAINTENANCE_RESTART_LABEL_KEY: &str = "maintenance.gardener.cloud/restart";
pub const CHECKSUM_SECRET_PREFIX: &str = "checksum/secret-";
pub const CHECKSUM_CONFIGMAP_PREFIX: &str = "checksum/configmap-";

// Go spellings of the cipher suites, since that's what the cloud-controller-manager parses
pub const TLS_CIPHER_SUITES: &[&str] = &[
    "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
    "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
    "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305",
    "TLS_RSA_WITH_AES_128_CBC_SHA",
    "TLS_RSA_WITH_AES_256_CBC_SHA",
    "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
];

pub const CLUSTER_DOMAIN: &str = "cluster.local";
