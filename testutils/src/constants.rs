pub const TEST_NAMESPACE: &str = "test";
pub const TEST_CONTROL_PLANE_NAME: &str = "control-plane";
pub const TEST_SECRET_NAME: &str = "cloudprovider";
pub const TEST_POD_CIDR: &str = "10.250.0.0/19";
pub const TEST_ZONE: &str = "europe-west1a";
pub const TEST_REGION: &str = "europe-west1";
pub const TEST_VPC_NAME: &str = "vpc-1234";
pub const TEST_SUBNET_NAME: &str = "subnet-acbd1234";
pub const TEST_NODES_SUBNET_NAME: &str = "subnet-nodes-5678";
pub const TEST_PROJECT_ID: &str = "abc";
pub const TEST_K8S_VERSION_PRE_118: &str = "1.15.4";
pub const TEST_K8S_VERSION_118: &str = "1.18.0";
pub const TEST_FEATURE_GATE: &str = "CustomResourceValidation";

// name => checksum, keyed the same way the host hands them to us
pub const TEST_CHECKSUMS: &[(&str, &str)] = &[
    ("cloudprovider", "8bafb35ff1ac60275d62e1cbd495aceb511fb354f74a20f7d06ecb48b3a68432"),
    ("cloud-provider-config", "08a7bc7fe8f59b055f173145e211760a83f02cf89635cef26ebb351378635606"),
    ("cloud-controller-manager", "3d791b164a808638da9a8df03924be2a41e34cd664e42231c00fe369e3588272"),
    ("cloud-controller-manager-server", "6dff2a2e6f14444b66d8e4a351c049f7e89ee24ba3eaab95dbec40ba6bdebb52"),
    ("csi-provisioner", "65b1dac6b50673535cff480564c2e5c71077ed19b1b6e0e2291207225bdf77d4"),
    ("csi-attacher", "3f22909841cdbb80e5382d689d920309c0a7d995128e52c79773f9608ed7c289"),
    ("csi-snapshotter", "6a5bfc847638c499062f7fb44e31a30a9760bf4179e1dbf85e0ff4b4f162cd68"),
    ("csi-resizer", "a77e663ba1af340fb3dd7f6f8a1be47c7aa9e658198695480641e6b934c0b9ed"),
    ("csi-snapshot-controller", "84cba346d2e2cf96c3811b55b01f57bdd9b9bcaed7065760470942d267984eaf"),
];
