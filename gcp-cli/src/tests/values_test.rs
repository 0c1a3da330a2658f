use std::sync::Arc;
use std::time::Duration;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use async_trait::async_trait;
use gcp_core::secrets::SecretReader;
use serde_json::json;

use super::*;
use crate::readers::FileSecretReader;
use crate::values::*;

struct Inputs {
    dir: TempDir,
    args: Args,
}

// Never answers, so only the timeout can end the operation
struct HangingReader;

#[async_trait]
impl SecretReader for HangingReader {
    async fn get_secret(&self, _namespace: &str, _name: &str) -> anyhow::Result<corev1::Secret> {
        std::future::pending().await
    }
}

#[fixture]
fn inputs(#[default(TEST_K8S_VERSION_118)] version: &str) -> Inputs {
    let dir = TempDir::new().unwrap();
    let cp_file = dir.child("controlplane.yml");
    cp_file.write_str(&serde_yaml::to_string(&test_control_plane()).unwrap()).unwrap();
    let cluster_file = dir.child("cluster.yml");
    cluster_file
        .write_str(&serde_yaml::to_string(&test_cluster_resource(version)).unwrap())
        .unwrap();
    let secret_file = dir.child("secret.yml");
    secret_file
        .write_str(&serde_yaml::to_string(&test_provider_secret(TEST_PROJECT_ID)).unwrap())
        .unwrap();

    let args = Args {
        control_plane: cp_file.path().to_path_buf(),
        cluster: cluster_file.path().to_path_buf(),
        secret_file: Some(secret_file.path().to_path_buf()),
        timeout: None,
    };
    Inputs { dir, args }
}

fn file_reader(inputs: &Inputs) -> Arc<dyn SecretReader> {
    Arc::new(FileSecretReader::new(inputs.args.secret_file.clone().unwrap()))
}

#[test_log::test(tokio::test)]
async fn test_config_chart_values() {
    let inputs = inputs(TEST_K8S_VERSION_118);
    let values = chart_values(&inputs.args, &ChartRequest::Config, file_reader(&inputs))
        .await
        .unwrap();

    assert_eq!(values["projectID"], json!(TEST_PROJECT_ID));
    assert_eq!(values["subNetworkName"], json!(TEST_SUBNET_NAME));
}

#[rstest]
#[tokio::test]
async fn test_control_plane_chart_values_from_checksums_file(inputs: Inputs) {
    let checksums_file = inputs.dir.child("checksums.yml");
    checksums_file
        .write_str(&serde_yaml::to_string(&test_checksums()).unwrap())
        .unwrap();

    let req = ChartRequest::ControlPlane {
        checksums: read_yaml(checksums_file.path()).unwrap(),
        scaled_down: true,
    };
    let values = chart_values(&inputs.args, &req, file_reader(&inputs)).await.unwrap();

    assert_eq!(values["cloud-controller-manager"]["replicas"], json!(0));
    assert_eq!(values["csi-controller"]["projectID"], json!(TEST_PROJECT_ID));
}

#[rstest]
#[tokio::test]
async fn test_storage_classes_chart_values_pre_118(#[with(TEST_K8S_VERSION_PRE_118)] inputs: Inputs) {
    let values = chart_values(&inputs.args, &ChartRequest::StorageClasses, Arc::new(HangingReader))
        .await
        .unwrap();

    assert_eq!(json!(values), json!({"useLegacyProvisioner": true}));
}

#[rstest]
#[tokio::test]
async fn test_chart_values_timeout(mut inputs: Inputs) {
    inputs.args.timeout = Some(Duration::from_millis(10));
    let err = chart_values(&inputs.args, &ChartRequest::Config, Arc::new(HangingReader))
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<ValuesError>(), Some(ValuesError::Cancelled(_))));
}

#[rstest]
#[tokio::test]
async fn test_chart_values_missing_file(mut inputs: Inputs) {
    inputs.args.cluster = inputs.dir.path().join("nope.yml");
    let err = chart_values(&inputs.args, &ChartRequest::Shoot, file_reader(&inputs))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("could not read"));
}

#[rstest]
#[tokio::test]
async fn test_file_secret_reader_missing() {
    let reader = FileSecretReader::new("/does/not/exist.yml".into());
    let res = reader.get_secret(TEST_NAMESPACE, TEST_SECRET_NAME).await;
    assert!(res.is_err());
}
