use anyhow::Context;
use async_trait::async_trait;
use k8s_openapi::api::core::v1 as corev1;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::*;

use crate::constants::*;
use crate::errors::*;
use crate::k8s::KubeResourceExt;

// The typed object reader that the values provider gets its credentials from; the provider never
// writes anything, so reading a single secret is all we need.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait SecretReader: Send + Sync {
    async fn get_secret(&self, namespace: &str, name: &str) -> anyhow::Result<corev1::Secret>;
}

#[derive(Clone)]
pub struct KubeSecretReader {
    client: kube::Client,
}

impl KubeSecretReader {
    pub fn new(client: kube::Client) -> KubeSecretReader {
        KubeSecretReader { client }
    }
}

#[async_trait]
impl SecretReader for KubeSecretReader {
    async fn get_secret(&self, namespace: &str, name: &str) -> anyhow::Result<corev1::Secret> {
        let secrets_api = kube::Api::<corev1::Secret>::namespaced(self.client.clone(), namespace);
        Ok(secrets_api.get(name).await?)
    }
}

// Only the fields we care about from the GCP service account key file
#[derive(Deserialize)]
struct ServiceAccount {
    #[serde(default)]
    project_id: String,
}

pub async fn fetch_project_id(
    reader: &dyn SecretReader,
    token: &CancellationToken,
    namespace: &str,
    name: &str,
) -> anyhow::Result<String> {
    let secret_name = format!("{namespace}/{name}");
    if token.is_cancelled() {
        bail!(ValuesError::cancelled(&format!("before fetching secret {secret_name}")));
    }

    debug!("fetching provider secret {secret_name}");
    let secret = tokio::select! {
        biased;

        _ = token.cancelled() => bail!(ValuesError::cancelled(&format!("while fetching secret {secret_name}"))),
        res = reader.get_secret(namespace, name) => {
            res.with_context(|| ValuesError::FetchError(secret_name.clone()))?
        },
    };

    project_id_from_secret(&secret)
}

pub fn project_id_from_secret(secret: &corev1::Secret) -> anyhow::Result<String> {
    let secret_name = secret.namespaced_name();
    let Some(sa_json) = secret.data.as_ref().and_then(|data| data.get(SERVICE_ACCOUNT_JSON_FIELD)) else {
        bail!(ValuesError::parse_error(&format!("secret {secret_name} has no {SERVICE_ACCOUNT_JSON_FIELD} field")));
    };

    let sa: ServiceAccount = serde_json::from_slice(&sa_json.0)
        .map_err(|e| ValuesError::parse_error(&format!("malformed {SERVICE_ACCOUNT_JSON_FIELD} in {secret_name}: {e}")))?;
    if sa.project_id.is_empty() {
        bail!(ValuesError::parse_error(&format!("no project_id in {SERVICE_ACCOUNT_JSON_FIELD} of {secret_name}")));
    }

    Ok(sa.project_id)
}
