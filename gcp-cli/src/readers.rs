use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use gcp_core::prelude::*;
use gcp_core::secrets::{
    KubeSecretReader,
    SecretReader,
};
use tracing::*;

// Reads the provider secret from a local YAML file; handy for rendering values without
// access to the seed cluster.
pub struct FileSecretReader {
    path: PathBuf,
}

impl FileSecretReader {
    pub fn new(path: PathBuf) -> FileSecretReader {
        FileSecretReader { path }
    }
}

#[async_trait]
impl SecretReader for FileSecretReader {
    async fn get_secret(&self, namespace: &str, name: &str) -> anyhow::Result<corev1::Secret> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("could not read secret file {}", self.path.display()))?;
        let secret: corev1::Secret = serde_yaml::from_str(&contents)?;

        let wanted = format!("{namespace}/{name}");
        if secret.namespaced_name() != wanted {
            warn!("secret file contains {}, using it in place of {wanted}", secret.namespaced_name());
        }
        Ok(secret)
    }
}

// Only builds a client if something actually asks for the secret, so that the charts which
// don't need a project id can be rendered without a kubeconfig.
pub struct DefaultKubeSecretReader;

#[async_trait]
impl SecretReader for DefaultKubeSecretReader {
    async fn get_secret(&self, namespace: &str, name: &str) -> anyhow::Result<corev1::Secret> {
        let client = kube::Client::try_default().await?;
        KubeSecretReader::new(client).get_secret(namespace, name).await
    }
}
