use std::sync::Arc;

use anyhow::Context;
use gcp_api::provider::{
    ControlPlaneConfig,
    InfrastructureStatus,
};
use gcp_api::shoot::Cluster;
use gcp_api::v1alpha1::ControlPlane;
use kube::ResourceExt;
use tokio_util::sync::CancellationToken;
use tracing::*;

use crate::charts::{
    self,
    Checksums,
    ControlPlaneChartInputs,
    Values,
};
use crate::errors::*;
use crate::k8s::KubeResourceExt;
use crate::scheme::Scheme;
use crate::secrets::{
    SecretReader,
    fetch_project_id,
};
use crate::version;

/// Translates a ControlPlane (plus the Cluster it belongs to) into the values for the GCP
/// control plane charts.
///
/// The provider holds no state besides its collaborators, which are immutable and shared, so it
/// can be cloned freely and called from as many tasks as you like.  The only I/O any of the
/// operations perform is (at most) one read of the provider credentials secret, which can be
/// aborted through the cancellation token every operation takes.
#[derive(Clone)]
pub struct ValuesProvider {
    logger: Span,
    scheme: Arc<Scheme>,
    reader: Arc<dyn SecretReader>,
}

/// The host attaches the scheme and the object reader after constructing the provider; `build`
/// refuses to hand out a provider that's missing either of them.
pub struct ValuesProviderBuilder {
    logger: Span,
    scheme: Option<Arc<Scheme>>,
    reader: Option<Arc<dyn SecretReader>>,
}

impl ValuesProviderBuilder {
    pub fn inject_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(Arc::new(scheme));
        self
    }

    pub fn inject_reader(mut self, reader: Arc<dyn SecretReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn build(self) -> anyhow::Result<ValuesProvider> {
        let Some(scheme) = self.scheme else {
            bail!(ValuesError::missing_collaborator("scheme"));
        };
        let Some(reader) = self.reader else {
            bail!(ValuesError::missing_collaborator("secret reader"));
        };

        Ok(ValuesProvider { logger: self.logger, scheme, reader })
    }
}

impl ValuesProvider {
    pub fn builder(logger: Span) -> ValuesProviderBuilder {
        ValuesProviderBuilder { logger, scheme: None, reader: None }
    }

    pub fn new(logger: Span, scheme: Scheme, reader: Arc<dyn SecretReader>) -> ValuesProvider {
        ValuesProvider { logger, scheme: Arc::new(scheme), reader }
    }

    #[instrument(parent = &self.logger, skip_all, err, fields(controlplane = %cp.namespaced_name()))]
    pub async fn get_config_chart_values(
        &self,
        token: &CancellationToken,
        cp: &ControlPlane,
        _cluster: &Cluster,
    ) -> anyhow::Result<Values> {
        async {
            check_cancelled(token, "config chart values")?;
            let cp_config = self.decode_control_plane_config(cp)?;
            let infra_status = self.decode_infrastructure_status(cp)?;
            charts::internal_subnet(&infra_status)?;
            let namespace = control_plane_namespace(cp)?;
            let project_id = self.fetch_project_id(token, cp, &namespace).await?;

            charts::config_chart_values(&cp_config, &infra_status, &namespace, &project_id)
        }
        .await
        .context("could not determine config chart values")
    }

    #[instrument(parent = &self.logger, skip_all, err, fields(controlplane = %cp.namespaced_name(), scaled_down = scaled_down))]
    pub async fn get_control_plane_chart_values(
        &self,
        token: &CancellationToken,
        cp: &ControlPlane,
        cluster: &Cluster,
        checksums: &Checksums,
        scaled_down: bool,
    ) -> anyhow::Result<Values> {
        async {
            check_cancelled(token, "control plane chart values")?;
            let cp_config = self.decode_control_plane_config(cp)?;
            let csi_enabled = version::csi_enabled(cluster.kubernetes_version())?;
            let namespace = control_plane_namespace(cp)?;
            let project_id = self.fetch_project_id(token, cp, &namespace).await?;

            let inputs = ControlPlaneChartInputs {
                namespace: &namespace,
                project_id: &project_id,
                checksums,
                scaled_down,
                csi_enabled,
            };
            debug!("assembling control plane chart values (csi_enabled={csi_enabled})");
            charts::control_plane_chart_values(&cp_config, cluster, &inputs)
        }
        .await
        .context("could not determine control plane chart values")
    }

    // The checksums aren't needed for anything in the shoot charts right now
    #[instrument(parent = &self.logger, skip_all, err, fields(controlplane = %cp.namespaced_name()))]
    pub async fn get_control_plane_shoot_chart_values(
        &self,
        token: &CancellationToken,
        cp: &ControlPlane,
        cluster: &Cluster,
        _checksums: Option<&Checksums>,
    ) -> anyhow::Result<Values> {
        check_cancelled(token, "control plane shoot chart values")
            .and_then(|_| version::csi_enabled(cluster.kubernetes_version()))
            .map(|csi_enabled| charts::shoot_chart_values(cluster, csi_enabled))
            .context("could not determine control plane shoot chart values")
    }

    #[instrument(parent = &self.logger, skip_all, err, fields(controlplane = %cp.namespaced_name()))]
    pub async fn get_control_plane_shoot_crds_chart_values(
        &self,
        token: &CancellationToken,
        cp: &ControlPlane,
        cluster: &Cluster,
    ) -> anyhow::Result<Values> {
        check_cancelled(token, "control plane shoot CRDs chart values")
            .and_then(|_| version::csi_enabled(cluster.kubernetes_version()))
            .map(charts::shoot_crds_chart_values)
            .context("could not determine control plane shoot CRDs chart values")
    }

    #[instrument(parent = &self.logger, skip_all, err, fields(controlplane = %cp.namespaced_name()))]
    pub async fn get_storage_classes_chart_values(
        &self,
        token: &CancellationToken,
        cp: &ControlPlane,
        cluster: &Cluster,
    ) -> anyhow::Result<Values> {
        check_cancelled(token, "storage classes chart values")
            .and_then(|_| version::csi_enabled(cluster.kubernetes_version()))
            .map(charts::storage_classes_chart_values)
            .context("could not determine storage classes chart values")
    }

    fn decode_control_plane_config(&self, cp: &ControlPlane) -> anyhow::Result<ControlPlaneConfig> {
        self.scheme.decode(cp.spec.provider_config.as_ref())
    }

    fn decode_infrastructure_status(&self, cp: &ControlPlane) -> anyhow::Result<InfrastructureStatus> {
        self.scheme.decode(cp.spec.infrastructure_provider_status.as_ref())
    }

    async fn fetch_project_id(
        &self,
        token: &CancellationToken,
        cp: &ControlPlane,
        cp_namespace: &str,
    ) -> anyhow::Result<String> {
        let secret_ref = &cp.spec.secret_ref;
        let secret_namespace = secret_ref.namespace.as_deref().unwrap_or(cp_namespace);
        fetch_project_id(self.reader.as_ref(), token, secret_namespace, &secret_ref.name).await
    }
}

fn check_cancelled(token: &CancellationToken, what: &str) -> EmptyResult {
    if token.is_cancelled() {
        bail!(ValuesError::cancelled(&format!("before computing {what}")));
    }
    Ok(())
}

fn control_plane_namespace(cp: &ControlPlane) -> anyhow::Result<String> {
    cp.namespace()
        .ok_or_else(|| ValuesError::missing_field(&format!("namespace of control plane {}", cp.name_any())))
}
