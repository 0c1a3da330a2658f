use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use gcp_core::cluster::cluster_from_resource;
use gcp_core::prelude::*;
use gcp_core::scheme::Scheme;
use gcp_core::secrets::SecretReader;
use serde::de::DeserializeOwned;
use tracing::*;

use crate::readers::{
    DefaultKubeSecretReader,
    FileSecretReader,
};

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(long, long_help = "YAML file containing the ControlPlane object")]
    pub control_plane: PathBuf,

    #[arg(long, long_help = "YAML file containing the Cluster object")]
    pub cluster: PathBuf,

    #[arg(
        long,
        long_help = "read the provider secret from this YAML file instead of from the cluster"
    )]
    pub secret_file: Option<PathBuf>,

    #[arg(
        long,
        long_help = "give up after this long (e.g. 30s, 2m)",
        value_parser = humantime::parse_duration
    )]
    pub timeout: Option<Duration>,
}

#[derive(clap::Args, Debug)]
pub struct ControlPlaneArgs {
    #[command(flatten)]
    pub input: Args,

    #[arg(long, long_help = "YAML file mapping secret and config map names to their checksums")]
    pub checksums: PathBuf,

    #[arg(long, long_help = "render values for a hibernated control plane (zero replicas)")]
    pub scaled_down: bool,
}

#[derive(Debug)]
pub enum ChartRequest {
    Config,
    ControlPlane { checksums: Checksums, scaled_down: bool },
    Shoot,
    ShootCrds,
    StorageClasses,
}

pub async fn cmd(args: &Args, req: ChartRequest) -> EmptyResult {
    let values = chart_values(args, &req, secret_reader(args)).await?;
    print!("{}", serde_yaml::to_string(&values)?);
    Ok(())
}

pub async fn control_plane_cmd(args: &ControlPlaneArgs) -> EmptyResult {
    let req = ChartRequest::ControlPlane {
        checksums: read_yaml(&args.checksums)?,
        scaled_down: args.scaled_down,
    };
    cmd(&args.input, req).await
}

pub async fn chart_values(args: &Args, req: &ChartRequest, reader: Arc<dyn SecretReader>) -> anyhow::Result<Values> {
    let cp: ControlPlane = read_yaml(&args.control_plane)?;
    let cluster = cluster_from_resource(&read_yaml(&args.cluster)?)?;
    let provider = ValuesProvider::builder(info_span!("gcpctl"))
        .inject_scheme(Scheme::with_provider_types())
        .inject_reader(reader)
        .build()?;

    let token = CancellationToken::new();
    if let Some(timeout) = args.timeout {
        cancel_after(token.clone(), timeout);
    }

    info!("rendering {req:?} for {}", cp.namespaced_name());
    match req {
        ChartRequest::Config => provider.get_config_chart_values(&token, &cp, &cluster).await,
        ChartRequest::ControlPlane { checksums, scaled_down } => {
            provider
                .get_control_plane_chart_values(&token, &cp, &cluster, checksums, *scaled_down)
                .await
        },
        ChartRequest::Shoot => {
            provider
                .get_control_plane_shoot_chart_values(&token, &cp, &cluster, None)
                .await
        },
        ChartRequest::ShootCrds => {
            provider
                .get_control_plane_shoot_crds_chart_values(&token, &cp, &cluster)
                .await
        },
        ChartRequest::StorageClasses => provider.get_storage_classes_chart_values(&token, &cp, &cluster).await,
    }
}

fn secret_reader(args: &Args) -> Arc<dyn SecretReader> {
    match &args.secret_file {
        Some(path) => Arc::new(FileSecretReader::new(path.clone())),
        None => Arc::new(DefaultKubeSecretReader),
    }
}

fn cancel_after(token: CancellationToken, timeout: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        debug!("timed out after {}", humantime::format_duration(timeout));
        token.cancel();
    });
}

pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    serde_yaml::from_str(&contents).with_context(|| format!("could not parse {}", path.display()))
}
