mod crd;
mod readers;
mod secrets;
mod values;

#[cfg(test)]
mod tests;

use clap::{
    Parser,
    Subcommand,
    crate_version,
};
use gcp_core::errors::*;
use gcp_core::logging;
use gcp_core::prelude::*;
use tracing::*;

use crate::values::ChartRequest;

#[derive(Parser)]
#[command(
    about = "command-line app for rendering GCP control plane chart values",
    version,
    propagate_version = true
)]
struct GcpCommandRoot {
    #[command(subcommand)]
    subcommand: GcpSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum GcpSubcommand {
    #[command(about = "render the cloud provider config chart values", visible_alias = "cfg")]
    Config(values::Args),

    #[command(about = "render the control plane chart values", visible_alias = "cp")]
    ControlPlane(values::ControlPlaneArgs),

    #[command(about = "render the control plane shoot chart values")]
    Shoot(values::Args),

    #[command(about = "render the control plane shoot CRDs chart values")]
    ShootCrds(values::Args),

    #[command(about = "render the storage classes chart values", visible_alias = "sc")]
    StorageClasses(values::Args),

    #[command(about = "print the certificate secrets the control plane needs")]
    Secrets(secrets::Args),

    #[command(about = "print the ControlPlane and Cluster CRDs")]
    Crd,

    #[command(about = "gcpctl version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = GcpCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    let res = match &args.subcommand {
        GcpSubcommand::Config(args) => values::cmd(args, ChartRequest::Config).await,
        GcpSubcommand::ControlPlane(args) => values::control_plane_cmd(args).await,
        GcpSubcommand::Shoot(args) => values::cmd(args, ChartRequest::Shoot).await,
        GcpSubcommand::ShootCrds(args) => values::cmd(args, ChartRequest::ShootCrds).await,
        GcpSubcommand::StorageClasses(args) => values::cmd(args, ChartRequest::StorageClasses).await,
        GcpSubcommand::Secrets(args) => secrets::cmd(args),
        GcpSubcommand::Crd => crd::cmd(),
        GcpSubcommand::Version => {
            println!("gcpctl {}", crate_version!());
            Ok(())
        },
    };

    if let Err(err) = &res {
        gcperr!(err, "gcpctl failed");
    }
    res
}
