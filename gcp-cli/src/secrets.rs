use gcp_core::certs::control_plane_secret_configs;
use gcp_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "namespace of the control plane")]
    pub namespace: String,
}

pub fn cmd(args: &Args) -> EmptyResult {
    print!("{}", serde_yaml::to_string(&control_plane_secret_configs(&args.namespace))?);
    Ok(())
}
