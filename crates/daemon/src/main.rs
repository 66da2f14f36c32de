use std::sync::Arc;

mod config;
mod listing;
mod rpc;

use config::DaemonConfig;
use perch_runtime::logging;

use log::info;

fn main() -> anyhow::Result<()> {
    logging::init().ok();

    let config = DaemonConfig::from_env()?;

    info!(
        "Starting perch daemon: socket={}",
        config.socket_path.display()
    );

    rpc::run_rpc_server(Arc::new(config))
}
