use std::fs;
use std::io;
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::Path;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::Context;
use log::{debug, error, info};
use perch_protocol::codec::{read_message, write_message};
use perch_protocol::{DaemonRequest, DaemonResponse};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;

use crate::config::DaemonConfig;
use crate::listing::execute_browse;

/// RAII guard that ensures the Unix socket file is removed on shutdown,
/// even if we return early or panic.
struct SocketGuard<'a> {
    path: &'a Path,
}

impl<'a> Drop for SocketGuard<'a> {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                error!(
                    "Failed to remove Unix socket at {} on shutdown: {err}",
                    self.path.display()
                );
            }
        }
    }
}

pub fn run_rpc_server(config: Arc<DaemonConfig>) -> anyhow::Result<()> {
    let socket_path = &config.socket_path;

    let shutdown = Arc::new(AtomicBool::new(false));

    // Register signal handlers. They only set the atomic flag
    for sig in [SIGINT, SIGTERM] {
        flag::register(sig, Arc::clone(&shutdown))
            .with_context(|| format!("Failed to register signal handler for {sig}"))?;
    }

    // Clean up stale socket if it exists.
    if socket_path.exists() {
        fs::remove_file(socket_path).with_context(|| {
            format!(
                "Failed to remove existing socket at {}",
                socket_path.display()
            )
        })?;
    }

    let listener = UnixListener::bind(socket_path)
        .with_context(|| format!("Failed to bind Unix socket at {}", socket_path.display()))?;

    // Ensure socket is cleaned up on any exit path.
    let _socket_guard = SocketGuard {
        path: socket_path.as_path(),
    };

    info!("perch daemon listening on {}", socket_path.display());

    loop {
        // Fast path: if shutdown already requested, stop accepting.
        if shutdown.load(Ordering::Relaxed) {
            info!("Shutdown signal observed; stopping RPC server.");
            break;
        }

        match listener.accept() {
            Ok((stream, _addr)) => {
                let config = config.clone();
                std::thread::spawn(move || {
                    if let Err(err) = handle_client(stream, config) {
                        error!("Error while handling client: {err:#}");
                    }
                });
            }
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => {
                // System call interrupted by signal
                if shutdown.load(Ordering::Relaxed) {
                    info!("Accept interrupted by shutdown signal; exiting accept loop.");
                    break;
                }
                // Spurious EINTR... retry
                continue;
            }
            Err(err) => {
                // Non-EINTR errors: log and decide whether to break or continue.
                error!("Accept error: {err}");
                continue;
            }
        }
    }

    info!("RPC server shutdown complete.");
    Ok(())
}

/// One connection serves exactly one request/response exchange.
/// Requests are independent: they share only the read-only config, so
/// any number may be in flight at once.
fn handle_client(mut stream: UnixStream, config: Arc<DaemonConfig>) -> anyhow::Result<()> {
    let request: DaemonRequest =
        read_message(&mut stream).context("Failed to read DaemonRequest")?;

    debug!("Received request: {:?}", request);

    let response = match request {
        DaemonRequest::Ping => DaemonResponse::Pong,
        DaemonRequest::Status => DaemonResponse::Status(format!(
            "version={}, socket={}",
            env!("CARGO_PKG_VERSION"),
            config.socket_path.display()
        )),
        DaemonRequest::Browse(req) => execute_browse(req),
    };

    write_message(&mut stream, &response).context("Failed to write DaemonResponse")
}

#[cfg(test)]
#[path = "rpc_tests.rs"]
mod tests;
