use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result, anyhow, bail};
use perch_protocol::codec::{read_message, write_message};
use perch_protocol::{BrowseRequest, DaemonRequest, DaemonResponse, EntryRecord};

/// Correlation ids for this process. Each exchange gets a fresh one;
/// the daemon echoes it back and a reply whose id does not match the
/// request is refused rather than delivered to the wrong caller.
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> u64 {
    NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to the daemon. Holds at most one live connection at a time:
/// each exchange opens the socket, performs a single request/response,
/// and closes it again.
pub struct DaemonClient {
    socket_path: PathBuf,
}

impl DaemonClient {
    pub fn new(socket_path: PathBuf) -> Self {
        Self { socket_path }
    }

    fn exchange(&self, request: &DaemonRequest) -> Result<DaemonResponse> {
        let mut stream = UnixStream::connect(&self.socket_path).with_context(|| {
            format!(
                "failed to connect to perch daemon at {}",
                self.socket_path.display()
            )
        })?;

        write_message(&mut stream, request)?;
        read_message(&mut stream)
    }

    /// Request a sorted listing of `path`. Returns the full entry set;
    /// hidden-file filtering is a presentation concern applied after
    /// this call.
    pub fn browse(&self, path: &Path) -> Result<Vec<EntryRecord>> {
        let request_id = next_request_id();
        let request = DaemonRequest::Browse(BrowseRequest {
            request_id,
            path: path.to_string_lossy().into_owned(),
        });

        match self.exchange(&request)? {
            DaemonResponse::Listing(listing) => {
                check_correlation(request_id, listing.request_id)?;
                Ok(listing.entries)
            }
            DaemonResponse::Failed(failure) => {
                check_correlation(request_id, failure.request_id)?;
                Err(anyhow!("{}", failure.error))
            }
            other => Err(anyhow!("unexpected daemon response: {other:?}")),
        }
    }

    pub fn ping(&self) -> Result<()> {
        match self.exchange(&DaemonRequest::Ping)? {
            DaemonResponse::Pong => Ok(()),
            other => Err(anyhow!("unexpected daemon response: {other:?}")),
        }
    }

    pub fn status(&self) -> Result<String> {
        match self.exchange(&DaemonRequest::Status)? {
            DaemonResponse::Status(status) => Ok(status),
            other => Err(anyhow!("unexpected daemon response: {other:?}")),
        }
    }
}

fn check_correlation(sent: u64, received: u64) -> Result<()> {
    if sent != received {
        bail!("response correlation mismatch: sent {sent}, received {received}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
