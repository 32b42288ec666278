//! One-time startup work: host address discovery.
//!
//! The feedback hardware probe lives with its driver
//! ([`crate::panel::gpio`]); this module covers finding the address a LAN
//! client should connect to, with a bounded retry loop instead of retrying
//! forever.

use crate::{MagicBoxError, Result};
use std::net::{IpAddr, UdpSocket};
use std::time::Duration;
use tracing::{info, warn};

/// Find the LAN-facing address of this host.
///
/// Routes a dummy datagram toward a public address and reads the local
/// socket address back; no packet is actually sent.
pub fn local_address() -> Result<IpAddr> {
    let socket =
        UdpSocket::bind("0.0.0.0:0").map_err(|e| MagicBoxError::AddressDiscovery(e.to_string()))?;
    socket
        .connect("8.8.8.8:80")
        .map_err(|e| MagicBoxError::AddressDiscovery(e.to_string()))?;
    let addr = socket
        .local_addr()
        .map_err(|e| MagicBoxError::AddressDiscovery(e.to_string()))?;
    Ok(addr.ip())
}

/// Run `probe` until it yields an address, up to `attempts` tries with
/// `backoff` between them. Gives up with the last error.
pub async fn discover_address<F>(mut probe: F, attempts: u32, backoff: Duration) -> Result<IpAddr>
where
    F: FnMut() -> Result<IpAddr>,
{
    let mut last_error = MagicBoxError::AddressDiscovery("no attempts made".to_string());

    for attempt in 1..=attempts {
        match probe() {
            Ok(addr) => {
                info!(%addr, attempt, "host address discovered");
                return Ok(addr);
            }
            Err(e) => {
                warn!(attempt, attempts, error = %e, "address discovery failed");
                last_error = e;
                if attempt < attempts {
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    Err(last_error)
}
