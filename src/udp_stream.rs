use crate::decode;
use crate::errors::AppError;
use crate::model::ContactRecord;
use log::{debug, trace, warn};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{sleep, timeout};

pub const DATAGRAM_BUF: usize = 1500;
pub const RECV_TIMEOUT: Duration = Duration::from_millis(100);
pub const IDLE_PAUSE: Duration = Duration::from_secs(1);

/// Binds with SO_REUSEADDR so other broadcast listeners can share the port
/// and a restart can rebind at once. Must run inside the tokio runtime.
pub fn bind_reusable(addr: SocketAddr) -> Result<UdpSocket, AppError> {
    let socket = Socket::new(Domain::for_address(addr), Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket
        .bind(&addr.into())
        .map_err(|e| AppError::IO(format!("bind {}: {}", addr, e)))?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

/// Receives datagrams forever, forwarding each decoded contact to `tx`.
/// Returns once the encoder side has gone away.
pub async fn watch_udp(socket: UdpSocket, tx: UnboundedSender<ContactRecord>) -> Result<(), AppError> {
    let mut buf = [0u8; DATAGRAM_BUF];

    loop {
        let n = match timeout(RECV_TIMEOUT, socket.recv(&mut buf)).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => {
                warn!("udp_stream: recv failed: {}", e);
                sleep(IDLE_PAUSE).await;
                continue;
            }
            Err(_) => {
                trace!("udp_stream: idle");
                sleep(IDLE_PAUSE).await;
                continue;
            }
        };
        if n == 0 {
            continue;
        }

        match decode::decode_datagram(&buf[..n]) {
            Ok(Some(contact)) => {
                if tx.send(contact).is_err() {
                    warn!("udp_stream: downstream closed; stopping");
                    break;
                }
            }
            Ok(None) => trace!("udp_stream: skipped non-contact message"),
            Err(e) => debug!("udp_stream: dropped datagram: {}", e),
        }
    }

    Ok(())
}
