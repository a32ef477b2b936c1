#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, oneshot};

/// Loopback UDP server answering every query through `respond`.
///
/// `respond` returns the datagrams to send back, in order; an empty vector
/// leaves the query unanswered. Every received query is forwarded on the
/// channel returned by [`ScriptedDnsServer::start`].
pub struct ScriptedDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ScriptedDnsServer {
    pub async fn start<F>(respond: F) -> (Self, mpsc::UnboundedReceiver<Vec<u8>>)
    where
        F: Fn(&[u8]) -> Vec<Vec<u8>> + Send + 'static,
    {
        Self::start_on(SocketAddr::from(([127, 0, 0, 1], 0)), respond)
            .await
            .unwrap()
    }

    /// Same as [`ScriptedDnsServer::start`] on a chosen bind address, so
    /// callers can skip when e.g. `[::1]` is unavailable.
    pub async fn start_on<F>(
        bind: SocketAddr,
        respond: F,
    ) -> std::io::Result<(Self, mpsc::UnboundedReceiver<Vec<u8>>)>
    where
        F: Fn(&[u8]) -> Vec<Vec<u8>> + Send + 'static,
    {
        let socket = UdpSocket::bind(bind).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let (query_tx, query_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let query = buf[..len].to_vec();
                            for datagram in respond(&query) {
                                let _ = socket.send_to(&datagram, peer).await;
                            }
                            let _ = query_tx.send(query);
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr,
                shutdown_tx: Some(shutdown_tx),
            },
            query_rx,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for ScriptedDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
