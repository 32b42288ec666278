//! Session channel: long-lived TCP connections carrying newline-delimited
//! UTF-8 text frames. One line in is one question, one line out is one
//! answer; failed questions relay nothing.

use crate::integration::Orchestrator;
use crate::messages::Question;
use crate::{MagicBoxError, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

/// Default port the session channel listens on.
pub const DEFAULT_PORT: u16 = 9001;

pub struct SessionServer {
    orchestrator: Arc<Orchestrator>,
    listener: TcpListener,
}

impl SessionServer {
    /// Bind the listener. Port 0 picks a free port (used by tests).
    pub async fn bind(orchestrator: Arc<Orchestrator>, port: u16) -> Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| MagicBoxError::Session(format!("failed to bind port {port}: {e}")))?;
        Ok(Self {
            orchestrator,
            listener,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the task is dropped. Each connection runs on
    /// its own task; a failed connection never takes the server down.
    pub async fn run(self) -> Result<()> {
        info!(addr = %self.local_addr()?, "session channel listening");
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let orchestrator = Arc::clone(&self.orchestrator);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, peer, orchestrator).await {
                            warn!(%peer, error = %e, "session ended with error");
                        }
                    });
                }
                Err(e) => error!("failed to accept connection: {e}"),
            }
        }
    }
}

/// Serve one client until it hangs up.
async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    orchestrator: Arc<Orchestrator>,
) -> Result<()> {
    info!(%peer, "client connected");
    orchestrator.session_opened().await;

    let result = serve_questions(stream, peer, &orchestrator).await;

    info!(%peer, "client disconnected");
    orchestrator.session_closed().await;
    result
}

async fn serve_questions(
    stream: TcpStream,
    peer: SocketAddr,
    orchestrator: &Orchestrator,
) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| MagicBoxError::Session(format!("read failed: {e}")))?;
        if bytes_read == 0 {
            return Ok(());
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let question = Question::new(text);
        info!(%peer, id = %question.id, question = %question.text, "question received");

        // One question is processed fully, including the remote round trip,
        // before the next line is read from this connection.
        let outcome = orchestrator.handle_question(question).await;

        if let Some(payload) = outcome.reply_payload() {
            writer
                .write_all(payload.as_bytes())
                .await
                .map_err(|e| MagicBoxError::Session(format!("write failed: {e}")))?;
            writer
                .write_all(b"\n")
                .await
                .map_err(|e| MagicBoxError::Session(format!("write failed: {e}")))?;
        }
    }
}
