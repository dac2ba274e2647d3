//! SFTP transfer client.
//!
//! Each fetch is fully self-contained: connect, handshake, authenticate with
//! the in-memory private key, read the remote file, tear down. libssh2 is a
//! blocking API, so the whole session lives inside one `spawn_blocking`
//! closure; every exit path drops the session and closes the TCP connection.
//! There is no session pooling or reuse across calls.

use std::io::Read;
use std::net::TcpStream;
use std::path::Path;

use async_trait::async_trait;
use log::{debug, info};
use ssh2::Session;

use crate::config::ConnectionParams;
use crate::error_handling::TransferError;

/// Capability to fetch one remote resource as raw bytes.
///
/// The importer depends on this trait rather than on [`SftpClient`] directly,
/// so cycles can be exercised without a network.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches the full contents of the configured remote resource.
    async fn fetch(&self) -> Result<Vec<u8>, TransferError>;
}

/// SFTP implementation of [`Fetch`] using key-based SSH login.
pub struct SftpClient {
    params: ConnectionParams,
}

impl SftpClient {
    /// Creates a client for the given endpoint. No connection is made until
    /// [`Fetch::fetch`] is called.
    pub fn new(params: ConnectionParams) -> Self {
        Self { params }
    }
}

#[async_trait]
impl Fetch for SftpClient {
    async fn fetch(&self) -> Result<Vec<u8>, TransferError> {
        let params = self.params.clone();
        tokio::task::spawn_blocking(move || fetch_blocking(&params)).await?
    }
}

fn fetch_blocking(params: &ConnectionParams) -> Result<Vec<u8>, TransferError> {
    let addr = format!("{}:{}", params.host, params.port);
    let tcp = TcpStream::connect(&addr).map_err(|source| TransferError::Connect {
        addr: addr.clone(),
        source,
    })?;

    let mut session = Session::new().map_err(|source| TransferError::Handshake {
        host: params.host.clone(),
        source,
    })?;
    session.set_tcp_stream(tcp);
    session
        .handshake()
        .map_err(|source| TransferError::Handshake {
            host: params.host.clone(),
            source,
        })?;

    session
        .userauth_pubkey_memory(&params.username, None, &params.private_key, None)
        .map_err(|source| TransferError::Auth {
            username: params.username.clone(),
            source,
        })?;
    info!("Connected to SFTP server at {addr}");

    let sftp = session.sftp().map_err(|source| TransferError::Handshake {
        host: params.host.clone(),
        source,
    })?;
    let mut remote_file =
        sftp.open(Path::new(&params.remote_path))
            .map_err(|source| TransferError::NotFound {
                path: params.remote_path.clone(),
                source,
            })?;

    let mut contents = Vec::new();
    remote_file
        .read_to_end(&mut contents)
        .map_err(|source| TransferError::Read {
            path: params.remote_path.clone(),
            source,
        })?;
    debug!("Fetched {} bytes from {}", contents.len(), params.remote_path);

    // remote_file, sftp and session drop here, closing the connection
    Ok(contents)
}
