//! Errors that stop the server.

use std::{io::Error as IoError, net::SocketAddr};
use thiserror::Error;

/// Errors that may occur while starting or running the HTTP server.
#[derive(Debug, Error)]
pub(crate) enum ServerError {
    /// The listener could not bind to the configured address.
    #[error("Unable to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The server loop failed after binding.
    #[error("Server on {addr} failed: {source}")]
    Serve {
        /// The address the server was listening on.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
}
