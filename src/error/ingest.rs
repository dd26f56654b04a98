use std::net::SocketAddr;

use thiserror::Error;

use super::FragmentError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Datagram from {peer} is not valid UTF-8: {source}")]
    Decode {
        peer: SocketAddr,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("Malformed fragment from {peer}: {source}")]
    Malformed {
        peer: SocketAddr,
        #[source]
        source: FragmentError,
    },
    #[error("Failed to read subtitle file '{path}': {source}")]
    ReadSubtitles {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to send datagram to {target}: {source}")]
    Send {
        target: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
