/* src/lib.rs */

//! Zero-copy decoder for the TLS ClientHello carried in QUIC Initial packets.
//!
//! QUIC clients send their ClientHello as a bare handshake message inside
//! CRYPTO frames, without a TLS record header. [`decode`] takes that message,
//! once reassembled into one contiguous buffer, and returns a
//! [`QuicClientHello`] exposing every field useful for identifying the
//! client: cipher suites, extension order, supported groups, ALPN, and the
//! QUIC transport parameters nested inside the `quic_transport_parameters`
//! extension.
//!
//! Input is treated as untrusted. Every length is bounds-checked and any
//! inconsistency aborts the decode with an [`Error`]; a partially decoded
//! message is never returned.
//!
//! ```
//! let msg = [
//! 	0x01, 0x00, 0x00, 0x2b, // ClientHello, length 43
//! 	0x03, 0x03, // legacy_version
//! 	0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
//! 	0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // random
//! 	0x00, // legacy_session_id
//! 	0x00, 0x02, 0x13, 0x01, // cipher_suites
//! 	0x01, 0x00, // legacy_compression_methods
//! 	0x00, 0x00, // empty extensions block
//! ];
//! let hello = quic_clienthello::decode(&msg).unwrap();
//! assert_eq!(hello.handshake_version(), 0x0303);
//! assert_eq!(hello.cipher_suites(), &[0x1301]);
//! assert_eq!(hello.raw(), &msg[..]);
//! ```
//!
//! Enable the `tracing` feature to have decode results logged at debug
//! level.

mod client_hello;
mod error;
mod extension;
mod parser;
mod reader;
mod transport;
mod varint;

pub use client_hello::QuicClientHello;
pub use error::Error;
pub use extension::{ExtensionType, RawExtension};
pub use parser::decode;
pub use reader::{Prefix, Reader};
pub use transport::{TransportParameter, TransportParameters, parse_transport_parameters};
pub use varint::read_varint;
