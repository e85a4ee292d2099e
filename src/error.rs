/* src/error.rs */

/// Errors that can occur while decoding a QUIC ClientHello.
///
/// Every variant is fatal to the decode that produced it; no partially
/// decoded message is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// A read requested more bytes than remain in the enclosing block.
	#[error("truncated input reading {field}: need {need} bytes, have {have}")]
	TruncatedInput {
		/// The field that was being read.
		field: &'static str,
		/// Number of bytes the read required.
		need: usize,
		/// Number of bytes left in the enclosing block.
		have: usize,
	},

	/// A declared length does not line up with its enclosing block: bytes
	/// were left over, or the length is not valid for the field's shape.
	#[error("malformed length {len} in {field}")]
	MalformedLength {
		/// The block or field whose length is inconsistent.
		field: &'static str,
		/// The offending length (declared length or leftover byte count).
		len: usize,
	},

	/// The handshake message is not a ClientHello.
	#[error("unexpected handshake message type {0:#04x}")]
	UnexpectedMessageType(u8),

	/// A QUIC variable-length integer selects a width larger than the
	/// bytes that remain.
	#[error("invalid varint encoding: need {need} bytes, have {have}")]
	InvalidVarint {
		/// Width selected by the two high bits of the first byte.
		need: usize,
		/// Number of bytes available.
		have: usize,
	},

	/// The server_name host_name entry is not valid UTF-8.
	#[error("server name is not valid UTF-8")]
	InvalidServerName,
}
