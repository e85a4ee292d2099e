/* src/parser.rs */

use crate::client_hello::{ClientHelloBuilder, QuicClientHello};
use crate::error::Error;
use crate::extension::{ExtensionType, RawExtension, parse_extension};
use crate::reader::{Prefix, Reader};

const HANDSHAKE_TYPE_CLIENT_HELLO: u8 = 0x01;

/// Decode a TLS ClientHello handshake message taken from a QUIC CRYPTO
/// stream.
///
/// `data` must hold exactly one complete handshake message starting with
/// the handshake type byte `0x01`; the record layer is not present in QUIC.
/// The returned message borrows from `data`, and
/// [`QuicClientHello::raw`] gives back `data` itself.
///
/// Extensions without a decoder are recorded but their payload is not
/// inspected, so unknown or future extension types never fail a decode.
///
/// # Errors
///
/// Returns [`Error::UnexpectedMessageType`] when the first byte is not
/// ClientHello, [`Error::TruncatedInput`] when any field runs past the end
/// of its enclosing block, [`Error::MalformedLength`] when a block is not
/// consumed exactly or a length is invalid for its field,
/// [`Error::InvalidVarint`] for a truncated varint in the transport
/// parameters, and [`Error::InvalidServerName`] for a non UTF-8 host name.
pub fn decode(data: &[u8]) -> Result<QuicClientHello<'_>, Error> {
	let result = decode_message(data);

	#[cfg(feature = "tracing")]
	match &result {
		Ok(hello) => tracing::debug!(
			len = data.len(),
			extensions = hello.extensions().len(),
			transport_parameters = hello.transport_parameters().len(),
			"decoded QUIC ClientHello"
		),
		Err(e) => tracing::debug!(len = data.len(), error = %e, "failed to decode QUIC ClientHello"),
	}

	result
}

fn decode_message(data: &[u8]) -> Result<QuicClientHello<'_>, Error> {
	let mut r = Reader::new(data);

	let msg_type = r.read_u8("handshake type")?;
	if msg_type != HANDSHAKE_TYPE_CLIENT_HELLO {
		return Err(Error::UnexpectedMessageType(msg_type));
	}
	let body = r.read_prefixed(Prefix::U24, "handshake body")?;
	r.finish("handshake message")?;

	let mut builder = ClientHelloBuilder::default();
	parse_body(body, &mut builder)?;
	Ok(builder.build(data))
}

fn parse_body<'a>(body: &'a [u8], builder: &mut ClientHelloBuilder<'a>) -> Result<(), Error> {
	let mut r = Reader::new(body);

	let legacy_version = r.read_u16("legacy version")?;
	let random = r.read_bytes(32, "client random")?;

	let session_id = r.read_prefixed(Prefix::U8, "legacy session id")?;
	if session_id.len() > 32 {
		return Err(Error::MalformedLength {
			field: "legacy session id",
			len: session_id.len(),
		});
	}

	let suites = r.read_prefixed(Prefix::U16, "cipher suites")?;
	if suites.len() % 2 != 0 {
		return Err(Error::MalformedLength {
			field: "cipher suites",
			len: suites.len(),
		});
	}
	let cipher_suites = suites
		.chunks_exact(2)
		.map(|c| u16::from_be_bytes([c[0], c[1]]))
		.collect();

	let compression_methods = r.read_prefixed(Prefix::U8, "compression methods")?;

	builder.fixed_fields(
		legacy_version,
		random,
		session_id,
		cipher_suites,
		compression_methods,
	);

	// The extensions block may be omitted entirely.
	if r.is_empty() {
		return Ok(());
	}
	let extensions = r.read_prefixed(Prefix::U16, "extensions")?;
	r.finish("client hello body")?;

	parse_extensions(extensions, builder)
}

fn parse_extensions<'a>(block: &'a [u8], builder: &mut ClientHelloBuilder<'a>) -> Result<(), Error> {
	let mut r = Reader::new(block);

	while !r.is_empty() {
		let ext_type = r.read_u16("extension type")?;
		let data = r.read_prefixed(Prefix::U16, "extension data")?;
		let ext = parse_extension(ExtensionType::from(ext_type), data)?;

		#[cfg(feature = "tracing")]
		if matches!(ext, crate::extension::Extension::Opaque) {
			tracing::trace!(ext_type, len = data.len(), "extension payload not decoded");
		}

		builder.extension(RawExtension { ext_type, data }, ext);
	}

	Ok(())
}
