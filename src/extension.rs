/* src/extension.rs */

use crate::error::Error;
use crate::reader::{Prefix, Reader};
use crate::transport::{TransportParameters, parse_transport_parameters};

/// TLS extension codepoints seen in QUIC ClientHello messages.
///
/// Equality and hashing go by the numeric code, so `Unknown(0)` equals
/// [`ExtensionType::ServerName`]. [`ExtensionType::from`] only produces
/// `Unknown` for codes without a named variant.
#[derive(Debug, Clone, Copy)]
pub enum ExtensionType {
	/// server_name (RFC 6066)
	ServerName,
	/// max_fragment_length (RFC 6066)
	MaxFragmentLength,
	/// status_request (RFC 6066)
	StatusRequest,
	/// supported_groups (RFC 8422, RFC 7919)
	SupportedGroups,
	/// ec_point_formats (RFC 8422)
	EcPointFormats,
	/// signature_algorithms (RFC 8446)
	SignatureAlgorithms,
	/// application_layer_protocol_negotiation (RFC 7301)
	ApplicationLayerProtocolNegotiation,
	/// signed_certificate_timestamp (RFC 6962)
	SignedCertificateTimestamp,
	/// padding (RFC 7685)
	Padding,
	/// extended_master_secret (RFC 7627)
	ExtendedMasterSecret,
	/// compress_certificate (RFC 8879)
	CompressCertificate,
	/// record_size_limit (RFC 8449)
	RecordSizeLimit,
	/// session_ticket (RFC 5077)
	SessionTicket,
	/// pre_shared_key (RFC 8446)
	PreSharedKey,
	/// early_data (RFC 8446)
	EarlyData,
	/// supported_versions (RFC 8446)
	SupportedVersions,
	/// cookie (RFC 8446)
	Cookie,
	/// psk_key_exchange_modes (RFC 8446)
	PskKeyExchangeModes,
	/// post_handshake_auth (RFC 8446)
	PostHandshakeAuth,
	/// signature_algorithms_cert (RFC 8446)
	SignatureAlgorithmsCert,
	/// key_share (RFC 8446)
	KeyShare,
	/// quic_transport_parameters (RFC 9001)
	QuicTransportParameters,
	/// application_settings, original codepoint 17513
	ApplicationSettings,
	/// application_settings, codepoint 17613 used by newer Chrome releases
	ApplicationSettingsNew,
	/// encrypted_client_hello (draft-ietf-tls-esni)
	EncryptedClientHello,
	/// renegotiation_info (RFC 5746)
	RenegotiationInfo,
	/// A codepoint with no named variant, GREASE values included.
	Unknown(u16),
}

impl ExtensionType {
	/// Whether `code` is one of the reserved GREASE values (RFC 8701).
	#[must_use]
	pub fn is_grease(code: u16) -> bool {
		let [hi, lo] = code.to_be_bytes();
		hi == lo && hi & 0x0f == 0x0a
	}
}

impl PartialEq for ExtensionType {
	fn eq(&self, other: &Self) -> bool {
		u16::from(*self) == u16::from(*other)
	}
}

impl Eq for ExtensionType {}

impl core::hash::Hash for ExtensionType {
	fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
		u16::from(*self).hash(state);
	}
}

impl From<u16> for ExtensionType {
	fn from(value: u16) -> Self {
		match value {
			0 => Self::ServerName,
			1 => Self::MaxFragmentLength,
			5 => Self::StatusRequest,
			10 => Self::SupportedGroups,
			11 => Self::EcPointFormats,
			13 => Self::SignatureAlgorithms,
			16 => Self::ApplicationLayerProtocolNegotiation,
			18 => Self::SignedCertificateTimestamp,
			21 => Self::Padding,
			23 => Self::ExtendedMasterSecret,
			27 => Self::CompressCertificate,
			28 => Self::RecordSizeLimit,
			35 => Self::SessionTicket,
			41 => Self::PreSharedKey,
			42 => Self::EarlyData,
			43 => Self::SupportedVersions,
			44 => Self::Cookie,
			45 => Self::PskKeyExchangeModes,
			49 => Self::PostHandshakeAuth,
			50 => Self::SignatureAlgorithmsCert,
			51 => Self::KeyShare,
			57 => Self::QuicTransportParameters,
			17513 => Self::ApplicationSettings,
			17613 => Self::ApplicationSettingsNew,
			0xfe0d => Self::EncryptedClientHello,
			0xff01 => Self::RenegotiationInfo,
			n => Self::Unknown(n),
		}
	}
}

impl From<ExtensionType> for u16 {
	fn from(value: ExtensionType) -> Self {
		match value {
			ExtensionType::ServerName => 0,
			ExtensionType::MaxFragmentLength => 1,
			ExtensionType::StatusRequest => 5,
			ExtensionType::SupportedGroups => 10,
			ExtensionType::EcPointFormats => 11,
			ExtensionType::SignatureAlgorithms => 13,
			ExtensionType::ApplicationLayerProtocolNegotiation => 16,
			ExtensionType::SignedCertificateTimestamp => 18,
			ExtensionType::Padding => 21,
			ExtensionType::ExtendedMasterSecret => 23,
			ExtensionType::CompressCertificate => 27,
			ExtensionType::RecordSizeLimit => 28,
			ExtensionType::SessionTicket => 35,
			ExtensionType::PreSharedKey => 41,
			ExtensionType::EarlyData => 42,
			ExtensionType::SupportedVersions => 43,
			ExtensionType::Cookie => 44,
			ExtensionType::PskKeyExchangeModes => 45,
			ExtensionType::PostHandshakeAuth => 49,
			ExtensionType::SignatureAlgorithmsCert => 50,
			ExtensionType::KeyShare => 51,
			ExtensionType::QuicTransportParameters => 57,
			ExtensionType::ApplicationSettings => 17513,
			ExtensionType::ApplicationSettingsNew => 17613,
			ExtensionType::EncryptedClientHello => 0xfe0d,
			ExtensionType::RenegotiationInfo => 0xff01,
			ExtensionType::Unknown(n) => n,
		}
	}
}

/// An extension exactly as it appeared on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawExtension<'a> {
	/// The 16-bit extension type.
	pub ext_type: u16,
	/// The extension payload, without the type and length header.
	pub data: &'a [u8],
}

impl RawExtension<'_> {
	/// The named codepoint of this extension.
	#[must_use]
	pub fn kind(&self) -> ExtensionType {
		ExtensionType::from(self.ext_type)
	}
}

/// Decoded payload of a single extension.
#[derive(Debug)]
pub(crate) enum Extension<'a> {
	ServerName(Option<&'a str>),
	SupportedGroups(Vec<u16>),
	EcPointFormats(Vec<u8>),
	SignatureAlgorithms(Vec<u16>),
	Alpn(Vec<&'a [u8]>),
	CompressCertificate(Vec<u16>),
	RecordSizeLimit(u16),
	SupportedVersions(Vec<u16>),
	PskKeyExchangeModes(Vec<u8>),
	KeyShare(Vec<u16>),
	QuicTransportParameters(TransportParameters<'a>),
	ApplicationSettings(Vec<&'a [u8]>),
	/// Recognized or not, carries nothing beyond the raw bytes.
	Opaque,
}

/// Decode the payload of one extension according to its type.
///
/// Types without a decoder are returned as [`Extension::Opaque`] without
/// looking inside the payload; their outer length alone delimits them.
pub(crate) fn parse_extension(ext_type: ExtensionType, data: &[u8]) -> Result<Extension<'_>, Error> {
	let ext = match ext_type {
		ExtensionType::ServerName => Extension::ServerName(parse_server_name(data)?),
		ExtensionType::SupportedGroups => {
			Extension::SupportedGroups(u16_list(data, Prefix::U16, "supported_groups")?)
		}
		ExtensionType::EcPointFormats => {
			Extension::EcPointFormats(u8_list(data, "ec_point_formats")?)
		}
		ExtensionType::SignatureAlgorithms => {
			Extension::SignatureAlgorithms(u16_list(data, Prefix::U16, "signature_algorithms")?)
		}
		ExtensionType::ApplicationLayerProtocolNegotiation => {
			Extension::Alpn(name_list(data, "application_layer_protocol_negotiation")?)
		}
		ExtensionType::CompressCertificate => {
			Extension::CompressCertificate(u16_list(data, Prefix::U8, "compress_certificate")?)
		}
		ExtensionType::RecordSizeLimit => {
			let mut r = Reader::new(data);
			let limit = r.read_u16("record_size_limit")?;
			r.finish("record_size_limit")?;
			Extension::RecordSizeLimit(limit)
		}
		ExtensionType::SupportedVersions => {
			Extension::SupportedVersions(u16_list(data, Prefix::U8, "supported_versions")?)
		}
		ExtensionType::PskKeyExchangeModes => {
			Extension::PskKeyExchangeModes(u8_list(data, "psk_key_exchange_modes")?)
		}
		ExtensionType::KeyShare => Extension::KeyShare(parse_key_share(data)?),
		ExtensionType::QuicTransportParameters => {
			Extension::QuicTransportParameters(parse_transport_parameters(data)?)
		}
		ExtensionType::ApplicationSettings | ExtensionType::ApplicationSettingsNew => {
			Extension::ApplicationSettings(name_list(data, "application_settings")?)
		}
		_ => Extension::Opaque,
	};
	Ok(ext)
}

/// `ServerNameList`: `{ NameType name_type; HostName name<1..2^16-1> }<1..2^16-1>`.
///
/// Only the first `host_name` (type 0) entry is surfaced. An empty payload
/// is accepted and yields no name.
fn parse_server_name(data: &[u8]) -> Result<Option<&str>, Error> {
	if data.is_empty() {
		return Ok(None);
	}

	let mut outer = Reader::new(data);
	let list = outer.read_prefixed(Prefix::U16, "server_name list")?;
	outer.finish("server_name")?;

	let mut r = Reader::new(list);
	let mut host_name = None;
	while !r.is_empty() {
		let name_type = r.read_u8("server_name type")?;
		let name = r.read_prefixed(Prefix::U16, "server_name entry")?;
		if name_type == 0 && host_name.is_none() {
			host_name = Some(core::str::from_utf8(name).map_err(|_| Error::InvalidServerName)?);
		}
	}
	Ok(host_name)
}

/// `KeyShareClientHello`: `KeyShareEntry client_shares<0..2^16-1>`, where
/// each entry is a group followed by opaque key material. Only the groups
/// are kept.
fn parse_key_share(data: &[u8]) -> Result<Vec<u16>, Error> {
	let mut outer = Reader::new(data);
	let list = outer.read_prefixed(Prefix::U16, "key_share list")?;
	outer.finish("key_share")?;

	let mut r = Reader::new(list);
	let mut groups = Vec::new();
	while !r.is_empty() {
		groups.push(r.read_u16("key_share group")?);
		r.read_prefixed(Prefix::U16, "key_share key_exchange")?;
	}
	Ok(groups)
}

/// A length-prefixed list of `u16` values filling the whole payload.
fn u16_list(data: &[u8], prefix: Prefix, field: &'static str) -> Result<Vec<u16>, Error> {
	let mut outer = Reader::new(data);
	let list = outer.read_prefixed(prefix, field)?;
	outer.finish(field)?;

	if list.len() % 2 != 0 {
		return Err(Error::MalformedLength {
			field,
			len: list.len(),
		});
	}
	Ok(list
		.chunks_exact(2)
		.map(|c| u16::from_be_bytes([c[0], c[1]]))
		.collect())
}

/// A one-byte length-prefixed list of `u8` values filling the whole payload.
fn u8_list(data: &[u8], field: &'static str) -> Result<Vec<u8>, Error> {
	let mut outer = Reader::new(data);
	let list = outer.read_prefixed(Prefix::U8, field)?;
	outer.finish(field)?;
	Ok(list.to_vec())
}

/// `ProtocolName protocol_name_list<2..2^16-1>` with each name carrying a
/// one-byte length. Shared by ALPN and ALPS.
fn name_list<'a>(data: &'a [u8], field: &'static str) -> Result<Vec<&'a [u8]>, Error> {
	let mut outer = Reader::new(data);
	let list = outer.read_prefixed(Prefix::U16, field)?;
	outer.finish(field)?;

	let mut r = Reader::new(list);
	let mut names = Vec::new();
	while !r.is_empty() {
		names.push(r.read_prefixed(Prefix::U8, field)?);
	}
	Ok(names)
}
