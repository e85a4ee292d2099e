/* src/client_hello.rs */

use crate::extension::{Extension, RawExtension};
use crate::transport::TransportParameters;

/// A decoded ClientHello, borrowing from the buffer it was decoded from.
///
/// List-valued fields keep wire order and duplicates. A field whose
/// extension was absent is empty, which is indistinguishable from the
/// extension carrying an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuicClientHello<'a> {
	raw: &'a [u8],
	handshake_version: u16,
	random: &'a [u8],
	session_id: &'a [u8],
	cipher_suites: Vec<u16>,
	compression_methods: &'a [u8],
	extensions: Vec<RawExtension<'a>>,
	server_name: Option<&'a str>,
	named_group_list: Vec<u16>,
	ec_point_format_list: Vec<u8>,
	signature_scheme_list: Vec<u16>,
	alpn: Vec<&'a [u8]>,
	cert_compress_algo: Vec<u16>,
	record_size_limit: Vec<u16>,
	supported_versions: Vec<u16>,
	psk_key_exchange_modes: Vec<u8>,
	key_share: Vec<u16>,
	application_settings: Vec<&'a [u8]>,
	transport_parameters: TransportParameters<'a>,
}

impl<'a> QuicClientHello<'a> {
	/// The complete handshake message exactly as passed to [`crate::decode`].
	#[must_use]
	pub fn raw(&self) -> &'a [u8] {
		self.raw
	}

	/// The `legacy_version` field, `0x0303` for any TLS 1.3 client.
	#[must_use]
	pub fn handshake_version(&self) -> u16 {
		self.handshake_version
	}

	/// The 32-byte client random.
	#[must_use]
	pub fn random(&self) -> &'a [u8] {
		self.random
	}

	/// The `legacy_session_id`, empty for QUIC clients.
	#[must_use]
	pub fn session_id(&self) -> &'a [u8] {
		self.session_id
	}

	/// Cipher suites in client preference order.
	#[must_use]
	pub fn cipher_suites(&self) -> &[u16] {
		&self.cipher_suites
	}

	/// The `legacy_compression_methods` list.
	#[must_use]
	pub fn compression_methods(&self) -> &'a [u8] {
		self.compression_methods
	}

	/// Every extension in wire order, recognized or not.
	#[must_use]
	pub fn extensions(&self) -> &[RawExtension<'a>] {
		&self.extensions
	}

	/// Extension types in wire order.
	pub fn extension_types(&self) -> impl Iterator<Item = u16> + '_ {
		self.extensions.iter().map(|e| e.ext_type)
	}

	/// The first `host_name` entry of the server_name extension.
	#[must_use]
	pub fn server_name(&self) -> Option<&'a str> {
		self.server_name
	}

	/// supported_groups.
	#[must_use]
	pub fn named_group_list(&self) -> &[u16] {
		&self.named_group_list
	}

	/// ec_point_formats.
	#[must_use]
	pub fn ec_point_format_list(&self) -> &[u8] {
		&self.ec_point_format_list
	}

	/// signature_algorithms.
	#[must_use]
	pub fn signature_scheme_list(&self) -> &[u16] {
		&self.signature_scheme_list
	}

	/// ALPN protocol names, such as `h3`.
	#[must_use]
	pub fn alpn(&self) -> &[&'a [u8]] {
		&self.alpn
	}

	/// compress_certificate algorithms.
	#[must_use]
	pub fn cert_compress_algo(&self) -> &[u16] {
		&self.cert_compress_algo
	}

	/// record_size_limit. The extension holds a single value, so this has at
	/// most one element per occurrence of the extension.
	#[must_use]
	pub fn record_size_limit(&self) -> &[u16] {
		&self.record_size_limit
	}

	/// supported_versions.
	#[must_use]
	pub fn supported_versions(&self) -> &[u16] {
		&self.supported_versions
	}

	/// psk_key_exchange_modes.
	#[must_use]
	pub fn psk_key_exchange_modes(&self) -> &[u8] {
		&self.psk_key_exchange_modes
	}

	/// Groups offered in key_share. Key material is not retained.
	#[must_use]
	pub fn key_share(&self) -> &[u16] {
		&self.key_share
	}

	/// Protocol names listed in application_settings (ALPS).
	#[must_use]
	pub fn application_settings(&self) -> &[&'a [u8]] {
		&self.application_settings
	}

	/// QUIC transport parameters, empty when the extension was absent.
	#[must_use]
	pub fn transport_parameters(&self) -> &TransportParameters<'a> {
		&self.transport_parameters
	}
}

/// Accumulates decoded fields during a single decode.
///
/// Only [`ClientHelloBuilder::build`] produces a [`QuicClientHello`], and the
/// parser calls it after the whole message has been consumed.
#[derive(Debug, Default)]
pub(crate) struct ClientHelloBuilder<'a> {
	handshake_version: u16,
	random: &'a [u8],
	session_id: &'a [u8],
	cipher_suites: Vec<u16>,
	compression_methods: &'a [u8],
	extensions: Vec<RawExtension<'a>>,
	server_name: Option<&'a str>,
	named_group_list: Vec<u16>,
	ec_point_format_list: Vec<u8>,
	signature_scheme_list: Vec<u16>,
	alpn: Vec<&'a [u8]>,
	cert_compress_algo: Vec<u16>,
	record_size_limit: Vec<u16>,
	supported_versions: Vec<u16>,
	psk_key_exchange_modes: Vec<u8>,
	key_share: Vec<u16>,
	application_settings: Vec<&'a [u8]>,
	transport_parameters: Option<TransportParameters<'a>>,
}

impl<'a> ClientHelloBuilder<'a> {
	pub(crate) fn fixed_fields(
		&mut self,
		handshake_version: u16,
		random: &'a [u8],
		session_id: &'a [u8],
		cipher_suites: Vec<u16>,
		compression_methods: &'a [u8],
	) {
		self.handshake_version = handshake_version;
		self.random = random;
		self.session_id = session_id;
		self.cipher_suites = cipher_suites;
		self.compression_methods = compression_methods;
	}

	/// Record an extension and fold its decoded payload into the result.
	///
	/// A repeated extension appends to list fields; for server_name and
	/// quic_transport_parameters the first occurrence wins.
	pub(crate) fn extension(&mut self, raw: RawExtension<'a>, ext: Extension<'a>) {
		self.extensions.push(raw);
		match ext {
			Extension::ServerName(name) => {
				self.server_name = self.server_name.or(name);
			}
			Extension::SupportedGroups(v) => self.named_group_list.extend(v),
			Extension::EcPointFormats(v) => self.ec_point_format_list.extend(v),
			Extension::SignatureAlgorithms(v) => self.signature_scheme_list.extend(v),
			Extension::Alpn(v) => self.alpn.extend(v),
			Extension::CompressCertificate(v) => self.cert_compress_algo.extend(v),
			Extension::RecordSizeLimit(limit) => self.record_size_limit.push(limit),
			Extension::SupportedVersions(v) => self.supported_versions.extend(v),
			Extension::PskKeyExchangeModes(v) => self.psk_key_exchange_modes.extend(v),
			Extension::KeyShare(v) => self.key_share.extend(v),
			Extension::QuicTransportParameters(params) => {
				self.transport_parameters.get_or_insert(params);
			}
			Extension::ApplicationSettings(v) => self.application_settings.extend(v),
			Extension::Opaque => {}
		}
	}

	pub(crate) fn build(self, raw: &'a [u8]) -> QuicClientHello<'a> {
		QuicClientHello {
			raw,
			handshake_version: self.handshake_version,
			random: self.random,
			session_id: self.session_id,
			cipher_suites: self.cipher_suites,
			compression_methods: self.compression_methods,
			extensions: self.extensions,
			server_name: self.server_name,
			named_group_list: self.named_group_list,
			ec_point_format_list: self.ec_point_format_list,
			signature_scheme_list: self.signature_scheme_list,
			alpn: self.alpn,
			cert_compress_algo: self.cert_compress_algo,
			record_size_limit: self.record_size_limit,
			supported_versions: self.supported_versions,
			psk_key_exchange_modes: self.psk_key_exchange_modes,
			key_share: self.key_share,
			application_settings: self.application_settings,
			transport_parameters: self.transport_parameters.unwrap_or_default(),
		}
	}
}
