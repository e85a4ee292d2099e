/* src/transport.rs */

//! QUIC transport parameters (RFC 9000 Section 18) carried in the
//! `quic_transport_parameters` TLS extension.

use crate::error::Error;
use crate::reader::Reader;

/// A single transport parameter.
///
/// Integer-valued parameters are decoded from their varint encoding.
/// Connection IDs and other structured values are kept as the raw bytes
/// from the message. Ids this crate does not know, GREASE and vendor ids
/// included, are preserved as [`TransportParameter::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportParameter<'a> {
	/// `0x00`
	OriginalDestinationConnectionId(&'a [u8]),
	/// `0x01`, milliseconds.
	MaxIdleTimeout(u64),
	/// `0x02`
	StatelessResetToken([u8; 16]),
	/// `0x03`
	MaxUdpPayloadSize(u64),
	/// `0x04`
	InitialMaxData(u64),
	/// `0x05`
	InitialMaxStreamDataBidiLocal(u64),
	/// `0x06`
	InitialMaxStreamDataBidiRemote(u64),
	/// `0x07`
	InitialMaxStreamDataUni(u64),
	/// `0x08`
	InitialMaxStreamsBidi(u64),
	/// `0x09`
	InitialMaxStreamsUni(u64),
	/// `0x0a`
	AckDelayExponent(u64),
	/// `0x0b`, milliseconds.
	MaxAckDelay(u64),
	/// `0x0c`, a zero-length flag.
	DisableActiveMigration,
	/// `0x0d`
	PreferredAddress(&'a [u8]),
	/// `0x0e`
	ActiveConnectionIdLimit(u64),
	/// `0x0f`
	InitialSourceConnectionId(&'a [u8]),
	/// `0x10`
	RetrySourceConnectionId(&'a [u8]),
	/// `0x20` (RFC 9221)
	MaxDatagramFrameSize(u64),
	/// `0x2ab2` (RFC 9287), a zero-length flag.
	GreaseQuicBit,
	/// `0x11` (RFC 9368) or `0xff73db` (earlier drafts), left raw.
	VersionInformation {
		/// The codepoint that carried the parameter.
		id: u64,
		/// Chosen version followed by the available versions.
		value: &'a [u8],
	},
	/// Any other id.
	Unknown {
		/// Parameter id as it appeared on the wire.
		id: u64,
		/// Parameter value, uninterpreted.
		value: &'a [u8],
	},
}

impl TransportParameter<'_> {
	/// The numeric id this parameter was encoded under.
	#[must_use]
	pub fn id(&self) -> u64 {
		match self {
			Self::OriginalDestinationConnectionId(_) => 0x00,
			Self::MaxIdleTimeout(_) => 0x01,
			Self::StatelessResetToken(_) => 0x02,
			Self::MaxUdpPayloadSize(_) => 0x03,
			Self::InitialMaxData(_) => 0x04,
			Self::InitialMaxStreamDataBidiLocal(_) => 0x05,
			Self::InitialMaxStreamDataBidiRemote(_) => 0x06,
			Self::InitialMaxStreamDataUni(_) => 0x07,
			Self::InitialMaxStreamsBidi(_) => 0x08,
			Self::InitialMaxStreamsUni(_) => 0x09,
			Self::AckDelayExponent(_) => 0x0a,
			Self::MaxAckDelay(_) => 0x0b,
			Self::DisableActiveMigration => 0x0c,
			Self::PreferredAddress(_) => 0x0d,
			Self::ActiveConnectionIdLimit(_) => 0x0e,
			Self::InitialSourceConnectionId(_) => 0x0f,
			Self::RetrySourceConnectionId(_) => 0x10,
			Self::MaxDatagramFrameSize(_) => 0x20,
			Self::GreaseQuicBit => 0x2ab2,
			Self::VersionInformation { id, .. } | Self::Unknown { id, .. } => *id,
		}
	}

	/// Whether `id` is a reserved GREASE id of the form `31 * N + 27`.
	#[must_use]
	pub fn is_grease_id(id: u64) -> bool {
		id >= 27 && (id - 27) % 31 == 0
	}
}

/// The full set of transport parameters, in the order they were sent.
///
/// Duplicates are kept as they appeared. The typed accessors report the
/// first occurrence of each id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportParameters<'a> {
	params: Vec<TransportParameter<'a>>,
}

macro_rules! varint_accessor {
	($(#[$doc:meta] $name:ident => $variant:ident;)*) => {
		$(
			#[$doc]
			#[must_use]
			pub fn $name(&self) -> Option<u64> {
				self.params.iter().find_map(|p| match p {
					TransportParameter::$variant(v) => Some(*v),
					_ => None,
				})
			}
		)*
	};
}

macro_rules! bytes_accessor {
	($(#[$doc:meta] $name:ident => $variant:ident;)*) => {
		$(
			#[$doc]
			#[must_use]
			pub fn $name(&self) -> Option<&'a [u8]> {
				self.params.iter().find_map(|p| match p {
					TransportParameter::$variant(v) => Some(*v),
					_ => None,
				})
			}
		)*
	};
}

impl<'a> TransportParameters<'a> {
	/// All parameters in wire order.
	#[must_use]
	pub fn params(&self) -> &[TransportParameter<'a>] {
		&self.params
	}

	/// Parameter ids in wire order.
	pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
		self.params.iter().map(TransportParameter::id)
	}

	/// First parameter sent under `id`.
	#[must_use]
	pub fn get(&self, id: u64) -> Option<&TransportParameter<'a>> {
		self.params.iter().find(|p| p.id() == id)
	}

	/// Number of parameters, counting duplicates.
	#[must_use]
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Whether no parameters were present, which is also the case when the
	/// extension itself was absent.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	varint_accessor! {
		/// `max_idle_timeout` in milliseconds.
		max_idle_timeout => MaxIdleTimeout;
		/// `max_udp_payload_size` in bytes.
		max_udp_payload_size => MaxUdpPayloadSize;
		/// `initial_max_data` in bytes.
		initial_max_data => InitialMaxData;
		/// `initial_max_stream_data_bidi_local` in bytes.
		initial_max_stream_data_bidi_local => InitialMaxStreamDataBidiLocal;
		/// `initial_max_stream_data_bidi_remote` in bytes.
		initial_max_stream_data_bidi_remote => InitialMaxStreamDataBidiRemote;
		/// `initial_max_stream_data_uni` in bytes.
		initial_max_stream_data_uni => InitialMaxStreamDataUni;
		/// `initial_max_streams_bidi`.
		initial_max_streams_bidi => InitialMaxStreamsBidi;
		/// `initial_max_streams_uni`.
		initial_max_streams_uni => InitialMaxStreamsUni;
		/// `ack_delay_exponent`.
		ack_delay_exponent => AckDelayExponent;
		/// `max_ack_delay` in milliseconds.
		max_ack_delay => MaxAckDelay;
		/// `active_connection_id_limit`.
		active_connection_id_limit => ActiveConnectionIdLimit;
		/// `max_datagram_frame_size` in bytes.
		max_datagram_frame_size => MaxDatagramFrameSize;
	}

	bytes_accessor! {
		/// `original_destination_connection_id`.
		original_destination_connection_id => OriginalDestinationConnectionId;
		/// `preferred_address`, undecoded.
		preferred_address => PreferredAddress;
		/// `initial_source_connection_id`.
		initial_source_connection_id => InitialSourceConnectionId;
		/// `retry_source_connection_id`.
		retry_source_connection_id => RetrySourceConnectionId;
	}

	/// `stateless_reset_token`.
	#[must_use]
	pub fn stateless_reset_token(&self) -> Option<[u8; 16]> {
		self.params.iter().find_map(|p| match p {
			TransportParameter::StatelessResetToken(t) => Some(*t),
			_ => None,
		})
	}

	/// Whether `disable_active_migration` was present.
	#[must_use]
	pub fn disable_active_migration(&self) -> bool {
		self.get(0x0c).is_some()
	}

	/// Whether `grease_quic_bit` was present.
	#[must_use]
	pub fn grease_quic_bit(&self) -> bool {
		self.get(0x2ab2).is_some()
	}
}

/// Decode the payload of a `quic_transport_parameters` extension.
///
/// The payload is a sequence of `(id, length, value)` entries with id and
/// length both encoded as QUIC varints. The sequence must end exactly at the
/// end of `data`.
///
/// # Errors
///
/// Returns [`Error::InvalidVarint`] when an id, length or varint value runs
/// past its bounds, [`Error::TruncatedInput`] when a value is shorter than
/// its declared length, and [`Error::MalformedLength`] when a value does not
/// have the size its id requires.
pub fn parse_transport_parameters(data: &[u8]) -> Result<TransportParameters<'_>, Error> {
	let mut r = Reader::new(data);
	let mut params = Vec::new();

	while !r.is_empty() {
		let id = r.read_varint()?;
		let len = r.read_varint()?;
		let len = usize::try_from(len).map_err(|_| Error::TruncatedInput {
			field: "transport parameter value",
			need: usize::MAX,
			have: r.remaining(),
		})?;
		let value = r.read_bytes(len, "transport parameter value")?;
		params.push(decode_parameter(id, value)?);
	}

	Ok(TransportParameters { params })
}

fn decode_parameter(id: u64, value: &[u8]) -> Result<TransportParameter<'_>, Error> {
	let param = match id {
		0x00 => TransportParameter::OriginalDestinationConnectionId(value),
		0x01 => TransportParameter::MaxIdleTimeout(varint_value(value)?),
		0x02 => {
			let token = <[u8; 16]>::try_from(value).map_err(|_| Error::MalformedLength {
				field: "stateless_reset_token",
				len: value.len(),
			})?;
			TransportParameter::StatelessResetToken(token)
		}
		0x03 => TransportParameter::MaxUdpPayloadSize(varint_value(value)?),
		0x04 => TransportParameter::InitialMaxData(varint_value(value)?),
		0x05 => TransportParameter::InitialMaxStreamDataBidiLocal(varint_value(value)?),
		0x06 => TransportParameter::InitialMaxStreamDataBidiRemote(varint_value(value)?),
		0x07 => TransportParameter::InitialMaxStreamDataUni(varint_value(value)?),
		0x08 => TransportParameter::InitialMaxStreamsBidi(varint_value(value)?),
		0x09 => TransportParameter::InitialMaxStreamsUni(varint_value(value)?),
		0x0a => TransportParameter::AckDelayExponent(varint_value(value)?),
		0x0b => TransportParameter::MaxAckDelay(varint_value(value)?),
		0x0c => {
			flag_value(value, "disable_active_migration")?;
			TransportParameter::DisableActiveMigration
		}
		0x0d => TransportParameter::PreferredAddress(value),
		0x0e => TransportParameter::ActiveConnectionIdLimit(varint_value(value)?),
		0x0f => TransportParameter::InitialSourceConnectionId(value),
		0x10 => TransportParameter::RetrySourceConnectionId(value),
		0x20 => TransportParameter::MaxDatagramFrameSize(varint_value(value)?),
		0x2ab2 => {
			flag_value(value, "grease_quic_bit")?;
			TransportParameter::GreaseQuicBit
		}
		0x11 | 0xff73db => TransportParameter::VersionInformation { id, value },
		_ => TransportParameter::Unknown { id, value },
	};
	Ok(param)
}

/// A varint that must occupy the value exactly.
fn varint_value(value: &[u8]) -> Result<u64, Error> {
	let mut r = Reader::new(value);
	let v = r.read_varint()?;
	r.finish("transport parameter varint")?;
	Ok(v)
}

fn flag_value(value: &[u8], field: &'static str) -> Result<(), Error> {
	match value.len() {
		0 => Ok(()),
		len => Err(Error::MalformedLength { field, len }),
	}
}
