/* src/reader.rs */

use crate::error::Error;
use crate::varint::read_varint;

/// Width of a TLS-style length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
	/// One-byte length, e.g. `opaque legacy_session_id<0..32>`.
	U8,
	/// Two-byte length, e.g. `CipherSuite cipher_suites<2..2^16-2>`.
	U16,
	/// Three-byte length, as used by the handshake message header.
	U24,
}

/// Bounds-checked forward cursor over a byte slice.
///
/// Every read either succeeds and advances the cursor, or fails and leaves
/// the position where it was. Slices returned by the reader borrow from the
/// underlying buffer rather than the reader itself.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
	buf: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	/// Create a reader positioned at the start of `buf`.
	#[must_use]
	pub fn new(buf: &'a [u8]) -> Self {
		Self { buf, pos: 0 }
	}

	/// Current offset from the start of the buffer.
	#[must_use]
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Number of unread bytes.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}

	/// Whether every byte has been consumed.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Read exactly `n` bytes.
	///
	/// # Errors
	///
	/// Returns [`Error::TruncatedInput`] when fewer than `n` bytes remain.
	pub fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], Error> {
		let bytes = self
			.pos
			.checked_add(n)
			.and_then(|end| self.buf.get(self.pos..end))
			.ok_or(Error::TruncatedInput {
				field,
				need: n,
				have: self.remaining(),
			})?;
		self.pos += n;
		Ok(bytes)
	}

	fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], Error> {
		let bytes = self.read_bytes(N, field)?;
		let mut out = [0u8; N];
		out.copy_from_slice(bytes);
		Ok(out)
	}

	/// Read a single byte.
	///
	/// # Errors
	///
	/// Returns [`Error::TruncatedInput`] when the reader is exhausted.
	pub fn read_u8(&mut self, field: &'static str) -> Result<u8, Error> {
		let [b] = self.read_array(field)?;
		Ok(b)
	}

	/// Read a big-endian `u16`.
	///
	/// # Errors
	///
	/// Returns [`Error::TruncatedInput`] when fewer than two bytes remain.
	pub fn read_u16(&mut self, field: &'static str) -> Result<u16, Error> {
		self.read_array(field).map(u16::from_be_bytes)
	}

	/// Read a big-endian 24-bit integer.
	///
	/// # Errors
	///
	/// Returns [`Error::TruncatedInput`] when fewer than three bytes remain.
	pub fn read_u24(&mut self, field: &'static str) -> Result<u32, Error> {
		let [a, b, c] = self.read_array(field)?;
		Ok(u32::from_be_bytes([0, a, b, c]))
	}

	/// Read a big-endian `u32`.
	///
	/// # Errors
	///
	/// Returns [`Error::TruncatedInput`] when fewer than four bytes remain.
	pub fn read_u32(&mut self, field: &'static str) -> Result<u32, Error> {
		self.read_array(field).map(u32::from_be_bytes)
	}

	/// Read a length of the given width, then exactly that many bytes.
	///
	/// # Errors
	///
	/// Returns [`Error::TruncatedInput`] when either the length itself or the
	/// bytes it declares run past the end of the buffer. The cursor is left
	/// untouched in both cases.
	pub fn read_prefixed(&mut self, prefix: Prefix, field: &'static str) -> Result<&'a [u8], Error> {
		let start = self.pos;
		let len = match prefix {
			Prefix::U8 => self.read_u8(field).map(usize::from),
			Prefix::U16 => self.read_u16(field).map(usize::from),
			Prefix::U24 => self.read_u24(field).map(|n| n as usize),
		}?;
		self.read_bytes(len, field).inspect_err(|_| self.pos = start)
	}

	/// Read a QUIC variable-length integer.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidVarint`] when the width selected by the first
	/// byte exceeds the remaining bytes.
	pub fn read_varint(&mut self) -> Result<u64, Error> {
		let rest = self.buf.get(self.pos..).unwrap_or_default();
		let (val, len) = read_varint(rest)?;
		self.pos += len;
		Ok(val)
	}

	/// Consume the reader, requiring that nothing is left unread.
	///
	/// # Errors
	///
	/// Returns [`Error::MalformedLength`] carrying the number of leftover
	/// bytes when the block was not consumed exactly.
	pub fn finish(self, field: &'static str) -> Result<(), Error> {
		match self.remaining() {
			0 => Ok(()),
			len => Err(Error::MalformedLength { field, len }),
		}
	}
}
