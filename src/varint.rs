/* src/varint.rs */

use crate::error::Error;

/// Decode a QUIC variable-length integer from the start of `buf`.
///
/// Returns the decoded value and the number of bytes consumed (1, 2, 4, or 8).
/// The two most significant bits of the first byte select the width and are
/// masked out of the value (RFC 9000 Section 16).
///
/// # Errors
///
/// Returns [`Error::InvalidVarint`] when `buf` is empty or shorter than the
/// width selected by its first byte.
#[must_use = "returns the decoded value without modifying the buffer"]
pub fn read_varint(buf: &[u8]) -> Result<(u64, usize), Error> {
	let &first = buf.first().ok_or(Error::InvalidVarint { need: 1, have: 0 })?;
	let len = 1usize << (first >> 6);

	let Some(rest) = buf.get(1..len) else {
		return Err(Error::InvalidVarint {
			need: len,
			have: buf.len(),
		});
	};

	let val = rest
		.iter()
		.fold(u64::from(first & 0x3f), |acc, &b| (acc << 8) | u64::from(b));
	Ok((val, len))
}

