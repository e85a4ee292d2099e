/* tests/varint.rs */

#![allow(missing_docs)]

use quic_clienthello::{Error, read_varint};

#[test]
fn one_byte_zero() {
	assert_eq!(read_varint(&[0x00]).unwrap(), (0, 1));
}

#[test]
fn one_byte_max() {
	assert_eq!(read_varint(&[0x3f]).unwrap(), (63, 1));
}

#[test]
fn two_byte_min_canonical() {
	// 64 = 01_000000 01000000
	assert_eq!(read_varint(&[0x40, 0x40]).unwrap(), (64, 2));
}

#[test]
fn two_byte_max() {
	assert_eq!(read_varint(&[0x7f, 0xff]).unwrap(), (16383, 2));
}

#[test]
fn four_byte_min_canonical() {
	assert_eq!(read_varint(&[0x80, 0x00, 0x40, 0x00]).unwrap(), (16384, 4));
}

#[test]
fn four_byte_max() {
	assert_eq!(
		read_varint(&[0xbf, 0xff, 0xff, 0xff]).unwrap(),
		((1 << 30) - 1, 4)
	);
}

#[test]
fn eight_byte_min_canonical() {
	assert_eq!(
		read_varint(&[0xc0, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00]).unwrap(),
		(1 << 30, 8)
	);
}

#[test]
fn eight_byte_max() {
	assert_eq!(
		read_varint(&[0xff; 8]).unwrap(),
		((1 << 62) - 1, 8)
	);
}

#[test]
fn rfc9000_sample_encodings() {
	// RFC 9000 Appendix A.1
	assert_eq!(
		read_varint(&[0xc2, 0x19, 0x7c, 0x5e, 0xff, 0x14, 0xe8, 0x8c]).unwrap(),
		(151_288_809_941_952_652, 8)
	);
	assert_eq!(
		read_varint(&[0x9d, 0x7f, 0x3e, 0x7d]).unwrap(),
		(494_878_333, 4)
	);
	assert_eq!(read_varint(&[0x7b, 0xbd]).unwrap(), (15293, 2));
	assert_eq!(read_varint(&[0x25]).unwrap(), (37, 1));
}

#[test]
fn non_canonical_width_is_accepted() {
	assert_eq!(read_varint(&[0x40, 0x25]).unwrap(), (37, 2));
}

#[test]
fn trailing_bytes_are_not_consumed() {
	assert_eq!(read_varint(&[0x25, 0xff, 0xff]).unwrap(), (37, 1));
}

#[test]
fn empty_buffer_fails() {
	assert_eq!(
		read_varint(&[]),
		Err(Error::InvalidVarint { need: 1, have: 0 })
	);
}

#[test]
fn truncated_forms_fail() {
	assert_eq!(
		read_varint(&[0x40]),
		Err(Error::InvalidVarint { need: 2, have: 1 })
	);
	assert_eq!(
		read_varint(&[0x80, 0x01, 0x02]),
		Err(Error::InvalidVarint { need: 4, have: 3 })
	);
	assert_eq!(
		read_varint(&[0xc0, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
		Err(Error::InvalidVarint { need: 8, have: 7 })
	);
}
