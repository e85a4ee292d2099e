/* tests/reader.rs */

#![allow(missing_docs)]

use quic_clienthello::{Error, Prefix, Reader};

#[test]
fn fixed_width_integers_are_big_endian() {
	let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a];
	let mut r = Reader::new(&buf);
	assert_eq!(r.read_u8("a").unwrap(), 0x01);
	assert_eq!(r.read_u16("b").unwrap(), 0x0203);
	assert_eq!(r.read_u24("c").unwrap(), 0x04_0506);
	assert_eq!(r.read_u32("d").unwrap(), 0x0708_090a);
	assert!(r.is_empty());
	assert_eq!(r.position(), buf.len());
}

#[test]
fn failed_read_does_not_advance() {
	let buf = [0xaa, 0xbb, 0xcc];
	let mut r = Reader::new(&buf);
	r.read_u8("first").unwrap();

	assert_eq!(
		r.read_u24("wide"),
		Err(Error::TruncatedInput {
			field: "wide",
			need: 3,
			have: 2,
		})
	);
	assert_eq!(r.position(), 1);
	assert_eq!(r.read_u16("rest").unwrap(), 0xbbcc);
}

#[test]
fn prefixed_reads_for_each_width() {
	let buf = [
		0x02, 0xaa, 0xbb, // u8 prefix
		0x00, 0x01, 0xcc, // u16 prefix
		0x00, 0x00, 0x00, // u24 prefix, empty
	];
	let mut r = Reader::new(&buf);
	assert_eq!(r.read_prefixed(Prefix::U8, "a").unwrap(), &[0xaa, 0xbb]);
	assert_eq!(r.read_prefixed(Prefix::U16, "b").unwrap(), &[0xcc]);
	assert!(r.read_prefixed(Prefix::U24, "c").unwrap().is_empty());
	r.finish("buf").unwrap();
}

#[test]
fn prefixed_overrun_restores_position() {
	let buf = [0x00, 0x05, 0x01, 0x02];
	let mut r = Reader::new(&buf);
	assert_eq!(
		r.read_prefixed(Prefix::U16, "list"),
		Err(Error::TruncatedInput {
			field: "list",
			need: 5,
			have: 2,
		})
	);
	assert_eq!(r.position(), 0);
	assert_eq!(r.remaining(), 4);
}

#[test]
fn varint_advances_by_encoded_width() {
	let buf = [0x25, 0x7b, 0xbd, 0x80, 0x00, 0x40, 0x00];
	let mut r = Reader::new(&buf);
	assert_eq!(r.read_varint().unwrap(), 37);
	assert_eq!(r.position(), 1);
	assert_eq!(r.read_varint().unwrap(), 15293);
	assert_eq!(r.position(), 3);
	assert_eq!(r.read_varint().unwrap(), 16384);
	assert!(r.is_empty());
}

#[test]
fn truncated_varint_does_not_advance() {
	let buf = [0x01, 0xc0, 0x00];
	let mut r = Reader::new(&buf);
	r.read_varint().unwrap();
	assert_eq!(
		r.read_varint(),
		Err(Error::InvalidVarint { need: 8, have: 2 })
	);
	assert_eq!(r.position(), 1);
}

#[test]
fn varint_on_exhausted_reader() {
	let mut r = Reader::new(&[]);
	assert_eq!(
		r.read_varint(),
		Err(Error::InvalidVarint { need: 1, have: 0 })
	);
}

#[test]
fn finish_reports_leftover_bytes() {
	let buf = [0x00, 0x01, 0x02];
	let mut r = Reader::new(&buf);
	r.read_u8("x").unwrap();
	assert_eq!(
		r.finish("block"),
		Err(Error::MalformedLength {
			field: "block",
			len: 2,
		})
	);
}
