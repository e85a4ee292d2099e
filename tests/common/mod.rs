/* tests/common/mod.rs */

#![allow(dead_code)]

use hex_literal::hex;

/// ClientHello captured from Google Chrome over QUIC, SNI
/// `q.clienthello.gauk.as`.
pub const CHROME_CLIENT_HELLO: [u8; 294] = hex!(
	"010001220303e31b6b88ce0eff480852a621039084925df68acbad66db9f3c94"
	"3f0ebaf24a3c000006130113021303010000f34469000500030268330039005d"
	"090240670f00010480007530050480600000e2d01138870c6f9f019607048060"
	"00007128045256434d030245c02004800100000802406480ff73db0c00000001"
	"baca5a5a00000001800047520400000001060480600000040480f00000003300"
	"260024001d0020f882f6482b200ca060791c45a5b84358112664ec4ff7d6ea10"
	"30f69f36804943000d0014001204030804040105030805050108060601020100"
	"1000050003026833000a00080006001d001700180000001a0018000015712e63"
	"6c69656e7468656c6c6f2e6761756b2e6173002b0003020304002d0002010100"
	"1b0003020002"
);

pub fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.extend_from_slice(&val.to_be_bytes());
}

pub fn push_varint(buf: &mut Vec<u8>, val: u64) {
	if val < 64 {
		buf.push(val as u8);
	} else if val < 16384 {
		buf.extend_from_slice(&(0x4000 | val as u16).to_be_bytes());
	} else if val < 1 << 30 {
		buf.extend_from_slice(&(0x8000_0000 | val as u32).to_be_bytes());
	} else {
		buf.extend_from_slice(&(0xc000_0000_0000_0000 | val).to_be_bytes());
	}
}

/// A single extension: type, two-byte length, payload.
pub fn extension(ext_type: u16, data: &[u8]) -> Vec<u8> {
	let mut ext = Vec::new();
	push_u16(&mut ext, ext_type);
	push_u16(&mut ext, data.len() as u16);
	ext.extend_from_slice(data);
	ext
}

/// Payload with a two-byte length prefix.
pub fn vec16(data: &[u8]) -> Vec<u8> {
	let mut out = Vec::new();
	push_u16(&mut out, data.len() as u16);
	out.extend_from_slice(data);
	out
}

/// Payload with a one-byte length prefix.
pub fn vec8(data: &[u8]) -> Vec<u8> {
	let mut out = vec![data.len() as u8];
	out.extend_from_slice(data);
	out
}

pub fn u16s(vals: &[u16]) -> Vec<u8> {
	vals.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// One transport parameter entry with varint id and length.
pub fn transport_param(id: u64, value: &[u8]) -> Vec<u8> {
	let mut out = Vec::new();
	push_varint(&mut out, id);
	push_varint(&mut out, value.len() as u64);
	out.extend_from_slice(value);
	out
}

pub fn varint(val: u64) -> Vec<u8> {
	let mut out = Vec::new();
	push_varint(&mut out, val);
	out
}

/// ClientHello body up to and including the compression methods.
pub fn fixed_fields(cipher_suites: &[u16]) -> Vec<u8> {
	let mut body = vec![0x03, 0x03];
	body.extend_from_slice(&[0x5a; 32]);
	body.push(0x00);
	body.extend_from_slice(&vec16(&u16s(cipher_suites)));
	body.extend_from_slice(&[0x01, 0x00]);
	body
}

/// Wrap a ClientHello body in the four-byte handshake header.
pub fn handshake(body: &[u8]) -> Vec<u8> {
	let len = body.len() as u32;
	let mut msg = vec![0x01];
	msg.extend_from_slice(&len.to_be_bytes()[1..]);
	msg.extend_from_slice(body);
	msg
}

/// A complete ClientHello offering TLS_AES_128_GCM_SHA256 and the given
/// extensions, in order.
pub fn client_hello(extensions: &[Vec<u8>]) -> Vec<u8> {
	let mut body = fixed_fields(&[0x1301]);
	body.extend_from_slice(&vec16(&extensions.concat()));
	handshake(&body)
}
