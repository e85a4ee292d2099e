/* demos/decode_client_hello.rs */

#![allow(missing_docs)]

// Decodes a ClientHello captured from Chrome over QUIC and prints every
// field a fingerprinting consumer would look at. In practice the bytes come
// from reassembled CRYPTO frames of a decrypted Initial packet.

use quic_clienthello::{ExtensionType, TransportParameter};

fn main() {
	let raw = chrome_client_hello();

	let hello = match quic_clienthello::decode(&raw) {
		Ok(h) => h,
		Err(e) => {
			eprintln!("decode error: {e}");
			return;
		}
	};

	println!("QUIC ClientHello ({} bytes)", hello.raw().len());
	println!("  version:          {:#06x}", hello.handshake_version());
	println!("  cipher suites:    {}", hex16(hello.cipher_suites()));
	if let Some(name) = hello.server_name() {
		println!("  server name:      {name}");
	}
	println!("  groups:           {}", hex16(hello.named_group_list()));
	println!("  signatures:       {}", hex16(hello.signature_scheme_list()));
	println!("  versions:         {}", hex16(hello.supported_versions()));
	println!("  key share:        {}", hex16(hello.key_share()));
	println!("  alpn:             {}", names(hello.alpn()));
	println!("  alps:             {}", names(hello.application_settings()));

	println!("Extensions:");
	for ext in hello.extensions() {
		let grease = if ExtensionType::is_grease(ext.ext_type) { " (GREASE)" } else { "" };
		println!(
			"  {:#06x} {:?}{grease}, {} bytes",
			ext.ext_type,
			ext.kind(),
			ext.data.len()
		);
	}

	println!("Transport parameters:");
	for param in hello.transport_parameters().params() {
		match param {
			TransportParameter::Unknown { id, value } => {
				let grease = if TransportParameter::is_grease_id(*id) { " (GREASE)" } else { "" };
				println!("  {id:#x}{grease}: {}", hex(value));
			}
			other => println!("  {:#x}: {other:?}", other.id()),
		}
	}
}

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex16(vals: &[u16]) -> String {
	vals.iter().map(|v| format!("{v:#06x}")).collect::<Vec<_>>().join(" ")
}

fn names(list: &[&[u8]]) -> String {
	list.iter()
		.map(|n| String::from_utf8_lossy(n).into_owned())
		.collect::<Vec<_>>()
		.join(",")
}

fn chrome_client_hello() -> Vec<u8> {
	hex_literal::hex!(
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
	)
	.to_vec()
}
