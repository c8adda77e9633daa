//! Encrypts a fixed 2048-bit message representative, checks it against the
//! expected ciphertext, then decrypts it again in both modes. Finally signs
//! the same representative and verifies the signature.
//!
//! Run with `RUST_LOG=trace cargo run --example raw_roundtrip` to see the
//! library's diagnostics.

use std::time::Instant;

use rsa_primitives::{
    compare,
    hazmat::{rsadp, rsaep},
    left_pad, sign, verify, Mode, Result,
};

#[path = "../tests/common/mod.rs"]
mod common;

use common::*;

fn hexdump(title: &str, bytes: &[u8]) {
    println!("{} ({} bytes)", title, bytes.len());
    print!("      ");
    for i in 0..16 {
        print!("+{:x} ", i);
    }
    println!();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        print!("{:04x}: ", row * 16);
        for b in chunk {
            print!("{:02x} ", b);
        }
        println!();
    }
}

fn report(matches: bool) {
    println!("{}", if matches { "Compare OK." } else { "Compare NG." });
}

fn main() -> Result<()> {
    env_logger::init();

    let public_key = public_key_2048();
    let private_key = private_key_2048();

    let mut encrypted = [0u8; 256];
    let start = Instant::now();
    let len = rsaep(&public_key, &EM_2048, &mut encrypted)?;
    let elapsed = start.elapsed();

    hexdump("Encrypted message", &encrypted[..len]);
    hexdump("Expected message", &C_2048);
    report(compare(&encrypted[..len], &C_2048, true));
    println!("rsaep: {:?}", elapsed);

    // rsadp takes a full-width representative.
    let encrypted = left_pad(&encrypted[..len], 256)?;

    for mode in [Mode::Crt, Mode::Direct] {
        let mut decrypted = [0u8; 256];
        let start = Instant::now();
        let len = rsadp(&private_key, &encrypted, &mut decrypted, mode)?;
        let elapsed = start.elapsed();

        hexdump("Decrypted message", &decrypted[..len]);
        hexdump("Expected message", &EM_2048);
        report(compare(&decrypted[..len], &EM_2048, true));
        println!("rsadp ({:?}): {:?}", mode, elapsed);
    }

    let mut signature = [0u8; 256];
    let start = Instant::now();
    let len = sign(&private_key, &EM_2048, &mut signature, Mode::Crt)?;
    println!("sign: {:?}", start.elapsed());
    let signature = left_pad(&signature[..len], 256)?;
    hexdump("Signature", &signature);

    let start = Instant::now();
    let verified = verify(&public_key, &EM_2048, &signature);
    println!("verify: {:?}", start.elapsed());
    println!("{}", if verified.is_ok() { "Verify OK." } else { "Verify NG." });

    Ok(())
}
