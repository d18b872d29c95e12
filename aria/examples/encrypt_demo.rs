use std::env;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use aria::{Aria128, Aria256};
use log::info;
use rand::RngCore;
use symmetric_cipher::crypto::algorithm::{decrypt, encrypt};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::modes::Cbc;
use symmetric_cipher::crypto::padding::Pkcs7;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

// Запуск: RUST_LOG=debug cargo run -p aria --example encrypt_demo -- [MODE] [PADDING]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mode: CipherMode = args.next().as_deref().unwrap_or("CBC").parse()?;
    let padding: PaddingMode = args.next().as_deref().unwrap_or("pkcs7").parse()?;

    // === Single block, RFC 5794 A.1 ===
    let key: Vec<u8> = (0u8..16).collect();
    let cipher = Aria128::new(&key)?;
    let mut block = hex::decode("00112233445566778899aabbccddeeff")?;
    cipher.encrypt_block(&mut block);
    println!("ARIA-128 block: {}", hex::encode(&block));
    cipher.decrypt_block(&mut block);
    println!("   decrypted:   {}", hex::encode(&block));

    // === Static composition ===
    let iv = random_bytes(16);
    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let ct = encrypt::<Aria128, Cbc, Pkcs7>(text.as_bytes(), &key, Some(&iv))?;
    println!("CBC/PKCS7 ciphertext: {}", hex::encode(&ct));
    let pt = decrypt::<Aria128, Cbc, Pkcs7>(&ct, &key, Some(&iv))?;
    println!("CBC/PKCS7 plaintext:  {}", String::from_utf8_lossy(&pt));

    // === Runtime composition over files ===
    let key256 = random_bytes(32);
    let iv = mode.uses_iv().then(|| random_bytes(16));
    let ctx = CipherContext::with_cipher(Arc::new(Aria256::new(&key256)?), mode, padding, iv);

    let dir = env::temp_dir().join("aria_demo");
    fs::create_dir_all(&dir)?;
    let source = dir.join("plain.bin");
    let encrypted = dir.join("plain.bin.enc");
    let decrypted = dir.join("plain.bin.dec");
    fs::write(&source, random_bytes(3 * 1024 * 1024 + 5))?;

    let written = ctx.encrypt_stream(
        BufReader::new(fs::File::open(&source)?),
        BufWriter::new(fs::File::create(&encrypted)?),
    )?;
    info!("{mode}/{padding}: wrote {written} encrypted bytes");
    ctx.decrypt_stream(
        BufReader::new(fs::File::open(&encrypted)?),
        BufWriter::new(fs::File::create(&decrypted)?),
    )?;

    let same = fs::read(&source)? == fs::read(&decrypted)?;
    println!("ARIA-256 {mode}/{padding} file round trip: {}", if same { "OK" } else { "MISMATCH" });

    // === Batch ===
    let messages: Vec<Vec<u8>> = (1..=8).map(|n| random_bytes(n * 1000)).collect();
    let batch = ctx.encrypt_batch(&messages)?;
    let restored = ctx.decrypt_batch(&batch)?;
    println!("batch of {} messages restored: {}", messages.len(), restored == messages);

    fs::remove_dir_all(&dir)?;
    Ok(())
}
