//! Padding schemes: how a final partial block is resolved at finalize.

use crate::crypto::error::{CipherError, Result};
use rand::RngCore;

/// Resolves the remainder left in an accumulator at finalize.
///
/// Encryption calls [`Padding::pad`] with the buffered remainder and pushes
/// every returned block through the mode. Decryption withholds its last
/// transformed block when [`Padding::STRIPS`] is set and asks
/// [`Padding::unpad`] how much of it to keep.
pub trait Padding: 'static {
    const NAME: &'static str;
    const STRIPS: bool;

    /// `remainder.len() < block_size`. Returns zero or more whole blocks.
    fn pad(remainder: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Number of leading bytes of the final decrypted block to keep.
    /// `last_block` is empty when the ciphertext had no blocks at all.
    fn unpad(last_block: &[u8]) -> Result<usize>;
}

/// Partial final blocks are forbidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPadding;

impl Padding for NoPadding {
    const NAME: &'static str = "none";
    const STRIPS: bool = false;

    fn pad(remainder: &[u8], _block_size: usize) -> Result<Vec<u8>> {
        if remainder.is_empty() {
            Ok(Vec::new())
        } else {
            Err(CipherError::padding(
                Self::NAME,
                "input length is not a multiple of the block size",
            ))
        }
    }

    fn unpad(last_block: &[u8]) -> Result<usize> {
        Ok(last_block.len())
    }
}

/// Zero-fills a non-empty remainder. Trailing zero bytes of the plaintext
/// are indistinguishable from padding and are stripped on decryption.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroPadding;

impl Padding for ZeroPadding {
    const NAME: &'static str = "zeros";
    const STRIPS: bool = true;

    fn pad(remainder: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if remainder.is_empty() {
            return Ok(Vec::new());
        }
        let mut block = remainder.to_vec();
        block.resize(block_size, 0);
        Ok(block)
    }

    fn unpad(last_block: &[u8]) -> Result<usize> {
        Ok(last_block
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1))
    }
}

/// PKCS#7: always appends `n` bytes of value `n`, `1 <= n <= block_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    const NAME: &'static str = "pkcs7";
    const STRIPS: bool = true;

    fn pad(remainder: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let n = pad_len(Self::NAME, remainder, block_size)?;
        let mut block = remainder.to_vec();
        block.resize(block_size, n);
        Ok(block)
    }

    fn unpad(last_block: &[u8]) -> Result<usize> {
        let n = trailer_len(Self::NAME, last_block)?;
        let keep = last_block.len() - n;
        if last_block[keep..].iter().any(|&b| b as usize != n) {
            return Err(CipherError::padding(Self::NAME, "inconsistent padding bytes"));
        }
        Ok(keep)
    }
}

/// ANSI X9.23: zero filler followed by the padding length.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiX923;

impl Padding for AnsiX923 {
    const NAME: &'static str = "ansi-x923";
    const STRIPS: bool = true;

    fn pad(remainder: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let n = pad_len(Self::NAME, remainder, block_size)?;
        let mut block = remainder.to_vec();
        block.resize(block_size - 1, 0);
        block.push(n);
        Ok(block)
    }

    fn unpad(last_block: &[u8]) -> Result<usize> {
        let n = trailer_len(Self::NAME, last_block)?;
        let keep = last_block.len() - n;
        if last_block[keep..last_block.len() - 1].iter().any(|&b| b != 0) {
            return Err(CipherError::padding(Self::NAME, "non-zero filler byte"));
        }
        Ok(keep)
    }
}

/// ISO 10126: random filler followed by the padding length. Only the
/// length byte is checked on decryption.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso10126;

impl Padding for Iso10126 {
    const NAME: &'static str = "iso10126";
    const STRIPS: bool = true;

    fn pad(remainder: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let n = pad_len(Self::NAME, remainder, block_size)?;
        let mut block = remainder.to_vec();
        let mut filler = vec![0u8; n as usize - 1];
        rand::rng().fill_bytes(&mut filler);
        block.extend_from_slice(&filler);
        block.push(n);
        Ok(block)
    }

    fn unpad(last_block: &[u8]) -> Result<usize> {
        let n = trailer_len(Self::NAME, last_block)?;
        Ok(last_block.len() - n)
    }
}

fn pad_len(scheme: &'static str, remainder: &[u8], block_size: usize) -> Result<u8> {
    if block_size > u8::MAX as usize {
        return Err(CipherError::padding(
            scheme,
            "block size does not fit in a length byte",
        ));
    }
    Ok((block_size - remainder.len()) as u8)
}

fn trailer_len(scheme: &'static str, last_block: &[u8]) -> Result<usize> {
    let Some(&last) = last_block.last() else {
        return Err(CipherError::padding(scheme, "missing padding block"));
    };
    let n = last as usize;
    if n == 0 || n > last_block.len() {
        return Err(CipherError::padding(scheme, "invalid padding length"));
    }
    Ok(n)
}
