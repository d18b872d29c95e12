//! Front-end entry points.
//!
//! Every function reduces to: build the cipher from the key, bind the mode
//! and padding into an accumulator (or take the caller's), absorb the whole
//! input once, and, unless the caller keeps the accumulator, finalize and
//! hand the output to the requested sink. The call shape is picked by the
//! function name:
//!
//! | output shape | encryption | decryption |
//! |---|---|---|
//! | `Vec<u8>` | [`encrypt`] | [`decrypt`] |
//! | any [`ByteSink`] | [`encrypt_into`] | [`decrypt_into`] |
//! | caller-held accumulator | [`encrypt_with`] | [`decrypt_with`] |
//!
//! ```ignore
//! let ct = encrypt::<Aria128, Cbc, Pkcs7>(b"attack at dawn", &key, Some(&iv))?;
//! ```

use crate::crypto::accumulator::{Accumulator, Decryptor, Encryptor};
use crate::crypto::cipher_io::{ByteSink, ByteSource};
use crate::crypto::cipher_traits::{BlockCipher, IntoCipher};
use crate::crypto::cipher_value::CipherValue;
use crate::crypto::error::Result;
use crate::crypto::modes::{Decryption, Direction, Encryption, Isomorphic, Mode};
use crate::crypto::padding::Padding;

fn accumulator<C, M, P, D>(
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
) -> Result<Accumulator<C, M, P, D>>
where
    C: BlockCipher,
    M: Mode,
    P: Padding,
    D: Direction,
{
    let cipher = key.into_cipher()?;
    let policy = Isomorphic::<C, M, P>::new(cipher).bind::<D>(iv)?;
    Ok(Accumulator::new(policy))
}

fn run<C, M, P, D>(
    input: impl ByteSource,
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
) -> Result<CipherValue<C, M, P, D>>
where
    C: BlockCipher,
    M: Mode,
    P: Padding,
    D: Direction,
{
    let mut value = CipherValue::new(accumulator::<C, M, P, D>(key, iv)?);
    input.with_bytes(|bytes| value.absorb(bytes).map(|_| ()))?;
    Ok(value)
}

/// Fresh accumulator for incremental encryption.
pub fn encryptor<C: BlockCipher, M: Mode, P: Padding>(
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
) -> Result<Encryptor<C, M, P>> {
    accumulator(key, iv)
}

/// Fresh accumulator for incremental decryption.
pub fn decryptor<C: BlockCipher, M: Mode, P: Padding>(
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
) -> Result<Decryptor<C, M, P>> {
    accumulator(key, iv)
}

pub fn encrypt<C: BlockCipher, M: Mode, P: Padding>(
    input: impl ByteSource,
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
) -> Result<Vec<u8>> {
    run::<C, M, P, Encryption>(input, key, iv)?.finish()
}

pub fn decrypt<C: BlockCipher, M: Mode, P: Padding>(
    input: impl ByteSource,
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
) -> Result<Vec<u8>> {
    run::<C, M, P, Decryption>(input, key, iv)?.finish()
}

pub fn encrypt_into<C: BlockCipher, M: Mode, P: Padding>(
    input: impl ByteSource,
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
    out: &mut impl ByteSink,
) -> Result<()> {
    run::<C, M, P, Encryption>(input, key, iv)?.finish_into(out)
}

pub fn decrypt_into<C: BlockCipher, M: Mode, P: Padding>(
    input: impl ByteSource,
    key: impl IntoCipher<C>,
    iv: Option<&[u8]>,
    out: &mut impl ByteSink,
) -> Result<()> {
    run::<C, M, P, Decryption>(input, key, iv)?.finish_into(out)
}

/// Absorbs `input` into a caller-held encryptor and returns it without
/// finalizing, so several calls can share one stream.
pub fn encrypt_with<'a, C: BlockCipher, M: Mode, P: Padding>(
    input: impl ByteSource,
    acc: &'a mut Encryptor<C, M, P>,
) -> Result<&'a mut Encryptor<C, M, P>> {
    input.with_bytes(|bytes| acc.absorb(bytes))?;
    Ok(acc)
}

/// Decryption counterpart of [`encrypt_with`].
pub fn decrypt_with<'a, C: BlockCipher, M: Mode, P: Padding>(
    input: impl ByteSource,
    acc: &'a mut Decryptor<C, M, P>,
) -> Result<&'a mut Decryptor<C, M, P>> {
    input.with_bytes(|bytes| acc.absorb(bytes))?;
    Ok(acc)
}
