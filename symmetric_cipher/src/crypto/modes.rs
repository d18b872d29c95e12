//! Modes of operation as isomorphic constructions.
//!
//! A [`Mode`] defines one block transition for each direction over a shared
//! state type. [`Isomorphic`] binds a cipher, a mode and a padding scheme and
//! hands out a [`ModePolicy`] for either direction. Everything is resolved
//! at compile time; the runtime-selected path lives in `cipher_context`.

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::padding::Padding;
use crate::crypto::utils::{increment_block, xor_in_place, xor_swap};
use log::debug;
use std::fmt;
use std::marker::PhantomData;

/// Mirror pair of block transitions sharing one state type.
///
/// For every block `b` and state `s`, running `decrypt_block` on the output
/// of `encrypt_block` from the same `s` yields `b` again and leaves the same
/// next state.
///
/// `scratch` is one block of working space owned by the policy; its contents
/// on entry are unspecified and never part of the state.
pub trait Mode: 'static {
    const NAME: &'static str;
    type State: Clone + fmt::Debug + PartialEq;

    fn init_state(block_size: usize, iv: Option<&[u8]>) -> Result<Self::State>;

    fn encrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        state: &mut Self::State,
        scratch: &mut [u8],
    );

    fn decrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        state: &mut Self::State,
        scratch: &mut [u8],
    );
}

/// Selects which of the two mirror transitions a policy applies.
pub trait Direction: 'static {
    const NAME: &'static str;
    const ENCRYPTING: bool;

    fn apply<C: BlockCipher, M: Mode>(
        cipher: &C,
        block: &mut [u8],
        state: &mut M::State,
        scratch: &mut [u8],
    );
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Encryption;

#[derive(Debug, Clone, Copy, Default)]
pub struct Decryption;

impl Direction for Encryption {
    const NAME: &'static str = "encryption";
    const ENCRYPTING: bool = true;

    #[inline]
    fn apply<C: BlockCipher, M: Mode>(
        cipher: &C,
        block: &mut [u8],
        state: &mut M::State,
        scratch: &mut [u8],
    ) {
        M::encrypt_block(cipher, block, state, scratch)
    }
}

impl Direction for Decryption {
    const NAME: &'static str = "decryption";
    const ENCRYPTING: bool = false;

    #[inline]
    fn apply<C: BlockCipher, M: Mode>(
        cipher: &C,
        block: &mut [u8],
        state: &mut M::State,
        scratch: &mut [u8],
    ) {
        M::decrypt_block(cipher, block, state, scratch)
    }
}

/// A block cipher bound with a mode and a padding scheme, not yet committed
/// to a direction.
pub struct Isomorphic<C, M, P> {
    cipher: C,
    _marker: PhantomData<fn() -> (M, P)>,
}

impl<C: BlockCipher, M: Mode, P: Padding> Isomorphic<C, M, P> {
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            _marker: PhantomData,
        }
    }

    pub fn bind<D: Direction>(self, iv: Option<&[u8]>) -> Result<ModePolicy<C, M, P, D>> {
        let state = M::init_state(C::BLOCK_SIZE, iv)?;
        debug!(
            "bound {}/{}/{} {} policy",
            C::NAME,
            M::NAME,
            P::NAME,
            D::NAME
        );
        Ok(ModePolicy {
            cipher: self.cipher,
            state,
            scratch: vec![0u8; C::BLOCK_SIZE],
            _marker: PhantomData,
        })
    }

    pub fn encryption(self, iv: Option<&[u8]>) -> Result<ModePolicy<C, M, P, Encryption>> {
        self.bind(iv)
    }

    pub fn decryption(self, iv: Option<&[u8]>) -> Result<ModePolicy<C, M, P, Decryption>> {
        self.bind(iv)
    }
}

/// One direction of an [`Isomorphic`] construction together with the mode
/// state it carries.
pub struct ModePolicy<C, M: Mode, P, D> {
    cipher: C,
    state: M::State,
    scratch: Vec<u8>,
    _marker: PhantomData<fn() -> (P, D)>,
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> ModePolicy<C, M, P, D> {
    /// Transforms one block in place and advances the mode state.
    #[inline]
    pub fn apply(&mut self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), C::BLOCK_SIZE);
        D::apply::<C, M>(&self.cipher, block, &mut self.state, &mut self.scratch);
    }

    pub fn state(&self) -> &M::State {
        &self.state
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }
}

impl<C: Clone, M: Mode, P, D> Clone for ModePolicy<C, M, P, D> {
    fn clone(&self) -> Self {
        Self {
            cipher: self.cipher.clone(),
            state: self.state.clone(),
            scratch: vec![0u8; self.scratch.len()],
            _marker: PhantomData,
        }
    }
}

fn iv_or_zero(mode: &'static str, block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>> {
    match iv {
        None => Ok(vec![0u8; block_size]),
        Some(iv) => checked_iv(mode, block_size, iv),
    }
}

fn checked_iv(mode: &'static str, block_size: usize, iv: &[u8]) -> Result<Vec<u8>> {
    if iv.len() != block_size {
        return Err(CipherError::mode_state(
            mode,
            format!("IV is {} bytes, block size is {}", iv.len(), block_size),
        ));
    }
    Ok(iv.to_vec())
}

/// Electronic codebook: every block on its own, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ecb;

impl Mode for Ecb {
    const NAME: &'static str = "ECB";
    type State = ();

    fn init_state(_block_size: usize, iv: Option<&[u8]>) -> Result<()> {
        match iv {
            None => Ok(()),
            Some(_) => Err(CipherError::mode_state(Self::NAME, "mode takes no IV")),
        }
    }

    #[inline]
    fn encrypt_block<C: BlockCipher>(cipher: &C, block: &mut [u8], _: &mut (), _: &mut [u8]) {
        cipher.encrypt_block(block);
    }

    #[inline]
    fn decrypt_block<C: BlockCipher>(cipher: &C, block: &mut [u8], _: &mut (), _: &mut [u8]) {
        cipher.decrypt_block(block);
    }
}

/// Cipher block chaining. State is the previous ciphertext block.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cbc;

impl Mode for Cbc {
    const NAME: &'static str = "CBC";
    type State = Vec<u8>;

    fn init_state(block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>> {
        iv_or_zero(Self::NAME, block_size, iv)
    }

    fn encrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        prev: &mut Vec<u8>,
        _: &mut [u8],
    ) {
        xor_in_place(block, prev);
        cipher.encrypt_block(block);
        prev.copy_from_slice(block);
    }

    fn decrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        prev: &mut Vec<u8>,
        scratch: &mut [u8],
    ) {
        scratch.copy_from_slice(block);
        cipher.decrypt_block(block);
        xor_in_place(block, prev);
        prev.copy_from_slice(scratch);
    }
}

/// Propagating CBC. State is `plaintext ^ ciphertext` of the previous block.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pcbc;

impl Mode for Pcbc {
    const NAME: &'static str = "PCBC";
    type State = Vec<u8>;

    fn init_state(block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>> {
        iv_or_zero(Self::NAME, block_size, iv)
    }

    fn encrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        prev: &mut Vec<u8>,
        scratch: &mut [u8],
    ) {
        scratch.copy_from_slice(block);
        xor_in_place(block, prev);
        cipher.encrypt_block(block);
        prev.copy_from_slice(scratch);
        xor_in_place(prev, block);
    }

    fn decrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        prev: &mut Vec<u8>,
        scratch: &mut [u8],
    ) {
        scratch.copy_from_slice(block);
        cipher.decrypt_block(block);
        xor_in_place(block, prev);
        prev.copy_from_slice(scratch);
        xor_in_place(prev, block);
    }
}

/// Full-block cipher feedback. State is the previous ciphertext block.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cfb;

impl Mode for Cfb {
    const NAME: &'static str = "CFB";
    type State = Vec<u8>;

    fn init_state(block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>> {
        iv_or_zero(Self::NAME, block_size, iv)
    }

    fn encrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        feedback: &mut Vec<u8>,
        _: &mut [u8],
    ) {
        cipher.encrypt_block(feedback);
        xor_in_place(block, feedback);
        feedback.copy_from_slice(block);
    }

    fn decrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        feedback: &mut Vec<u8>,
        _: &mut [u8],
    ) {
        cipher.encrypt_block(feedback);
        xor_swap(block, feedback);
    }
}

/// Output feedback. State is the last keystream block; both directions are
/// the same transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ofb;

impl Mode for Ofb {
    const NAME: &'static str = "OFB";
    type State = Vec<u8>;

    fn init_state(block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>> {
        iv_or_zero(Self::NAME, block_size, iv)
    }

    fn encrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        keystream: &mut Vec<u8>,
        _: &mut [u8],
    ) {
        cipher.encrypt_block(keystream);
        xor_in_place(block, keystream);
    }

    fn decrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        keystream: &mut Vec<u8>,
        scratch: &mut [u8],
    ) {
        Self::encrypt_block(cipher, block, keystream, scratch)
    }
}

/// Counter mode. The initial counter block must be supplied; it is
/// incremented as a big-endian integer after every block.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ctr;

impl Mode for Ctr {
    const NAME: &'static str = "CTR";
    type State = Vec<u8>;

    fn init_state(block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>> {
        match iv {
            Some(iv) => checked_iv(Self::NAME, block_size, iv),
            None => Err(CipherError::mode_state(
                Self::NAME,
                "an initial counter block is required",
            )),
        }
    }

    fn encrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        counter: &mut Vec<u8>,
        keystream: &mut [u8],
    ) {
        keystream.copy_from_slice(counter);
        cipher.encrypt_block(keystream);
        xor_in_place(block, keystream);
        increment_block(counter, 1);
    }

    fn decrypt_block<C: BlockCipher>(
        cipher: &C,
        block: &mut [u8],
        counter: &mut Vec<u8>,
        keystream: &mut [u8],
    ) {
        Self::encrypt_block(cipher, block, counter, keystream)
    }
}
