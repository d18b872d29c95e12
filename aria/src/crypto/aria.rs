use crate::crypto::diffusion::{fe, fo, sl2, xor, Block};
use crate::crypto::key_schedule::{expand_key, RoundKeys};
use log::debug;
use std::marker::PhantomData;
use symmetric_cipher::crypto::cipher_key::CipherKey;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;

/// Key-size variant of ARIA.
pub trait AriaPolicy: 'static {
    const NAME: &'static str;
    /// Key length in bytes.
    const KEY_SIZE: usize;
    const ROUNDS: usize;
}

#[derive(Debug, Clone, Copy)]
pub struct Aria128Policy;

#[derive(Debug, Clone, Copy)]
pub struct Aria192Policy;

#[derive(Debug, Clone, Copy)]
pub struct Aria256Policy;

impl AriaPolicy for Aria128Policy {
    const NAME: &'static str = "ARIA-128";
    const KEY_SIZE: usize = 16;
    const ROUNDS: usize = 12;
}

impl AriaPolicy for Aria192Policy {
    const NAME: &'static str = "ARIA-192";
    const KEY_SIZE: usize = 24;
    const ROUNDS: usize = 14;
}

impl AriaPolicy for Aria256Policy {
    const NAME: &'static str = "ARIA-256";
    const KEY_SIZE: usize = 32;
    const ROUNDS: usize = 16;
}

/// ARIA with the round keys of one master key.
pub struct Aria<P> {
    keys: RoundKeys,
    _policy: PhantomData<fn() -> P>,
}

pub type Aria128 = Aria<Aria128Policy>;
pub type Aria192 = Aria<Aria192Policy>;
pub type Aria256 = Aria<Aria256Policy>;

impl<P: AriaPolicy> Aria<P> {
    pub fn round_keys(&self) -> &RoundKeys {
        &self.keys
    }

    fn crypt(block: &mut [u8], rk: &[Block]) {
        let n = P::ROUNDS;
        let mut x: Block = [0u8; 16];
        x.copy_from_slice(block);
        for (i, key) in rk[..n - 1].iter().enumerate() {
            // раунды нумеруются с 1: нечётные FO, чётные FE
            x = if i % 2 == 0 { fo(&x, key) } else { fe(&x, key) };
        }
        let out = xor(&sl2(&xor(&x, &rk[n - 1])), &rk[n]);
        block.copy_from_slice(&out);
    }
}

impl<P> Clone for Aria<P> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            _policy: PhantomData,
        }
    }
}

impl<P: AriaPolicy> std::fmt::Debug for Aria<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(P::NAME).field("rounds", &P::ROUNDS).finish()
    }
}

impl<P: AriaPolicy> BlockCipher for Aria<P> {
    const NAME: &'static str = P::NAME;
    const BLOCK_SIZE: usize = 16;
    const KEY_SIZES: &'static [usize] = &[P::KEY_SIZE];

    fn with_key(key: &CipherKey<Self>) -> Self {
        let keys = expand_key(key);
        debug!("{} key schedule: {} round keys", P::NAME, keys.encrypt.len());
        Aria {
            keys,
            _policy: PhantomData,
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        Self::crypt(block, &self.keys.encrypt)
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        Self::crypt(block, &self.keys.decrypt)
    }
}
