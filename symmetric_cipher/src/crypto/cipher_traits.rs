use crate::crypto::cipher_key::CipherKey;
use crate::crypto::error::Result;
use std::sync::Arc;

/// Fixed block-size primitive with a forward and an inverse single-block
/// transform. Round keys are derived once in [`BlockCipher::with_key`] and
/// never touched again.
pub trait BlockCipher: Sized {
    const NAME: &'static str;
    const BLOCK_SIZE: usize;
    /// Key lengths in bytes accepted by this cipher.
    const KEY_SIZES: &'static [usize];

    /// Runs the key schedule. The key length has already been validated.
    fn with_key(key: &CipherKey<Self>) -> Self;

    /// `block.len()` must equal `BLOCK_SIZE`.
    fn encrypt_block(&self, block: &mut [u8]);

    /// `block.len()` must equal `BLOCK_SIZE`.
    fn decrypt_block(&self, block: &mut [u8]);

    fn new(key: &[u8]) -> Result<Self> {
        CipherKey::new(key).map(|key| Self::with_key(&key))
    }
}

// Одно расписание ключей на много независимых потоков
impl<C: BlockCipher> BlockCipher for Arc<C> {
    const NAME: &'static str = C::NAME;
    const BLOCK_SIZE: usize = C::BLOCK_SIZE;
    const KEY_SIZES: &'static [usize] = C::KEY_SIZES;

    fn with_key(key: &CipherKey<Self>) -> Self {
        Arc::new(C::with_key(&key.rebind()))
    }

    #[inline]
    fn encrypt_block(&self, block: &mut [u8]) {
        (**self).encrypt_block(block)
    }

    #[inline]
    fn decrypt_block(&self, block: &mut [u8]) {
        (**self).decrypt_block(block)
    }
}

/// Key shapes accepted by the front-end functions: raw byte containers are
/// validated here, a [`CipherKey`] is already valid.
pub trait IntoCipher<C: BlockCipher> {
    fn into_cipher(self) -> Result<C>;
}

impl<C: BlockCipher> IntoCipher<C> for &[u8] {
    fn into_cipher(self) -> Result<C> {
        C::new(self)
    }
}

impl<C: BlockCipher> IntoCipher<C> for &Vec<u8> {
    fn into_cipher(self) -> Result<C> {
        C::new(self)
    }
}

impl<C: BlockCipher, const N: usize> IntoCipher<C> for &[u8; N] {
    fn into_cipher(self) -> Result<C> {
        C::new(self)
    }
}

impl<C: BlockCipher> IntoCipher<C> for &CipherKey<C> {
    fn into_cipher(self) -> Result<C> {
        Ok(C::with_key(self))
    }
}

impl<C: BlockCipher> IntoCipher<C> for CipherKey<C> {
    fn into_cipher(self) -> Result<C> {
        Ok(C::with_key(&self))
    }
}
