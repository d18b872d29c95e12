use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::error::{CipherError, Result};
use std::fmt;
use std::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Raw key bytes whose length has been checked against `C::KEY_SIZES`.
///
/// Validation happens once, here; ciphers built from a `CipherKey` never
/// re-check it. The bytes are wiped on drop.
pub struct CipherKey<C> {
    bytes: Vec<u8>,
    _cipher: PhantomData<fn() -> C>,
}

impl<C: BlockCipher> CipherKey<C> {
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if !C::KEY_SIZES.contains(&bytes.len()) {
            return Err(CipherError::InvalidKeyLength {
                cipher: C::NAME,
                actual: bytes.len(),
                expected: C::KEY_SIZES,
            });
        }
        Ok(Self::from_validated(bytes.to_vec()))
    }

    pub fn try_from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Result<Self> {
        let bytes: Zeroizing<Vec<u8>> = Zeroizing::new(iter.into_iter().collect());
        Self::new(&bytes)
    }
}

impl<C> CipherKey<C> {
    fn from_validated(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _cipher: PhantomData,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Same bytes typed for a cipher with identical key sizes (used by the
    /// `Arc<C>` wrapper).
    pub(crate) fn rebind<D>(&self) -> CipherKey<D> {
        CipherKey::from_validated(self.bytes.clone())
    }
}

impl<C> Clone for CipherKey<C> {
    fn clone(&self) -> Self {
        Self::from_validated(self.bytes.clone())
    }
}

impl<C> fmt::Debug for CipherKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl<C> Drop for CipherKey<C> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl<C> ZeroizeOnDrop for CipherKey<C> {}
