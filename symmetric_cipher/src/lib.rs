//! Block-cipher engine: a pluggable single-block primitive, a mode of
//! operation and a padding scheme bound into one streaming transform.
//!
//! Static composition goes through [`crypto::algorithm`] and
//! [`crypto::accumulator::Accumulator`]; runtime selection through
//! [`CipherContext`].

pub mod crypto;

pub use crypto::accumulator::{Accumulator, AccumulatorState, BlockStream, Decryptor, Encryptor};
pub use crypto::algorithm::{
    decrypt, decrypt_into, decrypt_with, decryptor, encrypt, encrypt_into, encrypt_with,
    encryptor,
};
pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_key::CipherKey;
pub use crypto::cipher_traits::{BlockCipher, IntoCipher};
pub use crypto::cipher_types::{CipherMode, PaddingMode};
pub use crypto::cipher_value::CipherValue;
pub use crypto::error::{CipherError, Result};
