#![allow(dead_code)]

use symmetric_cipher::crypto::cipher_key::CipherKey;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;

/// Небольшой обратимый шифр с 8-байтовым блоком для тестов движка.
/// Not secure; it only has to be a keyed permutation that diffuses.
pub struct ToyCipher {
    key: Vec<u8>,
}

const ROUNDS: usize = 4;

impl BlockCipher for ToyCipher {
    const NAME: &'static str = "toy64";
    const BLOCK_SIZE: usize = 8;
    const KEY_SIZES: &'static [usize] = &[8, 16];

    fn with_key(key: &CipherKey<Self>) -> Self {
        ToyCipher {
            key: key.as_bytes().to_vec(),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let kl = self.key.len();
        for r in 0..ROUNDS {
            for (i, b) in block.iter_mut().enumerate() {
                *b = (*b ^ self.key[(i + r) % kl]).rotate_left(3);
            }
            for i in 1..block.len() {
                block[i] = block[i].wrapping_add(block[i - 1]);
            }
            block.rotate_left(1);
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let kl = self.key.len();
        for r in (0..ROUNDS).rev() {
            block.rotate_right(1);
            for i in (1..block.len()).rev() {
                block[i] = block[i].wrapping_sub(block[i - 1]);
            }
            for (i, b) in block.iter_mut().enumerate() {
                *b = b.rotate_right(3) ^ self.key[(i + r) % kl];
            }
        }
    }
}

pub const KEY: [u8; 8] = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
pub const IV: [u8; 8] = [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
