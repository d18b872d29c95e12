use crate::crypto::aria::{Aria, AriaPolicy};
use crate::crypto::diffusion::{diffuse, fe, fo, xor, Block};
use std::fmt;
use symmetric_cipher::crypto::cipher_key::CipherKey;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Константы CK из дробной части 1/π
const C: [u128; 3] = [
    0x517cc1b727220a94fe13abe8fa9a6ee0,
    0x6db14acc9e21c820ff28b1d5ef5de2b0,
    0xdb92371d2126e9700324977504e8c90e,
];

// Циклические сдвиги вправо для ek1..ek17: >>>19, >>>31, <<<61, <<<31, <<<19
const ROTATIONS: [u32; 5] = [19, 31, 128 - 61, 128 - 31, 128 - 19];

/// Encryption and decryption round keys, `rounds + 1` of each. Wiped on
/// drop; after [`Zeroize::zeroize`] both lists are empty.
#[derive(Clone)]
pub struct RoundKeys {
    pub encrypt: Vec<Block>,
    pub decrypt: Vec<Block>,
}

impl RoundKeys {
    pub fn rounds(&self) -> usize {
        self.encrypt.len().saturating_sub(1)
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}

impl Zeroize for RoundKeys {
    fn zeroize(&mut self) {
        self.encrypt.zeroize();
        self.decrypt.zeroize();
    }
}

impl Drop for RoundKeys {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for RoundKeys {}

fn rotr(block: &Block, n: u32) -> Block {
    u128::from_be_bytes(*block).rotate_right(n).to_be_bytes()
}

/// Расширение ключа ARIA. The key length comes from `P` through the
/// validated `CipherKey`, so the schedule always has `P::ROUNDS + 1` keys.
pub fn expand_key<P: AriaPolicy>(key: &CipherKey<Aria<P>>) -> RoundKeys {
    let key = key.as_bytes();
    let rounds = P::ROUNDS;
    let mut kl = [0u8; 16];
    let mut kr = [0u8; 16];
    kl.copy_from_slice(&key[..16]);
    kr[..key.len() - 16].copy_from_slice(&key[16..]);

    // 128 -> C1,C2,C3; 192 -> C2,C3,C1; 256 -> C3,C1,C2
    let first = (key.len() - 16) / 8;
    let ck: [Block; 3] = std::array::from_fn(|i| C[(first + i) % 3].to_be_bytes());

    let w0 = kl;
    let w1 = xor(&fo(&w0, &ck[0]), &kr);
    let w2 = xor(&fe(&w1, &ck[1]), &w0);
    let w3 = xor(&fo(&w2, &ck[2]), &w1);
    let mut w = [w0, w1, w2, w3];

    let encrypt: Vec<Block> = ROTATIONS
        .iter()
        .flat_map(|&n| (0..4).map(move |i| (i, n)))
        .map(|(i, n)| xor(&w[i], &rotr(&w[(i + 1) % 4], n)))
        .take(rounds + 1)
        .collect();

    let mut decrypt = Vec::with_capacity(rounds + 1);
    decrypt.push(encrypt[rounds]);
    decrypt.extend((1..rounds).map(|i| diffuse(&encrypt[rounds - i])));
    decrypt.push(encrypt[0]);

    kl.zeroize();
    kr.zeroize();
    w.zeroize();
    RoundKeys { encrypt, decrypt }
}
