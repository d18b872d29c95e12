//! Substitution and diffusion layers shared by the round function and the
//! key schedule.

use crate::crypto::sboxes::{SB1, SB2, SB3, SB4};

pub type Block = [u8; 16];

// Индексы входных байтов, дающих y_i = x_a ^ x_b ^ ... (ровно 7 слагаемых)
const A_ROWS: [[usize; 7]; 16] = [
    [3, 4, 6, 8, 9, 13, 14],
    [2, 5, 7, 8, 9, 12, 15],
    [1, 4, 6, 10, 11, 12, 15],
    [0, 5, 7, 10, 11, 13, 14],
    [0, 2, 5, 8, 11, 14, 15],
    [1, 3, 4, 9, 10, 14, 15],
    [0, 2, 7, 9, 10, 12, 13],
    [1, 3, 6, 8, 11, 12, 13],
    [0, 1, 4, 7, 10, 13, 15],
    [0, 1, 5, 6, 11, 12, 14],
    [2, 3, 5, 6, 8, 13, 15],
    [2, 3, 4, 7, 9, 12, 14],
    [1, 2, 6, 7, 9, 11, 12],
    [0, 3, 6, 7, 8, 10, 13],
    [0, 3, 4, 5, 9, 11, 14],
    [1, 2, 4, 5, 8, 10, 15],
];

/// The 16x16 binary matrix A. It is an involution: `diffuse(diffuse(x)) == x`.
pub fn diffuse(x: &Block) -> Block {
    let mut y = [0u8; 16];
    for (out, row) in y.iter_mut().zip(A_ROWS.iter()) {
        *out = row.iter().fold(0, |acc, &j| acc ^ x[j]);
    }
    y
}

/// Substitution layer of odd rounds: SB1, SB2, SB3, SB4 repeated.
pub fn sl1(x: &Block) -> Block {
    let mut y = [0u8; 16];
    for (i, b) in y.iter_mut().enumerate() {
        let v = x[i] as usize;
        *b = match i % 4 {
            0 => SB1[v],
            1 => SB2[v],
            2 => SB3[v],
            _ => SB4[v],
        };
    }
    y
}

/// Substitution layer of even rounds, the inverse of [`sl1`].
pub fn sl2(x: &Block) -> Block {
    let mut y = [0u8; 16];
    for (i, b) in y.iter_mut().enumerate() {
        let v = x[i] as usize;
        *b = match i % 4 {
            0 => SB3[v],
            1 => SB4[v],
            2 => SB1[v],
            _ => SB2[v],
        };
    }
    y
}

#[inline]
pub fn xor(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    for (o, v) in out.iter_mut().zip(b) {
        *o ^= v;
    }
    out
}

/// Odd round function.
pub fn fo(d: &Block, rk: &Block) -> Block {
    diffuse(&sl1(&xor(d, rk)))
}

/// Even round function.
pub fn fe(d: &Block, rk: &Block) -> Block {
    diffuse(&sl2(&xor(d, rk)))
}
