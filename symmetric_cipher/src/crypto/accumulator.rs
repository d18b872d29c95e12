//! The block-buffering state machine.
//!
//! An [`Accumulator`] takes bytes in chunks of any size, pushes every
//! complete block through its [`ModePolicy`] as soon as the block is formed
//! and resolves the remainder through the padding scheme at finalize. The
//! output depends only on the concatenation of the absorbed chunks, never on
//! where the chunk boundaries fell.

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::modes::{Decryption, Direction, Encryption, Mode, ModePolicy};
use crate::crypto::padding::Padding;
use log::{debug, trace};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorState {
    Empty,
    /// `0 < n < block size` bytes buffered.
    Partial(usize),
    Finalized,
}

pub struct Accumulator<C, M: Mode, P, D> {
    policy: ModePolicy<C, M, P, D>,
    /// Always shorter than one block between calls.
    buffer: Vec<u8>,
    /// Last transformed block on the decryption side of a stripping padding,
    /// released once a later block arrives or unpadded at finalize. Empty
    /// when nothing is held.
    withheld: Vec<u8>,
    output: Vec<u8>,
    bytes_seen: u64,
    finalized: bool,
}

pub type Encryptor<C, M, P> = Accumulator<C, M, P, Encryption>;
pub type Decryptor<C, M, P> = Accumulator<C, M, P, Decryption>;

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> Accumulator<C, M, P, D> {
    pub fn new(policy: ModePolicy<C, M, P, D>) -> Self {
        Self {
            policy,
            buffer: Vec::with_capacity(C::BLOCK_SIZE),
            withheld: Vec::new(),
            output: Vec::new(),
            bytes_seen: 0,
            finalized: false,
        }
    }

    pub fn block_size(&self) -> usize {
        C::BLOCK_SIZE
    }

    pub fn absorb(&mut self, mut bytes: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(CipherError::AccumulatorMisuse("absorb after finalize"));
        }
        trace!(
            "{} {} absorb {} bytes ({} buffered)",
            M::NAME,
            D::NAME,
            bytes.len(),
            self.buffer.len()
        );
        self.bytes_seen += bytes.len() as u64;
        let bs = C::BLOCK_SIZE;

        if !self.buffer.is_empty() {
            let take = (bs - self.buffer.len()).min(bytes.len());
            self.buffer.extend_from_slice(&bytes[..take]);
            bytes = &bytes[take..];
            if self.buffer.len() < bs {
                return Ok(());
            }
            Self::flush_block(
                &mut self.policy,
                &mut self.withheld,
                &mut self.output,
                &self.buffer,
            );
            self.buffer.clear();
        }

        let whole = bytes.len() - bytes.len() % bs;
        for block in bytes[..whole].chunks_exact(bs) {
            Self::flush_block(&mut self.policy, &mut self.withheld, &mut self.output, block);
        }
        self.buffer.extend_from_slice(&bytes[whole..]);
        Ok(())
    }

    /// Transforms one block straight into `output`, or into `withheld` when
    /// the last block has to wait for unpadding.
    fn flush_block(
        policy: &mut ModePolicy<C, M, P, D>,
        withheld: &mut Vec<u8>,
        output: &mut Vec<u8>,
        block: &[u8],
    ) {
        if !D::ENCRYPTING && P::STRIPS {
            output.extend_from_slice(withheld);
            withheld.clear();
            withheld.extend_from_slice(block);
            policy.apply(withheld);
        } else {
            let start = output.len();
            output.extend_from_slice(block);
            policy.apply(&mut output[start..]);
        }
    }

    /// Resolves the buffered remainder. On error nothing changes: the
    /// caller may absorb more bytes and try again.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(CipherError::AccumulatorMisuse("finalize called twice"));
        }
        let bs = C::BLOCK_SIZE;

        if D::ENCRYPTING {
            let mut tail = P::pad(&self.buffer, bs)?;
            debug_assert_eq!(tail.len() % bs, 0);
            for block in tail.chunks_exact_mut(bs) {
                self.policy.apply(block);
            }
            self.output.extend_from_slice(&tail);
        } else {
            if !self.buffer.is_empty() {
                return Err(CipherError::padding(
                    P::NAME,
                    "ciphertext length is not a multiple of the block size",
                ));
            }
            if P::STRIPS {
                let keep = P::unpad(&self.withheld)?;
                self.output.extend_from_slice(&self.withheld[..keep]);
                self.withheld.clear();
            }
        }

        self.buffer.clear();
        self.finalized = true;
        debug!(
            "{}/{}/{} {} finalized after {} bytes",
            C::NAME,
            M::NAME,
            P::NAME,
            D::NAME,
            self.bytes_seen
        );
        Ok(())
    }

    pub fn state(&self) -> AccumulatorState {
        match (self.finalized, self.buffer.len()) {
            (true, _) => AccumulatorState::Finalized,
            (false, 0) => AccumulatorState::Empty,
            (false, n) => AccumulatorState::Partial(n),
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Total bytes passed to `absorb` so far.
    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes released so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Drains the released bytes, leaving the stream state untouched.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    pub fn mode_state(&self) -> &M::State {
        self.policy.state()
    }
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> io::Write for Accumulator<C, M, P, D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Object-safe view of an accumulator, used where the mode and padding are
/// chosen at runtime.
pub trait BlockStream {
    fn absorb(&mut self, bytes: &[u8]) -> Result<()>;
    fn finalize(&mut self) -> Result<()>;
    fn state(&self) -> AccumulatorState;
    fn output(&self) -> &[u8];
    fn take_output(&mut self) -> Vec<u8>;
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> BlockStream for Accumulator<C, M, P, D> {
    fn absorb(&mut self, bytes: &[u8]) -> Result<()> {
        Accumulator::absorb(self, bytes)
    }

    fn finalize(&mut self) -> Result<()> {
        Accumulator::finalize(self)
    }

    fn state(&self) -> AccumulatorState {
        Accumulator::state(self)
    }

    fn output(&self) -> &[u8] {
        Accumulator::output(self)
    }

    fn take_output(&mut self) -> Vec<u8> {
        Accumulator::take_output(self)
    }
}
