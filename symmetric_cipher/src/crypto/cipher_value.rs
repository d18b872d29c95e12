use crate::crypto::accumulator::{Accumulator, AccumulatorState};
use crate::crypto::cipher_io::ByteSink;
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::error::Result;
use crate::crypto::modes::{Direction, Mode};
use crate::crypto::padding::Padding;
use std::io;

/// Owns an accumulator and exposes its growing output.
///
/// Front-end functions build one of these, feed it once and finish it into
/// the sink the caller asked for.
pub struct CipherValue<C, M: Mode, P, D> {
    acc: Accumulator<C, M, P, D>,
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> CipherValue<C, M, P, D> {
    pub fn new(acc: Accumulator<C, M, P, D>) -> Self {
        Self { acc }
    }

    pub fn absorb(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.acc.absorb(bytes)?;
        Ok(self)
    }

    pub fn state(&self) -> AccumulatorState {
        self.acc.state()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.acc.output()
    }

    /// Finalizes (unless already done) and returns every output byte.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if !self.acc.is_finalized() {
            self.acc.finalize()?;
        }
        Ok(self.acc.into_output())
    }

    pub fn finish_into<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<()> {
        let bytes = self.finish()?;
        sink.put(&bytes)
    }

    pub fn into_accumulator(self) -> Accumulator<C, M, P, D> {
        self.acc
    }
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> From<Accumulator<C, M, P, D>>
    for CipherValue<C, M, P, D>
{
    fn from(acc: Accumulator<C, M, P, D>) -> Self {
        Self::new(acc)
    }
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> AsRef<[u8]> for CipherValue<C, M, P, D> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<C: BlockCipher, M: Mode, P: Padding, D: Direction> io::Write for CipherValue<C, M, P, D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.acc, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
