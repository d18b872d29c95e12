//! Source and sink adapters. Every front-end shape goes through these two
//! traits into exactly one accumulator; none of them buffers on its own.

use crate::crypto::error::Result;
use std::io::Write;

/// Something that can be handed to an accumulator as one contiguous input.
pub trait ByteSource {
    fn with_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R;
}

impl<T: AsRef<[u8]> + ?Sized> ByteSource for &T {
    fn with_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_ref())
    }
}

impl ByteSource for Vec<u8> {
    fn with_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self)
    }
}

/// Iterator-shaped input. Collected once, then absorbed in one call.
pub struct IterSource<I>(pub I);

pub fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> IterSource<I> {
    IterSource(iter)
}

impl<I: IntoIterator<Item = u8>> ByteSource for IterSource<I> {
    fn with_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R {
        let bytes: Vec<u8> = self.0.into_iter().collect();
        f(&bytes)
    }
}

/// Destination for finished output.
pub trait ByteSink {
    fn put(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Appends; existing contents are kept.
impl ByteSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Any `Extend<u8>` collection, e.g. a `VecDeque` or a custom output cursor.
pub struct ExtendSink<'a, E>(pub &'a mut E);

impl<E: Extend<u8>> ByteSink for ExtendSink<'_, E> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.0.extend(bytes.iter().copied());
        Ok(())
    }
}

/// Any `std::io::Write`.
pub struct WriteSink<W>(pub W);

impl<W: Write> ByteSink for WriteSink<W> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.0.write_all(bytes)?;
        Ok(())
    }
}

impl<W> WriteSink<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}
