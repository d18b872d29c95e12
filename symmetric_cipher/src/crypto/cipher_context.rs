use crate::crypto::accumulator::{Accumulator, BlockStream};
use crate::crypto::cipher_traits::{BlockCipher, IntoCipher};
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::error::Result;
use crate::crypto::modes::{
    Cbc, Cfb, Ctr, Decryption, Direction, Ecb, Encryption, Isomorphic, Mode, Ofb, Pcbc,
};
use crate::crypto::padding::{AnsiX923, Iso10126, NoPadding, Padding, Pkcs7, ZeroPadding};
use log::debug;
use rayon::prelude::*;
use std::io::{Read, Write};
use std::sync::Arc;

// Constants for stream processing
const CHUNK_SIZE: usize = 1024 * 1024; // 1MB chunks for reader/writer streams

/// Cipher, mode and padding chosen at runtime.
///
/// The round keys live behind an `Arc` and are shared by every stream the
/// context opens; each stream owns its own mode state and buffer.
pub struct CipherContext<C> {
    cipher: Arc<C>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
}

impl<C> Clone for CipherContext<C> {
    fn clone(&self) -> Self {
        Self {
            cipher: Arc::clone(&self.cipher),
            mode: self.mode,
            padding: self.padding,
            iv: self.iv.clone(),
        }
    }
}

impl<C: BlockCipher + 'static> CipherContext<C> {
    pub fn new(
        key: impl IntoCipher<C>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self> {
        let cipher = key.into_cipher()?;
        Ok(Self::with_cipher(Arc::new(cipher), mode, padding, iv))
    }

    pub fn with_cipher(
        cipher: Arc<C>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Self {
        Self {
            cipher,
            mode,
            padding,
            iv,
        }
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn cipher(&self) -> &Arc<C> {
        &self.cipher
    }

    pub fn encryptor(&self) -> Result<Box<dyn BlockStream>> {
        self.open::<Encryption>()
    }

    pub fn decryptor(&self) -> Result<Box<dyn BlockStream>> {
        self.open::<Decryption>()
    }

    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        Self::one_shot(self.encryptor()?, data)
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        Self::one_shot(self.decryptor()?, data)
    }

    /// Encrypts everything `reader` yields into `writer`, one accumulator
    /// for the whole stream. Returns the number of bytes written.
    pub fn encrypt_stream<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<u64> {
        Self::pump(self.encryptor()?, reader, writer)
    }

    pub fn decrypt_stream<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<u64> {
        Self::pump(self.decryptor()?, reader, writer)
    }

    fn one_shot(mut stream: Box<dyn BlockStream>, data: &[u8]) -> Result<Vec<u8>> {
        stream.absorb(data)?;
        stream.finalize()?;
        Ok(stream.take_output())
    }

    fn pump<R: Read, W: Write>(
        mut stream: Box<dyn BlockStream>,
        mut reader: R,
        mut writer: W,
    ) -> Result<u64> {
        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut written = 0u64;
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            stream.absorb(&chunk[..n])?;
            let out = stream.take_output();
            writer.write_all(&out)?;
            written += out.len() as u64;
        }
        stream.finalize()?;
        let out = stream.take_output();
        writer.write_all(&out)?;
        writer.flush()?;
        Ok(written + out.len() as u64)
    }

    fn open<D: Direction>(&self) -> Result<Box<dyn BlockStream>> {
        match self.mode {
            CipherMode::ECB => self.with_mode::<Ecb, D>(),
            CipherMode::CBC => self.with_mode::<Cbc, D>(),
            CipherMode::PCBC => self.with_mode::<Pcbc, D>(),
            CipherMode::CFB => self.with_mode::<Cfb, D>(),
            CipherMode::OFB => self.with_mode::<Ofb, D>(),
            CipherMode::CTR => self.with_mode::<Ctr, D>(),
        }
    }

    fn with_mode<M: Mode, D: Direction>(&self) -> Result<Box<dyn BlockStream>> {
        match self.padding {
            PaddingMode::NoPadding => self.boxed::<M, NoPadding, D>(),
            PaddingMode::Zeros => self.boxed::<M, ZeroPadding, D>(),
            PaddingMode::ANSI_X923 => self.boxed::<M, AnsiX923, D>(),
            PaddingMode::PKCS7 => self.boxed::<M, Pkcs7, D>(),
            PaddingMode::ISO10126 => self.boxed::<M, Iso10126, D>(),
        }
    }

    fn boxed<M: Mode, P: Padding, D: Direction>(&self) -> Result<Box<dyn BlockStream>> {
        debug!("opening {} {}/{} stream", D::NAME, self.mode, self.padding);
        let policy = Isomorphic::<Arc<C>, M, P>::new(Arc::clone(&self.cipher))
            .bind::<D>(self.iv.as_deref())?;
        Ok(Box::new(Accumulator::new(policy)))
    }
}

impl<C: BlockCipher + Send + Sync + 'static> CipherContext<C> {
    /// Encrypts independent messages in parallel. Every message gets its own
    /// stream; only the round keys are shared.
    pub fn encrypt_batch<T: AsRef<[u8]> + Sync>(&self, inputs: &[T]) -> Result<Vec<Vec<u8>>> {
        debug!("encrypting batch of {} messages", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.encrypt(input.as_ref()))
            .collect()
    }

    pub fn decrypt_batch<T: AsRef<[u8]> + Sync>(&self, inputs: &[T]) -> Result<Vec<Vec<u8>>> {
        debug!("decrypting batch of {} messages", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.decrypt(input.as_ref()))
            .collect()
    }
}
