mod common;

#[cfg(test)]
mod tests {
    use super::common::{init_logger, sample, ToyCipher, IV, KEY};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use symmetric_cipher::crypto::accumulator::AccumulatorState;
    use symmetric_cipher::crypto::algorithm::{decrypt, decryptor, encrypt, encryptor};
    use symmetric_cipher::crypto::error::CipherError;
    use symmetric_cipher::crypto::modes::{Cbc, Cfb, Ctr, Ecb, Mode, Ofb, Pcbc};
    use symmetric_cipher::crypto::padding::{
        AnsiX923, Iso10126, NoPadding, Padding, Pkcs7, ZeroPadding,
    };

    fn iv_for<M: Mode>() -> Option<&'static [u8]> {
        if M::NAME == "ECB" { None } else { Some(&IV) }
    }

    fn split_feed(data: &[u8], rng: &mut StdRng, mut absorb: impl FnMut(&[u8])) {
        let mut rest = data;
        while !rest.is_empty() {
            let n = rng.random_range(1..=rest.len().min(19));
            absorb(&rest[..n]);
            rest = &rest[n..];
        }
    }

    /// Chunked encryption and chunked decryption must match the one-shot
    /// result byte for byte.
    fn check_chunking<M: Mode, P: Padding>(len: usize, rng: &mut StdRng) {
        let iv = iv_for::<M>();
        let plaintext = sample(len);
        let whole = encrypt::<ToyCipher, M, P>(&plaintext, &KEY, iv).unwrap();

        let mut enc = encryptor::<ToyCipher, M, P>(&KEY, iv).unwrap();
        split_feed(&plaintext, rng, |chunk| enc.absorb(chunk).unwrap());
        enc.finalize().unwrap();
        assert_eq!(
            enc.output(),
            &whole[..],
            "{}/{} encryption depends on chunking (len {})",
            M::NAME,
            P::NAME,
            len
        );

        let mut dec = decryptor::<ToyCipher, M, P>(&KEY, iv).unwrap();
        split_feed(&whole, rng, |chunk| dec.absorb(chunk).unwrap());
        dec.finalize().unwrap();
        let one_shot = decrypt::<ToyCipher, M, P>(&whole, &KEY, iv).unwrap();
        assert_eq!(dec.output(), &one_shot[..]);
        assert_eq!(one_shot, plaintext, "{}/{} round trip (len {})", M::NAME, P::NAME, len);
    }

    fn check_mode<M: Mode>(rng: &mut StdRng) {
        for blocks in 0..6 {
            check_chunking::<M, NoPadding>(blocks * 8, rng);
        }
        for len in [1, 7, 8, 9, 15, 16, 33, 100] {
            check_chunking::<M, Pkcs7>(len, rng);
            check_chunking::<M, AnsiX923>(len, rng);
        }
    }

    #[test]
    fn test_chunking_invariance_all_modes() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..8 {
            check_mode::<Ecb>(&mut rng);
            check_mode::<Cbc>(&mut rng);
            check_mode::<Pcbc>(&mut rng);
            check_mode::<Cfb>(&mut rng);
            check_mode::<Ofb>(&mut rng);
            check_mode::<Ctr>(&mut rng);
        }
    }

    #[test]
    fn test_iso10126_decryption_chunking() {
        let mut rng = StdRng::seed_from_u64(7);
        let plaintext = sample(45);
        let ciphertext = encrypt::<ToyCipher, Cbc, Iso10126>(&plaintext, &KEY, Some(&IV)).unwrap();
        assert_eq!(ciphertext.len(), 48);

        let mut dec = decryptor::<ToyCipher, Cbc, Iso10126>(&KEY, Some(&IV)).unwrap();
        split_feed(&ciphertext, &mut rng, |chunk| dec.absorb(chunk).unwrap());
        dec.finalize().unwrap();
        assert_eq!(dec.into_output(), plaintext);
    }

    #[test]
    fn test_buffer_never_holds_a_full_block() {
        let mut enc = encryptor::<ToyCipher, Cbc, NoPadding>(&KEY, None).unwrap();
        let data = sample(64);
        let mut fed = 0;
        for n in [3usize, 5, 8, 1, 15, 16, 16] {
            enc.absorb(&data[fed..fed + n]).unwrap();
            fed += n;
            assert!(enc.buffered() < 8);
            assert_eq!(enc.output().len(), fed - fed % 8);
            let expected = match fed % 8 {
                0 => AccumulatorState::Empty,
                n => AccumulatorState::Partial(n),
            };
            assert_eq!(enc.state(), expected);
        }
        assert_eq!(enc.bytes_seen(), 64);
    }

    #[test]
    fn test_finalize_rejects_remainder_without_padding() {
        let mut enc = encryptor::<ToyCipher, Ecb, NoPadding>(&KEY, None).unwrap();
        enc.absorb(&sample(13)).unwrap();
        let err = enc.finalize().unwrap_err();
        assert!(matches!(err, CipherError::PaddingViolation { scheme: "none", .. }));
        assert_eq!(enc.output().len(), 8);
        assert_eq!(enc.state(), AccumulatorState::Partial(5));
    }

    #[test]
    fn test_absorb_after_finalize_is_misuse() {
        let mut enc = encryptor::<ToyCipher, Cbc, Pkcs7>(&KEY, Some(&IV)).unwrap();
        enc.absorb(b"abc").unwrap();
        enc.finalize().unwrap();
        let out = enc.output().to_vec();

        assert!(matches!(enc.absorb(b"d"), Err(CipherError::AccumulatorMisuse(_))));
        assert!(matches!(enc.finalize(), Err(CipherError::AccumulatorMisuse(_))));
        assert_eq!(enc.output(), &out[..]);
    }

    #[test]
    fn test_decrypt_rejects_truncated_ciphertext() {
        let ciphertext = encrypt::<ToyCipher, Cbc, Pkcs7>(&sample(20), &KEY, Some(&IV)).unwrap();
        let err = decrypt::<ToyCipher, Cbc, Pkcs7>(&ciphertext[..23], &KEY, Some(&IV)).unwrap_err();
        assert!(matches!(err, CipherError::PaddingViolation { .. }));
    }

    #[test]
    fn test_decrypt_rejects_corrupted_padding() {
        // Последний байт открытого текста равен нулю: такой паддинг невалиден
        let plaintext = [1u8, 2, 3, 4, 5, 6, 7, 0];
        let ciphertext = encrypt::<ToyCipher, Ecb, NoPadding>(&plaintext, &KEY, None).unwrap();
        let err = decrypt::<ToyCipher, Ecb, Pkcs7>(&ciphertext, &KEY, None).unwrap_err();
        assert!(matches!(err, CipherError::PaddingViolation { scheme: "pkcs7", .. }));
    }

    #[test]
    fn test_failed_unpad_keeps_withheld_block() {
        let a = sample(8);
        let b = [1u8, 2, 3, 4, 5, 6, 7, 0];
        let c = [8u8; 8];
        let plaintext = [&a[..], &b[..], &c[..]].concat();
        let ciphertext = encrypt::<ToyCipher, Ecb, NoPadding>(&plaintext, &KEY, None).unwrap();

        let mut dec = decryptor::<ToyCipher, Ecb, Pkcs7>(&KEY, None).unwrap();
        dec.absorb(&ciphertext[..16]).unwrap();
        assert_eq!(dec.output(), &a[..]);

        let err = dec.finalize().unwrap_err();
        assert!(matches!(err, CipherError::PaddingViolation { scheme: "pkcs7", .. }));
        assert_eq!(dec.output(), &a[..]);
        assert_eq!(dec.state(), AccumulatorState::Empty);
        assert!(!dec.is_finalized());

        // Следующий блок выпускает удержанный B
        dec.absorb(&ciphertext[16..]).unwrap();
        assert_eq!(dec.output(), &plaintext[..16]);
        dec.finalize().unwrap();
        assert_eq!(dec.state(), AccumulatorState::Finalized);
        assert_eq!(dec.into_output(), plaintext[..16].to_vec());
    }

    #[test]
    fn test_take_output_drains_incrementally() {
        let plaintext = sample(40);
        let whole = encrypt::<ToyCipher, Ofb, ZeroPadding>(&plaintext, &KEY, Some(&IV)).unwrap();

        let mut enc = encryptor::<ToyCipher, Ofb, ZeroPadding>(&KEY, Some(&IV)).unwrap();
        let mut collected = Vec::new();
        for chunk in plaintext.chunks(6) {
            enc.absorb(chunk).unwrap();
            collected.extend(enc.take_output());
        }
        enc.finalize().unwrap();
        collected.extend(enc.take_output());
        assert_eq!(collected, whole);
    }

    #[test]
    fn test_empty_input() {
        assert!(encrypt::<ToyCipher, Cbc, NoPadding>(b"", &KEY, None).unwrap().is_empty());
        assert!(encrypt::<ToyCipher, Cbc, ZeroPadding>(b"", &KEY, None).unwrap().is_empty());
        assert_eq!(encrypt::<ToyCipher, Cbc, Pkcs7>(b"", &KEY, None).unwrap().len(), 8);
        assert!(matches!(
            decrypt::<ToyCipher, Cbc, Pkcs7>(b"", &KEY, None),
            Err(CipherError::PaddingViolation { .. })
        ));
    }
}
