#[cfg(test)]
mod tests {
    use aria::{Aria128, Aria192, Aria256};
    use hex_literal::hex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use symmetric_cipher::crypto::algorithm::{decrypt, decryptor, encrypt, encryptor};
    use symmetric_cipher::crypto::cipher_context::CipherContext;
    use symmetric_cipher::crypto::cipher_traits::BlockCipher;
    use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
    use symmetric_cipher::crypto::modes::{Cbc, Cfb, Ctr, Ecb, Ofb};
    use symmetric_cipher::crypto::padding::{NoPadding, Pkcs7};

    const KEY: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const IV: [u8; 16] = hex!("0f0e0d0c0b0a09080706050403020100");
    const TWO_BLOCKS: [u8; 32] =
        hex!("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff");

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_cbc_pkcs7_known_answer() {
        init_logger();
        let message = b"The quick brown fox jumps over the lazy dog";
        let expected = hex!(
            "caee7fb6ed0fe9c5b227229ecead992de47d22dc53560feab3fad1f52266e6cfb6e577e434dcbd190f35a155786e0887"
        );
        let ciphertext = encrypt::<Aria128, Cbc, Pkcs7>(message, &KEY, Some(&IV)).unwrap();
        assert_eq!(ciphertext, expected);
        let plaintext = decrypt::<Aria128, Cbc, Pkcs7>(&ciphertext, &KEY, Some(&IV)).unwrap();
        assert_eq!(plaintext, message);
    }

    #[test]
    fn test_stream_modes_known_answers() {
        let ctr = encrypt::<Aria128, Ctr, NoPadding>(&TWO_BLOCKS, &KEY, Some(&IV)).unwrap();
        assert_eq!(ctr, hex!("07d345735200cc74673375e3c30820daa1c8f86ac40c31a3089188230b71be1e"));

        let ofb = encrypt::<Aria128, Ofb, NoPadding>(&TWO_BLOCKS, &KEY, Some(&IV)).unwrap();
        assert_eq!(ofb, hex!("07d345735200cc74673375e3c30820da105f2323cc04b9c1052e04d2cd314cb4"));

        let cfb = encrypt::<Aria128, Cfb, NoPadding>(&TWO_BLOCKS, &KEY, Some(&IV)).unwrap();
        assert_eq!(cfb, hex!("07d345735200cc74673375e3c30820da5477d7168c57287333e19f5ef5904261"));

        // Первый блок у всех трёх режимов одинаков: E(IV) ^ P1
        for ct in [&ctr, &ofb, &cfb] {
            let first = decrypt::<Aria128, Ctr, NoPadding>(&ct[..16], &KEY, Some(&IV)).unwrap();
            assert_eq!(first, &TWO_BLOCKS[..16]);
        }
    }

    #[test]
    fn test_ecb_repeats_rfc_block() {
        let key: Vec<u8> = (0..32).collect();
        let ciphertext = encrypt::<Aria256, Ecb, NoPadding>(&TWO_BLOCKS, &key, None).unwrap();
        assert_eq!(
            ciphertext,
            hex!("f92bd7c79fb72e2f2b8f80c1972d24fcf92bd7c79fb72e2f2b8f80c1972d24fc")
        );
    }

    #[test]
    fn test_cbc_error_propagation() {
        let plaintext: Vec<u8> = (0..48).map(|i| (i * 7) as u8).collect();
        let mut ciphertext = encrypt::<Aria128, Cbc, NoPadding>(&plaintext, &KEY, None).unwrap();
        ciphertext[16] ^= 0x01;

        let decrypted = decrypt::<Aria128, Cbc, NoPadding>(&ciphertext, &KEY, None).unwrap();
        assert_eq!(decrypted[..16], plaintext[..16]);
        assert_ne!(decrypted[16..32], plaintext[16..32]);
        let mut expected_third = plaintext[32..].to_vec();
        expected_third[0] ^= 0x01;
        assert_eq!(decrypted[32..], expected_third[..]);
    }

    #[test]
    fn test_chunking_invariance() {
        let mut rng = StdRng::seed_from_u64(42);
        let key: Vec<u8> = (0..24).collect();
        for len in [0usize, 1, 15, 16, 17, 31, 32, 100, 257] {
            let plaintext: Vec<u8> = (0..len).map(|_| rng.random()).collect();
            let whole = encrypt::<Aria192, Cbc, Pkcs7>(&plaintext, &key, Some(&IV)).unwrap();

            let mut enc = encryptor::<Aria192, Cbc, Pkcs7>(&key, Some(&IV)).unwrap();
            let mut rest = &plaintext[..];
            while !rest.is_empty() {
                let n = rng.random_range(1..=rest.len());
                enc.absorb(&rest[..n]).unwrap();
                rest = &rest[n..];
            }
            enc.finalize().unwrap();
            assert_eq!(enc.output(), &whole[..]);

            let mut dec = decryptor::<Aria192, Cbc, Pkcs7>(&key, Some(&IV)).unwrap();
            for chunk in whole.chunks(7) {
                dec.absorb(chunk).unwrap();
            }
            dec.finalize().unwrap();
            assert_eq!(dec.into_output(), plaintext);
        }
    }

    #[test]
    fn test_runtime_context_all_modes() {
        init_logger();
        let key: Vec<u8> = (0..32).collect();
        let plaintext = b"ARIA through the runtime-selected engine".to_vec();
        for mode in CipherMode::ALL {
            for padding in [PaddingMode::PKCS7, PaddingMode::ANSI_X923, PaddingMode::ISO10126] {
                let iv = mode.uses_iv().then(|| IV.to_vec());
                let ctx = CipherContext::<Aria256>::new(&key, mode, padding, iv).unwrap();
                let ciphertext = ctx.encrypt(&plaintext).unwrap();
                assert_eq!(ciphertext.len(), 48);
                assert_eq!(ctx.decrypt(&ciphertext).unwrap(), plaintext, "{mode}/{padding}");
            }
        }
    }

    #[test]
    fn test_shared_schedule_batch() {
        let cipher = std::sync::Arc::new(Aria128::new(&KEY).unwrap());
        let ctx = CipherContext::with_cipher(
            cipher,
            CipherMode::CTR,
            PaddingMode::NoPadding,
            Some(IV.to_vec()),
        );
        let messages: Vec<Vec<u8>> = (0..16).map(|n| vec![n as u8; n * 16]).collect();
        let batch = ctx.encrypt_batch(&messages).unwrap();
        assert_eq!(ctx.decrypt_batch(&batch).unwrap(), messages);
        let single = encrypt::<Aria128, Ctr, NoPadding>(&messages[2], &KEY, Some(&IV)).unwrap();
        assert_eq!(batch[2], single);
    }
}
