mod tests {
    use myrtio_led_strip::symbol::Symbol;
    use myrtio_led_strip::timing::{StripType, TimingTicks, resolve};
    use myrtio_led_strip::translator::{
        SYMBOLS_PER_BYTE, Translation, Translator, encode_byte, translate,
    };

    const TIMING: TimingTicks = TimingTicks {
        low_on: 3,
        low_off: 9,
        high_on: 6,
        high_off: 6,
        reset: 800,
    };

    const ZERO: Symbol = Symbol::high_low(3, 9);
    const ONE: Symbol = Symbol::high_low(6, 6);

    #[test]
    fn test_msb_first() {
        assert_eq!(
            encode_byte(0b1011_0000, &TIMING),
            [ONE, ZERO, ONE, ONE, ZERO, ZERO, ZERO, ZERO]
        );
        assert_eq!(encode_byte(0x00, &TIMING), [ZERO; 8]);
        assert_eq!(encode_byte(0xFF, &TIMING), [ONE; 8]);
        assert_eq!(
            encode_byte(0x01, &TIMING),
            [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE]
        );
    }

    #[test]
    fn test_symbols_are_high_then_low() {
        for symbol in encode_byte(0xA5, &TIMING) {
            assert!(symbol.level0);
            assert!(!symbol.level1);
        }
    }

    #[test]
    fn test_byte_count_law() {
        let source = [0x12, 0x34, 0x56, 0x78];
        for len in 0..=source.len() {
            for capacity in 0..=40 {
                let mut dest = [Symbol::default(); 40];
                let translation = translate(&source[..len], &mut dest[..capacity], &TIMING);
                let bytes = (capacity / SYMBOLS_PER_BYTE).min(len);
                assert_eq!(
                    translation,
                    Translation {
                        consumed: bytes,
                        produced: bytes * SYMBOLS_PER_BYTE,
                    },
                    "len {len}, capacity {capacity}"
                );
            }
        }
    }

    #[test]
    fn test_short_capacity_emits_nothing() {
        let mut dest = [Symbol::default(); 7];
        let translation = translate(&[0xFF; 3], &mut dest, &TIMING);
        assert_eq!(translation, Translation::default());
        assert!(translation.is_stalled());
        assert_eq!(dest, [Symbol::default(); 7]);
    }

    #[test]
    fn test_output_matches_encoding() {
        let source = [0xDE, 0xAD];
        let mut dest = [Symbol::default(); 20];
        let translation = translate(&source, &mut dest, &TIMING);
        assert_eq!(translation.produced, 16);
        assert_eq!(dest[..8], encode_byte(0xDE, &TIMING));
        assert_eq!(dest[8..16], encode_byte(0xAD, &TIMING));
        // Slots past the last whole byte are left alone
        assert_eq!(dest[16..], [Symbol::default(); 4]);
    }

    #[test]
    fn test_translator_uses_its_timing() {
        let timing = resolve(StripType::Ws281x.into());
        let translator = Translator::new(timing);
        let mut dest = [Symbol::default(); 8];
        translator.translate(&[0x80], &mut dest);
        assert_eq!(dest[0], Symbol::high_low(9, 4));
        assert_eq!(dest[1], Symbol::high_low(4, 9));
    }

    #[test]
    fn test_feed_in_chunks() {
        let source = [0x01, 0x02, 0x03, 0x04, 0x05];
        let translator = Translator::new(TIMING);
        let mut feed = translator.feed(&source);
        assert_eq!(feed.reset_ticks(), 800);
        assert_eq!(feed.remaining_symbols(), 40);

        let mut collected = [Symbol::default(); 40];
        let mut written = 0;
        let mut stalls = 0;
        for capacity in [5, 16, 3, 12, 24, 8].into_iter().cycle() {
            if feed.is_exhausted() {
                break;
            }
            let mut chunk = [Symbol::default(); 24];
            let translation = feed.pull(&mut chunk[..capacity]);
            if translation.is_stalled() {
                stalls += 1;
            }
            collected[written..written + translation.produced]
                .copy_from_slice(&chunk[..translation.produced]);
            written += translation.produced;
        }

        let mut expected = [Symbol::default(); 40];
        translate(&source, &mut expected, &TIMING);
        assert_eq!(written, 40);
        assert_eq!(collected, expected);
        assert!(stalls >= 2);
        assert!(feed.remaining().is_empty());
        assert_eq!(feed.pull(&mut [Symbol::default(); 8]), Translation::default());
    }

    #[test]
    fn test_symbol_raw_layout() {
        let symbol = Symbol::high_low(3, 9);
        assert_eq!(symbol.to_raw(), 3 | 1 << 15 | 9 << 16);
        assert_eq!(Symbol::from_raw(symbol.to_raw()), symbol);
        assert_eq!(Symbol::new(false, 0x7FFF, true, 1).to_raw(), 0x7FFF | 1 << 16 | 1 << 31);
        assert_eq!(symbol.ticks(), 12);
    }
}
