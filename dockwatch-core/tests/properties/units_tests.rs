//! Properties of byte-size and percentage decoding

use dockwatch_core::stats::units::{decode_byte_size, decode_percent};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decoding_is_deterministic(value in 0.0f64..10_000.0) {
        let token = format!("{value:.2}MiB");
        prop_assert_eq!(decode_byte_size(&token), decode_byte_size(&token));
    }

    #[test]
    fn decoding_is_monotonic_across_units(value in 1.0f64..1000.0) {
        let kib = decode_byte_size(&format!("{value:.2}KiB")).unwrap();
        let mib = decode_byte_size(&format!("{value:.2}MiB")).unwrap();
        let gib = decode_byte_size(&format!("{value:.2}GiB")).unwrap();
        prop_assert!(kib < mib);
        prop_assert!(mib < gib);
    }

    #[test]
    fn thousand_kilobytes_equal_one_megabyte(n in 1u64..1000) {
        let kb = decode_byte_size(&format!("{}kB", n * 1000)).unwrap();
        let mb = decode_byte_size(&format!("{n}MB")).unwrap();
        prop_assert_eq!(kb, mb);
    }

    #[test]
    fn binary_units_dominate_decimal_counterparts(value in 1.0f64..1000.0) {
        let kib = decode_byte_size(&format!("{value:.2}KiB")).unwrap();
        let kb = decode_byte_size(&format!("{value:.2}kB")).unwrap();
        prop_assert!(kib >= kb);
    }

    #[test]
    fn bare_byte_suffix_is_exact(n in 0u64..1_000_000) {
        prop_assert_eq!(decode_byte_size(&format!("{n}B")), Some(n));
    }

    #[test]
    fn percent_roundtrip(value in 0.0f64..1000.0) {
        let decoded = decode_percent(&format!("{value:.2}%")).unwrap();
        prop_assert!((decoded - value).abs() < 0.01);
    }
}
