use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;

/// `rxfreq` is broadcast in tens of hertz.
const RAW_PER_MHZ: i64 = 100_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Frequency {
    pub mhz: Decimal,
    pub display: String,
}

/// Converts a raw `rxfreq` value to megahertz. Absent or unreadable values count as zero.
pub fn from_raw(raw: Option<&str>) -> Frequency {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| match Decimal::from_str(s) {
            Ok(d) => Some(d),
            Err(e) => {
                debug!("rxfreq {:?} unreadable ({}); using 0", s, e);
                None
            }
        })
        .unwrap_or(Decimal::ZERO);

    let mhz = to_mhz(raw);
    Frequency { display: pad_freq(&mhz.to_string()), mhz }
}

/// Exact quotient, without trailing zeros beyond what the raw value carried.
fn to_mhz(raw: Decimal) -> Decimal {
    match raw.checked_div(Decimal::from(RAW_PER_MHZ)) {
        Some(q) => {
            let mut q = q.normalize();
            if q.scale() < raw.scale() {
                q.rescale(raw.scale());
            }
            q
        }
        None => Decimal::ZERO,
    }
}

/// Guarantees at least three digits after the decimal point.
pub fn pad_freq(freq: &str) -> String {
    match freq.split_once('.') {
        Some((integer, decimal)) => format!("{}.{:0<3}", integer, decimal),
        None => format!("{}.000", freq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_tens_of_hertz_to_mhz() {
        assert_eq!(from_raw(Some("710000")).display, "7.100");
        assert_eq!(from_raw(Some("1402500")).display, "14.025");
        assert_eq!(from_raw(Some("352519")).display, "3.52519");
        assert_eq!(from_raw(Some("71000000")).display, "710.000");
        assert_eq!(from_raw(Some("700000")).display, "7.000");
    }

    #[test]
    fn exact_decimal_keeps_mhz_value() {
        let f = from_raw(Some("710000"));
        assert_eq!(f.mhz, Decimal::new(71, 1));
    }

    #[test]
    fn missing_or_garbage_is_zero() {
        assert_eq!(from_raw(None).display, "0.000");
        assert_eq!(from_raw(Some("")).display, "0.000");
        assert_eq!(from_raw(Some("abc")).display, "0.000");
        assert_eq!(from_raw(Some("0")).mhz, Decimal::ZERO);
    }

    #[test]
    fn raw_fraction_digits_are_not_dropped() {
        assert_eq!(from_raw(Some("710000.0000")).display, "7.1000");
        assert_eq!(from_raw(Some("710000.5")).display, "7.100005");
    }

    #[test]
    fn pad_freq_shapes() {
        assert_eq!(pad_freq("7"), "7.000");
        assert_eq!(pad_freq("7.1"), "7.100");
        assert_eq!(pad_freq("14.025"), "14.025");
        assert_eq!(pad_freq("3.52519"), "3.52519");
    }

    proptest! {
        #[test]
        fn display_always_has_three_decimals(raw in 0u64..10_000_000_000u64) {
            let shown = from_raw(Some(raw.to_string().as_str())).display;
            let (_, decimals) = shown.split_once('.').expect("decimal point");
            prop_assert!(decimals.len() >= 3);
        }

        #[test]
        fn padding_is_idempotent(raw in 0u64..10_000_000_000u64) {
            let shown = from_raw(Some(raw.to_string().as_str())).display;
            prop_assert_eq!(pad_freq(&shown), shown);
        }
    }
}
