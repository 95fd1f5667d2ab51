use rust_decimal::Decimal;
use std::sync::LazyLock;

pub const UNKNOWN_BAND: &str = "0m";

/// Inclusive range in MHz.
#[derive(Clone, Debug)]
pub struct BandRange {
    pub lower: Decimal,
    pub upper: Decimal,
    pub label: &'static str,
}

impl BandRange {
    pub fn contains(&self, mhz: Decimal) -> bool {
        self.lower <= mhz && mhz <= self.upper
    }
}

// (lower, upper, label); bounds are (mantissa, scale).
// Order is significant: 5m starts one millionth above the 6m upper edge.
const BAND_TABLE: [((i64, u32), (i64, u32), &str); 33] = [
    ((300_000, 0), (7_500_000, 0), "submm"),
    ((241_000, 0), (250_000, 0), "1mm"),
    ((134_000, 0), (149_000, 0), "2mm"),
    ((119_980, 0), (123_000, 0), "2.5mm"),
    ((75_500, 0), (81_000, 0), "4mm"),
    ((47_000, 0), (47_200, 0), "6mm"),
    ((24_000, 0), (24_250, 0), "1.25cm"),
    ((10_000, 0), (10_500, 0), "3cm"),
    ((5_650, 0), (5_925, 0), "6cm"),
    ((3_300, 0), (3_500, 0), "9cm"),
    ((2_300, 0), (2_450, 0), "13cm"),
    ((1_240, 0), (1_300, 0), "23cm"),
    ((902, 0), (928, 0), "33cm"),
    ((420, 0), (450, 0), "70cm"),
    ((222, 0), (225, 0), "1.25m"),
    ((144, 0), (148, 0), "2m"),
    ((70, 0), (71, 0), "4m"),
    ((54_000_001, 6), (699, 1), "5m"),
    ((50, 0), (54, 0), "6m"),
    ((40, 0), (45, 0), "8m"),
    ((280, 1), (297, 1), "10m"),
    ((24_890, 3), (2_499, 2), "12m"),
    ((210, 1), (2_145, 2), "15m"),
    ((18_068, 3), (18_168, 3), "17m"),
    ((140, 1), (1_435, 2), "20m"),
    ((101, 1), (1_015, 2), "30m"),
    ((70, 1), (73, 1), "40m"),
    ((506, 2), (545, 2), "60m"),
    ((35, 1), (40, 1), "80m"),
    ((18, 1), (20, 1), "160m"),
    ((501, 3), (504, 3), "560m"),
    ((472, 3), (479, 3), "630m"),
    ((1_357, 4), (1_378, 4), "2190m"),
];

pub static BANDS: LazyLock<Vec<BandRange>> = LazyLock::new(|| {
    BAND_TABLE
        .iter()
        .map(|&((lo, lo_scale), (hi, hi_scale), label)| BandRange {
            lower: Decimal::new(lo, lo_scale),
            upper: Decimal::new(hi, hi_scale),
            label,
        })
        .collect()
});

/// First enclosing range wins; gaps fall to [`UNKNOWN_BAND`].
pub fn band_for(mhz: Decimal) -> &'static str {
    BANDS
        .iter()
        .find(|b| b.contains(mhz))
        .map(|b| b.label)
        .unwrap_or(UNKNOWN_BAND)
}
