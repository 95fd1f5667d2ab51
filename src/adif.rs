use crate::band;
use crate::exchange;
use crate::freq;
use crate::grid;
use crate::mode;
use crate::model::{text, ContactRecord};
use chrono::NaiveDateTime;
use log::debug;
use std::fmt;

const DEFAULT_TIMESTAMP: &str = "0000-00-00 00:00:00";
const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// One `<TAG:N>value` field; N counts characters of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdifField {
    pub tag: &'static str,
    pub value: String,
}

impl AdifField {
    pub fn new(tag: &'static str, value: impl Into<String>) -> Self {
        Self { tag, value: value.into() }
    }
}

impl fmt::Display for AdifField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>{}", self.tag, self.value.chars().count(), self.value)
    }
}

/// A whole contact, rendered as a single `<EOR>`-terminated line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedLine {
    pub fields: Vec<AdifField>,
}

impl EncodedLine {
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.tag == tag).map(|f| f.value.as_str())
    }
}

impl fmt::Display for EncodedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            write!(f, "{} ", field)?;
        }
        f.write_str("<EOR>")
    }
}

/// Character-indexed slice that clamps instead of panicking.
fn chars_between(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Positional split of `YYYY-MM-DD HH:MM:SS` into `YYYYMMDD` and `HHMMSS`.
pub fn split_timestamp(ts: &str) -> (String, String) {
    if NaiveDateTime::parse_from_str(ts, TIMESTAMP_FMT).is_err() {
        debug!("timestamp {:?} is not {}; extracting by position", ts, TIMESTAMP_FMT);
    }
    let date = chars_between(ts, 0, 10).replace('-', "");
    let time = format!(
        "{}{}{}",
        chars_between(ts, 11, 13),
        chars_between(ts, 14, 16),
        chars_between(ts, 17, 20)
    );
    (date, time)
}

/// Uppercases the first letter of every alphabetic run, lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn encode(contact: &ContactRecord) -> EncodedLine {
    let contest = contact.contest();
    let timestamp = contact.timestamp.as_deref().unwrap_or(DEFAULT_TIMESTAMP);
    let (qso_date, time_on) = split_timestamp(timestamp);
    let frequency = freq::from_raw(contact.rxfreq.as_deref());
    let band = band::band_for(frequency.mhz);
    let mode = mode::normalize_mode(contest, text(&contact.mode));

    let mut fields = vec![
        AdifField::new("QSO_DATE", qso_date),
        AdifField::new("TIME_ON", time_on),
        AdifField::new("STATION_CALLSIGN", contact.station_callsign()),
        AdifField::new("CALL", text(&contact.call).to_uppercase()),
    ];
    if let Some(name) = contact.name.as_deref().filter(|n| !n.is_empty()) {
        fields.push(AdifField::new("NAME", title_case(name)));
    }
    fields.push(AdifField::new("MODE", mode.mode));
    if let Some(submode) = mode.submode {
        fields.push(AdifField::new("SUBMODE", submode));
    }
    fields.push(AdifField::new("BAND", band));
    fields.push(AdifField::new("FREQ", frequency.display));
    fields.push(AdifField::new("RST_SENT", text(&contact.snt)));
    fields.push(AdifField::new("RST_RCVD", text(&contact.rcv)));

    if let Some(stx) = exchange::sent_exchange(contact) {
        fields.push(AdifField::new("STX_STRING", stx));
    }
    if let Some(srx) = exchange::received_exchange(contact) {
        fields.push(AdifField::new("SRX_STRING", srx));
    }
    if let Some(grid) = grid::sanitize_grid(text(&contact.gridsquare)) {
        fields.push(AdifField::new("GRIDSQUARE", grid));
    }

    let pfx = text(&contact.wpxprefix);
    if !pfx.is_empty() {
        fields.push(AdifField::new("PFX", pfx));
    }
    if contest.chars().count() > 1 {
        fields.push(AdifField::new("CONTEST_ID", contest));
    }
    let comment = text(&contact.comment);
    if !comment.is_empty() {
        fields.push(AdifField::new("COMMENT", comment));
    }

    EncodedLine { fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_day_contact() -> ContactRecord {
        ContactRecord {
            call: Some("w1aw".into()),
            rxfreq: Some("710000".into()),
            mode: Some("CW".into()),
            timestamp: Some("2024-01-01 12:34:56".into()),
            stationprefix: Some("k1abc".into()),
            contestname: Some("ARRL-FD".into()),
            snt: Some("59".into()),
            rcv: Some("59".into()),
            sent_exchange: Some("1A".into()),
            exchange1: Some("2".into()),
            sect: Some("EMA".into()),
            ..ContactRecord::default()
        }
    }

    #[test]
    fn field_day_line_in_order() {
        let line = encode(&field_day_contact()).to_string();
        assert_eq!(
            line,
            "<QSO_DATE:8>20240101 <TIME_ON:6>123456 <STATION_CALLSIGN:5>K1ABC <CALL:4>W1AW \
             <MODE:2>CW <BAND:3>40m <FREQ:5>7.100 <RST_SENT:2>59 <RST_RCVD:2>59 \
             <STX_STRING:2>1A <SRX_STRING:5>2 EMA <CONTEST_ID:7>ARRL-FD <EOR>"
        );
    }

    #[test]
    fn raw_71000000_is_710_mhz() {
        let c = ContactRecord { rxfreq: Some("71000000".into()), ..field_day_contact() };
        let line = encode(&c);
        assert_eq!(line.get("FREQ"), Some("710.000"));
        assert_eq!(line.get("BAND"), Some("0m"));
    }

    #[test]
    fn optional_fields_follow_fixed_order() {
        let c = ContactRecord {
            name: Some("mary ann".into()),
            mode: Some("USB".into()),
            gridsquare: Some("FN42aa".into()),
            wpxprefix: Some("W1".into()),
            comment: Some("nice sig".into()),
            ..field_day_contact()
        };
        let tags: Vec<_> = encode(&c).fields.iter().map(|f| f.tag).collect();
        assert_eq!(
            tags,
            [
                "QSO_DATE", "TIME_ON", "STATION_CALLSIGN", "CALL", "NAME", "MODE", "SUBMODE",
                "BAND", "FREQ", "RST_SENT", "RST_RCVD", "STX_STRING", "SRX_STRING",
                "GRIDSQUARE", "PFX", "CONTEST_ID", "COMMENT",
            ]
        );
        let line = encode(&c);
        assert_eq!(line.get("NAME"), Some("Mary Ann"));
        assert_eq!(line.get("MODE"), Some("SSB"));
        assert_eq!(line.get("SUBMODE"), Some("USB"));
        assert_eq!(line.get("GRIDSQUARE"), Some("FN42aa"));
    }

    #[test]
    fn empty_contact_keeps_required_fields() {
        let line = encode(&ContactRecord::default()).to_string();
        assert_eq!(
            line,
            "<QSO_DATE:8>00000000 <TIME_ON:6>000000 <STATION_CALLSIGN:0> <CALL:0> <MODE:0> \
             <BAND:2>0m <FREQ:5>0.000 <RST_SENT:0> <RST_RCVD:0> <EOR>"
        );
    }

    #[test]
    fn bad_grid_and_single_char_contest_are_omitted() {
        let c = ContactRecord {
            gridsquare: Some("zz99".into()),
            contestname: Some("X".into()),
            sntnr: Some("3".into()),
            ..ContactRecord::default()
        };
        let line = encode(&c);
        assert_eq!(line.get("GRIDSQUARE"), None);
        assert_eq!(line.get("CONTEST_ID"), None);
        assert_eq!(line.get("STX_STRING"), Some("3"));
    }

    #[test]
    fn absent_contest_name_omits_contest_id() {
        let c = ContactRecord { contestname: None, ..field_day_contact() };
        let line = encode(&c);
        assert_eq!(line.get("CONTEST_ID"), None);
        assert!(!line.to_string().contains("contestname"));
    }

    #[test]
    fn short_timestamps_do_not_panic() {
        assert_eq!(split_timestamp("2024-01-01 12:3"), ("20240101".to_string(), "123".to_string()));
        assert_eq!(split_timestamp(""), (String::new(), String::new()));
        assert_eq!(split_timestamp("2024-01-01 12:34:56.789"), ("20240101".to_string(), "123456.".to_string()));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(AdifField::new("NAME", "Jörg").to_string(), "<NAME:4>Jörg");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("JOHN SMITH"), "John Smith");
        assert_eq!(title_case("o'brien"), "O'Brien");
    }
}
