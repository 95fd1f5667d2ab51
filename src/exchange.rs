use crate::model::{text, ContactRecord};

pub const FIELD_DAY: &[&str] = &["WFD", "ARRL-FD", "ARRL-FIELD-DAY"];
pub const ICWC_MST: &[&str] = &["ICWC-MST"];
pub const SINGLE_EXCHANGE: &[&str] = &["CQ-160-CW", "CQ-160-SSB", "WEEKLY-RTTY"];
pub const K1USN_SST: &[&str] = &["K1USN-SST"];
pub const CQ_WW_RTTY: &[&str] = &["CQ-WW-RTTY"];

/// Received compositions shorter than this are treated as noise.
const MIN_RCVD_LEN: usize = 2;

pub struct ExchangeRule {
    pub contests: &'static [&'static str],
    pub compose: fn(&ContactRecord) -> Option<String>,
}

impl ExchangeRule {
    fn matches(&self, contest: &str) -> bool {
        self.contests.contains(&contest)
    }
}

pub static SENT_RULES: &[ExchangeRule] = &[
    ExchangeRule { contests: FIELD_DAY, compose: sent_field_day },
    ExchangeRule { contests: ICWC_MST, compose: sent_icwc },
];

pub static RCVD_RULES: &[ExchangeRule] = &[
    ExchangeRule { contests: ICWC_MST, compose: rcvd_icwc },
    ExchangeRule { contests: FIELD_DAY, compose: rcvd_field_day },
    ExchangeRule { contests: SINGLE_EXCHANGE, compose: rcvd_exchange1 },
    ExchangeRule { contests: K1USN_SST, compose: rcvd_sst },
    ExchangeRule { contests: CQ_WW_RTTY, compose: rcvd_cq_ww_rtty },
];

/// Serial numbers default to `"0"`, which means "none".
fn serial(field: &Option<String>) -> &str {
    match text(field) {
        "" => "0",
        s => s,
    }
}

fn serial_fallback(field: &Option<String>) -> Option<String> {
    match serial(field) {
        "0" => None,
        s => Some(s.to_string()),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Selected {
    /// A rule named the contest; its result stands even when empty.
    Rule(Option<String>),
    NoRule,
}

impl Selected {
    fn or_serial(self, serial: &Option<String>) -> Option<String> {
        match self {
            Selected::Rule(exchange) => exchange,
            Selected::NoRule => serial_fallback(serial),
        }
    }
}

/// First rule naming the contest wins.
pub fn select(rules: &[ExchangeRule], contact: &ContactRecord) -> Selected {
    let contest = contact.contest();
    match rules.iter().find(|r| r.matches(contest)) {
        Some(rule) => Selected::Rule((rule.compose)(contact)),
        None => Selected::NoRule,
    }
}

pub fn sent_exchange(contact: &ContactRecord) -> Option<String> {
    select(SENT_RULES, contact).or_serial(&contact.sntnr)
}

pub fn received_exchange(contact: &ContactRecord) -> Option<String> {
    select(RCVD_RULES, contact).or_serial(&contact.rcvnr)
}

/// Space-joined, trimmed and uppercased, if at least `min_len` characters survive.
fn join_upper(parts: &[&str], min_len: usize) -> Option<String> {
    let joined = parts.join(" ");
    let trimmed = joined.trim();
    (!trimmed.is_empty() && trimmed.chars().count() >= min_len).then(|| trimmed.to_uppercase())
}

fn sent_field_day(c: &ContactRecord) -> Option<String> {
    let sent = text(&c.sent_exchange);
    (!sent.trim().is_empty()).then(|| sent.to_uppercase())
}

fn sent_icwc(c: &ContactRecord) -> Option<String> {
    join_upper(&[text(&c.sent_exchange), serial(&c.sntnr)], 1)
}

fn rcvd_icwc(c: &ContactRecord) -> Option<String> {
    let name = text(&c.name).to_uppercase();
    join_upper(&[name.as_str(), text(&c.nr)], MIN_RCVD_LEN)
}

fn rcvd_field_day(c: &ContactRecord) -> Option<String> {
    join_upper(&[text(&c.exchange1), text(&c.sect)], MIN_RCVD_LEN)
}

fn rcvd_exchange1(c: &ContactRecord) -> Option<String> {
    join_upper(&[text(&c.exchange1)], MIN_RCVD_LEN)
}

fn rcvd_sst(c: &ContactRecord) -> Option<String> {
    join_upper(&[text(&c.exch_name), text(&c.sect)], MIN_RCVD_LEN)
}

fn rcvd_cq_ww_rtty(c: &ContactRecord) -> Option<String> {
    let zone = format!("{:0>2}", text(&c.zone));
    let ex1 = match text(&c.exchange1) {
        "" => "DX",
        s => s,
    };
    join_upper(&[zone.as_str(), ex1], MIN_RCVD_LEN)
}
