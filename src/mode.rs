use log::trace;

/// Mode as written to the log: `MODE` plus an optional `SUBMODE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeFields {
    pub mode: String,
    pub submode: Option<String>,
}

pub const CW_SPELLINGS: &[&str] = &["CW", "CW-U", "CW-L", "CW-R", "CWR"];
pub const RTTY_CONTESTS: &[&str] = &["CQ-WW-RTTY", "WEEKLY-RTTY"];
pub const SIDEBANDS: &[&str] = &["USB", "LSB"];

pub struct ModeRule {
    pub name: &'static str,
    pub applies: fn(contest: &str, mode: &str) -> bool,
    pub canonical: fn(mode: &str) -> String,
}

fn rtty_contest(contest: &str, _mode: &str) -> bool {
    RTTY_CONTESTS.contains(&contest)
}

fn cw_spelling(_contest: &str, mode: &str) -> bool {
    CW_SPELLINGS.contains(&mode)
}

fn rtty(_mode: &str) -> String {
    "RTTY".to_string()
}

fn cw(_mode: &str) -> String {
    "CW".to_string()
}

/// Evaluated in order, first hit wins. Contest convention beats the reported mode.
pub static MODE_RULES: &[ModeRule] = &[
    ModeRule { name: "rtty-only contest", applies: rtty_contest, canonical: rtty },
    ModeRule { name: "cw spelling", applies: cw_spelling, canonical: cw },
];

pub fn canonical_mode(contest: &str, reported: &str) -> String {
    match MODE_RULES.iter().find(|r| (r.applies)(contest, reported)) {
        Some(rule) => {
            trace!("mode {:?} rewritten by rule '{}'", reported, rule.name);
            (rule.canonical)(reported)
        }
        None => reported.to_string(),
    }
}

pub fn normalize_mode(contest: &str, reported: &str) -> ModeFields {
    let mode = canonical_mode(contest, reported);
    if SIDEBANDS.contains(&mode.as_str()) {
        ModeFields { mode: "SSB".to_string(), submode: Some(mode) }
    } else {
        ModeFields { mode, submode: None }
    }
}
