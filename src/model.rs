/// One logged contact as broadcast in a `contactinfo` message.
/// Every field is optional; the encoder substitutes defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRecord {
    pub timestamp: Option<String>,
    pub stationprefix: Option<String>,
    pub contestname: Option<String>,
    pub call: Option<String>,
    pub name: Option<String>,
    pub mode: Option<String>,
    pub rxfreq: Option<String>,
    pub snt: Option<String>,
    pub rcv: Option<String>,
    pub sntnr: Option<String>,
    pub rcvnr: Option<String>,
    pub gridsquare: Option<String>,
    pub wpxprefix: Option<String>,
    pub comment: Option<String>,
    // contest-specific exchange parts
    pub sent_exchange: Option<String>,
    pub exchange1: Option<String>,
    pub sect: Option<String>,
    pub exch_name: Option<String>,
    pub nr: Option<String>,
    pub zone: Option<String>,
}

/// Absent and empty read the same.
#[inline]
pub fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl ContactRecord {
    /// The slot an inbound element fills, by element name.
    fn slot(&mut self, tag: &str) -> Option<&mut Option<String>> {
        let slot = match tag {
            "timestamp" => &mut self.timestamp,
            "stationprefix" => &mut self.stationprefix,
            "contestname" => &mut self.contestname,
            "call" => &mut self.call,
            "name" => &mut self.name,
            "mode" => &mut self.mode,
            "rxfreq" => &mut self.rxfreq,
            "snt" => &mut self.snt,
            "rcv" => &mut self.rcv,
            "sntnr" => &mut self.sntnr,
            "rcvnr" => &mut self.rcvnr,
            "gridsquare" => &mut self.gridsquare,
            "wpxprefix" => &mut self.wpxprefix,
            "comment" => &mut self.comment,
            "SentExchange" => &mut self.sent_exchange,
            "Exchange1" => &mut self.exchange1,
            "Sect" => &mut self.sect,
            "Name" => &mut self.exch_name,
            "NR" => &mut self.nr,
            "ZN" => &mut self.zone,
            _ => return None,
        };
        Some(slot)
    }

    /// Fills a known field once. Unknown tags, empty values and repeats are ignored.
    pub fn set_field(&mut self, tag: &str, value: &str) -> bool {
        match self.slot(tag) {
            Some(slot) if slot.is_none() && !value.is_empty() => {
                *slot = Some(value.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn contest(&self) -> &str {
        text(&self.contestname)
    }

    pub fn station_callsign(&self) -> String {
        text(&self.stationprefix).to_uppercase()
    }
}
