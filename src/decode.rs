use crate::errors::AppError;
use crate::model::ContactRecord;
use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Root element of the only message type that carries a logged contact.
pub const CONTACT_ROOT: &str = "contactinfo";

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Reads the direct children of the root into `contact`, first value per tag.
/// Children with nested elements are skipped whole.
fn read_children(reader: &mut Reader<&[u8]>, contact: &mut ContactRecord) -> Result<(), AppError> {
    // depth below the root element
    let mut depth = 0usize;
    let mut current: Option<String> = None;
    let mut nested = false;
    let mut value = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if depth == 1 {
                    current = Some(tag_name(&e));
                    nested = false;
                    value.clear();
                } else {
                    nested = true;
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Ok(());
                }
                if depth == 1 {
                    if let Some(tag) = current.take() {
                        if nested {
                            trace!("decode: skipped nested <{}>", tag);
                        } else if !contact.set_field(&tag, value.trim()) {
                            trace!("decode: ignored <{}>", tag);
                        }
                    }
                }
                depth -= 1;
            }
            Event::Text(t) if depth == 1 => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| AppError::Parse(format!("xml text: {}", e)))?;
                value.push_str(&unescaped);
            }
            Event::CData(c) if depth == 1 => value.push_str(&String::from_utf8_lossy(&c)),
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Decodes one datagram. `Ok(None)` means a well-formed message that is not a contact.
pub fn decode_datagram(bytes: &[u8]) -> Result<Option<ContactRecord>, AppError> {
    let xml = std::str::from_utf8(bytes)
        .map_err(|e| AppError::Parse(format!("datagram is not utf-8: {}", e)))?;

    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if tag_name(&e) != CONTACT_ROOT {
                    return Ok(None);
                }
                let mut contact = ContactRecord::default();
                read_children(&mut reader, &mut contact)?;
                return Ok(Some(contact));
            }
            Event::Empty(e) => {
                return Ok((tag_name(&e) == CONTACT_ROOT).then(ContactRecord::default));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
