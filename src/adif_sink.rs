use crate::adif;
use crate::adif_log::AdifLog;
use crate::model::ContactRecord;
use log::{debug, error, info};
use tokio::sync::mpsc::UnboundedReceiver;

/// Encodes and appends contacts in arrival order until the channel closes.
/// A contact that cannot be written is reported and dropped.
/// Returns the number of contacts written.
pub async fn write_adif_stream(log: AdifLog, mut rx: UnboundedReceiver<ContactRecord>) -> usize {
    let mut count: usize = 0;

    while let Some(contact) = rx.recv().await {
        let station = contact.station_callsign();
        let line = adif::encode(&contact);
        match log.append(&station, &line).await {
            Ok(path) => {
                count += 1;
                debug!("logged {} to {}", line.get("CALL").unwrap_or(""), path.display());
            }
            Err(e) => error!("Error saving ADIF file: {}", e),
        }
    }

    info!("ADIF sink wrote {} contacts", count);
    count
}
