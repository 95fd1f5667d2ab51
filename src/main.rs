mod adif;
mod adif_log;
mod adif_sink;
mod band;
mod cli;
mod decode;
mod errors;
mod exchange;
mod freq;
mod grid;
mod mode;
mod model;
mod udp_stream;

use crate::adif_log::AdifLog;
use crate::errors::AppError;
use crate::model::ContactRecord;
use env_logger::Env;
use log::info;
use std::net::SocketAddr;
use tokio::sync::mpsc;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), AppError> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    let addr = args.listen_addr();
    let out_dir = args.output_dir();
    let sock_addr: SocketAddr = addr
        .parse()
        .map_err(|e| AppError::Parse(format!("listen address {}: {}", addr, e)))?;
    let socket = udp_stream::bind_reusable(sock_addr)?;
    info!("Listening on {}; writing ADIF to {}", addr, out_dir.display());

    // receiver -> encoder handoff; the only point shared by both tasks
    let (tx, rx) = mpsc::unbounded_channel::<ContactRecord>();

    let receiver = tokio::spawn(udp_stream::watch_udp(socket, tx));
    let sink = tokio::spawn(adif_sink::write_adif_stream(AdifLog::new(out_dir), rx));

    let r_res = receiver.await.unwrap_or_else(|e| Err(AppError::Other(format!("receiver join: {e}"))));
    let written = sink.await.map_err(|e| AppError::Other(format!("sink join: {e}")))?;

    r_res?;
    info!("Done. {} contacts written", written);
    Ok(())
}
