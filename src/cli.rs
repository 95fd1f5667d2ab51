use argparse::{ArgumentParser, Store, StoreOption};
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 12061;

pub struct CliArgs {
    pub bind: String,
    pub port: u16,
    pub out_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.into(),
            port: DEFAULT_PORT,
            out_dir: None,
            log_level: "essential".into(),
        }
    }
}

impl CliArgs {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Output directory, defaulting to the user's home.
    pub fn output_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(home_dir)
    }
}

pub fn home_dir() -> PathBuf {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("N1MM contactinfo broadcast -> ADIF one-liner log");
        ap.refer(&mut args.bind)
            .add_option(&["--bind"], Store, "Address to listen on");
        ap.refer(&mut args.port)
            .add_option(&["--port"], Store, "UDP port to listen on");
        ap.refer(&mut args.out_dir)
            .add_option(&["--out-dir"], StoreOption, "Directory for <CALL>_adif_export.adi (default: home)");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
