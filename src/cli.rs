use crate::config::DEFAULT_PORT;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to bind the relay on.
    #[clap(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
