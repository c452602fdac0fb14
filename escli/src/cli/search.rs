use crate::config::Config;
use clap::Parser;
use escli_core::{
    commands::{search_index, PAGE_SIZE},
    prelude::*,
    transport::Transport,
};
use std::io::Write;

#[derive(Parser, Debug)]
#[clap(about = "Print the first 15 documents of an index")]
pub struct Opts {
    /// index or alias name
    index: String,
}

pub fn main(opts: Opts, client: &impl Transport, config: &Config, out: &mut impl Write) -> Result<()> {
    info!("Searching {} (size: {})", opts.index, PAGE_SIZE);
    search_index(client, &config.host, &opts.index, out)
}
