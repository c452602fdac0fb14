use crate::config::Config;
use clap::Parser;
use escli_core::{commands::get_document, prelude::*, transport::Transport};
use std::io::Write;

#[derive(Parser, Debug)]
#[clap(about = "Print documents with a given _id, works across aliases and shards")]
pub struct Opts {
    /// index or alias name
    index: String,

    /// document id
    id: String,
}

pub fn main(opts: Opts, client: &impl Transport, config: &Config, out: &mut impl Write) -> Result<()> {
    info!("Retrieving document {} from {}", opts.id, opts.index);
    get_document(client, &config.host, &opts.index, &opts.id, out)
}
