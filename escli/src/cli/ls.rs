use crate::config::Config;
use clap::Parser;
use escli_core::{commands::list_indices, prelude::*, transport::Transport};
use std::io::Write;

#[derive(Parser, Debug)]
#[clap(about = "List index names in ascending order")]
pub struct Opts {}

pub fn main(_opts: Opts, client: &impl Transport, config: &Config, out: &mut impl Write) -> Result<()> {
    info!("Listing indices of {}", config.host);
    list_indices(client, &config.host, out)
}
