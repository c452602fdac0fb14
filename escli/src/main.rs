mod cli;
mod config;

use clap::Parser;
use config::{read_config, Config};
use dotenv::dotenv;
use escli_core::{prelude::*, transport::HttpTransport};
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// YAML file with `host` and `timeout` settings, ESHOST takes precedence over `host`
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// request timeout in seconds, no timeout by default
    #[clap(long, global = true, env = "ESCLI_TIMEOUT")]
    timeout: Option<u64>,

    #[clap(subcommand)]
    action: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    Ls(cli::ls::Opts),
    Search(cli::search::Opts),
    Doc(cli::doc::Opts),
}

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = usage_exit_code(&e);
            let _ = e.print();
            process::exit(code);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(args, env::var("ESHOST").ok(), &mut out) {
        eprintln!("Error: {:#}", e);
        process::exit(exit_code(&e));
    }
}

fn run(args: Args, host_env: Option<String>, out: &mut impl Write) -> Result<()> {
    let file = args.config.as_deref().map(read_config).transpose()?;
    let config = Config::resolve(file, host_env, args.timeout)?;
    debug!("Using {:?}", config);
    let client = HttpTransport::new(config.timeout)?;

    match args.action {
        Subcommand::Ls(opts) => cli::ls::main(opts, &client, &config, out)?,
        Subcommand::Search(opts) => cli::search::main(opts, &client, &config, out)?,
        Subcommand::Doc(opts) => cli::doc::main(opts, &client, &config, out)?,
    }
    out.flush().context(WritingOutput)?;
    Ok(())
}

/// Справка и версия завершаются с кодом 0, любая ошибка разбора аргументов с кодом 1
fn usage_exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        ErrorKind::Configuration.exit_code()
    } else {
        0
    }
}
