use clap::Parser;
use std::path::PathBuf;

/// greetform — a terminal greeting form
#[derive(Parser, Debug)]
#[command(name = "greetform", version, about = "Greeting form backed by a local or remote greeting service")]
pub struct Args {
    /// Submit the form once with NAME, print the greeting and exit instead of opening the form
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Config file to use instead of <config_dir>/greetform/config.toml
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
