mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::config::CliArgs::parse();
    platform::run_app(args)
}
