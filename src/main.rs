use anyhow::Result;
use gcredits::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level)).init();
    cli.execute()
}
