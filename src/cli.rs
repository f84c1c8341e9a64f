use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gcredits")]
#[command(about = "Generate an HTML credits page from a git commit range")]
#[command(after_help = "Example: gcredits --source=/src/blender --range=SHA1..HEAD")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub args: CreditsArgs,

    #[arg(long, help = "Default log filter (overridden by RUST_LOG)", default_value = "warn")]
    pub log_level: String,
}

#[derive(Args, Clone, Debug)]
pub struct CreditsArgs {
    #[arg(long, value_name = "PATH", help = "Path to git repository")]
    pub source: PathBuf,

    #[arg(long, value_name = "SHA1_RANGE", help = "Range to use, eg: 169c95b8..HEAD")]
    pub range: String,

    #[arg(short, long, value_name = "PATH", help = "Where to write the credits page", default_value = "credits.html")]
    pub output: PathBuf,

    #[arg(long, value_name = "FILE", help = "JSON file with extra aliases, ignored prefixes or companies")]
    pub config: Option<PathBuf>,

    #[arg(long = "ignore-prefix", value_name = "PREFIX", help = "Do not credit changes under this path prefix (repeatable)")]
    pub ignore_prefix: Vec<String>,

    #[arg(long, help = "Omit year ranges and the organizations section")]
    pub no_main_credits: bool,

    #[arg(long, help = "Credit merge commits (diffed against their first parent)")]
    pub include_merges: bool,

    #[arg(long, help = "Also print the aggregated credits as JSON")]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::exec::exec(self.args)
    }
}
