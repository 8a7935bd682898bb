use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    /// Path to the juju debug log
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only count lines emitted by this charm
    #[arg(value_name = "CHARM")]
    pub charm: Option<String>,

    /// Path to a TOML file overriding the line pattern or indentation
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
