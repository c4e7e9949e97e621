use clap::Parser;

/// Build driver for the engine and for downstream projects consuming
/// it. Without flags the driver asks its questions interactively.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Build kind, `T` for the engine test project or `O` for an other
    /// project. Prompted for when absent.
    #[arg(short, long)]
    pub kind: Option<String>,
    /// Operation selection over `C`, `B`, `D`, `S`, `P` and `A`.
    /// Prompted for when absent.
    #[arg(short, long)]
    pub ops: Option<String>,
    /// JSON description of the other project, replaces the interactive
    /// other-project questions.
    #[arg(short, long)]
    pub project_file: Option<std::path::PathBuf>,
}
