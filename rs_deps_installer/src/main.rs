use clap::Parser;
use rs_build_core::executor::ShellCommandRunner;

mod install;

/// Installs the engine's third-party libraries and the Vulkan SDK.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the SDK environment setup script instead of installing
    #[arg(long, default_value_t = false)]
    setup_env: bool,
}

fn main() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.write_style(env_logger::WriteStyle::Auto);
    builder.filter_level(log::LevelFilter::Info);
    builder.init();

    let args = Args::try_parse()?;
    let engine_root = rs_build_core::file_manager::engine_root_dir();
    let runner = ShellCommandRunner;
    let os = std::env::consts::OS;
    if args.setup_env {
        install::setup_environment(&runner, &engine_root, os)?;
    } else {
        install::install(&runner, &engine_root, os)?;
    }
    Ok(())
}
