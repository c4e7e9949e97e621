use clap::Parser;
use rs_build_core::executor::ShellCommandRunner;
use std::path::PathBuf;

mod compile;

/// Compiles one vertex/fragment shader pair with the Vulkan SDK glslc.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Vertex shader source file
    #[arg(short = 'v', long)]
    vertex_input: PathBuf,
    /// Fragment shader source file
    #[arg(short = 'f', long)]
    fragment_input: PathBuf,
    /// Compiled vertex shader destination
    #[arg(long)]
    vertex_output: PathBuf,
    /// Compiled fragment shader destination
    #[arg(long)]
    fragment_output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.write_style(env_logger::WriteStyle::Auto);
    builder.filter_level(log::LevelFilter::Trace);
    builder.init();

    let args = Args::try_parse()?;
    let engine_root = rs_build_core::file_manager::engine_root_dir();
    let glslc = compile::glslc_path(&engine_root)?;
    let runner = ShellCommandRunner;
    compile::compile_pair(
        &runner,
        &engine_root,
        &glslc,
        &args.vertex_input,
        &args.vertex_output,
        &args.fragment_input,
        &args.fragment_output,
    )?;
    Ok(())
}
