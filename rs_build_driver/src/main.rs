use clap::Parser;
use cli::Args;
use project::ProjectDescription;
use rs_build_core::config::BuildConfig;
use rs_build_core::dispatcher::Dispatcher;
use rs_build_core::error::Error;
use rs_build_core::executor::ShellCommandRunner;
use rs_build_core::operation::parse_selection;
use std::io::Write;
use std::path::Path;

mod cli;
mod project;

const KIND_MENU: &str = r#"
Target to build:
    T - test project, the engine on its own
    O - other project built on top of the engine
"#;

const OPERATION_MENU: &str = r#"
Build script start:
    C - cleans main project
    B - builds main project
    D - builds main project dependencies
    S - compiles main project shaders
    P - runs post-compile and packaging scripts
    A - runs all build commands in order
"#;

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn resolve_build_kind(args: &Args) -> anyhow::Result<char> {
    let answer = match &args.kind {
        Some(kind) => kind.clone(),
        None => prompt(KIND_MENU)?,
    };
    let mut characters = answer.chars();
    let Some(first) = characters.next() else {
        return Err(Error::Configuration("No build kind was given".to_string()).into());
    };
    if characters.next().is_some() {
        log::warn!("Multiple characters were given for the build kind, only the first is used");
    }
    Ok(first.to_ascii_uppercase())
}

fn prompt_other_project() -> anyhow::Result<BuildConfig> {
    let app_name = prompt("App name: ")?;
    let executable_file_path = prompt("Executable file path: ")?;
    let executable_name = prompt("Executable name: ")?;
    let deploy_folder = prompt("Deploy folder: ")?;
    let build_command = prompt("Build command: ")?;
    let clean_command = prompt("Clean command: ")?;
    let build_folder = prompt("Build folder: ")?;
    let config = BuildConfig::for_other_project(
        &app_name,
        Path::new(&executable_file_path),
        &executable_name,
        Path::new(&deploy_folder),
        &build_command,
        &clean_command,
        Path::new(&build_folder),
    )?;
    Ok(config)
}

fn resolve_config(args: &Args) -> anyhow::Result<BuildConfig> {
    match resolve_build_kind(args)? {
        'T' => Ok(BuildConfig::for_test_project()),
        'O' => match &args.project_file {
            Some(project_file) => {
                let description = ProjectDescription::from_file(project_file)?;
                Ok(description.to_config()?)
            }
            None => prompt_other_project(),
        },
        other => {
            Err(Error::Configuration(format!("Unknown build kind '{}'", other)).into())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.write_style(env_logger::WriteStyle::Auto);
    builder.filter_level(log::LevelFilter::Info);
    builder.init();

    let args = Args::try_parse()?;
    let config = resolve_config(&args)?;
    let selection = match &args.ops {
        Some(ops) => ops.clone(),
        None => prompt(OPERATION_MENU)?,
    };
    let operations = parse_selection(selection.trim())?;

    let runner = ShellCommandRunner;
    let dispatcher = Dispatcher::new(&config, &runner);
    dispatcher.dispatch(&operations)?;
    Ok(())
}
