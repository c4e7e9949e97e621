use crate::error::{Error, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Output streams live to the controlling terminal.
    Inherit,
    /// Standard output and standard error are captured and returned.
    Capture,
}

#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Capability to run a shell command string in a working directory.
///
/// The dispatcher and the auxiliary tools only reach the operating
/// system through this trait, tests substitute a recording fake.
pub trait CommandRunner {
    fn run(
        &self,
        command: &str,
        working_dir: &Path,
        envs: &[(String, String)],
        output_mode: OutputMode,
    ) -> Result<CommandOutput>;
}

/// Runs commands through the platform shell, `sh -c` on unix and
/// `cmd /C` on windows.
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn run(
        &self,
        command: &str,
        working_dir: &Path,
        envs: &[(String, String)],
        output_mode: OutputMode,
    ) -> Result<CommandOutput> {
        log::info!("{}", command);
        let mut process = if cfg!(target_os = "windows") {
            let mut process = std::process::Command::new("cmd");
            process.arg("/C").arg(command);
            process
        } else {
            let mut process = std::process::Command::new("sh");
            process.arg("-c").arg(command);
            process
        };
        process.current_dir(working_dir);
        for (key, value) in envs {
            process.env(key, value);
        }
        match output_mode {
            OutputMode::Inherit => {
                let status = process.status().map_err(|err| Error::ExternalCommand {
                    command: command.to_string(),
                    working_dir: working_dir.to_path_buf(),
                    status: None,
                    stderr: Some(err.to_string()),
                })?;
                if !status.success() {
                    return Err(Error::ExternalCommand {
                        command: command.to_string(),
                        working_dir: working_dir.to_path_buf(),
                        status: status.code(),
                        stderr: None,
                    });
                }
                Ok(CommandOutput::default())
            }
            OutputMode::Capture => {
                let output = process.output().map_err(|err| Error::ExternalCommand {
                    command: command.to_string(),
                    working_dir: working_dir.to_path_buf(),
                    status: None,
                    stderr: Some(err.to_string()),
                })?;
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();
                if !output.status.success() {
                    return Err(Error::ExternalCommand {
                        command: command.to_string(),
                        working_dir: working_dir.to_path_buf(),
                        status: output.status.code(),
                        stderr: Some(stderr),
                    });
                }
                Ok(CommandOutput { stdout, stderr })
            }
        }
    }
}

pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = std::env::var("PATH") {
        for dir in std::env::split_paths(&path) {
            if dir.join(program).is_file() {
                return true;
            }
        }
    }
    false
}
