use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Configuration(String),
    UnknownOperation(char),
    ExternalCommand {
        command: String,
        working_dir: PathBuf,
        status: Option<i32>,
        stderr: Option<String>,
    },
    MissingTool(String),
    IO(std::io::Error, Option<String>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Configuration(message) => {
                write!(f, "Configuration error: {}", message)
            }
            Error::UnknownOperation(code) => {
                write!(f, "Unknown build operation '{}'", code)
            }
            Error::ExternalCommand {
                command,
                working_dir,
                status,
                stderr,
            } => {
                match status {
                    Some(status) => write!(
                        f,
                        "Command `{}` in {} exited with status {}",
                        command,
                        working_dir.display(),
                        status
                    )?,
                    None => write!(
                        f,
                        "Command `{}` in {} could not be run",
                        command,
                        working_dir.display()
                    )?,
                }
                if let Some(stderr) = stderr {
                    write!(f, "\n{}", stderr)?;
                }
                Ok(())
            }
            Error::MissingTool(message) => {
                write!(f, "Missing tool: {}", message)
            }
            Error::IO(err, context) => match context {
                Some(context) => write!(f, "{}, {}", context, err),
                None => write!(f, "{}", err),
            },
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
