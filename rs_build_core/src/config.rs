use crate::error::{Error, Result};
use crate::path_ext::ToAbsoluteExt;
use std::path::{Path, PathBuf};

pub const ENGINE_APP_NAME: &str = "VulkanEngine";
pub const ENGINE_BUILD_COMMAND: &str = "scons -j8";
pub const ENGINE_CLEAN_COMMAND: &str = "scons -j8 -c";

/// Build/clean parameters of a downstream project consuming the engine,
/// only present when the session targets one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherProject {
    pub build_command: String,
    pub clean_command: String,
    pub build_folder: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildKind {
    Test,
    Other(OtherProject),
}

/// Everything one build session needs to know. Constructed once per
/// driver invocation, read-only afterwards.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub app_name: String,
    pub executable_file_path: PathBuf,
    pub executable_name: String,
    pub deploy_folder: PathBuf,
    pub engine_build_folder: PathBuf,
    pub engine_build_command: String,
    pub engine_clean_command: String,
    pub kind: BuildKind,
}

impl BuildConfig {
    pub fn for_test_project() -> BuildConfig {
        let engine_build_folder = crate::file_manager::engine_root_dir();
        BuildConfig {
            app_name: ENGINE_APP_NAME.to_string(),
            executable_file_path: engine_build_folder.join(ENGINE_APP_NAME),
            executable_name: ENGINE_APP_NAME.to_string(),
            deploy_folder: engine_build_folder.join("deploy"),
            engine_build_folder,
            engine_build_command: ENGINE_BUILD_COMMAND.to_string(),
            engine_clean_command: ENGINE_CLEAN_COMMAND.to_string(),
            kind: BuildKind::Test,
        }
    }

    pub fn for_other_project(
        app_name: &str,
        executable_file_path: &Path,
        executable_name: &str,
        deploy_folder: &Path,
        build_command: &str,
        clean_command: &str,
        build_folder: &Path,
    ) -> Result<BuildConfig> {
        for (field, value) in [
            ("app name", app_name),
            ("executable name", executable_name),
            ("other build command", build_command),
            ("other clean command", clean_command),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Configuration(format!("The {} is empty", field)));
            }
        }
        for (field, value) in [
            ("executable file path", executable_file_path),
            ("deploy folder", deploy_folder),
            ("other build folder", build_folder),
        ] {
            if value.as_os_str().is_empty() {
                return Err(Error::Configuration(format!("The {} is empty", field)));
            }
        }
        let executable_file_path = absolute(executable_file_path, "executable file path")?;
        let deploy_folder = absolute(deploy_folder, "deploy folder")?;
        let build_folder = absolute(build_folder, "other build folder")?;
        Ok(BuildConfig {
            app_name: app_name.to_string(),
            executable_file_path,
            executable_name: executable_name.to_string(),
            deploy_folder,
            engine_build_folder: crate::file_manager::engine_root_dir(),
            engine_build_command: ENGINE_BUILD_COMMAND.to_string(),
            engine_clean_command: ENGINE_CLEAN_COMMAND.to_string(),
            kind: BuildKind::Other(OtherProject {
                build_command: build_command.to_string(),
                clean_command: clean_command.to_string(),
                build_folder,
            }),
        })
    }
}

fn absolute(path: &Path, field: &str) -> Result<PathBuf> {
    path.to_absolute().map_err(|err| {
        Error::Configuration(format!("The {} {:?} can not be resolved, {}", field, path, err))
    })
}
