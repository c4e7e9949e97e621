use anyhow::Context;
use rs_build_core::config::BuildConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk description of an other project, the parameterized
/// replacement for the interactive other-project questions.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectDescription {
    pub app_name: String,
    pub executable_file_path: PathBuf,
    pub executable_name: String,
    pub deploy_folder: PathBuf,
    pub build_command: String,
    pub clean_command: String,
    pub build_folder: PathBuf,
}

impl ProjectDescription {
    pub fn from_file(path: &Path) -> anyhow::Result<ProjectDescription> {
        let file = std::fs::File::open(path)
            .context(format!("Can not open project file {:?}", path))?;
        let reader = std::io::BufReader::new(file);
        let description = serde_json::de::from_reader(reader)
            .context(format!("Can not parse project file {:?}", path))?;
        Ok(description)
    }

    pub fn to_config(&self) -> rs_build_core::error::Result<BuildConfig> {
        BuildConfig::for_other_project(
            &self.app_name,
            &self.executable_file_path,
            &self.executable_name,
            &self.deploy_folder,
            &self.build_command,
            &self.clean_command,
            &self.build_folder,
        )
    }
}

#[cfg(test)]
mod test {
    use crate::project::ProjectDescription;
    use rs_build_core::config::BuildKind;

    #[test]
    fn description_to_config_test() {
        let contents = r#"{
    "app_name": "Game",
    "executable_file_path": "./bin/Game",
    "executable_name": "Game",
    "deploy_folder": "./out",
    "build_command": "make",
    "clean_command": "make clean",
    "build_folder": "./ext"
}"#;
        let description: ProjectDescription = serde_json::from_str(contents).unwrap();
        let config = description.to_config().unwrap();
        assert!(config.executable_file_path.is_absolute());
        let BuildKind::Other(other) = &config.kind else {
            panic!("expected an other project configuration");
        };
        assert_eq!(other.build_command, "make");
    }

    #[test]
    fn empty_field_is_rejected_test() {
        let contents = r#"{
    "app_name": "",
    "executable_file_path": "./bin/Game",
    "executable_name": "Game",
    "deploy_folder": "./out",
    "build_command": "make",
    "clean_command": "make clean",
    "build_folder": "./ext"
}"#;
        let description: ProjectDescription = serde_json::from_str(contents).unwrap();
        assert!(description.to_config().is_err());
    }
}
