use crate::config::{BuildConfig, BuildKind};
use crate::error::Result;
use crate::executor::{CommandRunner, OutputMode};
use crate::operation::Operation;

/// Subordinate process started for the `Dependencies` operation,
/// resolved through `PATH` like every other external tool.
pub const DEPS_INSTALL_COMMAND: &str = "deps-installer";
pub const COMPILE_SHADERS_COMMAND: &str = "sh scripts/compileShaders.sh";
pub const POST_COMPILE_COMMAND: &str = "sh scripts/postCompileCommands.sh";
const CLEAR_DEPLOY_COMMAND: &str = "rm -rf deploy/*";

/// Runs build operations against an immutable configuration, strictly
/// sequentially. Each external process fully completes before the next
/// one starts, and a failure stops the rest of the selection.
pub struct Dispatcher<'a> {
    config: &'a BuildConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a BuildConfig, runner: &'a dyn CommandRunner) -> Dispatcher<'a> {
        Dispatcher { config, runner }
    }

    pub fn dispatch(&self, operations: &[Operation]) -> Result<()> {
        for operation in operations {
            self.run_operation(*operation)?;
        }
        Ok(())
    }

    pub fn run_operation(&self, operation: Operation) -> Result<()> {
        match operation {
            Operation::Clean => self.clean(),
            Operation::Build => self.build(),
            Operation::Dependencies => self.dependencies(),
            Operation::Shaders => self.shaders(),
            Operation::PostCompile => self.post_compile(),
        }
    }

    fn clean(&self) -> Result<()> {
        log::info!("Cleaning main project ...");
        self.run_in_engine_folder(&self.config.engine_clean_command)?;
        self.run_in_engine_folder(CLEAR_DEPLOY_COMMAND)?;
        if let BuildKind::Other(other) = &self.config.kind {
            self.runner.run(
                &other.clean_command,
                &other.build_folder,
                &[],
                OutputMode::Inherit,
            )?;
        }
        log::info!("Done cleaning");
        Ok(())
    }

    fn build(&self) -> Result<()> {
        log::info!("Building main project ...");
        self.run_in_engine_folder(&self.config.engine_build_command)?;
        if let BuildKind::Other(other) = &self.config.kind {
            self.runner.run(
                &other.build_command,
                &other.build_folder,
                &[],
                OutputMode::Inherit,
            )?;
        }
        log::info!("Done building main project");
        Ok(())
    }

    fn dependencies(&self) -> Result<()> {
        log::info!("Building main project dependencies ...");
        self.run_in_engine_folder(DEPS_INSTALL_COMMAND)?;
        log::info!("Done building main project dependencies");
        Ok(())
    }

    fn shaders(&self) -> Result<()> {
        log::info!("Compiling shaders ...");
        self.run_in_engine_folder(COMPILE_SHADERS_COMMAND)?;
        log::info!("Done compiling shaders");
        Ok(())
    }

    fn post_compile(&self) -> Result<()> {
        log::info!("Running post-compile scripts ...");
        log::info!(
            "Please note that install_name_tool will likely give errors on subsequent calls to this script. They are non-fatal and can be safely ignored."
        );
        let envs = package_environment(self.config);
        self.runner.run(
            POST_COMPILE_COMMAND,
            &self.config.engine_build_folder,
            &envs,
            OutputMode::Inherit,
        )?;
        log::info!("Done running post-compile scripts");
        Ok(())
    }

    fn run_in_engine_folder(&self, command: &str) -> Result<()> {
        self.runner.run(
            command,
            &self.config.engine_build_folder,
            &[],
            OutputMode::Inherit,
        )?;
        Ok(())
    }
}

/// Environment bindings exported to the packaging script, scoped to that
/// subprocess only.
fn package_environment(config: &BuildConfig) -> Vec<(String, String)> {
    vec![
        ("APP_NAME".to_string(), config.app_name.clone()),
        (
            "EXECUTABLE_FILE_PATH".to_string(),
            config.executable_file_path.to_string_lossy().to_string(),
        ),
        (
            "EXECUTABLE_NAME".to_string(),
            config.executable_name.clone(),
        ),
        (
            "DEPLOY_FOLDER".to_string(),
            config.deploy_folder.to_string_lossy().to_string(),
        ),
    ]
}

#[cfg(test)]
mod test {
    use crate::config::BuildConfig;
    use crate::dispatcher::Dispatcher;
    use crate::error::{Error, Result};
    use crate::executor::{CommandOutput, CommandRunner, OutputMode};
    use crate::operation::parse_selection;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone)]
    struct RecordedRun {
        command: String,
        working_dir: PathBuf,
        envs: Vec<(String, String)>,
    }

    #[derive(Default)]
    struct RecordingRunner {
        runs: RefCell<Vec<RecordedRun>>,
        fail_on: Option<String>,
    }

    impl RecordingRunner {
        fn failing_on(command: &str) -> RecordingRunner {
            RecordingRunner {
                runs: RefCell::new(vec![]),
                fail_on: Some(command.to_string()),
            }
        }

        fn commands(&self) -> Vec<String> {
            self.runs.borrow().iter().map(|run| run.command.clone()).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(
            &self,
            command: &str,
            working_dir: &Path,
            envs: &[(String, String)],
            _output_mode: OutputMode,
        ) -> Result<CommandOutput> {
            self.runs.borrow_mut().push(RecordedRun {
                command: command.to_string(),
                working_dir: working_dir.to_path_buf(),
                envs: envs.to_vec(),
            });
            if self.fail_on.as_deref() == Some(command) {
                return Err(Error::ExternalCommand {
                    command: command.to_string(),
                    working_dir: working_dir.to_path_buf(),
                    status: Some(2),
                    stderr: None,
                });
            }
            Ok(CommandOutput::default())
        }
    }

    fn other_project_config() -> BuildConfig {
        BuildConfig::for_other_project(
            "Game",
            Path::new("./bin/Game"),
            "Game",
            Path::new("./out"),
            "make",
            "make clean",
            Path::new("./ext"),
        )
        .unwrap()
    }

    #[test]
    fn clean_test_project_test() {
        let config = BuildConfig::for_test_project();
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(&config, &runner);
        dispatcher.dispatch(&parse_selection("C").unwrap()).unwrap();
        assert_eq!(runner.commands(), vec!["scons -j8 -c", "rm -rf deploy/*"]);
        for run in runner.runs.borrow().iter() {
            assert_eq!(run.working_dir, config.engine_build_folder);
        }
    }

    #[test]
    fn full_sequence_test() {
        let config = BuildConfig::for_test_project();
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(&config, &runner);
        dispatcher.dispatch(&parse_selection("AB").unwrap()).unwrap();
        assert_eq!(
            runner.commands(),
            vec![
                "scons -j8 -c",
                "rm -rf deploy/*",
                "deps-installer",
                "scons -j8",
                "sh scripts/compileShaders.sh",
                "sh scripts/postCompileCommands.sh",
            ]
        );
    }

    #[test]
    fn other_project_build_test() {
        let config = other_project_config();
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(&config, &runner);
        dispatcher.dispatch(&parse_selection("B").unwrap()).unwrap();
        let runs = runner.runs.borrow();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].command, "scons -j8");
        assert_eq!(runs[0].working_dir, config.engine_build_folder);
        assert_eq!(runs[1].command, "make");
        assert!(runs[1].working_dir.is_absolute());
        assert!(runs[1].working_dir.ends_with("ext"));
    }

    #[test]
    fn other_project_clean_test() {
        let config = other_project_config();
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(&config, &runner);
        dispatcher.dispatch(&parse_selection("C").unwrap()).unwrap();
        assert_eq!(
            runner.commands(),
            vec!["scons -j8 -c", "rm -rf deploy/*", "make clean"]
        );
    }

    #[test]
    fn repeated_codes_run_twice_test() {
        let config = BuildConfig::for_test_project();
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(&config, &runner);
        dispatcher.dispatch(&parse_selection("BB").unwrap()).unwrap();
        assert_eq!(runner.commands(), vec!["scons -j8", "scons -j8"]);
    }

    #[test]
    fn package_environment_test() {
        let config = other_project_config();
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(&config, &runner);
        dispatcher.dispatch(&parse_selection("P").unwrap()).unwrap();
        let runs = runner.runs.borrow();
        assert_eq!(runs.len(), 1);
        let envs = &runs[0].envs;
        assert_eq!(envs.len(), 4);
        assert_eq!(envs[0], ("APP_NAME".to_string(), "Game".to_string()));
        assert_eq!(envs[2], ("EXECUTABLE_NAME".to_string(), "Game".to_string()));
        assert!(envs[1].1.ends_with("bin/Game"));
        assert!(envs[3].1.ends_with("out"));
    }

    #[test]
    fn failure_halts_selection_test() {
        let config = BuildConfig::for_test_project();
        let runner = RecordingRunner::failing_on("scons -j8");
        let dispatcher = Dispatcher::new(&config, &runner);
        let result = dispatcher.dispatch(&parse_selection("BS").unwrap());
        assert!(matches!(result, Err(Error::ExternalCommand { .. })));
        assert_eq!(runner.commands(), vec!["scons -j8"]);
    }
}
