use path_slash::PathExt;
use rs_build_core::error::{Error, Result};
use rs_build_core::executor::{CommandRunner, OutputMode};
use std::path::{Path, PathBuf};

/// Resolves the Vulkan SDK `glslc` binary under the engine root for the
/// running platform.
pub fn glslc_path(engine_root: &Path) -> Result<PathBuf> {
    let relative = if cfg!(target_os = "macos") {
        "VulkanSDKMacOS/macOS/bin/glslc"
    } else if cfg!(target_os = "linux") {
        "VulkanSDKLinux/x86_64/bin/glslc"
    } else if cfg!(target_os = "windows") {
        "VulkanSDKWindows/Bin/glslc.exe"
    } else {
        return Err(Error::MissingTool(
            "No glslc location is known for this platform".to_string(),
        ));
    };
    let path = engine_root.join(relative);
    if !path.is_file() {
        return Err(Error::MissingTool(format!(
            "glslc was not found at {:?}, install the Vulkan SDK first",
            path
        )));
    }
    Ok(path)
}

/// Compiles the vertex shader and then the fragment shader. The
/// fragment step does not run after a vertex failure.
pub fn compile_pair(
    runner: &dyn CommandRunner,
    engine_root: &Path,
    glslc: &Path,
    vertex_input: &Path,
    vertex_output: &Path,
    fragment_input: &Path,
    fragment_output: &Path,
) -> Result<()> {
    for (input, output) in [(vertex_input, vertex_output), (fragment_input, fragment_output)] {
        let command = format!(
            "{} {} -o {}",
            glslc.to_slash_lossy(),
            input.to_slash_lossy(),
            output.to_slash_lossy()
        );
        let streams = runner.run(&command, engine_root, &[], OutputMode::Capture)?;
        if !streams.stdout.is_empty() {
            log::trace!("{}", streams.stdout);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::compile::{compile_pair, glslc_path};
    use rs_build_core::error::{Error, Result};
    use rs_build_core::executor::{CommandOutput, CommandRunner, OutputMode};
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingRunner {
        commands: RefCell<Vec<String>>,
        fail_on_first: bool,
    }

    impl CommandRunner for RecordingRunner {
        fn run(
            &self,
            command: &str,
            working_dir: &Path,
            _envs: &[(String, String)],
            _output_mode: OutputMode,
        ) -> Result<CommandOutput> {
            let is_first = self.commands.borrow().is_empty();
            self.commands.borrow_mut().push(command.to_string());
            if self.fail_on_first && is_first {
                return Err(Error::ExternalCommand {
                    command: command.to_string(),
                    working_dir: working_dir.to_path_buf(),
                    status: Some(1),
                    stderr: None,
                });
            }
            Ok(CommandOutput::default())
        }
    }

    #[test]
    fn vertex_before_fragment_test() {
        let runner = RecordingRunner::default();
        compile_pair(
            &runner,
            Path::new("/engine"),
            Path::new("/sdk/bin/glslc"),
            Path::new("shaders/shader.vert"),
            Path::new("shaders/output/vert.spv"),
            Path::new("shaders/shader.frag"),
            Path::new("shaders/output/frag.spv"),
        )
        .unwrap();
        assert_eq!(
            runner.commands.borrow().clone(),
            vec![
                "/sdk/bin/glslc shaders/shader.vert -o shaders/output/vert.spv",
                "/sdk/bin/glslc shaders/shader.frag -o shaders/output/frag.spv",
            ]
        );
    }

    #[test]
    fn fragment_skipped_after_vertex_failure_test() {
        let runner = RecordingRunner {
            commands: RefCell::new(vec![]),
            fail_on_first: true,
        };
        let result = compile_pair(
            &runner,
            Path::new("/engine"),
            Path::new("/sdk/bin/glslc"),
            Path::new("shaders/shader.vert"),
            Path::new("shaders/output/vert.spv"),
            Path::new("shaders/shader.frag"),
            Path::new("shaders/output/frag.spv"),
        );
        assert!(matches!(result, Err(Error::ExternalCommand { .. })));
        assert_eq!(runner.commands.borrow().len(), 1);
    }

    #[test]
    fn missing_glslc_test() {
        let result = glslc_path(Path::new("/definitely/not/an/engine/root"));
        assert!(matches!(result, Err(Error::MissingTool(_))));
    }
}
