use rs_build_core::error::Result;
use rs_build_core::executor::{is_program_in_path, CommandRunner, OutputMode};
use std::path::Path;

const MACOS_VULKAN_SDK_URL: &str =
    "https://sdk.lunarg.com/sdk/download/1.2.198.1/mac/vulkansdk-macos-1.2.198.1.dmg";
const MACOS_DMG_NAME: &str = "vulkansdk-macos-1.2.198.1.dmg";
const LINUX_VULKAN_SDK_URL: &str =
    "https://sdk.lunarg.com/sdk/download/1.2.198.1/linux/vulkansdk-linux-x86_64-1.2.198.1.tar.gz";
const LINUX_TAR_NAME: &str = "vulkansdk-linux-x86_64-1.2.198.1.tar.gz";

/// One external command of the install sequence, with an optional
/// working directory relative to the engine root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: String,
    pub working_dir: Option<&'static str>,
}

impl Step {
    fn new(command: impl Into<String>, working_dir: Option<&'static str>) -> Step {
        Step {
            command: command.into(),
            working_dir,
        }
    }
}

/// Third-party library steps shared by linux and macos. The glfw steps
/// need cmake and are skipped without it, the rest still runs.
pub fn library_steps(has_cmake: bool) -> Vec<Step> {
    let mut steps = vec![
        Step::new("git submodule update --init --recursive", None),
        Step::new("mkdir -p lib", None),
    ];
    if has_cmake {
        steps.push(Step::new(
            "cmake -DBUILD_SHARED_LIBS=OFF -DCMAKE_POSITION_INDEPENDENT_CODE=ON .",
            Some("glfw"),
        ));
        steps.push(Step::new("make", Some("glfw")));
        steps.push(Step::new("mv ./src/libglfw3.a ../lib/", Some("glfw")));
    }
    steps.push(Step::new("python3 compileDeps.py PIC=ON", Some("StringToText")));
    steps.push(Step::new("make library-POC -j8", Some("StringToText")));
    steps.push(Step::new("cp -a ./lib/. ../lib/", Some("StringToText")));
    steps
}

pub fn sdk_steps(os: &str) -> Vec<Step> {
    match os {
        "macos" => {
            let volume_name = MACOS_DMG_NAME.trim_end_matches(".dmg");
            vec![
                Step::new(format!("wget {}", MACOS_VULKAN_SDK_URL), None),
                Step::new(format!("hdiutil attach {}", MACOS_DMG_NAME), None),
                Step::new(format!("cp -rf /Volumes/{}/ ./", volume_name), None),
                Step::new(format!("hdiutil detach /Volumes/{}/", volume_name), None),
                Step::new(format!("rm {}", MACOS_DMG_NAME), None),
                Step::new("open InstallVulkan.app", None),
            ]
        }
        "linux" => vec![
            Step::new(format!("wget {}", LINUX_VULKAN_SDK_URL), None),
            Step::new("mkdir -p VulkanSDKLinux", None),
            Step::new(format!("tar -xvzf {} -C ./VulkanSDKLinux", LINUX_TAR_NAME), None),
        ],
        _ => vec![],
    }
}

fn run_steps(runner: &dyn CommandRunner, engine_root: &Path, steps: &[Step]) -> Result<()> {
    for step in steps {
        let working_dir = match step.working_dir {
            Some(dir) => engine_root.join(dir),
            None => engine_root.to_path_buf(),
        };
        let streams = runner.run(&step.command, &working_dir, &[], OutputMode::Capture)?;
        if !streams.stdout.is_empty() {
            log::trace!("{}", streams.stdout);
        }
    }
    Ok(())
}

pub fn install(runner: &dyn CommandRunner, engine_root: &Path, os: &str) -> Result<()> {
    match os {
        "linux" | "macos" => {
            let has_cmake = is_program_in_path("cmake");
            if !has_cmake {
                log::warn!("cmake is needed to build glfw, skipping the glfw steps");
            }
            run_steps(runner, engine_root, &library_steps(has_cmake))?;
        }
        "windows" => {
            log::warn!("Dependency installation is unsupported on windows at this time");
            return Ok(());
        }
        _ => {}
    }
    run_steps(
        runner,
        engine_root,
        &[Step::new("mkdir -p shaders/output", None)],
    )?;
    match os {
        "macos" => {
            log::info!("Install the Vulkan SDK to ./VulkanSDKMacOS");
            run_steps(runner, engine_root, &sdk_steps(os))?;
        }
        "linux" => {
            run_steps(runner, engine_root, &sdk_steps(os))?;
        }
        _ => {
            log::warn!(
                "Automatic install of the Vulkan SDK is unsupported on this platform at this moment"
            );
        }
    }
    Ok(())
}

/// Runs the SDK environment setup script in the per-platform SDK
/// directory instead of installing anything.
pub fn setup_environment(runner: &dyn CommandRunner, engine_root: &Path, os: &str) -> Result<()> {
    let sdk_dir = if os == "macos" {
        "VulkanSDKMacOS"
    } else {
        "VulkanSDKLinux"
    };
    let streams = runner.run(
        "source setup-env.sh",
        &engine_root.join(sdk_dir),
        &[],
        OutputMode::Capture,
    )?;
    if !streams.stdout.is_empty() {
        log::trace!("{}", streams.stdout);
    }
    Ok(())
}
