use std::path::{Path, PathBuf};

/// The directory containing the build driver itself. Every build
/// operation is rooted here, it is never user-supplied.
pub fn engine_root_dir() -> PathBuf {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    dunce::canonicalize(&root).unwrap_or(root)
}

pub fn engine_deploy_dir() -> PathBuf {
    engine_root_dir().join("deploy")
}
