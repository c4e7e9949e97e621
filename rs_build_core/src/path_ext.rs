use path_slash::PathBufExt;
use std::path::{Path, PathBuf};

pub trait ToAbsoluteExt {
    fn to_absolute(&self) -> std::io::Result<PathBuf>;
}

impl ToAbsoluteExt for Path {
    fn to_absolute(&self) -> std::io::Result<PathBuf> {
        // Deploy and output folders may not exist yet, so canonicalization
        // can not be the only path taken here.
        if let Ok(path) = dunce::canonicalize(self) {
            return Ok(Path::new(&path.to_slash_lossy().to_string()).to_path_buf());
        }
        let absolute = if self.is_absolute() {
            self.to_path_buf()
        } else {
            std::env::current_dir()?.join(self)
        };
        Ok(Path::new(&absolute.to_slash_lossy().to_string()).to_path_buf())
    }
}

impl ToAbsoluteExt for PathBuf {
    fn to_absolute(&self) -> std::io::Result<PathBuf> {
        self.as_path().to_absolute()
    }
}
