use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{errors::Error, generator::ModelFile};

/// Writes each model into `dir`, creating it when missing. Files written before a failure are left
/// in place.
pub fn write_models(dir: &Path, files: &[ModelFile]) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.content).map_err(|e| Error::io(&path, e))?;
        info!("{} generated.", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_models() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("model");
        let files = vec![
            ModelFile {
                file_name: "user.js".to_string(),
                content: "// user".to_string(),
            },
            ModelFile {
                file_name: "post.js".to_string(),
                content: "// post".to_string(),
            },
        ];
        let written = write_models(&out, &files).unwrap();
        assert_eq!(written, vec![out.join("user.js"), out.join("post.js")]);
        assert_eq!(fs::read_to_string(out.join("post.js")).unwrap(), "// post");
    }

    #[test]
    fn test_write_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("model");
        fs::write(&blocker, "not a directory").unwrap();
        match write_models(&blocker, &[]) {
            Err(Error::Io { path, .. }) => assert_eq!(path, blocker),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
