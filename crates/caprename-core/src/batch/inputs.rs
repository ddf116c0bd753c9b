//! Input collection for batch runs.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as images when expanding a directory.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Expands `inputs` (files and/or directories) into an ordered list of
/// image files.
///
/// Files are kept in the order given; directory contents are sorted by
/// path so batch order, and therefore suffix assignment, is reproducible
/// across runs. Non-image files inside directories are skipped; explicitly
/// listed files are taken as-is.
pub fn collect_image_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries = Vec::new();
            let dir = fs::read_dir(input)
                .with_context(|| format!("failed to read directory {}", input.display()))?;
            for entry in dir {
                match entry {
                    Ok(e) => {
                        let path = e.path();
                        if path.is_file() && has_image_extension(&path) {
                            entries.push(path);
                        }
                    }
                    // An entry that cannot be read would otherwise vanish
                    // from the batch without a trace.
                    Err(e) => tracing::warn!(
                        dir = %input.display(),
                        error = %e,
                        "skipping unreadable directory entry"
                    ),
                }
            }
            entries.sort();
            files.extend(entries);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            anyhow::bail!("input not found: {}", input.display());
        }
    }
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn directory_expands_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.JPEG"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = collect_image_files(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png", "c.JPEG"]);
    }

    #[test]
    fn explicit_files_keep_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.png");
        let a = dir.path().join("a.png");
        File::create(&b).unwrap();
        File::create(&a).unwrap();

        let files = collect_image_files(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(files, [b, a]);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = collect_image_files(&[PathBuf::from("/no/such/file.png")]).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
