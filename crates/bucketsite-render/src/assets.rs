//! Static assets written next to the generated pages.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{EmitError, EmitResult};

/// Output subdirectory holding static assets.
pub const ASSETS_DIR: &str = "assets";

/// File name of the built-in stylesheet.
pub const STYLESHEET_NAME: &str = "style.css";

const STYLESHEET: &str = include_str!("../assets/style.css");

/// Write the built-in stylesheet and copy `extra` (if any) into
/// `<output>/assets`, preserving directory structure. Existing files are
/// overwritten. Returns the number of files written.
///
/// Blocking; run it on a blocking thread.
pub fn install_assets(output: &Path, extra: Option<&Path>) -> EmitResult<usize> {
    let target = output.join(ASSETS_DIR);
    create_dir(&target)?;

    let stylesheet = target.join(STYLESHEET_NAME);
    fs::write(&stylesheet, STYLESHEET).map_err(|source| EmitError::Write {
        path: stylesheet.clone(),
        source,
    })?;

    let copied = match extra {
        Some(source) => copy_dir(source, &target)?,
        None => 0,
    };

    debug!(target = %target.display(), copied, "installed static assets");
    Ok(copied + 1)
}

/// Files [`install_assets`] would write, relative to the output directory.
///
/// Blocking; run it on a blocking thread.
pub fn asset_files(extra: Option<&Path>) -> EmitResult<Vec<PathBuf>> {
    let target = Path::new(ASSETS_DIR);
    let mut files = vec![target.join(STYLESHEET_NAME)];
    if let Some(from) = extra {
        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| EmitError::OutsideRoot(entry.path().to_path_buf()))?;
            files.push(target.join(relative));
        }
    }
    Ok(files)
}

/// Recursively copy the contents of `from` into `to`.
pub fn copy_dir(from: &Path, to: &Path) -> EmitResult<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|_| EmitError::OutsideRoot(entry.path().to_path_buf()))?;
        let destination: PathBuf = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&destination)?;
        } else {
            fs::copy(entry.path(), &destination).map_err(|source| EmitError::Copy {
                from: entry.path().to_path_buf(),
                to: destination.clone(),
                source,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn create_dir(path: &Path) -> EmitResult<()> {
    fs::create_dir_all(path).map_err(|source| EmitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_write_builtin_stylesheet() {
        let out = tempfile::tempdir().expect("tempdir");
        let written = install_assets(out.path(), None).expect("install");
        assert_eq!(written, 1);

        let css = fs::read_to_string(out.path().join("assets/style.css")).expect("css");
        assert!(css.contains("table.listing"));
    }

    #[test]
    fn test_should_copy_nested_assets() {
        let src = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(src.path().join("img/icons")).expect("mkdir");
        fs::write(src.path().join("favicon.ico"), b"ico").expect("write");
        fs::write(src.path().join("img/icons/folder.svg"), b"<svg/>").expect("write");

        let out = tempfile::tempdir().expect("tempdir");
        let written = install_assets(out.path(), Some(src.path())).expect("install");
        assert_eq!(written, 3);
        assert_eq!(
            fs::read(out.path().join("assets/img/icons/folder.svg")).expect("copied"),
            b"<svg/>"
        );

        // Running again over existing output is fine.
        install_assets(out.path(), Some(src.path())).expect("second install");
    }

    #[test]
    fn test_should_list_files_to_install() {
        let src = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(src.path().join("img")).expect("mkdir");
        fs::write(src.path().join("img/logo.svg"), b"<svg/>").expect("write");

        let mut files = asset_files(Some(src.path())).expect("walk");
        files.sort();
        assert_eq!(
            files,
            vec![
                PathBuf::from("assets/img/logo.svg"),
                PathBuf::from("assets/style.css"),
            ]
        );
        assert_eq!(
            asset_files(None).expect("builtin only"),
            vec![PathBuf::from("assets/style.css")]
        );
    }

    #[test]
    fn test_should_fail_on_missing_source() {
        let out = tempfile::tempdir().expect("tempdir");
        let missing = out.path().join("nope");
        assert!(matches!(
            install_assets(out.path(), Some(&missing)),
            Err(EmitError::Walk(_))
        ));
    }
}
