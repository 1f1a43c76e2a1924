use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Build the helper script that copies one directory from the drive back onto
/// the machine.
///
/// The script is meant to be run from inside the per-host backup directory on
/// the drive, so the copy source is relative while the destination is the
/// absolute original location. Returns `None` when the restore path does not
/// sit below the source.
pub fn restore_script(quick_restore_path: &Path, source: &Path) -> Option<String> {
    let relative = quick_restore_path.strip_prefix(source).ok()?;
    let source_name = source.file_name()?;
    Some(format!(
        "#!/bin/bash\nset -euxo pipefail\nrsync -avc --delete {}/{} {}\n",
        Path::new(source_name).display(),
        relative.display(),
        source.display()
    ))
}

/// Script filename for a quick restore path, addressed by its path relative
/// to the source
pub fn restore_script_path(backup_dir: &Path, relative: &Path) -> PathBuf {
    backup_dir.join(format!("restore_{}.sh", relative.display()))
}

/// Write a script and mark it executable
pub fn write_restore_script(path: &Path, body: &str) -> io::Result<()> {
    fs::write(path, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}
