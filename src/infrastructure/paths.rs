//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`. User
//! supplied paths (`catalog_file`, `theme_file`) are written the way they look
//! on the host and mapped here.

use std::path::{Path, PathBuf};

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the directory holding propview's trace files.
///
/// Resolves to `~/.local/share/zellij/propview` when Zellij was started from
/// the home directory, since `/host` follows the focused terminal's cwd.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    Path::new(HOST_ROOT).join(".local/share/zellij").join("propview")
}

/// Maps a host path to its sandbox location.
///
/// `~` and `~/...` map under `/host`; relative paths are resolved against
/// `/host`; absolute paths are kept.
///
/// ```
/// use propview::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/listings.json"), PathBuf::from("/host/listings.json"));
/// assert_eq!(expand_tilde("data/listings.json"), PathBuf::from("/host/data/listings.json"));
/// assert_eq!(expand_tilde("/srv/listings.json"), PathBuf::from("/srv/listings.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return PathBuf::from(HOST_ROOT);
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Path::new(HOST_ROOT).join(rest);
    }

    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(HOST_ROOT).join(path)
    }
}

/// Removes the `/host` prefix so paths read as they do on the host.
#[must_use]
pub fn strip_host_prefix(path: &Path) -> String {
    let display = path.display().to_string();
    match display.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_root() {
        assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
        assert_eq!(expand_tilde("~/a/b.json"), PathBuf::from("/host/a/b.json"));
    }

    #[test]
    fn host_prefix_is_shown_as_home() {
        assert_eq!(strip_host_prefix(Path::new("/host/a.json")), "~/a.json");
        assert_eq!(strip_host_prefix(Path::new("/host")), "~");
        assert_eq!(strip_host_prefix(Path::new("/hostile/a.json")), "/hostile/a.json");
        assert_eq!(strip_host_prefix(Path::new("/srv/a.json")), "/srv/a.json");
    }

    #[test]
    fn data_dir_is_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/propview")
        );
    }
}
