//! Platform path helpers: the data directory and `~` expansion.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR: &str = "folio";

/// Returns the folio data directory.
///
/// Resolves to `dirs::data_dir()/folio` (`~/.local/share/folio` on Linux,
/// `~/Library/Application Support/folio` on macOS). Falls back to `./.folio`
/// when the platform reports no data directory.
///
/// The interaction store (`interactions.json`) and the trace file live here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".folio"), |dir| dir.join(APP_DIR))
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, and every path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use folio::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde("~/posts.json"), home.join("posts.json"));
///     assert_eq!(expand_tilde("~"), home);
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_in_app_dir() {
        let dir = get_data_dir();
        assert!(dir.ends_with("folio") || dir.ends_with(".folio"));
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("posts/~draft.json"), PathBuf::from("posts/~draft.json"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }
}
