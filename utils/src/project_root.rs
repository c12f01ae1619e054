use std::path::PathBuf;

/// Return a [`PathBuf`] pointing to the workspace root of the immupath repository. For example, use
/// ```rust
/// # use immupath_utils::project_root::project_root;
/// # use std::path::PathBuf;
/// let fixtures = project_root().join("cli/tests/fixtures");
/// # assert_eq!(fixtures, PathBuf::from(&concat!(env!("CARGO_MANIFEST_DIR"), "/../cli/tests/fixtures")))
/// ```
///
/// Cargo doesn't provide a `CARGO_WORKSPACE_DIR` environment variable, so this is relative to the
/// manifest of this crate.
pub fn project_root() -> PathBuf {
    PathBuf::from(&concat!(env!("CARGO_MANIFEST_DIR"), "/.."))
}
