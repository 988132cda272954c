//! Catalog layout constants and path helpers.
//!
//! Catalog paths are plain strings relative to the catalog repository root,
//! joined with `/` on every host.

/// Directory under the catalog root holding one sub-directory per domain.
pub const DOMAINS_DIR: &str = "domains";

/// Terminal rule-set file looked for during discovery.
pub const RULES_FILE: &str = "RULES.md";

/// Directory created in the user's project to hold the installed rules.
pub const INSTALL_DIR: &str = ".prompt-charter";

/// Synthetic option name meaning "use the current directory".
pub const CURRENT_DIR_OPTION: &str = ".";

/// Join two catalog path fragments with a single `/`.
pub fn join(base: &str, name: &str) -> String {
    let base = base.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    match (base.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{}/{}", base, name),
    }
}

/// Path of the top-level directory for `domain`.
pub fn domain_path(domain: &str) -> String {
    join(DOMAINS_DIR, domain)
}

/// Path of the rules file inside `directory`.
pub fn rules_file_path(directory: &str) -> String {
    join(directory, RULES_FILE)
}

/// Strip the leading `root/` prefix from `path`.
///
/// Paths outside `root` are returned unchanged.
pub fn strip_root<'a>(root: &str, path: &'a str) -> &'a str {
    path.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(path)
}
