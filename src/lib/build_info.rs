/// Commit the bundle was built from, or `unknown` outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("STUDYBUDDY_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
