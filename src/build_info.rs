//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("ARENA_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("ARENA_BUILD_DATE");

/// Version line printed by `--version`.
pub fn version_string() -> String {
    format!(
        "creature-arena {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash, or "unknown" outside a git checkout
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_string_mentions_build() {
        let version = version_string();
        assert!(version.starts_with("creature-arena "));
        assert!(version.contains(BUILD_DATE));
        assert!(version.contains(BUILD_COMMIT));
    }
}
