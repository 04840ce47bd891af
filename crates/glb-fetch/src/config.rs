//! Locations of the hosted model file.

use std::borrow::Cow;

/// Where to fetch the model file from.
///
/// Both URLs point at the same file: one through a CDN, one at the
/// raw GitHub source it mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbConfig {
    /// CDN-hosted path, tried first.
    pub cdn_url: Cow<'static, str>,
    /// Raw-source-hosted path for the same file.
    pub github_raw_url: Cow<'static, str>,
}

/// The hosted character model.
pub const GLB_CONFIG: GlbConfig = GlbConfig {
    cdn_url: Cow::Borrowed("https://cdn.jsdelivr.net/gh/67950050-code/GLB@main/character.glb"),
    github_raw_url: Cow::Borrowed(
        "https://raw.githubusercontent.com/67950050-code/GLB/main/character.glb",
    ),
};

impl GlbConfig {
    /// Create a config pointing at other locations.
    #[must_use]
    pub fn new(
        cdn_url: impl Into<Cow<'static, str>>,
        github_raw_url: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            cdn_url: cdn_url.into(),
            github_raw_url: github_raw_url.into(),
        }
    }
}

impl Default for GlbConfig {
    fn default() -> Self {
        GLB_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls_name_same_file() {
        let config = GlbConfig::default();
        assert!(config.cdn_url.starts_with("https://"));
        assert!(config.github_raw_url.starts_with("https://"));
        assert!(config.cdn_url.ends_with("/character.glb"));
        assert!(config.github_raw_url.ends_with("/character.glb"));
    }

    #[test]
    fn test_custom_config() {
        let config = GlbConfig::new(
            "http://localhost/a.glb".to_string(),
            "http://localhost/b.glb",
        );
        assert_eq!(config.cdn_url, "http://localhost/a.glb");
        assert_eq!(config.github_raw_url, "http://localhost/b.glb");
    }
}
