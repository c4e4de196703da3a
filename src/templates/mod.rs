//! Built-in resources embedded in the binary
//!
//! Fallback articles, the post stylesheet, the references block and the
//! starter files written by `autopost init`.

/// Fallback when the plain generator script is absent
pub const GENERATOR_MISSING: &str = include_str!("fallback/generator_missing.md");
/// Fallback when the plain generator fails
pub const GENERATOR_FAILED: &str = include_str!("fallback/generator_failed.md");
/// Fallback when the enhanced generator fails
pub const ENHANCED_FAILED: &str = include_str!("fallback/enhanced_failed.md");
/// Fallback when the scraper fails
pub const SCRAPER_FAILED: &str = include_str!("fallback/scraper_failed.md");

/// Inline stylesheet appended to every fragment
pub const POST_STYLESHEET: &str = include_str!("post.css");

/// Static references block appended to every fragment
pub const REFERENCES: &str = include_str!("references.html");

/// Starter home page
pub const INDEX_HTML: &str = include_str!("index.html");

/// Starter configuration
pub const CONFIG_YML: &str = include_str!("config.yml");

/// Substitute `{{ key }}` placeholders
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{ {} }}}}", key), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = fill("{{ a }}-{{ b }}-{{ a }}", &[("a", "1"), ("b", "2")]);
        assert_eq!(out, "1-2-1");
    }

    #[test]
    fn test_fallbacks_carry_time_placeholders() {
        for template in [GENERATOR_MISSING, GENERATOR_FAILED, ENHANCED_FAILED, SCRAPER_FAILED] {
            assert!(template.contains("{{ date }}"));
            assert!(template.contains("{{ time }}"));
        }
    }

    #[test]
    fn test_index_has_marker_line() {
        assert!(INDEX_HTML.lines().any(|l| l.trim() == "</header>"));
    }
}
