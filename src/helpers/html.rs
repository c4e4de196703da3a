//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag("images/diagram.png", "Transport Layers") // -> <img src="images/diagram.png" alt="Transport Layers">
/// ```
pub fn image_tag(src: &str, alt: &str) -> String {
    format!(r#"<img src="{}" alt="{}">"#, src, html_escape(alt))
}

/// Wrap a stylesheet in a `<style>` element
pub fn style_tag(css: &str) -> String {
    format!("<style>\n{}\n</style>", css.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_image_tag_escapes_alt() {
        assert_eq!(
            image_tag("images/a.png", "A \"quoted\" topic"),
            r#"<img src="images/a.png" alt="A &quot;quoted&quot; topic">"#
        );
    }

    #[test]
    fn test_style_tag() {
        assert_eq!(style_tag("p { color: red; }\n"), "<style>\np { color: red; }\n</style>");
    }
}
