//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join a base path and a file name into a relative URL
///
/// # Examples
/// ```ignore
/// asset_url("images/", "my diagram.png") // -> "images/my%20diagram.png"
/// ```
pub fn asset_url(base: &str, file_name: &str) -> String {
    let base = base.trim_end_matches('/');
    let name = utf8_percent_encode(file_name, SEGMENT).to_string();

    if base.is_empty() {
        name
    } else {
        format!("{}/{}", base, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("images", "a.png"), "images/a.png");
        assert_eq!(asset_url("images/", "a.png"), "images/a.png");
        assert_eq!(asset_url("", "a.png"), "a.png");
    }

    #[test]
    fn test_asset_url_encodes_name() {
        assert_eq!(
            asset_url("/static/img", "my diagram #1.jpg"),
            "/static/img/my%20diagram%20%231.jpg"
        );
    }
}
