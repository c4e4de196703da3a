//! Small HTML and URL helpers shared by the renderers

mod html;
mod url;

pub use html::*;
pub use url::*;
