//! Static assets served by the REST server, embedded at compile time.

pub const STYLE_CSS: &str = include_str!("../assets/style.css");
pub const CONTACT_JS: &str = include_str!("../assets/contact.js");
