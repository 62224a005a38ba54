//! Server-rendered pages. Markup is intentionally plain; the JSON endpoints
//! feed the charts and tables that the browser builds itself.

pub mod layout;
pub mod pages;

pub use layout::escape_html;
