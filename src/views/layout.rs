use actix_web::{http::header::ContentType, HttpResponse, HttpResponseBuilder};

/// Escape text for safe inclusion in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const NAV: &str = r#"<nav>
  <a href="/">Home</a>
  <a href="/addMatches">Add match</a>
  <a href="/matchHistory">Match history</a>
  <a href="/stats">Stats</a>
  <a href="/winRate">Win rate</a>
  <a href="/playtime">Play time</a>
  <a href="/profile">Profile</a>
  <a href="/logout">Log out</a>
</nav>"#;

/// Wrap `body` in the shared document shell. `with_nav` is off for the
/// anonymous pages.
pub fn page(title: &str, body: &str, with_nav: bool) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
{nav}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
        nav = if with_nav { NAV } else { "" },
        body = body,
    )
}

pub fn flash_block(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(r#"<p class="flash">{}</p>"#, escape_html(message)),
        None => String::new(),
    }
}

pub fn html(mut builder: HttpResponseBuilder, document: String) -> HttpResponse {
    builder.content_type(ContentType::html()).body(document)
}
