//! Server-rendered HTML for the site.
//!
//! Pages are assembled from plain strings. Any text that did not come from
//! `services::content` goes through `html_escape`: `encode_text` for element
//! content, `encode_double_quoted_attribute` for `value="..."` and `href="..."`.

pub mod contact;
pub mod home;
pub mod services;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::services::content::{self, NAV_ITEMS, SOCIAL_LINKS};

const STYLESHEET: &str = include_str!("../../static/site.css");

/// Wrap page content in the shared header and footer.
pub fn layout(title: &str, current_path: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {business}</title>
<style>{css}</style>
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        title = encode_text(title),
        business = content::BUSINESS_NAME,
        css = STYLESHEET,
        header = header(current_path),
        body = body,
        footer = footer(),
    )
}

fn header(current_path: &str) -> String {
    let nav: String = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if item.path == current_path { " class=\"active\"" } else { "" };
            format!(r#"<a href="{}"{}>{}</a>"#, item.path, class, item.name)
        })
        .collect();

    // The checkbox toggles the mobile menu without script.
    format!(
        r#"<header class="site-header">
<div class="container header-row">
<a class="brand" href="/">{business}</a>
<input type="checkbox" id="menu-toggle" class="menu-toggle" aria-label="Toggle menu">
<label for="menu-toggle" class="menu-button">Menu</label>
<nav class="site-nav">{nav}
<a class="nav-call" href="{tel}">Call {phone}</a>
<a class="nav-chat" href="{chat}" target="_blank" rel="noopener noreferrer">Get Quote on WhatsApp</a>
</nav>
</div>
</header>"#,
        business = content::BUSINESS_NAME,
        nav = nav,
        tel = content::tel_link(),
        phone = content::PHONE_DISPLAY,
        chat = encode_double_quoted_attribute(&content::whatsapp_link(content::QUOTE_CHAT_MESSAGE)),
    )
}

fn footer() -> String {
    let social: String = SOCIAL_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" aria-label="{label}">{label}</a>"#,
                link.url,
                label = link.label
            )
        })
        .collect();

    let quick_links: String = NAV_ITEMS
        .iter()
        .map(|item| format!(r#"<li><a href="{}">{}</a></li>"#, item.path, item.name))
        .collect();

    format!(
        r#"<footer class="site-footer">
<div class="container footer-grid">
<div>
<h3>{business}</h3>
<p>Professional air duct cleaning for healthier homes and businesses nationwide.</p>
<div class="social">{social}</div>
</div>
<div>
<h4>Quick Links</h4>
<ul>{quick_links}</ul>
</div>
<div>
<h4>Contact</h4>
<ul>
<li><a href="{tel}">{phone}</a></li>
<li><a href="{mailto}">{email}</a></li>
<li>Serving All 50 States</li>
</ul>
</div>
</div>
<p class="container copyright">NADCA Certified &middot; Licensed &amp; Insured</p>
</footer>"#,
        business = content::BUSINESS_NAME,
        social = social,
        quick_links = quick_links,
        tel = content::tel_link(),
        phone = content::PHONE_DISPLAY,
        mailto = content::mailto_link(),
        email = content::EMAIL,
    )
}

/// Page shown for unknown paths.
pub fn not_found_page() -> String {
    layout(
        "Page Not Found",
        "",
        r#"<section class="hero small"><div class="container center">
<h1>Page Not Found</h1>
<p>The page you are looking for does not exist.</p>
<a class="button" href="/">Back to Home</a>
</div></section>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        let html = layout(r#"<b>"Tom" & Jerry</b>"#, "/", "");
        assert!(html.contains(r#"<title>&lt;b&gt;"Tom" &amp; Jerry&lt;/b&gt; | "#));

        // Attribute values must not be able to close their quotes.
        assert_eq!(
            encode_double_quoted_attribute(r#"x" onmouseover="y"#),
            "x&quot; onmouseover=&quot;y"
        );
    }

    #[test]
    fn test_layout_marks_current_nav_item() {
        let html = layout("Services", "/services", "<p>body</p>");
        assert!(html.contains(r#"<a href="/services" class="active">Services</a>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("tel:+15208428930"));
        assert!(html.contains("https://www.tiktok.com/@freshair_ductcleaning"));
    }
}
