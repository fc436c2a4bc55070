//! Minimal HTML page shell.
//!
//! Markup is deliberately plain; what matters is which contracts it
//! consumes: links come from `resolve`, copy from the translator, contact
//! details and colors from the configuration snapshot.

use std::fmt::Write as _;

use crate::http::context::PageContext;
use crate::i18n::Locale;
use crate::routing::RouteKey;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full page for `ctx.route`, or the not-found page when it has none.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let (title, body) = match ctx.route {
        Some(key) => (ctx.t(&format!("pages.{}", key.name()), "title"), page_body(ctx, key)),
        None => (ctx.t("not_found", "title"), not_found_body(ctx)),
    };

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | {site}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <meta name=\"keywords\" content=\"{keywords}\">\n",
        lang = ctx.locale.html_lang(),
        title = escape(&title),
        site = escape(&ctx.config.meta.title),
        description = escape(&ctx.config.meta.description),
        keywords = escape(&ctx.config.meta.keywords),
    );
    if ctx.route.is_some() {
        for locale in Locale::ALL {
            let _ = writeln!(
                html,
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                locale.html_lang(),
                ctx.link_in(locale)
            );
        }
    }
    let _ = write!(html, "<style>{}</style>\n</head>\n<body>\n", ctx.theme_css);

    html.push_str(&header(ctx));
    let _ = write!(html, "<main>\n<h1>{}</h1>\n{}</main>\n", escape(&title), body);
    html.push_str(&footer(ctx));
    html.push_str("</body>\n</html>\n");
    html
}

fn header(ctx: &PageContext<'_>) -> String {
    let mut out = String::from("<header>\n<nav>\n");
    for key in RouteKey::ALL {
        let current = if ctx.route == Some(key) { " aria-current=\"page\"" } else { "" };
        let _ = writeln!(
            out,
            "<a href=\"{}\"{}>{}</a>",
            ctx.link(key),
            current,
            escape(&ctx.t("nav", key.name()))
        );
    }
    let other = ctx.locale.alternate();
    let _ = writeln!(
        out,
        "<a class=\"lang-switch\" hreflang=\"{}\" href=\"{}\">{}</a>",
        other.html_lang(),
        ctx.link_in(other),
        escape(&ctx.t("language", "switch"))
    );
    out.push_str("</nav>\n</header>\n");
    out
}

fn page_body(ctx: &PageContext<'_>, key: RouteKey) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<p>{}</p>",
        escape(&ctx.t(&format!("pages.{}", key.name()), "intro"))
    );
    if key == RouteKey::Contact {
        out.push_str(&contact_block(ctx));
    }
    out
}

fn not_found_body(ctx: &PageContext<'_>) -> String {
    format!(
        "<p><a href=\"{}\">{}</a></p>\n",
        ctx.link(RouteKey::Home),
        escape(&ctx.t("not_found", "back"))
    )
}

fn contact_block(ctx: &PageContext<'_>) -> String {
    let contact = &ctx.config.contact;
    let mut out = String::from("<address>\n");
    let _ = writeln!(
        out,
        "<p>{}: {}</p>",
        escape(&ctx.t("contact", "address")),
        escape(&contact.address)
    );
    for (label, number, href) in [
        ("phone", &contact.phone, contact.phone_href()),
        ("mobile", &contact.mobile, contact.mobile_href()),
    ] {
        if let Some(href) = href {
            let _ = writeln!(
                out,
                "<p>{}: <a href=\"{}\">{}</a></p>",
                escape(&ctx.t("contact", label)),
                escape(&href),
                escape(number)
            );
        }
    }
    let _ = writeln!(
        out,
        "<p>{}: <a href=\"mailto:{email}\">{email}</a></p>",
        escape(&ctx.t("contact", "email")),
        email = escape(&contact.email)
    );
    out.push_str("</address>\n");
    out
}

fn footer(ctx: &PageContext<'_>) -> String {
    let contact = &ctx.config.contact;
    let mut out = String::from("<footer>\n");
    let _ = writeln!(out, "<p>{}</p>", escape(&contact.address));
    if let Some(href) = contact.phone_href() {
        let _ = writeln!(out, "<a href=\"{}\">{}</a>", escape(&href), escape(&contact.phone));
    }
    if let Some(link) = contact.whatsapp_link() {
        let _ = writeln!(
            out,
            "<a class=\"whatsapp\" href=\"{}\">{}</a>",
            escape(&link),
            escape(&ctx.t("contact", "whatsapp"))
        );
    }
    out.push_str("</footer>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::site_config::{ProviderSlot, ThemeSheet};
    use std::sync::Arc;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    }

    #[tokio::test]
    async fn test_contact_page_uses_config_and_links() {
        let catalog = Catalog::builtin();
        let slot = ProviderSlot::mount(None, Arc::new(ThemeSheet::new()));
        let ctx = PageContext::new(Locale::En, Some(RouteKey::Contact), &catalog, &slot);
        let html = render_page(&ctx);

        assert!(html.contains("<html lang=\"en-US\">"));
        assert!(html.contains("href=\"/en/hakkimda\""));
        assert!(html.contains("hreflang=\"tr-TR\" href=\"/tr/iletisim\""));
        assert!(html.contains("mailto:info@example.com"));
        assert!(html.contains("https://wa.me/905320000000"));
        assert!(html.contains("--color-primary: #0f766e;"));
        assert!(html.contains("<h1>Contact</h1>"));
    }

    #[tokio::test]
    async fn test_not_found_page_links_home() {
        let catalog = Catalog::builtin();
        let slot = ProviderSlot::mount(None, Arc::new(ThemeSheet::new()));
        let ctx = PageContext::new(Locale::Tr, None, &catalog, &slot);
        let html = render_page(&ctx);

        assert!(html.contains("<h1>Sayfa bulunamadı</h1>"));
        assert!(html.contains("<a href=\"/tr\">Ana sayfaya dön</a>"));
        assert!(!html.contains("rel=\"alternate\""));
    }
}
