//! HTML rendering of a [`Screen`].

use nt_core::view::{Card, Link};
use nt_core::Screen;
use std::fmt::Write;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f5f5f7;margin:0;padding:24px;color:#111}\
.center{min-height:90vh;display:flex;align-items:center;justify-content:center;text-align:center}\
.spinner{width:48px;height:48px;border-radius:50%;border:3px solid #ddd;border-bottom-color:#4338ca;margin:0 auto 16px;animation:spin 1s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}\
.panel{background:#fff;border-radius:12px;padding:32px;box-shadow:0 2px 8px rgba(0,0,0,.08);max-width:28rem}\
header{text-align:center;margin-bottom:48px}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:32px;max-width:80rem;margin:0 auto}\
.card{background:#fff;border-radius:12px;padding:24px;box-shadow:0 2px 8px rgba(0,0,0,.08)}\
.source{font-size:.875rem;color:#6b7280}\
.badge{display:inline-block;padding:2px 10px;border-radius:999px;font-size:.75rem}\
.tone-green{background:#dcfce7;color:#166534}.tone-red{background:#fee2e2;color:#991b1b}\
.tone-blue{background:#dbeafe;color:#1e40af}.tone-gray{background:#f3f4f6;color:#374151}";

pub fn page(screen: &Screen) -> String {
    let mut body = String::new();
    match screen {
        Screen::Loading { message } => {
            let _ = write!(
                body,
                r#"<main class="center" aria-busy="true"><div><div class="spinner"></div><p>{}</p></div></main>"#,
                escape(message)
            );
        }
        Screen::Failure { title, message, action } => {
            let _ = write!(
                body,
                r#"<main class="center"><section class="panel failure"><h2>{}</h2><p>{}</p><form method="get" action="/"><button type="submit">{}</button></form></section></main>"#,
                escape(title),
                escape(message),
                escape(action)
            );
        }
        Screen::Empty { heading, tagline, message } => {
            write_header(&mut body, heading, tagline);
            let _ = write!(
                body,
                r#"<main class="center"><section class="panel empty"><p>{}</p></section></main>"#,
                escape(message)
            );
        }
        Screen::Grid { heading, tagline, cards } => {
            write_header(&mut body, heading, tagline);
            body.push_str(r#"<main class="grid">"#);
            for card in cards {
                write_card(&mut body, card);
            }
            body.push_str("</main>");
        }
    }

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>AI News Digest</title><style>{}</style></head><body>{}</body></html>",
        STYLE, body
    )
}

fn write_header(out: &mut String, heading: &str, tagline: &str) {
    let _ = write!(
        out,
        "<header><h1>{}</h1><p>{}</p></header>",
        escape(heading),
        escape(tagline)
    );
}

fn write_card(out: &mut String, card: &Card) {
    let badge = &card.badge;
    let _ = write!(
        out,
        r#"<article class="card" data-key="{key}"><span class="source">{source}</span><h2>{title}</h2><span class="badge tone-{tone}" data-sentiment="{category}">{icon} {text}</span><p>{summary}</p>{link}</article>"#,
        key = escape(&card.key),
        source = escape(&card.source),
        title = escape(&card.title),
        tone = badge.tone.as_str(),
        category = badge.category.as_str(),
        icon = escape(badge.icon.glyph()),
        text = escape(&badge.text),
        summary = escape(&card.summary),
        link = anchor(&card.link),
    );
}

fn anchor(link: &Link) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{} &#8599;</a>"#,
        escape(&link.href),
        escape(link.label)
    )
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
