//! Main-text extraction from article HTML
//!
//! A lightweight readability pass over the parsed DOM: narrow the document to
//! the most article-like container, then keep its paragraphs while skipping
//! page chrome at any depth.

use scraper::{ElementRef, Html};

/// Paragraphs with fewer words are treated as boilerplate (bylines, buttons)
pub const MIN_PARAGRAPH_WORDS: usize = 3;

/// Elements that never contain article text
const NOISE_TAGS: [&str; 14] = [
    "head", "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "svg",
    "iframe", "template", "button", "figcaption",
];

/// Elements that start a new line in the plain-text fallback
const BLOCK_TAGS: [&str; 19] = [
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote",
    "section", "article", "main", "table", "tr", "pre",
];

/// Candidate containers, most specific first
const SCOPE_TAGS: [&str; 3] = ["article", "main", "body"];

/// Extract the readable article body from an HTML document
///
/// Paragraphs are joined with a blank line. Returns `None` when nothing
/// readable is left after cleaning.
pub fn extract_article(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let scope = article_scope(&document);

    let paragraphs: Vec<String> = scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p" && !inside_noise(*el))
        .map(inline_text)
        .filter(|p| p.split_whitespace().count() >= MIN_PARAGRAPH_WORDS)
        .collect();

    let text = if paragraphs.is_empty() {
        block_text(scope)
    } else {
        paragraphs.join("\n\n")
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Longest `<article>`, else `<main>`, else `<body>`, else the whole document
///
/// Length is measured on visible text, so an outer article always beats
/// the teaser cards nested inside it.
fn article_scope(document: &Html) -> ElementRef<'_> {
    let root = document.root_element();
    for tag in SCOPE_TAGS {
        let best = root
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == tag && !inside_noise(*el))
            .map(|el| (visible_len(el), el))
            .filter(|(len, _)| *len > 0)
            .max_by_key(|(len, _)| *len);
        if let Some((_, el)) = best {
            return el;
        }
    }
    root
}

fn is_noise(name: &str) -> bool {
    NOISE_TAGS.contains(&name)
}

fn inside_noise(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| is_noise(el.value().name()))
}

fn visible_len(element: ElementRef<'_>) -> usize {
    let mut text = String::new();
    collect_text(element, &mut text, false);
    text.split_whitespace().map(str::len).sum()
}

/// Append the visible text under `element`, skipping noise subtrees
fn collect_text(element: ElementRef<'_>, out: &mut String, line_per_block: bool) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if is_noise(name) {
                continue;
            }
            let block = line_per_block && BLOCK_TAGS.contains(&name);
            if block {
                out.push('\n');
            }
            collect_text(child, out, line_per_block);
            if block {
                out.push('\n');
            }
        }
    }
}

/// Text of an inline element collapsed to a single line
fn inline_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw, false);
    collapse_spaces(&raw)
}

/// Visible text of a whole container, one line per block element
fn block_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw, true);
    raw.lines()
        .map(collapse_spaces)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
