//! Markdown Rendering
//!
//! Assistant replies and generated profiles arrive as Markdown. They are
//! rendered with pulldown-cmark and injected as HTML, so the event stream is
//! filtered first:
//! - raw HTML is shown as text
//! - links keep only http(s)/mailto destinations
//! - images collapse to their alt text

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Characters escaped in link destinations we keep
const URL_ENCODE_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = sanitize_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
}

fn sanitize_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut dropped_link = false;

    for event in parser {
        match event {
            Event::Html(html) | Event::InlineHtml(html) => events.push(Event::Text(html)),

            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                if is_safe_url(&dest_url) {
                    let encoded = utf8_percent_encode(dest_url.trim(), URL_ENCODE_SET).to_string();
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: CowStr::from(encoded),
                        title,
                        id,
                    }));
                } else {
                    dropped_link = true;
                }
            }
            Event::End(TagEnd::Link) if dropped_link => dropped_link = false,

            // Alt text events pass through as plain text
            Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => {}

            other => events.push(other),
        }
    }
    events
}
