use quick_xml::events::Event;
use quick_xml::Reader;

use super::models::FeedItem;
use crate::{Error, Result};

/// Streaming state machine that assembles `FeedItem`s from tag events.
///
/// The machine tracks only the most recently opened tag name, not a full
/// nesting stack: character data is attributed to whatever tag opened last,
/// and closing an inner element does not restore the outer element's name.
/// Items are finalized exclusively by a closing `item` tag; an `item` tag
/// opening while another item is still in progress silently drops the
/// unclosed one.
#[derive(Debug, Default)]
pub struct ItemParser {
    current_element: String,
    in_progress: Option<FeedItem>,
    items: Vec<FeedItem>,
}

impl ItemParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start_tag(&mut self, name: &str) {
        self.current_element = name.to_string();
        if name == "item" {
            if self.in_progress.is_some() {
                tracing::debug!("dropping unclosed item block");
            }
            self.in_progress = Some(FeedItem::new());
        }
    }

    pub fn on_character_data(&mut self, text: &str) {
        let data = text.trim();
        if data.is_empty() {
            return;
        }

        if let Some(item) = self.in_progress.as_mut() {
            match self.current_element.as_str() {
                "title" => item.title.push_str(data),
                "description" => item.description.push_str(data),
                _ => {}
            }
        }
    }

    pub fn on_end_tag(&mut self, name: &str) {
        if name == "item" {
            if let Some(item) = self.in_progress.take() {
                self.items.push(item);
            }
        }
    }

    pub fn finish(self) -> Vec<FeedItem> {
        self.items
    }
}

/// Parse one complete XML feed document into its items, in document order.
///
/// A tokenizer error anywhere in the document fails the whole invocation;
/// no partial item list is returned. A well-formed document with no `item`
/// blocks yields an empty vector.
pub fn parse_feed(content: &[u8]) -> Result<Vec<FeedItem>> {
    let mut reader = Reader::from_reader(content);
    let mut machine = ItemParser::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                machine.on_start_tag(&name);
            }
            Ok(Event::Empty(e)) => {
                // Self-closing tag: same as an open immediately followed by a close
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                machine.on_start_tag(&name);
                machine.on_end_tag(&name);
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::MalformedDocument(e.to_string()))?;
                machine.on_character_data(&text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                machine.on_character_data(&text);
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                machine.on_end_tag(&name);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::MalformedDocument(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    let items = machine.finish();
    tracing::debug!("parsed {} feed items", items.len());
    Ok(items)
}
