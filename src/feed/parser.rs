use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use thiserror::Error;

use crate::feed::date::normalize_date;
use crate::feed::record::ArticleRecord;
use crate::util::is_web_url;

/// Number of articles shown on a page unless configured otherwise.
pub const DEFAULT_ARTICLE_LIMIT: usize = 10;

/// Media RSS namespace, used only for `<media:content url="...">` thumbnails.
pub const MEDIA_RSS_NS: &[u8] = b"http://search.yahoo.com/mrss/";

/// Element depths inside `<root><channel><item><field>`.
const CHANNEL_DEPTH: usize = 1;
const ITEM_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// Errors that can occur while parsing a feed document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bytes are not a well-formed XML document with a root element.
    #[error("Malformed feed: {0}")]
    Malformed(String),
}

impl From<quick_xml::Error> for ParseError {
    fn from(e: quick_xml::Error) -> Self {
        ParseError::Malformed(e.to_string())
    }
}

/// Item child elements whose text we extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    PubDate,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"description" => Some(Field::Description),
            b"pubDate" => Some(Field::PubDate),
            _ => None,
        }
    }
}

/// Text being collected for one item field.
///
/// Only character data that precedes the field's first child element counts,
/// so `<title>Hotels <b>now</b> open</title>` yields `"Hotels "`.
struct Capture {
    field: Field,
    text: String,
    closed: bool,
}

/// Raw (unescaped) values collected for one `<item>`.
#[derive(Default)]
struct ItemFields {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    pub_date: Option<String>,
    media_seen: bool,
    image: Option<String>,
}

impl ItemFields {
    /// Stores a field's text. Only the first occurrence of each element counts.
    fn set(&mut self, field: Field, text: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::Description => &mut self.description,
            Field::PubDate => &mut self.pub_date,
        };
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    fn into_record(self) -> ArticleRecord {
        let title = self.title.unwrap_or_default();
        let description = self.description.unwrap_or_default();
        let pub_date = self.pub_date.unwrap_or_default();

        let mut link = self.link.unwrap_or_default().trim().to_string();
        if !link.is_empty() && !is_web_url(&link) {
            tracing::warn!(link = %link, "Dropping non-http(s) article link");
            link.clear();
        }

        let image = self
            .image
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .filter(|url| {
                let ok = is_web_url(url);
                if !ok {
                    tracing::warn!(image = %url, "Dropping non-http(s) thumbnail URL");
                }
                ok
            });

        ArticleRecord::new(
            title.trim(),
            &link,
            description.trim(),
            &normalize_date(&pub_date),
            image.as_deref(),
        )
    }
}

/// Parses RSS 2.0 bytes into at most `limit` article records, in document order.
///
/// Items are the `<item>` children of `<channel>` elements directly under the
/// root. Reading stops as soon as `limit` records exist; anything after that
/// point is never looked at, so trailing garbage past the limit goes unnoticed.
/// Below the limit the whole document is read, including what follows the root.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] if no root element is found or the XML
/// is not well-formed in the portion that was read. Missing item fields are
/// never an error; they default to empty strings.
pub fn parse_feed(bytes: &[u8], limit: usize) -> Result<Vec<ArticleRecord>, ParseError> {
    let mut reader = NsReader::from_reader(bytes);
    reader.config_mut().check_end_names = true;

    let mut records = Vec::with_capacity(limit.min(DEFAULT_ARTICLE_LIMIT));
    let mut buf = Vec::new();
    let mut depth: usize = 0;
    let mut saw_root = false;
    let mut in_channel = false;
    let mut item: Option<ItemFields> = None;
    let mut capture: Option<Capture> = None;

    loop {
        let (ns, event) = next_event(&mut reader, &mut buf)?;
        match event {
            Event::Start(e) => {
                if depth == 0 {
                    start_root(&mut saw_root)?;
                } else if depth == CHANNEL_DEPTH && ns.is_unbound(&e, b"channel") {
                    in_channel = true;
                } else if depth == ITEM_DEPTH && in_channel && ns.is_unbound(&e, b"item") {
                    if records.len() >= limit {
                        break;
                    }
                    item = Some(ItemFields::default());
                } else if depth == FIELD_DEPTH {
                    if let Some(fields) = item.as_mut() {
                        if let Some(field) = ns.item_field(&e) {
                            capture = Some(Capture {
                                field,
                                text: String::new(),
                                closed: false,
                            });
                        } else if ns.is_media_content(&e) {
                            take_thumbnail(fields, &e, reader.decoder())?;
                        }
                    }
                } else if let Some(c) = capture.as_mut() {
                    c.closed = true;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    // A self-closing root has no channel and therefore no items.
                    start_root(&mut saw_root)?;
                } else if depth == FIELD_DEPTH {
                    if let Some(fields) = item.as_mut() {
                        if let Some(field) = ns.item_field(&e) {
                            fields.set(field, String::new());
                        } else if ns.is_media_content(&e) {
                            take_thumbnail(fields, &e, reader.decoder())?;
                        }
                    }
                } else if let Some(c) = capture.as_mut() {
                    c.closed = true;
                }
            }
            Event::Text(e) => {
                if depth == 0 {
                    let text = e.unescape()?;
                    if !text.trim().is_empty() {
                        return Err(ParseError::Malformed(
                            "text content outside the root element".into(),
                        ));
                    }
                } else if let Some(c) = capture.as_mut() {
                    if depth == FIELD_DEPTH + 1 && !c.closed {
                        c.text.push_str(&e.unescape()?);
                    }
                }
            }
            Event::CData(e) => {
                if let Some(c) = capture.as_mut() {
                    if depth == FIELD_DEPTH + 1 && !c.closed {
                        let text = reader
                            .decoder()
                            .decode(&e)
                            .map_err(|err| ParseError::Malformed(err.to_string()))?;
                        c.text.push_str(&text);
                    }
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match depth {
                    // Keep reading: only comments and whitespace may follow the root.
                    0 => {}
                    CHANNEL_DEPTH => in_channel = false,
                    ITEM_DEPTH => {
                        if let Some(fields) = item.take() {
                            records.push(fields.into_record());
                            if records.len() >= limit {
                                break;
                            }
                        }
                    }
                    FIELD_DEPTH => {
                        if let (Some(c), Some(fields)) = (capture.take(), item.as_mut()) {
                            fields.set(c.field, c.text);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => {
                if !saw_root {
                    return Err(ParseError::Malformed("no root element found".into()));
                }
                if depth > 0 {
                    return Err(ParseError::Malformed(format!(
                        "unexpected end of document with {} unclosed element(s)",
                        depth
                    )));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!(records = records.len(), limit = limit, "Parsed feed");
    Ok(records)
}

/// Marks the root element as seen. A document has exactly one.
fn start_root(saw_root: &mut bool) -> Result<(), ParseError> {
    if *saw_root {
        return Err(ParseError::Malformed(
            "element found after the root element".into(),
        ));
    }
    *saw_root = true;
    Ok(())
}

/// Reads the next event, resolving its namespace without keeping the reader borrowed.
fn next_event<'b>(
    reader: &mut NsReader<&[u8]>,
    buf: &'b mut Vec<u8>,
) -> Result<(ElementNs, Event<'b>), ParseError> {
    let (ns, event) = reader.read_resolved_event_into(buf)?;
    Ok((ElementNs::classify(&ns), event))
}

/// Namespace of the element just read, reduced to what the parser cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementNs {
    Unbound,
    MediaRss,
    Other,
}

impl ElementNs {
    fn classify(ns: &ResolveResult<'_>) -> Self {
        match ns {
            ResolveResult::Unbound => ElementNs::Unbound,
            ResolveResult::Bound(Namespace(uri)) if *uri == MEDIA_RSS_NS => ElementNs::MediaRss,
            _ => ElementNs::Other,
        }
    }

    fn is_unbound(self, e: &BytesStart<'_>, local: &[u8]) -> bool {
        self == ElementNs::Unbound && e.local_name().as_ref() == local
    }

    fn item_field(self, e: &BytesStart<'_>) -> Option<Field> {
        match self {
            ElementNs::Unbound => Field::from_local_name(e.local_name().as_ref()),
            _ => None,
        }
    }

    fn is_media_content(self, e: &BytesStart<'_>) -> bool {
        self == ElementNs::MediaRss && e.local_name().as_ref() == b"content"
    }
}

/// Records the `url` attribute of the item's first `<media:content>`.
///
/// Later `<media:content>` elements are ignored even when the first one has
/// no `url`.
fn take_thumbnail(
    fields: &mut ItemFields,
    e: &BytesStart<'_>,
    decoder: Decoder,
) -> Result<(), ParseError> {
    if fields.media_seen {
        return Ok(());
    }
    fields.media_seen = true;

    for attr_result in e.attributes() {
        let attr = match attr_result {
            Ok(attr) => attr,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed media:content attribute");
                continue;
            }
        };
        if attr.key.as_ref() == b"url" {
            let value = attr.decode_and_unescape_value(decoder)?;
            fields.image = Some(value.into_owned());
            break;
        }
    }
    Ok(())
}
