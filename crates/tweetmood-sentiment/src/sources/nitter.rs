//! Nitter-compatible instance source.
//!
//! Reads `GET {base_url}/{username}/rss` and turns each `<item>` into a
//! [`RawItem`]: `title` is the post text, `link`, `dc:creator` and `pubDate`
//! become metadata.

use std::time::Duration;

use chrono::DateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use super::{ContentSource, SourceEndpoint};
use crate::error::SourceError;
use crate::types::{ItemMetadata, RawItem};

/// Characters escaped in the username path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_');

/// One Nitter instance reached over HTTP.
#[derive(Debug, Clone)]
pub struct NitterSource {
    client: Client,
    endpoint: SourceEndpoint,
}

impl NitterSource {
    /// Build the HTTP client shared by every instance.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn http_client(timeout: Duration, user_agent: &str) -> Result<Client, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(client)
    }

    #[must_use]
    pub fn new(client: Client, endpoint: SourceEndpoint) -> Self {
        Self { client, endpoint }
    }

    fn feed_url(&self, username: &str) -> String {
        let encoded = utf8_percent_encode(username, SEGMENT);
        format!("{}/{encoded}/rss", self.endpoint.base_url)
    }
}

impl ContentSource for NitterSource {
    fn endpoint(&self) -> &SourceEndpoint {
        &self.endpoint
    }

    async fn get_items(
        &self,
        username: &str,
        count: usize,
    ) -> Result<Vec<RawItem>, SourceError> {
        let url = self.feed_url(username);
        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::ACCEPT,
                "application/rss+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(SourceError::RateLimited {
                url,
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound { url });
        }

        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let mut items = parse_nitter_rss(&body)?;
        items.truncate(count);

        tracing::debug!(
            endpoint = %self.endpoint.name,
            username,
            count = items.len(),
            "parsed Nitter RSS feed"
        );

        Ok(items)
    }
}

#[derive(Default)]
struct ItemFields {
    title: String,
    description: String,
    link: String,
    creator: String,
    pub_date: String,
}

impl ItemFields {
    fn push(&mut self, tag: &str, text: &str) {
        let field = match tag {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "link" => &mut self.link,
            "dc:creator" => &mut self.creator,
            "pubDate" => &mut self.pub_date,
            _ => return,
        };
        field.push_str(text);
    }

    fn into_item(self) -> Option<RawItem> {
        // Titles are plain text; only the description carries markup.
        let title = collapse_whitespace(&self.title);
        let text = if title.is_empty() {
            strip_html(&self.description)
        } else {
            title
        };
        if text.is_empty() {
            return None;
        }

        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Some(RawItem {
            text,
            metadata: ItemMetadata {
                url: non_empty(&self.link),
                author: non_empty(&self.creator),
                published: DateTime::parse_from_rfc2822(self.pub_date.trim()).ok(),
            },
        })
    }
}

/// Parse a Nitter user RSS feed into items, in feed order.
///
/// Items with no text are skipped.
///
/// # Errors
///
/// Returns [`SourceError::Xml`] if the XML is malformed.
pub fn parse_nitter_rss(xml: &str) -> Result<Vec<RawItem>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<ItemFields> = None;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "item" {
                    current = Some(ItemFields::default());
                    current_tag.clear();
                } else {
                    current_tag = name;
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"item" {
                    if let Some(item) = current.take().and_then(ItemFields::into_item) {
                        items.push(item);
                    }
                }
                current_tag.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(fields) = current.as_mut() {
                    let text = e.unescape().unwrap_or_default();
                    fields.push(&current_tag, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(fields) = current.as_mut() {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    fields.push(&current_tag, &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SourceError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

/// Strip HTML tags and collapse whitespace.
fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                result.push(' ');
            }
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    collapse_whitespace(&result)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
