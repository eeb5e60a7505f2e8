//! RSS feed fetching and normalization

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::application::errors::FeedError;
use crate::domain::entities::{Feed, FeedItem};
use crate::domain::traits::FeedSource;

/// Sent as the User-Agent of every feed request
pub const USER_AGENT: &str = "gator";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches feeds over HTTP, one attempt per call
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    /// `timeout` bounds the whole request, body included
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl FeedSource for FeedFetcher {
    fn fetch(&self, url: &str) -> Result<Feed, FeedError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feed {} answered {}, parsing body anyway", url, status);
        }

        let body = response.bytes()?;
        tracing::debug!("Read {} bytes from {}", body.len(), url);

        parse_feed(&body)
    }
}

/// Parse an RSS document and decode HTML entities in its text fields.
///
/// Surrounding whitespace of every text field is trimmed by the reader.
pub fn parse_feed(body: &[u8]) -> Result<Feed, FeedError> {
    let channel = match rss::Channel::read_from(body) {
        Ok(channel) => channel,
        Err(rss::Error::Eof) if is_channelless_rss(body) => {
            tracing::debug!("Feed has an rss root but no channel");
            return Ok(Feed::default());
        }
        Err(e) => return Err(e.into()),
    };

    let items = channel
        .items()
        .iter()
        .map(|item| FeedItem {
            title: unescape(item.title().unwrap_or_default()),
            link: item.link().unwrap_or_default().to_string(),
            description: unescape(item.description().unwrap_or_default()),
            pub_date: item.pub_date().unwrap_or_default().to_string(),
        })
        .collect();

    Ok(Feed {
        title: unescape(channel.title()),
        link: channel.link().to_string(),
        description: unescape(channel.description()),
        items,
    })
}

/// True for a well-formed document whose root is `<rss>` and that never opens a channel
fn is_channelless_rss(body: &[u8]) -> bool {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                if depth == 0 && (seen_root || name.as_ref() != b"rss") {
                    return false;
                }
                if name.as_ref() == b"channel" {
                    return false;
                }
                seen_root = true;
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    if seen_root || e.name().as_ref() != b"rss" {
                        return false;
                    }
                    seen_root = true;
                } else if e.name().as_ref() == b"channel" {
                    return false;
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => return seen_root && depth == 0,
            Ok(_) => {}
            Err(_) => return false,
        }
        buf.clear();
    }
}

fn unescape(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
