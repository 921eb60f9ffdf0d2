use anyhow::Result;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::fetch;
use crate::util::num::normalize_count;

/// Total download count from the OpenArt workflows profile. The page embeds
/// its data as JSON in the markup, so the raw body is scanned first; if no
/// known key shape is present, the rendered text is searched for a
/// "<number> downloads" phrase.
pub async fn fetch_downloads(client: &Client, user: &str) -> Option<String> {
    match try_fetch(client, user).await {
        Ok(Some(count)) => Some(count),
        Ok(None) => {
            warn!("openart: no download count found for user {user}");
            None
        }
        Err(e) => {
            warn!("openart: fetch failed: {e:#}");
            None
        }
    }
}

async fn try_fetch(client: &Client, user: &str) -> Result<Option<String>> {
    let url = format!("https://openart.ai/workflows/profile/{user}");
    let html = fetch::fetch_page(client, &url).await?;
    Ok(extract_downloads(&html))
}

fn extract_downloads(html: &str) -> Option<String> {
    if let Some(count) = downloads_from_embedded_data(html) {
        return Some(count);
    }
    debug!("openart: embedded data keys missing, scanning rendered text");
    downloads_from_rendered_text(html)
}

// Key shapes seen in the embedded profile data, newest first.
fn downloads_from_embedded_data(html: &str) -> Option<String> {
    for key in ["downloads", "download_count"] {
        let re = Regex::new(&format!(r#""{key}"\s*:\s*(\d+)"#)).ok()?;
        if let Some(caps) = re.captures(html) {
            return Some(caps[1].to_string());
        }
    }
    None
}

fn downloads_from_rendered_text(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("body").ok()?;
    let text = doc.select(&sel).next()?.text().collect::<Vec<_>>().join(" ");
    let re = Regex::new(r"([\d,]+)\s+downloads").ok()?;
    let caps = re.captures(&text)?;
    normalize_count(&caps[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_downloads_key() {
        let html = r#"<script>{"profile":{"downloads": 8123,"likes":44}}</script>"#;
        assert_eq!(extract_downloads(html), Some("8123".to_string()));
    }

    #[test]
    fn embedded_download_count_key() {
        let html = r#"<script>{"stats":{"download_count":905}}</script>"#;
        assert_eq!(extract_downloads(html), Some("905".to_string()));
    }

    #[test]
    fn first_key_shape_wins() {
        let html = r#"{"downloads": 100, "download_count": 200}"#;
        assert_eq!(extract_downloads(html), Some("100".to_string()));
    }

    #[test]
    fn rendered_text_phrase_fallback() {
        let html = r#"
        <html><body>
          <div class="profile-stats"><span>12,480 downloads</span></div>
        </body></html>
        "#;
        assert_eq!(extract_downloads(html), Some("12480".to_string()));
    }

    #[test]
    fn none_when_nothing_matches() {
        let html = r#"<html><body><p>No stats here</p></body></html>"#;
        assert_eq!(extract_downloads(html), None);
    }
}
