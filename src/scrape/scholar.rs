use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use super::fetch;
use crate::util::num::normalize_count;

/// Cumulative citation count from the Google Scholar profile page.
/// Any failure degrades to None; nothing propagates past this boundary.
pub async fn fetch_citations(client: &Client, user: &str) -> Option<String> {
    match try_fetch(client, user).await {
        Ok(Some(count)) => Some(count),
        Ok(None) => {
            warn!("scholar: citation table not found for user {user}");
            None
        }
        Err(e) => {
            warn!("scholar: fetch failed: {e:#}");
            None
        }
    }
}

async fn try_fetch(client: &Client, user: &str) -> Result<Option<String>> {
    let mut url = Url::parse("https://scholar.google.com/citations")?;
    url.query_pairs_mut().append_pair("user", user).append_pair("hl", "en");
    let html = fetch::fetch_page(client, url.as_str()).await?;
    Ok(extract_citations(&html))
}

// The sidebar totals table lists Citations / h-index / i10-index; the first
// `.gsc_rsb_std` cell is the all-time citation count.
fn extract_citations(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("td.gsc_rsb_std").ok()?;
    let cell = doc.select(&sel).next()?;
    let text = cell.text().collect::<String>();
    normalize_count(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"
    <html><body>
      <table id="gsc_rsb_st">
        <tr><td class="gsc_rsb_sc1">Citations</td>
            <td class="gsc_rsb_std">1534</td>
            <td class="gsc_rsb_std">820</td></tr>
        <tr><td class="gsc_rsb_sc1">h-index</td>
            <td class="gsc_rsb_std">18</td>
            <td class="gsc_rsb_std">14</td></tr>
      </table>
    </body></html>
    "#;

    #[test]
    fn first_totals_cell_is_citations() {
        assert_eq!(extract_citations(PROFILE), Some("1534".to_string()));
    }

    #[test]
    fn separators_normalized() {
        let html = r#"<table><tr><td class="gsc_rsb_std">12,400</td></tr></table>"#;
        assert_eq!(extract_citations(html), Some("12400".to_string()));
    }

    #[test]
    fn none_when_table_missing() {
        let html = r#"<html><body><p>Profile not found</p></body></html>"#;
        assert_eq!(extract_citations(html), None);
    }

    #[test]
    fn none_when_cell_not_numeric() {
        let html = r#"<table><tr><td class="gsc_rsb_std">n/a</td></tr></table>"#;
        assert_eq!(extract_citations(html), None);
    }
}
