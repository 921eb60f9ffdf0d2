use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

use super::fetch;
use crate::util::num::normalize_count;

const USER_INFO_API: &str = "https://blog.csdn.net/community/home-api/v1/get-user-info";

/// Follower count from CSDN. Tries the structured user-info endpoint first,
/// then falls back to the statistics block on the profile page. Any failure
/// degrades to None.
pub async fn fetch_followers(client: &Client, user: &str) -> Option<String> {
    match fans_from_api(client, user).await {
        Ok(Some(count)) => return Some(count),
        Ok(None) => debug!("csdn: user-info api had no fans field for {user}"),
        Err(e) => warn!("csdn: user-info api failed: {e:#}"),
    }
    match fans_from_profile(client, user).await {
        Ok(Some(count)) => Some(count),
        Ok(None) => {
            warn!("csdn: no usable statistics entry on profile page for {user}");
            None
        }
        Err(e) => {
            warn!("csdn: profile page fetch failed: {e:#}");
            None
        }
    }
}

async fn fans_from_api(client: &Client, user: &str) -> Result<Option<String>> {
    let body: Value = client
        .get(USER_INFO_API)
        .query(&[("username", user)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(extract_fans_field(&body))
}

fn extract_fans_field(body: &Value) -> Option<String> {
    let fans = body.get("data")?.get("fans")?;
    match fans {
        Value::Number(n) => normalize_count(&n.to_string()),
        Value::String(s) => normalize_count(s),
        _ => None,
    }
}

async fn fans_from_profile(client: &Client, user: &str) -> Result<Option<String>> {
    let url = format!("https://blog.csdn.net/{user}");
    let html = fetch::fetch_page(client, &url).await?;
    Ok(extract_fans_cell(&html))
}

// The fans count is the first statistics number on the profile page. A cell
// reading "暂无" means no data yet, and a literal "0" renders while the
// counters are still filling in, so both are skipped in favor of later cells.
fn extract_fans_cell(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(".user-profile-statistics-num").ok()?;
    for cell in doc.select(&sel) {
        let text = cell.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() || text == "暂无" || text == "0" {
            continue;
        }
        return normalize_count(text);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_fans_as_number() {
        let body = json!({ "code": 200, "data": { "fans": 2048 } });
        assert_eq!(extract_fans_field(&body), Some("2048".to_string()));
    }

    #[test]
    fn api_fans_as_string() {
        let body = json!({ "data": { "fans": "1,024" } });
        assert_eq!(extract_fans_field(&body), Some("1024".to_string()));
    }

    #[test]
    fn api_missing_field() {
        let body = json!({ "data": { "codeAge": 5 } });
        assert_eq!(extract_fans_field(&body), None);
        assert_eq!(extract_fans_field(&json!({ "code": 400 })), None);
    }

    #[test]
    fn profile_first_statistics_cell() {
        let html = r#"
        <div class="user-profile-statistics">
          <div class="user-profile-statistics-num">357</div>
          <div class="user-profile-statistics-num">1203</div>
        </div>
        "#;
        assert_eq!(extract_fans_cell(html), Some("357".to_string()));
    }

    #[test]
    fn profile_skips_placeholder_and_zero() {
        let html = r#"
        <div class="user-profile-statistics-num">暂无</div>
        <div class="user-profile-statistics-num">0</div>
        <div class="user-profile-statistics-num">42</div>
        "#;
        assert_eq!(extract_fans_cell(html), Some("42".to_string()));
    }

    #[test]
    fn profile_absent_when_nothing_qualifies() {
        let html = r#"
        <div class="user-profile-statistics-num"> </div>
        <div class="user-profile-statistics-num">0</div>
        "#;
        assert_eq!(extract_fans_cell(html), None);
    }

    #[test]
    fn profile_non_numeric_cell_degrades() {
        let html = r#"<div class="user-profile-statistics-num">1.2万</div>"#;
        assert_eq!(extract_fans_cell(html), None);
    }
}
