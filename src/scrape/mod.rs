use reqwest::Client;

use crate::config::Profiles;

pub mod fetch;
mod downloads;
mod followers;
mod scholar;
pub mod types;

pub use types::{Metric, StatBundle};

/// Run the three extraction strategies and collect their results. The
/// strategies are independent, so they run concurrently on the shared client;
/// a failed one contributes None without affecting the others.
pub async fn collect(client: &Client, profiles: &Profiles) -> StatBundle {
    let (citations, followers, downloads) = tokio::join!(
        scholar::fetch_citations(client, &profiles.scholar_user),
        followers::fetch_followers(client, &profiles.csdn_user),
        downloads::fetch_downloads(client, &profiles.openart_user),
    );
    StatBundle { citations, followers, downloads }
}
