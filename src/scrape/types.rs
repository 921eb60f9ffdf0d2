use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Metric {
    Citations,
    Followers,
    Downloads,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Citations => "citations",
            Metric::Followers => "followers",
            Metric::Downloads => "downloads",
        }
    }
}

/// One run's scrape results. Each slot is independent; a failed strategy
/// leaves its slot None without affecting the other two.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatBundle {
    pub citations: Option<String>,
    pub followers: Option<String>,
    pub downloads: Option<String>,
}

impl StatBundle {
    pub fn get(&self, metric: Metric) -> Option<&str> {
        match metric {
            Metric::Citations => self.citations.as_deref(),
            Metric::Followers => self.followers.as_deref(),
            Metric::Downloads => self.downloads.as_deref(),
        }
    }

    pub fn obtained(&self) -> usize {
        [&self.citations, &self.followers, &self.downloads]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}
