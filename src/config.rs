use std::env;
use std::path::PathBuf;

const DEFAULT_SCHOLAR_USER: &str = "on_b6MMAAAAJ";
const DEFAULT_CSDN_USER: &str = "liguandong";
const DEFAULT_OPENART_USER: &str = "leeguandong";

/// Target identifiers for the three upstream profiles. Built once in main and
/// handed to the scrape strategies, so tests can substitute their own.
#[derive(Clone, Debug)]
pub struct Profiles {
    pub scholar_user: String,
    pub csdn_user: String,
    pub openart_user: String,
}

impl Profiles {
    pub fn from_env() -> Self {
        Self {
            scholar_user: env_or("BADGES_SCHOLAR_USER", DEFAULT_SCHOLAR_USER),
            csdn_user: env_or("BADGES_CSDN_USER", DEFAULT_CSDN_USER),
            openart_user: env_or("BADGES_OPENART_USER", DEFAULT_OPENART_USER),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub readme: PathBuf,
    pub profiles: Profiles,
}

impl Config {
    // --readme wins over BADGES_README; default is the README next to the
    // working directory, same convention as the badge links themselves.
    pub fn load(readme_flag: Option<PathBuf>) -> Self {
        let readme = readme_flag
            .or_else(|| env::var("BADGES_README").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("README.md"));
        Self { readme, profiles: Profiles::from_env() }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
}
