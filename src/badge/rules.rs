use regex::Regex;

use crate::scrape::Metric;

/// Locates one metric's numeric field inside the README: a literal prefix,
/// a run of decimal digits, a literal suffix. The percent-encoded separators
/// are part of the literal, matched verbatim.
pub struct PatchRule {
    pub metric: Metric,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

// The suffix disambiguates badges that share a prefix (the CSDN badge carries
// the encoded "关注" label between count and color).
pub const RULES: [PatchRule; 3] = [
    PatchRule {
        metric: Metric::Citations,
        prefix: "Google%20Scholar%20Citations-",
        suffix: "-",
    },
    PatchRule {
        metric: Metric::Followers,
        prefix: "CSDN-",
        suffix: "%20%E5%85%B3%E6%B3%A8-",
    },
    PatchRule {
        metric: Metric::Downloads,
        prefix: "OpenArt%20Downloads-",
        suffix: "-",
    },
];

impl PatchRule {
    pub fn pattern(&self) -> Regex {
        let src = format!("({})\\d+({})", regex::escape(self.prefix), regex::escape(self.suffix));
        // Escaped literals around \d+ always form a valid pattern.
        Regex::new(&src).expect("badge rule pattern")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_rule_per_metric() {
        assert!(RULES.iter().any(|r| r.metric == Metric::Citations));
        assert!(RULES.iter().any(|r| r.metric == Metric::Followers));
        assert!(RULES.iter().any(|r| r.metric == Metric::Downloads));
    }

    #[test]
    fn pattern_requires_both_literals() {
        let rule = &RULES[1]; // followers
        let re = rule.pattern();
        assert!(re.is_match("badge/CSDN-357%20%E5%85%B3%E6%B3%A8-red"));
        // same prefix, different suffix: must not match
        assert!(!re.is_match("badge/CSDN-357-red"));
    }

    #[test]
    fn pattern_matches_digits_only() {
        let re = RULES[0].pattern();
        assert!(re.is_match("Google%20Scholar%20Citations-120-yellow"));
        assert!(!re.is_match("Google%20Scholar%20Citations-abc-yellow"));
    }
}
