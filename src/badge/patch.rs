use regex::Captures;

use crate::scrape::{Metric, StatBundle};

use super::rules::RULES;

/// What happened to one metric's badge field during a patch pass.
#[derive(Clone, Debug)]
pub struct FieldPatch {
    pub metric: Metric,
    pub value: String,
    /// False when the rule's pattern did not occur in the document.
    pub matched: bool,
}

#[derive(Debug)]
pub struct PatchOutcome {
    pub text: String,
    pub changed: bool,
    pub fields: Vec<FieldPatch>,
}

/// Substitute each present metric's value into its badge field, leaving the
/// rest of the document byte-identical. Absent metrics and unmatched patterns
/// are no-ops. Reapplying with the same bundle yields the same text.
pub fn apply(doc: &str, bundle: &StatBundle) -> PatchOutcome {
    let mut text = doc.to_string();
    let mut fields = Vec::new();

    for rule in &RULES {
        let Some(value) = bundle.get(rule.metric) else { continue };
        let re = rule.pattern();
        let matched = re.is_match(&text);
        if matched {
            text = re
                .replace_all(&text, |caps: &Captures| {
                    format!("{}{}{}", &caps[1], value, &caps[2])
                })
                .into_owned();
        }
        fields.push(FieldPatch { metric: rule.metric, value: value.to_string(), matched });
    }

    let changed = text != doc;
    PatchOutcome { text, changed, fields }
}
