//! Call-site substitution step
//!
//! Runs the rule table over the whole text, in table order, each rule
//! replacing every remaining match. Which rule claims an overlapping call is
//! therefore decided entirely by `RuleOrder` (see `rules.rs`).

use crate::rules::RuleSet;

pub fn rewrite_calls(content: &str, rules: &RuleSet) -> String {
    let mut out = content.to_string();
    for rule in rules.iter() {
        out = rule.apply(&out).into_owned();
    }
    out
}
