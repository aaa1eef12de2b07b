//! Rewrite-rule table engine
//!
//! Canonicalization is expressed as data: an ordered list of [`RuleSet`]s, each
//! holding an ordered list of [`RewriteRule`]s. Applying a rule set threads the
//! text through every rule in turn, so later rules see the output of earlier
//! ones. Rules are not commutative; reordering a table changes its output.
//!
//! ## Example
//!
//! ```text
//! RuleSet "separators": [ "/" -> " ", ";" -> " " ]
//! Input:   "80% cotton/20% wool;"
//! Output:  "80% cotton 20% wool "
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use tracing::trace;

/// A single (pattern, replacement) pair.
#[derive(Debug, Clone)]
pub enum RewriteRule {
    /// Replace every non-overlapping occurrence of a literal, left to right.
    Literal {
        pattern: &'static str,
        replacement: &'static str,
    },
    /// Regex replace-all. The replacement may reference groups as `${1}`.
    Pattern {
        regex: Regex,
        replacement: &'static str,
    },
}

impl RewriteRule {
    pub fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        RewriteRule::Literal {
            pattern,
            replacement,
        }
    }

    /// Build a regex rule from a pattern known at compile time.
    ///
    /// Panics on an invalid pattern; rule tables are static data covered by tests.
    pub fn pattern(pattern: &'static str, replacement: &'static str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid rewrite pattern {:?}: {}", pattern, e));
        RewriteRule::Pattern { regex, replacement }
    }

    /// Apply this rule, borrowing the input when nothing matches.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            RewriteRule::Literal {
                pattern,
                replacement,
            } => {
                if text.contains(pattern) {
                    Cow::Owned(text.replace(pattern, replacement))
                } else {
                    Cow::Borrowed(text)
                }
            }
            RewriteRule::Pattern { regex, replacement } => regex.replace_all(text, *replacement),
        }
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteRule::Literal {
                pattern,
                replacement,
            } => write!(f, "{:?} -> {:?}", pattern, replacement),
            RewriteRule::Pattern { regex, replacement } => {
                write!(f, "/{}/ -> {:?}", regex.as_str(), replacement)
            }
        }
    }
}

/// A named, ordered stage of rewrite rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: &'static str,
    pub rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<RewriteRule>) -> Self {
        Self { name, rules }
    }

    /// Thread `text` through every rule of the stage, in order.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            current = rewritten;
        }
        trace!(stage = self.name, output = %current, "applied rewrite stage");
        current
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Apply a sequence of stages in order.
pub fn apply_all(stages: &[RuleSet], text: &str) -> String {
    stages
        .iter()
        .fold(text.to_string(), |current, stage| stage.apply(&current))
}
