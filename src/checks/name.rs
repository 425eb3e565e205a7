//! Check method name parsing
//!
//! A check method name is a virtual method name like `isActive`,
//! `hasNoPendingInvoices`, or `_isActive`. It decomposes into three facets:
//!
//! - the **base name** (`Active`), which must match a registered scope;
//! - the **polarity**, encoded by the prefix (`is`/`has` affirmative,
//!   `isNot`/`hasNo` negated);
//! - the **evaluation mode**, encoded by an optional leading `_` marker
//!   (present: in-memory, absent: materialized).
//!
//! Prefix matching is case-sensitive, anchored at the start of the name,
//! and ordered most-specific-first so `isNotActive` is never misread as
//! `is` + `NotActive`. The remainder after the prefix is kept verbatim.

use regex::Regex;
use std::sync::OnceLock;

/// Leading marker selecting in-memory evaluation
pub const IN_MEMORY_MARKER: char = '_';

/// Whether a check asks "does it match" or "does it not match"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Affirmative,
    Negated,
}

/// How the check result is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Run against storage, return an existence boolean
    Materialized,
    /// Apply the scope without materializing, return its raw result
    InMemory,
}

/// The recognized check prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPrefix {
    Is,
    IsNot,
    Has,
    HasNo,
}

impl CheckPrefix {
    /// Every prefix a scope's base name combines with
    ///
    /// One invalidation sweep covers all four variants per scope.
    pub const ALL: [CheckPrefix; 4] = [
        CheckPrefix::Is,
        CheckPrefix::IsNot,
        CheckPrefix::Has,
        CheckPrefix::HasNo,
    ];

    /// The literal prefix string
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckPrefix::Is => "is",
            CheckPrefix::IsNot => "isNot",
            CheckPrefix::Has => "has",
            CheckPrefix::HasNo => "hasNo",
        }
    }

    /// The polarity this prefix encodes
    pub fn polarity(&self) -> Polarity {
        match self {
            CheckPrefix::Is | CheckPrefix::Has => Polarity::Affirmative,
            CheckPrefix::IsNot | CheckPrefix::HasNo => Polarity::Negated,
        }
    }

    fn from_match(s: &str) -> Option<Self> {
        match s {
            "is" => Some(CheckPrefix::Is),
            "isNot" => Some(CheckPrefix::IsNot),
            "has" => Some(CheckPrefix::Has),
            "hasNo" => Some(CheckPrefix::HasNo),
            _ => None,
        }
    }
}

// Alternation order encodes prefix specificity: isNot/hasNo before is/has.
fn check_name_regex() -> &'static Regex {
    static CHECK_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    CHECK_NAME_REGEX.get_or_init(|| Regex::new(r"^(isNot|hasNo|is|has)(.*)$").unwrap())
}

/// A parsed check method name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckName {
    prefix: CheckPrefix,
    base: String,
    mode: EvalMode,
}

impl CheckName {
    /// Parse a requested method name into its check facets
    ///
    /// Returns `None` when the name does not follow the check naming
    /// convention; the dispatcher then falls through to the standard
    /// missing-method failure.
    pub fn parse(name: &str) -> Option<CheckName> {
        let (mode, rest) = match name.strip_prefix(IN_MEMORY_MARKER) {
            Some(rest) => (EvalMode::InMemory, rest),
            None => (EvalMode::Materialized, name),
        };

        let captures = check_name_regex().captures(rest)?;
        let prefix = CheckPrefix::from_match(&captures[1])?;

        Some(CheckName {
            prefix,
            base: captures[2].to_string(),
            mode,
        })
    }

    /// The base name, kept verbatim from the requested name
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The matched prefix
    pub fn prefix(&self) -> CheckPrefix {
        self.prefix
    }

    /// The polarity encoded by the prefix
    pub fn polarity(&self) -> Polarity {
        self.prefix.polarity()
    }

    /// The evaluation mode encoded by the marker
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Whether the check is negated
    pub fn is_negated(&self) -> bool {
        self.polarity() == Polarity::Negated
    }
}
