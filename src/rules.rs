//! Substitution rule table
//!
//! The ordered list of pattern -> template rewrites that turn blocking
//! `alert(...)` calls into awaited `confirm({ ... })` calls. Patterns and
//! replacement text are the behavioral contract of this tool and must not be
//! edited casually; downstream trees were migrated with exactly these strings.

use std::borrow::Cow;

use regex::Regex;

use crate::error::ConfirmifyResult;
use crate::models::{RuleOrder, Severity};

/// Static description of a single rewrite rule
struct RuleSpec {
    name: &'static str,
    title: &'static str,
    severity: Severity,
    pattern: &'static str,
    replacement: &'static str,
}

/// Catalog of every rule, in the order the original script listed them.
///
/// Index 0 is the generic single-quoted-literal rule; 1..=4 are specific
/// literal messages; 5 is the template-literal validation rule; 6 is the
/// catch-all for calls whose argument mentions an error `message` value.
const CATALOG: [RuleSpec; 7] = [
    RuleSpec {
        name: "generic-literal",
        title: "Bilgi",
        severity: Severity::Info,
        pattern: r"alert\('([^']+)'\);",
        replacement: "await confirm({ title: 'Bilgi', description: '${1}', severity: 'info' });",
    },
    RuleSpec {
        name: "photo-limit",
        title: "Fotoğraf Limiti",
        severity: Severity::Warning,
        pattern: r"alert\('En fazla (\d+) fotoğraf yükleyebilirsiniz\.'\);",
        replacement: "await confirm({ title: 'Fotoğraf Limiti', description: 'En fazla ${1} fotoğraf yükleyebilirsiniz.', severity: 'warning' });",
    },
    RuleSpec {
        name: "required-fields",
        title: "Eksik Bilgi",
        severity: Severity::Warning,
        pattern: r"alert\('Lütfen tüm gerekli alanları doldurun\.'\);",
        replacement: "await confirm({ title: 'Eksik Bilgi', description: 'Lütfen tüm gerekli alanları doldurun.', severity: 'warning' });",
    },
    RuleSpec {
        name: "city-district",
        title: "Eksik Bilgi",
        severity: Severity::Warning,
        pattern: r"alert\('Lütfen şehir ve ilçe seçimi yapınız\.'\);",
        replacement: "await confirm({ title: 'Eksik Bilgi', description: 'Lütfen şehir ve ilçe seçimi yapınız.', severity: 'warning' });",
    },
    RuleSpec {
        name: "listing-created",
        title: "Başarılı",
        severity: Severity::Success,
        pattern: r"alert\('İlanınız başarıyla oluşturuldu[^']*'\);",
        replacement: "await confirm({ title: 'Başarılı', description: 'İlanınız başarıyla oluşturuldu! Admin onayından sonra yayınlanacaktır.', severity: 'success' });",
    },
    RuleSpec {
        name: "validation-template",
        title: "Doğrulama Hatası",
        severity: Severity::Error,
        pattern: r"alert\(`Veri doğrulama hatası: ([^`]+)`\);",
        replacement: "await confirm({ title: 'Doğrulama Hatası', description: `Veri doğrulama hatası: ${1}`, severity: 'error' });",
    },
    RuleSpec {
        name: "error-passthrough",
        title: "Hata",
        severity: Severity::Error,
        pattern: r"alert\(([^)]+message[^)]+)\);",
        replacement: "await confirm({ title: 'Hata', description: ${1}, severity: 'error' });",
    },
];

/// Catalog indices in legacy order: generic literal first, exactly as the
/// original script applied them. Specific literals never fire on calls the
/// generic rule already consumed.
const LEGACY_ORDER: [usize; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Catalog indices with specific literals ahead of the generic rule, so they
/// win on the messages they name. The catch-all stays last.
const SPECIFIC_FIRST_ORDER: [usize; 7] = [1, 2, 3, 4, 5, 0, 6];

/// A compiled rewrite rule
pub struct Rule {
    pub name: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub pattern: &'static str,
    pub replacement: &'static str,
    re: Regex,
}

impl Rule {
    fn compile(spec: &RuleSpec) -> ConfirmifyResult<Self> {
        Ok(Self {
            name: spec.name,
            title: spec.title,
            severity: spec.severity,
            pattern: spec.pattern,
            replacement: spec.replacement,
            re: Regex::new(spec.pattern)?,
        })
    }

    /// Apply this rule to every match in `text`
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.re.replace_all(text, self.replacement)
    }
}

/// The immutable ordered rule table for one run
pub struct RuleSet {
    order: RuleOrder,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile the rule table in the given order
    pub fn new(order: RuleOrder) -> ConfirmifyResult<Self> {
        let indices = match order {
            RuleOrder::Legacy => &LEGACY_ORDER,
            RuleOrder::SpecificFirst => &SPECIFIC_FIRST_ORDER,
        };
        let rules = indices
            .iter()
            .map(|&i| Rule::compile(&CATALOG[i]))
            .collect::<ConfirmifyResult<Vec<_>>>()?;
        Ok(Self { order, rules })
    }

    pub fn order(&self) -> RuleOrder {
        self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
