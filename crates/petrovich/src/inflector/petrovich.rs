//! Rule table ownership and per-kind entry points.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;

use super::error::{InflectError, LoadError};
use super::{detect_gender, inflect};
use crate::parser::{ParseError, parse_rules};
use crate::rules::{RuleSet, RuleTable};
use crate::types::{Gender, GrammaticalCase, NamePartKind, NameParts};

/// Encoding of a rule table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    /// The compact `.rules` text format.
    Text,
    /// The JSON layout keyed by `lastname`, `firstname` and `middlename`.
    Json,
}

impl RulesFormat {
    /// Pick a format from a file extension: `.json` is JSON, anything else
    /// is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RulesFormat::Json,
            _ => RulesFormat::Text,
        }
    }
}

/// Inflects names against a loaded rule table.
///
/// The table is shared behind an [`Arc`] and never mutated once loaded, so a
/// `Petrovich` is cheap to clone and safe to use from many threads. Loading
/// a new table replaces the previous one as a whole; a failed load leaves the
/// previous table in place.
///
/// # Example
///
/// ```
/// use petrovich::{Gender, GrammaticalCase, Petrovich, RulesFormat};
///
/// let mut petrovich = Petrovich::new();
/// petrovich
///     .load_rules_str(
///         r#"firstname { suffixes { male = "р" => "а", "у", "а", "ом", "е"; } }"#,
///         RulesFormat::Text,
///     )
///     .unwrap();
///
/// let name = petrovich
///     .inflect_first_name("Александр", GrammaticalCase::Dative, Some(Gender::Male))
///     .unwrap();
/// assert_eq!(name, "Александру");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Petrovich {
    /// The loaded rule table, if any.
    #[builder(into)]
    rules: Option<Arc<RuleTable>>,

    /// File the rules came from, for `reload_rules`.
    #[builder(skip)]
    source_path: Option<PathBuf>,
}

impl Petrovich {
    /// Create a `Petrovich` with no rules loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `Petrovich` using the given table.
    pub fn with_rules(rules: impl Into<Arc<RuleTable>>) -> Self {
        Petrovich::builder().rules(rules).build()
    }

    // =========================================================================
    // Rule Loading
    // =========================================================================

    /// Load rules from a file, picking the format from its extension.
    ///
    /// The path is remembered for [`reload_rules`](Self::reload_rules).
    /// Returns the number of rules loaded.
    pub fn load_rules(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table = decode(&content, RulesFormat::from_path(path), path)?;
        let count = self.install(table);
        self.source_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), rules = count, "loaded rule table");
        Ok(count)
    }

    /// Load rules from a string.
    ///
    /// Rules loaded this way cannot be reloaded. Returns the number of rules
    /// loaded.
    pub fn load_rules_str(
        &mut self,
        content: &str,
        format: RulesFormat,
    ) -> Result<usize, LoadError> {
        let table = decode(content, format, Path::new("<string>"))?;
        let count = self.install(table);
        self.source_path = None;
        tracing::debug!(?format, rules = count, "loaded rule table from string");
        Ok(count)
    }

    /// Re-read rules from the file they were last loaded from.
    pub fn reload_rules(&mut self) -> Result<usize, LoadError> {
        let path = self.source_path.clone().ok_or(LoadError::NoPathForReload)?;
        tracing::debug!(path = %path.display(), "reloading rule table");
        self.load_rules(path)
    }

    /// Replace the rule table with an already built one.
    pub fn set_rules(&mut self, rules: impl Into<Arc<RuleTable>>) {
        self.rules = Some(rules.into());
        self.source_path = None;
    }

    /// The loaded rule table.
    pub fn rules(&self) -> Result<&RuleTable, InflectError> {
        self.rules.as_deref().ok_or(InflectError::RulesNotLoaded)
    }

    /// The rule set for one kind of name part.
    pub fn rule_set(&self, kind: NamePartKind) -> Result<&RuleSet, InflectError> {
        self.rules()?
            .get(kind)
            .ok_or(InflectError::MissingRuleSet { kind })
    }

    fn install(&mut self, table: RuleTable) -> usize {
        for (kind, rules) in table.iter() {
            tracing::debug!(
                %kind,
                exceptions = rules.exceptions().len(),
                suffixes = rules.suffixes().len(),
                "rule set"
            );
        }
        let count = table.rule_count();
        self.rules = Some(Arc::new(table));
        count
    }

    // =========================================================================
    // Inflection
    // =========================================================================

    /// Inflect a last name.
    ///
    /// Without an explicit gender only androgynous rules apply.
    pub fn inflect_last_name(
        &self,
        name: &str,
        case: GrammaticalCase,
        gender: Option<Gender>,
    ) -> Result<String, InflectError> {
        self.inflect_part(NamePartKind::Last, name, case, gender)
    }

    /// Inflect a first name.
    ///
    /// Without an explicit gender only androgynous rules apply.
    pub fn inflect_first_name(
        &self,
        name: &str,
        case: GrammaticalCase,
        gender: Option<Gender>,
    ) -> Result<String, InflectError> {
        self.inflect_part(NamePartKind::First, name, case, gender)
    }

    /// Inflect a middle name (patronymic).
    ///
    /// Without an explicit gender it is detected from the name itself.
    pub fn inflect_middle_name(
        &self,
        name: &str,
        case: GrammaticalCase,
        gender: Option<Gender>,
    ) -> Result<String, InflectError> {
        self.inflect_part(NamePartKind::Middle, name, case, gender)
    }

    /// Alias of [`inflect_middle_name`](Self::inflect_middle_name).
    pub fn inflect_patronymic(
        &self,
        name: &str,
        case: GrammaticalCase,
        gender: Option<Gender>,
    ) -> Result<String, InflectError> {
        self.inflect_middle_name(name, case, gender)
    }

    /// Inflect one name part of the given kind.
    ///
    /// A missing gender is detected from a record holding only this part.
    pub fn inflect_part(
        &self,
        kind: NamePartKind,
        name: &str,
        case: GrammaticalCase,
        gender: Option<Gender>,
    ) -> Result<String, InflectError> {
        let rules = self.rule_set(kind)?;
        let gender = gender.unwrap_or_else(|| detect_gender(&NameParts::only(kind, name)));
        Ok(inflect(name, case, gender, rules))
    }

    /// Inflect every present part of a full name.
    ///
    /// The record's gender, explicit or detected from its middle name, is
    /// used for all parts and is set on the result.
    ///
    /// # Example
    ///
    /// ```
    /// use petrovich::{GrammaticalCase, NameParts, Petrovich, RulesFormat};
    ///
    /// let mut petrovich = Petrovich::new();
    /// petrovich
    ///     .load_rules_str(
    ///         r#"
    ///         firstname { suffixes { female = "а" => "-ы", "-е", "-у", "-ой", "-е"; } }
    ///         middlename { suffixes { female = "на" => "-ы", "-е", "-у", "-ой", "-е"; } }
    ///         "#,
    ///         RulesFormat::Text,
    ///     )
    ///     .unwrap();
    ///
    /// let name = NameParts::builder()
    ///     .first_name("Анна")
    ///     .middle_name("Андреевна")
    ///     .build();
    /// let genitive = petrovich.inflect_name(&name, GrammaticalCase::Genitive).unwrap();
    /// assert_eq!(genitive.to_string(), "Анны Андреевны");
    /// ```
    pub fn inflect_name(
        &self,
        parts: &NameParts,
        case: GrammaticalCase,
    ) -> Result<NameParts, InflectError> {
        self.rules()?;
        let gender = parts.gender_or_detected();

        let mut inflected = NameParts {
            gender: Some(gender),
            ..NameParts::default()
        };
        for kind in NamePartKind::ALL {
            if let Some(name) = parts.get(kind) {
                let rules = self.rule_set(kind)?;
                inflected = inflected.with(kind, inflect(name, case, gender, rules));
            }
        }
        Ok(inflected)
    }

    /// All six case forms of a name part, in [`GrammaticalCase::ALL`] order.
    pub fn declension(
        &self,
        kind: NamePartKind,
        name: &str,
        gender: Option<Gender>,
    ) -> Result<[String; 6], InflectError> {
        let rules = self.rule_set(kind)?;
        let gender = gender.unwrap_or_else(|| detect_gender(&NameParts::only(kind, name)));
        Ok(GrammaticalCase::ALL.map(|case| inflect(name, case, gender, rules)))
    }
}

/// Decode a rule table, attributing errors to `path`.
fn decode(content: &str, format: RulesFormat, path: &Path) -> Result<RuleTable, LoadError> {
    match format {
        RulesFormat::Json => RuleTable::from_json(content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        RulesFormat::Text => parse_rules(content).map_err(|e| parse_error(path, &e)),
    }
}

fn parse_error(path: &Path, error: &ParseError) -> LoadError {
    let (line, column) = error.location();
    LoadError::Parse {
        path: path.to_path_buf(),
        line,
        column,
        message: error.message(),
    }
}
