//! Rule file format parser.

use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;
use crate::rules::{Rule, RuleSet, RuleTable};
use crate::types::{Gender, NamePartKind, Tag};

/// A `lastname { ... }` block. `at` is the remaining input length where the
/// block starts.
struct KindBlock {
    at: usize,
    kind: NamePartKind,
    sections: Vec<SectionBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Exceptions,
    Suffixes,
}

struct SectionBlock {
    at: usize,
    section: Section,
    rules: Vec<RuleDefinition>,
}

struct RuleDefinition {
    at: usize,
    gender: Gender,
    tags: Vec<Tag>,
    test: Vec<String>,
    mods: Vec<String>,
}

/// Parse a rule file into a [`RuleTable`].
///
/// A kind block or a section may appear at most once.
pub fn parse_rules(input: &str) -> Result<RuleTable, ParseError> {
    let mut remaining = input;
    let blocks = match file(&mut remaining) {
        Ok(blocks) => blocks,
        Err(e) => return Err(error_at(input, remaining, &e)),
    };

    if !remaining.is_empty() {
        let (line, column) = position(input, input.len() - remaining.len());
        return Err(ParseError::Syntax {
            line,
            column,
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        });
    }

    assemble(input, blocks)
}

/// Convert a winnow failure into a located error.
fn error_at(input: &str, remaining: &str, error: &ErrMode<ContextError>) -> ParseError {
    let (line, column) = position(input, input.len() - remaining.len());
    if remaining.is_empty() {
        return ParseError::UnexpectedEof { line, column };
    }

    let message = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.to_string(),
        ErrMode::Incomplete(_) => String::new(),
    };
    let message = if message.is_empty() {
        format!(
            "unexpected character: '{}'",
            remaining.chars().next().unwrap_or('?')
        )
    } else {
        message
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate a 1-based line and character column from a byte offset.
fn position(original: &str, offset: usize) -> (usize, usize) {
    let consumed = &original[..offset];
    let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
    let line_start = consumed.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed[line_start..].chars().count() + 1;
    (line, column)
}

/// Position of an AST node recorded as a remaining input length.
fn position_of(original: &str, at: usize) -> (usize, usize) {
    position(original, original.len() - at)
}

/// Build the table, rejecting duplicate blocks and invalid rules.
fn assemble(input: &str, blocks: Vec<KindBlock>) -> Result<RuleTable, ParseError> {
    let mut table = RuleTable::new();

    for block in blocks {
        if table.get(block.kind).is_some() {
            let (line, column) = position_of(input, block.at);
            return Err(ParseError::Syntax {
                line,
                column,
                message: format!("duplicate block '{}'", block.kind),
            });
        }

        let mut exceptions: Option<Vec<Rule>> = None;
        let mut suffixes: Option<Vec<Rule>> = None;
        for section in block.sections {
            let (slot, name) = match section.section {
                Section::Exceptions => (&mut exceptions, "exceptions"),
                Section::Suffixes => (&mut suffixes, "suffixes"),
            };
            if slot.is_some() {
                let (line, column) = position_of(input, section.at);
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("duplicate section '{name}' in '{}'", block.kind),
                });
            }

            let rules = section
                .rules
                .into_iter()
                .map(|definition| build_rule(input, definition))
                .collect::<Result<Vec<Rule>, ParseError>>()?;
            *slot = Some(rules);
        }

        table = table.with(
            block.kind,
            RuleSet::new(
                exceptions.unwrap_or_default(),
                suffixes.unwrap_or_default(),
            ),
        );
    }

    Ok(table)
}

fn build_rule(input: &str, definition: RuleDefinition) -> Result<Rule, ParseError> {
    Rule::new(
        definition.gender,
        definition.test,
        definition.mods,
        definition.tags,
    )
    .map_err(|source| {
        let (line, column) = position_of(input, definition.at);
        ParseError::Rule {
            line,
            column,
            source,
        }
    })
}

fn expected(what: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(what))
}

/// Parse an entire file into kind blocks.
fn file(input: &mut &str) -> ModalResult<Vec<KindBlock>> {
    skip_ws_and_comments(input)?;
    let blocks: Vec<KindBlock> =
        repeat(0.., terminated(kind_block, skip_ws_and_comments)).parse_next(input)?;
    Ok(blocks)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c: char| c != '\n')).parse_next(input)
}

/// Parse a kind block: lastname { section* }
fn kind_block(input: &mut &str) -> ModalResult<KindBlock> {
    let at = input.len();
    let kind = kind_name(input)?;

    let sections: Vec<SectionBlock> = cut_err(preceded(
        (skip_ws_and_comments, '{'.context(expected("'{'")), skip_ws_and_comments),
        terminated(
            repeat(0.., terminated(section_block, skip_ws_and_comments)),
            '}'.context(expected("'exceptions', 'suffixes' or '}'")),
        ),
    ))
    .parse_next(input)?;

    Ok(KindBlock { at, kind, sections })
}

fn kind_name(input: &mut &str) -> ModalResult<NamePartKind> {
    alt((
        "lastname".value(NamePartKind::Last),
        "firstname".value(NamePartKind::First),
        "middlename".value(NamePartKind::Middle),
    ))
    .parse_next(input)
}

/// Parse a section: exceptions { rule* } or suffixes { rule* }
fn section_block(input: &mut &str) -> ModalResult<SectionBlock> {
    let at = input.len();
    let section = alt((
        "exceptions".value(Section::Exceptions),
        "suffixes".value(Section::Suffixes),
    ))
    .parse_next(input)?;

    let rules: Vec<RuleDefinition> = cut_err(preceded(
        (skip_ws_and_comments, '{'.context(expected("'{'")), skip_ws_and_comments),
        terminated(
            repeat(0.., terminated(rule_definition, skip_ws_and_comments)),
            '}'.context(expected("a gender or '}'")),
        ),
    ))
    .parse_next(input)?;

    Ok(SectionBlock { at, section, rules })
}

/// Parse a rule: gender :tag* = "test", ... => "mod", ... ;
fn rule_definition(input: &mut &str) -> ModalResult<RuleDefinition> {
    let at = input.len();
    let gender = gender(input)?;

    let (tags, test, mods): (Vec<Tag>, Vec<String>, Vec<String>) = cut_err((
        preceded(
            skip_ws_and_comments,
            repeat(0.., terminated(tag, skip_ws_and_comments)),
        ),
        preceded(
            ('='.context(expected("'='")), skip_ws_and_comments),
            string_list,
        ),
        preceded(
            (
                skip_ws_and_comments,
                "=>".context(expected("'=>'")),
                skip_ws_and_comments,
            ),
            string_list,
        ),
    ))
    .parse_next(input)?;

    cut_err((skip_ws_and_comments, ';'.context(expected("';'")))).parse_next(input)?;

    Ok(RuleDefinition {
        at,
        gender,
        tags,
        test,
        mods,
    })
}

fn gender(input: &mut &str) -> ModalResult<Gender> {
    alt((
        "male".value(Gender::Male),
        "female".value(Gender::Female),
        "androgynous".value(Gender::Androgynous),
    ))
    .parse_next(input)
}

/// Parse a tag: :name
fn tag(input: &mut &str) -> ModalResult<Tag> {
    preceded(
        ':',
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
    .map(|s: &str| Tag::new(s))
    .parse_next(input)
}

/// Parse one or more comma-separated string literals.
fn string_list(input: &mut &str) -> ModalResult<Vec<String>> {
    separated(
        1..,
        string_literal,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)
}

/// Parse a string literal: "text"
fn string_literal(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"'.context(expected("a string literal")),
        take_while(0.., |c: char| c != '"' && c != '\n'),
        '"'.context(expected("closing '\"'")),
    )
    .map(|s: &str| s.to_string())
    .parse_next(input)
}
