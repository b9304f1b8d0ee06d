//! Utility class extraction from compiled CSS.
//!
//! The stylesheet is walked with `cssparser` (the tokenizer used by Firefox),
//! which resolves selector escapes (`.w-1\/2` reads as `w-1/2`). Every class
//! selector in a qualified rule's prelude is collected, including those
//! inside pseudo-class functions such as `:where(.space-x-4 > *)`. Rules
//! nested in grouping at-rules (`@layer`, `@media`, `@supports`, ...) are
//! walked too; other at-rules are skipped.
//!
//! Rules the parser rejects are counted and skipped.

use std::collections::BTreeSet;

use cssparser::{
    AtRuleParser, CowRcStr, ParseError, Parser, ParserInput, ParserState, QualifiedRuleParser,
    Token,
};
use twconst_classify::normalize;

/// At-rules whose block contains further rules.
const NESTING_AT_RULES: &[&str] = &[
    "media",
    "supports",
    "layer",
    "container",
    "document",
    "scope",
    "starting-style",
];

/// The result of walking a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedClasses {
    /// Distinct utility class names, normalized.
    pub classes: BTreeSet<String>,
    /// Number of rules the parser could not read.
    pub skipped_rules: usize,
}

impl ExtractedClasses {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Returns `true` for names kept as utilities: not a `group*`/`peer*`
/// marker and not a variant selector (`hover:bg-red-500`).
pub fn is_utility_class(name: &str) -> bool {
    !name.starts_with("group") && !name.starts_with("peer") && !name.contains(':')
}

/// Collects every utility class selector in `css`.
///
/// ```
/// use twconst_extract::extract_class_names;
///
/// let css = r".flex{display:flex}.w-1\/2{width:50%}.hover\:underline:hover{}";
/// let extracted = extract_class_names(css);
/// let names: Vec<&str> = extracted.classes.iter().map(String::as_str).collect();
/// assert_eq!(names, ["flex", "w-1/2"]);
/// ```
pub fn extract_class_names(css: &str) -> ExtractedClasses {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut walker = ClassWalker::default();
    let skipped = walk_rules(&mut parser, &mut walker);
    walker.skipped += skipped;

    let classes: BTreeSet<String> = walker
        .found
        .into_iter()
        .map(|name| normalize(&name))
        .filter(|name| is_utility_class(name))
        .collect();

    if walker.skipped > 0 {
        tracing::warn!(skipped = walker.skipped, "skipped unreadable CSS rules");
    }
    tracing::debug!(classes = classes.len(), "extracted utility classes");

    ExtractedClasses {
        classes,
        skipped_rules: walker.skipped,
    }
}

/// Runs the rule list parser over `input` and returns how many rules failed.
fn walk_rules<'i, 't>(input: &mut Parser<'i, 't>, walker: &mut ClassWalker) -> usize {
    let rules = cssparser::StyleSheetParser::new(input, walker);
    let mut failed = 0;
    for result in rules {
        if let Err((err, slice)) = result {
            tracing::debug!(?err, rule = slice, "skipping CSS rule");
            failed += 1;
        }
    }
    failed
}

#[derive(Default)]
struct ClassWalker {
    found: Vec<String>,
    skipped: usize,
}

/// Pushes the name of every `.ident` in `input`, descending into function
/// and bracket blocks.
fn collect_classes<'i, 't>(
    input: &mut Parser<'i, 't>,
    names: &mut Vec<String>,
) -> Result<(), ParseError<'i, ()>> {
    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::Delim('.') => {
                if let Ok(Token::Ident(name)) = input.next_including_whitespace() {
                    names.push(name.as_ref().to_string());
                }
            }
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                input.parse_nested_block(|nested| collect_classes(nested, names))?;
            }
            _ => {}
        }
    }
}

impl<'i> QualifiedRuleParser<'i> for ClassWalker {
    type Prelude = Vec<String>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut names = Vec::new();
        collect_classes(input, &mut names)?;
        Ok(names)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        // Declarations and nested rules carry no new top-level selectors.
        while input.next().is_ok() {}
        self.found.extend(prelude);
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for ClassWalker {
    /// Whether the block holds nested rules.
    type Prelude = bool;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        while input.next().is_ok() {}
        let nesting = NESTING_AT_RULES
            .iter()
            .any(|n| name.eq_ignore_ascii_case(n));
        Ok(nesting)
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        nesting: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        if nesting {
            let failed = walk_rules(input, self);
            self.skipped += failed;
        }
        while input.next().is_ok() {}
        Ok(())
    }
}
