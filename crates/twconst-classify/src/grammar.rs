//! Identifier grammar of the generated constants.
//!
//! A [`TargetGrammar`] bundles the static data that decides what a valid
//! constant name looks like: reserved words, the negation prefix, the
//! leading-digit prefix and the reserved-word suffix. Every generated name
//! matches `[A-Z][A-Z0-9_]*` and is not a reserved word (bespoke names such
//! as `DEFAULT` excepted, see [`Namer`](crate::Namer)).
//!
//! [`TargetGrammar::sanitize`] is the generic fallback that turns any string
//! into a valid identifier. [`TargetGrammar::repair`] is the lighter pass run
//! over the output of bespoke naming rules.

use deunicode::deunicode;

/// The 50 Java keywords, upper-cased.
pub const JAVA_RESERVED_WORDS: &[&str] = &[
    "ABSTRACT",
    "ASSERT",
    "BOOLEAN",
    "BREAK",
    "BYTE",
    "CASE",
    "CATCH",
    "CHAR",
    "CLASS",
    "CONST",
    "CONTINUE",
    "DEFAULT",
    "DO",
    "DOUBLE",
    "ELSE",
    "ENUM",
    "EXTENDS",
    "FINAL",
    "FINALLY",
    "FLOAT",
    "FOR",
    "GOTO",
    "IF",
    "IMPLEMENTS",
    "IMPORT",
    "INSTANCEOF",
    "INT",
    "INTERFACE",
    "LONG",
    "NATIVE",
    "NEW",
    "PACKAGE",
    "PRIVATE",
    "PROTECTED",
    "PUBLIC",
    "RETURN",
    "SHORT",
    "STATIC",
    "STRICTFP",
    "SUPER",
    "SWITCH",
    "SYNCHRONIZED",
    "THIS",
    "THROW",
    "THROWS",
    "TRANSIENT",
    "TRY",
    "VOID",
    "VOLATILE",
    "WHILE",
];

/// Static description of the target language's constant-name grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGrammar {
    /// Upper-cased words that may not be used as a bare identifier.
    pub reserved_words: &'static [&'static str],
    /// Prepended to names derived from negative utilities (`-mt-2`).
    pub negation_prefix: &'static str,
    /// Prepended to names that would not start with a letter.
    pub digit_prefix: &'static str,
    /// Appended to names that collide with a reserved word.
    pub reserved_suffix: &'static str,
}

impl TargetGrammar {
    /// Java `public static final` constants.
    pub const JAVA: TargetGrammar = TargetGrammar {
        reserved_words: JAVA_RESERVED_WORDS,
        negation_prefix: "NEG_",
        digit_prefix: "N",
        reserved_suffix: "_CLASS",
    };

    /// Turns an arbitrary string into a valid identifier.
    ///
    /// Steps, in order: strip escape backslashes, split off a leading `-`,
    /// fold `-`, `.` and `/` to `_`, upper-case, prefix the negation marker,
    /// prefix the digit marker when the first character is not a letter,
    /// and append the reserved suffix on a reserved-word hit.
    ///
    /// ```
    /// use twconst_classify::TargetGrammar;
    ///
    /// let java = TargetGrammar::JAVA;
    /// assert_eq!(java.sanitize("foo-bar-baz"), "FOO_BAR_BAZ");
    /// assert_eq!(java.sanitize("-translate-x-1/2"), "NEG_TRANSLATE_X_1_2");
    /// assert_eq!(java.sanitize("2xl"), "N2XL");
    /// assert_eq!(java.sanitize("static"), "STATIC_CLASS");
    /// ```
    pub fn sanitize(&self, raw: &str) -> String {
        let normalized = normalize(raw);
        let (negative, body) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let mut ident = fold_chars(&upper_snake(body));
        if negative {
            ident.insert_str(0, self.negation_prefix);
        }
        if !starts_with_letter(&ident) {
            ident.insert_str(0, self.digit_prefix);
        }
        if self.is_reserved(&ident) {
            ident.push_str(self.reserved_suffix);
        }
        ident
    }

    /// Forces a candidate produced by a naming rule into the grammar.
    ///
    /// Non-ASCII letters are transliterated, anything outside
    /// `[A-Za-z0-9_]` becomes `_`, letters are upper-cased, and the digit
    /// prefix is added when the first character is not a letter. Valid
    /// identifiers come back unchanged. Reserved words are left alone.
    pub fn repair(&self, candidate: &str) -> String {
        if self.matches_shape(candidate) {
            return candidate.to_string();
        }
        let mut ident = fold_chars(&candidate.to_ascii_uppercase());
        if !starts_with_letter(&ident) {
            ident.insert_str(0, self.digit_prefix);
        }
        ident
    }

    /// Returns `true` if `ident` matches `[A-Z][A-Z0-9_]*` and is not a
    /// reserved word.
    pub fn is_valid(&self, ident: &str) -> bool {
        self.matches_shape(ident) && !self.is_reserved(ident)
    }

    /// Returns `true` if `ident` is one of the grammar's reserved words.
    pub fn is_reserved(&self, ident: &str) -> bool {
        self.reserved_words.contains(&ident)
    }

    fn matches_shape(&self, ident: &str) -> bool {
        starts_with_letter(ident)
            && ident
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
    }
}

impl Default for TargetGrammar {
    fn default() -> Self {
        TargetGrammar::JAVA
    }
}

/// Sanitizes `raw` with the Java grammar.
pub fn sanitize(raw: &str) -> String {
    TargetGrammar::JAVA.sanitize(raw)
}

/// Strips backslash escape markers left over from CSS selectors
/// (`w-1\/2` → `w-1/2`).
pub fn normalize(raw: &str) -> String {
    raw.replace('\\', "")
}

/// Folds the separators `-`, `.` and `/` to `_` and upper-cases.
pub fn upper_snake(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '-' | '.' | '/' => '_',
            other => other,
        })
        .collect::<String>()
        .to_uppercase()
}

fn starts_with_letter(ident: &str) -> bool {
    ident.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
}

/// Transliterates and replaces every character outside `[A-Z0-9_]`.
fn fold_chars(s: &str) -> String {
    let ascii = if s.is_ascii() {
        s.to_string()
    } else {
        deunicode(s).to_ascii_uppercase()
    };
    ascii
        .chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_folds_separators() {
        assert_eq!(sanitize("foo-bar-baz"), "FOO_BAR_BAZ");
        assert_eq!(sanitize("w-1/2"), "W_1_2");
        assert_eq!(sanitize("p-0.5"), "P_0_5");
    }

    #[test]
    fn sanitize_strips_escapes() {
        assert_eq!(sanitize(r"w-1\/2"), "W_1_2");
        assert_eq!(sanitize(r"p-0\.5"), "P_0_5");
    }

    #[test]
    fn sanitize_negative() {
        assert_eq!(sanitize("-mt-2"), "NEG_MT_2");
        assert_eq!(sanitize("-"), "NEG_");
    }

    #[test]
    fn sanitize_leading_digit() {
        assert_eq!(sanitize("2xl"), "N2XL");
        assert_eq!(sanitize(""), "N");
        assert_eq!(sanitize("_foo"), "N_FOO");
    }

    #[test]
    fn sanitize_reserved_words() {
        assert_eq!(sanitize("static"), "STATIC_CLASS");
        assert_eq!(sanitize("default"), "DEFAULT_CLASS");
        assert_eq!(sanitize("statics"), "STATICS");
    }

    #[test]
    fn sanitize_replaces_foreign_characters() {
        assert_eq!(sanitize("aspect-[4:3]"), "ASPECT__4_3_");
        assert_eq!(sanitize("größe"), "GROSSE");
    }

    #[test]
    fn repair_is_identity_on_valid_identifiers() {
        let java = TargetGrammar::JAVA;
        assert_eq!(java.repair("LEFT_4"), "LEFT_4");
        assert_eq!(java.repair("DEFAULT"), "DEFAULT");
    }

    #[test]
    fn repair_fixes_shape() {
        let java = TargetGrammar::JAVA;
        assert_eq!(java.repair("START-0"), "START_0");
        assert_eq!(java.repair("1_2"), "N1_2");
        assert_eq!(java.repair("x:y"), "X_Y");
        assert_eq!(java.repair(""), "N");
    }

    #[test]
    fn validity() {
        let java = TargetGrammar::JAVA;
        assert!(java.is_valid("W_1_2"));
        assert!(!java.is_valid("1_2"));
        assert!(!java.is_valid("w_1"));
        assert!(!java.is_valid("CLASS"));
        assert!(!java.is_valid(""));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(r"\\w-1\/2");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn reserved_list_has_fifty_words() {
        assert_eq!(JAVA_RESERVED_WORDS.len(), 50);
    }
}
