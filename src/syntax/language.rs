// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tart word lists.
//!
//! Each reserved word belongs to exactly one class. Lookups go through a single
//! table keyed by the word so the scanner classifies an identifier run with one
//! hash probe.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::syntax::scanner::TokenCategory;

/// File extension of Tart sources.
pub const TART_EXTENSION: &str = "tart";

/// Statement keywords.
pub const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "repeat", "for", "while", "return", "yield", "throw", "break", "continue",
    "where", "switch", "case", "classify", "as", "try", "catch", "finally", "using", "import",
];

/// Declaration keywords.
pub const DECLARATION_KEYWORDS: &[&str] = &[
    "namespace", "class", "struct", "interface", "protocol", "enum", "let", "var", "def", "undef",
    "override", "fn", "get", "set", "macro", "friend",
];

/// Keywords used as operators.
pub const OPERATOR_KEYWORDS: &[&str] = &["and", "or", "not", "is", "in", "isa"];

/// Built-in type names.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "byte", "short", "int", "long", "ubyte", "ushort", "uint", "ulong", "float",
    "double", "void",
];

/// Access modifiers.
pub const VISIBILITY_KEYWORDS: &[&str] = &["public", "private", "protected", "internal"];

/// Declaration modifiers.
pub const MODIFIER_KEYWORDS: &[&str] = &[
    "const", "constable", "mutable", "readonly", "static", "abstract", "final", "optional",
];

/// Built-in symbols.
pub const SPECIAL_KEYWORDS: &[&str] = &["self", "super", "true", "false", "null", "typecast"];

/// Every reserved word mapped to its category.
static KEYWORD_MAP: Lazy<HashMap<&'static str, TokenCategory>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let classes: [(&[&'static str], TokenCategory); 7] = [
        (STATEMENT_KEYWORDS, TokenCategory::StatementKeyword),
        (DECLARATION_KEYWORDS, TokenCategory::DeclarationKeyword),
        (OPERATOR_KEYWORDS, TokenCategory::OperatorKeyword),
        (VISIBILITY_KEYWORDS, TokenCategory::Visibility),
        (MODIFIER_KEYWORDS, TokenCategory::DeclarationModifier),
        (BUILTIN_TYPES, TokenCategory::BuiltinType),
        (SPECIAL_KEYWORDS, TokenCategory::BuiltinSymbol),
    ];
    for (words, category) in classes {
        for &word in words {
            map.insert(word, category);
        }
    }
    map
});

/// Returns the keyword category of `word`, if it is reserved.
pub fn keyword_category(word: &str) -> Option<TokenCategory> {
    KEYWORD_MAP.get(word).copied()
}

/// Returns the number of reserved words.
pub fn keyword_count() -> usize {
    KEYWORD_MAP.len()
}

/// Returns true if `path` names a Tart source file.
pub fn is_tart_source<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TART_EXTENSION))
}
