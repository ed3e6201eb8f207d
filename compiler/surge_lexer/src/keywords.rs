//! Keyword resolution.
//!
//! Keywords are 2 to 8 ASCII letters long. The identifier length is used as a
//! first-pass filter before matching against the keywords of that length.
//! Contextual words (`blocking`, `unsafe`, `format`) are plain identifiers
//! and are recognised by the parser where they matter.

use surge_ir::TokenKind;

#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=8).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "as" => Some(TokenKind::As),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "to" => Some(TokenKind::To),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            "mut" => Some(TokenKind::Mut),
            "own" => Some(TokenKind::Own),
            "pub" => Some(TokenKind::Pub),
            "tag" => Some(TokenKind::Tag),
            "for" => Some(TokenKind::For),
            "map" => Some(TokenKind::Map),
            _ => None,
        },
        4 => match text {
            "type" => Some(TokenKind::Type),
            "enum" => Some(TokenKind::Enum),
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            "race" => Some(TokenKind::Race),
            "with" => Some(TokenKind::With),
            _ => None,
        },
        5 => match text {
            "const" => Some(TokenKind::Const),
            "async" => Some(TokenKind::Async),
            "field" => Some(TokenKind::Field),
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "false" => Some(TokenKind::False),
            "spawn" => Some(TokenKind::Spawn),
            "await" => Some(TokenKind::Await),
            _ => None,
        },
        6 => match text {
            "extern" => Some(TokenKind::Extern),
            "import" => Some(TokenKind::Import),
            "return" => Some(TokenKind::Return),
            "signal" => Some(TokenKind::Signal),
            "select" => Some(TokenKind::Select),
            "reduce" => Some(TokenKind::Reduce),
            "pragma" => Some(TokenKind::Pragma),
            _ => None,
        },
        7 => match text {
            "nothing" => Some(TokenKind::Nothing),
            "compare" => Some(TokenKind::Compare),
            "finally" => Some(TokenKind::Finally),
            "default" => Some(TokenKind::Default),
            _ => None,
        },
        8 => match text {
            "contract" => Some(TokenKind::Contract),
            "continue" => Some(TokenKind::Continue),
            "parallel" => Some(TokenKind::Parallel),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use surge_ir::TokenKind;

    #[test]
    fn every_keyword_resolves() {
        for (text, kind) in TokenKind::KEYWORDS {
            assert_eq!(lookup(text), Some(kind), "keyword `{text}`");
        }
    }

    #[test]
    fn identifiers_are_not_keywords() {
        for text in ["x", "main", "Fn", "blocking", "unsafe", "format", "letter", "contracts"] {
            assert_eq!(lookup(text), None, "`{text}`");
        }
    }
}
