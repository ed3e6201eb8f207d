//! Stable diagnostic codes.
//!
//! Every code has a textual id (`SynExpectSemicolon`), used by tests and
//! golden files, and a numeric id whose prefix gives its default severity
//! and whose first digit gives the phase:
//! - `x0xxx`: lexer
//! - `x1xxx`: parser
//! - `x19xx`: reserved syntax that is not supported yet

use std::fmt;

use crate::Severity;

/// Machine-readable diagnostic identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
    // Lexer
    LexInvalidCharacter,
    LexUnterminatedString,
    LexUnterminatedComment,

    // Unexpected token in a known position
    SynUnexpectedToken,
    SynUnexpectedTopLevel,
    SynUnexpectedModifier,
    SynModifierNotAllowed,
    SynAttributeNotAllowed,
    SynInvalidAttributeArgs,
    SynFatArrowOutsideParallel,
    SynAsyncNotAllowed,
    SynTypeNotAllowed,

    // Missing token
    SynExpectSemicolon,
    SynExpectColon,
    SynExpectComma,
    SynExpectFatArrow,
    SynExpectIdentifier,
    SynExpectExpression,
    SynExpectType,
    SynExpectModuleSeg,
    SynExpectIdentAfterAs,
    SynExpectItemAfterDbl,
    SynTypeExpectEquals,
    SynTypeExpectBody,
    SynForMissingIn,
    SynConstMissingValue,

    // Missing closing delimiter
    SynUnclosedParen,
    SynUnclosedBrace,
    SynUnclosedSquareBracket,
    SynUnclosedAngleBracket,

    // Shape of a node
    SynTypeFieldConflict,
    SynVariadicMustBeLast,
    SynVisibilityReduction,
    SynIllegalItemInExtern,
    SynPragmaPosition,
    SynDuplicateTypeParams,
    SynExpressionTooDeep,
    SynEmptyImportGroup,
    SynInfoImportGroup,
    SynPragmaUnknownFlag,

    // Future syntax
    FutNestedFnNotSupported,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::LexInvalidCharacter,
        ErrorCode::LexUnterminatedString,
        ErrorCode::LexUnterminatedComment,
        ErrorCode::SynUnexpectedToken,
        ErrorCode::SynUnexpectedTopLevel,
        ErrorCode::SynUnexpectedModifier,
        ErrorCode::SynModifierNotAllowed,
        ErrorCode::SynAttributeNotAllowed,
        ErrorCode::SynInvalidAttributeArgs,
        ErrorCode::SynFatArrowOutsideParallel,
        ErrorCode::SynAsyncNotAllowed,
        ErrorCode::SynTypeNotAllowed,
        ErrorCode::SynExpectSemicolon,
        ErrorCode::SynExpectColon,
        ErrorCode::SynExpectComma,
        ErrorCode::SynExpectFatArrow,
        ErrorCode::SynExpectIdentifier,
        ErrorCode::SynExpectExpression,
        ErrorCode::SynExpectType,
        ErrorCode::SynExpectModuleSeg,
        ErrorCode::SynExpectIdentAfterAs,
        ErrorCode::SynExpectItemAfterDbl,
        ErrorCode::SynTypeExpectEquals,
        ErrorCode::SynTypeExpectBody,
        ErrorCode::SynForMissingIn,
        ErrorCode::SynConstMissingValue,
        ErrorCode::SynUnclosedParen,
        ErrorCode::SynUnclosedBrace,
        ErrorCode::SynUnclosedSquareBracket,
        ErrorCode::SynUnclosedAngleBracket,
        ErrorCode::SynTypeFieldConflict,
        ErrorCode::SynVariadicMustBeLast,
        ErrorCode::SynVisibilityReduction,
        ErrorCode::SynIllegalItemInExtern,
        ErrorCode::SynPragmaPosition,
        ErrorCode::SynDuplicateTypeParams,
        ErrorCode::SynExpressionTooDeep,
        ErrorCode::SynEmptyImportGroup,
        ErrorCode::SynInfoImportGroup,
        ErrorCode::SynPragmaUnknownFlag,
        ErrorCode::FutNestedFnNotSupported,
    ];

    /// Textual id, identical to the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::LexInvalidCharacter => "LexInvalidCharacter",
            ErrorCode::LexUnterminatedString => "LexUnterminatedString",
            ErrorCode::LexUnterminatedComment => "LexUnterminatedComment",
            ErrorCode::SynUnexpectedToken => "SynUnexpectedToken",
            ErrorCode::SynUnexpectedTopLevel => "SynUnexpectedTopLevel",
            ErrorCode::SynUnexpectedModifier => "SynUnexpectedModifier",
            ErrorCode::SynModifierNotAllowed => "SynModifierNotAllowed",
            ErrorCode::SynAttributeNotAllowed => "SynAttributeNotAllowed",
            ErrorCode::SynInvalidAttributeArgs => "SynInvalidAttributeArgs",
            ErrorCode::SynFatArrowOutsideParallel => "SynFatArrowOutsideParallel",
            ErrorCode::SynAsyncNotAllowed => "SynAsyncNotAllowed",
            ErrorCode::SynTypeNotAllowed => "SynTypeNotAllowed",
            ErrorCode::SynExpectSemicolon => "SynExpectSemicolon",
            ErrorCode::SynExpectColon => "SynExpectColon",
            ErrorCode::SynExpectComma => "SynExpectComma",
            ErrorCode::SynExpectFatArrow => "SynExpectFatArrow",
            ErrorCode::SynExpectIdentifier => "SynExpectIdentifier",
            ErrorCode::SynExpectExpression => "SynExpectExpression",
            ErrorCode::SynExpectType => "SynExpectType",
            ErrorCode::SynExpectModuleSeg => "SynExpectModuleSeg",
            ErrorCode::SynExpectIdentAfterAs => "SynExpectIdentAfterAs",
            ErrorCode::SynExpectItemAfterDbl => "SynExpectItemAfterDbl",
            ErrorCode::SynTypeExpectEquals => "SynTypeExpectEquals",
            ErrorCode::SynTypeExpectBody => "SynTypeExpectBody",
            ErrorCode::SynForMissingIn => "SynForMissingIn",
            ErrorCode::SynConstMissingValue => "SynConstMissingValue",
            ErrorCode::SynUnclosedParen => "SynUnclosedParen",
            ErrorCode::SynUnclosedBrace => "SynUnclosedBrace",
            ErrorCode::SynUnclosedSquareBracket => "SynUnclosedSquareBracket",
            ErrorCode::SynUnclosedAngleBracket => "SynUnclosedAngleBracket",
            ErrorCode::SynTypeFieldConflict => "SynTypeFieldConflict",
            ErrorCode::SynVariadicMustBeLast => "SynVariadicMustBeLast",
            ErrorCode::SynVisibilityReduction => "SynVisibilityReduction",
            ErrorCode::SynIllegalItemInExtern => "SynIllegalItemInExtern",
            ErrorCode::SynPragmaPosition => "SynPragmaPosition",
            ErrorCode::SynDuplicateTypeParams => "SynDuplicateTypeParams",
            ErrorCode::SynExpressionTooDeep => "SynExpressionTooDeep",
            ErrorCode::SynEmptyImportGroup => "SynEmptyImportGroup",
            ErrorCode::SynInfoImportGroup => "SynInfoImportGroup",
            ErrorCode::SynPragmaUnknownFlag => "SynPragmaUnknownFlag",
            ErrorCode::FutNestedFnNotSupported => "FutNestedFnNotSupported",
        }
    }

    /// Numeric id (`E1010`, `W1001`, …).
    pub const fn number(self) -> &'static str {
        match self {
            ErrorCode::LexInvalidCharacter => "E0001",
            ErrorCode::LexUnterminatedString => "E0002",
            ErrorCode::LexUnterminatedComment => "E0003",
            ErrorCode::SynUnexpectedToken => "E1001",
            ErrorCode::SynUnexpectedTopLevel => "E1002",
            ErrorCode::SynUnexpectedModifier => "E1003",
            ErrorCode::SynModifierNotAllowed => "E1004",
            ErrorCode::SynAttributeNotAllowed => "E1005",
            ErrorCode::SynInvalidAttributeArgs => "E1006",
            ErrorCode::SynFatArrowOutsideParallel => "E1007",
            ErrorCode::SynAsyncNotAllowed => "E1008",
            ErrorCode::SynTypeNotAllowed => "E1009",
            ErrorCode::SynExpectSemicolon => "E1010",
            ErrorCode::SynExpectColon => "E1011",
            ErrorCode::SynExpectComma => "E1012",
            ErrorCode::SynExpectFatArrow => "E1013",
            ErrorCode::SynExpectIdentifier => "E1014",
            ErrorCode::SynExpectExpression => "E1015",
            ErrorCode::SynExpectType => "E1016",
            ErrorCode::SynExpectModuleSeg => "E1017",
            ErrorCode::SynExpectIdentAfterAs => "E1018",
            ErrorCode::SynExpectItemAfterDbl => "E1019",
            ErrorCode::SynTypeExpectEquals => "E1020",
            ErrorCode::SynTypeExpectBody => "E1021",
            ErrorCode::SynForMissingIn => "E1022",
            ErrorCode::SynConstMissingValue => "E1023",
            ErrorCode::SynUnclosedParen => "E1024",
            ErrorCode::SynUnclosedBrace => "E1025",
            ErrorCode::SynUnclosedSquareBracket => "E1026",
            ErrorCode::SynUnclosedAngleBracket => "E1027",
            ErrorCode::SynTypeFieldConflict => "E1028",
            ErrorCode::SynVariadicMustBeLast => "E1029",
            ErrorCode::SynVisibilityReduction => "E1030",
            ErrorCode::SynIllegalItemInExtern => "E1031",
            ErrorCode::SynPragmaPosition => "E1032",
            ErrorCode::SynDuplicateTypeParams => "E1033",
            ErrorCode::SynExpressionTooDeep => "E1034",
            ErrorCode::SynEmptyImportGroup => "W1001",
            ErrorCode::SynPragmaUnknownFlag => "W1002",
            ErrorCode::SynInfoImportGroup => "I1001",
            ErrorCode::FutNestedFnNotSupported => "E1901",
        }
    }

    /// Severity a diagnostic with this code is reported at.
    pub const fn default_severity(self) -> Severity {
        match self {
            ErrorCode::SynEmptyImportGroup | ErrorCode::SynPragmaUnknownFlag => Severity::Warning,
            ErrorCode::SynInfoImportGroup => Severity::Info,
            _ => Severity::Error,
        }
    }

    /// Look a code up by its textual or numeric id.
    pub fn from_str_id(s: &str) -> Option<ErrorCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s || code.number().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
