//! Token kinds.

/// Kind of a lexed token.
///
/// Discriminants are dense and below 128 so the parser can keep token sets
/// in a single `u128` bitset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Delimiters and punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    ColonColon,
    Dot,
    DotDot,
    DotDotEq,
    DotDotDot,
    At,
    Question,
    QuestionQuestion,
    Bang,
    Arrow,
    FatArrow,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    AndAnd,
    OrOr,
    EqEq,
    BangEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Keywords
    Fn,
    Let,
    Mut,
    Own,
    Const,
    Pub,
    Async,
    Extern,
    Import,
    As,
    Type,
    Contract,
    Tag,
    Enum,
    Field,
    Return,
    If,
    Else,
    While,
    For,
    In,
    Break,
    Continue,
    Is,
    To,
    Nothing,
    True,
    False,
    Signal,
    Compare,
    Finally,
    Select,
    Race,
    Default,
    Parallel,
    Map,
    Reduce,
    With,
    Spawn,
    Await,
    Pragma,

    // Literals
    IntLit,
    UintLit,
    FloatLit,
    StringLit,
    FStringLit,

    // Names
    Ident,
    Underscore,

    // Special
    Eof,
    Invalid,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::Invalid as usize + 1;

    /// Every keyword with its source spelling.
    pub const KEYWORDS: [(&'static str, TokenKind); 41] = [
        ("fn", TokenKind::Fn),
        ("let", TokenKind::Let),
        ("mut", TokenKind::Mut),
        ("own", TokenKind::Own),
        ("const", TokenKind::Const),
        ("pub", TokenKind::Pub),
        ("async", TokenKind::Async),
        ("extern", TokenKind::Extern),
        ("import", TokenKind::Import),
        ("as", TokenKind::As),
        ("type", TokenKind::Type),
        ("contract", TokenKind::Contract),
        ("tag", TokenKind::Tag),
        ("enum", TokenKind::Enum),
        ("field", TokenKind::Field),
        ("return", TokenKind::Return),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("while", TokenKind::While),
        ("for", TokenKind::For),
        ("in", TokenKind::In),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("is", TokenKind::Is),
        ("to", TokenKind::To),
        ("nothing", TokenKind::Nothing),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("signal", TokenKind::Signal),
        ("compare", TokenKind::Compare),
        ("finally", TokenKind::Finally),
        ("select", TokenKind::Select),
        ("race", TokenKind::Race),
        ("default", TokenKind::Default),
        ("parallel", TokenKind::Parallel),
        ("map", TokenKind::Map),
        ("reduce", TokenKind::Reduce),
        ("with", TokenKind::With),
        ("spawn", TokenKind::Spawn),
        ("await", TokenKind::Await),
        ("pragma", TokenKind::Pragma),
    ];

    /// Discriminant as a bit index.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Fn as u8) && (self as u8) <= (TokenKind::Pragma as u8)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLit
                | TokenKind::UintLit
                | TokenKind::FloatLit
                | TokenKind::StringLit
                | TokenKind::FStringLit
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nothing
        )
    }

    /// Compound assignment and plain `=`.
    #[inline]
    pub const fn is_assignment(self) -> bool {
        (self as u8) >= (TokenKind::Eq as u8) && (self as u8) <= (TokenKind::ShrEq as u8)
    }

    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::ColonColon => "`::`",
            TokenKind::Dot => "`.`",
            TokenKind::DotDot => "`..`",
            TokenKind::DotDotEq => "`..=`",
            TokenKind::DotDotDot => "`...`",
            TokenKind::At => "`@`",
            TokenKind::Question => "`?`",
            TokenKind::QuestionQuestion => "`??`",
            TokenKind::Bang => "`!`",
            TokenKind::Arrow => "`->`",
            TokenKind::FatArrow => "`=>`",
            TokenKind::Eq => "`=`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::MinusEq => "`-=`",
            TokenKind::StarEq => "`*=`",
            TokenKind::SlashEq => "`/=`",
            TokenKind::PercentEq => "`%=`",
            TokenKind::AmpEq => "`&=`",
            TokenKind::PipeEq => "`|=`",
            TokenKind::CaretEq => "`^=`",
            TokenKind::ShlEq => "`<<=`",
            TokenKind::ShrEq => "`>>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Amp => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Shl => "`<<`",
            TokenKind::Shr => "`>>`",
            TokenKind::AndAnd => "`&&`",
            TokenKind::OrOr => "`||`",
            TokenKind::EqEq => "`==`",
            TokenKind::BangEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Fn => "`fn`",
            TokenKind::Let => "`let`",
            TokenKind::Mut => "`mut`",
            TokenKind::Own => "`own`",
            TokenKind::Const => "`const`",
            TokenKind::Pub => "`pub`",
            TokenKind::Async => "`async`",
            TokenKind::Extern => "`extern`",
            TokenKind::Import => "`import`",
            TokenKind::As => "`as`",
            TokenKind::Type => "`type`",
            TokenKind::Contract => "`contract`",
            TokenKind::Tag => "`tag`",
            TokenKind::Enum => "`enum`",
            TokenKind::Field => "`field`",
            TokenKind::Return => "`return`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::For => "`for`",
            TokenKind::In => "`in`",
            TokenKind::Break => "`break`",
            TokenKind::Continue => "`continue`",
            TokenKind::Is => "`is`",
            TokenKind::To => "`to`",
            TokenKind::Nothing => "`nothing`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Signal => "`signal`",
            TokenKind::Compare => "`compare`",
            TokenKind::Finally => "`finally`",
            TokenKind::Select => "`select`",
            TokenKind::Race => "`race`",
            TokenKind::Default => "`default`",
            TokenKind::Parallel => "`parallel`",
            TokenKind::Map => "`map`",
            TokenKind::Reduce => "`reduce`",
            TokenKind::With => "`with`",
            TokenKind::Spawn => "`spawn`",
            TokenKind::Await => "`await`",
            TokenKind::Pragma => "`pragma`",
            TokenKind::IntLit => "integer literal",
            TokenKind::UintLit => "unsigned integer literal",
            TokenKind::FloatLit => "float literal",
            TokenKind::StringLit => "string literal",
            TokenKind::FStringLit => "f-string literal",
            TokenKind::Ident => "identifier",
            TokenKind::Underscore => "`_`",
            TokenKind::Eof => "end of file",
            TokenKind::Invalid => "invalid token",
        }
    }
}

const _: () = assert!(TokenKind::COUNT <= 128);
