//! Expression and type operators.

/// Binary operators, including assignments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Mul,
    Div,
    Mod,
    Add,
    Sub,

    // Bitwise
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,

    // Logical
    And,
    Or,
    Coalesce,

    // Range
    Range,
    RangeInclusive,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShlAssign,
    ShrAssign,
}

/// Precedence level of the ternary `? :`, between range and assignment.
pub const TERNARY_PRECEDENCE: u8 = 15;

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Coalesce => "??",
            Self::Range => "..",
            Self::RangeInclusive => "..=",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
        }
    }

    /// Precedence level. Higher number = binds less tightly.
    ///
    /// - 3: `*` `/` `%`
    /// - 4: `+` `-`
    /// - 5: `<<` `>>`
    /// - 6: `&`
    /// - 7: `^`
    /// - 8: `|`
    /// - 9: `<` `<=` `>` `>=` (and `is`)
    /// - 10: `==` `!=`
    /// - 11: `&&`
    /// - 12: `||`
    /// - 13: `??`
    /// - 14: `..` `..=`
    /// - 15: ternary
    /// - 16: assignments
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub => 4,
            Self::Shl | Self::Shr => 5,
            Self::BitAnd => 6,
            Self::BitXor => 7,
            Self::BitOr => 8,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 9,
            Self::Eq | Self::NotEq => 10,
            Self::And => 11,
            Self::Or => 12,
            Self::Coalesce => 13,
            Self::Range | Self::RangeInclusive => 14,
            Self::Assign
            | Self::AddAssign
            | Self::SubAssign
            | Self::MulAssign
            | Self::DivAssign
            | Self::ModAssign
            | Self::BitAndAssign
            | Self::BitOrAssign
            | Self::BitXorAssign
            | Self::ShlAssign
            | Self::ShrAssign => 16,
        }
    }

    pub const fn is_assignment(self) -> bool {
        self.precedence() == 16
    }

    pub const fn is_right_assoc(self) -> bool {
        self.is_assignment()
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    Deref,
    Ref,
    RefMut,
    Own,
    Await,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::Not => "!",
            Self::Deref => "*",
            Self::Ref => "&",
            Self::RefMut => "&mut",
            Self::Own => "own",
            Self::Await => "await",
        }
    }
}

/// Prefix type constructors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeUnaryOp {
    Own,
    Ref,
    RefMut,
    Pointer,
}
