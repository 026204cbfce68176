//! Expression AST types.

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// Text literal.
    Text(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
    /// Duration literal, in nanoseconds.
    Duration(i64),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,

    // Membership / identity
    In,
    Is,
}

impl BinaryOp {
    /// Returns the source representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::In => "IN",
            Self::Is => "IS",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    ///
    /// `IN` and `IS` share the comparison tier; the bitwise tier sits
    /// between comparison and addition.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::In
            | Self::Is => 3,
            Self::BitAnd | Self::BitOr | Self::BitXor => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div | Self::Mod => 6,
        }
    }
}

/// A key-value pair inside a document literal.
///
/// Duplicate keys are legal at this layer and preserved in insertion
/// order; deduplication is the planner's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct KVPair {
    /// The key.
    pub key: String,
    /// The value expression.
    pub value: Expr,
}

impl KVPair {
    /// Creates a new key-value pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A resolved function node.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// Reference to the primary key of the current record (`pk()`).
    Pk,
}

/// An expression of the Vellum dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A field reference into a nested document or array, one string
    /// per path segment. Always non-empty. Numeric-looking segments
    /// (array indices) are kept as strings at this layer.
    FieldSelector(Vec<String>),

    /// A document literal: ordered key-value pairs.
    KVPairs(Vec<KVPair>),

    /// A list literal, from either `(...)` or `[...]`.
    List(Vec<Expr>),

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A resolved function call.
    Function(Function),

    /// A CAST expression.
    Cast {
        /// Expression to convert.
        expr: Box<Expr>,
        /// Target type.
        target: super::ValueType,
    },

    /// A named bind parameter (`$name`).
    NamedParam(String),

    /// A positional bind parameter (`?`), 1-based in source order.
    PositionalParam(usize),
}

impl Expr {
    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new text literal.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Literal(Literal::Text(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a duration literal from nanoseconds.
    #[must_use]
    pub const fn duration(nanos: i64) -> Self {
        Self::Literal(Literal::Duration(nanos))
    }

    /// Creates a field reference from path segments.
    #[must_use]
    pub fn field<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::FieldSelector(segments.into_iter().map(Into::into).collect())
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }
}
