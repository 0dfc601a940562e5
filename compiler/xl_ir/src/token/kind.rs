//! Token kinds for XL.

/// Closed set of token classifications.
///
/// Literal kinds carry no value: literal text stays in the symbol,
/// unconverted, until a later stage decides how to represent it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Open classes
    Identifier,
    /// `123`
    Integer,
    /// `3.14`
    NumberLiteral,
    /// `3/4/2020`, `12-25-99`
    DateLiteral,

    // Reserved words
    Program,
    IntType,     // int
    BooleanType, // boolean
    NumberType,  // number
    DateType,    // date
    Void,
    If,
    Then,
    Else,
    While,
    For,
    Function,
    Return,
    True,
    False,

    // Operators and separators
    LeftBrace,    // {
    RightBrace,   // }
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Dot,          // .
    Assign,       // =
    Equal,        // ==
    Not,          // !
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=
    Plus,         // +
    Minus,        // -
    Multiply,     // *
    Divide,       // /
    Or,           // |
    And,          // &
    /// `//`, recognized like an operator so the scanner can elide it.
    Comment,

    /// Not a recognized operator/separator spelling.
    BogusToken,
    /// End of the token stream.
    Eof,
}

impl TokenKind {
    /// Every reserved-word kind, in seeding order.
    pub const RESERVED_WORDS: &'static [TokenKind] = &[
        TokenKind::Program,
        TokenKind::IntType,
        TokenKind::BooleanType,
        TokenKind::NumberType,
        TokenKind::DateType,
        TokenKind::Void,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Function,
        TokenKind::Return,
        TokenKind::True,
        TokenKind::False,
    ];

    /// Every operator/separator kind (comments included), in seeding order.
    pub const OPERATORS: &'static [TokenKind] = &[
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::Not,
        TokenKind::NotEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Or,
        TokenKind::And,
        TokenKind::Comment,
    ];

    /// Fixed spelling of reserved words and operators.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, literals)
    /// and for the sentinels.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::NumberLiteral
            | TokenKind::DateLiteral
            | TokenKind::BogusToken
            | TokenKind::Eof => return None,

            TokenKind::Program => "program",
            TokenKind::IntType => "int",
            TokenKind::BooleanType => "boolean",
            TokenKind::NumberType => "number",
            TokenKind::DateType => "date",
            TokenKind::Void => "void",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",

            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::Not => "!",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Or => "|",
            TokenKind::And => "&",
            TokenKind::Comment => "//",
        };
        Some(text)
    }
}
