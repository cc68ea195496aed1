use std::fmt;
use std::rc::Rc;

/// Every token kind the parser dispatches on. LOLCODE's keywords are
/// frequently multi-word (`IS NOW A`, `IM OUTTA YR`); the lexer folds those
/// word sequences into a single kind here so the parser never has to look
/// more than one token ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of the token stream.
    Eof,
    /// A logical line break.
    Newline,

    // ----- Program delimiters -----
    Hai,
    KThxBye,

    // ----- I/O -----
    Visible,
    Bang,
    Gimmeh,

    // ----- Assignment / cast / declaration -----
    R,
    /// `IS NOW A`.
    IsNowA,
    /// `HAS A`.
    HasA,
    Itz,
    /// `A`, used both in `ITZ A <type>` and `MAEK <expr> A <type>`.
    A,

    // ----- Conditionals -----
    /// `O RLY?`.
    ORly,
    /// `YA RLY`.
    YaRly,
    Mebbe,
    /// `NO WAI`.
    NoWai,
    Oic,

    // ----- Switch -----
    /// `WTF?`.
    Wtf,
    Omg,
    /// `OMG WTF`.
    OmgWtf,

    // ----- Control flow -----
    Gtfo,
    /// `FOUND YR`.
    FoundYr,

    // ----- Loops -----
    /// `IM IN YR`.
    ImInYr,
    /// `IM OUTTA YR`.
    ImOuttaYr,
    Uppin,
    Nerfin,
    Yr,
    /// `AN YR`.
    AnYr,
    Til,
    Wile,

    // ----- Functions -----
    /// `HOW IZ`.
    HowIz,
    /// `IF U SAY SO`.
    IfUSaySo,
    Iz,
    Mkay,

    // ----- Casts -----
    Maek,

    // ----- Operators -----
    An,
    AllOf,
    AnyOf,
    Smoosh,
    Not,
    SumOf,
    DiffOf,
    ProduktOf,
    QuoshuntOf,
    ModOf,
    BiggrOf,
    SmallrOf,
    BothOf,
    EitherOf,
    WonOf,
    BothSaem,
    Diffrint,

    // ----- Implicit variable -----
    It,

    // ----- Types -----
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,

    // ----- Literals and names -----
    Boolean,
    Integer,
    Float,
    StringLit,
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The pre-parsed payload of a numeric or boolean literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// One lexical token. `image` carries the lexeme text for identifiers and
/// string literals (and, for everything else, the raw spelling — useful in
/// diagnostics); `value` carries the parsed payload of a literal.
///
/// `fname` is an `Rc<str>` shared by every token produced from the same
/// source, rather than a borrowed reference: that lets `Ident` nodes in the
/// AST clone it cheaply without a lifetime tying the tree to the token
/// stream that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub image: String,
    pub value: Option<LiteralValue>,
    pub fname: Rc<str>,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, image: impl Into<String>, fname: Rc<str>, line: u32) -> Self {
        Token {
            kind,
            image: image.into(),
            value: None,
            fname,
            line,
        }
    }

    pub fn with_value(mut self, value: LiteralValue) -> Self {
        self.value = Some(value);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.image.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({:?})", self.kind, self.image)
        }
    }
}
