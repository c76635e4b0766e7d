//! Tokenizer.
//!
//! Built on `logos`. Trivia (whitespace and comments) is recognised so that it
//! can be validated, then dropped from the token stream: the parser recovers
//! it byte-for-byte from the gaps between token spans.
//!
//! `>` is always a single token. The parser joins adjacent `>` tokens into
//! shift and comparison operators, which keeps nested type arguments
//! (`List<List<String>>`) unambiguous.

use logos::Logos;
use remold_tree::ModifierKind;
use remold_types::Primitive;

use crate::ParseError;

#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Trivia ===
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // === Keywords ===
    #[token("abstract")]
    Abstract,
    #[token("boolean")]
    Boolean,
    #[token("break")]
    Break,
    #[token("byte")]
    Byte,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("char")]
    Char,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("default")]
    Default,
    #[token("do")]
    Do,
    #[token("double")]
    Double,
    #[token("else")]
    Else,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("false")]
    False,
    #[token("final")]
    Final,
    #[token("finally")]
    Finally,
    #[token("float")]
    Float,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("implements")]
    Implements,
    #[token("import")]
    Import,
    #[token("int")]
    Int,
    #[token("interface")]
    Interface,
    #[token("long")]
    Long,
    #[token("native")]
    Native,
    #[token("new")]
    New,
    #[token("null")]
    Null,
    #[token("package")]
    Package,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("return")]
    Return,
    #[token("short")]
    Short,
    #[token("static")]
    Static,
    #[token("strictfp")]
    Strictfp,
    #[token("super")]
    Super,
    #[token("switch")]
    Switch,
    #[token("synchronized")]
    Synchronized,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("transient")]
    Transient,
    #[token("true")]
    True,
    #[token("try")]
    Try,
    #[token("void")]
    Void,
    #[token("volatile")]
    Volatile,
    #[token("while")]
    While,

    // === Separators ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("@")]
    At,
    #[token("@interface")]
    AtInterface,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("->")]
    Arrow,

    // === Operators ===
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!")]
    Bang,
    #[token("!=")]
    NotEq,
    #[token("~")]
    Tilde,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("<<")]
    Shl,
    #[token("<<=")]
    ShlAssign,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token("&=")]
    AmpAssign,
    #[token("|=")]
    PipeAssign,
    #[token("^=")]
    CaretAssign,
    #[token("%=")]
    PercentAssign,

    // === Literals ===
    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    IntLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    FloatLiteral,
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    StringLiteral,
    #[regex(r"'([^'\\\r\n]|\\.)+'")]
    CharLiteral,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    /// End of input; never produced by logos.
    Eof,
}

/// Consume a block comment up to and including its `*/`.
fn block_comment(lex: &mut logos::Lexer<'_, TokenKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

impl TokenKind {
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// How the token is named in "expected ..." messages.
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Colon => "`:`",
            TokenKind::Arrow => "`->`",
            TokenKind::At => "`@`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Assign => "`=`",
            TokenKind::While => "`while`",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "end of file",
            _ => "token",
        }
    }

    pub fn modifier(self) -> Option<ModifierKind> {
        let modifier = match self {
            TokenKind::Public => ModifierKind::Public,
            TokenKind::Protected => ModifierKind::Protected,
            TokenKind::Private => ModifierKind::Private,
            TokenKind::Abstract => ModifierKind::Abstract,
            TokenKind::Static => ModifierKind::Static,
            TokenKind::Final => ModifierKind::Final,
            TokenKind::Native => ModifierKind::Native,
            TokenKind::Strictfp => ModifierKind::Strictfp,
            TokenKind::Synchronized => ModifierKind::Synchronized,
            TokenKind::Transient => ModifierKind::Transient,
            TokenKind::Volatile => ModifierKind::Volatile,
            TokenKind::Default => ModifierKind::Default,
            _ => return None,
        };
        Some(modifier)
    }

    pub fn primitive(self) -> Option<Primitive> {
        let primitive = match self {
            TokenKind::Boolean => Primitive::Boolean,
            TokenKind::Byte => Primitive::Byte,
            TokenKind::Char => Primitive::Char,
            TokenKind::Double => Primitive::Double,
            TokenKind::Float => Primitive::Float,
            TokenKind::Int => Primitive::Int,
            TokenKind::Long => Primitive::Long,
            TokenKind::Short => Primitive::Short,
            TokenKind::Void => Primitive::Void,
            _ => return None,
        };
        Some(primitive)
    }
}

/// A token with its byte span.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Tokenize `source`, dropping trivia. The last token is always
/// [`TokenKind::Eof`].
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) if kind.is_trivia() => {}
            Ok(kind) => tokens.push(Token {
                kind,
                start: span.start,
                end: span.end,
            }),
            Err(()) if lexer.slice().starts_with("/*") => {
                return Err(ParseError::UnterminatedComment { offset: span.start });
            }
            Err(()) => return Err(ParseError::InvalidToken { offset: span.start }),
        }
    }
    tokens.push(Token {
        kind: TokenKind::Eof,
        start: source.len(),
        end: source.len(),
    });
    Ok(tokens)
}
