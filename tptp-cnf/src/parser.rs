//! Implements the grammar stage: a parser from TPTP CNF text to a concrete parse [`Tree`].
//!
//! The module provides a parser for documents in the CNF subset of TPTP by implementing
//! [`FromStr`] for [`Tree`]. The parser is often used implicitly through [`parse`] method.
//!
//! **Example**:
//! ```rust
//! use tptp_cnf::tree::{Production, Tree};
//!
//! let tree: Tree = r#"
//!    % a comment
//!    cnf(reflexivity, axiom, X = X).
//!    cnf(goal, negated_conjecture, ~ p(a) | q(f(a, b))).
//! "#.parse().unwrap();
//!
//! assert_eq!(Some(Production::TptpFile), tree.production());
//! assert_eq!(2, tree.find_data(Production::CnfAnnotated).len());
//! ```
//!
//! [`Tree`]: crate::tree::Tree
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use crate::tree::Tree;
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Cnf,
    Include,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Colon,
    Or,
    Not,
    Equal,
    NotEqual,
    Lower,
    Upper,
    Defined,
    SingleQuoted,
    DistinctObject,
    Number,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        match s.as_ref().trim_matches('"') {
            "cnf" => Self::Cnf,
            "include" => Self::Include,
            "(" => Self::LParen,
            ")" => Self::RParen,
            "[" => Self::LBracket,
            "]" => Self::RBracket,
            "," => Self::Comma,
            "." => Self::Dot,
            ":" => Self::Colon,
            "|" => Self::Or,
            "~" => Self::Not,
            "=" => Self::Equal,
            "!=" => Self::NotEqual,
            "LowerWord" => Self::Lower,
            "UpperWord" => Self::Upper,
            "DollarWord" => Self::Defined,
            "SingleQuoted" => Self::SingleQuoted,
            "DistinctObject" => Self::DistinctObject,
            "Number" => Self::Number,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::Cnf => "`cnf`",
            Self::Include => "`include`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Colon => "`:`",
            Self::Or => "`|`",
            Self::Not => "`~`",
            Self::Equal => "`=`",
            Self::NotEqual => "`!=`",
            Self::Lower => "`lower word`",
            Self::Upper => "`upper word`",
            Self::Defined => "`dollar word`",
            Self::SingleQuoted => "`single quoted word`",
            Self::DistinctObject => "`distinct object`",
            Self::Number => "`number`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser when the input is malformed.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
    #[error("{message}")]
    User { message: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

/// Is a (one-based) line and column in the source text.
#[derive(PartialEq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let index = self
            .lines
            .iter()
            .enumerate()
            .find(|&(_, l)| location < *l)
            .map(|(i, _)| i);
        let line = index.unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString, E: ToString>(&self, error: ParseError<usize, T, E>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => Error::User {
                message: error.to_string(),
            },
        }
    }
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::TptpFileParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}
