/*! Implements the [`Resolver`] that parses a TPTP document together with the documents it
includes.

The clauses of a document come first, in source order, followed by the clauses of every
included document in the order of the include directives. Each included document is
resolved completely, including its own includes, before the next one is read.

[`Resolver`]: crate::document::Resolver
*/
use crate::{
    parser,
    syntax::{Clause, SymbolTable},
    trace::{CLAUSE, DOCUMENT, INCLUDE},
    transform::{self, Transformer},
    tree::{Node, Production, Tree},
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Is the type of errors returned when a document or one of its includes cannot be parsed.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse {
        #[from]
        source: parser::Error,
    },

    #[error(transparent)]
    Transform {
        #[from]
        source: transform::Error,
    },

    /// Is returned when the root document cannot be read.
    #[error("cannot read document `{}`", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Is returned when an included document cannot be read.
    #[error("cannot read included document `{}`", .path.display())]
    MissingInclude {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Is returned when a document includes itself, directly or through other includes.
    #[error("include cycle: `{}` is already being parsed", .path.display())]
    IncludeCycle { path: PathBuf },
}

/// Parses documents and resolves their include directives relative to a base directory,
/// usually the root of a TPTP distribution.
///
/// **Example**:
/// ```rust
/// use tptp_cnf::{document::Resolver, syntax::SymbolTable};
///
/// let mut symbols = SymbolTable::new(true);
/// let clauses = Resolver::new(".")
///     .parse("cnf(a, axiom, p). cnf(b, axiom, ~ p).", &mut symbols)
///     .unwrap();
///
/// assert_eq!(vec!["a", "b"], clauses.iter().map(|c| c.label()).collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug)]
pub struct Resolver {
    base: PathBuf,
}

impl Resolver {
    /// Creates a resolver that looks up included files in `base`.
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base: base.into() }
    }

    /// Parses `text` and the documents it includes.
    pub fn parse(&self, text: &str, symbols: &mut SymbolTable) -> Result<Vec<Clause>, Error> {
        self.resolve(text, symbols, &mut Vec::new())
    }

    /// Reads the document at `path` and parses it with the documents it includes.
    pub fn parse_file<P: AsRef<Path>>(
        &self,
        path: P,
        symbols: &mut SymbolTable,
    ) -> Result<Vec<Clause>, Error> {
        let path = path.as_ref();
        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };
        let key = fs::canonicalize(path).map_err(read_error)?;
        let text = fs::read_to_string(path).map_err(read_error)?;
        self.resolve(&text, symbols, &mut vec![key])
    }

    // `stack` holds the canonical paths of the documents being parsed.
    fn resolve(
        &self,
        text: &str,
        symbols: &mut SymbolTable,
        stack: &mut Vec<PathBuf>,
    ) -> Result<Vec<Clause>, Error> {
        let tree: Tree = text.parse()?;

        let mut clauses = Vec::new();
        {
            let mut transformer = Transformer::new(symbols);
            for node in tree.find_data(Production::CnfAnnotated) {
                let clause = transformer.transform(node)?;
                debug!(event = CLAUSE, label = clause.label(), clause = ?clause);
                clauses.push(clause);
            }
        }

        for node in tree.find_data(Production::Include) {
            let path = self.base.join(include_file(node)?);
            info!(event = INCLUDE, path = %path.display());
            clauses.extend(self.include(&path, symbols, stack)?);
        }

        info!(event = DOCUMENT, count = clauses.len() as u64);
        Ok(clauses)
    }

    fn include(
        &self,
        path: &Path,
        symbols: &mut SymbolTable,
        stack: &mut Vec<PathBuf>,
    ) -> Result<Vec<Clause>, Error> {
        let missing = |source| Error::MissingInclude {
            path: path.to_path_buf(),
            source,
        };
        let key = fs::canonicalize(path).map_err(missing)?;
        if stack.contains(&key) {
            return Err(Error::IncludeCycle {
                path: path.to_path_buf(),
            });
        }
        // the file is closed before its includes are opened
        let text = fs::read_to_string(path).map_err(missing)?;

        stack.push(key);
        let result = self.resolve(&text, symbols, stack);
        stack.pop();
        result
    }
}

// Strips the quotes around the name of an included file.
fn include_file(node: &Node) -> Result<String, transform::Error> {
    match node.children() {
        [file] => file
            .as_token()
            .map(|f| f.replace('\'', ""))
            .ok_or_else(|| transform::Error::MalformedTree {
                production: Production::Include,
                found: file.to_string(),
            }),
        _ => Err(transform::Error::MalformedTree {
            production: Production::Include,
            found: format!("{} children", node.children().len()),
        }),
    }
}
