/*! Defines the strongly-typed model of CNF clauses and the [`SymbolTable`] that maps
surface names to the integer ids stored in the model.

Terms, predicates and literals never carry names: every symbol is an id in one of the
three independent [namespaces] of a symbol table. The table is created once per parsing
session, grows monotonically and is passed explicitly to the [transformer] and the
[printer].

[`SymbolTable`]: crate::syntax::SymbolTable
[namespaces]: crate::syntax::Namespace
[transformer]: crate::transform::Transformer
[printer]: crate::printer::Printer
*/

mod clause;
mod literal;
mod symbol;
mod term;
mod vocabulary;

pub use clause::{Clause, Inference, DEFAULT_ROLE};
pub use literal::{Literal, Predicate};
pub use symbol::{
    Namespace, SymbolTable, EQ_ID, EQ_SYM, FALSEHOOD_ID, FALSEHOOD_SYM, FUNCTION_GUARD, NEQ_ID,
    NEQ_SYM,
};
pub use term::{Function, Term, Variable};
pub use vocabulary::Vocabulary;

use thiserror::Error;

/// Is the type of errors arising from inconsistencies between a symbol table and the names
/// or ids it is asked about.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a strict symbol table is asked to intern a name it does not know.
    #[error("unknown symbol `{symbol}` in {namespace}")]
    UnknownSymbol {
        symbol: String,
        namespace: Namespace,
    },

    /// Is returned when an id has no name in the inverse view of a namespace.
    #[error("unknown id `{id}` in {namespace}")]
    UnknownId { id: usize, namespace: Namespace },

    /// Is returned when a persisted vocabulary lists the same name twice in one namespace.
    #[error("inconsistent vocabulary: duplicate symbol `{symbol}` in {namespace}")]
    DuplicateSymbol {
        symbol: String,
        namespace: Namespace,
    },

    /// Is returned when a persisted vocabulary does not carry a reserved predicate at its
    /// fixed id.
    #[error("inconsistent vocabulary: expecting `{symbol}` at id {id} in {namespace}")]
    MisplacedReserved {
        symbol: String,
        id: usize,
        namespace: Namespace,
    },

    #[error("cannot access vocabulary file")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed vocabulary file")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
