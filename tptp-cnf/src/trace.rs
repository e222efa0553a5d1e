/*! Defines the names of the `tracing` events that the parser emits and a [`JsonLogger`]
that writes them to a log file.

[`JsonLogger`]: crate::trace::subscriber::JsonLogger
*/
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// log record fields:
pub const EVENT_FIELD: &str = "event";
pub const NAMESPACE_FIELD: &str = "namespace";
pub const SYMBOL_FIELD: &str = "symbol";
pub const SYMBOL_ID_FIELD: &str = "symbol_id";
pub const LABEL_FIELD: &str = "label";
pub const CLAUSE_FIELD: &str = "clause";
pub const PATH_FIELD: &str = "path";
pub const COUNT_FIELD: &str = "count";
pub const PROBLEM_FIELD: &str = "problem";

// log event types:
/// A symbol table registered a new name.
pub const NEW_SYMBOL: &str = "@symbol";

/// An annotated clause was transformed.
pub const CLAUSE: &str = "@clause";

/// An include directive is about to be resolved.
pub const INCLUDE: &str = "@include";

/// A document and its includes were parsed.
pub const DOCUMENT: &str = "@document";

/// A problem of a batch was parsed and its vocabulary saved.
pub const PROBLEM: &str = "@problem";
