/*! Provides a parser, a normalizing transformer and a pretty printer for problems in the
clause normal form (CNF) subset of TPTP.

Text is parsed into a generic concrete [parse tree], which the [transformer] turns into
strongly-typed [clauses] whose symbols are interned in a [symbol table]. The [printer]
renders clauses back into TPTP syntax, and the [resolver] follows include directives.

[parse tree]: crate::tree::Tree
[transformer]: crate::transform::Transformer
[clauses]: crate::syntax::Clause
[symbol table]: crate::syntax::SymbolTable
[printer]: crate::printer::Printer
[resolver]: crate::document::Resolver
*/
#[macro_use]
extern crate lalrpop_util;
#[macro_use]
extern crate tracing;

pub mod document;
pub mod parser;
pub mod printer;
pub mod syntax;
#[cfg(test)]
mod test_prelude;
pub mod trace;
pub mod transform;
pub mod tree;
