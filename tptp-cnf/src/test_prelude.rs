use crate::{
    syntax::{Clause, Function, SymbolTable, Term, Variable},
    transform::{self, Transformer},
    tree::{Production, Tree},
};
use std::{
    fmt,
    path::{Path, PathBuf},
};

// Terms
pub fn var(index: usize) -> Term {
    Variable::new(index).into()
}

pub fn cons(index: usize) -> Term {
    Function::constant(index).into()
}

pub fn app(index: usize, arguments: Vec<Term>) -> Term {
    Function::new(index, arguments).into()
}

/// Parses `text`, which must contain exactly one annotated clause, and transforms it.
pub fn parse_clause(text: &str, symbols: &mut SymbolTable) -> Result<Clause, transform::Error> {
    let tree: Tree = text.parse().unwrap();
    let nodes = tree.find_data(Production::CnfAnnotated);
    assert_eq!(1, nodes.len());
    Transformer::new(symbols).transform(nodes[0])
}

pub fn mock_tptp() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/TPTP-mock")
}

pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tptp-cnf-{}-{}", std::process::id(), name))
}

pub fn assert_debug_string<T: fmt::Debug>(expected: &str, value: T) {
    assert_eq!(expected, format!("{:?}", value));
}
