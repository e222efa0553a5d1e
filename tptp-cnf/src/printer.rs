/*! Implements the [`Printer`], the inverse of the [transformer]: it renders clauses in TPTP
syntax using the names of a [`SymbolTable`].

Parsing the text of a printed clause with the same symbol table yields the original clause,
including its label, role and inference record. Terms print their arguments without
spaces while predicates put a space after every comma, for example:

```text
cnf(c, axiom, ~p(f(X,a), Y) | X = b | $false()).
```

[`Printer`]: crate::printer::Printer
[transformer]: crate::transform::Transformer
[`SymbolTable`]: crate::syntax::SymbolTable
*/
use crate::syntax::{
    Clause, Error, Literal, Namespace, SymbolTable, Term, FALSEHOOD_SYM,
};
use itertools::Itertools;

/// Renders terms, literals and clauses with the names of a [`SymbolTable`].
///
/// **Example**:
/// ```rust
/// use tptp_cnf::{
///     printer::Printer,
///     syntax::{Clause, Function, Literal, Namespace, Predicate, SymbolTable},
/// };
///
/// let mut symbols = SymbolTable::new(true);
/// let a = symbols.intern("a", Namespace::Functions).unwrap();
/// let b = symbols.intern("b", Namespace::Functions).unwrap();
/// let clause = Clause::new(vec![Literal::negative(Predicate::equality(
///     Function::constant(a).into(),
///     Function::constant(b).into(),
/// ))])
/// .with_label("c")
/// .with_role("axiom");
///
/// assert_eq!(
///     "cnf(c, axiom, ~a = b).",
///     Printer::new(&symbols).print_clause(&clause).unwrap()
/// );
/// ```
///
/// [`SymbolTable`]: crate::syntax::SymbolTable
pub struct Printer<'s> {
    symbols: &'s SymbolTable,
}

impl<'s> Printer<'s> {
    pub fn new(symbols: &'s SymbolTable) -> Self {
        Self { symbols }
    }

    /// Renders a term; fails if the symbol table has no name for one of its ids.
    pub fn print_term(&self, term: &Term) -> Result<String, Error> {
        match term {
            Term::Var { variable } => {
                Ok(self.symbols.name(variable.index, Namespace::Variables)?.into())
            }
            Term::App { function } => {
                let name = self.symbols.name(function.index, Namespace::Functions)?;
                if function.is_constant() {
                    Ok(name.into())
                } else {
                    let arguments = self.print_terms(&function.arguments)?;
                    Ok(format!("{}({})", name, arguments.join(",")))
                }
            }
        }
    }

    pub fn print_literal(&self, literal: &Literal) -> Result<String, Error> {
        let not = if literal.negated { "~" } else { "" };
        let atom = &literal.atom;
        if atom.is_equality() && atom.arguments.len() == 2 {
            let left = self.print_term(&atom.arguments[0])?;
            let right = self.print_term(&atom.arguments[1])?;
            return Ok(format!("{}{} = {}", not, left, right));
        }

        let name = self.symbols.name(atom.index, Namespace::Predicates)?;
        let arguments = self.print_terms(&atom.arguments)?;
        Ok(format!("{}{}({})", not, name, arguments.join(", ")))
    }

    /// Renders a clause as an annotated `cnf` formula. The empty clause prints as `$false`.
    pub fn print_clause(&self, clause: &Clause) -> Result<String, Error> {
        let body = if clause.is_empty() {
            FALSEHOOD_SYM.to_string()
        } else {
            clause
                .literals()
                .iter()
                .map(|l| self.print_literal(l))
                .collect::<Result<Vec<_>, _>>()?
                .join(" | ")
        };
        let inference = clause
            .inference()
            .map(|i| format!(", inference({}, [], [{}])", i.rule, i.parents.iter().join(", ")))
            .unwrap_or_default();

        Ok(format!(
            "cnf({}, {}, {}{}).",
            clause.label(),
            clause.role(),
            body,
            inference
        ))
    }

    /// Renders clauses one per line.
    pub fn print_all<'c, I>(&self, clauses: I) -> Result<String, Error>
    where
        I: IntoIterator<Item = &'c Clause>,
    {
        let lines = clauses
            .into_iter()
            .map(|c| self.print_clause(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    fn print_terms(&self, terms: &[Term]) -> Result<Vec<String>, Error> {
        terms.iter().map(|t| self.print_term(t)).collect()
    }
}
