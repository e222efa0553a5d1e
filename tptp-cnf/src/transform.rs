/*! Implements the [`Transformer`] from concrete parse trees of annotated clauses to
[`Clause`]s.

The transformer walks a tree bottom-up. Each node is first reduced to the values of its
children and then to a value of its own, depending on its [`Production`]:

* scaffolding nodes with a single child collapse into that child, and scaffolding nodes
  with any other number of children become a list of their values;
* terms, atoms, argument lists, literals, disjunctions and inference records are built by
  dedicated rules that intern their symbols in a [`SymbolTable`];
* infix inequalities never survive a literal: `s != t` becomes `~ s = t` and `~ s != t`
  becomes `s = t`.

**Example**:
```rust
use tptp_cnf::{syntax::SymbolTable, transform::Transformer, tree::{Production, Tree}};

let tree: Tree = "cnf(c, axiom, ~ p(X) | a != b).".parse().unwrap();
let mut symbols = SymbolTable::new(true);
let clause = Transformer::new(&mut symbols)
    .transform(tree.find_data(Production::CnfAnnotated)[0])
    .unwrap();

assert_eq!("c", clause.label());
assert_eq!(2, clause.literals().len());
assert!(clause.literals()[1].negated);
```

[`Transformer`]: crate::transform::Transformer
[`Clause`]: crate::syntax::Clause
[`Production`]: crate::tree::Production
[`SymbolTable`]: crate::syntax::SymbolTable
*/
use crate::{
    syntax::{
        self, Clause, Function, Inference, Literal, Namespace, Predicate, SymbolTable, Term,
        Variable, EQ_ID, NEQ_ID,
    },
    tree::{Node, Production, Tree},
};
use thiserror::Error;

/// Is the type of errors arising when a concrete parse tree cannot be transformed into a
/// clause.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a symbol cannot be interned, most notably when a strict symbol
    /// table meets an unknown function or predicate.
    #[error(transparent)]
    Symbol {
        #[from]
        source: syntax::Error,
    },

    /// Is returned when a node does not have the shape its production requires.
    #[error("malformed tree: unexpected {found} under `{production}`")]
    MalformedTree {
        production: Production,
        found: String,
    },
}

// The intermediate results of the bottom-up walk.
#[derive(Debug)]
enum Value {
    Token(String),
    Term(Term),
    Arguments(Vec<Term>),
    Atom(Predicate),
    Literal(Literal),
    Disjunction(Vec<Literal>),
    Clause(Clause),
    Inference(Inference),
    Parents(Vec<String>),
    Annotations(Option<Inference>),
    List(usize),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::Term(_) => "term",
            Self::Arguments(_) => "argument list",
            Self::Atom(_) => "atom",
            Self::Literal(_) => "literal",
            Self::Disjunction(_) => "disjunction",
            Self::Clause(_) => "clause",
            Self::Inference(_) => "inference record",
            Self::Parents(_) => "parent list",
            Self::Annotations(_) => "annotations",
            Self::List(_) => "list",
        }
    }
}

/// Transforms concrete parse trees of annotated clauses into [`Clause`]s, interning every
/// symbol it meets in a [`SymbolTable`].
///
/// [`Clause`]: crate::syntax::Clause
/// [`SymbolTable`]: crate::syntax::SymbolTable
pub struct Transformer<'s> {
    symbols: &'s mut SymbolTable,
}

impl<'s> Transformer<'s> {
    pub fn new(symbols: &'s mut SymbolTable) -> Self {
        Self { symbols }
    }

    /// Transforms a `cnf_annotated` node into a clause. Fails for a clause that mentions a
    /// symbol the symbol table refuses to intern.
    pub fn transform(&mut self, node: &Node) -> Result<Clause, Error> {
        if node.production() != Production::CnfAnnotated {
            return Err(malformed(Production::CnfAnnotated, node.production().to_string()));
        }
        match self.visit_node(node)? {
            Value::Clause(clause) => Ok(clause),
            value => Err(malformed(Production::CnfAnnotated, value.kind())),
        }
    }

    /// Transforms every annotated clause of `tree`, in source order.
    pub fn transform_all(&mut self, tree: &Tree) -> Result<Vec<Clause>, Error> {
        tree.find_data(Production::CnfAnnotated)
            .into_iter()
            .map(|node| self.transform(node))
            .collect()
    }

    fn visit(&mut self, tree: &Tree) -> Result<Value, Error> {
        match tree {
            Tree::Token(text) => Ok(Value::Token(text.clone())),
            Tree::Node(node) => self.visit_node(node),
        }
    }

    fn visit_node(&mut self, node: &Node) -> Result<Value, Error> {
        let production = node.production();
        let children = node
            .children()
            .iter()
            .map(|child| self.visit(child))
            .collect::<Result<Vec<_>, _>>()?;

        match production {
            Production::PlainTerm | Production::DefinedTerm => self.function(production, children),
            Production::PlainAtomicFormula | Production::DefinedPlainFormula => {
                self.predicate(production, children)
            }
            Production::Variable => self.variable(children),
            Production::Arguments => arguments(children),
            Production::DefinedInfixFormula | Production::InfixUnary => {
                self.infix(production, children)
            }
            Production::Literal => literal(children),
            Production::Disjunction => disjunction(children),
            Production::Annotations => Ok(annotations(children)),
            Production::InferenceRecord => inference_record(children),
            Production::ParentList => parent_list(children),
            Production::ParentInfo => parent_info(children),
            Production::CnfAnnotated => cnf_annotated(children),
            Production::GeneralFunction => general_function(children),
            Production::TptpFile
            | Production::Include
            | Production::CnfFormula
            | Production::AtomicFormula
            | Production::Term
            | Production::FunctionTerm
            | Production::Source
            | Production::GeneralTerm
            | Production::GeneralData
            | Production::GeneralList => Ok(collapse(children)),
        }
    }

    fn intern(&mut self, name: &str, namespace: Namespace) -> Result<usize, Error> {
        Ok(self.symbols.intern(name, namespace)?)
    }

    // `name` or `name(arguments)` in term position.
    fn function(&mut self, production: Production, children: Vec<Value>) -> Result<Value, Error> {
        let (name, arguments) = application(production, children)?;
        let index = self.intern(&name, Namespace::Functions)?;
        Ok(Value::Term(Function::new(index, arguments).into()))
    }

    // `name` or `name(arguments)` in formula position.
    fn predicate(&mut self, production: Production, children: Vec<Value>) -> Result<Value, Error> {
        let (name, arguments) = application(production, children)?;
        let index = self.intern(&name, Namespace::Predicates)?;
        Ok(Value::Atom(Predicate::new(index, arguments)))
    }

    fn variable(&mut self, children: Vec<Value>) -> Result<Value, Error> {
        match single(Production::Variable, children)? {
            Value::Token(name) => {
                let index = self.intern(&name, Namespace::Variables)?;
                Ok(Value::Term(Variable::new(index).into()))
            }
            value => Err(malformed(Production::Variable, value.kind())),
        }
    }

    // `left = right` and `left != right`, keeping the id of the operator.
    fn infix(&mut self, production: Production, children: Vec<Value>) -> Result<Value, Error> {
        let mut children = children.into_iter();
        match (children.next(), children.next(), children.next(), children.next()) {
            (Some(Value::Term(left)), Some(Value::Token(op)), Some(Value::Term(right)), None) => {
                let index = self.intern(&op, Namespace::Predicates)?;
                Ok(Value::Atom(Predicate::new(index, vec![left, right])))
            }
            _ => Err(malformed(production, "operands")),
        }
    }
}

fn malformed<S: Into<String>>(production: Production, found: S) -> Error {
    Error::MalformedTree {
        production,
        found: found.into(),
    }
}

fn collapse(mut children: Vec<Value>) -> Value {
    if children.len() == 1 {
        children.remove(0)
    } else {
        Value::List(children.len())
    }
}

fn single(production: Production, children: Vec<Value>) -> Result<Value, Error> {
    let found = children.len();
    let mut children = children.into_iter();
    match (children.next(), children.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(malformed(production, format!("{} children", found))),
    }
}

// Splits the children of a function or predicate application into its name and arguments.
fn application(production: Production, children: Vec<Value>) -> Result<(String, Vec<Term>), Error> {
    let mut children = children.into_iter();
    match (children.next(), children.next(), children.next()) {
        (Some(Value::Token(name)), None, None) => Ok((name, vec![])),
        (Some(Value::Token(name)), Some(Value::Arguments(arguments)), None) => {
            Ok((name, arguments))
        }
        _ => Err(malformed(production, "application")),
    }
}

// Flattens a right-recursive argument list.
fn arguments(children: Vec<Value>) -> Result<Value, Error> {
    let mut children = children.into_iter();
    match (children.next(), children.next(), children.next()) {
        (Some(Value::Term(term)), None, None) => Ok(Value::Arguments(vec![term])),
        (Some(Value::Term(term)), Some(Value::Arguments(rest)), None) => {
            let mut result = Vec::with_capacity(rest.len() + 1);
            result.push(term);
            result.extend(rest);
            Ok(Value::Arguments(result))
        }
        _ => Err(malformed(Production::Arguments, "arguments")),
    }
}

fn literal(children: Vec<Value>) -> Result<Value, Error> {
    let mut children = children.into_iter();
    let (negated, atom) = match (children.next(), children.next(), children.next()) {
        (Some(Value::Atom(atom)), None, None) => (false, atom),
        (Some(Value::Token(not)), Some(Value::Atom(atom)), None) if not == "~" => (true, atom),
        _ => return Err(malformed(Production::Literal, "literal")),
    };

    if atom.index == NEQ_ID {
        let atom = Predicate::new(EQ_ID, atom.arguments);
        Ok(Value::Literal(Literal::new(!negated, atom)))
    } else {
        Ok(Value::Literal(Literal::new(negated, atom)))
    }
}

// Flattens a left-recursive disjunction.
fn disjunction(children: Vec<Value>) -> Result<Value, Error> {
    let mut children = children.into_iter();
    match (children.next(), children.next(), children.next(), children.next()) {
        (Some(Value::Literal(literal)), None, None, None) => Ok(Value::Disjunction(vec![literal])),
        (
            Some(Value::Disjunction(mut literals)),
            Some(Value::Token(_)),
            Some(Value::Literal(literal)),
            None,
        ) => {
            literals.push(literal);
            Ok(Value::Disjunction(literals))
        }
        _ => Err(malformed(Production::Disjunction, "disjuncts")),
    }
}

// Keeps the first inference record among the source and the useful info.
fn annotations(children: Vec<Value>) -> Value {
    let inference = children.into_iter().find_map(|value| match value {
        Value::Inference(inference) => Some(inference),
        _ => None,
    });
    Value::Annotations(inference)
}

fn inference_record(children: Vec<Value>) -> Result<Value, Error> {
    let mut children = children.into_iter();
    match (children.next(), children.next(), children.next(), children.next()) {
        (Some(Value::Token(rule)), Some(_), Some(Value::Parents(parents)), None) => {
            Ok(Value::Inference(Inference::new(rule, parents)))
        }
        _ => Err(malformed(Production::InferenceRecord, "inference")),
    }
}

// Flattens a right-recursive parent list.
fn parent_list(children: Vec<Value>) -> Result<Value, Error> {
    let mut result = Vec::new();
    for child in children {
        match child {
            Value::Parents(parents) => result.extend(parents),
            value => return Err(malformed(Production::ParentList, value.kind())),
        }
    }
    Ok(Value::Parents(result))
}

// A general function such as `theory(equality)` is known by its name.
fn general_function(children: Vec<Value>) -> Result<Value, Error> {
    match children.into_iter().next() {
        Some(Value::Token(name)) => Ok(Value::Token(name)),
        Some(value) => Err(malformed(Production::GeneralFunction, value.kind())),
        None => Err(malformed(Production::GeneralFunction, "0 children")),
    }
}

// `label`, `label:details` or `name(...)` names one parent; a nested inference record
// contributes its own parents.
fn parent_info(children: Vec<Value>) -> Result<Value, Error> {
    match children.into_iter().next() {
        Some(Value::Token(label)) => Ok(Value::Parents(vec![label])),
        Some(Value::Inference(inference)) => Ok(Value::Parents(inference.parents)),
        Some(Value::List(len)) => Err(malformed(
            Production::ParentInfo,
            format!("list of {} items", len),
        )),
        Some(value) => Err(malformed(Production::ParentInfo, value.kind())),
        None => Err(malformed(Production::ParentInfo, "0 children")),
    }
}

fn cnf_annotated(children: Vec<Value>) -> Result<Value, Error> {
    let mut children = children.into_iter();
    match (
        children.next(),
        children.next(),
        children.next(),
        children.next(),
        children.next(),
    ) {
        (
            Some(Value::Token(label)),
            Some(Value::Token(role)),
            Some(Value::Disjunction(mut literals)),
            Some(Value::Annotations(inference)),
            None,
        ) => {
            // a lonely `$false` is the empty clause
            if literals.len() == 1 && literals[0].is_falsehood() {
                literals.clear();
            }
            let clause = Clause::new(literals)
                .with_label(label)
                .with_role(role)
                .with_inference(inference);
            Ok(Value::Clause(clause))
        }
        _ => Err(malformed(Production::CnfAnnotated, "annotated clause")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        syntax::{FALSEHOOD_ID, FUNCTION_GUARD},
        test_prelude::*,
    };

    #[test]
    fn test_terms() {
        let mut symbols = SymbolTable::new(true);
        let clause = parse_clause("cnf(c, axiom, p(X, a, f(Y, g(X)), $d, 1/2, \"o\")).", &mut symbols)
            .unwrap();
        assert_eq!(
            vec![Literal::positive(Predicate::new(
                3,
                vec![
                    var(0),
                    cons(1),
                    app(3, vec![var(1), app(2, vec![var(0)])]),
                    cons(4),
                    cons(5),
                    cons(6),
                ]
            ))],
            clause.literals()
        );
        assert_eq!(
            vec![FUNCTION_GUARD, "a", "g", "f", "$d", "1/2", "\"o\""],
            symbols.names(Namespace::Functions).collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["X", "Y"],
            symbols.names(Namespace::Variables).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_propositions() {
        let mut symbols = SymbolTable::new(true);
        let clause = parse_clause("cnf(c, axiom, p | p() | $true | ~ q).", &mut symbols).unwrap();
        let p = Predicate::new(3, vec![]);
        assert_eq!(
            vec![
                Literal::positive(p.clone()),
                Literal::positive(p),
                Literal::positive(Predicate::new(4, vec![])),
                Literal::negative(Predicate::new(5, vec![])),
            ],
            clause.literals()
        );
    }

    #[test]
    fn test_inequality_elimination() {
        let mut symbols = SymbolTable::new(true);
        let equal = parse_clause("cnf(c, axiom, a = b).", &mut symbols).unwrap();
        let not_equal = parse_clause("cnf(c, axiom, a != b).", &mut symbols).unwrap();
        let not_not_equal = parse_clause("cnf(c, axiom, ~ a != b).", &mut symbols).unwrap();
        let not_equal_2 = parse_clause("cnf(c, axiom, ~ a = b).", &mut symbols).unwrap();

        let atom = Predicate::equality(cons(1), cons(2));
        assert_eq!(vec![Literal::positive(atom.clone())], equal.literals());
        assert_eq!(vec![Literal::negative(atom)], not_equal.literals());
        assert_eq!(equal, not_not_equal);
        assert_eq!(not_equal, not_equal_2);

        let clause = parse_clause("cnf(c, axiom, X != Y | f(X) = Y | ~ p(X) | Y != a).", &mut symbols)
            .unwrap();
        assert!(clause.literals().iter().all(|l| l.atom.index != NEQ_ID));
        assert_eq!(
            vec![true, false, true, true],
            clause.literals().iter().map(|l| l.negated).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_clause() {
        let mut symbols = SymbolTable::new(false);
        let clause = parse_clause("cnf(c, axiom, $false).", &mut symbols).unwrap();
        assert!(clause.is_empty());
        assert_eq!("c", clause.label());
        assert_eq!("axiom", clause.role());

        let clause = parse_clause("cnf(c, axiom, ~ $false).", &mut symbols).unwrap();
        assert_eq!(
            vec![Literal::negative(Predicate::new(FALSEHOOD_ID, vec![]))],
            clause.literals()
        );

        let clause = parse_clause("cnf(c, axiom, X = X | $false).", &mut symbols).unwrap();
        assert_eq!(2, clause.literals().len());
        assert!(clause.literals()[1].is_falsehood());

        let falsehood = Literal::positive(Predicate::falsehood());
        let clause = parse_clause("cnf(c, axiom, ($false)).", &mut symbols).unwrap();
        assert!(clause.is_empty());
        let clause = parse_clause("cnf(c, axiom, $false | $false).", &mut symbols).unwrap();
        assert_eq!(vec![falsehood.clone(), falsehood.clone()], clause.literals());
        let clause = parse_clause("cnf(c, axiom, $false | X = X).", &mut symbols).unwrap();
        assert_eq!(2, clause.literals().len());
        assert_eq!(falsehood, clause.literals()[0]);
    }

    #[test]
    fn test_strict_mode() {
        let text = "cnf(c, axiom, p(f(X), a) | q).";
        let mut symbols = SymbolTable::new(false);
        let result = parse_clause(text, &mut symbols);
        assert_eq!(
            "unknown symbol `f` in functions",
            result.unwrap_err().to_string()
        );
        assert_eq!(1, symbols.len(Namespace::Functions));
        assert_eq!(3, symbols.len(Namespace::Predicates));

        symbols.set_extendable(true);
        parse_clause(text, &mut symbols).unwrap();
        assert_eq!(
            vec![FUNCTION_GUARD, "f", "a"],
            symbols.names(Namespace::Functions).collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["$false", "=", "!=", "p", "q"],
            symbols.names(Namespace::Predicates).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_annotations() {
        let mut symbols = SymbolTable::new(true);
        {
            let clause = parse_clause(
                "cnf(c, negated_conjecture, p, inference(resolution, [status(thm)], [a, b:[1]])).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!("negated_conjecture", clause.role());
            assert_eq!(Some("resolution"), clause.inference_rule());
            assert_eq!(
                Some(&["a".to_string(), "b".to_string()][..]),
                clause.inference_parents()
            );
        }
        {
            let clause = parse_clause(
                "cnf(c, plain, p, inference(cn, [], [inference(rw, [], [a, b]), c])).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!(Some("cn"), clause.inference_rule());
            assert_eq!(
                Some(&["a".to_string(), "b".to_string(), "c".to_string()][..]),
                clause.inference_parents()
            );
        }
        {
            let clause = parse_clause(
                "cnf(c, plain, p, inference(rule, [], [])).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!(Some("rule"), clause.inference_rule());
            assert_eq!(Some(&Vec::<String>::new()[..]), clause.inference_parents());
        }
        {
            let clause = parse_clause(
                "cnf(c, plain, p, inference(spm, [status(thm)], [c_0_5, theory(equality)])).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!(Some("spm"), clause.inference_rule());
            assert_eq!(
                Some(&["c_0_5".to_string(), "theory".to_string()][..]),
                clause.inference_parents()
            );
        }
        {
            let clause = parse_clause(
                "cnf(c, plain, p, inference(r, [], [file('a.p', x), a])).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!(
                Some(&["file".to_string(), "a".to_string()][..]),
                clause.inference_parents()
            );
        }
        {
            let clause = parse_clause("cnf(c, axiom, p, file('a.p', c)).", &mut symbols).unwrap();
            assert_eq!(None, clause.inference_rule());
            assert_eq!(None, clause.inference_parents());
        }
        {
            let clause = parse_clause(
                "cnf(c, axiom, p, file('a.p'), [inference(r, [], [a])]).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!(Some("r"), clause.inference_rule());
        }
        {
            let clause = parse_clause(
                "cnf(c, axiom, p, file('a.p'), [status(thm), inference(r, [], [a])]).",
                &mut symbols,
            )
            .unwrap();
            assert_eq!(None, clause.inference());
        }
    }

    #[test]
    fn test_malformed() {
        let mut symbols = SymbolTable::new(true);
        assert_eq!(
            "malformed tree: unexpected list of 2 items under `parent_info`",
            parse_clause("cnf(c, axiom, p, inference(r, [], [[a, b]])).", &mut symbols)
                .unwrap_err()
                .to_string()
        );

        let tree: Tree = "include('a.ax').".parse().unwrap();
        let node = &tree.find_data(Production::Include)[0];
        assert_eq!(
            "malformed tree: unexpected include under `cnf_annotated`",
            Transformer::new(&mut symbols).transform(node).unwrap_err().to_string()
        );
    }

    #[test]
    fn test_transform_all() {
        let mut symbols = SymbolTable::new(true);
        let tree: Tree = "cnf(a, axiom, p). include('x.ax'). cnf(b, axiom, q). cnf(1, axiom, $false)."
            .parse()
            .unwrap();
        let clauses = Transformer::new(&mut symbols).transform_all(&tree).unwrap();
        assert_eq!(
            vec!["a", "b", "1"],
            clauses.iter().map(Clause::label).collect::<Vec<_>>()
        );
    }
}
