/*! Defines [`Predicate`]s and [`Literal`]s.

[`Predicate`]: crate::syntax::Predicate
[`Literal`]: crate::syntax::Literal
*/
use super::{Term, EQ_ID, FALSEHOOD_ID};

/// Represents the application of a predicate symbol on a list of terms.
///
/// **Note**: the ids of `$false`, `=` and `!=` are fixed in every symbol table. The id of
/// `!=` never appears in a [`Literal`] built by the transformer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Predicate {
    /// Is the id of the predicate symbol in the predicates namespace.
    pub index: usize,

    /// Is the list of arguments, in source order.
    pub arguments: Vec<Term>,
}

impl Predicate {
    /// Applies the predicate with id `index` on `arguments`.
    pub fn new(index: usize, arguments: Vec<Term>) -> Self {
        Self { index, arguments }
    }

    /// Creates the falsehood proposition `$false`.
    pub fn falsehood() -> Self {
        Self::new(FALSEHOOD_ID, vec![])
    }

    /// Creates the equation `left = right`.
    pub fn equality(left: Term, right: Term) -> Self {
        Self::new(EQ_ID, vec![left, right])
    }

    /// Returns true if the receiver is the falsehood proposition.
    pub fn is_falsehood(&self) -> bool {
        self.index == FALSEHOOD_ID && self.arguments.is_empty()
    }

    /// Returns true if the receiver is an equation.
    pub fn is_equality(&self) -> bool {
        self.index == EQ_ID
    }
}

/// Represents a possibly negated atom.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Literal {
    /// Is true if the literal is negated.
    pub negated: bool,

    /// Is the atom of the literal.
    pub atom: Predicate,
}

impl Literal {
    pub fn new(negated: bool, atom: Predicate) -> Self {
        Self { negated, atom }
    }

    /// Creates a positive literal.
    pub fn positive(atom: Predicate) -> Self {
        Self::new(false, atom)
    }

    /// Creates a negative literal.
    pub fn negative(atom: Predicate) -> Self {
        Self::new(true, atom)
    }

    /// Returns true if the receiver is the positive falsehood literal.
    pub fn is_falsehood(&self) -> bool {
        !self.negated && self.atom.is_falsehood()
    }
}
