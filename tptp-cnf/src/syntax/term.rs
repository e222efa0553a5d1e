/*! Defines the syntax of terms: [`Variable`]s and [`Function`] applications.

[`Variable`]: crate::syntax::Variable
[`Function`]: crate::syntax::Function
*/

/// Represents a variable by its id in the variables namespace.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Variable {
    /// Is the id of the variable.
    pub index: usize,
}

impl Variable {
    /// Creates a variable with the given id.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Represents the application of a function symbol on a list of terms. A function with no
/// arguments is a constant.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Function {
    /// Is the id of the function symbol in the functions namespace.
    pub index: usize,

    /// Is the list of arguments, in source order.
    pub arguments: Vec<Term>,
}

impl Function {
    /// Applies the function with id `index` on `arguments`.
    pub fn new(index: usize, arguments: Vec<Term>) -> Self {
        Self { index, arguments }
    }

    /// Creates a constant, that is, a function with no arguments.
    pub fn constant(index: usize) -> Self {
        Self::new(index, vec![])
    }

    /// Returns true if the receiver has no arguments.
    #[inline(always)]
    pub fn is_constant(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// Represents a term: either a variable or a function application.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Term {
    /// Is a variable term.
    Var { variable: Variable },

    /// Is a function application, including constants.
    App { function: Function },
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Self::Var { variable }
    }
}

impl From<Function> for Term {
    fn from(function: Function) -> Self {
        Self::App { function }
    }
}
