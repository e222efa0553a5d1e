/*! Defines the concrete parse tree emitted by the grammar and consumed by the [transformer].

The tree is deliberately generic: leaves are raw token texts and internal nodes only record
the [`Production`] that built them. Punctuation that carries no meaning (parentheses,
commas, the final dot) is dropped by the grammar; operators that the transformer needs
(`~`, `|`, `=`, `!=`, `:`) are kept as tokens.

[transformer]: crate::transform::Transformer
*/
use std::fmt;

/// Name of the rule attached to an inference record.
pub const INFERENCE: &str = "inference";

/// Identifies the grammar production that created a [`Node`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Production {
    /// A whole document: annotated clauses and include directives in source order.
    TptpFile,

    /// `cnf(name, role, formula annotations).`
    CnfAnnotated,

    /// `include('file').`
    Include,

    /// The optional `, source[, useful_info]` tail of an annotated clause.
    Annotations,

    /// A disjunction, possibly wrapped in parentheses.
    CnfFormula,

    /// `literal` or `disjunction | literal`.
    Disjunction,

    /// `atom`, `~ atom` or an infix inequality.
    Literal,

    /// Any atomic formula.
    AtomicFormula,

    /// `proposition` or `predicate(arguments)`.
    PlainAtomicFormula,

    /// `$word` or `$word(arguments)` in formula position.
    DefinedPlainFormula,

    /// `term = term`.
    DefinedInfixFormula,

    /// `term != term`.
    InfixUnary,

    /// A variable or a function term.
    Term,

    /// A plain or a defined function term.
    FunctionTerm,

    /// `constant` or `functor(arguments)`.
    PlainTerm,

    /// Numbers, distinct objects and `$word(arguments)` in term position.
    DefinedTerm,

    /// An upper word in term position.
    Variable,

    /// `term` or `term, arguments`.
    Arguments,

    /// The source of an annotated clause.
    Source,

    /// `data`, `data : term` or a list.
    GeneralTerm,

    /// Words, numbers and functions inside annotations.
    GeneralData,

    /// `word(general_terms)` inside annotations.
    GeneralFunction,

    /// `[general_terms]`.
    GeneralList,

    /// `inference(rule, useful_info, [parents])`.
    InferenceRecord,

    /// `parent` or `parent, parent_list`.
    ParentList,

    /// `source` or `source : details`.
    ParentInfo,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::TptpFile => "tptp_file",
            Self::CnfAnnotated => "cnf_annotated",
            Self::Include => "include",
            Self::Annotations => "annotations",
            Self::CnfFormula => "cnf_formula",
            Self::Disjunction => "disjunction",
            Self::Literal => "literal",
            Self::AtomicFormula => "fof_atomic_formula",
            Self::PlainAtomicFormula => "fof_plain_atomic_formula",
            Self::DefinedPlainFormula => "fof_defined_plain_formula",
            Self::DefinedInfixFormula => "fof_defined_infix_formula",
            Self::InfixUnary => "fof_infix_unary",
            Self::Term => "fof_term",
            Self::FunctionTerm => "fof_function_term",
            Self::PlainTerm => "fof_plain_term",
            Self::DefinedTerm => "fof_defined_term",
            Self::Variable => "variable",
            Self::Arguments => "fof_arguments",
            Self::Source => "source",
            Self::GeneralTerm => "general_term",
            Self::GeneralData => "general_data",
            Self::GeneralFunction => "general_function",
            Self::GeneralList => "general_list",
            Self::InferenceRecord => "inference_record",
            Self::ParentList => "parent_list",
            Self::ParentInfo => "parent_info",
        };
        write!(f, "{}", name)
    }
}

/// Is an internal node of a concrete parse tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Node {
    production: Production,
    children: Vec<Tree>,
}

impl Node {
    /// Creates a new node for `production` with the given children.
    pub fn new(production: Production, children: Vec<Tree>) -> Self {
        Self {
            production,
            children,
        }
    }

    /// Returns the production that created the receiver.
    #[inline(always)]
    pub fn production(&self) -> Production {
        self.production
    }

    /// Returns the children of the receiver.
    #[inline(always)]
    pub fn children(&self) -> &[Tree] {
        &self.children
    }
}

/// Is a concrete parse tree: either a raw token or an internal [`Node`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Tree {
    /// Wraps the text of a lexical token.
    Token(String),

    /// Wraps an internal node.
    Node(Node),
}

impl Tree {
    /// Creates a token leaf.
    pub fn token<S: Into<String>>(text: S) -> Self {
        Self::Token(text.into())
    }

    /// Creates an internal node.
    pub fn node(production: Production, children: Vec<Tree>) -> Self {
        Self::Node(Node::new(production, children))
    }

    /// Returns the production of the receiver if it is a node.
    pub fn production(&self) -> Option<Production> {
        match self {
            Self::Token(_) => None,
            Self::Node(node) => Some(node.production()),
        }
    }

    /// Returns the text of the receiver if it is a token.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// Returns all nodes of the given `production` in the receiver, in source order
    /// (pre-order, left to right). Nodes nested inside a match are also returned.
    ///
    /// **Example**:
    /// ```rust
    /// use tptp_cnf::tree::{Production, Tree};
    ///
    /// let tree: Tree = "cnf(a, axiom, p). include('b.ax'). cnf(c, axiom, q)."
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(2, tree.find_data(Production::CnfAnnotated).len());
    /// assert_eq!(1, tree.find_data(Production::Include).len());
    /// ```
    pub fn find_data(&self, production: Production) -> Vec<&Node> {
        let mut result = Vec::new();
        self.collect(production, &mut result);
        result
    }

    fn collect<'t>(&'t self, production: Production, result: &mut Vec<&'t Node>) {
        if let Self::Node(node) = self {
            if node.production == production {
                result.push(node);
            }
            node.children
                .iter()
                .for_each(|child| child.collect(production, result));
        }
    }

    /// Builds the tree of a general function inside annotations. Applications of
    /// `inference` to a rule, a useful-info term and a list of parents are recognized as
    /// inference records; anything else stays a generic general function.
    pub(crate) fn general_function(name: String, mut arguments: Vec<Tree>) -> Self {
        if name == INFERENCE && arguments.len() == 3 {
            if let Some(parents) = list_items(&arguments[2]) {
                let parents = parent_list(parents);
                arguments.truncate(2);
                arguments.push(parents);
                return Self::node(Production::InferenceRecord, arguments);
            }
        }
        let mut children = vec![Self::token(name)];
        children.extend(arguments);
        Self::node(Production::GeneralFunction, children)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Token(text) => write!(f, "{:?}", text),
            Self::Node(node) => {
                let children: Vec<String> =
                    node.children.iter().map(|c| c.to_string()).collect();
                write!(f, "{}[{}]", node.production, children.join(", "))
            }
        }
    }
}

// Returns the items of a general list, looking through `general_term` wrappers.
fn list_items(tree: &Tree) -> Option<Vec<Tree>> {
    match tree {
        Tree::Node(node) => match node.production {
            Production::GeneralList => Some(node.children.clone()),
            Production::GeneralTerm if node.children.len() == 1 => list_items(&node.children[0]),
            _ => None,
        },
        Tree::Token(_) => None,
    }
}

// Folds the items of a parent list into a right-recursive `parent_list` tree.
fn parent_list(items: Vec<Tree>) -> Tree {
    let mut list = None;
    for item in items.into_iter().rev() {
        let info = parent_info(item);
        list = Some(match list {
            None => Tree::node(Production::ParentList, vec![info]),
            Some(rest) => Tree::node(Production::ParentList, vec![info, rest]),
        });
    }
    list.unwrap_or_else(|| Tree::node(Production::ParentList, vec![]))
}

// Splits `source : details` into the children of a `parent_info` node.
fn parent_info(item: Tree) -> Tree {
    match item {
        Tree::Node(node)
            if node.production == Production::GeneralTerm && node.children.len() == 3 =>
        {
            Tree::node(Production::ParentInfo, node.children)
        }
        item => Tree::node(Production::ParentInfo, vec![item]),
    }
}
