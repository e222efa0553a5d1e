/*! Defines the [`SymbolTable`], a bidirectional map between surface names and dense ids in
three independent [`Namespace`]s.

[`SymbolTable`]: crate::syntax::SymbolTable
[`Namespace`]: crate::syntax::Namespace
*/
use super::Error;
use crate::trace::NEW_SYMBOL;
use indexmap::IndexSet;
use std::fmt;

/// Predicate symbol of falsehood.
pub const FALSEHOOD_SYM: &str = "$false";

/// Predicate symbol of equality.
pub const EQ_SYM: &str = "=";

/// Predicate symbol of inequality. It only exists on the surface: the transformer turns
/// every inequality into a negated equation.
pub const NEQ_SYM: &str = "!=";

pub const FALSEHOOD_ID: usize = 0;

pub const EQ_ID: usize = 1;

pub const NEQ_ID: usize = 2;

/// Occupies id 0 of the functions namespace. It is not a legal TPTP identifier, so it never
/// collides with a surface name.
pub const FUNCTION_GUARD: &str = "$not#a&function^";

/// Identifies one of the independent namespaces of a [`SymbolTable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Namespace {
    Variables,
    Functions,
    Predicates,
}

impl Namespace {
    /// Returns all namespaces in the order of the persisted vocabulary.
    pub fn all() -> [Namespace; 3] {
        [Self::Variables, Self::Functions, Self::Predicates]
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Variables => "variables",
            Self::Functions => "functions",
            Self::Predicates => "predicates",
        };
        write!(f, "{}", name)
    }
}

/// Interns variable, function and predicate names into dense ids.
///
/// Ids are assigned in first-seen order and never change. In each namespace the id of a
/// name is its position in an [`IndexSet`], so the inverse view is always consistent with
/// the forward map.
///
/// A table is either *extendable*, admitting unseen names, or *strict*, rejecting unseen
/// function and predicate names. Variables are admitted in both modes.
///
/// **Example**:
/// ```rust
/// use tptp_cnf::syntax::{Namespace, SymbolTable};
///
/// let mut symbols = SymbolTable::new(true);
/// let p = symbols.intern("p", Namespace::Predicates).unwrap();
/// assert_eq!(3, p); // after `$false`, `=` and `!=`
/// assert_eq!(p, symbols.intern("p", Namespace::Predicates).unwrap());
/// assert_eq!("p", symbols.name(p, Namespace::Predicates).unwrap());
///
/// symbols.set_extendable(false);
/// assert!(symbols.intern("q", Namespace::Predicates).is_err());
/// assert!(symbols.intern("X", Namespace::Variables).is_ok());
/// ```
///
/// [`IndexSet`]: indexmap::IndexSet
#[derive(Clone, Debug)]
pub struct SymbolTable {
    variables: IndexSet<String>,
    functions: IndexSet<String>,
    predicates: IndexSet<String>,
    extendable: bool,
}

impl SymbolTable {
    /// Creates a table with the reserved predicates, the function guard and no variables.
    pub fn new(extendable: bool) -> Self {
        let functions = std::iter::once(FUNCTION_GUARD.to_string()).collect();
        let predicates = [FALSEHOOD_SYM, EQ_SYM, NEQ_SYM]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            variables: IndexSet::new(),
            functions,
            predicates,
            extendable,
        }
    }

    /// Creates a table from three ordered lists of names, where the id of a name is its
    /// position in its list.
    ///
    /// **Note**: the predicates list must start with `$false`, `=` and `!=`, and no list
    /// may contain the same name twice.
    pub fn from_lists<V, F, P>(
        variables: V,
        functions: F,
        predicates: P,
        extendable: bool,
    ) -> Result<Self, Error>
    where
        V: IntoIterator<Item = String>,
        F: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        let variables = unique(variables, Namespace::Variables)?;
        let functions = unique(functions, Namespace::Functions)?;
        let predicates = unique(predicates, Namespace::Predicates)?;

        for (id, symbol) in [FALSEHOOD_SYM, EQ_SYM, NEQ_SYM].iter().enumerate() {
            if predicates.get_index(id).map(String::as_str) != Some(*symbol) {
                return Err(Error::MisplacedReserved {
                    symbol: symbol.to_string(),
                    id,
                    namespace: Namespace::Predicates,
                });
            }
        }

        Ok(Self {
            variables,
            functions,
            predicates,
            extendable,
        })
    }

    /// Returns true if the receiver admits unseen function and predicate names.
    #[inline(always)]
    pub fn is_extendable(&self) -> bool {
        self.extendable
    }

    pub fn set_extendable(&mut self, extendable: bool) {
        self.extendable = extendable;
    }

    /// Returns the id of `name` in `namespace`, registering it at the next id if it is
    /// unseen and either the receiver is extendable or `namespace` is the variables.
    pub fn intern(&mut self, name: &str, namespace: Namespace) -> Result<usize, Error> {
        if let Some(id) = self.lookup(name, namespace) {
            return Ok(id);
        }
        if !self.extendable && namespace != Namespace::Variables {
            return Err(Error::UnknownSymbol {
                symbol: name.into(),
                namespace,
            });
        }

        let (id, _) = self.symbols_mut(namespace).insert_full(name.into());
        debug!(
            event = NEW_SYMBOL,
            namespace = %namespace,
            symbol = name,
            symbol_id = id as u64,
        );
        Ok(id)
    }

    /// Returns the id of `name` in `namespace` without registering it.
    pub fn lookup(&self, name: &str, namespace: Namespace) -> Option<usize> {
        self.symbols(namespace).get_index_of(name)
    }

    /// Returns the name of `id` in `namespace`.
    pub fn name(&self, id: usize, namespace: Namespace) -> Result<&str, Error> {
        self.symbols(namespace)
            .get_index(id)
            .map(String::as_str)
            .ok_or(Error::UnknownId { id, namespace })
    }

    /// Returns the names of `namespace` in the order of their ids.
    pub fn names(&self, namespace: Namespace) -> impl Iterator<Item = &str> {
        self.symbols(namespace).iter().map(String::as_str)
    }

    /// Returns the number of names in `namespace`.
    pub fn len(&self, namespace: Namespace) -> usize {
        self.symbols(namespace).len()
    }

    fn symbols(&self, namespace: Namespace) -> &IndexSet<String> {
        match namespace {
            Namespace::Variables => &self.variables,
            Namespace::Functions => &self.functions,
            Namespace::Predicates => &self.predicates,
        }
    }

    fn symbols_mut(&mut self, namespace: Namespace) -> &mut IndexSet<String> {
        match namespace {
            Namespace::Variables => &mut self.variables,
            Namespace::Functions => &mut self.functions,
            Namespace::Predicates => &mut self.predicates,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(true)
    }
}

fn unique<I>(names: I, namespace: Namespace) -> Result<IndexSet<String>, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut result = IndexSet::new();
    for name in names {
        if result.contains(&name) {
            return Err(Error::DuplicateSymbol {
                symbol: name,
                namespace,
            });
        }
        result.insert(name);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_seeding() {
        let symbols = SymbolTable::default();
        assert!(symbols.is_extendable());
        assert_eq!(0, symbols.len(Namespace::Variables));
        assert_eq!(
            vec![FUNCTION_GUARD],
            symbols.names(Namespace::Functions).collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["$false", "=", "!="],
            symbols.names(Namespace::Predicates).collect::<Vec<_>>()
        );
        assert_eq!(Some(FALSEHOOD_ID), symbols.lookup(FALSEHOOD_SYM, Namespace::Predicates));
        assert_eq!(Some(EQ_ID), symbols.lookup(EQ_SYM, Namespace::Predicates));
        assert_eq!(Some(NEQ_ID), symbols.lookup(NEQ_SYM, Namespace::Predicates));
    }

    #[test]
    fn test_idempotent_intern() {
        let mut symbols = SymbolTable::new(true);
        let f = symbols.intern("f", Namespace::Functions).unwrap();
        assert_eq!(1, f);
        assert_eq!(2, symbols.len(Namespace::Functions));
        assert_eq!(f, symbols.intern("f", Namespace::Functions).unwrap());
        assert_eq!(2, symbols.len(Namespace::Functions));
        assert_eq!(2, symbols.intern("g", Namespace::Functions).unwrap());
    }

    #[test]
    fn test_namespace_independence() {
        let mut symbols = SymbolTable::new(true);
        assert_eq!(0, symbols.intern("a", Namespace::Variables).unwrap());
        assert_eq!(1, symbols.intern("a", Namespace::Functions).unwrap());
        assert_eq!(3, symbols.intern("a", Namespace::Predicates).unwrap());
        assert_eq!(2, symbols.intern("b", Namespace::Functions).unwrap());
        assert_eq!(Some(3), symbols.lookup("a", Namespace::Predicates));
        assert_eq!(Some(0), symbols.lookup("a", Namespace::Variables));
        assert_eq!(None, symbols.lookup("b", Namespace::Predicates));
    }

    #[test]
    fn test_strict_mode() {
        let mut symbols = SymbolTable::new(false);
        assert!(matches!(
            symbols.intern("p", Namespace::Predicates),
            Err(Error::UnknownSymbol { namespace: Namespace::Predicates, .. })
        ));
        assert!(matches!(
            symbols.intern("f", Namespace::Functions),
            Err(Error::UnknownSymbol { namespace: Namespace::Functions, .. })
        ));
        assert_eq!(0, symbols.intern("X", Namespace::Variables).unwrap());
        assert_eq!(EQ_ID, symbols.intern(EQ_SYM, Namespace::Predicates).unwrap());
        assert_eq!(3, symbols.len(Namespace::Predicates));

        symbols.set_extendable(true);
        assert_eq!(3, symbols.intern("p", Namespace::Predicates).unwrap());
    }

    #[test]
    fn test_inverse_view() {
        let mut symbols = SymbolTable::new(true);
        assert!(matches!(
            symbols.name(1, Namespace::Functions),
            Err(Error::UnknownId { id: 1, namespace: Namespace::Functions })
        ));
        let f = symbols.intern("f", Namespace::Functions).unwrap();
        assert_eq!("f", symbols.name(f, Namespace::Functions).unwrap());
        assert_eq!("!=", symbols.name(NEQ_ID, Namespace::Predicates).unwrap());
        assert_eq!(
            "unknown id `7` in variables",
            symbols.name(7, Namespace::Variables).unwrap_err().to_string()
        );
    }

    #[test]
    fn test_from_lists() {
        {
            let symbols = SymbolTable::from_lists(
                strings(&["X", "Y"]),
                strings(&[FUNCTION_GUARD, "f"]),
                strings(&["$false", "=", "!=", "p"]),
                false,
            )
            .unwrap();
            assert!(!symbols.is_extendable());
            assert_eq!(Some(1), symbols.lookup("Y", Namespace::Variables));
            assert_eq!(Some(1), symbols.lookup("f", Namespace::Functions));
            assert_eq!(Some(3), symbols.lookup("p", Namespace::Predicates));
        }
        {
            let result = SymbolTable::from_lists(
                strings(&["X", "X"]),
                strings(&[]),
                strings(&["$false", "=", "!="]),
                true,
            );
            assert!(matches!(
                result,
                Err(Error::DuplicateSymbol { namespace: Namespace::Variables, .. })
            ));
        }
        {
            let result = SymbolTable::from_lists(
                strings(&[]),
                strings(&[]),
                strings(&["=", "$false", "!="]),
                true,
            );
            assert!(matches!(
                result,
                Err(Error::MisplacedReserved { id: 0, .. })
            ));
        }
        {
            let result =
                SymbolTable::from_lists(strings(&[]), strings(&[]), strings(&["$false"]), true);
            assert!(matches!(result, Err(Error::MisplacedReserved { id: 1, .. })));
        }
    }
}
