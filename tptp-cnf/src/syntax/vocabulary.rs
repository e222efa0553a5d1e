/*! Implements persistence of a [`SymbolTable`] as a JSON [`Vocabulary`].

[`SymbolTable`]: crate::syntax::SymbolTable
[`Vocabulary`]: crate::syntax::Vocabulary
*/
use super::{Error, Namespace, SymbolTable};
use serde_derive::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Is the persisted form of a symbol table: one ordered list of names per namespace, where
/// the position of a name in its list is its id.
///
/// **Example**:
/// ```rust
/// use tptp_cnf::syntax::{Namespace, SymbolTable, Vocabulary};
///
/// let vocabulary: Vocabulary = serde_json::from_str(r#"{
///     "variables": ["X"],
///     "functions": ["$not#a&function^", "a"],
///     "predicates": ["$false", "=", "!=", "p"]
/// }"#).unwrap();
/// let symbols = SymbolTable::from_vocabulary(vocabulary, false).unwrap();
/// assert_eq!(Some(3), symbols.lookup("p", Namespace::Predicates));
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct Vocabulary {
    pub variables: Vec<String>,
    pub functions: Vec<String>,
    pub predicates: Vec<String>,
}

impl SymbolTable {
    /// Creates a symbol table from `vocabulary`, rejecting inconsistent vocabularies.
    pub fn from_vocabulary(vocabulary: Vocabulary, extendable: bool) -> Result<Self, Error> {
        Self::from_lists(
            vocabulary.variables,
            vocabulary.functions,
            vocabulary.predicates,
            extendable,
        )
    }

    /// Returns the current names of the receiver as a vocabulary.
    pub fn to_vocabulary(&self) -> Vocabulary {
        let names = |namespace: Namespace| -> Vec<String> {
            self.names(namespace).map(String::from).collect()
        };
        Vocabulary {
            variables: names(Namespace::Variables),
            functions: names(Namespace::Functions),
            predicates: names(Namespace::Predicates),
        }
    }

    /// Loads a symbol table from the vocabulary file at `path`.
    pub fn load<P: AsRef<Path>>(path: P, extendable: bool) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let vocabulary: Vocabulary = serde_json::from_str(&text)?;
        Self::from_vocabulary(vocabulary, extendable)
    }

    /// Writes the vocabulary of the receiver to the file at `path`, replacing its content.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let text = serde_json::to_string(&self.to_vocabulary())?;
        fs::write(path, text)?;
        Ok(())
    }
}
