/*! Defines [`Clause`]s, the values produced by the transformer.

A clause is an immutable value: the `with_*` methods consume the receiver and return a
derived copy with one field replaced.

[`Clause`]: crate::syntax::Clause
*/
use super::Literal;

/// Is the role of clauses that do not come with a role of their own.
pub const DEFAULT_ROLE: &str = "lemma";

/// Records the rule and the parent labels from which a clause was derived.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Inference {
    /// Is the name of the inference rule.
    pub rule: String,

    /// Is the list of parent labels, in source order.
    pub parents: Vec<String>,
}

impl Inference {
    pub fn new<S: Into<String>>(rule: S, parents: Vec<String>) -> Self {
        Self {
            rule: rule.into(),
            parents,
        }
    }
}

/// Represents an annotated disjunction of literals. A clause with no literals is the empty
/// (contradictory) clause.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
    label: String,
    role: String,
    inference: Option<Inference>,
    processed: Option<bool>,
    birth_step: Option<usize>,
}

impl Clause {
    /// Creates a clause over `literals` with a freshly generated label and the default
    /// role.
    pub fn new(literals: Vec<Literal>) -> Self {
        Self {
            literals,
            label: generate_label(),
            role: DEFAULT_ROLE.into(),
            inference: None,
            processed: None,
            birth_step: None,
        }
    }

    /// Creates an empty clause.
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns the literals of the receiver.
    #[inline(always)]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Returns true if the receiver is the empty clause.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline(always)]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the inference record of the receiver if it has one.
    #[inline(always)]
    pub fn inference(&self) -> Option<&Inference> {
        self.inference.as_ref()
    }

    /// Returns the name of the inference rule that derived the receiver.
    pub fn inference_rule(&self) -> Option<&str> {
        self.inference.as_ref().map(|i| i.rule.as_str())
    }

    /// Returns the labels of the parents of the receiver.
    pub fn inference_parents(&self) -> Option<&[String]> {
        self.inference.as_ref().map(|i| i.parents.as_slice())
    }

    /// Returns whether a saturation loop has processed the receiver. Parsing never sets it.
    #[inline(always)]
    pub fn processed(&self) -> Option<bool> {
        self.processed
    }

    /// Returns the step at which the receiver appeared in a saturation loop. Parsing never
    /// sets it.
    #[inline(always)]
    pub fn birth_step(&self) -> Option<usize> {
        self.birth_step
    }

    pub fn with_label<S: Into<String>>(self, label: S) -> Self {
        Self {
            label: label.into(),
            ..self
        }
    }

    pub fn with_role<S: Into<String>>(self, role: S) -> Self {
        Self {
            role: role.into(),
            ..self
        }
    }

    /// Returns a copy of the receiver with the given inference record; `None` clears both
    /// the rule and the parents.
    pub fn with_inference(self, inference: Option<Inference>) -> Self {
        Self { inference, ..self }
    }

    pub fn with_processed(self, processed: bool) -> Self {
        Self {
            processed: Some(processed),
            ..self
        }
    }

    pub fn with_birth_step(self, birth_step: usize) -> Self {
        Self {
            birth_step: Some(birth_step),
            ..self
        }
    }
}

// A random 128 bit value in hex, grouped like a UUID with `_` separators and prefixed with
// `x` so that the label is a lower word.
fn generate_label() -> String {
    let hex = format!("{:032x}", rand::random::<u128>());
    format!(
        "x{}_{}_{}_{}_{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Predicate;

    #[test]
    fn test_defaults() {
        let clause = Clause::new(vec![Literal::positive(Predicate::new(3, vec![]))]);
        assert_eq!(DEFAULT_ROLE, clause.role());
        assert_eq!(None, clause.inference());
        assert_eq!(None, clause.inference_rule());
        assert_eq!(None, clause.inference_parents());
        assert_eq!(None, clause.processed());
        assert_eq!(None, clause.birth_step());
        assert!(!clause.is_empty());
        assert!(Clause::empty().is_empty());
    }

    #[test]
    fn test_generated_label() {
        let label = Clause::empty().label().to_string();
        assert_eq!(37, label.len());
        assert!(label.starts_with('x'));
        assert_eq!(4, label.matches('_').count());
        assert!(label[1..]
            .chars()
            .all(|c| c == '_' || c.is_ascii_hexdigit()));
        assert_ne!(label, Clause::empty().label());
    }

    #[test]
    fn test_derived_copies() {
        let clause = Clause::empty()
            .with_label("c")
            .with_role("axiom")
            .with_inference(Some(Inference::new(
                "resolution",
                vec!["a".into(), "b".into()],
            )))
            .with_processed(true)
            .with_birth_step(3);
        assert_eq!("c", clause.label());
        assert_eq!("axiom", clause.role());
        assert_eq!(Some("resolution"), clause.inference_rule());
        assert_eq!(
            Some(&["a".to_string(), "b".to_string()][..]),
            clause.inference_parents()
        );
        assert_eq!(Some(true), clause.processed());
        assert_eq!(Some(3), clause.birth_step());

        let cleared = clause.with_inference(None);
        assert_eq!(None, cleared.inference_rule());
        assert_eq!(None, cleared.inference_parents());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            Clause::empty().with_label("c"),
            Clause::empty().with_label("c")
        );
        assert_ne!(
            Clause::empty().with_label("c"),
            Clause::empty().with_label("c").with_role("axiom")
        );
    }
}
