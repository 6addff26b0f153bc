//! Flattening of arbitrarily nested lists by direct structural recursion.

/// A value or an arbitrarily-deep list of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    Value(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Collapses any depth of nesting into a flat `Vec`, preserving
    /// left-to-right order. Empty lists contribute nothing.
    pub fn flatten(self) -> Vec<T> {
        match self {
            Nested::Value(value) => vec![value],
            Nested::List(items) => items.into_iter().flat_map(Nested::flatten).collect(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Value(value)
    }
}
