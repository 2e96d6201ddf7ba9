//! Literal values shared by name and definition rendering

use crate::workload::Ratio;
use std::fmt;

/// A scalar or a list of literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Single rendered value
    Scalar(String),
    /// Ordered sequence of literals
    List(Vec<Literal>),
}

impl Literal {
    /// Create a scalar from anything displayable
    pub fn scalar(value: impl fmt::Display) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Flatten into one string, separating list items with `sep`
    pub fn join(&self, sep: &str) -> String {
        match self {
            Self::Scalar(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(|item| item.join(sep))
                .collect::<Vec<_>>()
                .join(sep),
        }
    }

    /// Wrap every scalar in double quotes
    pub fn quoted(&self) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(format!("\"{}\"", s)),
            Self::List(items) => Self::List(items.iter().map(Literal::quoted).collect()),
        }
    }
}

/// Lists render as brace initializers, `{ a, b }`
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("{ ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(" }")
            }
        }
    }
}

/// Conversion into a [`Literal`]
pub trait ToLiteral {
    /// Render as a literal
    fn to_literal(&self) -> Literal;
}

macro_rules! scalar_literal {
    ($($ty:ty),*) => {
        $(impl ToLiteral for $ty {
            fn to_literal(&self) -> Literal {
                Literal::scalar(self)
            }
        })*
    };
}

scalar_literal!(u32, u64, usize, String, str);

impl<T: ToLiteral> ToLiteral for [T] {
    fn to_literal(&self) -> Literal {
        Literal::List(self.iter().map(ToLiteral::to_literal).collect())
    }
}

impl<T: ToLiteral> ToLiteral for Vec<T> {
    fn to_literal(&self) -> Literal {
        self.as_slice().to_literal()
    }
}

impl ToLiteral for Ratio {
    fn to_literal(&self) -> Literal {
        [self.loads, self.stores].to_literal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(Ratio::new(1, 0).to_literal().join("-"), "1-0");
        assert_eq!(vec![0usize, 2, 4].to_literal().join(", "), "0, 2, 4");
        assert_eq!(Literal::scalar(7).join("-"), "7");

        let nested = Literal::List(vec![
            Literal::scalar(1),
            vec![2u32, 3].to_literal(),
        ]);
        assert_eq!(nested.join("."), "1.2.3");
    }

    #[test]
    fn test_initializer_display() {
        assert_eq!(vec![0usize, 1].to_literal().to_string(), "{ 0, 1 }");
        assert_eq!(Vec::<usize>::new().to_literal().to_string(), "{  }");

        let devices = vec!["/dev/dax0.0".to_string()];
        assert_eq!(devices.to_literal().quoted().to_string(), "{ \"/dev/dax0.0\" }");
    }
}
