pub mod gcd;
pub mod univariate;

use std::fmt::{Display, Formatter};

use smartstring::{LazyCompact, SmartString};

/// The designated variable of a univariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variable(SmartString<LazyCompact>);

impl Variable {
    pub fn new(name: &str) -> Variable {
        Variable(name.into())
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
