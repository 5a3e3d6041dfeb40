use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub tax_id: String,
    pub birth_date: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            birth_date: birth_date.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tax_id)
    }
}
