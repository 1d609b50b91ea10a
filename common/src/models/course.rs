use crate::models::{FlatRecord, Keyed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Keyed for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FlatRecord for Course {
    fn fields(&self) -> (&str, &str) {
        (self.id.as_str(), self.name.as_str())
    }

    fn from_fields(id: &str, name: &str) -> Self {
        Self::new(id, name)
    }
}
