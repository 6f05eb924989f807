use std::fmt;

/// Flattened, display-ready shelter cat.
///
/// The `id` is fixed at construction; everything else is plain data the
/// translator fills in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    id: String,
    pub name: String,
    pub description: String,
    pub sex: Sex,
    pub age: String,
    pub size: String,
    pub breed: String,
    pub thumbnail: String,
    pub pics: Vec<String>,
    pub options: String,
}

impl Cat {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            sex: Sex::Female,
            age: String::new(),
            size: String::new(),
            breed: String::new(),
            thumbnail: String::new(),
            pics: Vec::new(),
            options: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Only the exact code `"M"` is male; every other code, including a
    /// missing one, reads as female.
    pub fn from_code(code: &str) -> Self {
        if code == "M" {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Sex;

    #[test]
    fn only_m_is_male() {
        assert_eq!(Sex::from_code("M"), Sex::Male);
        assert_eq!(Sex::from_code("F"), Sex::Female);
        assert_eq!(Sex::from_code("m"), Sex::Female);
        assert_eq!(Sex::from_code(""), Sex::Female);
        assert_eq!(Sex::Male.to_string(), "Male");
    }
}
