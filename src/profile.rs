use std::fmt;

/// Contact profile stored in the client's profile file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Letters and spaces only
    pub name: String,
    /// 7-15 digits
    pub phone: String,
    /// Basic local@domain.tld address
    pub email: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// Renders the three `Key: value` lines, each newline-terminated
impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Email: {}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_three_labeled_lines_in_order() {
        let profile = Profile::new("Jane Doe", "5551234567", "jane@example.com");
        assert_eq!(
            profile.to_string(),
            "Name: Jane Doe\nPhone: 5551234567\nEmail: jane@example.com\n"
        );
    }
}
