/// Address typed into the contact form. Only presence is checked; the
/// provider rejects addresses it cannot deliver to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(value: Option<String>) -> Result<Self, String> {
        match value {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err("`email` is required.".to_string()),
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
