#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    /// Accepts any non-empty string. Whitespace is kept as submitted.
    pub fn parse(field: &str, value: Option<String>) -> Result<Self, String> {
        match value {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err(format!("`{field}` is required.")),
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequiredText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
