use validator::ValidateEmail;

/// A configured address, optionally with a display name:
/// `King Street Contractors <noreply@example.com>` or `owner@example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    name: Option<String>,
    address: String,
}

impl Mailbox {
    pub fn parse(s: String) -> Result<Self, String> {
        let s = s.trim();
        let (name, address) = match (s.rfind('<'), s.ends_with('>')) {
            (Some(open), true) => {
                let name = s[..open].trim();
                let address = s[open + 1..s.len() - 1].trim();
                ((!name.is_empty()).then(|| name.to_string()), address)
            }
            (None, false) => (None, s),
            _ => return Err(format!("{s} is not a valid mailbox.")),
        };

        if !address.validate_email() {
            return Err(format!("{address} is not a valid email address."));
        }

        Ok(Self {
            name,
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => f.write_str(&self.address),
        }
    }
}

impl TryFrom<String> for Mailbox {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Mailbox::parse(value)
    }
}
