/// Project categories offered by the contact form's select box. Anything
/// else, including the literal `other`, is carried through as free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectType {
    Residential,
    Commercial,
    Renovation,
    Site,
    Other(String),
}

impl ProjectType {
    /// `None` for a missing or empty selection.
    pub fn parse(value: Option<String>) -> Option<Self> {
        let value = value.filter(|v| !v.is_empty())?;
        let project_type = match value.as_str() {
            "residential" => ProjectType::Residential,
            "commercial" => ProjectType::Commercial,
            "renovation" => ProjectType::Renovation,
            "site" => ProjectType::Site,
            _ => ProjectType::Other(value),
        };
        Some(project_type)
    }

    /// The value as the form posted it.
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Renovation => "renovation",
            ProjectType::Site => "site",
            ProjectType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
