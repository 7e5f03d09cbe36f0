use std::fmt;
use std::str::FromStr;

/// Question category chosen by the user in the chat UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Financial,
    Legal,
    Hr,
    Marketing,
    Growth,
    Reports,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Financial => "financial",
            Category::Legal => "legal",
            Category::Hr => "hr",
            Category::Marketing => "marketing",
            Category::Growth => "growth",
            Category::Reports => "reports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Financial => "Financial analysis",
            Category::Legal => "Legal questions",
            Category::Hr => "Human resources",
            Category::Marketing => "Marketing and promotion",
            Category::Growth => "Business growth and development",
            Category::Reports => "Reports and data analysis",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial" => Ok(Category::Financial),
            "legal" => Ok(Category::Legal),
            "hr" => Ok(Category::Hr),
            "marketing" => Ok(Category::Marketing),
            "growth" => Ok(Category::Growth),
            "reports" => Ok(Category::Reports),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
