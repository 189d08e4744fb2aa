//! Page types
//!
//! Closed set of descriptive tags attached to a tab. The manager never
//! branches on them; they only drive icon and colour choice downstream.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Info,
    Document,
    Completed,
    Default,
    Form,
    Cover,
    Ending,
    Review,
    Payment,
    Login,
    Scheduling,
}

impl PageType {
    pub const ALL: [PageType; 11] = [
        PageType::Info,
        PageType::Document,
        PageType::Completed,
        PageType::Default,
        PageType::Form,
        PageType::Cover,
        PageType::Ending,
        PageType::Review,
        PageType::Payment,
        PageType::Login,
        PageType::Scheduling,
    ];

    /// Types offered when the user adds a page, in chooser order.
    pub fn selectable() -> &'static [PageType] {
        &[
            PageType::Form,
            PageType::Cover,
            PageType::Ending,
            PageType::Review,
            PageType::Payment,
            PageType::Login,
            PageType::Scheduling,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Info => "info",
            PageType::Document => "document",
            PageType::Completed => "completed",
            PageType::Default => "default",
            PageType::Form => "form",
            PageType::Cover => "cover",
            PageType::Ending => "ending",
            PageType::Review => "review",
            PageType::Payment => "payment",
            PageType::Login => "login",
            PageType::Scheduling => "scheduling",
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        PageType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| format!("Unknown page type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        for page_type in PageType::ALL {
            assert_eq!(page_type.as_str().parse::<PageType>(), Ok(page_type));
        }
        assert_eq!("  Payment ".parse::<PageType>(), Ok(PageType::Payment));
        assert!("checkout".parse::<PageType>().is_err());
    }

    #[test]
    fn test_selectable_excludes_builtin_types() {
        let selectable = PageType::selectable();
        assert!(selectable.contains(&PageType::Form));
        assert!(selectable.contains(&PageType::Login));
        for builtin in [
            PageType::Info,
            PageType::Document,
            PageType::Completed,
            PageType::Default,
        ] {
            assert!(!selectable.contains(&builtin));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&PageType::Scheduling).unwrap();
        assert_eq!(json, "\"scheduling\"");
    }
}
