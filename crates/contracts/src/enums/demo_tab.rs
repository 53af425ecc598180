use serde::{Deserialize, Serialize};

/// Perspectives shown in the product demo section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoTab {
    Athlete,
    Coach,
    Team,
}

impl DemoTab {
    /// Stable code used in markup ids and anchors
    pub fn code(&self) -> &'static str {
        match self {
            DemoTab::Athlete => "athlete",
            DemoTab::Coach => "coach",
            DemoTab::Team => "team",
        }
    }

    /// Human-readable tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            DemoTab::Athlete => "Athlete View",
            DemoTab::Coach => "Coach View",
            DemoTab::Team => "Team View",
        }
    }

    /// All tabs in display order. The first entry is the default selection.
    pub fn all() -> Vec<DemoTab> {
        vec![DemoTab::Athlete, DemoTab::Coach, DemoTab::Team]
    }

    /// Parse from a code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "athlete" => Some(DemoTab::Athlete),
            "coach" => Some(DemoTab::Coach),
            "team" => Some(DemoTab::Team),
            _ => None,
        }
    }
}

impl std::fmt::Display for DemoTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for tab in DemoTab::all() {
            assert_eq!(DemoTab::from_code(tab.code()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(DemoTab::from_code("bogus"), None);
        assert_eq!(DemoTab::from_code(""), None);
    }

    #[test]
    fn test_display_order() {
        // The athlete perspective is the default tab, so it must come first.
        assert_eq!(
            DemoTab::all(),
            vec![DemoTab::Athlete, DemoTab::Coach, DemoTab::Team]
        );
    }
}
