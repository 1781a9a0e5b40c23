use serde::{Deserialize, Serialize};

/// One button in the review filter bar.
///
/// Options are identified by their position in the bar, not by label, so two
/// options may share a label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub label: String,
    #[serde(default)]
    pub count: Option<u32>,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, count: Option<u32>) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    /// Text shown on the button, e.g. "5 Sao (643)".
    pub fn display_label(&self) -> String {
        match self.count {
            Some(count) => format!("{} ({})", self.label, count),
            None => self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_appends_count() {
        assert_eq!(FilterOption::new("5 Sao", Some(643)).display_label(), "5 Sao (643)");
        assert_eq!(FilterOption::new("1 Sao", Some(0)).display_label(), "1 Sao (0)");
        assert_eq!(FilterOption::new("Tất cả", None).display_label(), "Tất cả");
    }
}
