/// Sentinel accepted by listings to mean "every category"
pub const CATEGORY_ALL: &str = "all";

pub const DEFAULT_CATEGORY: &str = "general";

/// Categories the catalog knows about. Others are stored as given.
pub const KNOWN_CATEGORIES: [&str; 3] = ["music", "volunteer", "general"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// An absent, empty or `"all"` parameter disables filtering.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") | Some(CATEGORY_ALL) => Self::All,
            Some(category) => Self::Only(category.to_string()),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_and_empty_disable_filtering() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("all")),
            CategoryFilter::All
        );
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn only_matches_exact_category() {
        let filter = CategoryFilter::from_param(Some("music"));
        assert_eq!(filter.as_category(), Some("music"));
        assert!(filter.matches("music"));
        assert!(!filter.matches("Music"));
        assert!(!filter.matches("volunteer"));
    }

    #[test]
    fn padded_category_is_kept_verbatim() {
        let filter = CategoryFilter::from_param(Some(" music "));
        assert_eq!(filter, CategoryFilter::Only(" music ".to_string()));
        assert!(!filter.matches("music"));

        assert_eq!(
            CategoryFilter::from_param(Some(" all ")),
            CategoryFilter::Only(" all ".to_string())
        );
    }
}
