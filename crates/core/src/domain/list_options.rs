use super::{DomainError, SortDirection, SortKey};

/// Filter and ordering applied to a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Regular expression searched for anywhere in the file name. Empty matches all.
    pub filter: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl ListOptions {
    /// Builds options from raw query values. Missing values fall back to the
    /// defaults, present but unknown values are rejected.
    pub fn from_raw(
        filter: Option<&str>,
        sort_key: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            filter: filter.unwrap_or_default().to_string(),
            sort_key: sort_key.map(str::parse::<SortKey>).transpose()?.unwrap_or_default(),
            direction: direction.map(str::parse::<SortDirection>).transpose()?.unwrap_or_default(),
        })
    }

    pub fn sorted_by(mut self, sort_key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.direction = direction;
        self
    }

    pub fn filtered(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ListOptions;
    use crate::domain::{DomainError, SortDirection, SortKey};

    #[test]
    fn missing_values_use_defaults() {
        let options = ListOptions::from_raw(None, None, None).expect("defaults should parse");

        assert_eq!(options, ListOptions::default());
        assert_eq!(options.filter, "");
        assert_eq!(options.sort_key, SortKey::Name);
        assert_eq!(options.direction, SortDirection::Ascending);
    }

    #[test]
    fn present_values_are_parsed() {
        let options = ListOptions::from_raw(Some("^test"), Some("size"), Some("Descending"))
            .expect("valid values should parse");

        assert_eq!(options.filter, "^test");
        assert_eq!(options.sort_key, SortKey::Size);
        assert_eq!(options.direction, SortDirection::Descending);
    }

    #[test]
    fn unknown_values_are_not_defaulted() {
        let err = ListOptions::from_raw(None, Some("created"), None)
            .expect_err("unknown sort key should fail");
        assert_eq!(err, DomainError::InvalidSortKey("created".to_string()));

        let err = ListOptions::from_raw(None, None, Some("Sideways"))
            .expect_err("unknown direction should fail");
        assert_eq!(err, DomainError::InvalidSortDirection("Sideways".to_string()));
    }
}
