use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// File attribute a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    LastModified,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Size, SortKey::LastModified];

    /// Value used on the wire (`orderBy` query parameter).
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "fileName",
            SortKey::Size => "size",
            SortKey::LastModified => "lastModified",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::InvalidSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ascending" => Ok(SortDirection::Ascending),
            "Descending" => Ok(SortDirection::Descending),
            other => Err(DomainError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{SortDirection, SortKey};

    #[test]
    fn sort_key_parses_wire_values() {
        assert_eq!("fileName".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("size".parse::<SortKey>(), Ok(SortKey::Size));
        assert_eq!("lastModified".parse::<SortKey>(), Ok(SortKey::LastModified));
    }

    #[test]
    fn sort_key_rejects_unknown_value() {
        let err = "name".parse::<SortKey>().expect_err("name is not a wire value");

        assert_eq!(
            err.to_string(),
            "invalid orderBy: name. expected one of fileName, size, lastModified"
        );
    }

    #[test]
    fn sort_key_wire_value_round_trips() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>(), Ok(key));
        }
    }

    #[test]
    fn sort_direction_is_case_sensitive() {
        assert_eq!(
            "Descending".parse::<SortDirection>(),
            Ok(SortDirection::Descending)
        );
        assert!("descending".parse::<SortDirection>().is_err());
        assert!("".parse::<SortDirection>().is_err());
    }

    #[test]
    fn defaults_are_name_ascending() {
        assert_eq!(SortKey::default(), SortKey::Name);
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert!(!SortDirection::default().is_descending());
    }
}
