//! The fixed set of sort keys accepted by the profile listing.

use std::fmt;
use std::str::FromStr;

use models::profile;
use sea_orm::Order;

use crate::errors::ServiceError;

/// Sort key and direction. Ascending is the bare field name, descending the
/// same name prefixed with `-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileOrdering {
    NameAsc,
    NameDesc,
    EmailAsc,
    EmailDesc,
    TelAsc,
    TelDesc,
}

impl ProfileOrdering {
    pub const ALL: [ProfileOrdering; 6] = [
        ProfileOrdering::NameAsc,
        ProfileOrdering::NameDesc,
        ProfileOrdering::EmailAsc,
        ProfileOrdering::EmailDesc,
        ProfileOrdering::TelAsc,
        ProfileOrdering::TelDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileOrdering::NameAsc => "name",
            ProfileOrdering::NameDesc => "-name",
            ProfileOrdering::EmailAsc => "email",
            ProfileOrdering::EmailDesc => "-email",
            ProfileOrdering::TelAsc => "tel",
            ProfileOrdering::TelDesc => "-tel",
        }
    }

    pub fn column(self) -> profile::Column {
        match self {
            ProfileOrdering::NameAsc | ProfileOrdering::NameDesc => profile::Column::Name,
            ProfileOrdering::EmailAsc | ProfileOrdering::EmailDesc => profile::Column::Email,
            ProfileOrdering::TelAsc | ProfileOrdering::TelDesc => profile::Column::Tel,
        }
    }

    pub fn order(self) -> Order {
        match self {
            ProfileOrdering::NameAsc | ProfileOrdering::EmailAsc | ProfileOrdering::TelAsc => Order::Asc,
            ProfileOrdering::NameDesc | ProfileOrdering::EmailDesc | ProfileOrdering::TelDesc => Order::Desc,
        }
    }

    /// Validate the optional `ordering` query value. An absent value means
    /// store order; any value outside the whitelist, including an empty one,
    /// is an invalid argument.
    pub fn from_query(raw: Option<&str>) -> Result<Option<Self>, ServiceError> {
        match raw {
            None => Ok(None),
            Some(token) => token
                .parse::<ProfileOrdering>()
                .map(Some)
                .map_err(|e| ServiceError::invalid("ordering", e.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrdering(pub String);

impl fmt::Display for UnknownOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not a valid choice.", self.0)
    }
}

impl std::error::Error for UnknownOrdering {}

impl FromStr for ProfileOrdering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileOrdering::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| UnknownOrdering(s.to_string()))
    }
}

impl fmt::Display for ProfileOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_round_trips() {
        for o in ProfileOrdering::ALL {
            assert_eq!(o.as_str().parse::<ProfileOrdering>(), Ok(o));
        }
    }

    #[test]
    fn descending_tokens_are_negated_names() {
        assert_eq!(ProfileOrdering::from_query(Some("-tel")).unwrap(), Some(ProfileOrdering::TelDesc));
        assert_eq!(ProfileOrdering::TelDesc.order(), Order::Desc);
        assert_eq!(ProfileOrdering::EmailAsc.order(), Order::Asc);
    }

    #[test]
    fn unknown_tokens_are_rejected_not_ignored() {
        for raw in ["invalid_data", "", "Name", "--name", "id", "name;drop table profiles"] {
            match ProfileOrdering::from_query(Some(raw)) {
                Err(ServiceError::InvalidArgument(fields)) => {
                    let msgs = fields.get("ordering").expect("ordering key");
                    assert_eq!(msgs[0], format!("\"{raw}\" is not a valid choice."));
                }
                other => panic!("{raw}: expected invalid argument, got {other:?}"),
            }
        }
        assert_eq!(ProfileOrdering::from_query(None).unwrap(), None);
    }
}
