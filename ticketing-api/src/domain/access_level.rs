use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Access level of an employee, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[repr(i32)]
pub enum AccessLevel {
    #[default]
    Regular = 1,
    ServiceDesk = 2,
    Manager = 3,
}

impl AccessLevel {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            AccessLevel::Regular => "Regular Employee",
            AccessLevel::ServiceDesk => "Service Desk",
            AccessLevel::Manager => "Manager",
        }
    }

    /// True for service desk staff and managers
    pub fn is_service_desk_or_above(self) -> bool {
        self >= AccessLevel::ServiceDesk
    }
}

impl TryFrom<i32> for AccessLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AccessLevel::Regular),
            2 => Ok(AccessLevel::ServiceDesk),
            3 => Ok(AccessLevel::Manager),
            _ => Err(format!("Invalid access level: {value}")),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AccessLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(AccessLevel::Regular),
            "ServiceDesk" => Ok(AccessLevel::ServiceDesk),
            "Manager" => Ok(AccessLevel::Manager),
            _ => Err(()),
        }
    }
}

impl Serialize for AccessLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        AccessLevel::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_privilege() {
        assert!(AccessLevel::Regular < AccessLevel::ServiceDesk);
        assert!(AccessLevel::ServiceDesk < AccessLevel::Manager);
        assert!(!AccessLevel::Regular.is_service_desk_or_above());
        assert!(AccessLevel::Manager.is_service_desk_or_above());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&AccessLevel::ServiceDesk).unwrap(), "2");
        let level: AccessLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level, AccessLevel::Manager);
        assert!(serde_json::from_str::<AccessLevel>("7").is_err());
    }
}
