use std::fmt;

/// Trust tier of an agent. Declaration order is the sensitivity order, so
/// the derived `Ord` is what the access policy compares against.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClearanceLevel {
    Low,
    Medium,
    High,
}

impl ClearanceLevel {
    pub fn as_string(self) -> String {
        match self {
            ClearanceLevel::Low => String::from("low"),
            ClearanceLevel::Medium => String::from("medium"),
            ClearanceLevel::High => String::from("high"),
        }
    }
}

impl fmt::Display for ClearanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
