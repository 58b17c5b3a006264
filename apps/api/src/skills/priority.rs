use serde::{Deserialize, Serialize};

/// Urgency tier of a skill gap, derived only from its position in the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

/// Indices 0–2 → high, 3–5 → medium, 6+ → low.
pub fn assign_priority(index: usize) -> Priority {
    if index < 3 {
        Priority::High
    } else if index < 6 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_boundaries() {
        assert_eq!(assign_priority(0), Priority::High);
        assert_eq!(assign_priority(2), Priority::High);
        assert_eq!(assign_priority(3), Priority::Medium);
        assert_eq!(assign_priority(5), Priority::Medium);
        assert_eq!(assign_priority(6), Priority::Low);
        assert_eq!(assign_priority(9), Priority::Low);
    }

    #[test]
    fn test_priority_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), r#""medium""#);
        let p: Priority = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(p, Priority::High);
    }
}
