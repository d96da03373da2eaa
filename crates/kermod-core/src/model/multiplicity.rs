use serde::{Deserialize, Serialize};

use super::element::ElementData;

/// An integer interval constraining how many values a feature may hold
///
/// `upper_bound` uses `-1` as the unbounded sentinel. Validity is a
/// validation-engine concern; `is_valid` is a convenience mirror of the same
/// rule for callers that want a quick check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplicityRange {
    #[serde(flatten)]
    pub element: ElementData,

    /// Lower bound, expected ≥ 0
    pub lower_bound: i64,

    /// Upper bound; `-1` means unbounded
    pub upper_bound: i64,
}

impl MultiplicityRange {
    /// Sentinel upper bound meaning "no upper limit"
    pub const UNBOUNDED: i64 = -1;

    /// Create a range with the given bounds
    pub fn new(id: impl Into<String>, lower_bound: i64, upper_bound: i64) -> Self {
        Self {
            element: ElementData::new(id),
            lower_bound,
            upper_bound,
        }
    }

    /// Create an unbounded range `lower..*`
    pub fn unbounded(id: impl Into<String>, lower_bound: i64) -> Self {
        Self::new(id, lower_bound, Self::UNBOUNDED)
    }

    /// The range's id
    pub fn id(&self) -> &str {
        &self.element.id
    }

    /// Whether the upper bound is the unbounded sentinel
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound == Self::UNBOUNDED
    }

    /// Whether the bounds form a well-formed interval
    pub fn is_valid(&self) -> bool {
        self.lower_bound >= 0 && (self.is_unbounded() || self.upper_bound >= self.lower_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_range() {
        let range = MultiplicityRange::new("m-1", 1, 4);
        assert!(!range.is_unbounded());
        assert!(range.is_valid());
    }

    #[test]
    fn test_unbounded_range() {
        let range = MultiplicityRange::unbounded("m-1", 0);
        assert!(range.is_unbounded());
        assert!(range.is_valid());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(!MultiplicityRange::new("m-1", 5, 3).is_valid());
        assert!(!MultiplicityRange::new("m-2", -1, 1).is_valid());
    }

    #[test]
    fn test_wire_shape() {
        let range = MultiplicityRange::new("m-1", 0, -1);
        let value = serde_json::to_value(&range).unwrap();
        assert_eq!(value["lowerBound"], 0);
        assert_eq!(value["upperBound"], -1);
        assert_eq!(value["id"], "m-1");
    }
}
