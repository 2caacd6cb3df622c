//! Filter criteria applied to the point list.

use crate::point::Point;

/// Optional predicates combined with logical AND.
///
/// A criteria with both fields absent matches every point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive lower bound on [`Point::value`].
    pub min_value: Option<i64>,
    /// Case-insensitive substring of [`Point::name`].
    pub name_contains: Option<String>,
}

impl FilterCriteria {
    /// Build criteria, folding an empty `name_contains` into "not provided".
    #[must_use]
    pub fn new(min_value: Option<i64>, name_contains: Option<String>) -> Self {
        Self {
            min_value,
            name_contains: name_contains.filter(|s| !s.is_empty()),
        }
    }

    /// Whether no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_value.is_none() && self.name_contains.as_deref().is_none_or(str::is_empty)
    }

    /// Return a matcher with the needle case-folded once.
    #[must_use]
    pub fn matcher(&self) -> Matcher {
        Matcher {
            min_value: self.min_value,
            needle: self
                .name_contains
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        }
    }

    /// Whether `point` satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, point: &Point) -> bool {
        self.matcher().matches(point)
    }
}

/// Prepared form of [`FilterCriteria`] for scanning many points.
#[derive(Debug, Clone)]
pub struct Matcher {
    min_value: Option<i64>,
    needle: Option<String>,
}

impl Matcher {
    #[must_use]
    pub fn matches(&self, point: &Point) -> bool {
        if self.min_value.is_some_and(|min| point.value < min) {
            return false;
        }
        match &self.needle {
            Some(needle) => point.name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}
