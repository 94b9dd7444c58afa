//! # List State Model
//!
//! The explicit state object behind the user list: the fetched collection plus
//! the three user-controlled selectors (filter, sort, page). Every derived view
//! is computed from this value; nothing here is rendered directly.

use super::user::{Gender, UserRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCriterion {
    #[default]
    #[serde(rename = "all", alias = "none")]
    None,
    Male,
    Female,
}

impl FilterCriterion {
    /// Whether a record passes this filter
    pub fn matches(&self, user: &UserRecord) -> bool {
        match self {
            FilterCriterion::None => true,
            FilterCriterion::Male => user.gender == Gender::Male,
            FilterCriterion::Female => user.gender == Gender::Female,
        }
    }

    /// Next selector in the none → male → female cycle
    pub fn next(&self) -> Self {
        match self {
            FilterCriterion::None => FilterCriterion::Male,
            FilterCriterion::Male => FilterCriterion::Female,
            FilterCriterion::Female => FilterCriterion::None,
        }
    }

    /// Label used by the filter selector line
    pub fn label(&self) -> &'static str {
        match self {
            FilterCriterion::None => "Gender",
            FilterCriterion::Male => "Male",
            FilterCriterion::Female => "Female",
        }
    }

    pub const ALL: [FilterCriterion; 3] = [
        FilterCriterion::None,
        FilterCriterion::Male,
        FilterCriterion::Female,
    ];
}

impl From<Gender> for FilterCriterion {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => FilterCriterion::Male,
            Gender::Female => FilterCriterion::Female,
        }
    }
}

impl FromStr for FilterCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "all" | "gender" => Ok(FilterCriterion::None),
            "male" => Ok(FilterCriterion::Male),
            "female" => Ok(FilterCriterion::Female),
            other => Err(format!(
                "unknown gender filter '{other}' (expected all, male or female)"
            )),
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterCriterion::None => "all",
            FilterCriterion::Male => "male",
            FilterCriterion::Female => "female",
        };
        f.write_str(name)
    }
}

/// Active ordering of the displayed view
///
/// At most one key is active; toggling never combines keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortState {
    #[default]
    Unsorted,
    ByIdentifierDescending,
    ByNameAscending,
}

impl SortState {
    pub fn is_sorted(&self) -> bool {
        !matches!(self, SortState::Unsorted)
    }
}

impl FromStr for SortState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "unsorted" => Ok(SortState::Unsorted),
            "id" | "identifier" => Ok(SortState::ByIdentifierDescending),
            "name" => Ok(SortState::ByNameAscending),
            other => Err(format!(
                "unknown sort key '{other}' (expected none, id or name)"
            )),
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortState::Unsorted => "none",
            SortState::ByIdentifierDescending => "id",
            SortState::ByNameAscending => "name",
        };
        f.write_str(name)
    }
}

/// Serializable state of the user list
///
/// `users` is the fetch result and is never reordered or trimmed; filter, sort
/// and page only select how it is viewed. `current_page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub users: Vec<UserRecord>,
    pub filter: FilterCriterion,
    pub sort: SortState,
    pub current_page: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            filter: FilterCriterion::None,
            sort: SortState::Unsorted,
            current_page: 1,
        }
    }

    /// State with the selectors preset, before any data has arrived
    pub fn with_selectors(filter: FilterCriterion, sort: SortState, page: usize) -> Self {
        Self {
            filter,
            sort,
            current_page: page.max(1),
            ..Self::new()
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress of the one-shot fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Fetch not yet started
    #[default]
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }
}
