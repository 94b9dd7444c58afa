//! # View Pipeline
//!
//! Pure transformations from a [`ListState`] to what the screen shows:
//!
//! ```text
//! users ──▶ apply_filter ──▶ sort_view ──▶ page ──▶ DerivedView
//! ```
//!
//! None of these functions mutate their input; each stage returns a new
//! sequence so the fetched collection stays in its original order.

use super::list_state::{FilterCriterion, ListState, SortState};
use super::user::UserRecord;
use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Subsequence of `source` matching `criterion`, relative order preserved
pub fn apply_filter(criterion: FilterCriterion, source: &[UserRecord]) -> Vec<UserRecord> {
    source
        .iter()
        .filter(|user| criterion.matches(user))
        .cloned()
        .collect()
}

/// Reorder `view` according to `sort`
///
/// `Unsorted` returns the input order. Both keys use a stable sort so ties keep
/// their filter-stage order.
pub fn sort_view(sort: SortState, view: &[UserRecord]) -> Vec<UserRecord> {
    let mut ordered = view.to_vec();
    match sort {
        SortState::Unsorted => {}
        SortState::ByIdentifierDescending => ordered.sort_by(|a, b| b.id.cmp(&a.id)),
        SortState::ByNameAscending => {
            ordered.sort_by(|a, b| compare_names(&a.first_name, &b.first_name))
        }
    }
    ordered
}

/// Collation for first names
///
/// Names compare by their base letters first, ignoring case and accents, so
/// "Élodie" sorts between "Eddie" and "Eve". Remaining ties are broken by
/// accents (unaccented first) and then by case (lowercase first).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    accented_letters(name).filter(|c| !is_combining_mark(*c))
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

/// Number of pages needed to show `len` rows, `ceil(len / page_size)`
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a 1-based page number into `1..=max(1, page_count)`
pub fn clamp_page(page_number: usize, page_count: usize) -> usize {
    page_number.clamp(1, page_count.max(1))
}

/// Rows `[(n-1)*size, n*size)` of `view`, clipped to its bounds
///
/// Out-of-range pages yield an empty slice rather than an error.
pub fn page(view: &[UserRecord], page_number: usize, page_size: usize) -> &[UserRecord] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= view.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(view.len());
    &view[start..end]
}

/// Everything the presentation layer needs for one render cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    /// Records on the active page, in display order
    pub rows: Vec<UserRecord>,
    /// Active page after clamping
    pub current_page: usize,
    pub page_count: usize,
    /// Length of the filtered (and sorted) sequence
    pub filtered_count: usize,
    pub filter: FilterCriterion,
    pub sort: SortState,
}

impl DerivedView {
    /// Page buttons `1..=page_count`
    pub fn page_buttons(&self) -> impl Iterator<Item = usize> {
        1..=self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Run the whole pipeline over `state`
///
/// The active page is clamped against the freshly computed page count, so a
/// filter that narrows the list never leaves the view on a page that no longer
/// exists.
pub fn derive_view(state: &ListState, page_size: usize) -> DerivedView {
    let filtered = apply_filter(state.filter, &state.users);
    let ordered = sort_view(state.sort, &filtered);
    let pages = page_count(ordered.len(), page_size);
    let current_page = clamp_page(state.current_page, pages);

    DerivedView {
        rows: page(&ordered, current_page, page_size).to_vec(),
        current_page,
        page_count: pages,
        filtered_count: ordered.len(),
        filter: state.filter,
        sort: state.sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::models::user::{Address, Gender};

    fn user(id: u32, first_name: &str, gender: Gender) -> UserRecord {
        UserRecord {
            id,
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            age: 30,
            gender,
            image: format!("https://dummyjson.com/icon/{id}/128"),
            address: Address {
                state: "Ohio".to_string(),
                country: "United States".to_string(),
            },
        }
    }

    fn mixed(count: u32) -> Vec<UserRecord> {
        (1..=count)
            .map(|id| {
                let gender = if id % 3 == 0 {
                    Gender::Female
                } else {
                    Gender::Male
                };
                user(id, &format!("User{id}"), gender)
            })
            .collect()
    }

    fn ids(view: &[UserRecord]) -> Vec<u32> {
        view.iter().map(|u| u.id).collect()
    }

    fn is_subsequence(sub: &[UserRecord], full: &[UserRecord]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|item| rest.any(|candidate| candidate == item))
    }

    #[test]
    fn filter_none_should_return_source_unchanged() {
        let users = mixed(12);
        assert_eq!(apply_filter(FilterCriterion::None, &users), users);
    }

    #[test]
    fn filter_should_keep_only_matching_gender_in_order() {
        let users = mixed(12);

        for criterion in [FilterCriterion::Male, FilterCriterion::Female] {
            let filtered = apply_filter(criterion, &users);
            assert!(is_subsequence(&filtered, &users));
            assert!(filtered.iter().all(|u| criterion.matches(u)));
        }

        assert_eq!(
            ids(&apply_filter(FilterCriterion::Female, &users)),
            vec![3, 6, 9, 12]
        );
    }

    #[test]
    fn filter_should_be_idempotent() {
        let users = mixed(20);
        for criterion in FilterCriterion::ALL {
            let once = apply_filter(criterion, &users);
            let twice = apply_filter(criterion, &once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn sort_by_identifier_should_be_descending() {
        let users = vec![
            user(3, "C", Gender::Male),
            user(1, "A", Gender::Male),
            user(2, "B", Gender::Female),
        ];
        let sorted = sort_view(SortState::ByIdentifierDescending, &users);

        assert_eq!(ids(&sorted), vec![3, 2, 1]);
        assert!(sorted.windows(2).all(|w| w[0].id >= w[1].id));
        // input untouched
        assert_eq!(ids(&users), vec![3, 1, 2]);
    }

    #[test]
    fn sort_by_name_should_ignore_case_and_stay_stable() {
        let users = vec![
            user(1, "bob", Gender::Male),
            user(2, "Alice", Gender::Female),
            user(3, "Bob", Gender::Male),
            user(4, "alice", Gender::Female),
            user(5, "Bob", Gender::Male),
        ];
        let sorted = sort_view(SortState::ByNameAscending, &users);

        assert_eq!(ids(&sorted), vec![4, 2, 1, 3, 5]);
        assert!(sorted
            .windows(2)
            .all(|w| compare_names(&w[0].first_name, &w[1].first_name) != Ordering::Greater));
    }

    #[test]
    fn sort_by_name_should_place_accented_names_with_their_base_letter() {
        let users = vec![
            user(1, "Zoe", Gender::Female),
            user(2, "Élodie", Gender::Female),
            user(3, "Eve", Gender::Female),
            user(4, "Eddie", Gender::Male),
            user(5, "Ömer", Gender::Male),
            user(6, "Oscar", Gender::Male),
        ];
        let sorted = sort_view(SortState::ByNameAscending, &users);

        assert_eq!(ids(&sorted), vec![4, 2, 3, 5, 6, 1]);
    }

    #[test]
    fn compare_names_should_ignore_accents_before_breaking_ties() {
        assert_eq!(compare_names("Élodie", "Eve"), Ordering::Less);
        assert_eq!(compare_names("Élodie", "Zoe"), Ordering::Less);
        assert_eq!(compare_names("elodie", "Élodie"), Ordering::Less);
        assert_eq!(compare_names("Élodie", "Élodie"), Ordering::Equal);
        // Precomposed and decomposed forms are the same name
        assert_eq!(compare_names("\u{c9}lodie", "E\u{301}lodie"), Ordering::Equal);
    }

    #[test]
    fn compare_names_should_order_prefixes_first() {
        assert_eq!(compare_names("Ann", "Anna"), Ordering::Less);
        assert_eq!(compare_names("zoe", "Adam"), Ordering::Greater);
        assert_eq!(compare_names("Eve", "Eve"), Ordering::Equal);
    }

    #[test]
    fn unsorted_should_keep_input_order() {
        let users = mixed(5);
        assert_eq!(sort_view(SortState::Unsorted, &users), users);
    }

    #[test]
    fn page_should_have_expected_length_for_every_page() {
        let users = mixed(25);
        for n in 1..=5 {
            let expected = 10usize.min(25usize.saturating_sub(10 * (n - 1)));
            assert_eq!(page(&users, n, 10).len(), expected, "page {n}");
        }
    }

    #[test]
    fn pages_should_concatenate_back_to_view() {
        for len in [0u32, 1, 9, 10, 11, 30, 31] {
            let users = mixed(len);
            let count = page_count(users.len(), 10);
            let rebuilt: Vec<UserRecord> = (1..=count)
                .flat_map(|n| page(&users, n, 10).to_vec())
                .collect();
            assert_eq!(rebuilt, users, "len {len}");
        }
    }

    #[test]
    fn page_out_of_range_should_be_empty() {
        let users = mixed(5);
        assert!(page(&users, 2, 10).is_empty());
        assert!(page(&users, 0, 10).is_empty());
        assert!(page(&users, 1, 0).is_empty());
    }

    #[test]
    fn page_count_should_round_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(30, 10), 3);
    }

    #[test]
    fn clamp_page_should_stay_within_buttons() {
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(4, 0), 1);
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn derive_view_should_clamp_stale_page() {
        let mut state = ListState::new();
        state.users = mixed(30);
        state.current_page = 3;
        state.filter = FilterCriterion::Female;

        let view = derive_view(&state, 10);

        assert_eq!(view.filtered_count, 10);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn derive_view_should_apply_sort_after_filter() {
        let mut state = ListState::new();
        state.users = mixed(12);
        state.filter = FilterCriterion::Female;
        state.sort = SortState::ByIdentifierDescending;

        let view = derive_view(&state, 10);

        assert_eq!(ids(&view.rows), vec![12, 9, 6, 3]);
        assert_eq!(view.page_buttons().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn derive_view_of_empty_state_should_have_no_buttons() {
        let view = derive_view(&ListState::new(), 10);
        assert!(view.is_empty());
        assert_eq!(view.page_count, 0);
        assert_eq!(view.page_buttons().count(), 0);
        assert_eq!(view.current_page, 1);
    }
}
