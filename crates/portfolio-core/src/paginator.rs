//! List Paginator
//!
//! Incremental "see more" reveal over a fixed list of items, narrowed by an
//! optional category filter. Items keep their document order; the visible
//! set is always the first `revealed` items among those matching the filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::presenter::ListPresenter;

/// Filter value that selects every item
pub const WILDCARD: &str = "*";

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value.
    ///
    /// Accepts selector form (`.filter-app`) or a bare tag (`filter-app`).
    /// `*` and blank values mean [`Filter::All`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == WILDCARD {
            return Filter::All;
        }
        let tag = raw.strip_prefix('.').unwrap_or(raw);
        if tag.is_empty() {
            Filter::All
        } else {
            Filter::Category(tag.to_string())
        }
    }

    pub fn matches(&self, item: &ListItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(tag) => item.tags.contains(tag),
        }
    }
}

/// A list entry; its identity is its position in the list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItem {
    pub tags: BTreeSet<String>,
}

impl ListItem {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn untagged() -> Self {
        Self::default()
    }
}

/// Page sizes for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Items shown after load and after every filter change
    pub initial: usize,
    /// Items added per reveal
    pub step: usize,
}

impl PageConfig {
    pub const BLOGS: PageConfig = PageConfig { initial: 3, step: 3 };
    pub const PROJECTS: PageConfig = PageConfig { initial: 6, step: 3 };

    pub const fn new(initial: usize, step: usize) -> Self {
        Self { initial, step }
    }
}

/// State of the "see more" affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affordance {
    MoreAvailable,
    Exhausted,
}

/// Outcome of a reveal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Item indices that became visible, in order
    pub revealed: Vec<usize>,
    pub affordance: Affordance,
}

/// Pagination and filter state for one listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListPaginator {
    items: Vec<ListItem>,
    config: PageConfig,
    filter: Filter,
    /// Indices of items matching `filter`, ascending
    matches: Vec<usize>,
    revealed: usize,
}

impl ListPaginator {
    /// Create a paginator showing the first page of all items
    pub fn new(items: Vec<ListItem>, config: PageConfig) -> Self {
        let mut paginator = Self {
            items,
            config,
            filter: Filter::All,
            matches: Vec::new(),
            revealed: 0,
        };
        paginator.set_filter(Filter::All);
        paginator
    }

    /// Switch category and reset to the first page of the new subset.
    ///
    /// A category nothing carries yields an empty, exhausted list.
    pub fn set_filter(&mut self, filter: Filter) -> Affordance {
        self.matches = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item))
            .map(|(index, _)| index)
            .collect();
        self.filter = filter;
        self.revealed = self.config.initial.min(self.matches.len());
        log::debug!(
            "filter {:?}: {} matches, {} visible",
            self.filter,
            self.matches.len(),
            self.revealed
        );
        self.affordance()
    }

    /// Reveal up to `step` more matching items.
    ///
    /// Clamped to the matching count; once exhausted this is a no-op.
    pub fn reveal_more(&mut self, step: usize) -> Reveal {
        let old = self.revealed;
        self.revealed = old.saturating_add(step).min(self.matches.len());
        let revealed = self.matches[old..self.revealed].to_vec();
        log::debug!(
            "revealed {} more ({} of {} visible)",
            revealed.len(),
            self.revealed,
            self.matches.len()
        );
        Reveal {
            revealed,
            affordance: self.affordance(),
        }
    }

    /// Reveal by the configured step
    pub fn reveal_next(&mut self) -> Reveal {
        self.reveal_more(self.config.step)
    }

    pub fn affordance(&self) -> Affordance {
        if self.revealed >= self.matches.len() {
            Affordance::Exhausted
        } else {
            Affordance::MoreAvailable
        }
    }

    /// True once the user has revealed their way to the end of a list
    /// longer than one page.
    pub fn end_reached(&self) -> bool {
        self.affordance() == Affordance::Exhausted && self.matches.len() > self.config.initial
    }

    /// Visible item indices in document order
    pub fn visible(&self) -> &[usize] {
        &self.matches[..self.revealed]
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible().binary_search(&index).is_ok()
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matches.binary_search(&index).is_ok()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn matching_count(&self) -> usize {
        self.matches.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn config(&self) -> PageConfig {
        self.config
    }

    /// Every tag carried by at least one item
    pub fn categories(&self) -> BTreeSet<&str> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect()
    }

    /// Push the complete current state to a presenter
    pub fn present<P: ListPresenter + ?Sized>(&self, presenter: &mut P) {
        for index in 0..self.items.len() {
            presenter.set_item_matched(index, self.is_matched(index));
            presenter.set_item_visible(index, self.is_visible(index));
        }
        presenter.set_reveal_control_visible(self.affordance() == Affordance::MoreAvailable);
        presenter.set_end_reached(self.end_reached());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `count` items; those whose index is in `tagged` carry `tag`
    fn make_items(count: usize, tag: &str, tagged: &[usize]) -> Vec<ListItem> {
        (0..count)
            .map(|i| {
                if tagged.contains(&i) {
                    ListItem::new([tag])
                } else {
                    ListItem::new(["filter-other"])
                }
            })
            .collect()
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("*"), Filter::All);
        assert_eq!(Filter::parse("  "), Filter::All);
        assert_eq!(Filter::parse("."), Filter::All);
        assert_eq!(Filter::parse(".filter-app"), Filter::Category("filter-app".to_string()));
        assert_eq!(Filter::parse("tutorial"), Filter::Category("tutorial".to_string()));
    }

    #[test]
    fn test_initial_page() {
        let paginator = ListPaginator::new(make_items(10, "x", &[]), PageConfig::BLOGS);
        assert_eq!(paginator.visible(), &[0, 1, 2]);
        assert_eq!(paginator.affordance(), Affordance::MoreAvailable);
        assert!(!paginator.end_reached());
    }

    #[test]
    fn test_tutorial_scenario() {
        let items = make_items(10, "tutorial", &[1, 4, 6, 9]);
        let mut paginator = ListPaginator::new(items, PageConfig::BLOGS);

        let affordance = paginator.set_filter(Filter::parse("tutorial"));
        assert_eq!(paginator.visible(), &[1, 4, 6]);
        assert_eq!(affordance, Affordance::MoreAvailable);

        let reveal = paginator.reveal_more(3);
        assert_eq!(reveal.revealed, vec![9]);
        assert_eq!(reveal.affordance, Affordance::Exhausted);
        assert_eq!(paginator.visible(), &[1, 4, 6, 9]);
        assert!(paginator.end_reached());
    }

    #[test]
    fn test_projects_fit_on_first_page() {
        let paginator = ListPaginator::new(make_items(6, "x", &[]), PageConfig::PROJECTS);
        assert_eq!(paginator.revealed(), 6);
        assert_eq!(paginator.affordance(), Affordance::Exhausted);
        // Nothing was revealed by the user, so no end-of-list message
        assert!(!paginator.end_reached());
    }

    #[test]
    fn test_unknown_category_is_empty_and_exhausted() {
        let mut paginator = ListPaginator::new(make_items(5, "x", &[0]), PageConfig::BLOGS);
        let affordance = paginator.set_filter(Filter::parse(".nonexistent-tag"));
        assert!(paginator.visible().is_empty());
        assert_eq!(affordance, Affordance::Exhausted);
        assert_eq!(paginator.matching_count(), 0);
    }

    #[test]
    fn test_visible_count_after_filter_is_min_of_page_and_matches() {
        let items = make_items(12, "a", &[0, 2, 3, 5, 7, 8, 11]);
        let mut paginator = ListPaginator::new(items, PageConfig::BLOGS);
        for raw in ["*", "a", "filter-other", "missing"] {
            paginator.set_filter(Filter::parse(raw));
            let expected = PageConfig::BLOGS.initial.min(paginator.matching_count());
            assert_eq!(paginator.visible().len(), expected, "filter {}", raw);
        }
    }

    #[test]
    fn test_reveal_is_monotonic_and_bounded() {
        let mut paginator = ListPaginator::new(make_items(11, "x", &[]), PageConfig::BLOGS);
        let mut last = paginator.revealed();
        for step in [1, 0, 4, 2, 100, 3] {
            paginator.reveal_more(step);
            assert!(paginator.revealed() >= last);
            assert!(paginator.revealed() <= paginator.matching_count());
            last = paginator.revealed();
        }
        assert_eq!(last, 11);
    }

    #[test]
    fn test_reveal_after_exhaustion_is_idempotent() {
        let mut paginator = ListPaginator::new(make_items(4, "x", &[]), PageConfig::BLOGS);
        paginator.reveal_next();
        let before = paginator.clone();

        let reveal = paginator.reveal_next();
        assert!(reveal.revealed.is_empty());
        assert_eq!(reveal.affordance, Affordance::Exhausted);
        assert_eq!(paginator, before);
    }

    #[test]
    fn test_reveal_huge_step_does_not_overflow() {
        let mut paginator = ListPaginator::new(make_items(4, "x", &[]), PageConfig::new(usize::MAX, 0));
        assert_eq!(paginator.revealed(), 4);
        let reveal = paginator.reveal_more(usize::MAX);
        assert!(reveal.revealed.is_empty());
        assert_eq!(paginator.revealed(), 4);
    }

    #[test]
    fn test_switching_filter_resets_progress() {
        let items = make_items(10, "a", &[0, 1, 2, 3, 4, 5, 6]);
        let mut paginator = ListPaginator::new(items, PageConfig::BLOGS);
        paginator.reveal_next();
        paginator.reveal_next();
        assert_eq!(paginator.revealed(), 9);

        paginator.set_filter(Filter::parse(".a"));
        assert_eq!(paginator.visible(), &[0, 1, 2]);

        // Back to wildcard: progress under the old filter is gone
        paginator.set_filter(Filter::All);
        assert_eq!(paginator.revealed(), 3);
    }

    #[test]
    fn test_is_visible_and_is_matched() {
        let items = make_items(8, "a", &[1, 3, 5, 7]);
        let mut paginator = ListPaginator::new(items, PageConfig::new(2, 1));
        paginator.set_filter(Filter::parse("a"));
        assert!(paginator.is_matched(7));
        assert!(!paginator.is_visible(7));
        assert!(paginator.is_visible(3));
        assert!(!paginator.is_matched(2));
        assert!(!paginator.is_visible(2));
    }

    #[test]
    fn test_categories() {
        let items = vec![
            ListItem::new(["filter-app", "filter-web"]),
            ListItem::untagged(),
            ListItem::new(["filter-card"]),
        ];
        let paginator = ListPaginator::new(items, PageConfig::PROJECTS);
        let categories: Vec<&str> = paginator.categories().into_iter().collect();
        assert_eq!(categories, vec!["filter-app", "filter-card", "filter-web"]);
    }

    #[test]
    fn test_empty_list() {
        let mut paginator = ListPaginator::new(Vec::new(), PageConfig::BLOGS);
        assert!(paginator.is_empty());
        assert_eq!(paginator.affordance(), Affordance::Exhausted);
        assert!(paginator.reveal_next().revealed.is_empty());
    }
}
