//! List Presenter
//!
//! Rendering side of a listing. The paginator only decides; a presenter
//! applies the decision to whatever shows the items (DOM, test recorder).

/// Receives listing state from [`ListPaginator::present`](crate::ListPaginator::present)
pub trait ListPresenter {
    /// Show or hide the item at `index`
    fn set_item_visible(&mut self, index: usize, visible: bool);

    /// Mark whether the item at `index` passes the active filter
    fn set_item_matched(&mut self, index: usize, matched: bool);

    /// Show or hide the "see more" control
    fn set_reveal_control_visible(&mut self, visible: bool);

    /// Show or clear the end-of-list message
    fn set_end_reached(&mut self, reached: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Filter, ListItem, ListPaginator, PageConfig};

    #[derive(Default)]
    struct Recorder {
        visible: Vec<bool>,
        matched: Vec<bool>,
        control: Option<bool>,
        end_reached: Option<bool>,
    }

    impl Recorder {
        fn with_len(len: usize) -> Self {
            Self {
                visible: vec![false; len],
                matched: vec![false; len],
                ..Default::default()
            }
        }
    }

    impl ListPresenter for Recorder {
        fn set_item_visible(&mut self, index: usize, visible: bool) {
            self.visible[index] = visible;
        }

        fn set_item_matched(&mut self, index: usize, matched: bool) {
            self.matched[index] = matched;
        }

        fn set_reveal_control_visible(&mut self, visible: bool) {
            self.control = Some(visible);
        }

        fn set_end_reached(&mut self, reached: bool) {
            self.end_reached = Some(reached);
        }
    }

    fn make_blog_list() -> ListPaginator {
        let items = (0..5)
            .map(|i| {
                if i % 2 == 0 {
                    ListItem::new(["filter-tutorial"])
                } else {
                    ListItem::new(["filter-news"])
                }
            })
            .collect();
        ListPaginator::new(items, PageConfig::new(2, 2))
    }

    #[test]
    fn test_present_first_page() {
        let paginator = make_blog_list();
        let mut recorder = Recorder::with_len(paginator.len());
        paginator.present(&mut recorder);

        assert_eq!(recorder.visible, vec![true, true, false, false, false]);
        assert!(recorder.matched.iter().all(|m| *m));
        assert_eq!(recorder.control, Some(true));
        assert_eq!(recorder.end_reached, Some(false));
    }

    #[test]
    fn test_present_filtered_and_exhausted() {
        let mut paginator = make_blog_list();
        paginator.set_filter(Filter::parse(".filter-tutorial"));
        paginator.reveal_next();

        let mut recorder = Recorder::with_len(paginator.len());
        paginator.present(&mut recorder);

        assert_eq!(recorder.matched, vec![true, false, true, false, true]);
        assert_eq!(recorder.visible, vec![true, false, true, false, true]);
        assert_eq!(recorder.control, Some(false));
        assert_eq!(recorder.end_reached, Some(true));
    }

    #[test]
    fn test_present_hides_previously_visible_items() {
        let mut paginator = make_blog_list();
        paginator.reveal_next();
        let mut recorder = Recorder::with_len(paginator.len());
        paginator.present(&mut recorder);
        assert_eq!(recorder.visible, vec![true; 4].into_iter().chain([false]).collect::<Vec<_>>());

        paginator.set_filter(Filter::parse("filter-news"));
        paginator.present(&mut recorder);
        assert_eq!(recorder.visible, vec![false, true, false, true, false]);
        // Both news items fit on the first page
        assert_eq!(recorder.control, Some(false));
        assert_eq!(recorder.end_reached, Some(false));
    }
}
