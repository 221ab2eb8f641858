//! Portfolio Core
//!
//! Browser-independent logic behind the portfolio site:
//! - paginator: incremental "see more" reveal with category filtering
//! - presenter: interface between paginator state and whatever renders it
//! - scroll: navbar scroll-spy and back-to-top thresholds
//! - stats: booking statistics file model, fallbacks and derived counters

mod error;
pub mod paginator;
pub mod presenter;
pub mod scroll;
pub mod stats;

pub use error::{CoreError, CoreResult};
pub use paginator::{Affordance, Filter, ListItem, ListPaginator, PageConfig, Reveal};
pub use presenter::ListPresenter;
pub use stats::{Counter, StatsSnapshot, TopmateStats};
