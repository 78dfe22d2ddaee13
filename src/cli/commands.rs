pub mod external_feed;
pub mod external_feed_since;
pub mod glossary;
pub mod glossary_term;
pub mod image;
pub mod images;
pub mod news;
pub mod news_release;
pub mod video;
pub mod videos;

use hubble::{
    Page,
    Selection,
};

/// Turn cli values into a selection.
///
/// A single value is a scalar selection, anything else is a list.
pub fn selection<T>(mut values: Vec<T>) -> Selection<T> {
    if values.len() == 1 {
        Selection::One(values.swap_remove(0))
    } else {
        Selection::Many(values)
    }
}

/// Turn cli pages into a selection, defaulting to the first page.
pub fn page_selection(pages: Vec<Page>) -> Selection<Page> {
    if pages.is_empty() {
        Selection::One(Page::default())
    } else {
        selection(pages)
    }
}
