//! Read-only queries over the loaded visitor collection.
//!
//! Every function takes the collection by shared reference and never
//! mutates it, so the queries can run in any order.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use super::model::{Book, SmsMessage, Visitor};

/// Segmentation bucket of a subscribed visitor, relative to the average
/// number of favorite books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Bookworm,
    Fine,
    ReadMore,
}

impl Category {
    /// Classifies a favorite-book count against the population average.
    pub fn classify(favorite_count: usize, average: f64) -> Self {
        let count = favorite_count as f64;
        if count > average {
            Category::Bookworm
        } else if count < average {
            Category::ReadMore
        } else {
            Category::Fine
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Bookworm => "bookworm",
            Category::Fine => "fine",
            Category::ReadMore => "read more",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Category::Bookworm => "you are a bookworm",
            Category::Fine => "fine",
            Category::ReadMore => "read more",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visitors' full names in collection order.
pub fn roster(visitors: &[Visitor]) -> Vec<String> {
    visitors.iter().map(Visitor::full_name).collect()
}

fn all_favorites(visitors: &[Visitor]) -> impl Iterator<Item = &Book> {
    visitors.iter().flat_map(|visitor| visitor.favorite_books.iter())
}

/// Every distinct favorite book, in order of first appearance.
pub fn unique_books(visitors: &[Visitor]) -> Vec<&Book> {
    let mut seen = HashSet::new();
    all_favorites(visitors)
        .filter(|book| seen.insert(*book))
        .collect()
}

/// All favorite books, repeats included, sorted by publishing year.
///
/// The sort is stable: books sharing a year keep their flattening order.
pub fn books_by_year(visitors: &[Visitor]) -> Vec<&Book> {
    let mut books: Vec<&Book> = all_favorites(visitors).collect();
    books.sort_by_key(|book| book.publishing_year);
    books
}

/// Whether any visitor likes a book written by exactly `author`.
pub fn has_book_by_author(visitors: &[Visitor], author: &str) -> bool {
    all_favorites(visitors).any(|book| book.author == author)
}

/// Size of the longest favorites list, 0 without visitors.
pub fn max_favorite_books(visitors: &[Visitor]) -> usize {
    visitors
        .iter()
        .map(Visitor::favorite_count)
        .max()
        .unwrap_or(0)
}

/// Mean favorites count over every visitor, 0.0 without visitors.
pub fn average_favorite_books(visitors: &[Visitor]) -> f64 {
    if visitors.is_empty() {
        return 0.0;
    }
    let total: usize = visitors.iter().map(Visitor::favorite_count).sum();
    total as f64 / visitors.len() as f64
}

/// Groups subscribed visitors by category and builds their SMS messages.
///
/// The average is taken over all visitors, subscribed or not. Within a
/// category, messages follow the visitors' collection order.
pub fn segment_subscribers(visitors: &[Visitor]) -> BTreeMap<Category, Vec<SmsMessage>> {
    let average = average_favorite_books(visitors);

    let mut segments: BTreeMap<Category, Vec<SmsMessage>> = BTreeMap::new();
    for visitor in visitors.iter().filter(|visitor| visitor.subscribed) {
        let category = Category::classify(visitor.favorite_count(), average);
        segments
            .entry(category)
            .or_default()
            .push(SmsMessage::new(&visitor.phone, category.message()));
    }
    segments
}
