use log::debug;

use crate::config::ReportConfig;

use super::{model::Visitor, query};

/// One printed section of the visitors report.
///
/// Sections are independent: each renders straight from the visitor
/// collection, never from another section's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Roster,
    UniqueBooks,
    BooksByYear,
    AuthorCheck,
    MaxFavorites,
    SubscriberSms,
}

impl ReportSection {
    /// All sections in print order.
    pub const ALL: [ReportSection; 6] = [
        ReportSection::Roster,
        ReportSection::UniqueBooks,
        ReportSection::BooksByYear,
        ReportSection::AuthorCheck,
        ReportSection::MaxFavorites,
        ReportSection::SubscriberSms,
    ];

    /// Step name used when the section runs inside a job.
    pub fn step_name(&self) -> &'static str {
        match self {
            ReportSection::Roster => "visitor-roster",
            ReportSection::UniqueBooks => "unique-books",
            ReportSection::BooksByYear => "books-by-year",
            ReportSection::AuthorCheck => "author-check",
            ReportSection::MaxFavorites => "max-favorites",
            ReportSection::SubscriberSms => "subscriber-sms",
        }
    }

    /// Header, items and summary lines of the section.
    pub fn render(&self, visitors: &[Visitor], config: &ReportConfig) -> Vec<String> {
        let lines = match self {
            ReportSection::Roster => {
                let mut lines = vec!["Task 1: Visitors and their count:".to_string()];
                lines.extend(query::roster(visitors));
                lines.push(format!("Total visitors: {}", visitors.len()));
                lines
            }
            ReportSection::UniqueBooks => {
                let books = query::unique_books(visitors);
                let mut lines = vec!["Task 2: Unique books and their count:".to_string()];
                lines.extend(books.iter().map(ToString::to_string));
                lines.push(format!("Total unique books: {}", books.len()));
                lines
            }
            ReportSection::BooksByYear => {
                let mut lines = vec!["Task 3: Sorted book list by publication year:".to_string()];
                lines.extend(
                    query::books_by_year(visitors)
                        .iter()
                        .map(|book| format!("{} ({})", book.name, book.publishing_year)),
                );
                lines
            }
            ReportSection::AuthorCheck => {
                let author = config.get_target_author();
                vec![
                    format!("Task 4: Checking if any visitor has a book by {author}:"),
                    format!(
                        "Does any visitor have a book by {author}? {}",
                        query::has_book_by_author(visitors, author)
                    ),
                ]
            }
            ReportSection::MaxFavorites => vec![
                "Task 5: Maximum number of favorite books:".to_string(),
                format!(
                    "Maximum number of favorite books: {}",
                    query::max_favorite_books(visitors)
                ),
            ],
            ReportSection::SubscriberSms => {
                let mut lines =
                    vec!["Task 6: SMS messages for newsletter subscribers:".to_string()];
                for (category, messages) in query::segment_subscribers(visitors) {
                    lines.push(format!("Category: {category}"));
                    lines.extend(messages.iter().map(|sms| {
                        format!("Phone: {}, Message: {}", sms.phone_number, sms.message)
                    }));
                }
                lines
            }
        };

        debug!("Rendered section {} ({} lines)", self.step_name(), lines.len());
        lines
    }
}
