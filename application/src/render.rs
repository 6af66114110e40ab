//! Textual rendering of [`Listing`]s.

use std::{fmt, sync::Arc};

use common::pagination::Marker;
use itertools::Itertools as _;
use service::{domain::Listing, read::listing::list, State};

/// Renders the provided [`list::Page`] of the [`State`] results along with
/// its summary and pager.
#[must_use]
pub fn page(page: &list::Page, state: &State) -> String {
    let summary = match page.shown() {
        Some(shown) => format!(
            "Showing {}-{} of {} listings",
            shown.start(),
            shown.end(),
            page.total,
        ),
        None => format!("No listings to show ({} found)", page.total),
    };
    format!(
        "{summary}\n{}\n{}",
        listings(&page.items, state),
        pager(page),
    )
}

/// Renders the provided [`Listing`]s one per line, marking the liked ones.
#[must_use]
pub fn listings(items: &[Arc<Listing>], state: &State) -> String {
    items
        .iter()
        .format_with("\n", |l, f| {
            f(&format_args!(
                "{} {}",
                if state.is_liked(&l.id) { "*" } else { " " },
                Row(l),
            ))
        })
        .to_string()
}

/// Renders page numbers of the provided [`list::Page`], bracketing the
/// current one.
#[must_use]
pub fn pager(page: &list::Page) -> String {
    let current = page.arguments.number;
    let numbers = page.numbers().into_iter().format_with(" ", |m, f| match m {
        Marker::Number(n) if n == current => f(&format_args!("[{n}]")),
        Marker::Number(n) => f(&n),
        Marker::Gap => f(&"..."),
    });
    format!(
        "{} {numbers} {}",
        if page.has_previous() { "<" } else { " " },
        if page.has_next() { ">" } else { " " },
    )
}

/// Single [`Listing`] line.
struct Row<'l>(&'l Listing);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.0;
        write!(
            f,
            "{:<14} {} | {} | {} | {} | {} sq ft | {} ({} reviews){}",
            l.id,
            l.title,
            l.location,
            l.property_type,
            l.price,
            l.area,
            l.rating,
            l.review_count,
            if l.verified { " | verified" } else { "" },
        )
    }
}
