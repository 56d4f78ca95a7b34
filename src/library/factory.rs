//! Construction of library items from a type tag.

use crate::library::{Item, ItemKind, LibraryError};
use tracing::debug;

/// Builds a library item from its type tag.
///
/// The third argument is the author for a `"Book"` and the issue number for a
/// `"Magazine"`. Tags match case-sensitively.
///
/// # Errors
/// - [`LibraryError::UnknownType`] if `tag` names no item variant.
/// - [`LibraryError::InvalidIssue`] if a magazine issue is not an integer.
///
/// Nothing is constructed when either error is returned.
pub fn create_item(
    tag: &str,
    title: impl Into<String>,
    author_or_issue: impl Into<String>,
) -> Result<Item, LibraryError> {
    let kind: ItemKind = tag.parse()?;
    let detail = author_or_issue.into();
    debug!(%kind, detail = %detail, "create_item called");

    match kind {
        ItemKind::Book => Ok(Item::book(title, detail)),
        ItemKind::Magazine => {
            let issue = detail
                .trim()
                .parse::<i32>()
                .map_err(|_| LibraryError::InvalidIssue(detail.clone()))?;
            Ok(Item::magazine(title, issue))
        }
    }
}
