//! The error type shared by the fallible list operations.

use crate::list::alloc::AllocError;

/// An error returned by list queries, cursor moves and fallible insertions.
///
/// # Examples
///
/// ```
/// use chain_list::{Error, List};
///
/// let list: List<i32> = List::new();
/// assert_eq!(list.front(), Err(Error::Empty));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The list contains no elements to read or remove.
    #[error("the list is empty")]
    Empty,
    /// A cursor was asked to move past the boundaries of its list.
    #[error("the cursor position is out of bounds")]
    OutOfBounds,
    /// The allocator could not provide memory for a new node.
    #[error("node allocation failed: {0}")]
    Alloc(#[from] AllocError),
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::list::alloc::AllocError;

    #[test]
    fn display_messages() {
        assert_eq!(Error::Empty.to_string(), "the list is empty");
        assert_eq!(
            Error::OutOfBounds.to_string(),
            "the cursor position is out of bounds"
        );
        assert_eq!(
            Error::Alloc(AllocError).to_string(),
            "node allocation failed: memory allocation failed"
        );
    }

    #[test]
    fn alloc_errors_convert() {
        assert_eq!(Error::from(AllocError), Error::Alloc(AllocError));
    }
}
