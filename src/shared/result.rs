//! Chaining side-effect combinators for `Result`.
//!
//! `Result::map` already covers the mapping half; these add the conditional
//! callbacks used when a caller wants to branch on the outcome inline.

pub trait ResultExt<T, E> {
    /// Run `f` with the success value, then hand the result back unchanged.
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Run `f` with the error, then hand the result back unchanged.
    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(error) = &self {
            f(error);
        }
        self
    }
}
