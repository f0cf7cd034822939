//! Tap and pipe for any value, so setup and conversion can sit inside a
//! single expression.

/// Blanket-implemented for every sized type.
pub trait Fluent: Sized {
    /// Tap: run `action` on the value, then return that same value.
    ///
    /// ```
    /// use seqops::Fluent;
    ///
    /// let v = Vec::new().with(|v| v.push(1));
    /// assert_eq!(v, [1]);
    /// ```
    #[inline]
    fn with<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        action(&mut self);
        self
    }

    /// Borrowed tap; the returned reference is `self`.
    #[inline]
    fn with_ref<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        action(self);
        self
    }

    /// Pipe: feed the value to `transform` and return whatever it yields.
    #[inline]
    fn with_result<R, F>(self, transform: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        transform(self)
    }
}

impl<T> Fluent for T {}
