use std::fmt;
use std::rc::Rc;

use crate::CurryError;

type Target<A, R> = Rc<dyn Fn(Vec<A>) -> R>;

/// A function waiting for the rest of its arguments.
///
/// Every call either satisfies the arity and runs the target, or hands back a
/// new `Curried` holding the combined arguments. `self` is never modified, so
/// the same partial application can be reused from any number of call sites.
pub struct Curried<A, R> {
    target: Target<A, R>,
    arity: usize,
    applied: Vec<A>,
}

/// The outcome of calling a [`Curried`].
pub enum Applied<A, R> {
    /// The arity was satisfied and the target ran.
    Value(R),
    /// More arguments are needed.
    More(Curried<A, R>),
}

impl<A, R> Curried<A, R> {
    /// Curries `target` with an explicitly supplied arity.
    ///
    /// `target` always receives exactly `arity` arguments.
    pub fn with_arity<F>(arity: usize, target: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        tracing::trace!(arity, "wrapping curry target");

        Self {
            target: Rc::new(target),
            arity,
            applied: Vec::new(),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of arguments accumulated so far.
    pub fn applied(&self) -> usize {
        self.applied.len()
    }

    pub fn remaining(&self) -> usize {
        self.arity - self.applied.len()
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Supplies zero or more arguments.
    ///
    /// Arguments past the arity are dropped once it is satisfied.
    pub fn call<I>(&self, args: I) -> Applied<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut combined: Vec<A> = self.applied.iter().cloned().chain(args).collect();

        if combined.len() < self.arity {
            return Applied::More(Self {
                target: Rc::clone(&self.target),
                arity: self.arity,
                applied: combined,
            });
        }

        let supplied = combined.len();
        combined.truncate(self.arity);

        tracing::debug!(
            arity = self.arity,
            supplied,
            discarded = supplied - self.arity,
            "curried function satisfied"
        );

        Applied::Value((self.target)(combined))
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            arity: self.arity,
            applied: self.applied.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("arity", &self.arity)
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

impl<A, R> Applied<A, R> {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn value(self) -> Option<R> {
        match self {
            Self::Value(value) => Some(value),
            Self::More(_) => None,
        }
    }

    pub fn more(self) -> Option<Curried<A, R>> {
        match self {
            Self::Value(_) => None,
            Self::More(curried) => Some(curried),
        }
    }
}

impl<A: Clone, R> Applied<A, R> {
    /// Continues the chain with more arguments.
    ///
    /// A satisfied outcome is terminal and rejects further calls. Its value
    /// is dropped along with `self`, so take it with [`Applied::value`] first
    /// if it is still needed.
    pub fn call<I>(self, args: I) -> Result<Applied<A, R>, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::More(curried) => Ok(curried.call(args)),
            Self::Value(_) => Err(CurryError::AlreadySatisfied),
        }
    }
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for Applied<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::More(curried) => f.debug_tuple("More").field(curried).finish(),
        }
    }
}
