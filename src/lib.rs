//! Currying for fixed-arity functions.
//!
//! A [`Curried`] accumulates arguments over any number of calls and runs its
//! target once the declared arity is reached:
//!
//! ```
//! use curry_engine::curry;
//!
//! fn get_sum(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let curried = curry(get_sum);
//!
//! assert_eq!(curried.call([1, 2, 3]).value(), Some(6));
//! assert_eq!(curried.call([1, 2]).call([3]).unwrap().value(), Some(6));
//! ```
//!
//! Arity comes from the function type ([`curry`]), from the `fn` signature
//! ([`macro@curry`] attribute), or is given explicitly ([`Curried::with_arity`]).

mod arity;
mod engine;
mod error;

pub mod value;

pub use arity::*;
pub use curry_engine_macros::curry;
pub use engine::*;
pub use error::*;
