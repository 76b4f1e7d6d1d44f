#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! A value-semantic [`Either`] holding exactly one of a left or a right
//! payload, with map, flat-map and join combinators over each side.
//!
//! ```
//! use neither::Either;
//!
//! let parsed: Either<String, i32> = Either::right_of(20);
//! let doubled = parsed.right_map(|n| n * 2);
//!
//! assert!(bool::from(&doubled));
//! assert_eq!(doubled.right(), Some(40));
//! assert_eq!(doubled.join_with(Clone::clone, ToString::to_string), "40");
//! ```

pub mod data;
pub mod either;
pub mod error;
pub mod iter;
pub mod util;

pub use data::{left, right, Left, Right};
pub use either::Either;
pub use error::{Side, WrongSide};
