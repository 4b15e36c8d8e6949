//! argbind-core: keyword-argument binding for command token lists.
//!
//! A parser is declared once as a set of keyword bindings, each pointing at a
//! destination of a given shape (flag, value, optional value, list, non-empty
//! list, list of groups). Parsing walks an already-tokenized argument list,
//! routes plain tokens to the receiver opened by the last keyword, and
//! reports leftovers, missing values and the keywords seen.
//!
//! # Public API
//!
//! - [`ArgumentParser`] -- binds keywords to fields of a result record
//! - [`BorrowedParser`] -- binds keywords to caller-owned variables
//! - [`ParseOutcome`] -- unparsed arguments, missing values, seen keywords
//! - [`Bindable`] / [`Target`] -- the destination shapes
//! - [`NonEmpty`] / [`Maybe`] -- list and value requirement markers
//! - [`Session`] / [`Destinations`] -- the token state machine, for custom
//!   front-ends
//! - [`BindError`], [`ArgumentError`] -- setup and strict-policy errors

pub mod error;
pub mod outcome;
pub mod parser;
pub mod registry;
pub mod session;
pub mod target;

pub use error::{ArgumentError, BindError};
pub use outcome::ParseOutcome;
pub use parser::{ArgumentParser, BorrowedParser};
pub use registry::ActionMap;
pub use session::{Destinations, Session};
pub use target::{Bindable, Maybe, NonEmpty, Target};
