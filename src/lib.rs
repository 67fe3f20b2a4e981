//! A small relational programming engine in the microKanren tradition.
//!
//! Programs are [goals](core::goal::Goal) over [terms](core::term::Term).
//! Running a goal from the empty [state](core::state::State) lazily
//! produces a [stream](core::stream::Stream) of solutions, which are read
//! back as terms by reification.
//!
//! ```
//! use micro_kanren::prelude::*;
//!
//! let g = fresh(|q| disjoin(equiv(q, "tea"), equiv(q, "cup")));
//! let found: Vec<String> = g
//!     .run_all()
//!     .iter()
//!     .map(|s| s.reify_first().to_string())
//!     .collect();
//! assert_eq!(found, vec!["tea", "cup"]);
//! ```

pub mod core;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod testing;
