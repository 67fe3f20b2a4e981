pub use crate::{
    core::{
        goal::{Goal, Search},
        logic_variable::Var,
        pair::Pair,
        state::State,
        stream::{Stream, StreamIter},
        substitution::Substitution,
        term::{Atom, Term, TermError},
    },
    goals::{combinators::*, list::*, primitive::*},
};
