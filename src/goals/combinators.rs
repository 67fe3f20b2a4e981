//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::goals::primitive::{conjoin, disjoin, fail, succeed};
use std::rc::Rc;

/// Creates a goal that succeeds if all of `goals` succeed.
///
/// The empty conjunction always succeeds.
pub fn conj_all(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let mut goals: Vec<Goal> = goals.into_iter().collect();
    match goals.pop() {
        None => succeed(),
        Some(last) => goals.into_iter().rev().fold(last, |rest, g| conjoin(g, rest)),
    }
}

/// Creates a goal that succeeds if any of `goals` succeeds.
///
/// The empty disjunction always fails.
pub fn disj_all(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let mut goals: Vec<Goal> = goals.into_iter().collect();
    match goals.pop() {
        None => fail(),
        Some(last) => goals.into_iter().rev().fold(last, |rest, g| disjoin(g, rest)),
    }
}

/// Defer building a goal until it is applied, behind a suspension.
///
/// Recursive relations must delay their recursive call, otherwise
/// constructing the goal never terminates.
pub fn delay(make: impl 'static + Fn() -> Goal) -> Goal {
    let make = Rc::new(make);
    Rc::new(move |s: State| {
        let make = make.clone();
        Stream::suspended(move || make()(s))
    })
}
