use super::state::State;
use super::stream::{Stream, StreamIter};
use std::rc::Rc;

/// A goal maps a search state to the stream of states that satisfy it.
///
/// Goals are pure: applying one never modifies its argument, and applying
/// it again to the same state reproduces the same stream.
pub type Goal = Rc<dyn Fn(State) -> Stream<State>>;

/// Running goals from the empty state.
pub trait Search {
    fn apply(&self, s: State) -> Stream<State>;

    /// At most `n` solutions.
    fn run(&self, n: usize) -> Vec<State> {
        self.apply(State::empty()).take(n)
    }

    /// All solutions. Does not return if there are infinitely many.
    fn run_all(&self) -> Vec<State> {
        self.apply(State::empty()).take_all()
    }

    /// Lazily enumerate solutions.
    fn iter(&self) -> StreamIter<State> {
        self.apply(State::empty()).into_iter()
    }
}

impl Search for Goal {
    fn apply(&self, s: State) -> Stream<State> {
        self.as_ref()(s)
    }
}
