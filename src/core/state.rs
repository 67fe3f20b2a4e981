use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;

/// The unit of work threaded through every goal: the bindings found so
/// far and the id of the next variable to introduce.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    subs: Substitution,
    counter: usize,
}

impl State {
    /// The state every search starts from.
    pub fn empty() -> Self {
        State {
            subs: Substitution::empty(),
            counter: 0,
        }
    }

    pub fn new(subs: Substitution, counter: usize) -> Self {
        State { subs, counter }
    }

    pub fn subs(&self) -> &Substitution {
        &self.subs
    }

    /// Id of the next variable `fresh_var` will introduce.
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Same counter, different bindings.
    pub fn with_subs(&self, subs: Substitution) -> Self {
        State {
            subs,
            counter: self.counter,
        }
    }

    /// Mint a new variable and return it along with the successor state.
    pub fn fresh_var(&self) -> (Var, Self) {
        let var = Var::new(self.counter);
        let next = State {
            subs: self.subs.clone(),
            counter: self.counter + 1,
        };
        (var, next)
    }
}
