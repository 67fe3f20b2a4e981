use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use std::rc::Rc;
use tracing::trace;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn equiv(u: impl Into<Term>, v: impl Into<Term>) -> Goal {
    let u = u.into();
    let v = v.into();
    Rc::new(move |s: State| match s.subs().unify(&u, &v) {
        Some(subs) => Stream::singleton(s.with_subs(subs)),
        None => Stream::empty(),
    })
}

pub fn succeed() -> Goal {
    Rc::new(|s: State| Stream::singleton(s))
}

pub fn fail() -> Goal {
    Rc::new(|_: State| Stream::empty())
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conjoin(g1: Goal, g2: Goal) -> Goal {
    Rc::new(move |s| g1(s).bind(g2.clone()))
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn disjoin(g1: Goal, g2: Goal) -> Goal {
    Rc::new(move |s: State| g1(s.clone()).merge(g2(s)))
}

/// Introduce a fresh variable and pass it to `f` to obtain the goal to run.
pub fn fresh(f: impl 'static + Fn(Var) -> Goal) -> Goal {
    Rc::new(move |s: State| {
        let (var, s) = s.fresh_var();
        trace!(?var, "introduced fresh variable");
        f(var)(s)
    })
}

/// Introduce `n` fresh variables and pass them to `f`, first introduced first.
pub fn fresh_n(n: usize, f: impl 'static + Fn(&[Var]) -> Goal) -> Goal {
    nest_fresh(n, Rc::new(Vec::new()), Rc::new(f))
}

fn nest_fresh(n: usize, introduced: Rc<Vec<Var>>, f: Rc<dyn Fn(&[Var]) -> Goal>) -> Goal {
    if n == 0 {
        return Rc::new(move |s| f(introduced.as_slice())(s));
    }
    fresh(move |var| {
        let mut vars = (*introduced).clone();
        vars.push(var);
        nest_fresh(n - 1, Rc::new(vars), f.clone())
    })
}

/// A goal that neither succeeds nor fails.
pub fn nevero() -> Goal {
    Rc::new(|s| Stream::suspended(move || nevero()(s)))
}

/// A goal that succeeds an unbounded number of times.
pub fn alwayso() -> Goal {
    Rc::new(|s| Stream::suspended(move || disjoin(succeed(), alwayso())(s)))
}
