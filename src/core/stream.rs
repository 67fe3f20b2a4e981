//! Lazy streams of search results.
//!
//! A stream is either exhausted, has a result available right now, or is
//! suspended: some work has been deferred and must be resumed to find out
//! which. Nothing is computed until a driver (`pull`, `take`, `take_all`,
//! or the iterator) resumes a suspension.

use std::rc::Rc;
use tracing::debug;

pub enum Stream<T> {
    Empty,
    Immediate(T, Box<Stream<T>>),
    Suspended(Box<dyn FnOnce() -> Stream<T>>),
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Immediate(a, Box::new(d))
    }

    pub fn suspended(resume: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspended(Box::new(resume))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stream::Empty, |rest, item| Stream::cons(item, rest))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Resume suspensions until the stream is empty or has a result.
    pub fn force(mut self) -> Self {
        loop {
            match self {
                Stream::Suspended(resume) => self = resume(),
                ready => return ready,
            }
        }
    }

    /// Produce the next result and the rest of the stream.
    pub fn pull(mut self) -> Option<(T, Self)> {
        loop {
            match self {
                Stream::Empty => return None,
                Stream::Immediate(a, d) => return Some((a, *d)),
                Stream::Suspended(resume) => self = resume(),
            }
        }
    }

    /// Collect at most `n` results.
    ///
    /// Asking for zero results does not resume anything.
    pub fn take(self, n: usize) -> Vec<T> {
        let mut results = vec![];
        if n == 0 {
            return results;
        }

        let mut rest = self;
        while let Some((a, d)) = rest.pull() {
            results.push(a);
            if results.len() == n {
                break;
            }
            rest = d;
        }

        debug!(requested = n, produced = results.len(), "take finished");
        results
    }

    /// Collect every result. Does not return if the stream is infinite.
    pub fn take_all(self) -> Vec<T> {
        let results: Vec<T> = self.into_iter().collect();
        debug!(produced = results.len(), "take_all finished");
        results
    }
}

impl<T: 'static> Stream<T> {
    /// Interleave two streams.
    ///
    /// Whenever `self` is suspended, the result suspends too and the two
    /// streams swap places once resumed, so pending work in `other` is
    /// advanced before `self` is resumed again.
    pub fn merge(self, other: Self) -> Self {
        match self {
            Stream::Empty => other,
            Stream::Immediate(a, d) => Stream::cons(a, d.merge(other)),
            Stream::Suspended(resume) => Stream::suspended(move || other.merge(resume())),
        }
    }

    /// Apply `g` to every result and merge the resulting streams.
    pub fn bind(self, g: Rc<dyn Fn(T) -> Self>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Immediate(a, d) => {
                let head = g(a);
                head.merge(d.bind(g))
            }
            Stream::Suspended(resume) => Stream::suspended(move || resume().bind(g)),
        }
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        let (mut x, mut y) = (self, other);
        loop {
            match (x, y) {
                (Empty, Empty) => return true,
                (Immediate(a, dx), Immediate(b, dy)) if a == b => {
                    x = dx;
                    y = dy;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspended(_) => write!(f, "(...)"),
            Stream::Immediate(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Immediate(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspended(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        let stream = std::mem::replace(&mut self.0, Stream::Empty);
        let (a, d) = stream.pull()?;
        self.0 = d;
        Some(a)
    }
}
