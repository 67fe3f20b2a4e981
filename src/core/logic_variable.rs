/// Logic variable.
///
/// Variables are identified by position: the id is taken from the counter
/// threaded through the search state, so two variables are the same iff
/// their ids are equal. Variables can be copied, which preserves identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    /// Create the variable with the given id.
    pub fn new(id: usize) -> Self {
        Var(id)
    }

    /// Return the variable's id.
    pub fn id(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}
