/// A slot holding at most one pending action.
///
/// Scheduling replaces whatever is pending. The owner fires the action on the
/// next settle, unless something cancels it first.
#[derive(Debug, Clone, PartialEq)]
pub struct Deferred<A> {
    pending: Option<A>,
}

impl<A> Deferred<A> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, action: A) {
        self.pending = Some(action);
    }

    /// Drop the pending action, returning it if there was one
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending action so the caller can run it
    pub fn fire(&mut self) -> Option<A> {
        self.pending.take()
    }
}

impl<A> Default for Deferred<A> {
    fn default() -> Self {
        Self::new()
    }
}
