use crate::storage::api::StateStore;

/// Per-invocation handle to the state backend, passed explicitly to every operation.
pub struct Context<'a, S: StateStore + ?Sized> {
    stub: &'a S,
}

impl<'a, S: StateStore + ?Sized> Context<'a, S> {
    pub fn new(stub: &'a S) -> Self {
        Self { stub }
    }

    pub fn stub(&self) -> &'a S {
        self.stub
    }
}
