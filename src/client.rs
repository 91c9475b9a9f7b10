//! The owning client shared by every vignette: it holds at most one concrete
//! variant behind the capability contract `C` and forwards requests to it
//! without ever learning the variant's identity.

use crate::error::PatternError;

pub struct Client<C: ?Sized> {
    capability: Option<Box<C>>,
}

impl<C: ?Sized> Client<C> {
    pub fn new() -> Self {
        Self { capability: None }
    }

    /// Take exclusive ownership of a concrete variant.
    pub fn bind(&mut self, capability: Box<C>) {
        self.capability = Some(capability);
    }

    /// Release the bound variant, returning it to the caller.
    pub fn unbind(&mut self) -> Option<Box<C>> {
        self.capability.take()
    }

    pub fn is_bound(&self) -> bool {
        self.capability.is_some()
    }

    /// Dispatching with nothing bound is a usage error, never a silent no-op.
    pub fn capability(&self) -> Result<&C, PatternError> {
        self.capability
            .as_deref()
            .ok_or(PatternError::UnboundCapability)
    }
}

impl<C: ?Sized> Default for Client<C> {
    fn default() -> Self {
        Self::new()
    }
}
