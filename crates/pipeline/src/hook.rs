//! Hook trait and chain runner

use async_trait::async_trait;

use crate::context::HookContext;
use crate::error::HookError;

/// A pipeline hook.
///
/// Hooks mutate the context in place. `Ok(())` lets the request continue to
/// the next hook; any error aborts the chain and surfaces to the host's
/// error handler.
#[async_trait]
pub trait Hook: Send + Sync {
    async fn call(&self, ctx: &mut HookContext<'_>) -> Result<(), HookError>;
}

/// Ordered hook chain for one pipeline phase.
///
/// The host composes hooks once at application-setup time and runs the chain
/// for each matching request. Hooks never call each other; ordering is the
/// chain's concern.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn Hook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook, builder-style.
    pub fn with(mut self, hook: impl Hook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook in order, stopping at the first error.
    pub async fn run(&self, ctx: &mut HookContext<'_>) -> Result<(), HookError> {
        for hook in &self.hooks {
            hook.call(ctx).await?;
        }
        Ok(())
    }
}
