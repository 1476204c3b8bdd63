//! Lifecycle hooks invoked around each dispatch.

use crate::core::{Event, State};
use crate::machine::error::{HookResult, TriggerError};

/// Observers called while an event is being dispatched.
///
/// Every method defaults to doing nothing, so implementors only override
/// the hooks they care about. Errors returned from hooks are logged by the
/// machine and otherwise ignored: a hook can never veto a transition.
///
/// # Example
///
/// ```rust
/// use transitions::core::State;
/// use transitions::machine::{EventProcessor, HookResult};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Default)]
/// struct EnterCounter(AtomicUsize);
///
/// impl<C> EventProcessor<C> for EnterCounter {
///     fn on_enter(&self, _ctx: &C, _state: &State) -> HookResult {
///         self.0.fetch_add(1, Ordering::SeqCst);
///         Ok(())
///     }
/// }
/// ```
pub trait EventProcessor<C>: Send + Sync {
    /// Called before the action runs, while still in `state`.
    fn on_exit(&self, _ctx: &C, _state: &State, _event: &Event) -> HookResult {
        Ok(())
    }

    /// Called when the action fails or returns a state outside the
    /// candidates. The machine is back in `from` when this returns.
    fn on_action_failure(
        &self,
        _ctx: &C,
        _from: &State,
        _event: &Event,
        _candidates: &[State],
        _error: &TriggerError,
    ) -> HookResult {
        Ok(())
    }

    /// Called after the machine has moved into `state`.
    fn on_enter(&self, _ctx: &C, _state: &State) -> HookResult {
        Ok(())
    }
}

/// Processor used by transitions that do not declare their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProcessor;

impl<C> EventProcessor<C> for NoopProcessor {}

/// Processor that reports every hook as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProcessor;

impl<C> EventProcessor<C> for TracingProcessor {
    fn on_exit(&self, _ctx: &C, state: &State, event: &Event) -> HookResult {
        tracing::debug!(state = %state, event = %event, "exit state");
        Ok(())
    }

    fn on_action_failure(
        &self,
        _ctx: &C,
        from: &State,
        event: &Event,
        candidates: &[State],
        error: &TriggerError,
    ) -> HookResult {
        tracing::warn!(
            from = %from,
            event = %event,
            candidates = ?candidates,
            "transition failed: {error}"
        );
        Ok(())
    }

    fn on_enter(&self, _ctx: &C, state: &State) -> HookResult {
        tracing::debug!(state = %state, "enter state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::error::ActionError;

    #[test]
    fn noop_processor_accepts_every_hook() {
        let processor = NoopProcessor;
        let state = State::from("WaitPay");
        let event = Event::from("Pay");
        let error = TriggerError::ActionFailed {
            from: state.clone(),
            event: event.clone(),
            source: ActionError::refused("declined"),
        };

        assert!(EventProcessor::<()>::on_exit(&processor, &(), &state, &event).is_ok());
        assert!(EventProcessor::<()>::on_action_failure(
            &processor,
            &(),
            &state,
            &event,
            &[],
            &error
        )
        .is_ok());
        assert!(EventProcessor::<()>::on_enter(&processor, &(), &state).is_ok());
    }

    #[test]
    fn tracing_processor_never_fails() {
        let processor = TracingProcessor;
        let state = State::from("Paying");

        assert!(EventProcessor::<u32>::on_exit(&processor, &7, &state, &Event::from("PaySuccess")).is_ok());
        assert!(EventProcessor::<u32>::on_enter(&processor, &7, &state).is_ok());
    }
}
