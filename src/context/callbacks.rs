/*!
General callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.
*/

use super::Context;

/// Called once per iteration of a solve, and the solve ends as [Unknown](crate::reports::Report::Unknown) if true is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl Context {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }
}
