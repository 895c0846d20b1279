//! Presenter Port - Rendering capability the flow controller calls into.
//!
//! Implementations decide what a bubble, a button or a review list looks
//! like. User actions travel the other way, as calls on the controller.

use crate::domain::intake::PresentationEvent;

/// Port for rendering controller output.
///
/// Called synchronously, in emission order, from inside controller
/// operations. Implementations must not call back into the controller.
pub trait Presenter: Send + Sync {
    fn present(&self, event: PresentationEvent);
}
