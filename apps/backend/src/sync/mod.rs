//! Client-side convergence on the authoritative game record.

pub mod reconciler;

pub use reconciler::{Subscription, SyncReconciler};
