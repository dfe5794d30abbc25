// crates/blitz-app/src/lifecycle.rs
// Settles a pending embed against its component's guard

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use blitz_types::{EmbedGuard, EmbedState};

use crate::error::EmbedResult;

/// Guard shared between a component's effect and its pending embed task
pub type SharedGuard<K> = Rc<RefCell<EmbedGuard<K>>>;

pub fn shared_guard<K: PartialEq>() -> SharedGuard<K> {
    Rc::new(RefCell::new(EmbedGuard::new()))
}

/// Await an issued embed and route the outcome.
///
/// On success the guard goes `Ready` and `on_load` runs once with the handle.
/// On failure the guard goes `Failed` and the error is logged, never raised.
/// If the instance was torn down meanwhile, the outcome is dropped.
pub async fn settle<K, H, F, C>(
    label: &'static str,
    pending: F,
    guard: SharedGuard<K>,
    on_load: Option<C>,
) -> EmbedState
where
    K: PartialEq,
    F: Future<Output = EmbedResult<H>>,
    C: FnOnce(H),
{
    let outcome = pending.await;

    let mut current = guard.borrow_mut();
    match outcome {
        Ok(handle) => {
            if !current.resolve() {
                log::debug!("{} embed resolved after teardown, ignoring", label);
                return current.state();
            }
            let state = current.state();
            drop(current);

            log::info!("{} embed ready", label);
            if let Some(on_load) = on_load {
                on_load(handle);
            }
            state
        }
        Err(e) => {
            if current.fail() {
                log::error!("Failed to load StackBlitz VM ({}): {}", label, e);
            } else {
                log::debug!("{} embed failed after teardown: {}", label, e);
            }
            current.state()
        }
    }
}
