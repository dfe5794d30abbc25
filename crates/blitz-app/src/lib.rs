// crates/blitz-app/src/lib.rs
// blitz-embed - Leptos components embedding the StackBlitz editor (CSR)

pub mod components;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod sdk;

#[cfg(feature = "showcase")]
mod showcase;

// Re-export shared types
pub use blitz_types::*;

pub use components::{FilesEmbed, ProjectRefEmbed, RepositoryEmbed};
pub use error::{EmbedError, EmbedResult};
pub use gateway::EditorGateway;
pub use sdk::Vm;

#[cfg(feature = "showcase")]
pub use showcase::Showcase;

/// Panic hook + console logger. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(feature = "showcase")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    init_logging(log::Level::Debug);

    log::info!("Mounting StackBlitz showcase");

    leptos::mount::mount_to_body(Showcase);
}
