// crates/blitz-app/src/components.rs
// Embedding components and their shared container

use blitz_types::{container_style, Dimension};
use leptos::prelude::*;

mod files;
mod project_ref;
mod repository;

pub use files::FilesEmbed;
pub use project_ref::ProjectRefEmbed;
pub use repository::RepositoryEmbed;

/// The element the SDK mounts into, sized and clipped
#[component]
pub(crate) fn EmbedContainer(
    #[prop(into)] embed_id: Signal<String>,
    width: Dimension,
    height: Dimension,
) -> impl IntoView {
    let style = container_style(&width, &height);

    view! {
        <div id=move || embed_id.get() style=style></div>
    }
}
