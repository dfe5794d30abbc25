// crates/blitz-app/src/components/repository.rs
// Editor bound to a GitHub repository

use blitz_types::{
    repository_request, Dimension, DisplayProps, OpenFile, OptionsBag, View, DEFAULT_HEIGHT,
    DEFAULT_REPOSITORY_EMBED_ID, DEFAULT_WIDTH,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::EmbedContainer;
use crate::error::EmbedError;
use crate::gateway::EditorGateway;
use crate::lifecycle::{settle, shared_guard};
use crate::sdk::{await_vm, Vm};

/// Embeds `repo` (`owner/name`) once it is non-empty.
///
/// Runs again only when `repo` or `embed_id` change, and only while nothing
/// has been embedded yet.
#[component]
pub fn RepositoryEmbed(
    #[prop(into)] repo: Signal<String>,
    #[prop(into, default = Signal::stored(DEFAULT_REPOSITORY_EMBED_ID.to_string()))]
    embed_id: Signal<String>,
    #[prop(into, optional)] branch: Option<String>,
    #[prop(into, optional)] open_file: OpenFile,
    #[prop(optional)] hide_navigation: bool,
    #[prop(optional)] hide_explorer: bool,
    #[prop(default = DisplayProps::repository().view)] view: View,
    #[prop(into, default = Dimension::Px(DEFAULT_HEIGHT))] height: Dimension,
    #[prop(into, default = Dimension::from(DEFAULT_WIDTH))] width: Dimension,
    #[prop(optional)] options: OptionsBag,
    #[prop(optional, into)] on_load: Option<Callback<Vm>>,
) -> impl IntoView {
    let guard = shared_guard::<(String, String)>();
    let token = guard.borrow().token();
    on_cleanup(move || token.cancel());

    let display = DisplayProps {
        open_file,
        hide_navigation,
        hide_explorer,
        view,
        height: height.clone(),
        width: width.clone(),
        overrides: options,
    };

    Effect::new(move |_| {
        let repo = repo.get();
        let element_id = embed_id.get();
        let qualifies = !repo.is_empty();

        if !guard.borrow_mut().observe((repo.clone(), element_id.clone()), qualifies) {
            return;
        }

        let issued = repository_request(&element_id, &repo, branch.as_deref(), &display)
            .map_err(EmbedError::from)
            .and_then(|request| {
                log::info!("Embedding repository {} into #{}", request.subject, request.element_id);
                EditorGateway::embed_repository(
                    &request.element_id,
                    &request.subject,
                    &request.options,
                )
            });

        let pending_guard = guard.clone();
        let on_load = on_load.map(|callback| move |vm: Vm| callback.run(vm));
        spawn_local(async move {
            settle("repository", await_vm(issued), pending_guard, on_load).await;
        });
    });

    view! { <EmbedContainer embed_id=embed_id width=width height=height/> }
}
