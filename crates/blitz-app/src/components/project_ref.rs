// crates/blitz-app/src/components/project_ref.rs
// Editor for a published project, looked up by id

use blitz_types::{
    project_ref_request, Dimension, DisplayProps, OpenFile, OptionsBag, View, DEFAULT_HEIGHT,
    DEFAULT_PROJECT_REF_EMBED_ID, DEFAULT_WIDTH,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::EmbedContainer;
use crate::error::EmbedError;
use crate::gateway::EditorGateway;
use crate::lifecycle::{settle, shared_guard};
use crate::sdk::{await_vm, Vm};

#[component]
pub fn ProjectRefEmbed(
    #[prop(into)] project_id: Signal<String>,
    #[prop(into, default = DEFAULT_PROJECT_REF_EMBED_ID.to_string())] embed_id: String,
    #[prop(into, optional)] open_file: OpenFile,
    #[prop(optional)] hide_navigation: bool,
    #[prop(optional)] hide_explorer: bool,
    #[prop(default = DisplayProps::project_ref().view)] view: View,
    #[prop(into, default = Dimension::Px(DEFAULT_HEIGHT))] height: Dimension,
    #[prop(into, default = Dimension::from(DEFAULT_WIDTH))] width: Dimension,
    #[prop(optional)] options: OptionsBag,
    #[prop(optional, into)] on_load: Option<Callback<Vm>>,
) -> impl IntoView {
    let guard = shared_guard::<String>();
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

    let element_id = embed_id.clone();
    Effect::new(move |_| {
        let project_id = project_id.get();
        let qualifies = !project_id.is_empty();

        if !guard.borrow_mut().observe(project_id.clone(), qualifies) {
            return;
        }

        let issued = project_ref_request(&element_id, &project_id, &display)
            .map_err(EmbedError::from)
            .and_then(|request| {
                log::info!("Embedding project {} into #{}", request.subject, request.element_id);
                EditorGateway::embed_project_by_id(
                    &request.element_id,
                    &request.subject,
                    &request.options,
                )
            });

        let pending_guard = guard.clone();
        let on_load = on_load.map(|callback| move |vm: Vm| callback.run(vm));
        spawn_local(async move {
            settle("project", await_vm(issued), pending_guard, on_load).await;
        });
    });

    view! { <EmbedContainer embed_id=embed_id width=width height=height/> }
}
