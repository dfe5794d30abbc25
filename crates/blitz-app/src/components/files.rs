// crates/blitz-app/src/components/files.rs
// Editor for an in-memory project built from a path -> content map

use std::collections::BTreeMap;

use blitz_types::{
    files_request, Dimension, DisplayProps, OpenFile, OptionsBag, ProjectDescriptor, View,
    DEFAULT_FILES_EMBED_ID, DEFAULT_HEIGHT, DEFAULT_TEMPLATE, DEFAULT_TITLE, DEFAULT_WIDTH,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::EmbedContainer;
use crate::error::EmbedError;
use crate::gateway::EditorGateway;
use crate::lifecycle::{settle, shared_guard};
use crate::sdk::{await_vm, Vm};

/// Embeds a project made of `files` once the map is non-empty.
///
/// `open_file` is sent as given; `OpenFile::Disabled` shows up as `false`.
#[component]
pub fn FilesEmbed(
    #[prop(into)] files: Signal<BTreeMap<String, String>>,
    #[prop(into, default = Signal::stored(DEFAULT_FILES_EMBED_ID.to_string()))]
    embed_id: Signal<String>,
    #[prop(into, default = DEFAULT_TEMPLATE.to_string())] template: String,
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(into, optional)] description: String,
    #[prop(optional)] dependencies: Option<BTreeMap<String, String>>,
    #[prop(into, default = DisplayProps::files().open_file)] open_file: OpenFile,
    #[prop(optional)] hide_navigation: bool,
    #[prop(optional)] hide_explorer: bool,
    #[prop(default = DisplayProps::files().view)] view: View,
    #[prop(into, default = Dimension::Px(DEFAULT_HEIGHT))] height: Dimension,
    #[prop(into, default = Dimension::from(DEFAULT_WIDTH))] width: Dimension,
    #[prop(optional)] options: OptionsBag,
    #[prop(optional, into)] on_load: Option<Callback<Vm>>,
) -> impl IntoView {
    let guard = shared_guard::<(String, BTreeMap<String, String>)>();
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
        let files = files.get();
        let element_id = embed_id.get();
        let qualifies = !files.is_empty();

        if !guard.borrow_mut().observe((element_id.clone(), files.clone()), qualifies) {
            return;
        }

        let project = ProjectDescriptor::new(files)
            .template(template.as_str())
            .title(title.as_str())
            .description(description.as_str())
            .dependencies(dependencies.clone());

        let issued = files_request(&element_id, project, &display)
            .map_err(EmbedError::from)
            .and_then(|request| {
                log::info!(
                    "Embedding project '{}' ({} files) into #{}",
                    request.subject.title,
                    request.subject.files.len(),
                    request.element_id
                );
                EditorGateway::embed_project(&request.element_id, &request.subject, &request.options)
            });

        let pending_guard = guard.clone();
        let on_load = on_load.map(|callback| move |vm: Vm| callback.run(vm));
        spawn_local(async move {
            settle("files", await_vm(issued), pending_guard, on_load).await;
        });
    });

    view! { <EmbedContainer embed_id=embed_id width=width height=height/> }
}
