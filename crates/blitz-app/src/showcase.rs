// crates/blitz-app/src/showcase.rs
// Demo page exercising the three embeds and the open-in-new-tab gateway

use std::collections::BTreeMap;

use blitz_types::{OptionsBag, View};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::{FilesEmbed, ProjectRefEmbed, RepositoryEmbed};
use crate::gateway::EditorGateway;
use crate::sdk::Vm;

fn sample_files() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("index.html".to_string(), "<div id=\"app\"></div>".to_string()),
        (
            "index.js".to_string(),
            "document.getElementById('app').textContent = 'Hello from blitz-embed';".to_string(),
        ),
    ])
}

#[component]
pub fn Showcase() -> impl IntoView {
    provide_meta_context();

    let (repo, set_repo) = signal("octocat/hello-world".to_string());
    let (loaded, set_loaded) = signal(Vec::<&'static str>::new());

    let open_in_tab = move |_| {
        let repo = repo.get_untracked();
        if let Err(e) = EditorGateway::open_repository(&repo, &OptionsBag::new()) {
            log::error!("Failed to open {}: {}", repo, e);
        }
    };

    view! {
        <Title text="StackBlitz embeds"/>
        <main class="showcase">
            <p class="text-muted">
                {move || format!("Loaded: {}", loaded.get().join(", "))}
            </p>

            <section>
                <h2>"Repository"</h2>
                <input
                    type="text"
                    prop:value=move || repo.get()
                    on:change=move |ev| set_repo.set(event_target_value(&ev))
                />
                <button on:click=open_in_tab>"Open in new tab"</button>
                <RepositoryEmbed
                    repo=repo
                    on_load=move |_vm: Vm| set_loaded.update(|l| l.push("repository"))
                />
            </section>

            <section>
                <h2>"Files"</h2>
                <FilesEmbed
                    files=sample_files()
                    title="blitz-embed demo"
                    open_file="index.js"
                    on_load=move |_vm: Vm| set_loaded.update(|l| l.push("files"))
                />
            </section>

            <section>
                <h2>"Published project"</h2>
                <ProjectRefEmbed
                    project_id={"js-hello".to_string()}
                    view=View::Preview
                    height=320
                    on_load=move |_vm: Vm| set_loaded.update(|l| l.push("project"))
                />
            </section>
        </main>
    }
}
