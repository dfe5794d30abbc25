// crates/blitz-app/src/gateway.rs
// Imperative entry points: open in a new tab or embed without a component

use blitz_types::{OptionsBag, ProjectDescriptor};
use js_sys::Promise;
use wasm_bindgen::JsValue;

use crate::error::{EmbedError, EmbedResult};
use crate::sdk::{self, to_js};

pub use crate::components::{FilesEmbed, ProjectRefEmbed, RepositoryEmbed};

/// Stateless passthrough to the SDK.
///
/// Arguments are forwarded unchanged. There is no guard and no callback
/// plumbing here, and a rejected promise is the caller's to handle.
pub struct EditorGateway;

impl EditorGateway {
    /// Open a GitHub repository (`owner/name[/tree/branch]`) in a new tab
    pub fn open_repository(repo: &str, options: &OptionsBag) -> EmbedResult<JsValue> {
        sdk::open_github_project(repo, &to_js(options)?).map_err(|e| EmbedError::sdk(&e))
    }

    /// Open an in-memory project in a new tab
    pub fn open_project(project: &ProjectDescriptor) -> EmbedResult<JsValue> {
        sdk::open_project(&to_js(project)?).map_err(|e| EmbedError::sdk(&e))
    }

    /// Open a published project by its id in a new tab
    pub fn open_project_by_id(project_id: &str, options: &OptionsBag) -> EmbedResult<JsValue> {
        sdk::open_project_id(project_id, &to_js(options)?).map_err(|e| EmbedError::sdk(&e))
    }

    pub fn embed_repository(
        element_id: &str,
        repo: &str,
        options: &OptionsBag,
    ) -> EmbedResult<Promise> {
        sdk::embed_github_project(element_id, repo, &to_js(options)?)
            .map_err(|e| EmbedError::sdk(&e))
    }

    pub fn embed_project(
        element_id: &str,
        project: &ProjectDescriptor,
        options: &OptionsBag,
    ) -> EmbedResult<Promise> {
        sdk::embed_project(element_id, &to_js(project)?, &to_js(options)?)
            .map_err(|e| EmbedError::sdk(&e))
    }

    pub fn embed_project_by_id(
        element_id: &str,
        project_id: &str,
        options: &OptionsBag,
    ) -> EmbedResult<Promise> {
        sdk::embed_project_id(element_id, project_id, &to_js(options)?)
            .map_err(|e| EmbedError::sdk(&e))
    }
}
