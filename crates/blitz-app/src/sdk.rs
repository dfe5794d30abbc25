// crates/blitz-app/src/sdk.rs
// Bindings to the StackBlitz SDK global (UMD bundle loaded by the host page)

use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::{EmbedError, EmbedResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = StackBlitzSDK, js_name = openGithubProject)]
    pub(crate) fn open_github_project(repo: &str, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = StackBlitzSDK, js_name = openProject)]
    pub(crate) fn open_project(project: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = StackBlitzSDK, js_name = openProjectId)]
    pub(crate) fn open_project_id(project_id: &str, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = StackBlitzSDK, js_name = embedGithubProject)]
    pub(crate) fn embed_github_project(
        element_id: &str,
        repo: &str,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = StackBlitzSDK, js_name = embedProject)]
    pub(crate) fn embed_project(
        element_id: &str,
        project: &JsValue,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = StackBlitzSDK, js_name = embedProjectId)]
    pub(crate) fn embed_project_id(
        element_id: &str,
        project_id: &str,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;
}

/// Handle to the embedded editor's VM, as resolved by the SDK.
///
/// Opaque here; hosts drive it through their own bindings.
#[derive(Debug, Clone)]
pub struct Vm(JsValue);

impl Vm {
    pub fn as_js(&self) -> &JsValue {
        &self.0
    }

    pub fn into_js(self) -> JsValue {
        self.0
    }
}

impl From<JsValue> for Vm {
    fn from(value: JsValue) -> Self {
        Vm(value)
    }
}

/// Turn a Rust value into a plain JS object (`None` fields become undefined)
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> EmbedResult<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| EmbedError::conversion(&e))
}

/// Wait for an issued embed to hand back its VM
pub async fn await_vm(issued: EmbedResult<Promise>) -> EmbedResult<Vm> {
    let promise = issued?;
    JsFuture::from(promise)
        .await
        .map(Vm::from)
        .map_err(|e| EmbedError::rejected(&e))
}
