// crates/blitz-types/src/lib.rs
// Shared types for blitz-embed (native + WASM compatible)
// No browser-only dependencies allowed here

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

mod guard;
mod request;

pub use guard::{should_embed, CancelToken, EmbedGuard, EmbedState};
pub use request::{
    files_request, project_ref_request, repository_request, DisplayProps, EmbedRequest,
};

/// Free-form options object handed to the SDK, keyed by its camelCase names
pub type OptionsBag = serde_json::Map<String, Value>;

// ═══════════════════════════════════════
// DEFAULTS
// ═══════════════════════════════════════

pub const DEFAULT_REPOSITORY_EMBED_ID: &str = "stackblitz-container";
pub const DEFAULT_FILES_EMBED_ID: &str = "stackblitz-project-editor";
pub const DEFAULT_PROJECT_REF_EMBED_ID: &str = "stackblitz-project-id-editor";

pub const DEFAULT_TEMPLATE: &str = "javascript";
pub const DEFAULT_TITLE: &str = "Projeto StackBlitz";

pub const DEFAULT_HEIGHT: i64 = 500;
pub const DEFAULT_WIDTH: &str = "100%";

pub(crate) const REPOSITORY_VIEW: View = View::Both;
pub(crate) const FILES_VIEW: View = View::Editor;
pub(crate) const PROJECT_REF_VIEW: View = View::Editor;

// ═══════════════════════════════════════
// OPTION VALUES
// ═══════════════════════════════════════

/// Which panes the embedded editor shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Preview,
    Editor,
    #[default]
    Both,
}

/// A width or height: plain numbers are pixels, strings are raw CSS.
/// Numbers are forwarded as given, negative ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(i64),
    Css(String),
}

impl Dimension {
    /// CSS length for the container's inline style
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Px(px) => format!("{}px", px),
            Dimension::Css(css) => css.clone(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<i64> for Dimension {
    fn from(px: i64) -> Self {
        Dimension::Px(px)
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Dimension::Px(i64::from(px))
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Px(i64::from(px))
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Dimension::Css(css.to_string())
    }
}

impl From<String> for Dimension {
    fn from(css: String) -> Self {
        Dimension::Css(css)
    }
}

/// File to focus when the editor opens.
///
/// `Unset` leaves the key out of the options bag (undefined on the JS side),
/// `Disabled` sends a literal `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpenFile {
    #[default]
    Unset,
    Disabled,
    Path(String),
}

impl OpenFile {
    pub fn is_unset(&self) -> bool {
        matches!(self, OpenFile::Unset)
    }

    /// Falsy values (`Disabled`, empty path) collapse to `Unset`
    pub fn coerced(self) -> Self {
        match self {
            OpenFile::Path(path) if !path.is_empty() => OpenFile::Path(path),
            _ => OpenFile::Unset,
        }
    }
}

impl Serialize for OpenFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OpenFile::Unset => serializer.serialize_none(),
            OpenFile::Disabled => serializer.serialize_bool(false),
            OpenFile::Path(path) => serializer.serialize_str(path),
        }
    }
}

impl From<&str> for OpenFile {
    fn from(path: &str) -> Self {
        OpenFile::Path(path.to_string())
    }
}

impl From<String> for OpenFile {
    fn from(path: String) -> Self {
        OpenFile::Path(path)
    }
}


// ═══════════════════════════════════════
// EDITOR OPTIONS
// ═══════════════════════════════════════

/// Display configuration sent alongside every embed call.
///
/// `forceEmbedLayout` and `clickToLoad` are pinned to `true`/`false` and
/// cannot be changed through the typed fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    #[serde(skip_serializing_if = "OpenFile::is_unset")]
    pub open_file: OpenFile,
    pub hide_navigation: bool,
    pub hide_explorer: bool,
    pub view: View,
    pub height: Dimension,
    pub width: Dimension,
    force_embed_layout: bool,
    click_to_load: bool,
}

impl EditorOptions {
    pub fn new(view: View, height: Dimension, width: Dimension) -> Self {
        Self {
            open_file: OpenFile::Unset,
            hide_navigation: false,
            hide_explorer: false,
            view,
            height,
            width,
            force_embed_layout: true,
            click_to_load: false,
        }
    }

    pub fn open_file(mut self, open_file: OpenFile) -> Self {
        self.open_file = open_file;
        self
    }

    pub fn hide_navigation(mut self, hide: bool) -> Self {
        self.hide_navigation = hide;
        self
    }

    pub fn hide_explorer(mut self, hide: bool) -> Self {
        self.hide_explorer = hide;
        self
    }

    /// Serialize into the SDK's options object, then apply `overrides` on top.
    ///
    /// Overrides are merged last and replace any key, including
    /// `forceEmbedLayout` and `clickToLoad`.
    pub fn to_bag(&self, overrides: &OptionsBag) -> serde_json::Result<OptionsBag> {
        let mut bag = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "editor options serialized to a non-object: {}",
                    other
                )));
            }
        };

        for (key, value) in overrides {
            bag.insert(key.clone(), value.clone());
        }

        Ok(bag)
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::new(View::default(), Dimension::Px(DEFAULT_HEIGHT), Dimension::from(DEFAULT_WIDTH))
    }
}

// ═══════════════════════════════════════
// PROJECTS
// ═══════════════════════════════════════

/// In-memory project handed to `embedProject` / `openProject`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    pub template: String,
    pub title: String,
    pub description: String,
    pub files: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,
}

impl ProjectDescriptor {
    pub fn new(files: BTreeMap<String, String>) -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            files,
            dependencies: None,
        }
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn dependencies(mut self, dependencies: Option<BTreeMap<String, String>>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Repository reference in the SDK's `owner/name[/tree/branch]` form
pub fn repository_reference(repo: &str, branch: Option<&str>) -> String {
    match branch.map(str::trim).filter(|b| !b.is_empty()) {
        Some(branch) => format!("{}/tree/{}", repo.trim_end_matches('/'), branch),
        None => repo.to_string(),
    }
}

/// Inline style for the element the editor is mounted into
pub fn container_style(width: &Dimension, height: &Dimension) -> String {
    format!(
        "width: {}; height: {}; border: 1px solid #ccc; border-radius: 4px; overflow: hidden;",
        width.to_css(),
        height.to_css()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_overrides() -> OptionsBag {
        OptionsBag::new()
    }

    #[test]
    fn test_default_bag_has_forced_flags() {
        let bag = EditorOptions::default().to_bag(&no_overrides()).unwrap();

        assert_eq!(bag["forceEmbedLayout"], json!(true));
        assert_eq!(bag["clickToLoad"], json!(false));
        assert_eq!(bag["view"], json!("both"));
        assert_eq!(bag["height"], json!(500));
        assert_eq!(bag["width"], json!("100%"));
        assert!(!bag.contains_key("openFile"));
    }

    #[test]
    fn test_overrides_win() {
        let mut overrides = no_overrides();
        overrides.insert("clickToLoad".to_string(), json!(true));
        overrides.insert("theme".to_string(), json!("dark"));

        let bag = EditorOptions::default().to_bag(&overrides).unwrap();

        assert_eq!(bag["clickToLoad"], json!(true));
        assert_eq!(bag["forceEmbedLayout"], json!(true));
        assert_eq!(bag["theme"], json!("dark"));
    }

    #[test]
    fn test_open_file_shapes() {
        let disabled = EditorOptions::default()
            .open_file(OpenFile::Disabled)
            .to_bag(&no_overrides())
            .unwrap();
        assert_eq!(disabled["openFile"], json!(false));

        let path = EditorOptions::default()
            .open_file("src/index.ts".into())
            .to_bag(&no_overrides())
            .unwrap();
        assert_eq!(path["openFile"], json!("src/index.ts"));
    }

    #[test]
    fn test_open_file_coercion() {
        assert_eq!(OpenFile::Disabled.coerced(), OpenFile::Unset);
        assert_eq!(OpenFile::from("").coerced(), OpenFile::Unset);
        assert_eq!(OpenFile::Unset.coerced(), OpenFile::Unset);
        assert_eq!(OpenFile::from("a.js").coerced(), OpenFile::from("a.js"));
    }

    #[test]
    fn test_full_bag_shape() {
        let bag = EditorOptions::new(View::Preview, Dimension::from("80vh"), Dimension::Px(640))
            .hide_navigation(true)
            .hide_explorer(true)
            .to_bag(&no_overrides())
            .unwrap();

        assert_eq!(
            Value::Object(bag),
            json!({
                "hideNavigation": true,
                "hideExplorer": true,
                "view": "preview",
                "height": "80vh",
                "width": 640,
                "forceEmbedLayout": true,
                "clickToLoad": false
            })
        );
    }

    #[test]
    fn test_descriptor_defaults() {
        let files = BTreeMap::from([("index.js".to_string(), "console.log(1)".to_string())]);
        let descriptor = ProjectDescriptor::new(files).template("javascript");

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "template": "javascript",
                "title": "Projeto StackBlitz",
                "description": "",
                "files": { "index.js": "console.log(1)" }
            })
        );
    }

    #[test]
    fn test_descriptor_with_dependencies() {
        let deps = BTreeMap::from([("lodash".to_string(), "^4.17.21".to_string())]);
        let descriptor = ProjectDescriptor::new(BTreeMap::new()).dependencies(Some(deps));

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["dependencies"], json!({ "lodash": "^4.17.21" }));
    }

    #[test]
    fn test_repository_reference() {
        assert_eq!(repository_reference("octocat/hello-world", None), "octocat/hello-world");
        assert_eq!(repository_reference("octocat/hello-world", Some("  ")), "octocat/hello-world");
        assert_eq!(
            repository_reference("octocat/hello-world/", Some("dev")),
            "octocat/hello-world/tree/dev"
        );
    }

    #[test]
    fn test_container_style() {
        let style = container_style(&Dimension::from("100%"), &Dimension::Px(500));
        assert!(style.starts_with("width: 100%; height: 500px;"));
        assert!(style.contains("overflow: hidden"));
    }

    #[test]
    fn test_dimension_from_literals() {
        assert_eq!(Dimension::from(300), Dimension::Px(300));
        assert_eq!(Dimension::from(300u32), Dimension::Px(300));
        assert_eq!(Dimension::from("50vh").to_string(), "50vh");
    }

    #[test]
    fn test_view_serialization() {
        assert_eq!(serde_json::to_value(View::Editor).unwrap(), json!("editor"));
        assert_eq!(serde_json::to_value(View::Both).unwrap(), json!("both"));
    }

    #[test]
    fn test_negative_dimension_forwarded() {
        let height = Dimension::from(-4);
        assert_eq!(height, Dimension::Px(-4));
        assert_eq!(height.to_css(), "-4px");
        assert_eq!(serde_json::to_value(&height).unwrap(), json!(-4));
    }
}
