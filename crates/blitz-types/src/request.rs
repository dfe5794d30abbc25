// crates/blitz-types/src/request.rs
// What each embedding component sends to the SDK, built without a browser

use crate::{
    repository_reference, Dimension, EditorOptions, OpenFile, OptionsBag, ProjectDescriptor, View,
    DEFAULT_HEIGHT, DEFAULT_WIDTH, FILES_VIEW, PROJECT_REF_VIEW, REPOSITORY_VIEW,
};

/// Display props shared by the three components
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProps {
    pub open_file: OpenFile,
    pub hide_navigation: bool,
    pub hide_explorer: bool,
    pub view: View,
    pub height: Dimension,
    pub width: Dimension,
    pub overrides: OptionsBag,
}

impl DisplayProps {
    fn with_view(view: View, open_file: OpenFile) -> Self {
        Self {
            open_file,
            hide_navigation: false,
            hide_explorer: false,
            view,
            height: Dimension::Px(DEFAULT_HEIGHT),
            width: Dimension::from(DEFAULT_WIDTH),
            overrides: OptionsBag::new(),
        }
    }

    /// `RepositoryEmbed` defaults
    pub fn repository() -> Self {
        Self::with_view(REPOSITORY_VIEW, OpenFile::Unset)
    }

    /// `FilesEmbed` defaults: `openFile: false` is sent explicitly
    pub fn files() -> Self {
        Self::with_view(FILES_VIEW, OpenFile::Disabled)
    }

    /// `ProjectRefEmbed` defaults
    pub fn project_ref() -> Self {
        Self::with_view(PROJECT_REF_VIEW, OpenFile::Unset)
    }

    fn to_bag(&self, open_file: OpenFile) -> serde_json::Result<OptionsBag> {
        EditorOptions::new(self.view, self.height.clone(), self.width.clone())
            .open_file(open_file)
            .hide_navigation(self.hide_navigation)
            .hide_explorer(self.hide_explorer)
            .to_bag(&self.overrides)
    }
}

/// One embed call: target element, subject, options
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedRequest<S> {
    pub element_id: String,
    pub subject: S,
    pub options: OptionsBag,
}

/// Repository embed; a falsy `open_file` is left out of the bag
pub fn repository_request(
    element_id: &str,
    repo: &str,
    branch: Option<&str>,
    display: &DisplayProps,
) -> serde_json::Result<EmbedRequest<String>> {
    Ok(EmbedRequest {
        element_id: element_id.to_string(),
        subject: repository_reference(repo, branch),
        options: display.to_bag(display.open_file.clone().coerced())?,
    })
}

/// In-memory project embed; `open_file` is sent exactly as given
pub fn files_request(
    element_id: &str,
    project: ProjectDescriptor,
    display: &DisplayProps,
) -> serde_json::Result<EmbedRequest<ProjectDescriptor>> {
    Ok(EmbedRequest {
        element_id: element_id.to_string(),
        subject: project,
        options: display.to_bag(display.open_file.clone())?,
    })
}

/// Published project embed; a falsy `open_file` is left out of the bag
pub fn project_ref_request(
    element_id: &str,
    project_id: &str,
    display: &DisplayProps,
) -> serde_json::Result<EmbedRequest<String>> {
    Ok(EmbedRequest {
        element_id: element_id.to_string(),
        subject: project_id.to_string(),
        options: display.to_bag(display.open_file.clone().coerced())?,
    })
}
