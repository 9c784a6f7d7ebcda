//! Desktop application catalogue and the window payloads the shell renders for each entry.

use serde::{Deserialize, Serialize};

use crate::{
    icon_layout::IconPosition,
    model::AppId,
    window_manager::OpenWindowRequest,
};

pub const RECYCLE_BIN_ID: &str = "recycle-bin";
pub const SEARCH_WINDOW_ID: &str = "search";

const ICON_COLUMN_X: i32 = 20;
const ICON_COLUMN_TOP: i32 = 20;
const ICON_ROW_SPACING: i32 = 120;
const ICON_COLUMN_SPACING: i32 = 100;
const ICONS_PER_COLUMN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesktopApp {
    AboutMe,
    Projects,
    Experiences,
    Resume,
    Contact,
    CommandPrompt,
    RecycleBin,
}

/// Static metadata for one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app: DesktopApp,
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
}

const CATALOGUE: &[AppDescriptor] = &[
    AppDescriptor {
        app: DesktopApp::AboutMe,
        id: "about-me",
        title: "About Me",
        icon: "user",
        keywords: &["about", "bio", "me"],
    },
    AppDescriptor {
        app: DesktopApp::Projects,
        id: "projects",
        title: "My Projects",
        icon: "folder",
        keywords: &["projects", "portfolio", "rust", "web", "code"],
    },
    AppDescriptor {
        app: DesktopApp::Experiences,
        id: "experiences",
        title: "My Experiences",
        icon: "briefcase",
        keywords: &["experience", "work", "jobs", "career"],
    },
    AppDescriptor {
        app: DesktopApp::Resume,
        id: "resume",
        title: "My Resume",
        icon: "document",
        keywords: &["resume", "cv", "pdf"],
    },
    AppDescriptor {
        app: DesktopApp::Contact,
        id: "contact",
        title: "Contact Me",
        icon: "mail",
        keywords: &["contact", "email", "mail", "message"],
    },
    AppDescriptor {
        app: DesktopApp::CommandPrompt,
        id: "cmd",
        title: "Command Prompt",
        icon: "terminal",
        keywords: &["cmd", "terminal", "shell", "console"],
    },
    AppDescriptor {
        app: DesktopApp::RecycleBin,
        id: RECYCLE_BIN_ID,
        title: "Recycle Bin",
        icon: "recycle-bin",
        keywords: &["recycle", "trash", "bin", "deleted"],
    },
];

/// What a window shows. The window manager stores it without looking inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    AboutMe,
    Projects { highlight: Option<String> },
    Experiences,
    Resume,
    Contact,
    CommandPrompt,
    RecycleBin,
    SearchResults { query: String },
}

impl DesktopApp {
    pub fn descriptor(self) -> &'static AppDescriptor {
        CATALOGUE
            .iter()
            .find(|d| d.app == self)
            .unwrap_or(&CATALOGUE[0])
    }

    pub fn id(self) -> AppId {
        AppId::from(self.descriptor().id)
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn icon(self) -> &'static str {
        self.descriptor().icon
    }

    pub fn default_content(self) -> WindowContent {
        match self {
            Self::AboutMe => WindowContent::AboutMe,
            Self::Projects => WindowContent::Projects { highlight: None },
            Self::Experiences => WindowContent::Experiences,
            Self::Resume => WindowContent::Resume,
            Self::Contact => WindowContent::Contact,
            Self::CommandPrompt => WindowContent::CommandPrompt,
            Self::RecycleBin => WindowContent::RecycleBin,
        }
    }
}

pub fn catalogue() -> &'static [AppDescriptor] {
    CATALOGUE
}

pub fn descriptor_by_id(id: &AppId) -> Option<&'static AppDescriptor> {
    CATALOGUE.iter().find(|d| d.id == id.as_str())
}

/// Display title for an id, falling back to the raw id.
pub fn title_for(id: &AppId) -> String {
    descriptor_by_id(id)
        .map(|d| d.title.to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn recycle_bin_id() -> AppId {
    AppId::from(RECYCLE_BIN_ID)
}

/// First-load icon coordinates: columns of five down the left edge.
pub fn desktop_icon_positions() -> Vec<IconPosition> {
    CATALOGUE
        .iter()
        .enumerate()
        .map(|(index, d)| {
            let column = (index / ICONS_PER_COLUMN) as i32;
            let row = (index % ICONS_PER_COLUMN) as i32;
            IconPosition {
                id: AppId::from(d.id),
                x: ICON_COLUMN_X + ICON_COLUMN_SPACING * column,
                y: ICON_COLUMN_TOP + ICON_ROW_SPACING * row,
            }
        })
        .collect()
}

/// Builds the open request for a catalogue entry with its default content.
pub fn open_request(app: DesktopApp) -> OpenWindowRequest<WindowContent> {
    open_request_with(app, app.default_content())
}

pub fn open_request_with(
    app: DesktopApp,
    content: WindowContent,
) -> OpenWindowRequest<WindowContent> {
    OpenWindowRequest {
        id: app.id(),
        title: app.title().to_string(),
        icon: app.icon().to_string(),
        content,
        hide_chrome: false,
    }
}

pub fn search_results_request(query: &str) -> OpenWindowRequest<WindowContent> {
    OpenWindowRequest {
        id: AppId::from(SEARCH_WINDOW_ID),
        title: format!("Search Results - {query}"),
        icon: "search".to_string(),
        content: WindowContent::SearchResults {
            query: query.to_string(),
        },
        hide_chrome: false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalogue_ids_are_unique() {
        let mut ids: Vec<&str> = catalogue().iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalogue().len());
    }

    #[test]
    fn every_app_resolves_its_own_descriptor() {
        for descriptor in catalogue() {
            assert_eq!(descriptor.app.descriptor().id, descriptor.id);
        }
    }

    #[test]
    fn icons_fill_columns_of_five() {
        let positions = desktop_icon_positions();
        assert_eq!((positions[0].x, positions[0].y), (20, 20));
        assert_eq!((positions[1].x, positions[1].y), (20, 140));
        assert_eq!((positions[5].x, positions[5].y), (120, 20));
        assert!(positions.iter().any(|p| p.id.as_str() == RECYCLE_BIN_ID));
    }

    #[test]
    fn title_falls_back_to_raw_id() {
        assert_eq!(title_for(&AppId::from("projects")), "My Projects");
        assert_eq!(title_for(&AppId::from("unknown")), "unknown");
    }
}
