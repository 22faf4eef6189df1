use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed set of pages offered by the sidebar, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Introduction,
    #[serde(rename = "phase-1")]
    Phase1,
    #[serde(rename = "phase-2")]
    Phase2,
    #[serde(rename = "phase-3")]
    Phase3,
    #[serde(rename = "phase-4")]
    Phase4,
    Demo,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Introduction,
        PageId::Phase1,
        PageId::Phase2,
        PageId::Phase3,
        PageId::Phase4,
        PageId::Demo,
    ];

    /// Text shown next to the radio button.
    pub fn label(self) -> &'static str {
        match self {
            PageId::Introduction => "Introduction",
            PageId::Phase1 => "Phase 1 (Data)",
            PageId::Phase2 => "Phase 2 (Tracking)",
            PageId::Phase3 => "Phase 3 (Orchestration)",
            PageId::Phase4 => "Phase 4 (Monitoring)",
            PageId::Demo => "Demo",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Introduction => "introduction",
            PageId::Phase1 => "phase-1",
            PageId::Phase2 => "phase-2",
            PageId::Phase3 => "phase-3",
            PageId::Phase4 => "phase-4",
            PageId::Demo => "demo",
        }
    }

    /// Accepts either the sidebar label or the slug.
    pub fn from_selection(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.label() == selection || page.slug() == selection)
    }
}

impl Default for PageId {
    fn default() -> Self {
        PageId::ALL[0]
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Wide,
    Centered,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Wide => "wide",
            Layout::Centered => "centered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout '{0}', expected 'wide' or 'centered'")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "centered" => Ok(Layout::Centered),
            _ => Err(UnknownLayout(raw.to_string())),
        }
    }
}

/// Page metadata fixed once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub page_title: String,
    pub page_icon: String,
    pub layout: Layout,
    pub menu_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_title: "MLOps Accidents Project".into(),
            page_icon: "🚙".into(),
            layout: Layout::Wide,
            menu_label: "Main menu".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Green,
    Blue,
    Orange,
    Red,
    Gray,
}

impl BadgeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Blue => "blue",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
            BadgeColor::Gray => "gray",
        }
    }
}

/// One unit of rendered page output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Title {
        text: String,
    },
    Subheader {
        text: String,
    },
    /// Markdown source.
    Text {
        markdown: String,
    },
    Divider,
    Image {
        path: String,
        caption: Option<String>,
    },
    Badge {
        text: String,
        color: BadgeColor,
    },
    EmbeddedHtml {
        content: String,
        height: u32,
        scrollable: bool,
    },
    CodeBlock {
        text: String,
        language: String,
    },
}

impl ContentBlock {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Title { .. } => "title",
            ContentBlock::Subheader { .. } => "subheader",
            ContentBlock::Text { .. } => "text",
            ContentBlock::Divider => "divider",
            ContentBlock::Image { .. } => "image",
            ContentBlock::Badge { .. } => "badge",
            ContentBlock::EmbeddedHtml { .. } => "embedded_html",
            ContentBlock::CodeBlock { .. } => "code_block",
        }
    }
}
