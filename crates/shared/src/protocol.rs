use serde::{Deserialize, Serialize};

use crate::domain::{ContentBlock, PageId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    pub slug: String,
    pub label: String,
}

impl From<PageId> for PageSummary {
    fn from(page: PageId) -> Self {
        Self {
            slug: page.slug().to_string(),
            label: page.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPage {
    pub page: PageId,
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePayload {
    pub slug: String,
    pub label: String,
    pub blocks: Vec<ContentBlock>,
}

impl From<RenderedPage> for PagePayload {
    fn from(rendered: RenderedPage) -> Self {
        Self {
            slug: rendered.page.slug().to_string(),
            label: rendered.page.label().to_string(),
            blocks: rendered.blocks,
        }
    }
}
