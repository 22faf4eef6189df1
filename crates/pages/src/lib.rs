//! Page table and dispatch for the MLOps accidents showcase.
//!
//! Every page is a [`PageDescriptor`]: an enumerated [`PageId`] paired with a
//! render routine that writes a fixed sequence of [`ContentBlock`]s. The
//! [`PageRouter`] looks the selection up in the table and runs exactly one
//! routine.
//!
//! [`ContentBlock`]: shared::domain::ContentBlock

pub mod assets;
pub mod content;
pub mod writer;

use std::fmt;

use shared::{domain::PageId, protocol::RenderedPage};
use tracing::debug;

pub use assets::{AssetError, AssetStore};
pub use writer::{MissingAsset, PageWriter};

pub type RenderFn = fn(&mut PageWriter<'_>) -> Result<(), AssetError>;

#[derive(Clone, Copy)]
pub struct PageDescriptor {
    pub id: PageId,
    pub render: RenderFn,
}

impl PageDescriptor {
    pub const fn new(id: PageId, render: RenderFn) -> Self {
        Self { id, render }
    }
}

impl fmt::Debug for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageDescriptor")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageRouter {
    pages: &'static [PageDescriptor],
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRouter {
    pub fn new() -> Self {
        Self::with_pages(&content::PAGES)
    }

    pub fn with_pages(pages: &'static [PageDescriptor]) -> Self {
        Self { pages }
    }

    /// Page ids in menu order.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().map(|descriptor| descriptor.id)
    }

    pub fn descriptor(&self, page: PageId) -> Option<&PageDescriptor> {
        self.pages.iter().find(|descriptor| descriptor.id == page)
    }

    /// Renders the page named by `selection` (label or slug).
    ///
    /// An unknown selection renders nothing and is not an error.
    pub fn dispatch(
        &self,
        selection: &str,
        assets: &AssetStore,
    ) -> Result<Option<RenderedPage>, AssetError> {
        match PageId::from_selection(selection) {
            Some(page) => self.render(page, assets),
            None => {
                debug!(%selection, "selection matches no page");
                Ok(None)
            }
        }
    }

    pub fn render(
        &self,
        page: PageId,
        assets: &AssetStore,
    ) -> Result<Option<RenderedPage>, AssetError> {
        let Some(descriptor) = self.descriptor(page) else {
            debug!(page = page.slug(), "page not in table");
            return Ok(None);
        };

        let mut writer = PageWriter::new(page, assets);
        (descriptor.render)(&mut writer)?;
        let blocks = writer.into_blocks();
        debug!(page = page.slug(), blocks = blocks.len(), "rendered page");
        Ok(Some(RenderedPage { page, blocks }))
    }

    /// Runs every routine in audit mode and returns each asset that is missing.
    pub fn audit_assets(&self, assets: &AssetStore) -> Vec<MissingAsset> {
        let mut missing = Vec::new();
        for descriptor in self.pages {
            let mut writer = PageWriter::auditing(descriptor.id, assets);
            if let Err(err) = (descriptor.render)(&mut writer) {
                missing.push(MissingAsset {
                    page: descriptor.id,
                    path: err.path().to_string(),
                });
            }
            missing.extend(writer.into_missing());
        }
        missing
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
