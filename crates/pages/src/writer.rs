use shared::domain::{BadgeColor, ContentBlock, PageId};

use crate::assets::{AssetError, AssetStore};

/// Asset that a render routine referenced but could not load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub page: PageId,
    pub path: String,
}

#[derive(Debug)]
enum Mode {
    Strict,
    Audit(Vec<MissingAsset>),
}

/// Collects the blocks a render routine emits, in order.
///
/// In strict mode the first asset failure aborts the routine. In audit mode
/// failures are recorded and the routine keeps going, so one pass lists every
/// missing file.
#[derive(Debug)]
pub struct PageWriter<'a> {
    page: PageId,
    assets: &'a AssetStore,
    blocks: Vec<ContentBlock>,
    mode: Mode,
}

impl<'a> PageWriter<'a> {
    pub fn new(page: PageId, assets: &'a AssetStore) -> Self {
        Self {
            page,
            assets,
            blocks: Vec::new(),
            mode: Mode::Strict,
        }
    }

    pub fn auditing(page: PageId, assets: &'a AssetStore) -> Self {
        Self {
            page,
            assets,
            blocks: Vec::new(),
            mode: Mode::Audit(Vec::new()),
        }
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn title(&mut self, text: &str) {
        self.blocks.push(ContentBlock::Title { text: text.into() });
    }

    pub fn subheader(&mut self, text: &str) {
        self.blocks.push(ContentBlock::Subheader { text: text.into() });
    }

    pub fn text(&mut self, markdown: &str) {
        self.blocks.push(ContentBlock::Text {
            markdown: markdown.into(),
        });
    }

    pub fn divider(&mut self) {
        self.blocks.push(ContentBlock::Divider);
    }

    pub fn badge(&mut self, text: &str, color: BadgeColor) {
        self.blocks.push(ContentBlock::Badge {
            text: text.into(),
            color,
        });
    }

    pub fn code(&mut self, text: &str, language: &str) {
        self.blocks.push(ContentBlock::CodeBlock {
            text: text.into(),
            language: language.into(),
        });
    }

    pub fn image(&mut self, path: &str, caption: Option<&str>) -> Result<(), AssetError> {
        match self.assets.ensure_exists(path) {
            Ok(_) => {
                self.blocks.push(ContentBlock::Image {
                    path: path.into(),
                    caption: caption.map(Into::into),
                });
                Ok(())
            }
            Err(err) => self.record(err),
        }
    }

    pub fn embedded_html(
        &mut self,
        path: &str,
        height: u32,
        scrollable: bool,
    ) -> Result<(), AssetError> {
        match self.assets.read_to_string(path) {
            Ok(content) => {
                self.blocks.push(ContentBlock::EmbeddedHtml {
                    content,
                    height,
                    scrollable,
                });
                Ok(())
            }
            Err(err) => self.record(err),
        }
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    /// Missing assets seen in audit mode; always empty in strict mode.
    pub fn into_missing(self) -> Vec<MissingAsset> {
        match self.mode {
            Mode::Strict => Vec::new(),
            Mode::Audit(missing) => missing,
        }
    }

    fn record(&mut self, err: AssetError) -> Result<(), AssetError> {
        match &mut self.mode {
            Mode::Strict => Err(err),
            Mode::Audit(missing) => {
                missing.push(MissingAsset {
                    page: self.page,
                    path: err.path().to_string(),
                });
                Ok(())
            }
        }
    }
}
