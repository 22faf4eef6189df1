use crate::{AssetError, PageWriter};

pub(super) fn render(page: &mut PageWriter<'_>) -> Result<(), AssetError> {
    page.title("Pipeline Demo");
    page.image("images/rocket.png", None)?;

    page.subheader("Pipeline demonstration");
    page.text("text text text");
    Ok(())
}
