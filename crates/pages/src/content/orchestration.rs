use crate::{AssetError, PageWriter};

pub(super) fn render(page: &mut PageWriter<'_>) -> Result<(), AssetError> {
    page.title("Production Orchestration");
    page.image("images/conductor.png", None)?;
    page.text("text text text");

    page.subheader("Kubernetes: Scalable deployment");
    page.text("text text text");

    page.subheader("Jenkins: CI/CD pipelines");
    page.text("text text text");
    Ok(())
}
