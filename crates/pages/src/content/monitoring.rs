use crate::{AssetError, PageWriter};

use super::DRIFT_REPORT;

pub(super) fn render(page: &mut PageWriter<'_>) -> Result<(), AssetError> {
    page.title("Monitoring");
    page.image("images/dashboard.png", None)?;
    page.text("text text text");

    page.subheader("Grafana: Real-time dashboards");
    page.text("text text text");

    page.subheader("Evidently: Data drift detection");
    page.text("text text text");
    page.embedded_html(DRIFT_REPORT, 1000, true)?;
    Ok(())
}
