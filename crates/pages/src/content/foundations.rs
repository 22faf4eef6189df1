use crate::{AssetError, PageWriter};

pub(super) fn render(page: &mut PageWriter<'_>) -> Result<(), AssetError> {
    page.title("Data & Model Foundations");
    page.image("images/data.png", None)?;
    page.text(
        "The project utilizes an open-source GitHub repository as its foundation. \
         Initial work involved data processing and fine-tuning of the provided model \
         architecture, with results successfully integrated into the MLOps pipeline for \
         production deployment.\n\n\
         Link to a repository: https://github.com/DataScientest-Studio/Template_MLOps_accidents",
    );
    page.divider();

    page.subheader("FastAPI: REST API for predictions");
    page.text(
        "The resulting model was packaged as a REST API using FastAPI, enabling seamless \
         integration with other system components. Comprehensive testing validated both the \
         API endpoints and model predictions, ensuring reliability before production \
         deployment.",
    );
    page.image("images/fastapi_swagger_1.jpg", None)?;
    page.image("images/fastapi_swagger_2.jpg", None)?;
    Ok(())
}
