use crate::{AssetError, PageWriter};

const OVERVIEW: &str = "This MLOps project is based on predicting crash severity in France \
using historical crash data. The project focuses on building a complete **MLOps pipeline** \
for deploying and managing a pre-trained machine learning model in a production environment. \
Unlike traditional ML projects, I did not develop the model from scratch but instead \
integrated an existing model to emphasize:

1. **Industrialization** of ML models through reproducible pipelines.
2. **Automation** of deployment, scaling, and monitoring.
3. **Reliability** and scalability in production.
";

const REPOSITORY: &str = "Link to a repository on Github with a machine learning model: \
https://github.com/DataScientest-Studio/Template_MLOps_accidents";

const STACK: &str = "The project follows a **phased approach**, progressively enhancing the pipeline:

1. **Foundations:** GitHub setup → Model training → FastAPI → Testing
2. **Tracking & Versioning:** MLflow | DVC | Docker
3. **Orchestration:** Kubernetes | Jenkins
4. **Monitoring:** Prometheus/Grafana | Evidently";

const GOALS: &str = "✅ Implement a **scalable API** for model inference (FastAPI)  
✅ Ensure **experiment tracking & reproducibility** (MLflow, DVC)  
✅ Automate **CI/CD pipelines** (Jenkins)  
✅ Enable **real-time monitoring** (Prometheus/Grafana, Evidently)  
✅ Containerize and **orchestrate** services (Docker, Kubernetes)  ";

pub(super) fn render(page: &mut PageWriter<'_>) -> Result<(), AssetError> {
    page.title("MLOps Accidents Pipeline Project");
    page.image("images/pipeline.png", None)?;

    page.subheader("Project Overview");
    page.text(OVERVIEW);
    page.divider();

    page.subheader("GitHub Repository");
    page.text(REPOSITORY);
    page.divider();

    page.subheader("Technology Stack");
    page.text(STACK);
    page.divider();

    page.subheader("Project Goals");
    page.text(GOALS);
    Ok(())
}
