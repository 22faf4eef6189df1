use shared::domain::BadgeColor;

use crate::{AssetError, PageWriter};

pub(crate) const DEPENDENCY_GRAPH: &str = "### **Dependency Graph Explanation**  
**`process_data`** → **`train`**  

1. **`process_data`**:  
   - Preprocessing stage (raw data → data/raw).  
   - Output: Processed data (e.g., `data/preprocessed`).  

2. **`train`**:  
   - Model training stage (uses processed data).  
   - Output: Trained model (e.g., `src/models/trained_model.joblib`).  
";

pub(super) fn render(page: &mut PageWriter<'_>) -> Result<(), AssetError> {
    page.title("Tracking & Versioning");
    page.image("images/compass.png", None)?;
    page.text(
        "Tracking and versioning are essential for managing the lifecycle of ML experiments, \
         ensuring reproducibility, and enabling collaboration. They help log parameters, \
         metrics, and artifacts while maintaining a history of changes to data, code, and \
         models.",
    );

    page.subheader("MLflow: Experiment tracking");
    page.text(
        "MLflow is an open-source platform for managing the machine learning lifecycle. \
         MLflow solves the chaos of model versioning and lets teams collaborate on ML \
         development.",
    );
    page.badge(
        "**What was done:** Set up experiment tracking, logging of parameters/metrics, and a web UI.",
        BadgeColor::Green,
    );
    page.badge(
        "**Purpose:** To compare model versions and reproduce the best results.",
        BadgeColor::Green,
    );
    page.image("images/mlflow_ui_1.jpg", Some("The list of Experiments"))?;
    page.image("images/mlflow_ui_2.jpg", Some("Model metrics"))?;
    page.divider();

    page.subheader("DVC: Data version control");
    page.text(
        "DVC (Data Version Control) helps version datasets, track changes, and reproduce ML \
         pipelines reliably - keeping your experiments organized and your team in sync.",
    );
    page.badge(
        "**What was done:** Version control for datasets and models.",
        BadgeColor::Green,
    );
    page.badge(
        "**Purpose:** Ensures reproducibility and team collaboration.",
        BadgeColor::Green,
    );
    page.image("images/dvc_pipeline_1.jpg", Some("It's work!"))?;
    page.image(
        "images/dvc_pipeline_2.jpg",
        Some("DVC Pipeline Dependency Graph"),
    )?;
    page.text(DEPENDENCY_GRAPH);
    page.divider();

    page.subheader("Docker: Containerized services");
    page.text(
        "Docker standardizes environments to ensure reproducibility and scalability of ML \
         solutions. Containers package code, dependencies, and models into portable units, \
         guaranteeing identical performance across all stages - from experiments to \
         production.",
    );
    page.badge(
        "**What was done:** Containerized the entire setup (FastAPI + MLflow).",
        BadgeColor::Green,
    );
    page.badge(
        "**Purpose:** Simplifies deployment and scaling.",
        BadgeColor::Green,
    );
    page.image("images/docker_workflow.png", None)?;

    page.subheader("Current Progress");
    page.text("A Docker container has been built during the development phase of our project.");
    page.image("images/docker_create.jpg", None)?;
    Ok(())
}
