//! Render routines, one per page. Each writes a fixed block sequence.

mod demo;
mod foundations;
mod introduction;
mod monitoring;
mod orchestration;
mod tracking;

use shared::domain::PageId;

use crate::PageDescriptor;

pub const DRIFT_REPORT: &str = "reports/data_drift_report.html";

#[cfg(test)]
pub(crate) use tracking::DEPENDENCY_GRAPH;

pub static PAGES: [PageDescriptor; 6] = [
    PageDescriptor::new(PageId::Introduction, introduction::render),
    PageDescriptor::new(PageId::Phase1, foundations::render),
    PageDescriptor::new(PageId::Phase2, tracking::render),
    PageDescriptor::new(PageId::Phase3, orchestration::render),
    PageDescriptor::new(PageId::Phase4, monitoring::render),
    PageDescriptor::new(PageId::Demo, demo::render),
];
