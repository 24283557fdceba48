use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only reference to a defect record, as returned by the defect store.
///
/// This core never mutates the record; it only needs the identifier and the
/// owning supplier for ownership scoping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectRef {
    pub id: i64,
    /// Supplier recorded as responsible for this defect. Absent when the
    /// defect has not been assigned to a supplier yet.
    pub supplier: Option<String>,
}

impl DefectRef {
    pub fn new(id: i64, supplier: Option<String>) -> Self {
        Self { id, supplier }
    }
}

/// The 8D milestone dates of a defect record.
///
/// Dates are calendar dates; a missing date means the milestone has not
/// been reached.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DefectDates {
    pub open_date: Option<NaiveDate>,
    pub date_disposition: Option<NaiveDate>,
    pub date_tech_analysis: Option<NaiveDate>,
    pub date_root_cause: Option<NaiveDate>,
    pub date_corrective_action: Option<NaiveDate>,
    pub date_validation: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
}
