//! 8D workflow calculations
//!
//! Pure derivations over a defect's milestone dates: current step,
//! responsible party, aging metrics, and reporting keys. The current date is
//! always an explicit parameter so results stay a function of the inputs.
//!
//! Step and responsible labels are the exact strings the application
//! persists and reports on (the workflow vocabulary is Portuguese).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::models::DefectDates;

/// Current 8D step of a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    #[serde(rename = "Aguardando Disposição")]
    AwaitingDisposition,
    #[serde(rename = "Aguardando Análise Técnica")]
    AwaitingTechAnalysis,
    #[serde(rename = "Aguardando Causa Raiz")]
    AwaitingRootCause,
    #[serde(rename = "Aguardando Ação Corretiva")]
    AwaitingCorrectiveAction,
    #[serde(rename = "Aguardando Validação de Ação Corretiva")]
    AwaitingValidation,
    #[serde(rename = "CLOSED")]
    Closed,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Step::AwaitingDisposition => write!(f, "Aguardando Disposição"),
            Step::AwaitingTechAnalysis => write!(f, "Aguardando Análise Técnica"),
            Step::AwaitingRootCause => write!(f, "Aguardando Causa Raiz"),
            Step::AwaitingCorrectiveAction => write!(f, "Aguardando Ação Corretiva"),
            Step::AwaitingValidation => write!(f, "Aguardando Validação de Ação Corretiva"),
            Step::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Defect status as tracked by reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "CLOSED")]
    Closed,
    #[serde(rename = "ONGOING")]
    Ongoing,
    #[serde(rename = "DELAYED")]
    Delayed,
    #[serde(rename = "Waiting for CHK Solution")]
    WaitingChkSolution,
}

/// Party responsible for moving the defect forward at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Responsible {
    #[serde(rename = "SQA")]
    Sqa,
    #[serde(rename = "Fornecedor")]
    Supplier,
}

/// Aging bucket used by dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgingBucket {
    #[serde(rename = "<=4")]
    AtMost4,
    #[serde(rename = "5-14")]
    From5To14,
    #[serde(rename = "15-29")]
    From15To29,
    #[serde(rename = "30-59")]
    From30To59,
    #[serde(rename = ">60")]
    Over60,
}

/// SLA traffic light derived from the aging of the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaColor {
    Green,
    Yellow,
    Red,
}

/// Aging metrics for a defect, in calendar days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgingReport {
    pub aging_disposition: Option<i64>,
    pub aging_tech_analysis: Option<i64>,
    pub aging_root_cause: Option<i64>,
    pub aging_corrective_action: Option<i64>,
    pub aging_validation: Option<i64>,
    pub aging_total: i64,
    pub aging_by_step: i64,
    pub bucket_aging: AgingBucket,
    pub days_late: i64,
}

fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Resolve the current step from the milestone dates.
///
/// Dates are checked in reverse order: the latest milestone reached wins.
pub fn current_step(dates: &DefectDates) -> Step {
    if dates.date_validation.is_some() {
        Step::Closed
    } else if dates.date_corrective_action.is_some() {
        Step::AwaitingValidation
    } else if dates.date_root_cause.is_some() {
        Step::AwaitingCorrectiveAction
    } else if dates.date_tech_analysis.is_some() {
        Step::AwaitingRootCause
    } else if dates.date_disposition.is_some() {
        Step::AwaitingTechAnalysis
    } else {
        Step::AwaitingDisposition
    }
}

/// SQA owns disposition and validation; the supplier owns the analysis,
/// root-cause, and corrective-action steps.
pub fn responsible_for(step: Step) -> Responsible {
    match step {
        Step::AwaitingDisposition | Step::AwaitingValidation | Step::Closed => Responsible::Sqa,
        Step::AwaitingTechAnalysis | Step::AwaitingRootCause | Step::AwaitingCorrectiveAction => {
            Responsible::Supplier
        }
    }
}

/// Bucket a total aging into the dashboard categories.
pub fn bucket(aging_total: i64) -> AgingBucket {
    if aging_total <= 4 {
        AgingBucket::AtMost4
    } else if aging_total <= 14 {
        AgingBucket::From5To14
    } else if aging_total <= 29 {
        AgingBucket::From15To29
    } else if aging_total <= 59 {
        AgingBucket::From30To59
    } else {
        AgingBucket::Over60
    }
}

/// Calculate all aging metrics for a defect as of `today`.
pub fn calculate_aging(
    dates: &DefectDates,
    step: Step,
    status: Status,
    today: NaiveDate,
) -> AgingReport {
    // Per-step aging: elapsed from the step's start milestone to its end
    // milestone, or to today while the step is still open. A step whose
    // start milestone is missing has no aging yet.
    let aging_disposition = dates
        .open_date
        .map(|open| days_between(open, dates.date_disposition.unwrap_or(today)));
    let aging_tech_analysis = dates
        .date_disposition
        .map(|start| days_between(start, dates.date_tech_analysis.unwrap_or(today)));
    let aging_root_cause = dates
        .date_tech_analysis
        .map(|start| days_between(start, dates.date_root_cause.unwrap_or(today)));
    let aging_corrective_action = dates
        .date_root_cause
        .map(|start| days_between(start, dates.date_corrective_action.unwrap_or(today)));
    let aging_validation = dates
        .date_corrective_action
        .map(|start| days_between(start, dates.date_validation.unwrap_or(today)));

    let aging_total = match dates.open_date {
        None => 0,
        Some(open) => match (status, dates.date_validation) {
            (Status::Closed, Some(validation)) => days_between(open, validation),
            _ => days_between(open, today),
        },
    };

    let aging_by_step = match step {
        Step::AwaitingDisposition => aging_disposition.unwrap_or(0),
        Step::AwaitingTechAnalysis => aging_tech_analysis.unwrap_or(0),
        Step::AwaitingRootCause => aging_root_cause.unwrap_or(0),
        Step::AwaitingCorrectiveAction => aging_corrective_action.unwrap_or(0),
        Step::AwaitingValidation => aging_validation.unwrap_or(0),
        Step::Closed => 0,
    };

    let days_late = match (status, dates.target_date) {
        (Status::Closed, _) | (_, None) => 0,
        (_, Some(target)) => days_between(target, today).max(0),
    };

    AgingReport {
        aging_disposition,
        aging_tech_analysis,
        aging_root_cause,
        aging_corrective_action,
        aging_validation,
        aging_total,
        aging_by_step,
        bucket_aging: bucket(aging_total),
        days_late,
    }
}

/// Reporting week key, `WK<yy><ww>` with the ISO week number (weeks start
/// on Monday) and the calendar year's last two digits.
pub fn week_key(date: NaiveDate) -> String {
    format!("WK{:02}{:02}", date.year() % 100, date.iso_week().week())
}

/// English month name for reporting.
pub fn month_name(date: NaiveDate) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS[date.month0() as usize]
}

/// SLA traffic light: green up to 7 days in the current step, yellow up to
/// 14, red beyond.
pub fn sla_color(aging_by_step: i64) -> SlaColor {
    if aging_by_step <= 7 {
        SlaColor::Green
    } else if aging_by_step <= 14 {
        SlaColor::Yellow
    } else {
        SlaColor::Red
    }
}
