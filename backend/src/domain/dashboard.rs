//! Dashboard summary computed from the record store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::format::format_date;
use super::ports::RecordStore;
use super::records::{LogStatus, PatientRecord, PatientStatus, Practice, PracticeStatus};

/// Number of practices shown in the "recent practices" card.
pub const RECENT_PRACTICE_LIMIT: usize = 5;

/// Patients grouped by treatment progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// Patients awaiting registration.
    pub pending: usize,
    /// Patients registered and in treatment.
    pub registered: usize,
    /// Patients whose treatment has finished.
    pub post_treatment: usize,
}

impl ProgressStats {
    fn from_patients(patients: &[PatientRecord]) -> Self {
        patients
            .iter()
            .fold(Self::default(), |mut stats, patient| {
                match patient.status {
                    PatientStatus::Pending => stats.pending += 1,
                    PatientStatus::Active => stats.registered += 1,
                    PatientStatus::Inactive => stats.post_treatment += 1,
                }
                stats
            })
    }
}

/// Audit log entries grouped by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBreakdown {
    /// Successful operations.
    pub success: usize,
    /// Operations that completed with a warning.
    pub warning: usize,
    /// Failed operations.
    pub error: usize,
}

/// Practice card on the dashboard with its creation date as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPractice {
    /// The practice record.
    #[serde(flatten)]
    pub practice: Practice,
    /// `dateCreated` as `dd/mm/yyyy`.
    pub created_label: String,
}

impl From<Practice> for RecentPractice {
    fn from(practice: Practice) -> Self {
        let created_label = format_date(practice.date_created);
        Self {
            practice,
            created_label,
        }
    }
}

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Every practice on record.
    pub total_practices: usize,
    /// Practices currently operating.
    pub active_practices: usize,
    /// Patients on the roster.
    pub total_patients: usize,
    /// Staff accounts.
    pub total_users: usize,
    /// Sum of treatment counts across patients.
    pub total_treatments: u64,
    /// Patients with a booked appointment.
    pub upcoming_appointments: usize,
    /// Audit log outcomes.
    pub log_breakdown: LogBreakdown,
    /// Treatment progress.
    pub progress: ProgressStats,
    /// Newest practices first, at most [`RECENT_PRACTICE_LIMIT`].
    pub recent_practices: Vec<RecentPractice>,
}

/// Computes the dashboard from store snapshots.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn RecordStore>,
}

impl DashboardService {
    /// Build the service over a store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Summarise the current records.
    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        let practices = self.store.practices();
        let patients = self.store.patients();
        let logs = self.store.logs();

        let log_breakdown = logs.iter().fold(LogBreakdown::default(), |mut acc, log| {
            match log.status {
                LogStatus::Success => acc.success += 1,
                LogStatus::Warning => acc.warning += 1,
                LogStatus::Error => acc.error += 1,
            }
            acc
        });

        DashboardSummary {
            total_practices: practices.len(),
            active_practices: practices
                .iter()
                .filter(|practice| practice.status == PracticeStatus::Active)
                .count(),
            total_patients: patients.len(),
            total_users: self.store.users().len(),
            total_treatments: patients
                .iter()
                .map(|patient| u64::from(patient.treatments_count))
                .sum(),
            upcoming_appointments: patients
                .iter()
                .filter(|patient| patient.upcoming_appointment.is_some())
                .count(),
            log_breakdown,
            progress: ProgressStats::from_patients(&patients),
            recent_practices: newest_practices(practices)
                .into_iter()
                .map(RecentPractice::from)
                .collect(),
        }
    }
}

/// Newest practices by creation date. Ties keep source order.
fn newest_practices(mut practices: Vec<Practice>) -> Vec<Practice> {
    practices.sort_by(|a, b| b.date_created.cmp(&a.date_created));
    practices.truncate(RECENT_PRACTICE_LIMIT);
    practices
}
