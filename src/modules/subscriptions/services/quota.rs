//! Quota checks against a subscription plan.
//!
//! Pure functions over a plan and the account's usage counters. The counters
//! themselves (documents created this month, active clients) are owned by the
//! persistence layer; this module only applies the plan limits to them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{AppError, Result};
use crate::modules::subscriptions::models::PlanConfig;

/// Usage counters for the current billing period.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QuotaUsage {
    /// Invoices and quotations created this calendar month
    pub documents_this_month: u32,
    /// Client records on the account
    pub active_clients: u32,
}

/// Documents the account can still create this month; `None` = unlimited.
pub fn remaining_documents(plan: &PlanConfig, usage: &QuotaUsage) -> Option<u32> {
    plan.monthly_documents
        .map(|limit| limit.saturating_sub(usage.documents_this_month))
}

/// Whether one more document may be created under the plan.
pub fn check_document_quota(plan: &PlanConfig, usage: &QuotaUsage) -> Result<()> {
    if let Some(limit) = plan.monthly_documents {
        if usage.documents_this_month >= limit {
            warn!(
                "Plan {} document quota exhausted ({}/{})",
                plan.id, usage.documents_this_month, limit
            );
            return Err(AppError::validation(format!(
                "Monthly document limit of {} reached on the {} plan",
                limit, plan.name
            )));
        }
    }

    Ok(())
}

/// Whether one more client record may be created under the plan.
pub fn check_client_quota(plan: &PlanConfig, usage: &QuotaUsage) -> Result<()> {
    if let Some(limit) = plan.clients {
        if usage.active_clients >= limit {
            warn!(
                "Plan {} client quota exhausted ({}/{})",
                plan.id, usage.active_clients, limit
            );
            return Err(AppError::validation(format!(
                "Client limit of {} reached on the {} plan",
                limit, plan.name
            )));
        }
    }

    Ok(())
}
