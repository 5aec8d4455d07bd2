// The three timezones an entry passes through: UTC in storage, the company
// zone for bucketing into days and matching schedules, and the user zone for
// displaying or editing one entry.
//
// Responsibilities
// - Carry the company and user identifiers as separate named fields.
// - Resolve them to timezones, replacing an unknown identifier with UTC and
//   reporting the substitution instead of failing.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::shared::core::time_basis::parse_timezone;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneContext {
    pub company_timezone: String,
    pub user_timezone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimezoneRole {
    Company,
    User,
}

/// Raised when a timezone identifier could not be parsed and UTC was used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneWarning {
    pub role: TimezoneRole,
    pub requested: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTimezones {
    pub company: Tz,
    pub user: Tz,
    pub warnings: Vec<TimezoneWarning>,
}

impl TimezoneContext {
    pub fn new(company_timezone: impl Into<String>, user_timezone: impl Into<String>) -> Self {
        Self {
            company_timezone: company_timezone.into(),
            user_timezone: user_timezone.into(),
        }
    }

    pub fn resolve(&self) -> ResolvedTimezones {
        let mut warnings = Vec::new();
        let company = resolve_or_utc(TimezoneRole::Company, &self.company_timezone, &mut warnings);
        let user = resolve_or_utc(TimezoneRole::User, &self.user_timezone, &mut warnings);
        ResolvedTimezones {
            company,
            user,
            warnings,
        }
    }
}

impl Default for TimezoneContext {
    fn default() -> Self {
        Self::new("UTC", "UTC")
    }
}

fn resolve_or_utc(role: TimezoneRole, identifier: &str, warnings: &mut Vec<TimezoneWarning>) -> Tz {
    match parse_timezone(identifier) {
        Ok(timezone) => timezone,
        Err(error) => {
            tracing::warn!(?role, requested = identifier, %error, "falling back to UTC");
            warnings.push(TimezoneWarning {
                role,
                requested: identifier.to_string(),
            });
            Tz::UTC
        }
    }
}
