//! Render-time controls carried in the query string.
//!
//! `status` may repeat (`?status=Running&status=Free`). When the key is
//! present only the listed statuses are shown; empty values are ignored so
//! a form can always send `status=` to mark "filter submitted".

use crate::errors::AppResult;
use crate::models::{EventFilter, SlotState};
use crate::utils::date::{parse_optional_date, today};
use chrono::NaiveDate;

/// Date value meaning "do not filter by date".
pub const ALL_DATES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub ip: Option<String>,
    pub date: Option<String>,
    pub status: Option<Vec<String>>,
}

impl DashboardQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = DashboardQuery::default();

        for (key, value) in pairs {
            match key.as_str() {
                "ip" => q.ip = Some(value),
                "date" => q.date = Some(value),
                "status" => {
                    let list = q.status.get_or_insert_with(Vec::new);
                    if !value.trim().is_empty() {
                        list.push(value);
                    }
                }
                _ => {}
            }
        }

        q
    }

    /// Selected date: absent or empty means today, `all` means no date filter.
    pub fn date(&self) -> AppResult<Option<NaiveDate>> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(Some(today())),
            Some(ALL_DATES) => Ok(None),
            Some(s) => parse_optional_date(Some(s)),
        }
    }

    pub fn filter(&self) -> AppResult<EventFilter> {
        Ok(EventFilter::new(self.ip.clone(), self.date()?))
    }

    pub fn accepted_statuses(&self) -> AppResult<Vec<SlotState>> {
        match &self.status {
            None => Ok(SlotState::ALL.to_vec()),
            Some(list) => list.iter().map(|s| s.parse()).collect(),
        }
    }
}
