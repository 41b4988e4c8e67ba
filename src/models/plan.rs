use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, planner_error::PlannerError},
    message::planner::GetPlanResponse,
};

/// Ordered sequence of timed actions produced by the planning service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    items: Vec<PlanItem>,
}

/// One scheduled action occurrence inside a [`Plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    time: f64,
    action: String,
    duration: f64,
}

impl PlanItem {
    pub fn new(time: f64, action: impl Into<String>, duration: f64) -> Self {
        Self {
            time,
            action: action.into(),
            duration,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn end_time(&self) -> f64 {
        self.time + self.duration
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}: ({}) [{:.3}]",
            self.time, self.action, self.duration
        )
    }
}

impl Plan {
    pub fn new(items: Vec<PlanItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanItem> {
        self.items.iter()
    }

    /// Latest completion time over all items, `0.0` for an empty plan.
    pub fn end_time(&self) -> f64 {
        self.items
            .iter()
            .map(PlanItem::end_time)
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl IntoIterator for Plan {
    type Item = PlanItem;
    type IntoIter = std::vec::IntoIter<PlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a PlanItem;
    type IntoIter = std::slice::Iter<'a, PlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<GetPlanResponse> for Plan {
    type Error = crate::error::Error;

    fn try_from(response: GetPlanResponse) -> Result<Self> {
        if !response.success {
            return Err(PlannerError::Rejected(response.error_info).into());
        }

        let GetPlanResponse {
            times,
            actions,
            durations,
            ..
        } = response;

        if times.len() != actions.len() || times.len() != durations.len() {
            return Err(PlannerError::MalformedResponse {
                times: times.len(),
                actions: actions.len(),
                durations: durations.len(),
            }
            .into());
        }

        let items = times
            .into_iter()
            .zip(actions)
            .zip(durations)
            .map(|((time, action), duration)| PlanItem::new(time, action, duration))
            .collect();

        Ok(Plan::new(items))
    }
}
