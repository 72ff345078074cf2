use chrono::NaiveDate;

use crate::domain::common::entities::app_errors::CoreError;

pub struct ObservedDemandInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ObservedDemandInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start_date > self.end_date {
            return Err(CoreError::InvalidDateRange(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }
}
