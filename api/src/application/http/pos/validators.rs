use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ObservedDemandQuery {
    /// First business day, `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    /// Last business day, `YYYY-MM-DD`.
    pub end_date: NaiveDate,
}
