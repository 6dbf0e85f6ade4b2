mod call_id;
mod customer_name;
mod engagement_date;
mod record;
mod types;

pub use call_id::CallId;
pub use customer_name::{CustomerName, MISSING_NAME_MESSAGE};
pub use engagement_date::EngagementDate;
pub use record::*;
pub use types::*;

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub engagement_date: EngagementDate,
    pub business_desc: String,
}

impl NewCustomer {
    pub fn new(
        name: String,
        engagement_date: String,
        business_desc: String,
        today: NaiveDate,
    ) -> Result<Self, String> {
        Ok(Self {
            name: CustomerName::parse(name)?,
            engagement_date: EngagementDate::parse(engagement_date, today)?,
            business_desc,
        })
    }
}

impl RegisterFormData {
    pub fn to_new_customer(&self, today: NaiveDate) -> Result<NewCustomer, String> {
        NewCustomer::new(
            self.customer_name.clone(),
            self.engagement_date.clone(),
            self.business_desc.clone(),
            today,
        )
    }
}
