// Run with: cargo fuzz run fuzz_register_json
// Purpose: fuzz JSON -> RegisterFormData -> NewCustomer (exercises CustomerName, EngagementDate)
#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use intake::domain::RegisterFormData;

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = serde_json::from_slice::<Value>(data) {
        let field = |name: &str| {
            v.get(name)
                .and_then(|s| s.as_str())
                .unwrap_or("")
                .to_string()
        };

        let form = RegisterFormData {
            customer_name: field("customer_name"),
            engagement_date: field("engagement_date"),
            business_desc: field("business_desc"),
        };

        let today = NaiveDate::from_ymd_opt(2026, 1, 28).unwrap();
        if let Ok(customer) = form.to_new_customer(today) {
            assert!(!customer.name.as_ref().trim().is_empty());
        }
    }
});
