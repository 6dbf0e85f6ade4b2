use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RegisterFormData {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub engagement_date: String,
    #[serde(default)]
    pub business_desc: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct LookupQuery {
    pub call_id: Option<String>,
}
