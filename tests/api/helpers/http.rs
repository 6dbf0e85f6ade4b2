use crate::helpers::TestApp;
use reqwest::Response;

impl TestApp {
    pub async fn get_register_form(&self) -> Response {
        self.api_client
            .get(format!("{}/", self.address))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post_register(&self, form: &[(&str, &str)]) -> Response {
        self.api_client
            .post(format!("{}/register", self.address))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn register(&self, name: &str, date: &str, desc: &str) -> Response {
        self.post_register(&[
            ("customer_name", name),
            ("engagement_date", date),
            ("business_desc", desc),
        ])
        .await
    }

    pub async fn get_lookup(&self, call_id: Option<&str>) -> Response {
        let mut request = self.api_client.get(format!("{}/lookup", self.address));
        if let Some(call_id) = call_id {
            request = request.query(&[("call_id", call_id)]);
        }
        request.send().await.expect("GET request failed")
    }
}
