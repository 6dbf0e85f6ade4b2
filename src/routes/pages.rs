use crate::domain::RegisterFormData;
use crate::utils::escape_html;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;

pub const REGISTERED_MESSAGE: &str = "登録完了！";
pub const NOT_FOUND_MESSAGE: &str = "該当する顧客情報が見つかりませんでした。";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Register,
    Lookup,
}

pub enum RegisterOutcome<'a> {
    Pending,
    Registered { call_id: &'a str },
    Failed(&'a str),
}

/// A found customer, with the creation time already converted for display.
pub struct CustomerView<'a> {
    pub customer_name: &'a str,
    pub engagement_date: &'a str,
    pub business_desc: &'a str,
    pub created_at: &'a str,
}

pub enum LookupOutcome<'a> {
    Idle,
    Found(CustomerView<'a>),
    NotFound,
    Failed(&'a str),
}

pub fn html_response(status_code: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status_code)
        .content_type(ContentType::html())
        .body(body)
}

fn layout(active: Tab, content: &str) -> String {
    let tab_class = |tab: Tab| if tab == active { "tab active" } else { "tab" };
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>顧客管理システム</title>
<style>
body {{ font-family: sans-serif; max-width: 720px; margin: 2rem auto; }}
nav {{ border-bottom: 1px solid #ccc; margin-bottom: 1rem; }}
.tab {{ display: inline-block; padding: .5rem 1rem; text-decoration: none; color: #444; }}
.tab.active {{ border-bottom: 3px solid #e4572e; color: #000; }}
.success {{ background: #e6f4ea; padding: .75rem; }}
.error {{ background: #fdecea; padding: .75rem; }}
.warning {{ background: #fff8e1; padding: .75rem; }}
label {{ display: block; margin-top: .75rem; }}
input, textarea {{ width: 100%; }}
</style>
</head>
<body>
<h1>顧客管理システム</h1>
<nav>
<a class="{register_class}" href="/">📝 顧客登録</a>
<a class="{lookup_class}" href="/lookup">🔍 顧客表示</a>
</nav>
{content}
</body>
</html>
"#,
        register_class = tab_class(Tab::Register),
        lookup_class = tab_class(Tab::Lookup),
    )
}

pub fn register_page(form: &RegisterFormData, outcome: RegisterOutcome<'_>) -> String {
    let notice = match outcome {
        RegisterOutcome::Pending => String::new(),
        RegisterOutcome::Registered { call_id } => {
            let call_id = escape_html(call_id);
            format!(
                r#"<div class="success">{REGISTERED_MESSAGE}</div>
<p>以下の呼び出しIDを控えてください（コピーボタン推奨）</p>
<pre><code id="call-id">{call_id}</code></pre>
<button type="button" onclick="navigator.clipboard.writeText(document.getElementById('call-id').textContent)">コピー</button>
"#
            )
        }
        RegisterOutcome::Failed(message) => {
            format!(r#"<div class="error">{}</div>"#, escape_html(message))
        }
    };

    let content = format!(
        r#"<h2>新規登録</h2>
<form method="post" action="/register">
<label>顧客名 <input type="text" name="customer_name" value="{name}"></label>
<label>関与日 <input type="date" name="engagement_date" value="{date}"></label>
<label>事業内容 (空欄可) <textarea name="business_desc" rows="4">{desc}</textarea></label>
<button type="submit">顧客登録ボタン</button>
</form>
{notice}"#,
        name = escape_html(&form.customer_name),
        date = escape_html(&form.engagement_date),
        desc = escape_html(&form.business_desc),
    );

    layout(Tab::Register, &content)
}

pub fn lookup_page(call_id: &str, outcome: LookupOutcome<'_>) -> String {
    let result = match outcome {
        LookupOutcome::Idle => String::new(),
        LookupOutcome::Found(customer) => format!(
            r#"<h3>顧客情報</h3>
<p><strong>顧客名:</strong> {}</p>
<p><strong>関与日:</strong> {}</p>
<p><strong>事業内容:</strong> {}</p>
<p><strong>作成日時:</strong> {}</p>
"#,
            escape_html(customer.customer_name),
            escape_html(customer.engagement_date),
            escape_html(customer.business_desc),
            escape_html(customer.created_at),
        ),
        LookupOutcome::NotFound => format!(r#"<div class="warning">{NOT_FOUND_MESSAGE}</div>"#),
        LookupOutcome::Failed(message) => {
            format!(r#"<div class="error">{}</div>"#, escape_html(message))
        }
    };

    let content = format!(
        r#"<h2>情報照会</h2>
<form method="get" action="/lookup">
<label>呼び出しID (UUID) を入力 <input type="text" name="call_id" value="{call_id}"></label>
<button type="submit">顧客表示</button>
</form>
{result}"#,
        call_id = escape_html(call_id),
    );

    layout(Tab::Lookup, &content)
}
