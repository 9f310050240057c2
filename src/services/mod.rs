pub mod advice;
pub mod auth;
pub mod mood;
pub mod quote;

/// Query string shared by every period-scoped downstream endpoint.
pub(crate) fn period_query(from: &str, to: &str, user_id: i64) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("from", from)
        .append_pair("to", to)
        .append_pair("userId", &user_id.to_string())
        .finish()
}
