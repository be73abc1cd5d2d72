use url::form_urlencoded::byte_serialize;

/// Join `base` with `params` as a query string, keeping the parameter order.
///
/// Keys and values are form-urlencoded, so `"New York"` is sent as `New+York`.
pub fn build_request_url<K, V>(base: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k.as_ref()), encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{query}")
}

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}
