/// JSON-style quoting for snippets shown in error messages.
pub fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_owned()).to_string()
}
