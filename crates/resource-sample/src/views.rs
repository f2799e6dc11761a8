//! Plain-text view engine for the demo binary.

use resource_framework::{HttpError, ViewEngine};
use serde_json::Value;

/// Renders `list`, `new`, `edit` and `show` views as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextViews;

impl ViewEngine for TextViews {
    fn render(&self, view: &str, locals: &Value) -> Result<String, HttpError> {
        match view {
            "list" => render_list(locals),
            "new" | "edit" | "show" => render_fields(view, locals),
            other => Err(HttpError::new(500, format!("Unknown view: {}", other))),
        }
    }
}

fn render_list(locals: &Value) -> Result<String, HttpError> {
    let rows = locals
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| HttpError::new(500, "list view needs rows"))?;

    let mut out = format!(
        "[list] {} of {} from offset {}\n",
        rows.len(),
        text(&locals["count"]),
        text(&locals["offset"])
    );
    for row in rows {
        out.push_str(&format!(
            "- {} {} ({})\n",
            text(&row["id"]),
            text(&row["name"]),
            text(&row["links"]["show"])
        ));
    }
    Ok(out)
}

fn render_fields(view: &str, locals: &Value) -> Result<String, HttpError> {
    let fields = locals
        .as_object()
        .ok_or_else(|| HttpError::new(500, format!("{} view needs an object", view)))?;

    let mut out = format!("[{}]\n", view);
    for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "links") {
        out.push_str(&format!("{}: {}\n", key, text(value)));
    }
    Ok(out)
}

/// Strings without their JSON quotes, `null` as empty.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
