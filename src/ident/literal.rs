use crate::workflow::WidgetValue;
use itertools::Itertools;

/// Formats a string literal. Values spanning several lines use triple quotes.
/// Carriage returns are always escaped.
pub fn to_str(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\r', "\\r");
    if s.contains('\n') {
        format!("'''{}'''", escaped)
    } else {
        format!("'{}'", escaped)
    }
}

/// A single element renders bare, anything else as a parenthesized sequence.
pub fn to_tuple<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [single] => AsRef::<str>::as_ref(single).to_string(),
        _ => format!("({})", items.iter().map(AsRef::<str>::as_ref).join(", ")),
    }
}

/// Renders a widget value as a literal of the generated script.
pub fn widget_literal(value: &WidgetValue) -> String {
    match value {
        WidgetValue::Str(s) => to_str(s),
        WidgetValue::Int(i) => i.to_string(),
        WidgetValue::UInt(u) => u.to_string(),
        WidgetValue::Float(f) => format!("{:?}", f),
        WidgetValue::Bool(true) => "True".to_string(),
        WidgetValue::Bool(false) => "False".to_string(),
        WidgetValue::Null => "None".to_string(),
        WidgetValue::Other(json) => json.to_string(),
    }
}
