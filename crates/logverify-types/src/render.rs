//! Template rendering: the facade's (template, args) -> display string
//! function.
//!
//! Placeholders are `{Name}`, `{@Name}` / `{$Name}` (destructuring hints),
//! optionally with an alignment (`{Name,8}`) and a format (`{Name:000}`).
//! Values are consumed positionally, in placeholder order. `{{` and `}}`
//! are literal braces.

use crate::message::FieldValue;

/// Render a message template against positional argument values.
///
/// Placeholders beyond the supplied values are left verbatim in the output.
pub fn render_template(template: &str, args: &[FieldValue]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut position = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let mut token = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    token.push(inner);
                }
                if !closed {
                    // Unterminated placeholder: emit what was consumed.
                    output.push('{');
                    output.push_str(&token);
                    break;
                }
                match args.get(position) {
                    Some(value) => {
                        let format = token.split_once(':').map(|(_, format)| format);
                        output.push_str(&render_value(value, format));
                        position += 1;
                    }
                    None => {
                        output.push('{');
                        output.push_str(&token);
                        output.push('}');
                    }
                }
            }
            other => output.push(other),
        }
    }

    output
}

/// Placeholder names in template order, destructuring prefixes and
/// alignment/format specs stripped.
pub(crate) fn placeholder_names(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '{' {
            if chars.peek() == Some(&'{') {
                chars.next();
                continue;
            }
            let mut token = String::new();
            for inner in chars.by_ref() {
                if inner == '}' {
                    let name = token
                        .trim_start_matches(['@', '$'])
                        .split([':', ','])
                        .next()
                        .unwrap_or_default();
                    names.push(name.to_string());
                    break;
                }
                token.push(inner);
            }
        }
    }

    names
}

fn render_value(value: &FieldValue, format: Option<&str>) -> String {
    if let Some(format) = format {
        if !format.is_empty() && format.chars().all(|c| c == '0') {
            if let Some(n) = value.as_i64() {
                return format!("{:0width$}", n, width = format.len());
            }
        }
    }

    match value {
        FieldValue::Null => "(null)".to_string(),
        FieldValue::String(s) => s.clone(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Array(items) => {
            let rendered: Vec<String> = items.iter().map(|v| render_value(v, None)).collect();
            format!("[{}]", rendered.join(", "))
        }
        FieldValue::Object(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(key, v)| format!("{} = {}", key, render_value(v, None)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}
