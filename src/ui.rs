use ratatui::{prelude::*, widgets::*};
use serde_json::Value;

use crate::messages::ui_events::InputMode;
use crate::models::User;

/// Border style for a panel given focus and editing state
pub fn panel_border_style(is_focused: bool, input_mode: InputMode) -> Style {
    if is_focused && input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Renders one labelled form field
pub fn render_form_field<'a>(
    label: &'a str,
    value: &'a str,
    is_active: bool,
    is_editing: bool,
) -> Line<'a> {
    let marker = if is_active { "> " } else { "  " };
    let value_style = if is_active && is_editing {
        Style::default().fg(Color::Yellow).bold()
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let shown = if value.is_empty() && !is_editing { "<未入力>" } else { value };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{}: ", label), Style::default().bold()),
        Span::styled(shown, value_style),
        Span::styled(
            if is_active && is_editing { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ])
}

/// One row of the user list
pub fn user_list_item(user: &User, is_selected: bool) -> ListItem<'static> {
    let name_style = if is_selected {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().bold()
    };

    ListItem::new(Line::from(vec![
        Span::styled(user.name.clone(), name_style),
        Span::styled(format!(" ({})", user.email), Style::default().fg(Color::DarkGray)),
        Span::styled("  [d:削除]", Style::default().fg(Color::Red)),
    ]))
}

/// Pretty-printed, syntax-colored lines for a JSON value
pub fn highlight_json(value: &Value) -> Vec<Line<'static>> {
    let mut writer = JsonLines::default();
    writer.value(value, 0);
    writer.finish()
}

const JSON_INDENT: &str = "  ";

#[derive(Default)]
struct JsonLines {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl JsonLines {
    fn push(&mut self, text: impl Into<String>, color: Option<Color>) {
        let text = text.into();
        self.current.push(match color {
            Some(color) => Span::styled(text, Style::default().fg(color)),
            None => Span::raw(text),
        });
    }

    fn newline(&mut self, depth: usize) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
        if depth > 0 {
            self.push(JSON_INDENT.repeat(depth), None);
        }
    }

    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.push("null", Some(Color::Magenta)),
            Value::Bool(b) => self.push(b.to_string(), Some(Color::Magenta)),
            Value::Number(n) => self.push(n.to_string(), Some(Color::Yellow)),
            // Display on a string value yields the quoted, escaped form
            Value::String(_) => self.push(value.to_string(), Some(Color::Green)),
            Value::Array(items) if items.is_empty() => self.push("[]", Some(Color::Yellow)),
            Value::Array(items) => {
                self.push("[", Some(Color::Yellow));
                for (i, item) in items.iter().enumerate() {
                    self.newline(depth + 1);
                    self.value(item, depth + 1);
                    if i + 1 < items.len() {
                        self.push(",", None);
                    }
                }
                self.newline(depth);
                self.push("]", Some(Color::Yellow));
            }
            Value::Object(map) if map.is_empty() => self.push("{}", Some(Color::Yellow)),
            Value::Object(map) => {
                self.push("{", Some(Color::Yellow));
                for (i, (key, item)) in map.iter().enumerate() {
                    self.newline(depth + 1);
                    self.push(Value::String(key.clone()).to_string(), Some(Color::Cyan));
                    self.push(":", Some(Color::White));
                    self.push(" ", None);
                    self.value(item, depth + 1);
                    if i + 1 < map.len() {
                        self.push(",", None);
                    }
                }
                self.newline(depth);
                self.push("}", Some(Color::Yellow));
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() {
            self.lines.push(Line::from(self.current));
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colored(line: &Line<'_>) -> Vec<(String, Option<Color>)> {
        line.spans
            .iter()
            .filter(|s| !s.content.trim().is_empty())
            .map(|s| (s.content.to_string(), s.style.fg))
            .collect()
    }

    #[test]
    fn test_highlight_json_colors_keys_and_values() {
        let lines = highlight_json(&serde_json::json!({ "id": 1, "name": "a" }));
        assert_eq!(lines.len(), 4);
        assert_eq!(colored(&lines[0]), vec![("{".to_string(), Some(Color::Yellow))]);
        assert_eq!(
            colored(&lines[1]),
            vec![
                ("\"id\"".to_string(), Some(Color::Cyan)),
                (":".to_string(), Some(Color::White)),
                ("1".to_string(), Some(Color::Yellow)),
                (",".to_string(), None),
            ]
        );
        assert_eq!(
            colored(&lines[2]),
            vec![
                ("\"name\"".to_string(), Some(Color::Cyan)),
                (":".to_string(), Some(Color::White)),
                ("\"a\"".to_string(), Some(Color::Green)),
            ]
        );
        assert_eq!(colored(&lines[3]), vec![("}".to_string(), Some(Color::Yellow))]);
    }

    #[test]
    fn test_highlight_json_matches_pretty_text() {
        let value = serde_json::json!({
            "user": { "id": 2, "email": "x@example.com" },
            "posts": [],
            "comments": [{ "body": "say \"hi\"", "flag": null }, true],
        });
        let rendered: Vec<String> = highlight_json(&value)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let expected = serde_json::to_string_pretty(&value).unwrap();
        assert_eq!(rendered.join("\n"), expected);
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let line = render_form_field("名前", "", false, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("<未入力>"));
    }
}
