//! Shorthand property expansion into longhands.

/// Expands a declaration into its longhand equivalents. Properties with no
/// shorthand handling pass through unchanged.
pub fn expand_shorthand(name: &str, value: &str) -> Vec<(String, String)> {
    match name {
        "margin" => expand_trbl("margin", value),
        "padding" => expand_trbl("padding", value),
        "border-width" => expand_trbl("border-width", value),
        "border" | "border-top" | "border-right" | "border-bottom" | "border-left" => {
            expand_border(name, value)
        }
        "flex" => expand_flex(value),
        _ => vec![(name.to_string(), value.to_string())],
    }
}

/// 4-value TRBL expansion: 1 value -> all sides; 2 -> T/B, L/R; 3 -> T, L/R, B;
/// 4 -> T, R, B, L.
fn expand_trbl(prefix: &str, value: &str) -> Vec<(String, String)> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let (top, right, bottom, left) = match parts.len() {
        1 => (parts[0], parts[0], parts[0], parts[0]),
        2 => (parts[0], parts[1], parts[0], parts[1]),
        3 => (parts[0], parts[1], parts[2], parts[1]),
        4 => (parts[0], parts[1], parts[2], parts[3]),
        _ => return vec![],
    };
    vec![
        (format!("{prefix}-top"), top.to_string()),
        (format!("{prefix}-right"), right.to_string()),
        (format!("{prefix}-bottom"), bottom.to_string()),
        (format!("{prefix}-left"), left.to_string()),
    ]
}

fn expand_border(name: &str, value: &str) -> Vec<(String, String)> {
    let sides: &[&str] = if name == "border" {
        &["top", "right", "bottom", "left"]
    } else {
        &[name.trim_start_matches("border-")]
    };

    let mut width = None;
    let mut color = None;
    for token in value.split_whitespace() {
        if token.ends_with("px") && token[..token.len() - 2].parse::<f32>().is_ok() {
            width = Some(token.to_string());
        } else if crate::color::parse_color(token).is_some() {
            color = Some(token.to_string());
        }
    }

    let mut out = Vec::new();
    for side in sides {
        if let Some(w) = &width {
            out.push((format!("border-{side}-width"), w.clone()));
        }
        if let Some(c) = &color {
            out.push((format!("border-{side}-color"), c.clone()));
        }
    }
    out
}

/// `auto` -> (1,1,auto); `none` -> (0,0,auto); 1 numeric -> grow only;
/// 2/3 numerics map positionally to grow/shrink/basis.
fn expand_flex(value: &str) -> Vec<(String, String)> {
    let v = value.trim();
    if v == "auto" {
        return vec![
            ("flex-grow".into(), "1".into()),
            ("flex-shrink".into(), "1".into()),
            ("flex-basis".into(), "auto".into()),
        ];
    }
    if v == "none" {
        return vec![
            ("flex-grow".into(), "0".into()),
            ("flex-shrink".into(), "0".into()),
            ("flex-basis".into(), "auto".into()),
        ];
    }

    let parts: Vec<&str> = v.split_whitespace().collect();
    let numeric = |s: &str| s.parse::<f32>().is_ok();

    match parts.len() {
        1 if numeric(parts[0]) => vec![
            ("flex-grow".into(), parts[0].into()),
            ("flex-shrink".into(), "1".into()),
            ("flex-basis".into(), "0%".into()),
        ],
        2 if numeric(parts[0]) && numeric(parts[1]) => vec![
            ("flex-grow".into(), parts[0].into()),
            ("flex-shrink".into(), parts[1].into()),
            ("flex-basis".into(), "0%".into()),
        ],
        3 if numeric(parts[0]) && numeric(parts[1]) => vec![
            ("flex-grow".into(), parts[0].into()),
            ("flex-shrink".into(), parts[1].into()),
            ("flex-basis".into(), parts[2].into()),
        ],
        _ => vec![("flex-basis".into(), v.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_margin_one_value() {
        let out = expand_shorthand("margin", "10px");
        assert_eq!(out.len(), 4);
        assert!(out.contains(&("margin-top".to_string(), "10px".to_string())));
        assert!(out.contains(&("margin-left".to_string(), "10px".to_string())));
    }

    #[test]
    fn expands_margin_two_values() {
        let out = expand_shorthand("margin", "10px 20px");
        assert!(out.contains(&("margin-top".to_string(), "10px".to_string())));
        assert!(out.contains(&("margin-right".to_string(), "20px".to_string())));
        assert!(out.contains(&("margin-bottom".to_string(), "10px".to_string())));
        assert!(out.contains(&("margin-left".to_string(), "20px".to_string())));
    }

    #[test]
    fn expands_flex_shorthand_variants() {
        assert!(expand_flex("auto").contains(&("flex-grow".to_string(), "1".to_string())));
        assert!(expand_flex("none").contains(&("flex-grow".to_string(), "0".to_string())));
        let one = expand_flex("2");
        assert!(one.contains(&("flex-grow".to_string(), "2".to_string())));
        assert!(one.contains(&("flex-shrink".to_string(), "1".to_string())));
    }

    #[test]
    fn expands_border_shorthand() {
        let out = expand_shorthand("border", "1px solid red");
        assert!(out.contains(&("border-top-width".to_string(), "1px".to_string())));
        assert!(out.contains(&("border-top-color".to_string(), "red".to_string())));
        assert!(out.contains(&("border-bottom-color".to_string(), "red".to_string())));
    }
}
