use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").unwrap());

/// Turns raw model output into text that should parse as a single JSON
/// object.
pub fn clean_response(raw: &str) -> String {
    let unfenced = strip_fences(raw.trim());
    let object = outermost_object(unfenced);
    let uncommented = strip_comments(object);

    fractions_to_decimals(&uncommented)
}

fn strip_fences(text: &str) -> &str {
    if !text.starts_with("```") {
        return text;
    }

    let Some(body_start) = text.find('\n') else {
        return text;
    };

    let body = &text[body_start + 1..];
    match body.rfind("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

fn outermost_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    }
}

/// Drops `// line` and `/* block */` comments that sit outside string
/// literals.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                while chars.next_if(|&next| next != '\n').is_some() {}
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn fractions_to_decimals(text: &str) -> String {
    RE_FRACTION
        .replace_all(text, |caps: &Captures| {
            let numerator = caps[1].parse::<f64>();
            let denominator = caps[2].parse::<f64>();

            match (numerator, denominator) {
                (Ok(n), Ok(d)) if d != 0.0 => (n / d).to_string(),
                _ => caps[0].to_owned(),
            }
        })
        .into_owned()
}
