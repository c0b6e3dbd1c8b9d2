//! Dot-notation lookups into response bodies.
//!
//! Accepts both bracket indexing (`choices[0].message.content`) and dotted
//! indexing (`choices.0.message.content`). A leading `$.` is ignored.

use serde_json::Value;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'p> {
    Key(&'p str),
    Index(usize),
}

fn segments(path: &str) -> Option<Vec<Segment<'_>>> {
    let normalized = path.trim().trim_start_matches("$.");
    if normalized.is_empty() {
        return None;
    }

    let mut out = Vec::new();
    for part in normalized.split('.') {
        if part.is_empty() {
            return None;
        }
        let (key, mut rest) = match part.find('[') {
            Some(pos) => (&part[..pos], &part[pos..]),
            None => (part, ""),
        };
        if !key.is_empty() {
            match key.parse::<usize>() {
                Ok(idx) => out.push(Segment::Index(idx)),
                Err(_) => out.push(Segment::Key(key)),
            }
        }
        // "[0][1]" style suffixes
        while !rest.is_empty() {
            let close = rest.find(']')?;
            let idx = rest.get(1..close)?.parse::<usize>().ok()?;
            out.push(Segment::Index(idx));
            rest = &rest[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return None;
            }
        }
    }
    Some(out)
}

/// Resolve `path` inside `obj`. Returns `None` when any segment is absent or
/// the path is malformed.
pub fn get_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = obj;
    for segment in segments(path)? {
        current = match (segment, current) {
            (Segment::Key(k), Value::Object(map)) => map.get(k)?,
            (Segment::Index(i), Value::Array(arr)) => arr.get(i)?,
            // numeric object keys, e.g. {"0": ...}
            (Segment::Index(i), Value::Object(map)) => map.get(&i.to_string())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Like [`get_path`] but only succeeds for string values.
pub fn get_str<'a>(obj: &'a Value, path: &str) -> Option<&'a str> {
    get_path(obj, path).and_then(Value::as_str)
}
