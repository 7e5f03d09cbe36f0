//! Minimal tag scanning over Office XML parts.
//!
//! This is not an XML parser. It locates text-bearing elements by name and
//! lifts out their content, which is all the prompt needs.

const ENTITIES: [(&str, char); 5] = [
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&amp;", '&'),
    ("&quot;", '"'),
    ("&apos;", '\''),
];

/// Text of every `<w:t>` run in a WordprocessingML body, joined by single spaces.
pub(crate) fn word_runs(xml: &str) -> String {
    let mut fragments = Vec::new();
    let mut pos = 0;

    while let Some(content_start) = find_open_tag(xml, pos, "w:t") {
        let Some((raw, next)) = element_text(xml, content_start, "w:t") else {
            break;
        };
        push_fragment(&mut fragments, raw);
        pos = next;
    }

    fragments.join(" ")
}

/// Text of every `<t>` (string) and `<v>` (value) element of a SpreadsheetML
/// part in document order, joined by `" | "`.
pub(crate) fn cell_values(xml: &str) -> String {
    let mut fragments = Vec::new();
    let mut pos = 0;

    loop {
        let next_string = find_open_tag(xml, pos, "t").map(|start| (start, "t"));
        let next_value = find_open_tag(xml, pos, "v").map(|start| (start, "v"));

        let (content_start, name) = match (next_string, next_value) {
            (Some(s), Some(v)) => {
                if s.0 <= v.0 {
                    s
                } else {
                    v
                }
            }
            (Some(s), None) => s,
            (None, Some(v)) => v,
            (None, None) => break,
        };

        match element_text(xml, content_start, name) {
            Some((raw, next)) => {
                push_fragment(&mut fragments, raw);
                pos = next;
            }
            None => pos = content_start,
        }
    }

    fragments.join(" | ")
}

/// Decodes the five predefined XML entities in one pass. Unknown references
/// are left as they are.
pub(crate) fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn push_fragment(fragments: &mut Vec<String>, raw: &str) {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed.to_string());
    }
}

/// Byte offset just past the next `<name>` / `<name attrs>` opening tag at or
/// after `from`. Longer names sharing the prefix (`<w:tbl>` for `w:t`) and
/// self-closing tags are skipped.
fn find_open_tag(xml: &str, from: usize, name: &str) -> Option<usize> {
    let needle = format!("<{name}");
    let mut pos = from;

    while let Some(rel) = xml.get(pos..)?.find(&needle) {
        let after = pos + rel + needle.len();
        let rest = &xml[after..];

        match rest.chars().next() {
            Some('>') => return Some(after + 1),
            Some(c) if c.is_whitespace() => {
                let close = rest.find('>')?;
                if rest[..close].ends_with('/') {
                    pos = after + close + 1;
                    continue;
                }
                return Some(after + close + 1);
            }
            _ => pos = after,
        }
    }

    None
}

fn element_text<'a>(xml: &'a str, content_start: usize, name: &str) -> Option<(&'a str, usize)> {
    let close = format!("</{name}>");
    let rel = xml.get(content_start..)?.find(&close)?;
    let end = content_start + rel;
    Some((&xml[content_start..end], end + close.len()))
}
