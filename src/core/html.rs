// src/core/html.rs
//! Tolerant HTML scanning.
//!
//! Not a conforming parser. It walks the tags once, keeps a flat element list
//! with parent links, and builds the page's visible text on the way. Unclosed
//! elements run to the end of the document; stray closing tags are ignored.
//! `<script>`/`<style>` bodies are kept on the element but never reach `text()`.

use std::ops::Range;

use super::sanitize::{normalize_entities, normalize_ws};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

#[derive(Debug)]
struct Node {
    name: String,
    attrs: Vec<(String, String)>,
    parent: Option<usize>,
    inner: Range<usize>,
}

/// A parsed page: visible text plus a queryable element list.
#[derive(Debug)]
pub struct Document {
    src: String,
    nodes: Vec<Node>,
    text: String,
}

#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    doc: &'a Document,
    idx: usize,
}

impl Document {
    pub fn parse(src: &str) -> Self {
        let src = src.to_string();
        let len = src.len();
        let mut nodes: Vec<Node> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut text = String::with_capacity(len / 2);
        let mut pos = 0usize;

        while pos < len {
            let Some(rel) = src[pos..].find('<') else {
                text.push_str(&src[pos..]);
                break;
            };
            let lt = pos + rel;
            text.push_str(&src[pos..lt]);
            let rest = &src[lt..];

            if rest.starts_with("<!--") {
                pos = rest.find("-->").map_or(len, |e| lt + e + 3);
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                pos = tag_end(&src, lt);
                continue;
            }
            if let Some(closing) = rest.strip_prefix("</") {
                let end = tag_end(&src, lt);
                let name = tag_name(closing);
                if let Some(at) = open.iter().rposition(|&i| nodes[i].name == name) {
                    for &i in &open[at..] {
                        nodes[i].inner.end = lt;
                    }
                    open.truncate(at);
                }
                text.push(' ');
                pos = end;
                continue;
            }
            if !rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                // a bare '<' in copy
                text.push('<');
                pos = lt + 1;
                continue;
            }

            let end = tag_end(&src, lt);
            let raw = src[lt + 1..end].trim_end_matches('>');
            let self_closing = raw.trim_end().ends_with('/');
            let (name, attrs) = parse_tag(raw.trim_end().trim_end_matches('/'));
            let idx = nodes.len();
            nodes.push(Node { name, attrs, parent: open.last().copied(), inner: end..len });
            text.push(' ');

            let name = nodes[idx].name.clone();
            if RAW_TEXT_TAGS.contains(&name.as_str()) {
                let close = find_ci(&src, &format!("</{name}"), end).unwrap_or(len);
                nodes[idx].inner = end..close;
                pos = if close < len { tag_end(&src, close) } else { len };
                continue;
            }
            if self_closing || VOID_TAGS.contains(&name.as_str()) {
                nodes[idx].inner = end..end;
            } else {
                open.push(idx);
            }
            pos = end;
        }

        let text = normalize_ws(&normalize_entities(&text));
        Self { src, nodes, text }
    }

    /// Visible text, entity-decoded, whitespace collapsed, tags joined by a space.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn select(&self, selector: &str) -> Vec<Element<'_>> {
        self.select_with(&Selector::parse(selector))
    }

    pub fn select_with(&self, selector: &Selector) -> Vec<Element<'_>> {
        (0..self.nodes.len())
            .filter(|&i| selector.matches(self, i))
            .map(|idx| Element { doc: self, idx })
            .collect()
    }

    pub fn has(&self, selector: &str) -> bool {
        let sel = Selector::parse(selector);
        (0..self.nodes.len()).any(|i| sel.matches(self, i))
    }
}

impl<'a> Element<'a> {
    fn node(&self) -> &'a Node {
        &self.doc.nodes[self.idx]
    }

    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node()
            .attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn inner_html(&self) -> &'a str {
        &self.doc.src[self.node().inner.clone()]
    }

    /// Element text. Raw-text elements (`script`, `style`) return their body as-is.
    pub fn text(&self) -> String {
        if RAW_TEXT_TAGS.contains(&self.name()) {
            return self.inner_html().trim().to_string();
        }
        strip_tags(normalize_entities(self.inner_html()))
    }
}

/* ---------- selectors ---------- */

/// Compound selectors joined by the descendant combinator:
/// `tag`, `[attr]`, `[attr=v]`, `[attr*=v]`, `[attr^=v]`, e.g. `details summary`,
/// `script[type='application/ld+json']`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    attrs: Vec<AttrCond>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AttrCond {
    name: String,
    op: AttrOp,
    value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttrOp { Exists, Equals, Contains, Prefix }

impl Selector {
    /// Never fails; a malformed selector simply matches less.
    pub fn parse(s: &str) -> Self {
        let parts = split_outside_brackets(s)
            .into_iter()
            .map(parse_compound)
            .collect();
        Self { parts }
    }

    fn matches(&self, doc: &Document, idx: usize) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(&doc.nodes[idx]) {
            return false;
        }
        // Nearest-ancestor walk for the remaining compounds, right to left
        let mut cur = doc.nodes[idx].parent;
        for want in ancestors.iter().rev() {
            loop {
                let Some(p) = cur else { return false };
                cur = doc.nodes[p].parent;
                if want.matches(&doc.nodes[p]) {
                    break;
                }
            }
        }
        true
    }
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && *tag != node.name {
                return false;
            }
        }
        self.attrs.iter().all(|cond| {
            let found = node.attrs.iter().find(|(k, _)| *k == cond.name);
            match (found, cond.op) {
                (None, _) => false,
                (Some(_), AttrOp::Exists) => true,
                (Some((_, v)), AttrOp::Equals) => *v == cond.value,
                (Some((_, v)), AttrOp::Contains) => v.contains(&cond.value),
                (Some((_, v)), AttrOp::Prefix) => v.starts_with(&cond.value),
            }
        })
    }
}

fn split_outside_brackets(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (i, ch) in s.char_indices() {
        match ch {
            '[' => { depth += 1; start.get_or_insert(i); }
            ']' => { depth = depth.saturating_sub(1); }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(st) = start.take() { out.push(&s[st..i]); }
            }
            _ => { start.get_or_insert(i); }
        }
    }
    if let Some(st) = start { out.push(&s[st..]); }
    out
}

fn parse_compound(tok: &str) -> Compound {
    let (tag, mut rest) = match tok.find('[') {
        Some(b) => (&tok[..b], &tok[b..]),
        None => (tok, ""),
    };
    let tag = (!tag.is_empty()).then(|| tag.to_ascii_lowercase());

    let mut attrs = Vec::new();
    while let Some(body) = rest.strip_prefix('[') {
        let close = body.find(']').unwrap_or(body.len());
        attrs.push(parse_attr_cond(&body[..close]));
        rest = body.get(close + 1..).unwrap_or("");
    }
    Compound { tag, attrs }
}

fn parse_attr_cond(body: &str) -> AttrCond {
    let (name, op, value) = if let Some(i) = body.find("*=") {
        (&body[..i], AttrOp::Contains, &body[i + 2..])
    } else if let Some(i) = body.find("^=") {
        (&body[..i], AttrOp::Prefix, &body[i + 2..])
    } else if let Some(i) = body.find('=') {
        (&body[..i], AttrOp::Equals, &body[i + 1..])
    } else {
        (body, AttrOp::Exists, "")
    };
    AttrCond {
        name: name.trim().to_ascii_lowercase(),
        op,
        value: unquote(value.trim()).to_string(),
    }
}

/* ---------- tag scanning ---------- */

/// Index just past the `>` closing the tag that opens at `lt`. Quoted `>` is skipped.
fn tag_end(src: &str, lt: usize) -> usize {
    let mut quote: Option<u8> = None;
    for (i, &b) in src.as_bytes()[lt..].iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') | (None, b'\'') => quote = Some(b),
            (None, b'>') => return lt + i + 1,
            _ => {}
        }
    }
    src.len()
}

fn tag_name(s: &str) -> String {
    s.chars()
        .take_while(|c| !c.is_whitespace() && *c != '>' && *c != '/')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// `name attr=v attr2="v 2" flag` → ("name", [(attr, v), (attr2, v 2), (flag, "")]).
/// Attribute names are lowercased; values keep their case.
fn parse_tag(raw: &str) -> (String, Vec<(String, String)>) {
    let name = tag_name(raw);
    let mut attrs = Vec::new();
    let mut rest = raw[name.len().min(raw.len())..].trim_start();

    while !rest.is_empty() {
        let key_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let key = rest[..key_end].trim_matches('/').to_ascii_lowercase();
        rest = rest[key_end..].trim_start();

        let mut value = s!();
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (v, tail) = match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let body = &after_eq[1..];
                    let close = body.find(q).unwrap_or(body.len());
                    (&body[..close], body.get(close + 1..).unwrap_or(""))
                }
                _ => {
                    let e = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
                    (&after_eq[..e], &after_eq[e..])
                }
            };
            value = normalize_entities(v);
            rest = tail.trim_start();
        }
        if !key.is_empty() {
            attrs.push((key, value));
        }
    }
    (name, attrs)
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('\'').and_then(|t| t.strip_suffix('\''))
        .or_else(|| s.strip_prefix('"').and_then(|t| t.strip_suffix('"')))
        .unwrap_or(s)
}

/// Case-insensitive `find`, starting at `from`.
pub fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let lc = hay.get(from..)?.to_ascii_lowercase();
    lc.find(&needle.to_ascii_lowercase()).map(|i| i + from)
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => { in_tag = true; out.push(' '); }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
