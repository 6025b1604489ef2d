//! GFM autolink literals.
//!
//! pulldown-cmark only links `<...>` autolinks. This pass turns bare
//! `http://`, `https://` and `www.` URLs and email addresses found in text
//! into link nodes, following the GitHub-flavoured markdown rules: a literal
//! starts at the beginning of the text, after whitespace or after one of
//! `*`, `_`, `~`, `(`, and trailing punctuation is left out of the link.

use steambb_core::Node;

/// Link the literals found in every text node outside links and code.
pub(crate) fn link_literals(node: &mut Node) {
    let Some(children) = children_mut(node) else {
        return;
    };

    let mut linked = Vec::with_capacity(children.len());
    for child in std::mem::take(children) {
        match child {
            Node::Text { value } => linked.extend(split_text(value)),
            mut other => {
                link_literals(&mut other);
                linked.push(other);
            }
        }
    }
    *children = linked;
}

/// Children that may hold literals. Links, images and code are left alone.
fn children_mut(node: &mut Node) -> Option<&mut Vec<Node>> {
    match node {
        Node::Root { children }
        | Node::Paragraph { children }
        | Node::Heading { children, .. }
        | Node::List { children, .. }
        | Node::ListItem { children, .. }
        | Node::Strong { children }
        | Node::Emphasis { children }
        | Node::BlockQuote { children }
        | Node::Delete { children } => Some(children),
        Node::Other { children, .. } => children.as_mut(),
        Node::Link { .. }
        | Node::Text { .. }
        | Node::Image { .. }
        | Node::InlineCode { .. }
        | Node::Code { .. } => None,
    }
}

struct Literal {
    start: usize,
    end: usize,
    url: String,
}

/// Split a text value into text and link nodes.
fn split_text(text: String) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut last = 0;
    let mut idx = 0;

    while idx < text.len() {
        if let Some(literal) = literal_at(&text, idx, last) {
            if literal.start > last {
                nodes.push(Node::text(&text[last..literal.start]));
            }
            nodes.push(Node::Link {
                url: literal.url,
                children: vec![Node::text(&text[literal.start..literal.end])],
            });
            last = literal.end;
            idx = literal.end;
            continue;
        }
        idx += text[idx..].chars().next().map_or(1, char::len_utf8);
    }

    if last == 0 {
        return vec![Node::Text { value: text }];
    }
    if last < text.len() {
        nodes.push(Node::text(&text[last..]));
    }
    nodes
}

/// Match a literal at byte offset `idx`. Email local parts may reach back to `last`.
fn literal_at(text: &str, idx: usize, last: usize) -> Option<Literal> {
    let rest = &text[idx..];

    if at_boundary(text, idx) {
        for scheme in ["http://", "https://"] {
            if starts_with_ignore_case(rest, scheme) {
                let end = idx + scheme.len() + url_len(&rest[scheme.len()..])?;
                return Some(Literal {
                    start: idx,
                    end,
                    url: text[idx..end].to_string(),
                });
            }
        }
        if starts_with_ignore_case(rest, "www.") {
            let end = idx + url_len(rest)?;
            return Some(Literal {
                start: idx,
                end,
                url: format!("http://{}", &text[idx..end]),
            });
        }
    }

    if rest.starts_with('@') {
        return email_at(text, idx, last);
    }
    None
}

fn at_boundary(text: &str, idx: usize) -> bool {
    match text[..idx].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '*' | '_' | '~' | '('),
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Length of the domain and path starting `text`, if the domain is valid.
fn url_len(text: &str) -> Option<usize> {
    let raw = text
        .find(|c: char| c.is_whitespace() || c == '<')
        .unwrap_or(text.len());
    let len = trim_trailing(&text[..raw]);
    let candidate = &text[..len];
    let host_len = candidate
        .find(|c: char| matches!(c, '/' | '?' | '#' | ':'))
        .unwrap_or(len);
    valid_domain(&candidate[..host_len]).then_some(len)
}

/// Segments of alphanumerics, `-` and `_` joined by dots; at least one dot and
/// no underscore in the last two segments.
fn valid_domain(domain: &str) -> bool {
    let segments: Vec<&str> = domain.split('.').collect();
    segments.len() >= 2
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        })
        && segments.iter().rev().take(2).all(|segment| !segment.contains('_'))
}

/// Drop trailing punctuation, unbalanced closing parentheses and entity references.
fn trim_trailing(url: &str) -> usize {
    let mut end = url.len();
    loop {
        let candidate = &url[..end];
        match candidate.chars().next_back() {
            Some('?' | '!' | '.' | ',' | ':' | '*' | '_' | '~') => end -= 1,
            Some(')') if candidate.matches(')').count() > candidate.matches('(').count() => {
                end -= 1;
            }
            Some(';') => match entity_start(candidate) {
                Some(amp) => end = amp,
                None => break,
            },
            _ => break,
        }
    }
    end
}

/// Start of an `&name;` reference ending `text`.
fn entity_start(text: &str) -> Option<usize> {
    let body = text.strip_suffix(';')?;
    let amp = body.rfind('&')?;
    let name = &body[amp + 1..];
    (!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())).then_some(amp)
}

/// Match an email address around the `@` at byte offset `at`.
fn email_at(text: &str, at: usize, last: usize) -> Option<Literal> {
    let start = text[last..at]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_'))
        .last()
        .map(|(offset, _)| last + offset)?;

    let after = &text[at + 1..];
    let mut len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
        .unwrap_or(after.len());
    while after[..len].ends_with('.') {
        len -= 1;
    }
    let domain = &after[..len];
    if !domain.contains('.')
        || domain.ends_with(|c: char| matches!(c, '-' | '_'))
        || domain.split('.').any(str::is_empty)
    {
        return None;
    }

    let end = at + 1 + len;
    Some(Literal {
        start,
        end,
        url: format!("mailto:{}", &text[start..end]),
    })
}
