//! Heading levels for content bodies.
//!
//! A post with its own title already renders that title as the page's level-1
//! heading, so level-1 headings written inside the body are shifted down one level.
//! Comments have no title and are left as written.

use std::borrow::Cow;

const MAX_INDENT: usize = 3;

/// Demotes every level-1 heading in `body` to level 2 when `title` is present
/// and not blank. ATX (`# Title`) and setext (`Title` over `===`) headings are
/// handled; fenced code blocks are left alone.
pub fn demote_title_headings<'a>(title: Option<&str>, body: &'a str) -> Cow<'a, str> {
    if title.is_none_or(|t| t.trim().is_empty()) {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len() + 8);
    let mut fence: Option<(char, usize)> = None;
    let mut after_paragraph = false;
    let mut changed = false;

    for line in body.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let ending = &line[content.len()..];
        let rest = content.trim_start_matches(' ');
        let indent = &content[..content.len() - rest.len()];
        let in_block_position = indent.len() <= MAX_INDENT;

        if let Some((marker, run)) = fence {
            if in_block_position && closes_fence(rest, marker, run) {
                fence = None;
            }
            out.push_str(line);
            after_paragraph = false;
            continue;
        }

        if in_block_position {
            if let Some(opened) = opens_fence(rest) {
                fence = Some(opened);
                out.push_str(line);
                after_paragraph = false;
                continue;
            }
            if is_atx_heading_of_level(rest, 1) {
                out.push_str(indent);
                out.push('#');
                out.push_str(rest);
                out.push_str(ending);
                changed = true;
                after_paragraph = false;
                continue;
            }
            if after_paragraph && is_setext_h1_underline(rest) {
                out.push_str(indent);
                out.push_str(&rest.replace('=', "-"));
                out.push_str(ending);
                changed = true;
                after_paragraph = false;
                continue;
            }
        }

        // Deeper indentation only continues an open paragraph; on its own it is code.
        let continues_paragraph = if in_block_position {
            !is_atx_heading(rest) && !is_thematic_break(rest)
        } else {
            after_paragraph
        };
        after_paragraph = !rest.trim().is_empty() && continues_paragraph;
        out.push_str(line);
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(body)
    }
}

fn atx_level(rest: &str) -> Option<usize> {
    let level = rest.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    match rest[level..].chars().next() {
        None | Some(' ') | Some('\t') => Some(level),
        Some(_) => None,
    }
}

fn is_atx_heading(rest: &str) -> bool {
    atx_level(rest).is_some()
}

fn is_atx_heading_of_level(rest: &str, level: usize) -> bool {
    atx_level(rest) == Some(level)
}

fn is_thematic_break(rest: &str) -> bool {
    let marks: Vec<char> = rest.chars().filter(|c| !matches!(c, ' ' | '\t')).collect();
    match marks.first() {
        Some(&marker) if matches!(marker, '*' | '-' | '_') => {
            marks.len() >= 3 && marks.iter().all(|c| *c == marker)
        }
        _ => false,
    }
}

fn is_setext_h1_underline(rest: &str) -> bool {
    let trimmed = rest.trim_end();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '=')
}

fn opens_fence(rest: &str) -> Option<(char, usize)> {
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = rest.chars().take_while(|c| *c == marker).count();
    (run >= 3).then_some((marker, run))
}

fn closes_fence(rest: &str, marker: char, run: usize) -> bool {
    let trimmed = rest.trim_end();
    trimmed.chars().all(|c| c == marker) && trimmed.chars().count() >= run
}
