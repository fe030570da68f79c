//! Pure rewrites of a commit-message file's content.
//!
//! Each function returns the new content, or `None` when nothing changes, so
//! the caller only touches the file when it must.

/// Header line of the editor help block that `git commit` writes.
const TEMPLATE_HELP_START: &str = "Please enter the commit message";

/// Diff insertion only makes sense for a plain `git commit` or one started
/// from a template; amends, merges and `-m` messages are left alone.
pub fn should_insert_diff(commit_source: &str, commit_hash: &str) -> bool {
    matches!((commit_source, commit_hash), ("", "") | ("template", ""))
}

/// Insert `diff` right before the first comment line, after a blank line.
///
/// Without a diff or without any comment line the content is left as is.
pub fn insert_diff(content: &str, diff: &str) -> Option<String> {
    if diff.is_empty() {
        return None;
    }
    let at = line_starts(content).find(|&i| content[i..].starts_with('#'))?;
    let mut out = String::with_capacity(content.len() + diff.len() + 2);
    out.push_str(&content[..at]);
    out.push('\n');
    out.push_str(diff);
    out.push('\n');
    out.push_str(&content[at..]);
    Some(out)
}

/// Drop the editor help block: from the line starting with
/// "Please enter the commit message", commented or not, through the next
/// line that is just `#`.
pub fn strip_template_help(content: &str) -> Option<String> {
    let mut out = String::with_capacity(content.len());
    let mut skipping = false;
    let mut changed = false;
    for line in content.split_inclusive('\n') {
        if !skipping && uncommented(line).starts_with(TEMPLATE_HELP_START) {
            skipping = true;
            changed = true;
            continue;
        }
        if skipping {
            if line.trim() == "#" {
                skipping = false;
            }
            continue;
        }
        out.push_str(line);
    }
    changed.then_some(out)
}

/// `Signed-off-by` trailer for an identity such as `Name <email>`.
pub fn signed_off_by(identity: &str) -> String {
    format!("Signed-off-by: {}", identity.trim())
}

/// Append `trailer` to the message body, ahead of any trailing comment block.
///
/// The trailer joins an existing trailer paragraph, otherwise it starts a new
/// paragraph. A message already carrying the exact trailer is not changed.
pub fn add_trailer(content: &str, trailer: &str) -> Option<String> {
    let trailer = trailer.trim();
    if content.lines().any(|l| l.trim_end() == trailer) {
        return None;
    }
    let lines: Vec<&str> = content.lines().collect();
    let comment_start = trailing_comment_start(&lines);
    let (body, comments) = lines.split_at(comment_start);
    let body_end = body
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    let body = &body[..body_end];

    let mut out = String::new();
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    if !ends_with_trailer_block(body) {
        out.push('\n');
    }
    out.push_str(trailer);
    out.push('\n');
    if !comments.is_empty() {
        out.push('\n');
        for line in comments {
            out.push_str(line);
            out.push('\n');
        }
    }
    Some(out)
}

/// Prepend an empty first line for a plain `git commit`, so the editor opens
/// on a blank subject above the generated content.
pub fn add_blank_line_if_needed(content: &str, commit_source: &str) -> Option<String> {
    if !commit_source.is_empty() || content.starts_with('\n') {
        return None;
    }
    Some(format!("\n{content}"))
}

fn uncommented(line: &str) -> &str {
    line.trim_start().trim_start_matches('#').trim_start()
}

fn line_starts(content: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        content
            .match_indices('\n')
            .map(|(i, _)| i + 1)
            .filter(move |&i| i < content.len()),
    )
}

/// Index of the first line of the comment block closing the message.
fn trailing_comment_start(lines: &[&str]) -> usize {
    let mut start = lines.len();
    for (i, line) in lines.iter().enumerate().rev() {
        if line.starts_with('#') {
            start = i;
        } else if !line.trim().is_empty() {
            break;
        }
    }
    start
}

fn is_trailer_line(line: &str) -> bool {
    line.split_once(": ").is_some_and(|(key, _)| {
        !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// The last paragraph is a trailer block, and it is not the subject line.
fn ends_with_trailer_block(body: &[&str]) -> bool {
    let Some(para_start) = body.iter().rposition(|l| l.trim().is_empty()) else {
        return false;
    };
    let para = &body[para_start + 1..];
    !para.is_empty() && para.iter().all(|l| is_trailer_line(l))
}
