//! Line-based merge of answers into an existing env-file.
//!
//! Every input line produces exactly one output line. A line is rewritten
//! only when the bytes before its first `=` are exactly one of the answer
//! keys; anything else (comments, blanks, unknown keys, keys that merely
//! contain an answer key) passes through untouched. The file is handled as raw
//! bytes so content in any encoding survives. Keys that never appear in the
//! file are not appended; they are reported in [`MergeOutcome::unmatched`].

use crate::constants::KEY_VALUE_SEPARATOR;
use crate::types::AnswerSet;

/// Result of merging an [`AnswerSet`] into a sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Rewritten lines, each terminated by `\n`.
    pub lines: Vec<Vec<u8>>,
    /// Number of lines that were replaced by an answer.
    pub replaced: usize,
    /// Answer keys that matched no line, in answer order.
    pub unmatched: Vec<String>,
}

impl MergeOutcome {
    /// Full file content to write back.
    pub fn content(&self) -> Vec<u8> {
        self.lines.concat()
    }
}

/// Splits file content into lines without their `\n` or `\r\n` terminators.
///
/// A final line without a terminator is still a line; a trailing terminator
/// does not start an empty one.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

/// Returns the key of a `KEY=VALUE` line, or `None` when the line has no `=`.
pub fn line_key(line: &[u8]) -> Option<&[u8]> {
    line.iter()
        .position(|&b| b == KEY_VALUE_SEPARATOR as u8)
        .map(|idx| &line[..idx])
}

/// Finds the answer a line assigns to, with its position in the answer set.
///
/// At most one key can match since matching is by equality; answers are
/// scanned in declaration order so the first declared key would win anyway.
fn matched_answer<'a>(
    answers: &'a AnswerSet,
    line: &[u8],
) -> Option<(usize, &'a str, &'a str)> {
    let key = line_key(line)?;
    answers
        .iter()
        .enumerate()
        .find(|(_, (candidate, _))| candidate.as_bytes() == key)
        .map(|(idx, (key, value))| (idx, key, value))
}

/// Merges `answers` into `lines`.
///
/// `lines` are raw lines without their terminators, as produced by
/// [`split_lines`].
pub fn merge_lines<S: AsRef<[u8]>>(answers: &AnswerSet, lines: &[S]) -> MergeOutcome {
    let mut seen = vec![false; answers.len()];
    let mut replaced = 0;

    let merged = lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            match matched_answer(answers, line) {
                Some((idx, key, value)) => {
                    seen[idx] = true;
                    replaced += 1;
                    log::debug!(
                        "Replacing line '{}' with value for {key}",
                        String::from_utf8_lossy(line)
                    );
                    format!("{key}{KEY_VALUE_SEPARATOR}{value}\n").into_bytes()
                }
                None => {
                    log::trace!("Keeping line '{}'", String::from_utf8_lossy(line));
                    let mut kept = Vec::with_capacity(line.len() + 1);
                    kept.extend_from_slice(line);
                    kept.push(b'\n');
                    kept
                }
            }
        })
        .collect();

    let unmatched = answers
        .keys()
        .zip(seen)
        .filter(|(_, seen)| !seen)
        .map(|(key, _)| key.to_string())
        .collect();

    MergeOutcome { lines: merged, replaced, unmatched }
}

/// Merges `answers` into the raw content of an env-file.
pub fn merge_content(answers: &AnswerSet, content: &[u8]) -> MergeOutcome {
    merge_lines(answers, split_lines(content).as_slice())
}
