//! Message chunking for the platform's send-size limit.
//!
//! Generated replies can be arbitrarily long, but the platform caps each
//! outbound message. [`split_message`] repacks a long text into an ordered
//! sequence of bounded chunks, preferring to break at paragraph boundaries,
//! then line boundaries, and only slicing mid-line as a last resort.

/// Split `text` into ordered chunks of at most `max_len` characters.
///
/// The algorithm is greedy and strictly left-to-right, with no lookahead
/// or rebalancing: the first chunk is packed as full as possible.
///
/// 1. Paragraphs (separated by blank lines) are accumulated into a chunk,
///    joined by a blank line, while they fit.
/// 2. A single paragraph longer than `max_len` is split into lines and the
///    lines accumulated the same way, joined by a newline.
/// 3. A single line longer than `max_len` is sliced into runs of exactly
///    `max_len` characters; the final slice may be shorter.
///
/// Chunks are trimmed of surrounding whitespace and empty chunks are
/// dropped, so empty or whitespace-only input yields no chunks. Lengths
/// are counted in Unicode scalar values, never bytes.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    assert!(max_len > 0, "max_len must be positive");

    let mut chunks = Vec::new();
    let mut buf = String::new();

    for para in paragraphs(text) {
        if char_len(&para) > max_len {
            flush(&mut chunks, &mut buf);
            split_oversize_paragraph(&para, max_len, &mut chunks);
        } else if buf.is_empty() {
            buf = para;
        } else if char_len(&buf) + 2 + char_len(&para) <= max_len {
            buf.push_str("\n\n");
            buf.push_str(&para);
        } else {
            flush(&mut chunks, &mut buf);
            buf = para;
        }
    }

    flush(&mut chunks, &mut buf);
    chunks
}

/// Group consecutive non-blank lines into paragraphs.
///
/// Runs of blank lines act as a single separator, so paragraph spacing is
/// normalized to one blank line on output.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paras = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paras.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paras.push(current);
    }
    paras
}

/// Line-level fallback for a paragraph that cannot fit in one chunk.
fn split_oversize_paragraph(para: &str, max_len: usize, chunks: &mut Vec<String>) {
    let mut buf = String::new();

    for line in para.lines() {
        if char_len(line) > max_len {
            flush(chunks, &mut buf);
            hard_split(line, max_len, chunks);
        } else if buf.is_empty() {
            buf.push_str(line);
        } else if char_len(&buf) + 1 + char_len(line) <= max_len {
            buf.push('\n');
            buf.push_str(line);
        } else {
            flush(chunks, &mut buf);
            buf.push_str(line);
        }
    }

    flush(chunks, &mut buf);
}

/// Last-resort slicing of a single line into runs of exactly `max_len`
/// characters.
fn hard_split(line: &str, max_len: usize, chunks: &mut Vec<String>) {
    let mut slice = String::new();
    let mut count = 0;

    for ch in line.chars() {
        slice.push(ch);
        count += 1;
        if count == max_len {
            flush(chunks, &mut slice);
            count = 0;
        }
    }

    flush(chunks, &mut slice);
}

/// Emit `buf` as a chunk if it is non-empty after trimming, then clear it.
fn flush(chunks: &mut Vec<String>, buf: &mut String) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    buf.clear();
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Everything except whitespace must survive splitting, in order.
    fn strip_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = split_message("hello world", 2000);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn test_short_text_is_trimmed() {
        let chunks = split_message("  hello world \n", 2000);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(split_message("", 2000).is_empty());
    }

    #[test]
    fn test_whitespace_only_input_yields_no_chunks() {
        assert!(split_message("   \n\n  ", 2000).is_empty());
    }

    #[test]
    fn test_hard_split_exact_slices() {
        let text = "a".repeat(5000);
        let chunks = split_message(&text, 2000);
        let lens: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
        assert_eq!(lens, vec![2000, 2000, 1000]);
    }

    #[test]
    fn test_paragraphs_packed_greedily() {
        // "aaa\n\nbbb" is 8 chars; adding "ccc" would need 8 + 2 + 3 = 13 > 10.
        let chunks = split_message("aaa\n\nbbb\n\nccc", 10);
        assert_eq!(chunks, vec!["aaa\n\nbbb", "ccc"]);
    }

    #[test]
    fn test_paragraph_exactly_max_len_stands_alone() {
        let para = "x".repeat(10);
        let text = format!("{para}\n\nshort");
        let chunks = split_message(&text, 10);
        assert_eq!(chunks, vec![para, "short".to_string()]);
    }

    #[test]
    fn test_oversize_paragraph_falls_back_to_lines() {
        // One paragraph of three 4-char lines, 14 chars total with newlines.
        let chunks = split_message("aaaa\nbbbb\ncccc", 10);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_oversize_line_inside_paragraph() {
        let long_line = "z".repeat(25);
        let text = format!("intro\n{long_line}\noutro");
        let chunks = split_message(&text, 10);
        assert_eq!(
            chunks,
            vec![
                "intro".to_string(),
                "z".repeat(10),
                "z".repeat(10),
                "z".repeat(5),
                "outro".to_string(),
            ]
        );
    }

    #[test]
    fn test_fragments_keep_source_order() {
        let big = "b".repeat(30);
        let text = format!("first\n\n{big}\n\nlast");
        let chunks = split_message(&text, 12);
        assert_eq!(chunks[0], "first");
        assert_eq!(chunks[chunks.len() - 1], "last");
        assert_eq!(
            strip_whitespace(&chunks.join("\n\n")),
            strip_whitespace(&text)
        );
    }

    #[test]
    fn test_all_chunks_within_limit() {
        let text = "Lorem ipsum dolor sit amet.\n\n".repeat(40)
            + &"x".repeat(333)
            + "\n\nconsectetur adipiscing elit\nsed do eiusmod tempor\n\n"
            + &"y".repeat(90);
        for max_len in [10, 50, 120, 2000] {
            for chunk in split_message(&text, max_len) {
                assert!(
                    chunk.chars().count() <= max_len,
                    "chunk of {} chars exceeds limit {max_len}",
                    chunk.chars().count()
                );
            }
        }
    }

    #[test]
    fn test_content_preserved_modulo_whitespace() {
        let text = "Paragraph one has words.\n\nParagraph two also\nspans lines.\n\nThird.";
        for max_len in [8, 15, 30, 2000] {
            let chunks = split_message(text, max_len);
            assert_eq!(
                strip_whitespace(&chunks.join("")),
                strip_whitespace(text),
                "content lost at max_len {max_len}"
            );
        }
    }

    #[test]
    fn test_multibyte_chars_counted_not_bytes() {
        // 10 two-byte chars; byte-based slicing at 4 would split a char.
        let text = "é".repeat(10);
        let chunks = split_message(&text, 4);
        let lens: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
        assert_eq!(lens, vec![4, 4, 2]);
    }

    #[test]
    fn test_blank_line_runs_are_normalized() {
        let chunks = split_message("one\n\n\n\ntwo", 2000);
        assert_eq!(chunks, vec!["one\n\ntwo"]);
    }

    #[test]
    fn test_crlf_input() {
        let chunks = split_message("alpha\r\n\r\nbeta", 2000);
        assert_eq!(chunks, vec!["alpha\n\nbeta"]);
    }
}
