//! Greedy line breaking over measured characters.

/// Breaks `text` into lines no wider than the available width.
///
/// Hard line breaks (`\n`) always end a line. Within a line, breaks happen at
/// the last space that fits (the space itself is dropped); a run with no
/// space is broken between characters. Whitespace is otherwise preserved, so
/// indentation in code survives.
///
/// The first line may have less room than the rest (`first_width`), as when
/// text continues mid-line. If not even one word fits there, the first line
/// is left empty and the text starts on the next one.
pub fn break_lines<'t, F>(text: &'t str, first_width: f32, width: f32, measure: F) -> Vec<&'t str>
where
    F: Fn(char) -> f32,
{
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let hard_line = hard_line.strip_suffix('\r').unwrap_or(hard_line);
        let mut limit = if lines.is_empty() { first_width } else { width };
        let mut start = 0;
        let mut line_width = 0.0;
        let mut last_space: Option<usize> = None;
        let chars: Vec<(usize, char)> = hard_line.char_indices().collect();
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            let advance = measure(c);

            if line_width + advance > limit && pos > start {
                if c == ' ' {
                    lines.push(&hard_line[start..pos]);
                    start = pos + 1;
                    line_width = 0.0;
                    last_space = None;
                    limit = width;
                    i += 1;
                    continue;
                }
                match last_space {
                    Some(space) if space > start => {
                        lines.push(&hard_line[start..space]);
                        start = space + 1;
                        line_width = hard_line[start..pos].chars().map(&measure).sum();
                    }
                    _ if lines.is_empty() && limit < width => {
                        // Nothing fits on the partial first line; restart on a fresh one.
                        lines.push("");
                        line_width = hard_line[start..pos].chars().map(&measure).sum();
                    }
                    _ => {
                        lines.push(&hard_line[start..pos]);
                        start = pos;
                        line_width = 0.0;
                    }
                }
                last_space = None;
                limit = width;
                continue;
            }

            if c == ' ' {
                last_space = Some(pos);
            }
            line_width += advance;
            i += 1;
        }

        lines.push(&hard_line[start..]);
    }

    lines
}
