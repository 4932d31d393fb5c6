use super::language;
use super::Block;

/// The in-progress buffer for the block currently being assembled.
///
/// List items are emitted as soon as they are seen; `List` only records that
/// the parser is inside a run of items so a following plain line knows to
/// start a fresh paragraph instead of joining the list.
enum Accumulator {
    None,
    Paragraph(String),
    List,
}

impl Accumulator {
    fn flush(&mut self, blocks: &mut Vec<Block>) {
        if let Accumulator::Paragraph(content) = std::mem::replace(self, Accumulator::None) {
            if !content.is_empty() {
                blocks.push(Block::Paragraph { content });
            }
        }
    }

    fn is_list(&self) -> bool {
        matches!(self, Accumulator::List)
    }
}

/// Split response text into an ordered sequence of typed blocks.
///
/// Single forward pass over the lines. Blank lines only separate blocks, so
/// runs of them collapse to one flush and never produce empty blocks. Fence
/// lines are consumed but never appear in any block's content; everything
/// else survives into exactly one block.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut accum = Accumulator::None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            accum.flush(&mut blocks);
            i += 1;
            continue;
        }

        if let Some((level, content)) = heading_line(line) {
            accum.flush(&mut blocks);
            blocks.push(Block::Heading { level, content });
            i += 1;
            continue;
        }

        if line.starts_with("```") {
            accum.flush(&mut blocks);
            let mut code = String::new();
            i += 1;
            while i < lines.len() && !lines[i].trim().starts_with("```") {
                // Untrimmed: indentation inside the fence is significant.
                code.push_str(lines[i]);
                code.push('\n');
                i += 1;
            }
            if i < lines.len() {
                // Skip the closing fence. An unterminated fence has already
                // consumed the rest of the input as code.
                i += 1;
            }
            let content = code.trim().to_string();
            let language = language::detect(&content);
            blocks.push(Block::Code { content, language });
            continue;
        }

        if is_list_item(line) {
            if !accum.is_list() {
                accum.flush(&mut blocks);
                accum = Accumulator::List;
            }
            // Marker included; it is stripped at render time.
            blocks.push(Block::ListItem {
                content: line.to_string(),
            });
            i += 1;
            continue;
        }

        match &mut accum {
            Accumulator::Paragraph(buf) => {
                buf.push(' ');
                buf.push_str(line);
            }
            _ => {
                accum.flush(&mut blocks);
                accum = Accumulator::Paragraph(line.to_string());
            }
        }
        i += 1;
    }

    accum.flush(&mut blocks);
    blocks
}

/// `#` or `##` followed by whitespace. Deeper heading markers are not a
/// distinguished case and fall through to paragraph text.
fn heading_line(line: &str) -> Option<(u8, String)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=2).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    Some((hashes as u8, rest.trim_start().to_string()))
}

fn is_list_item(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some('-') | Some('*') | Some('•') => chars.next().is_some_and(|c| c.is_whitespace()),
        Some(c) if c.is_ascii_digit() => {
            let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
            rest.starts_with('.') && rest[1..].starts_with(|c: char| c.is_whitespace())
        }
        _ => false,
    }
}

/// Remove the bullet or number marker from a stored list item line.
pub fn strip_list_marker(content: &str) -> &str {
    if let Some(rest) = content
        .strip_prefix('-')
        .or_else(|| content.strip_prefix('*'))
        .or_else(|| content.strip_prefix('•'))
    {
        if rest.starts_with(|c: char| c.is_whitespace()) {
            return rest.trim_start();
        }
    }
    let digits = content.trim_start_matches(|c: char| c.is_ascii_digit());
    if digits.len() < content.len() {
        if let Some(rest) = digits.strip_prefix('.') {
            if rest.starts_with(|c: char| c.is_whitespace()) {
                return rest.trim_start();
            }
        }
    }
    content
}
