//! Proportion-material grammar matcher
//!
//! Parses one component block into [`MaterialRecord`]s:
//!
//! ```text
//! block      := item (" " item)*
//! item       := proportion ws* material
//! proportion := digit{1,3} ([,.] digit{1,2})? "%"?
//! material   := [letters À-ÿ - ' ws]+ ending on a non-whitespace member, length >= 2
//! ```
//!
//! Matching is anchored at the start of the block and stops at the first item
//! that does not parse; whatever matched before that point is returned. A block
//! that matches nothing yields an empty list. Digits are ASCII only.

use crate::label::model::MaterialRecord;

/// Extract the `(proportion, material)` items at the start of a component block.
pub fn match_materials(text: &str) -> Vec<MaterialRecord> {
    let mut cursor = Cursor::new(text);
    let mut records = Vec::new();

    match cursor.item() {
        Some(record) => records.push(record),
        None => return records,
    }

    loop {
        let checkpoint = cursor.pos;
        if cursor.eat(' ') {
            if let Some(record) = cursor.item() {
                records.push(record);
                continue;
            }
        }
        cursor.pos = checkpoint;
        break;
    }

    records
}

fn is_material_char(c: char) -> bool {
    c.is_whitespace() || is_material_edge(c)
}

/// Characters a material name may end on.
fn is_material_edge(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c) || c == '-' || c == '\''
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek_at(self.pos) == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Count consecutive ASCII digits starting at `from`, capped at `max`.
    fn digits_at(&self, from: usize, max: usize) -> usize {
        self.chars[from.min(self.chars.len())..]
            .iter()
            .take(max)
            .take_while(|c| c.is_ascii_digit())
            .count()
    }

    /// Parse one item, restoring the position when it does not match.
    fn item(&mut self) -> Option<MaterialRecord> {
        let start = self.pos;
        let parsed = self.proportion().and_then(|proportion| {
            self.material()
                .map(|material| MaterialRecord::new(material, proportion))
        });
        if parsed.is_none() {
            self.pos = start;
        }
        parsed
    }

    fn proportion(&mut self) -> Option<f64> {
        let start = self.pos;
        let whole = self.digits_at(start, 3);
        if whole == 0 {
            return None;
        }
        let mut end = start + whole;

        if matches!(self.peek_at(end), Some(',') | Some('.')) {
            let fraction = self.digits_at(end + 1, 2);
            if fraction > 0 {
                end += 1 + fraction;
            }
        }

        let number: String = self.chars[start..end]
            .iter()
            .map(|&c| if c == ',' { '.' } else { c })
            .collect();
        let value = number.parse::<f64>().ok()?;

        self.pos = end;
        self.eat('%');
        Some(value)
    }

    /// Material name after optional whitespace.
    ///
    /// Leading whitespace is consumed greedily; when the remaining name is too
    /// short, whitespace is given back one character at a time and becomes part
    /// of the name.
    fn material(&mut self) -> Option<String> {
        let mut spaces = 0;
        while self
            .peek_at(self.pos + spaces)
            .is_some_and(char::is_whitespace)
        {
            spaces += 1;
        }

        for skipped in (0..=spaces).rev() {
            let start = self.pos + skipped;
            if let Some(end) = self.material_end(start) {
                self.pos = end;
                return Some(self.chars[start..end].iter().collect());
            }
        }
        None
    }

    /// Longest material starting at `start`, as an exclusive end index.
    fn material_end(&self, start: usize) -> Option<usize> {
        let run = self.chars[start.min(self.chars.len())..]
            .iter()
            .take_while(|&&c| is_material_char(c))
            .count();
        (2..=run)
            .rev()
            .find(|&len| is_material_edge(self.chars[start + len - 1]))
            .map(|len| start + len)
    }
}
