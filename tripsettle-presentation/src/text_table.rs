use std::{borrow::Cow, fmt::Write};

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Monospace table: header line, rule, then one line per row.
    /// Cells past the header count are dropped.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().take(col_count).enumerate() {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let mut out = String::with_capacity(256);
        self.write_line(&mut out, self.headers, &col_widths);

        let rule: Vec<String> = col_widths.iter().map(|&width| "-".repeat(width)).collect();
        out.push_str(&rule.join(RULE_SEPARATOR));
        out.push('\n');

        for row in &self.rows {
            self.write_line(&mut out, row.as_ref(), &col_widths);
        }

        out
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'a, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, &width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_SEPARATOR);
            }
            let cell: &str = cells.get(i).map_or("", |cell| &**cell);
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn pad_cell(line: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let padding = width.saturating_sub(text_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Center => (padding / 2, padding - padding / 2),
        Alignment::Right => (padding, 0),
    };
    line.extend(std::iter::repeat_n(' ', left));
    line.push_str(cell);
    line.extend(std::iter::repeat_n(' ', right));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn headers() -> [Cow<'static, str>; 2] {
        [Cow::Borrowed("Name"), Cow::Borrowed("Amount")]
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let headers = headers();
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers)
            .row([Cow::Borrowed("Alice"), Cow::Borrowed("1,000.00")])
            .row([Cow::Borrowed("Bo"), Cow::Borrowed("5.00")])
            .build();

        assert_eq!(
            table,
            "Name  |   Amount\n\
             ------+---------\n\
             Alice | 1,000.00\n\
             Bo    |     5.00\n"
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let headers = headers();
        let table = TextTableBuilder::new()
            .headers(&headers)
            .row([Cow::Borrowed("₹₹"), Cow::Borrowed("x")])
            .build();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "₹₹   | x");
    }

    #[rstest]
    #[case::left(Alignment::Left, "ab     |")]
    #[case::center(Alignment::Center, "  ab   |")]
    #[case::right(Alignment::Right, "    ab |")]
    fn aligns_cells(#[case] alignment: Alignment, #[case] expected_prefix: &str) {
        let headers = [Cow::Borrowed("Column"), Cow::Borrowed("x")];
        let alignments = [alignment, Alignment::Left];
        let table = TextTableBuilder::new()
            .alignments(&alignments)
            .headers(&headers)
            .row([Cow::Borrowed("ab"), Cow::Borrowed("")])
            .build();

        let row = table.lines().nth(2).unwrap_or_default();
        assert!(row.starts_with(expected_prefix), "row was {row:?}");
    }

    #[test]
    fn no_headers_builds_nothing() {
        let table = TextTableBuilder::new()
            .row(vec![Cow::Borrowed("orphan")])
            .build();

        assert!(table.is_empty());
    }

    #[test]
    fn short_rows_are_padded_and_extra_cells_dropped() {
        let headers = headers();
        let table = TextTableBuilder::new()
            .headers(&headers)
            .rows([
                vec![Cow::Borrowed("A")],
                vec![Cow::Borrowed("B"), Cow::Borrowed("2"), Cow::Borrowed("spare")],
            ])
            .build();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "A    |");
        assert_eq!(lines[3], "B    | 2");
        assert!(!table.contains("spare"));
    }
}
