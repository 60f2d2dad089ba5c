use crate::stats::types::TextStatisticsReport;

const CJK_START: char = '\u{4E00}';
const CJK_END: char = '\u{9FFF}';

/// Bucket a single character is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Spaces, tabs and line breaks
    Space,
    Digit,
    Latin,
    Cjk,
    Punctuation,
    /// Other scripts, emoji, symbols
    Uncounted,
}

impl CharClass {
    /// Classify by fixed precedence: space, digit, latin, CJK, punctuation
    pub fn of(ch: char) -> Self {
        match ch {
            ' ' | '\t' | '\r' | '\n' => CharClass::Space,
            c if c.is_ascii_digit() => CharClass::Digit,
            c if c.is_ascii_alphabetic() => CharClass::Latin,
            CJK_START..=CJK_END => CharClass::Cjk,
            c if is_punctuation(c) => CharClass::Punctuation,
            _ => CharClass::Uncounted,
        }
    }

    /// Word characters form runs counted by `words`
    pub fn is_word(self) -> bool {
        matches!(self, CharClass::Digit | CharClass::Latin | CharClass::Cjk)
    }
}

fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '，' | '。'
                | '！'
                | '？'
                | '；'
                | '：'
                | '、'
                | '“'
                | '”'
                | '‘'
                | '’'
                | '（'
                | '）'
                | '【'
                | '】'
                | '《'
                | '》'
                | '〈'
                | '〉'
                | '「'
                | '」'
                | '『'
                | '』'
                | '…'
                | '—'
                | '·'
                | '～'
        )
}

/// Blank characters do not give a line content
fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r')
}

/// Compute every basic count in a single pass over `text`
///
/// Paragraphs close at the end of each line that has non-blank content,
/// so blank lines only separate and never count. The result never carries
/// a token count.
pub fn compute_basic_statistics(text: &str) -> TextStatisticsReport {
    let mut report = TextStatisticsReport::empty();
    let mut in_word = false;
    let mut line_has_content = false;

    for ch in text.chars() {
        report.total_chars += 1;

        if ch == '\n' {
            report.lines += 1;
            if line_has_content {
                report.paragraphs += 1;
            }
            line_has_content = false;
        } else if !is_blank(ch) {
            line_has_content = true;
        }

        let class = CharClass::of(ch);
        match class {
            CharClass::Space => report.spaces += 1,
            CharClass::Digit => report.numbers += 1,
            CharClass::Latin => report.english_chars += 1,
            CharClass::Cjk => report.chinese_chars += 1,
            CharClass::Punctuation => report.punctuation += 1,
            CharClass::Uncounted => {}
        }

        if class.is_word() {
            if !in_word {
                report.words += 1;
                in_word = true;
            }
        } else {
            in_word = false;
        }
    }

    if line_has_content {
        report.paragraphs += 1;
    }

    report.total_chars_no_spaces = report.total_chars - report.spaces;
    report
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
