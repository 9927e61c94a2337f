use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `\"a`, `\'{e}`, `` \`o ``, `\^i`, `\~n`.
static ACCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\\(["'`^~])(?:\{([A-Za-z])\}|([A-Za-z]))"#).unwrap()
});

/// `\c c`, `\c{c}`.
static CEDILLA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\c(?:\s+([cCsS])|\{([cCsS])\})").unwrap());

/// Letters written as a command: `\aa`, `\ss`, `\o`.
static LETTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(aa|AA|ss|ae|AE|oe|OE|o|O)(?:\{\}|\b)").unwrap()
});

static DOTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:ldots|dots|textellipsis)(?:\{\})?").unwrap());

/// A `'` opening a quotation: at the start or after space or an open bracket.
static OPEN_QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s(\[])'").unwrap());

/// Step 4: accents, ellipses, quotes, non-breaking spaces and dashes.
///
/// Only text between HTML tags is touched, so attributes written by earlier
/// steps keep their `-` and `'`.
pub fn apply(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        out.push_str(&typeset(&rest[..open]));
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[open..open + close + 1]);
                rest = &rest[open + close + 1..];
            }
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(&typeset(rest));
    out
}

fn typeset(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = fold_accents(text)
        .replace("\\textbackslash{}", "\\")
        .replace("\\textbackslash", "\\");
    let text = DOTS_RE.replace_all(&text, "…");
    let text = text
        .replace("\\&amp;", "&amp;")
        .replace("``", "“")
        .replace("''", "”");
    let text = OPEN_QUOTE_RE.replace_all(&text, "${1}‘");
    text.replace('\'', "’")
        .replace('`', "‘")
        .replace('~', "&nbsp;")
        .replace("---", "—")
        .replace("--", "–")
}

/// Replaces accent and letter escapes with the characters they stand for.
///
/// Unknown combinations such as `\"x` are left as written.
pub fn fold_accents(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }
    let text = ACCENT_RE.replace_all(text, |caps: &Captures| {
        let mark = caps[1].chars().next();
        let letter = caps.get(2).or_else(|| caps.get(3)).and_then(|m| m.as_str().chars().next());
        match mark.zip(letter).and_then(|(mark, letter)| accented(mark, letter)) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    });
    let text = CEDILLA_RE.replace_all(&text, |caps: &Captures| {
        match caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()) {
            Some("c") => "ç",
            Some("C") => "Ç",
            Some("s") => "ş",
            _ => "Ş",
        }
    });
    LETTER_RE
        .replace_all(&text, |caps: &Captures| match &caps[1] {
            "aa" => "å",
            "AA" => "Å",
            "ss" => "ß",
            "ae" => "æ",
            "AE" => "Æ",
            "oe" => "œ",
            "OE" => "Œ",
            "o" => "ø",
            _ => "Ø",
        })
        .into_owned()
}

fn accented(mark: char, letter: char) -> Option<char> {
    let c = match (mark, letter) {
        ('"', 'a') => 'ä',
        ('"', 'e') => 'ë',
        ('"', 'i') => 'ï',
        ('"', 'o') => 'ö',
        ('"', 'u') => 'ü',
        ('"', 'y') => 'ÿ',
        ('"', 'A') => 'Ä',
        ('"', 'E') => 'Ë',
        ('"', 'I') => 'Ï',
        ('"', 'O') => 'Ö',
        ('"', 'U') => 'Ü',
        ('\'', 'a') => 'á',
        ('\'', 'e') => 'é',
        ('\'', 'i') => 'í',
        ('\'', 'o') => 'ó',
        ('\'', 'u') => 'ú',
        ('\'', 'y') => 'ý',
        ('\'', 'A') => 'Á',
        ('\'', 'E') => 'É',
        ('\'', 'I') => 'Í',
        ('\'', 'O') => 'Ó',
        ('\'', 'U') => 'Ú',
        ('`', 'a') => 'à',
        ('`', 'e') => 'è',
        ('`', 'i') => 'ì',
        ('`', 'o') => 'ò',
        ('`', 'u') => 'ù',
        ('`', 'A') => 'À',
        ('`', 'E') => 'È',
        ('`', 'I') => 'Ì',
        ('`', 'O') => 'Ò',
        ('`', 'U') => 'Ù',
        ('^', 'a') => 'â',
        ('^', 'e') => 'ê',
        ('^', 'i') => 'î',
        ('^', 'o') => 'ô',
        ('^', 'u') => 'û',
        ('^', 'A') => 'Â',
        ('^', 'E') => 'Ê',
        ('^', 'I') => 'Î',
        ('^', 'O') => 'Ô',
        ('^', 'U') => 'Û',
        ('~', 'a') => 'ã',
        ('~', 'n') => 'ñ',
        ('~', 'o') => 'õ',
        ('~', 'A') => 'Ã',
        ('~', 'N') => 'Ñ',
        ('~', 'O') => 'Õ',
        _ => return None,
    };
    Some(c)
}
