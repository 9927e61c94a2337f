use std::sync::LazyLock;

use regex::Regex;

/// Layout commands with no text of their own.
static LAYOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\(?:noindent|centering|raggedright|newline|linebreak|smallskip|medskip|bigskip|hfill|vfill|clearpage|newpage|maketitle|footnotesize|normalsize|small|large|Large|par)\b\s?",
    )
    .unwrap()
});

/// Commands whose argument is not text.
static DROP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:label|vspace|hspace|index)\*?\{[^{}]*\}").unwrap());

/// Innermost `\cmd[opt]{arg}` with a non-empty argument.
static UNWRAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\[A-Za-z@]+\*?(?:\[[^\]]*\])?\{([^{}]+)\}").unwrap()
});

/// Grouping braces; an escaped brace keeps its brace.
static BRACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\([{}])|[{}]").unwrap());

/// Step 5: unknown commands degrade to their argument, grouping braces go,
/// and every remaining backslash is stripped.
pub fn apply(text: &str) -> String {
    let text = LAYOUT_RE.replace_all(text, "");
    let mut text = DROP_RE.replace_all(&text, "").into_owned();
    while UNWRAP_RE.is_match(&text) {
        text = UNWRAP_RE.replace_all(&text, "$1").into_owned();
    }
    BRACE_RE.replace_all(&text, "$1").replace('\\', "")
}
