use std::sync::LazyLock;

use log::warn;
use regex::{Captures, Regex};

use crate::{
    document::LabelIndex,
    inline::{
        attr,
        commands::{replace_command, replace_command_pair},
    },
};

/// Grouping-brace style switches: `{\itshape text}`, `{\bfseries text}`.
static STYLE_SWITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\\(itshape|slshape|em|it|bfseries|bf|ttfamily|tt|scshape|sc)\s+([^{}]*)\}")
        .unwrap()
});

/// Passes over nested spans stop after this many rounds.
const MAX_ROUNDS: usize = 8;

/// An HTML element wrapping the argument of some commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Emphasis,
    Strong,
    Code,
    NoWrap,
    SmallCaps,
}

impl SpanStyle {
    pub const ALL: [SpanStyle; 5] = [
        SpanStyle::Emphasis,
        SpanStyle::Strong,
        SpanStyle::Code,
        SpanStyle::NoWrap,
        SpanStyle::SmallCaps,
    ];

    pub fn commands(self) -> &'static [&'static str] {
        match self {
            SpanStyle::Emphasis => &["emph", "textit", "textsl"],
            SpanStyle::Strong => &["textbf"],
            SpanStyle::Code => &["texttt"],
            SpanStyle::NoWrap => &["mbox", "nowrap"],
            SpanStyle::SmallCaps => &["textsc"],
        }
    }

    fn switch(name: &str) -> Option<Self> {
        match name {
            "itshape" | "slshape" | "em" | "it" => Some(SpanStyle::Emphasis),
            "bfseries" | "bf" => Some(SpanStyle::Strong),
            "ttfamily" | "tt" => Some(SpanStyle::Code),
            "scshape" | "sc" => Some(SpanStyle::SmallCaps),
            _ => None,
        }
    }

    pub fn wrap(self, inner: &str) -> String {
        match self {
            SpanStyle::Emphasis => format!("<em>{inner}</em>"),
            SpanStyle::Strong => format!("<strong>{inner}</strong>"),
            SpanStyle::Code => format!("<code>{inner}</code>"),
            SpanStyle::NoWrap => format!("<span class=\"nowrap\">{inner}</span>"),
            SpanStyle::SmallCaps => format!("<span class=\"smallcaps\">{inner}</span>"),
        }
    }
}

/// Cross-reference commands, and whether each prints the long form
/// ("Figure 2") rather than the short one ("2").
const REF_COMMANDS: [(&str, bool); 4] = [
    ("ref", false),
    ("autoref", true),
    ("cref", true),
    ("Cref", true),
];

/// Step 1: cross references, links and styled spans.
///
/// Repeats until nothing changes so nested spans of the same kind resolve.
pub fn apply(text: &str, labels: &LabelIndex) -> String {
    let mut text = text.to_string();
    for _ in 0..MAX_ROUNDS {
        let next = round(&text, labels);
        if next == text {
            break;
        }
        text = next;
    }
    text
}

fn round(text: &str, labels: &LabelIndex) -> String {
    let mut text = text.to_string();
    for (name, long) in REF_COMMANDS {
        text = replace_command(&text, name, |arg| cross_ref(arg.value.trim(), long, labels));
    }
    text = replace_command(&text, "url", |arg| {
        let url = protect_url(arg.value.trim());
        format!("<a href=\"{url}\">{url}</a>")
    });
    text = replace_command_pair(&text, "href", |url, label| {
        format!("<a href=\"{}\">{}</a>", protect_url(url.value.trim()), label.value)
    });
    text = STYLE_SWITCH_RE
        .replace_all(&text, |caps: &Captures| match SpanStyle::switch(&caps[1]) {
            Some(style) => style.wrap(&caps[2]),
            None => caps[0].to_string(),
        })
        .into_owned();
    for style in SpanStyle::ALL {
        for name in style.commands() {
            text = replace_command(&text, name, |arg| style.wrap(arg.value));
        }
    }
    text
}

fn cross_ref(label: &str, long: bool, labels: &LabelIndex) -> String {
    match labels.get(label) {
        Some(target) => {
            let name = if long { &target.long } else { &target.short };
            format!(
                "<a href=\"#{}\">{}</a>",
                attr(&target.anchor),
                html_escape::encode_text(name)
            )
        }
        None => {
            warn!("reference to unknown label `{label}`");
            format!("<a href=\"#{}\">{label}</a>", attr(label))
        }
    }
}

/// Makes a URL safe from the later steps: LaTeX escapes are undone and the
/// characters typography and the fallback would rewrite become entities.
pub fn protect_url(url: &str) -> String {
    let url = url
        .replace("\\%", "%")
        .replace("\\#", "#")
        .replace("\\_", "_")
        .replace("\\&amp;", "&amp;")
        .replace("\\~", "~");
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\\' => out.push_str("&#92;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            '~' => out.push_str("&#126;"),
            '-' => out.push_str("&#45;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CrossRef;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(r"\emph{a}", "<em>a</em>")]
    #[case(r"\textit{a}", "<em>a</em>")]
    #[case(r"{\itshape a}", "<em>a</em>")]
    #[case(r"{\em a}", "<em>a</em>")]
    #[case(r"\textbf{a}", "<strong>a</strong>")]
    #[case(r"{\bfseries a}", "<strong>a</strong>")]
    #[case(r"\texttt{a}", "<code>a</code>")]
    #[case(r"\mbox{a b}", "<span class=\"nowrap\">a b</span>")]
    #[case(r"\textsc{Ai}", "<span class=\"smallcaps\">Ai</span>")]
    #[case(r"\emph{a \emph{b}}", "<em>a <em>b</em></em>")]
    fn wraps_styled_spans(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply(input, &LabelIndex::default()), expected);
    }

    #[test]
    fn url_survives_later_steps() {
        let out = apply(r"\url{http://x.org/~a--b}", &LabelIndex::default());
        assert_eq!(
            out,
            "<a href=\"http://x.org/&#126;a&#45;&#45;b\">http://x.org/&#126;a&#45;&#45;b</a>"
        );
    }

    #[test]
    fn href_keeps_label_markup() {
        let out = apply(r"\href{http://a.io}{\emph{site}}", &LabelIndex::default());
        assert_eq!(out, "<a href=\"http://a.io\"><em>site</em></a>");
    }

    #[test]
    fn cross_references_use_label_index() {
        let mut labels = LabelIndex::default();
        labels.insert(
            "fig:arch",
            CrossRef {
                anchor: "fig:arch".to_string(),
                short: "2".to_string(),
                long: "Figure 2".to_string(),
            },
        );
        assert_eq!(
            apply(r"Figure~\ref{fig:arch} and \autoref{fig:arch}", &labels),
            "Figure~<a href=\"#fig:arch\">2</a> and <a href=\"#fig:arch\">Figure 2</a>"
        );
    }

    #[test]
    fn unknown_label_links_to_itself() {
        assert_eq!(
            apply(r"\ref{sec:none}", &LabelIndex::default()),
            "<a href=\"#sec:none\">sec:none</a>"
        );
    }
}
