use blogify_engine::bibliography::{Bibliography, parse_bibtex};
use blogify_engine::{Author, Publication, convert};
use rstest::rstest;

const PAPER: &str = r"\documentclass[sigconf]{acmart}
\title{Evaluating AI-based Games through Retellings}
\subtitle{A Case Study}

\author{
  Max Kreminski
}

\begin{abstract}
Games are fun.
\end{abstract}

\maketitle

\section{Introduction}\label{sec:intro}
% TODO tighten this paragraph
Many games~\cite{ryan2015} use AI. % aside
As \autoref{fig:loop} shows, play is a loop.\footnote{Mostly \cite{smith}.}

\begin{figure}[t]
\includegraphics[width=\columnwidth]{figs/loop.png}
\caption{The play loop.}
\label{fig:loop}
\end{figure}

\begin{itemize}
\item First point.
\item Second point.
\end{itemize}

\iffalse
\section{Cut}
\fi

\subsection{Method}
We follow \emph{Ryan} (see Section~\ref{sec:intro}).

\begin{thebibliography}{9}
\bibitem{smith} J. Smith. \newblock \emph{A Book}. 2001.
\end{thebibliography}
";

const BIBTEX: &str = "@inproceedings{ryan2015,
  author = {Ryan, James},
  title = {Toward Characters},
  year = {2015},
  booktitle = {AIIDE},
}
";

fn render(markup: &str) -> String {
    let mut bibliography = Bibliography::new();
    for entry in parse_bibtex(BIBTEX).unwrap() {
        bibliography.insert(entry);
    }
    convert(markup, &mut bibliography, &Publication::default()).unwrap()
}

#[test]
fn paper_renders_to_page() {
    let html = render(PAPER);

    assert!(html.contains("<h1>Evaluating AI-based Games through Retellings: A Case Study</h1>"));
    assert!(html.contains("<h2 id=\"introduction\">Introduction</h2>"));
    assert!(html.contains("<h3 id=\"method\">Method</h3>"));
    assert!(html.contains("<p>Games are fun.</p>"));
    assert!(html.contains("Many games&nbsp;[<a href=\"#ref_ryan2015\">1</a>] use AI."));
    assert!(html.contains("As <a href=\"#fig:loop\">Figure 1</a> shows"));
    assert!(html.contains("<ul>\n<li>First point.</li>\n<li>Second point.</li>\n</ul>"));
    assert!(html.contains("<div class=\"figure\" id=\"fig:loop\">"));
    assert!(html.contains("<p class=\"caption\">Figure 1: The play loop.</p>"));
    assert!(html.contains("We follow <em>Ryan</em>"));
    assert!(html.contains("<a href=\"#introduction\">Introduction</a>"));
}

#[test]
fn dropped_regions_do_not_leak() {
    let html = render(PAPER);

    for gone in ["TODO", "aside", "Cut", "Max Kreminski", "documentclass", "maketitle"] {
        assert!(!html.contains(gone), "`{gone}` leaked into the page");
    }
}

#[test]
fn references_follow_citation_order() {
    let html = render(PAPER);

    let ryan = html
        .find("<p class=\"ref\" id=\"ref_ryan2015\">[1] James Ryan. 2015.")
        .expect("file-sourced reference");
    let smith = html
        .find("<p class=\"ref\" id=\"ref_smith\">[2] J. Smith.")
        .expect("footnote citation reaches the references");
    assert!(ryan < smith);
    assert!(html.contains("<em>AIIDE</em>.</p>"));
    assert!(html.contains("<li id=\"fn_1\">Mostly [<a href=\"#ref_smith\">2</a>]."));
}

#[test]
fn metadata_fills_the_header() {
    let publication = Publication {
        authors: vec![Author::new("Max Kreminski")],
        pdf: Some("paper.pdf".to_string()),
        ..Publication::default()
    };
    let html = convert("\\title{T}\n", &mut Bibliography::new(), &publication).unwrap();

    assert!(html.contains("<div class=\"authors\">Max Kreminski</div>"));
    assert!(html.contains("<a href=\"paper.pdf\">PDF</a>"));
    assert!(!html.contains("Presented at"));
    assert!(!html.contains("How to cite"));
}

#[rstest]
#[case(r"\section{Results}", "<h2 id=\"results\">Results</h2>")]
#[case(r"\subsubsection{Players' Stories}", "<h4 id=\"players-stories\">Players’ Stories</h4>")]
#[case("\\begin{verbatim}\na < b\n\\end{verbatim}", "<pre>a &lt; b</pre>")]
#[case("\\begin{quote}\nSaid.\n\\end{quote}", "<blockquote>\nSaid.\n</blockquote>")]
#[case(r"Some \mystery{Games} rule", "<p>Some Games rule</p>")]
#[case("\\begin{quotation}\nPlay.\n\\end{quotation}", "<blockquote>\nPlay.\n</blockquote>")]
#[case(
    "\\begin{enumerate}\n\\item one\n\\item two\n\\end{enumerate}",
    "<ol>\n<li>one</li>\n<li>two</li>\n</ol>"
)]
#[case("\\begin{acks}\nThanks.\n\\end{acks}", "<h4>Acknowledgements</h4>\n<p>Thanks.</p>")]
#[case(
    "\\begin{table}\n\\begin{tabular}{ll}\na & b \\\\\n\\end{tabular}\n\\end{table}",
    "<table>\n<tr><td>a</td><td>b</td></tr>\n</table>"
)]
#[case(
    "\\begin{figure}\n\\label{fig:loop}\n\\end{figure}\n\\Cref{fig:loop} shows the loop.",
    "<p><a href=\"#fig:loop\">Figure 1</a> shows the loop.</p>"
)]
#[case(r"\textsl{Slanted} play", "<p><em>Slanted</em> play</p>")]
#[case(r#"\"Uber games"#, "<p>Über games</p>")]
#[case(r"\cite{foo} and \cite{foo}", "<p>[<a href=\"#ref_foo\">1</a>] and [<a href=\"#ref_foo\">1</a>]</p>")]
fn markup_fragments(#[case] markup: &str, #[case] expected: &str) {
    let html = render(markup);
    assert!(html.contains(expected), "missing {expected:?} in:\n{html}");
}
