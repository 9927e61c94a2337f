/// The closed set of multi-line environments the tokenizer captures.
///
/// Any other `\begin{...}` line is not an environment as far as the tokenizer
/// is concerned: it becomes a one-line command and its body becomes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// `acks`: acknowledgements.
    Acks,
    /// `CCSXML`: ACM structured classification markup.
    CcsXml,
    /// `enumerate`: ordered list.
    Enumerate,
    /// `figure`: image with caption and label.
    Figure,
    /// `itemize`: unordered list.
    Itemize,
    /// `quotation`: block quotation.
    Quotation,
    /// `quote`: short block quotation.
    Quote,
    /// `verbatim`: preformatted text.
    Verbatim,
    /// `table`: tabular data with caption and label.
    Table,
    /// `thebibliography`: references written inline in the document.
    Bibliography,
}

impl Environment {
    /// Every recognised environment.
    pub const ALL: [Environment; 10] = [
        Environment::Acks,
        Environment::CcsXml,
        Environment::Enumerate,
        Environment::Figure,
        Environment::Itemize,
        Environment::Quotation,
        Environment::Quote,
        Environment::Verbatim,
        Environment::Table,
        Environment::Bibliography,
    ];

    /// The `\begin{...}` prefix every opening line starts with.
    pub const BEGIN: &'static str = "\\begin{";

    /// The environment name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            Environment::Acks => "acks",
            Environment::CcsXml => "CCSXML",
            Environment::Enumerate => "enumerate",
            Environment::Figure => "figure",
            Environment::Itemize => "itemize",
            Environment::Quotation => "quotation",
            Environment::Quote => "quote",
            Environment::Verbatim => "verbatim",
            Environment::Table => "table",
            Environment::Bibliography => "thebibliography",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.name() == name)
    }

    /// Detects `\begin{name}` or `\begin{name*}` at the start of a line.
    ///
    /// Leading indentation is allowed; trailing options such as `[t]` or
    /// `{99}` are ignored. Returns the environment and whether it is starred.
    pub fn open(line: &str) -> Option<(Self, bool)> {
        let rest = line.trim_start().strip_prefix(Self::BEGIN)?;
        let name = &rest[..rest.find('}')?];
        let (name, starred) = match name.strip_suffix('*') {
            Some(base) => (base, true),
            None => (name, false),
        };
        Self::from_name(name).map(|env| (env, starred))
    }

    /// The line that closes this environment: `\end{name}` or `\end{name*}`.
    pub fn end_marker(self, starred: bool) -> String {
        let star = if starred { "*" } else { "" };
        format!("\\end{{{}{star}}}", self.name())
    }
}
