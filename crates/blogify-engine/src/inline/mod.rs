//! # Inline Transformation
//!
//! Rewrites the inline markup of one text-bearing node into HTML.
//!
//! ## Steps
//!
//! Order is significant; each step sees the output of the previous one.
//!
//! 0. HTML escaping of `&`, `<` and `>`
//! 1. Spans (`kinds::spans`): cross references, links, emphasis, strong,
//!    code, no-wrap and small caps
//! 2. Footnotes (`kinds::footnote`): bodies move to the `FootnoteRegistry`
//! 3. Citations (`kinds::citation`): keys get ids in the `CitationRegistry`
//! 4. Typography (`kinds::typography`): accents, quotes, dashes, spaces
//! 5. Fallback (`kinds::fallback`): unknown commands degrade to their argument
//!
//! Step 5 strips every backslash left in the text, including one an earlier
//! step produced on purpose.
//!
//! ## Modules
//!
//! - **`commands`**: brace-aware `\name[opt]{arg}` rewriting
//! - **`registry`**: `CitationRegistry` and `FootnoteRegistry`
//! - **`context`**: `RenderContext` carrying both registries and the label index

pub mod commands;
pub mod context;
pub mod kinds;
pub mod registry;

pub use context::RenderContext;
pub use registry::{CitationRegistry, FootnoteRegistry};

/// Escapes and transforms raw markup text.
pub fn transform(text: &str, cx: &mut RenderContext<'_>) -> String {
    transform_markup(&html_escape::encode_text(text), cx)
}

/// Transforms text that is already HTML-escaped, such as a footnote body
/// taken out of escaped text.
pub fn transform_markup(text: &str, cx: &mut RenderContext<'_>) -> String {
    let text = kinds::spans::apply(text, cx.labels);
    let text = kinds::footnote::extract(&text, &mut cx.footnotes);
    let text = kinds::citation::resolve(&text, &mut cx.citations);
    let text = kinds::typography::apply(&text);
    kinds::fallback::apply(&text)
}

/// Markup reduced to its text, for slugs and cross-reference names.
///
/// Accents are folded and the fallback step runs: no escaping, no registries.
pub fn plain_text(text: &str) -> String {
    kinds::fallback::apply(&kinds::typography::fold_accents(text))
        .trim()
        .to_string()
}

/// Escapes a value for a double-quoted HTML attribute.
pub fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
