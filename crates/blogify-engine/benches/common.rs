// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_paper(sections: usize) -> String {
    let mut content = String::from("\\title{Benchmark Paper}\n\\subtitle{Generated}\n\n");

    for section in 0..sections {
        content.push_str(&format!("\\section{{Section {section}}}\\label{{sec:{section}}}\n"));
        content.push_str(&format!(
            "Paragraph text citing~\\cite{{key{section}}} with \\emph{{emphasis}} and ``quotes''.\n\
             It continues---with dashes---and a note.\\footnote{{See \\cite{{key0}}.}}\n\n"
        ));
        content.push_str("\\begin{itemize}\n\\item First\n\\item Second \\textbf{bold}\n\\end{itemize}\n\n");
        content.push_str(&format!(
            "\\begin{{figure}}\n\\includegraphics{{fig{section}.png}}\n\\caption{{Figure {section}.}}\n\\label{{fig:{section}}}\n\\end{{figure}}\n\n"
        ));
        content.push_str(&format!("As \\autoref{{fig:{section}}} and Section~\\ref{{sec:{section}}} show.\n\n"));
    }

    content
}

#[allow(dead_code)]
pub fn generate_bibtex(entries: usize) -> String {
    (0..entries)
        .map(|i| {
            format!(
                "@inproceedings{{key{i},\n  author = {{Last{i}, First and Other, Person}},\n  \
                 title = {{Paper {i}}},\n  booktitle = {{Proceedings}},\n  year = {{2019}},\n}}\n\n"
            )
        })
        .collect()
}
