//! # HTML to text extraction
//!
//! Turns a rendered HTML page into compact, linear, markdown-flavored text.
//! Links and images survive as `[text](href)` and `![alt](src)`; everything
//! else is reduced to its text.
//!
//! ## Stages
//! - `preprocess`: drops non-content subtrees (scripts, styles, page chrome)
//! - `walker`: depth-first traversal emitting text, link and image tokens
//! - `normalize`: caps blank-line runs and trims the result
//!
//! `dom` holds the owned tree the stages run over.

pub mod dom;
pub mod normalize;
pub mod preprocess;
pub mod walker;

pub use dom::Document;
pub use preprocess::Denylist;

/// Convert HTML to text using the given denylist
pub fn html_to_text(html: &str, denylist: &Denylist) -> String {
    document_to_text(Document::parse(html), denylist)
}

/// Run the pipeline over an already parsed document
pub fn document_to_text(mut document: Document, denylist: &Denylist) -> String {
    let removed = preprocess::strip(&mut document, denylist);
    let raw = document
        .content_root()
        .map(walker::extract)
        .unwrap_or_default();
    tracing::debug!(
        removed_subtrees = removed,
        raw_len = raw.len(),
        "extracted text from document"
    );
    normalize::normalize(&raw)
}

/// Stateless extraction pipeline bound to one denylist
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    denylist: Denylist,
}

impl Extractor {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn extract_html(&self, html: &str) -> String {
        html_to_text(html, &self.denylist)
    }

    pub fn extract_document(&self, document: Document) -> String {
        document_to_text(document, &self.denylist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(html: &str) -> String {
        Extractor::default().extract_html(html)
    }

    #[test]
    fn test_denylisted_text_never_leaks() {
        let html = r#"
            <header><h1>Site name</h1><nav><a href="/">Home</a></nav></header>
            <main>
              <article>
                <p>Body text with <a href="/more">a link</a>.</p>
                <aside>Related <span>sidebar</span></aside>
                <div><noscript>enable js</noscript><style>.x{}</style>kept</div>
              </article>
            </main>
            <footer>Copyright</footer>
            <script>track()</script>
        "#;

        let out = text(html);

        for leaked in ["Site name", "Home", "sidebar", "Related", "enable js", ".x{}", "Copyright", "track()"] {
            assert!(!out.contains(leaked), "{leaked:?} leaked into {out:?}");
        }
        assert!(out.starts_with("Body text with [a link](/more)."));
        assert!(out.ends_with("\nkept"));
    }

    #[test]
    fn test_extra_denylist_tags() {
        let extractor = Extractor::new(Denylist::with_extra(["form"]));
        let out = extractor.extract_html("<p>keep</p><form><label>Email</label></form>");

        assert_eq!(out, "keep");
    }

    #[test]
    fn test_stripped_body_yields_nothing() {
        let extractor = Extractor::new(Denylist::with_extra(["body"]));
        let html = "<html><head><title>Secret title</title></head><body><p>x</p></body></html>";

        assert_eq!(extractor.extract_html(html), "");
    }

    #[test]
    fn test_stripped_html_root_yields_nothing() {
        let extractor = Extractor::new(Denylist::with_extra(["HTML"]));

        assert_eq!(extractor.extract_html("<title>t</title><p>x</p>"), "");
    }

    #[test]
    fn test_uppercase_markup() {
        assert_eq!(
            text(r#"<DIV><A HREF="/x">X</A><IMG ALT="i" SRC="/i"></DIV><SCRIPT>no</SCRIPT>"#),
            "[X](/x)![i](/i)"
        );
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        assert_eq!(text("<p>one<p>two<div>three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(text(""), "");
        assert_eq!(text("<script>only()</script>"), "");
    }
}
