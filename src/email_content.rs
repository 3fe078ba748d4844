use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

// Subtrees whose text never belongs in an email preview.
const SKIPPED_TAGS: [&str; 5] = ["meta", "style", "script", "img", "link"];

// Reduce a raw HTML message body to plain text: text of the body element
// only, skipped subtrees removed, whitespace runs collapsed to single spaces.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let Ok(body_selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let mut raw = String::new();
    collect_text(*body, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            out.push_str(&text);
            // Keep adjacent text runs from fusing across element boundaries.
            out.push(' ');
        }
        Node::Element(element) => {
            if SKIPPED_TAGS.contains(&element.name()) {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
        }
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_whitespace() {
        let html = "<html><head><style>x</style></head><body>Hello&nbsp;<b>World</b>\n\n  Test</body></html>";
        assert_eq!(html_to_text(html), "Hello World Test");
    }

    #[test]
    fn test_skips_script_and_style_content() {
        let html = "<html><head><script>alert('x')</script><style>.a{color:red}</style></head>\
                    <body><p>Visible</p><script>hidden()</script></body></html>";
        assert_eq!(html_to_text(html), "Visible");
    }

    #[test]
    fn test_skips_images_and_links() {
        let html = "<body><link rel=\"stylesheet\" href=\"a.css\"><img src=\"pixel.gif\" alt=\"tracker\">Offer inside</body>";
        assert_eq!(html_to_text(html), "Offer inside");
    }

    #[test]
    fn test_bare_fragment_still_yields_body_text() {
        // html5ever wraps fragments in html/body on its own
        assert_eq!(html_to_text("plain   text"), "plain text");
    }

    #[test]
    fn test_head_only_content_is_excluded() {
        let html = "<html><head><title>Subject line</title></head><body></body></html>";
        assert_eq!(html_to_text(html), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_nested_markup() {
        let html = "<body><div><p>One</p><p>Two <em>three</em></p></div></body>";
        assert_eq!(html_to_text(html), "One Two three");
    }
}
