use markdown_it::{
    plugins::cmark::block::{heading::ATXHeading, lheading::SetextHeader},
    MarkdownIt,
};
use std::sync::OnceLock;

/// Renders article text to html. Raw html in the input is escaped, not passed through.
pub fn render_markdown(text: &str) -> String {
    static INSTANCE: OnceLock<MarkdownIt> = OnceLock::new();
    let mut parsed = INSTANCE.get_or_init(markdown_parser).parse(text);

    // Make markdown headings one level smaller, so that h1 becomes h2 etc, and markdown titles
    // are smaller than page title.
    parsed.walk_mut(|node, _| {
        if let Some(heading) = node.cast_mut::<ATXHeading>() {
            heading.level = (heading.level + 1).min(6);
        }
        if let Some(heading) = node.cast_mut::<SetextHeader>() {
            heading.level = (heading.level + 1).min(6);
        }
    });
    parsed.render()
}

fn markdown_parser() -> MarkdownIt {
    let mut parser = MarkdownIt::new();
    let p = &mut parser;
    {
        // Markdown-it inline core features. The html rule is left out so that user supplied
        // markup is escaped.
        use markdown_it::plugins::cmark::inline::*;
        newline::add(p);
        escape::add(p);
        backticks::add(p);
        emphasis::add(p);
        link::add(p);
        image::add(p);
        autolink::add(p);
        entity::add(p);
    }

    {
        // Markdown-it block core features. Unchanged from defaults.
        use markdown_it::plugins::cmark::block::*;
        code::add(p);
        fence::add(p);
        blockquote::add(p);
        hr::add(p);
        list::add(p);
        reference::add(p);
        heading::add(p);
        lheading::add(p);
        paragraph::add(p);
    }

    {
        use markdown_it::plugins::extra::*;
        strikethrough::add(p);
        tables::add(p);
        typographer::add(p);
    }

    markdown_it_heading_anchors::add(p);
    markdown_it_footnote::add(p);
    markdown_it_sub::add(p);
    markdown_it_sup::add(p);

    parser
}

#[test]
fn test_markdown_escapes_html() {
    let rendered = render_markdown("<script>alert('x')</script>");
    assert!(!rendered.contains("<script>"), "{rendered}");
    assert!(rendered.contains("&lt;script&gt;"), "{rendered}");
}

#[test]
fn test_markdown_heading_level_shift() {
    let rendered = render_markdown("# Dragons\n\ntext");
    assert!(rendered.contains("<h2"), "{rendered}");
    assert!(!rendered.contains("<h1"), "{rendered}");
    assert!(rendered.contains("Dragons"), "{rendered}");
    assert!(rendered.contains("</h2>"), "{rendered}");

    let rendered = render_markdown("###### Deep");
    assert!(rendered.contains("<h6"), "{rendered}");
}

#[test]
fn test_markdown_emphasis_and_strikethrough() {
    let rendered = render_markdown("It takes a **Jacobian** ~~or not~~");
    assert_eq!(
        "<p>It takes a <strong>Jacobian</strong> <s>or not</s></p>\n",
        rendered
    );
}
