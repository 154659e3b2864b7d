use super::error::SanitizerError;
use super::{extract_body, sanitize, Sanitizer};
use crate::config::TagConfig;
use crate::constants::{DEFAULT_PRESERVE_TAGS, DEFAULT_REMOVE_TAGS, MAX_REPLACEMENTS};

fn run_test(name: &str) {
    let _ = env_logger::builder().is_test(true).try_init();

    let xml = std::fs::read_to_string(format!("./resources/tests/{name}/source.xml"))
        .expect("Failed to read source XML");

    let text = Sanitizer::default().sanitize(&xml);

    // abuse line below to update all test results after a rule change
    // std::fs::write(format!("./resources/tests/{name}/expected.txt"), &text).unwrap();

    let expected = std::fs::read_to_string(format!("./resources/tests/{name}/expected.txt"))
        .expect("Failed to read expected text");

    assert_eq!(expected, text);
}

#[test]
fn plant_trichomes() {
    run_test("plant_trichomes")
}

#[test]
fn nested_figures() {
    run_test("nested_figures")
}

#[test]
fn missing_body() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sanitizer = Sanitizer::default();

    assert_eq!(sanitizer.sanitize("<article><front>x</front></article>"), "");
    assert_eq!(sanitizer.sanitize(""), "");
    assert_eq!(sanitizer.sanitize("<body attr=\"1\">x</body>"), "");
}

#[test]
fn body_markers() {
    assert_eq!(extract_body("<a><body>inner</body>tail</a>"), Some("inner"));
    assert_eq!(extract_body("<body>one</body><body>two</body>"), Some("one"));
    assert_eq!(extract_body("<body>no closing"), Some("no closing"));
    assert_eq!(extract_body("</body> before <body>after"), Some(""));
    assert_eq!(extract_body("no markers"), None);
}

#[test]
fn quick_fox() {
    let xml = r#"<body><p>The <bold>quick</bold> fox <xref rid="1">1</xref> jumped.</p></body>"#;
    let text = Sanitizer::default().sanitize(xml);

    assert_eq!(text, " The  quick  fox   jumped. ");
    for marker in ["<p>", "</p>", "<bold>", "</bold>", "<xref", "</xref>"] {
        assert!(!text.contains(marker));
    }
    assert!(!text.contains('1'));
}

#[test]
fn preserved_tags_keep_content() {
    let sanitizer = Sanitizer::default();

    for tag in DEFAULT_PRESERVE_TAGS {
        let xml = format!(r#"<body>before <{tag} attr="x">inner</{tag}> after</body>"#);
        let text = sanitizer.sanitize(&xml);

        assert!(text.contains("inner"), "{tag}: {text}");
        assert!(!text.contains(&format!("<{tag}")), "{tag}: {text}");
        assert!(!text.contains(&format!("</{tag}>")), "{tag}: {text}");
    }
}

#[test]
fn removed_tags_drop_content() {
    let sanitizer = Sanitizer::default();

    for tag in DEFAULT_REMOVE_TAGS {
        let xml = format!(r#"<body>before <{tag}>inner</{tag}> after</body>"#);
        let text = sanitizer.sanitize(&xml);

        assert_eq!(text, "before   after", "{tag}");
    }
}

#[test]
fn preserved_inside_removed() {
    let xml = "<body>a <fig><label>Figure 1</label><caption><p>kept?</p></caption></fig> b</body>";
    let text = Sanitizer::default().sanitize(xml);
    assert_eq!(text, "a   b");
}

#[test]
fn entity_references() {
    let sanitizer = Sanitizer::default();

    assert_eq!(sanitizer.strip_markup("a&#x02014;b"), "a b");
    assert_eq!(sanitizer.strip_markup("x&#x000a0;&#x000a0;y"), "x  y");
    assert_eq!(sanitizer.strip_markup("short &#x3e; stays"), "short &#x3e; stays");
    assert_eq!(sanitizer.strip_markup("decimal &#8212; stays"), "decimal &#8212; stays");
    assert_eq!(sanitizer.strip_markup("&amp;"), "&amp;");
}

#[test]
fn line_breaks_without_collapsing() {
    let sanitizer = Sanitizer::default();

    assert_eq!(sanitizer.strip_markup("a\n\nb"), "a  b");
    assert_eq!(sanitizer.strip_markup("a\r\nb"), "a\r b");
    assert_eq!(sanitizer.strip_markup("a   b"), "a   b");
}

#[test]
fn idempotent() {
    let sanitizer = Sanitizer::default();
    let xml = std::fs::read_to_string("./resources/tests/plant_trichomes/source.xml")
        .expect("Failed to read source XML");

    let once = sanitizer.sanitize(&xml);
    assert_eq!(sanitizer.strip_markup(&once), once);

    let rewrapped = format!("<body>{once}</body>");
    assert_eq!(sanitizer.sanitize(&rewrapped), once);
}

#[test]
fn non_text_input() {
    let sanitizer = Sanitizer::default();

    let res = sanitizer.sanitize_bytes(b"<body>\xff\xfe</body>");
    assert!(matches!(res, Err(SanitizerError::Utf8(_))));

    let res = sanitizer.sanitize_bytes("<body><p>ok</p></body>".as_bytes()).unwrap();
    assert_eq!(res, " ok ");
}

#[test]
fn custom_config() {
    let config = TagConfig::new(["p", "xref"], ["bold"]);
    let xml = r#"<body><p>The <bold>quick</bold> fox <xref rid="1">1</xref> jumped.</p></body>"#;

    let text = sanitize(xml, &config).unwrap();
    assert_eq!(text, " The   fox  1  jumped. ");

    let sanitizer = Sanitizer::new(config.clone()).unwrap();
    assert_eq!(sanitizer.config(), &config);
}

#[test]
fn invalid_config() {
    let res = Sanitizer::new(TagConfig::new(["<p>"], Vec::<String>::new()));
    assert!(matches!(res, Err(SanitizerError::InvalidTagName(tag)) if tag == "<p>"));

    let res = Sanitizer::new(TagConfig::new(["table wrap"], Vec::<String>::new()));
    assert!(matches!(res, Err(SanitizerError::InvalidTagName(_))));

    let res = Sanitizer::new(TagConfig::new([""], Vec::<String>::new()));
    assert!(matches!(res, Err(SanitizerError::InvalidTagName(_))));

    let res = Sanitizer::new(TagConfig::new(["p", "fig"], ["xref", "fig"]));
    assert!(matches!(res, Err(SanitizerError::OverlappingTag(tag)) if tag == "fig"));
}

#[test]
fn replacement_cap() {
    let _ = env_logger::builder().is_test(true).try_init();

    let sanitizer = Sanitizer::new(TagConfig::new(["bold"], Vec::<String>::new())).unwrap();
    let body = "<bold>".repeat(MAX_REPLACEMENTS + 1);
    let text = sanitizer.strip_markup(&body);

    assert_eq!(text, format!("{}<bold>", " ".repeat(MAX_REPLACEMENTS)));
}

#[test]
fn shared_between_threads() {
    let sanitizer = Sanitizer::default();
    let documents: Vec<String> = (0..8)
        .map(|i| format!("<body><p>document <italic>{i}</italic></p></body>"))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|document| scope.spawn(|| sanitizer.sanitize(document)))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let text = handle.join().unwrap();
            assert_eq!(text, format!(" document  {i}  "));
        }
    });
}
