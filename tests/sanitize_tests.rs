// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use std::io::Write;

use htmlguard::{parse_fragment, sanitize, PolicyTable, Sanitizer, SanitizerConfig};

/// Hostile and benign fragments exercised by the property tests
const CORPUS: &[&str] = &[
    "plain text",
    "<p>a<!--x-->b</p>",
    "<script>alert(1)</script>",
    "<script>if (a < b && c) {}</script>",
    "<a href=\"javascript:alert(1)\" onclick=\"evil()\">t</a>",
    "<a href=\"https://example.com\" title=\"it's\" target=\"_blank\">ok</a>",
    "<img src=x onerror=alert(1)>",
    "<img src=\"https://example.com/a.png\" alt=\"a\" style=\"padding: 0; float: left\">",
    "<p style='border: 1px solid red; color: blue; margin: 0 !important'>x</p>",
    "<div><b>1</b><i>2</i></div>",
    "<b><i>x</b>y</i>",
    "<p><div>block in paragraph</div></p>",
    "<table><tr><td onmouseover=x()>cell</td></tr></table>",
    "<svg><a xlink:href=\"javascript:x\"><text>svg</text></a></svg>",
    "<x-custom>a&amp;b</x-custom>",
    "<iframe src=\"https://evil.example\"></iframe>after",
    "<noscript><img src=x onerror=alert(1)></noscript>",
    "<style>body { background: url(javascript:x) }</style>",
    "a\u{a0}b &lt;not a tag&gt;",
    "<SPAN DIR=\"rtl\" LANG=\"ar\">upper</SPAN><BR>",
    "<p title=\"&quot;quoted&quot;\">q</p>",
    "</div><b>escape the container</b>",
    "<!-- <script>alert(1)</script> --><u>u</u>",
    "<form><input name=x></form><button>b</button>",
    "<a href=\"http://a\"><a href=\"http://b\">nested</a></a>",
    "<p style=\"border: 'abc\">x</p>",
    "<p style=\"border: 1px /* c\">x</p>",
    "<p style=\"border: url(x\">x</p>",
    "<p style=\"margin: 2px; border: 'x\">x</p>",
    "<p style=\"padding: 1px/**/solid; border: calc(1px + (2px\">x</p>",
];

fn assert_whitelisted(html: &str, policy: &PolicyTable) {
    let doc = parse_fragment(html).unwrap();
    for element in doc.elements() {
        let tag = element.local_name();
        let tag_policy = policy
            .tag(&tag)
            .unwrap_or_else(|| panic!("disallowed <{}> in {:?}", tag, html));

        for (name, _) in element.attributes() {
            if name == "style" {
                continue;
            }
            assert!(
                tag_policy.allows(&name),
                "disallowed attribute {} on <{}> in {:?}",
                name,
                tag,
                html
            );
        }
        for (property, _) in element.style() {
            assert!(
                policy.allows_css(&property),
                "disallowed css {} in {:?}",
                property,
                html
            );
        }
    }
}

#[test]
fn test_idempotence() {
    for input in CORPUS {
        let once = sanitize(input).unwrap();
        let twice = sanitize(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_idempotence_strip_mode() {
    let sanitizer = Sanitizer::new(SanitizerConfig::stripping());
    for input in CORPUS {
        let once = sanitizer.sanitize_string(input).unwrap();
        let twice = sanitizer.sanitize_string(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_whitelist_closure() {
    let policy = PolicyTable::default();
    for input in CORPUS {
        assert_whitelisted(&sanitize(input).unwrap(), &policy);
    }
}

#[test]
fn test_whitelist_closure_custom_policy() {
    let sanitizer = Sanitizer::new(SanitizerConfig::new().css(["color"]).urls(["ftp://"]));
    for input in CORPUS {
        let out = sanitizer.sanitize_string(input).unwrap();
        assert_whitelisted(&out, sanitizer.policy());
    }
}

#[test]
fn test_url_enforcement() {
    assert_eq!(
        sanitize("<a href=\"javascript:alert(1)\">x</a>").unwrap(),
        "<a href=\"\">x</a>"
    );
    assert_eq!(
        sanitize("<a href=\"https://example.com\">x</a>").unwrap(),
        "<a href=\"https://example.com\">x</a>"
    );

    let ftp = Sanitizer::new(SanitizerConfig::new().urls(["ftp://"]));
    assert_eq!(
        ftp.sanitize_string("<a href=\"ftp://x\" ping=\"https://x\">x</a>").unwrap(),
        "<a href=\"ftp://x\" ping=\"\">x</a>"
    );
}

#[test]
fn test_comment_stripping() {
    assert_eq!(sanitize("<p>a<!--x-->b</p>").unwrap(), "<p>ab</p>");
}

#[test]
fn test_escape_neutralization() {
    let out = sanitize("<script>alert(1)</script>").unwrap();
    assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");

    // Re-parsing yields a single text node carrying the literal markup
    let doc = parse_fragment(&out).unwrap();
    assert!(doc.elements().is_empty());
    assert_eq!(doc.text_content(), "<script>alert(1)</script>");
}

#[test]
fn test_unknown_tag_strip_mode() {
    let sanitizer = Sanitizer::new(SanitizerConfig::new().escape(false));
    assert_eq!(sanitizer.sanitize_string("<script>alert(1)</script>").unwrap(), "");
}

#[test]
fn test_attribute_filtering() {
    assert_eq!(
        sanitize("<a href=\"https://x\" onclick=\"evil()\">t</a>").unwrap(),
        "<a href=\"https://x\">t</a>"
    );
}

#[test]
fn test_order_preservation() {
    let out = sanitize("<div><b>1</b><i>2</i></div>").unwrap();
    let doc = parse_fragment(&out).unwrap();
    let names: Vec<_> = doc.elements().iter().map(|e| e.local_name()).collect();
    assert_eq!(names, vec!["div", "b", "i"]);
    assert_eq!(doc.text_content(), "12");
}

#[test]
fn test_release_notes() {
    let input = r#"<h2>v2.0</h2><p>Fixed <b>crash</b> on <a href="https://example.com/42" rel="noopener" onmouseover="steal()">#42</a>.<img src="javascript:x"></p>"#;
    assert_eq!(
        sanitize(input).unwrap(),
        "&lt;h2&gt;v2.0&lt;/h2&gt;<p>Fixed <b>crash</b> on <a href=\"https://example.com/42\" rel=\"noopener\">#42</a>.<img src=\"\"></p>"
    );
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"escape": false, "tags": {{"em": {{"title": "identity"}}}}}}"#
    )
    .unwrap();

    let config = SanitizerConfig::from_file(file.path()).unwrap();
    let sanitizer = Sanitizer::new(config);
    assert_eq!(
        sanitizer
            .sanitize_string("<em title=\"x\" class=\"y\">a</em><b>b</b>")
            .unwrap(),
        "<em title=\"x\">a</em>"
    );
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SanitizerConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(err.is_config());
}
