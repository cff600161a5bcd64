use pretty_assertions::assert_eq;
use vecstyle_engine::style;
use vecstyle_engine::style::{StyleAttributes, StyleValue};
use vecstyle_engine::text::{CompilerOptions, LogWarnings, Paragraph, Run, TextStyleCompiler};

fn body() -> StyleAttributes {
    style! {
        "font-family" => "georgia,serif",
        "font-size" => "16px",
        "line-height" => "22px",
        "color" => "rgb(0,0,0)",
    }
}

fn caption() -> StyleAttributes {
    style! {
        "font-family" => "georgia,serif",
        "font-size" => "12px",
        "line-height" => "22px",
        "color" => "rgb(102,102,102)",
    }
}

fn single_run(text: &str, style: StyleAttributes) -> Paragraph {
    Paragraph::from_runs(vec![Run::new(text, style.clone())], style)
}

#[test]
fn majority_style_becomes_base_and_minority_gets_a_class() {
    // 80 characters of body text, 20 of caption
    let paragraphs = vec![
        single_run(&"b".repeat(40), body()),
        single_run(&"c".repeat(20), caption()),
        single_run(&"b".repeat(40), body()),
    ];

    let out = TextStyleCompiler::default().compile(&paragraphs, &mut LogWarnings::new());

    assert_eq!(out.base_style.get("font-size"), Some(&StyleValue::from("16px")));
    let lines: Vec<_> = out.html.lines().collect();
    assert_eq!(lines[0], format!("<p>{}</p>", "b".repeat(40)));
    assert_eq!(lines[1], format!("<p class=\"g-pstyle0\">{}</p>", "c".repeat(20)));
    insta::assert_snapshot!(&out.css_rules[1], @r"
    .g-pstyle0 {
    	font-size:12px;
    	color:rgb(102,102,102);
    }
    ");
}

#[test]
fn single_empty_paragraph_renders_placeholder() {
    let out =
        TextStyleCompiler::default().compile(&[Paragraph::empty()], &mut LogWarnings::new());

    assert_eq!(out.html, "<p>&nbsp;</p>");
    assert_eq!(out.css_rules.len(), 1);
    assert!(out.css_rules[0].starts_with("p {\n"));
}

#[test]
fn empty_paragraph_never_outweighs_text() {
    let paragraphs = vec![
        Paragraph {
            style: caption(),
            ..Paragraph::empty()
        },
        single_run("short", body()),
    ];

    let out = TextStyleCompiler::default().compile(&paragraphs, &mut LogWarnings::new());

    assert_eq!(out.base_style.get("font-size"), Some(&StyleValue::from("16px")));
    assert_eq!(out.html, "<p>&nbsp;</p>\n<p>short</p>");
}

#[test]
fn identical_input_gives_identical_output() {
    let mixed = Paragraph::from_runs(
        vec![
            Run::new("Body with ", body()),
            Run::new("grey aside", caption()),
            Run::new(" inline.", body()),
        ],
        style! { "text-align" => "center" },
    );
    let paragraphs = vec![mixed, single_run("caption", caption())];
    let compiler = TextStyleCompiler::default();

    let first = compiler.compile(&paragraphs, &mut LogWarnings::new());
    let second = compiler.compile(&paragraphs, &mut LogWarnings::new());

    assert_eq!(first, second);
}

#[test]
fn namespace_and_placeholder_are_configurable() {
    let compiler = TextStyleCompiler::new(CompilerOptions {
        namespace: "chart-".to_string(),
        empty_paragraph_html: "<p class=\"blank\"></p>".to_string(),
        ..CompilerOptions::default()
    });
    let paragraphs = vec![
        single_run("body text", body()),
        Paragraph::empty(),
        single_run("cap", caption()),
    ];

    let out = compiler.compile(&paragraphs, &mut LogWarnings::new());

    assert_eq!(
        out.html,
        "<p>body text</p>\n<p class=\"blank\"></p>\n<p class=\"chart-pstyle0\">cap</p>"
    );
}

#[test]
fn warnings_reach_a_closure_sink() {
    let paragraph = Paragraph::from_runs(vec![Run::new("Typed <b>bold</b> text", body())], body());
    let mut seen: Vec<(String, Option<String>)> = Vec::new();
    let mut sink = |message: &str, key: Option<&str>| {
        seen.push((message.to_string(), key.map(str::to_string)));
    };

    let out = TextStyleCompiler::default().compile(&[paragraph], &mut sink);

    assert_eq!(out.html, "<p>Typed <b>bold</b> text</p>");
    assert_eq!(
        seen,
        vec![(
            "Found a <b> tag. Try using text formatting instead.".to_string(),
            Some("tag:b".to_string())
        )]
    );
}
