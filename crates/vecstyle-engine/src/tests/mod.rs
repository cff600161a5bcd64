//! Cross-module tests: raw frames through conversion and compilation, and
//! properties that must hold for any input.


use crate::convert::{
    BaselinePosition, Capitalization, CharacterAttributes, ConvertOptions, FillColor,
    FrameKind, Justification, ParagraphAttributes, RawCharacter, RawParagraph, RawTextFrame,
    TextFrameAttributes, import_paragraphs,
};
use crate::text::{CompiledText, LogWarnings, TextStyleCompiler};

pub(crate) fn characters(text: &str, font: &str, size: f64) -> Vec<RawCharacter> {
    let attributes = CharacterAttributes {
        font: Some(font.to_string()),
        size,
        fill: FillColor::Rgb {
            red: 0,
            green: 0,
            blue: 0,
        },
        capitalization: Capitalization::Normal,
        tracking: 0.0,
        baseline: BaselinePosition::Normal,
    };
    text.chars()
        .map(|c| RawCharacter {
            contents: c.to_string(),
            attributes: attributes.clone(),
        })
        .collect()
}

pub(crate) fn raw_paragraph(characters: Vec<RawCharacter>) -> RawParagraph {
    RawParagraph {
        characters,
        attributes: ParagraphAttributes {
            leading: 16.0,
            space_before: 0.0,
            space_after: 0.0,
            justification: Justification::Left,
        },
    }
}

fn compile_frame(frame: &RawTextFrame) -> (CompiledText, Vec<String>) {
    let paragraphs = import_paragraphs(frame, &ConvertOptions::default());
    let mut warnings = LogWarnings::new();
    let out = TextStyleCompiler::default().compile(&paragraphs, &mut warnings);
    (out, warnings.messages().to_vec())
}

#[test]
fn raw_frame_compiles_to_html_and_css() {
    let mut mixed = characters("Sales rose ", "ArialMT", 14.0);
    mixed.extend(characters("sharply", "Arial-BoldMT", 14.0));
    let frame = RawTextFrame {
        attributes: TextFrameAttributes {
            kind: FrameKind::Area,
            ..TextFrameAttributes::default()
        },
        paragraphs: vec![
            raw_paragraph(characters("Quarterly results", "Georgia-Bold", 20.0)),
            raw_paragraph(mixed),
            raw_paragraph(vec![]),
        ],
    };

    let (out, warnings) = compile_frame(&frame);

    assert!(warnings.is_empty());
    insta::assert_snapshot!(out.html, @r#"
    <p class="g-pstyle0">Quarterly results</p>
    <p>Sales rose <span class="g-cstyle0">sharply</span></p>
    <p>&nbsp;</p>
    "#);
    insta::assert_snapshot!(out.css_rules.concat(), @r"
    p {
    	font-family:arial,helvetica,sans-serif;
    	line-height:16px;
    	opacity:1;
    	letter-spacing:0em;
    	font-size:14px;
    	text-align:left;
    	color:rgb(0,0,0);
    	text-transform:none;
    	padding-bottom:0;
    	padding-top:0;
    	mix-blend-mode:normal;
    	font-style:normal;
    	font-weight:regular;
    	height:auto;
    	position:static;
    }
    .g-pstyle0 {
    	font-family:georgia,'times new roman',times,serif;
    	font-weight:bold;
    	font-size:20px;
    }
    .g-cstyle0 {
    	font-weight:bold;
    }
    ");
}

#[test]
fn unmapped_fonts_warn_once_with_a_sample() {
    let frame = RawTextFrame {
        attributes: TextFrameAttributes::default(),
        paragraphs: vec![
            raw_paragraph(characters("A headline set in an unusual typeface", "Futura", 18.0)),
            raw_paragraph(characters("again", "Futura", 18.0)),
        ],
    };

    let (_, warnings) = compile_frame(&frame);

    assert_eq!(
        warnings,
        vec![
            "Missing a rule for converting font: Futura. Sample text: A headline set in an unusual typefa"
                .to_string()
        ]
    );
}
