mod common;

use common::{coverage, create_engine, visible_text, TestResult};
use kumihan::{LayoutConfig, RunInstruction, StyleModifier};

#[test]
fn test_ruby_annotations_follow_their_base() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = create_engine();
    let stream = [RunInstruction::Ruby {
        base: "漢字".to_string(),
        text: "かんじ".to_string(),
    }];
    let lines = engine.layout(&stream, 100.0, None)?;
    assert_eq!(lines.len(), 1);
    assert_eq!(visible_text(&lines[0]), "漢字");

    // Each base glyph is followed by its ruby sub-glyphs.
    let kinds: Vec<(Option<char>, bool)> = lines[0]
        .glyphs
        .iter()
        .map(|p| (p.glyph.ch(), p.is_ruby))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (Some('漢'), false),
            (Some('か'), true),
            (Some('ん'), true),
            (Some('字'), false),
            (Some('じ'), true),
        ]
    );
    Ok(())
}

#[test]
fn test_ruby_pairs_never_split() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = create_engine();
    let stream = [
        RunInstruction::text("あい"),
        RunInstruction::Ruby {
            base: "漢".to_string(),
            text: "かん".to_string(),
        },
    ];
    // Budget fits あい plus the bare 漢 but not the whole group.
    let lines = engine.layout(&stream, 25.0, None)?;
    assert_eq!(lines.len(), 2);
    assert_eq!(visible_text(&lines[0]), "あい");
    assert_eq!(visible_text(&lines[1]), "漢");
    let line2_ruby = lines[1].glyphs.iter().filter(|p| p.is_ruby).count();
    assert_eq!(line2_ruby, 2);
    Ok(())
}

#[test]
fn test_ruby_raise_and_scale_come_from_the_scope() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = create_engine().with_config(LayoutConfig {
        base_font_size: 10.0,
        base_ruby: kumihan::RubyStyle {
            offset: 8.0,
            scale: 0.5,
        },
        ..Default::default()
    });
    let stream = [RunInstruction::Ruby {
        base: "漢".to_string(),
        text: "かん".to_string(),
    }];
    let lines = engine.layout(&stream, 100.0, None)?;

    let ruby: Vec<_> = lines[0].glyphs.iter().filter(|p| p.is_ruby).collect();
    assert_eq!(ruby.len(), 2);
    for placement in &ruby {
        // Raised above the baseline, at half the main size.
        assert_eq!(placement.offset.y, -8.0);
        assert_eq!(placement.glyph.font().unwrap().font_size, 5.0);
    }
    // かん at 5pt each, centered over the 10pt base: starts at x = 0.
    assert_eq!(ruby[0].offset.x, 0.0);
    assert_eq!(ruby[1].offset.x, 5.0);
    Ok(())
}

#[test]
fn test_wide_ruby_widens_its_group() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = create_engine();
    // One base glyph (10pt) under five ruby glyphs (5 × 5 = 25pt): the
    // group advances by the ruby width.
    let stream = [RunInstruction::Ruby {
        base: "万".to_string(),
        text: "よろずよに".to_string(),
    }];
    let lines = engine.layout(&stream, 100.0, None)?;
    assert_eq!(lines[0].width, 25.0);

    // The base glyph centers under its wider ruby run.
    let main = lines[0].glyphs.iter().find(|p| !p.is_ruby).unwrap();
    assert_eq!(main.offset.x, 7.5);
    Ok(())
}

#[test]
fn test_styled_span_inside_paragraph_keeps_its_style() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = create_engine();
    let stream = [
        RunInstruction::text("あ"),
        RunInstruction::PushStyle(StyleModifier::span().with_font_size(kumihan::Dimension::Pt(20.0))),
        RunInstruction::text("い"),
        RunInstruction::PopStyle,
        RunInstruction::text("う"),
    ];
    let lines = engine.layout(&stream, 100.0, None)?;
    assert_eq!(lines.len(), 1);
    // あ 10 + い 20 + う 10.
    assert_eq!(lines[0].width, 40.0);
    assert_eq!(coverage(&lines), "あいう");

    let big = lines[0]
        .glyphs
        .iter()
        .find(|p| p.glyph.ch() == Some('い'))
        .unwrap();
    assert_eq!(big.glyph.font().unwrap().font_size, 20.0);
    Ok(())
}

#[test]
fn test_shaped_glyph_offsets_displace_without_advancing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = create_engine();
    // Thai-style repositioning: the second character carries a render
    // offset from the shaping collaborator.
    let stream = [RunInstruction::Text {
        text: "ab".to_string(),
        offsets: Some(vec![(0.0, 0.0), (1.5, -3.0)]),
    }];
    let lines = engine.layout(&stream, 100.0, None)?;
    // Advances unchanged: 5 + 5.
    assert_eq!(lines[0].width, 10.0);

    let second = &lines[0].glyphs[1];
    assert_eq!(second.offset.x, 5.0 + 1.5);
    assert_eq!(second.offset.y, -3.0);
    Ok(())
}
