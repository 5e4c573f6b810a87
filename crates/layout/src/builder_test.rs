#![cfg(test)]

use crate::builder::GlyphSpec;
use crate::test_utils::{build_lines, create_test_builder};
use kumihan_stream::RunInstruction;
use kumihan_style::dimension::Margins;
use kumihan_style::modifier::StyleModifier;
use kumihan_style::text::{LetterCase, TextAlign};

#[test]
fn plain_runs_take_the_fast_path_of_singleton_zones() {
    let lines = build_lines(&[RunInstruction::text("abc")]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].zone_count(), 3);
    for i in 0..3 {
        assert_eq!(lines[0].zone_at(i).len(), 1);
    }
}

#[test]
fn span_like_scopes_group_glyphs_into_one_zone() {
    let lines = build_lines(&[
        RunInstruction::text("a"),
        RunInstruction::PushStyle(StyleModifier::span()),
        RunInstruction::text("bcd"),
        RunInstruction::PopStyle,
        RunInstruction::text("e"),
    ]);
    let line = &lines[0];
    // a | bcd | e
    assert_eq!(line.zone_count(), 3);
    assert_eq!(line.zone_at(0).len(), 1);
    assert_eq!(line.zone_at(1).len(), 3);
    assert_eq!(line.zone_at(2).len(), 1);
}

#[test]
fn non_span_modifiers_do_not_open_a_zone() {
    let mut modifier = StyleModifier::default();
    modifier.letter_spacing = Some(2.0);
    let lines = build_lines(&[
        RunInstruction::PushStyle(modifier),
        RunInstruction::text("ab"),
        RunInstruction::PopStyle,
    ]);
    // Pure appearance change: glyphs stay individually breakable.
    assert_eq!(lines[0].zone_count(), 2);
    // But the styling applied: advance = base 5 + spacing 2.
    assert_eq!(lines[0].zone_at(0).first_glyph().advance(), 7.0);
}

#[test]
fn empty_spans_are_discarded_not_emitted() {
    let lines = build_lines(&[
        RunInstruction::PushStyle(StyleModifier::span()),
        RunInstruction::PopStyle,
    ]);
    assert_eq!(lines[0].zone_count(), 0);
}

#[test]
fn ruby_groups_carry_their_sub_glyphs() {
    let lines = build_lines(&[RunInstruction::Ruby {
        base: "漢".to_string(),
        text: "かん".to_string(),
    }]);
    let line = &lines[0];
    assert_eq!(line.zone_count(), 1);
    let zone = line.zone_at(0);
    assert_eq!(zone.len(), 1);
    let group = zone.group_at(0);
    assert_eq!(group.main().ch(), Some('漢'));
    assert_eq!(group.ruby().len(), 2);
    // Ruby glyphs render at half the main size (default scale 0.5).
    assert_eq!(group.ruby()[0].font().unwrap().font_size, 5.0);
}

#[test]
fn ruby_distributes_evenly_with_earlier_bases_taking_extras() {
    let lines = build_lines(&[RunInstruction::Ruby {
        base: "東京".to_string(),
        text: "とうきょう".to_string(),
    }]);
    let zone = lines[0].zone_at(0);
    assert_eq!(zone.len(), 2);
    // 5 ruby over 2 bases: 3 + 2.
    assert_eq!(zone.group_at(0).ruby().len(), 3);
    assert_eq!(zone.group_at(1).ruby().len(), 2);
}

#[test]
fn explicit_breaks_inside_spans_are_ignored() {
    let lines = build_lines(&[
        RunInstruction::PushStyle(StyleModifier::span()),
        RunInstruction::text("ab"),
        RunInstruction::LineBreak,
        RunInstruction::text("cd"),
        RunInstruction::PopStyle,
    ]);
    // The break was illegal inside the zone: one line, one 4-glyph zone.
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].zone_count(), 1);
    assert_eq!(lines[0].zone_at(0).len(), 4);
}

#[test]
fn line_breaks_delimit_paragraph_lines() {
    let lines = build_lines(&[
        RunInstruction::text("ab"),
        RunInstruction::LineBreak,
        RunInstruction::text("cd"),
    ]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].zone_count(), 2);
    assert_eq!(lines[1].zone_count(), 2);
}

#[test]
fn letter_case_applies_at_glyph_creation() {
    let lines = build_lines(&[
        RunInstruction::PushStyle(StyleModifier::default().with_letter_case(LetterCase::Upper)),
        RunInstruction::text("ab"),
        RunInstruction::PopStyle,
    ]);
    assert_eq!(lines[0].zone_at(0).first_glyph().ch(), Some('A'));
    assert_eq!(lines[0].zone_at(1).first_glyph().ch(), Some('B'));
}

#[test]
fn inline_images_advance_by_box_plus_margins() {
    let lines = build_lines(&[RunInstruction::InlineImage {
        width: 20.0,
        height: 10.0,
        margins: Margins::x(3.0),
        offset_y: -2.0,
    }]);
    let glyph = lines[0].zone_at(0).first_glyph();
    assert_eq!(glyph.advance(), 26.0);
    assert!(!glyph.is_whitespace_or_control());
}

#[test]
fn alignment_and_bidi_markers_pass_through_without_structure_changes() {
    let lines = build_lines(&[
        RunInstruction::Align(TextAlign::Center),
        RunInstruction::text("ab"),
        RunInstruction::BidiOverride { force_ltr: true },
        RunInstruction::LineBreak,
        RunInstruction::text("cd"),
    ]);
    assert_eq!(lines[0].align, TextAlign::Center);
    assert_eq!(lines[0].force_ltr, Some(true));
    // Markers carried onto the following line as current state.
    assert_eq!(lines[1].align, TextAlign::Center);
    // Structure unchanged: two singleton zones each.
    assert_eq!(lines[0].zone_count(), 2);
    assert_eq!(lines[1].zone_count(), 2);
}

#[test]
fn build_is_a_snapshot_and_accumulation_continues() {
    let mut builder = create_test_builder();
    builder.process(&RunInstruction::text("ab"));
    let snapshot = builder.build();
    assert_eq!(snapshot[0].zone_count(), 2);

    builder.process(&RunInstruction::text("cd"));
    let later = builder.build();
    // The earlier snapshot is unchanged; the builder kept accumulating.
    assert_eq!(snapshot[0].zone_count(), 2);
    assert_eq!(later[0].zone_count(), 4);
}

#[test]
fn total_width_applies_edge_treatment() {
    // 「 あ い ␣: the leading 「 counts half an em (5) and the trailing
    // space counts nothing: 5 + 10 + 10 = 25.
    let lines = build_lines(&[RunInstruction::text("「あい ")]);
    assert_eq!(lines[0].total_width(), 25.0);
}

#[test]
fn ruby_glyphs_outside_a_ruby_scope_are_dropped() {
    let mut builder = create_test_builder();
    builder.add_ruby_glyph('か');
    builder.add_main_glyph(GlyphSpec::Char {
        ch: 'あ',
        render_offset: None,
    });
    let lines = builder.build();
    assert_eq!(lines[0].zone_count(), 1);
    assert!(lines[0].zone_at(0).group_at(0).ruby().is_empty());
}
