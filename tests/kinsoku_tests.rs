mod common;

use common::{coverage, layout_text, visible_text, TestResult};

#[test]
fn test_closing_punctuation_never_starts_a_line() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // 20pt budget fits two full-width glyphs; the break before 」 is
    // prohibited, so い travels with it.
    let lines = layout_text("あい」う", 20.0)?;
    assert!(lines.len() >= 2);
    for line in &lines {
        let text = visible_text(line);
        assert!(
            !text.starts_with('」'),
            "line may not start with 」: {:?}",
            text
        );
    }
    Ok(())
}

#[test]
fn test_opening_punctuation_never_ends_a_line() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // 「 is prohibited at line end; a break directly after it must move it
    // to the next line instead.
    let lines = layout_text("あい「かき", 30.0)?;
    for line in &lines {
        let text = visible_text(line);
        assert!(
            !text.ends_with('「'),
            "line may not end with 「: {:?}",
            text
        );
    }
    assert_eq!(coverage(&lines), "あい「かき");
    Ok(())
}

#[test]
fn test_hangable_period_overflows_instead_of_wrapping() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let lines = layout_text("あい。", 20.0)?;
    assert_eq!(lines.len(), 1);
    assert_eq!(visible_text(&lines[0]), "あい。");
    assert!(lines[0].width > 20.0, "burasage exceeds the budget");
    Ok(())
}

#[test]
fn test_latin_words_wrap_at_spaces_only() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // "hello world" at 5pt per char; budget 40 cannot fit the second word.
    let lines = layout_text("hello world", 40.0)?;
    assert_eq!(lines.len(), 2);
    assert_eq!(visible_text(&lines[0]), "hello");
    assert_eq!(visible_text(&lines[1]), "world");
    Ok(())
}

#[test]
fn test_half_width_squeeze_converges_across_restarts() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // Two squeezes in one paragraph: 。」 and 、」. Each discovery restarts
    // the paragraph; the result must still cover every glyph once.
    let text = "「です。」と「ます、」の";
    let lines = layout_text(text, 1000.0)?;
    assert_eq!(coverage(&lines), text);

    let halved: Vec<char> = lines
        .iter()
        .flat_map(|l| l.glyphs.iter())
        .filter(|p| p.glyph.is_half_width())
        .filter_map(|p| p.glyph.ch())
        .collect();
    assert_eq!(halved, vec!['。', '、']);
    Ok(())
}

#[test]
fn test_every_budget_terminates_and_covers() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let text = "「こんにちは。」と言った、世界 hello です。";
    for budget in [0.0, 5.0, 10.0, 17.0, 25.0, 40.0, 80.0, 1000.0] {
        let lines = layout_text(text, budget)?;
        assert_eq!(coverage(&lines), text, "coverage at budget {}", budget);
        for line in &lines {
            assert!(
                !line.glyphs.is_empty(),
                "empty output line at budget {}",
                budget
            );
        }
    }
    Ok(())
}
