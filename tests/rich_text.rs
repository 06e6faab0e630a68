#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use irodori::{
    Color, FixedMetrics, FontSystem, IndexKind, RichText, RichTextConfig, RichTextError, TextStyle,
    renderer::DrawRecorder,
    text::{LineWidthPolicy, Point, Size, Transform},
};

fn metrics() -> FixedMetrics {
    // one unit per character at size 10, lines 15 tall
    FixedMetrics::new(0.1, 1.5)
}

fn config(policy: LineWidthPolicy) -> RichTextConfig {
    RichTextConfig {
        character_size: 10,
        line_width_policy: policy,
        ..Default::default()
    }
}

#[test]
fn hi_then_red_bang() {
    let mut text = RichText::new(metrics());
    text.append("Hi");
    text.with_color(Color::RED);
    text.append("!");

    let line = text.line(0).unwrap();
    let runs: Vec<_> = line
        .runs()
        .iter()
        .map(|run| (run.content(), run.fill_color()))
        .collect();
    assert_eq!(runs, [("Hi", Color::WHITE), ("!", Color::RED)]);
    assert_eq!(text.character_color(0, 2).unwrap(), Color::RED);
    assert_eq!(text.character_color(0, 0).unwrap(), Color::WHITE);
}

#[test]
fn styled_paragraph_round_trip() {
    let mut text = RichText::with_config(metrics(), config(LineWidthPolicy::Accumulate));
    text.append("Title\n")
        .with_style(TextStyle::ITALIC)
        .append("body ")
        .with_color(Color::CYAN)
        .append("link");

    assert_eq!(text.line_count(), 2);
    assert_eq!(text.line_content(0).unwrap(), "Title");
    assert_eq!(text.line_content(1).unwrap(), "body link");
    assert_eq!(text.character_style(0, 0).unwrap(), TextStyle::REGULAR);
    assert_eq!(text.character_style(1, 0).unwrap(), TextStyle::ITALIC);
    assert_eq!(text.character_color(1, 5).unwrap(), Color::CYAN);
    assert_eq!(text.local_bounds().size, Size::new(9.0, 30.0));

    text.set_character_style(1, 2, TextStyle::BOLD | TextStyle::UNDERLINED)
        .unwrap();
    text.set_character(0, 0, "t").unwrap();

    assert_eq!(text.line_content(0).unwrap(), "title");
    assert_eq!(
        text.character_style(1, 2).unwrap(),
        TextStyle::BOLD | TextStyle::UNDERLINED
    );
    assert_eq!(text.character_style(1, 1).unwrap(), TextStyle::ITALIC);
    assert_eq!(text.character_count(1).unwrap(), 9);
    assert_eq!(text.local_bounds().size, Size::new(9.0, 30.0));
}

#[test]
fn legacy_width_tracks_last_run() {
    let mut text = RichText::with_config(metrics(), config(LineWidthPolicy::LastRun));
    text.append("abcdef").with_color(Color::RED).append("g");

    // the block keeps the widest line, and that line reports only "g"
    assert_eq!(text.line(0).unwrap().width(), 1.0);
    assert_eq!(text.local_bounds().size.width, 1.0);

    text.append("\nxyz");
    assert_eq!(text.local_bounds().size, Size::new(3.0, 30.0));
}

#[test]
fn errors_name_the_bad_index() {
    let mut text = RichText::new(metrics());
    text.append("abc");

    assert_eq!(
        text.character(0, 3),
        Err(RichTextError::IndexOutOfRange {
            kind: IndexKind::Character,
            index: 3,
            len: 3,
        })
    );
    assert_eq!(
        text.character(2, 0),
        Err(RichTextError::IndexOutOfRange {
            kind: IndexKind::Line,
            index: 2,
            len: 1,
        })
    );
}

#[test]
fn draw_visits_every_run_in_order() {
    let mut text = RichText::with_config(metrics(), config(LineWidthPolicy::Accumulate));
    text.append("ab").with_color(Color::RED).append("c\nd");
    text.set_character_color(0, 0, Color::BLUE).unwrap();

    let mut recorder = DrawRecorder::new();
    text.draw(&mut recorder, &Transform::translation(100.0, 0.0));

    let drawn: Vec<_> = recorder
        .commands
        .iter()
        .map(|command| {
            (
                command.content.as_str(),
                command.formatting.fill,
                command.transform.transform_point(Point::origin()),
            )
        })
        .collect();

    assert_eq!(
        drawn,
        [
            ("a", Color::BLUE, Point::new(100.0, 0.0)),
            ("b", Color::WHITE, Point::new(101.0, 0.0)),
            ("c", Color::RED, Point::new(102.0, 0.0)),
            ("d", Color::RED, Point::new(100.0, 15.0)),
        ]
    );
}

#[test]
fn font_system_without_fonts_measures_nothing() {
    let font_system = Arc::new(FontSystem::new());
    let mut text = RichText::new(Arc::clone(&font_system));
    text.append("no font\nloaded");

    assert_eq!(text.line_count(), 2);
    assert_eq!(text.local_bounds().size, Size::zero());
    assert_eq!(text.character(1, 0).unwrap(), 'l');
}
