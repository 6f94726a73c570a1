//! Render overlay tests - caret, selection geometry and frame composition

mod common;

use common::light_config;
use lesson_editor::editable::{Position, SelectionRange};
use lesson_editor::messages::{Msg, UiMsg};
use lesson_editor::model::SurfaceModel;
use lesson_editor::overlay::{compose, CellMetrics, OverlayFrame, Rect, CARET_WIDTH_PX};
use lesson_editor::syntax::{HighlightClass, LanguageId};
use lesson_editor::theme::Theme;
use lesson_editor::update::update;

fn metrics() -> CellMetrics {
    CellMetrics::new(10.0, 20.0, 8.0)
}

fn frame(model: &SurfaceModel) -> OverlayFrame {
    compose(model, &metrics(), &Theme::default_light())
}

#[test]
fn test_caret_frame_without_selection() {
    let mut model = SurfaceModel::new(light_config("abc\ndef", LanguageId::PlainText));
    update(&mut model, Msg::set_selection(6, 6));

    let f = frame(&model);
    assert_eq!(f.caret_position, Some(Position::new(1, 2)));
    assert_eq!(f.caret, Some(Rect::new(28.0, 28.0, CARET_WIDTH_PX, 20.0)));
    assert!(f.selection.is_empty());
}

#[test]
fn test_selection_replaces_caret() {
    let mut model = SurfaceModel::new(light_config("abcd\nef\nghij", LanguageId::PlainText));
    update(&mut model, Msg::set_selection(9, 2));

    let f = frame(&model);
    assert_eq!(f.caret, None);
    assert_eq!(
        f.selection,
        vec![
            Rect::new(28.0, 8.0, 20.0, 20.0),
            Rect::new(8.0, 28.0, 20.0, 20.0),
            Rect::new(8.0, 48.0, 10.0, 20.0),
        ]
    );
    assert_eq!(f.selection_rows.len(), 3);
}

#[test]
fn test_read_only_hides_caret_and_selection() {
    let mut config = light_config("abc", LanguageId::PlainText);
    config.read_only = true;
    config.initial_selection = Some(SelectionRange::new(
        Position::new(0, 0),
        Position::new(0, 2),
    ));
    let model = SurfaceModel::new(config);

    let f = frame(&model);
    assert!(f.read_only);
    assert_eq!(f.caret, None);
    assert!(f.selection.is_empty());
    // The model still holds the selection
    assert_eq!(model.selected_text(), "ab");
}

#[test]
fn test_lines_carry_theme_colors() {
    let model = SurfaceModel::new(light_config("let x", LanguageId::JavaScript));
    let theme = Theme::default_light();
    let f = compose(&model, &metrics(), &theme);

    let span = &f.lines[0].spans[0];
    assert_eq!(span.text, "let");
    assert_eq!(span.class, Some(HighlightClass::Keyword));
    assert_eq!(span.color, theme.token_color(Some(HighlightClass::Keyword)));
    assert_eq!(f.lines[0].spans[1].color, theme.editor.foreground);
}

#[test]
fn test_span_columns_count_characters() {
    let model = SurfaceModel::new(light_config("const s = \"日本\"; x", LanguageId::JavaScript));
    let f = frame(&model);

    let spans = &f.lines[0].spans;
    let mut column = 0;
    for span in spans {
        assert_eq!(span.column, column, "span {:?}", span.text);
        column += span.text.chars().count();
    }
    assert_eq!(column, 17);
    let string = spans.iter().find(|s| s.text == "\"日本\"").unwrap();
    assert_eq!(string.column, 10);
    assert_eq!(spans.last().map(|s| s.column), Some(14));
}

#[test]
fn test_toolbar_label_uses_language_name() {
    let f = frame(&SurfaceModel::new(light_config("x", LanguageId::PlainText)));
    assert_eq!(f.toolbar.map(|t| t.label), Some("PLAIN TEXT".to_string()));

    let f = frame(&SurfaceModel::new(light_config("x", LanguageId::TypeScript)));
    assert_eq!(f.toolbar.map(|t| t.label), Some("TYPESCRIPT".to_string()));
}

#[test]
fn test_gutter_toolbar_and_highlighted_lines() {
    let mut config = light_config("a\nb\nc", LanguageId::Css);
    config.highlight_lines = vec![1];
    let f = frame(&SurfaceModel::new(config.clone()));

    assert_eq!(f.toolbar.as_ref().map(|t| t.label.as_str()), Some("CSS"));
    assert_eq!(f.code_origin_x(), 50.0);
    let numbers: Vec<usize> = f.lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    let highlighted: Vec<bool> = f.lines.iter().map(|l| l.highlighted).collect();
    assert_eq!(highlighted, vec![false, true, false]);

    config.line_numbers = false;
    config.show_toolbar = false;
    let bare = frame(&SurfaceModel::new(config));
    assert!(bare.gutter.is_none());
    assert!(bare.toolbar.is_none());
    assert_eq!(bare.code_origin_x(), 0.0);
}

#[test]
fn test_fullscreen_overrides_size() {
    let mut model = SurfaceModel::new(light_config("", LanguageId::PlainText));
    assert_eq!((frame(&model).width, frame(&model).height), ("100%".into(), "300px".into()));

    update(&mut model, Msg::Ui(UiMsg::ToggleFullscreen));
    let f = frame(&model);
    assert!(f.fullscreen);
    assert_eq!((f.width.as_str(), f.height.as_str()), ("100vw", "100vh"));
}

#[test]
fn test_frame_recomputes_after_edit() {
    let mut model = SurfaceModel::new(light_config("ab", LanguageId::PlainText));
    update(&mut model, Msg::set_selection(2, 2));
    update(&mut model, Msg::insert_text("\ncd"));

    let f = frame(&model);
    assert_eq!(f.lines.len(), 2);
    assert_eq!(f.caret_position, Some(Position::new(1, 2)));
}
