//! Toolbar actions and the hint bubble

use std::time::Duration;

use crate::commands::{Cmd, HINT_DISMISS_MS};
use crate::messages::{Msg, UiMsg};
use crate::model::{HintKind, SurfaceModel};

pub fn update_ui(model: &mut SurfaceModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Copy => Some(Cmd::CopyToClipboard(model.copy_text())),

        UiMsg::CopyFinished { ok } => {
            let kind = if ok {
                HintKind::Copied
            } else {
                HintKind::CopyFailed
            };
            let generation = model.ui.show_hint(kind);
            Some(Cmd::schedule(
                Duration::from_millis(HINT_DISMISS_MS),
                Msg::Ui(UiMsg::DismissHint(generation)),
            ))
        }

        UiMsg::ToggleFullscreen => {
            model.ui.fullscreen = !model.ui.fullscreen;
            None
        }

        UiMsg::DismissHint(generation) => {
            model.ui.dismiss_hint(generation);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use crate::editable::Selection;
    use crate::syntax::LanguageId;

    fn model(content: &str) -> SurfaceModel {
        SurfaceModel::new(SurfaceConfig::with_content(content, LanguageId::PlainText))
    }

    #[test]
    fn test_copy_requests_selected_text() {
        let mut m = model("abc\ndef");
        m.set_selection(Selection::new(5, 2));
        assert_eq!(
            update_ui(&mut m, UiMsg::Copy),
            Some(Cmd::CopyToClipboard("c\nd".into()))
        );
    }

    #[test]
    fn test_copy_result_shows_hint_and_schedules_dismiss() {
        let mut m = model("abc");
        let cmd = update_ui(&mut m, UiMsg::CopyFinished { ok: false });
        let hint = m.ui.hint.unwrap();
        assert_eq!(hint.kind, HintKind::CopyFailed);
        assert_eq!(
            cmd,
            Some(Cmd::schedule(
                Duration::from_millis(1500),
                Msg::Ui(UiMsg::DismissHint(hint.generation))
            ))
        );

        update_ui(&mut m, UiMsg::DismissHint(hint.generation));
        assert_eq!(m.ui.hint, None);
    }

    #[test]
    fn test_toggle_fullscreen() {
        let mut m = model("");
        update_ui(&mut m, UiMsg::ToggleFullscreen);
        assert!(m.ui.fullscreen);
        update_ui(&mut m, UiMsg::ToggleFullscreen);
        assert!(!m.ui.fullscreen);
    }
}
