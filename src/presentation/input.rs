//! Keyboard handling for the catalog page.
//!
//! Keys either adjust local page state directly (cursor movement, selection,
//! form toggling and editing) or dispatch a store request through the
//! [`StoreHandle`]; the collection itself only changes when the matching
//! completion is applied.

use crate::application::App;
use crate::infrastructure::StoreHandle;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(
        app: &mut App,
        store: &StoreHandle,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        if app.form_visible {
            Self::handle_form_keys(app, store, key, modifiers);
        } else {
            Self::handle_browse_keys(app, store, key);
        }
    }

    fn handle_browse_keys(app: &mut App, store: &StoreHandle, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
            KeyCode::Enter => {
                if let Some(id) = app.product_under_cursor().map(|p| p.id.clone()) {
                    app.select_product(&id);
                }
            }
            KeyCode::Char('d') => {
                // Dispatch only; the row disappears when the store confirms.
                if let Some(id) = app.product_under_cursor().map(|p| p.id.clone()) {
                    store.delete(id);
                }
            }
            KeyCode::Char('a') => app.toggle_form(),
            _ => {}
        }
    }

    fn handle_form_keys(
        app: &mut App,
        store: &StoreHandle,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match key {
            KeyCode::Esc => app.toggle_form(),
            KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
            KeyCode::Enter => {
                // The draft is kept until the create completes successfully.
                store.create(app.form.draft());
            }
            KeyCode::Backspace => {
                app.form.focused_buffer_mut().pop();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.form.focused_buffer_mut().push(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, FormField};
    use crate::domain::Product;
    use crate::infrastructure::{StoreCommand, StoreHandle};
    use serde_json::{Map, Value};
    use std::sync::mpsc::{self, Receiver};

    fn product(id: &str, name: &str) -> Product {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        Product {
            id: id.to_string(),
            fields,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::default();
        app.set_load_result(Ok(vec![product("1", "A"), product("2", "B")]));
        app
    }

    fn test_handle() -> (StoreHandle, Receiver<StoreCommand>) {
        let (tx, rx) = mpsc::channel();
        (StoreHandle::new(tx), rx)
    }

    #[test]
    fn test_enter_selects_product_under_cursor() {
        let mut app = loaded_app();
        let (store, _rx) = test_handle();

        InputHandler::handle_key_event(&mut app, &store, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, &store, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.selected.as_deref(), Some("2"));
        assert!(!app.form_visible);
    }

    #[test]
    fn test_delete_key_dispatches_without_mutating() {
        let mut app = loaded_app();
        let (store, rx) = test_handle();

        InputHandler::handle_key_event(&mut app, &store, KeyCode::Char('d'), KeyModifiers::NONE);

        assert_eq!(rx.try_recv().unwrap(), StoreCommand::Delete("1".to_string()));
        // No optimistic removal.
        assert_eq!(app.products.len(), 2);
    }

    #[test]
    fn test_delete_key_on_empty_collection_dispatches_nothing() {
        let mut app = App::default();
        app.set_load_result(Ok(Vec::new()));
        let (store, rx) = test_handle();

        InputHandler::handle_key_event(&mut app, &store, KeyCode::Char('d'), KeyModifiers::NONE);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_a_toggles_form_and_clears_selection() {
        let mut app = loaded_app();
        app.select_product("1");
        let (store, _rx) = test_handle();

        InputHandler::handle_key_event(&mut app, &store, KeyCode::Char('a'), KeyModifiers::NONE);

        assert!(app.form_visible);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_form_typing_and_focus() {
        let mut app = loaded_app();
        app.toggle_form();
        let (store, _rx) = test_handle();

        for c in "Mug".chars() {
            InputHandler::handle_key_event(&mut app, &store, KeyCode::Char(c), KeyModifiers::NONE);
        }
        InputHandler::handle_key_event(&mut app, &store, KeyCode::Tab, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, &store, KeyCode::Char('5'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, &store, KeyCode::Backspace, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, &store, KeyCode::Char('9'), KeyModifiers::NONE);

        assert_eq!(app.form.name, "Mug");
        assert_eq!(app.form.price, "9");
        assert_eq!(app.form.focus, FormField::Price);
    }

    #[test]
    fn test_form_submit_dispatches_draft_and_keeps_it() {
        let mut app = loaded_app();
        app.toggle_form();
        app.form.name = "C".to_string();
        let (store, rx) = test_handle();

        InputHandler::handle_key_event(&mut app, &store, KeyCode::Enter, KeyModifiers::NONE);

        match rx.try_recv().unwrap() {
            StoreCommand::Create(draft) => {
                assert_eq!(draft.fields["name"], "C");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        // Visibility and draft only change on the create completion.
        assert!(app.form_visible);
        assert_eq!(app.form.name, "C");
    }

    #[test]
    fn test_esc_closes_form() {
        let mut app = loaded_app();
        app.toggle_form();
        let (store, _rx) = test_handle();

        InputHandler::handle_key_event(&mut app, &store, KeyCode::Esc, KeyModifiers::NONE);

        assert!(!app.form_visible);
    }
}
