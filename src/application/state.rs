//! Application state for the product catalog page.
//!
//! This module owns the in-memory product collection and the transient UI
//! flags (selection, form visibility, loading, error) and exposes the
//! transitions that mutate them. Remote calls are dispatched elsewhere;
//! completions are fed back in through the `set_*_result` methods.

use tracing::{error, warn};

use crate::domain::{Product, ProductDraft, StoreError, StoreResult};

/// Which field of the add form currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Description,
}

impl FormField {
    /// Focus order: name, price, description, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Price,
            FormField::Price => FormField::Description,
            FormField::Description => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Price => FormField::Name,
            FormField::Description => FormField::Price,
        }
    }
}

/// Input buffers for the add-product form.
///
/// Field validation belongs to the form view and is out of scope here; the
/// buffers are turned into an opaque draft on submission. The draft is kept
/// across a failed submission and cleared only after the store confirms the
/// create.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub focus: FormField,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            description: String::new(),
            focus: FormField::Name,
        }
    }
}

impl ProductForm {
    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// The buffer currently being edited.
    pub fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
        }
    }

    /// Builds the drafted field set for submission.
    ///
    /// The price is sent as a number when it parses as one, otherwise as the
    /// literal text; the store's own validation is the authority.
    pub fn draft(&self) -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.set_text("name", self.name.trim());

        let price = self.price.trim();
        if !price.is_empty() {
            match price.parse::<f64>() {
                Ok(value) if serde_json::Number::from_f64(value).is_some() => {
                    draft.set_number("price", value);
                }
                _ => draft.set_text("price", price),
            }
        }

        let description = self.description.trim();
        if !description.is_empty() {
            draft.set_text("description", description);
        }

        draft
    }

    /// Resets all buffers and focus.
    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
        self.description.clear();
        self.focus = FormField::Name;
    }
}

/// State of the product catalog page.
///
/// The collection is populated exactly once by the mount-time load and
/// mutated only by confirmed add/delete completions afterwards. `selected`
/// holds the identifier of the product shown in the detail pane; transitions
/// keep it pointing at a product that is actually in the collection.
///
/// # Examples
///
/// ```
/// use prodcat::application::App;
///
/// let app = App::default();
/// assert!(app.loading);
/// assert!(app.products.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Products in load/add order
    pub products: Vec<Product>,
    /// Identifier of the product shown in the detail pane
    pub selected: Option<String>,
    /// Whether the add form replaces the list
    pub form_visible: bool,
    /// True until the mount-time load completes
    pub loading: bool,
    /// User-visible failure message; replaces the main content area
    pub error_message: Option<String>,
    /// List row under the keyboard cursor (browse navigation, not selection)
    pub cursor: usize,
    /// Add-form input buffers
    pub form: ProductForm,
}

impl Default for App {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            selected: None,
            form_visible: false,
            loading: true,
            error_message: None,
            cursor: 0,
            form: ProductForm::default(),
        }
    }
}

impl App {
    /// Applies the completion of the mount-time load.
    ///
    /// On success the collection is replaced wholesale; on failure it stays
    /// empty and a generic message takes over the content area. Either way
    /// the loading indicator comes down.
    pub fn set_load_result(&mut self, result: StoreResult<Vec<Product>>) {
        match result {
            Ok(products) => {
                self.products = products;
            }
            Err(err) => {
                warn!("product load failed: {err}");
                self.error_message = Some("Failed to load products.".to_string());
            }
        }
        self.loading = false;
    }

    /// Selects the product with the given identifier for the detail pane.
    ///
    /// An identifier that is not in the collection clears the selection
    /// rather than erroring. Selecting always hides the add form.
    pub fn select_product(&mut self, id: &str) {
        self.selected = self
            .products
            .iter()
            .find(|product| product.id == id)
            .map(|product| product.id.clone());
        self.form_visible = false;
    }

    /// The product currently shown in the detail pane, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected.as_deref()?;
        self.products.iter().find(|product| product.id == id)
    }

    /// Applies the completion of a delete request for `id`.
    ///
    /// The collection only mutates after the store confirms the delete;
    /// there is no optimistic removal. On failure the collection and
    /// selection are untouched and a generic message is shown.
    pub fn set_delete_result(&mut self, id: &str, result: StoreResult<()>) {
        match result {
            Ok(()) => {
                self.products.retain(|product| product.id != id);
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
                self.clamp_cursor();
            }
            Err(err) => {
                warn!("delete of product {id} failed: {err}");
                self.error_message = Some("Failed to delete the product.".to_string());
            }
        }
    }

    /// Shows or hides the add form. Opening or closing it always clears the
    /// detail selection; the draft buffers are left alone so a cancelled
    /// form can be reopened where it was.
    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
        self.selected = None;
    }

    /// Applies the completion of a create request.
    ///
    /// On success the store-returned record (with its assigned identifier)
    /// is appended and the form closes with a fresh draft. Failure is logged
    /// only: no user-visible error, the form stays open, and the draft is
    /// kept so the submission can be retried.
    pub fn set_create_result(&mut self, result: StoreResult<Product>) {
        match result {
            Ok(product) => {
                self.products.push(product);
                self.form_visible = false;
                self.form.clear();
            }
            Err(err) => {
                error!("error adding product: {err}");
            }
        }
    }

    /// Moves the list cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the list cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.products.len() {
            self.cursor += 1;
        }
    }

    /// The product under the list cursor, if the collection is non-empty.
    pub fn product_under_cursor(&self) -> Option<&Product> {
        self.products.get(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.products.len() {
            self.cursor = self.products.len().saturating_sub(1);
        }
    }
}
