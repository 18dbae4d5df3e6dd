//! `TodoClient`: the controller tying the form, the view and the service.
//!
//! # Design
//! Every mutation is one request followed by a full List+Render. The view is
//! never patched from local knowledge; if a request fails the error is logged
//! and whatever was last rendered stays on screen. Operations still return
//! the error so the host can react, but the controller has already reported
//! it on the diagnostic channel.

use tracing::{debug, error, warn};

use crate::api::TodoApi;
use crate::dispatch::Action;
use crate::error::ClientError;
use crate::form::Form;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{NewTodo, TodoId, TodoItem};
use crate::view::{entries, View};

/// Alert raised when the submitted title is blank.
pub const EMPTY_TITLE_ALERT: &str = "Please enter a todo title.";

pub struct TodoClient<T, V, F> {
    api: TodoApi,
    transport: T,
    view: V,
    form: F,
}

impl<T, V, F> TodoClient<T, V, F>
where
    T: Transport,
    V: View,
    F: Form,
{
    pub fn new(api: TodoApi, transport: T, view: V, form: F) -> Self {
        Self {
            api,
            transport,
            view,
            form,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch and show the list once at startup. On failure the view keeps
    /// its initial empty state.
    pub fn initialize(&mut self) -> Result<(), ClientError> {
        self.refresh()
    }

    /// Create a todo from the form's current title.
    pub fn submit(&mut self) -> Result<(), ClientError> {
        let raw = self.form.title();
        let Some(input) = NewTodo::from_input(&raw) else {
            warn!("rejected blank todo title");
            self.form.alert(EMPTY_TITLE_ALERT);
            return Err(ClientError::EmptyTitle);
        };

        let created = self
            .api
            .build_create_todo(&input)
            .map_err(ClientError::from)
            .and_then(|request| self.send(request))
            .and_then(|response| Ok(self.api.parse_create_todo(response)?));
        if let Err(err) = created {
            error!(error = %err, "failed to add the todo");
            return Err(err);
        }

        self.form.clear_title();
        self.refresh()
    }

    /// Fetch every item, in the order the service returns them.
    pub fn list(&mut self) -> Result<Vec<TodoItem>, ClientError> {
        let request = self.api.build_list_todos();
        let response = self.send(request)?;
        Ok(self.api.parse_list_todos(response)?)
    }

    /// Replace the displayed list with `items`.
    pub fn render(&mut self, items: &[TodoItem]) {
        self.view.replace(entries(items));
    }

    /// List+Render.
    pub fn refresh(&mut self) -> Result<(), ClientError> {
        match self.list() {
            Ok(items) => {
                debug!(count = items.len(), "rendering todos");
                self.render(&items);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to fetch todos");
                Err(err)
            }
        }
    }

    pub fn complete(&mut self, id: TodoId) -> Result<(), ClientError> {
        self.dispatch(Action::complete(id))
    }

    pub fn delete(&mut self, id: TodoId) -> Result<(), ClientError> {
        self.dispatch(Action::delete(id))
    }

    /// Run a per-item action, then List+Render on success.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ClientError> {
        let request = action.request(&self.api);
        let outcome = self
            .send(request)
            .and_then(|response| Ok(action.parse(&self.api, response)?));
        if let Err(err) = outcome {
            error!(id = %action.id, error = %err, "failed to {} the todo", action.kind);
            return Err(err);
        }
        self.refresh()
    }

    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
