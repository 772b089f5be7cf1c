// Application state owned by the root controller and passed to each
// component at wire time; no component reaches for ambient globals.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use rangecard_core::field_registry;

use crate::dispatcher::FieldDispatcher;
use crate::ink::InkTool;
use crate::target::{DiagramKind, TargetDiagram};

pub(crate) struct AppContext {
    pub(crate) registry: Vec<String>,
    pub(crate) dispatcher: FieldDispatcher,
    pub(crate) hold: Option<Rc<TargetDiagram>>,
    pub(crate) shot: Option<Rc<TargetDiagram>>,
    pub(crate) ink: Option<Rc<InkTool>>,
    // True while a snapshot capture is in flight; captures serialize.
    pub(crate) capture_pending: Rc<Cell<bool>>,
    // The auto-save failure notice is shown once, then console-only.
    pub(crate) autosave_warned: Cell<bool>,
    // Listeners for the rebuilt library list, replaced on every refresh,
    // and for the currently previewed record.
    pub(crate) library_listeners: RefCell<Vec<EventListener>>,
    pub(crate) preview_listeners: RefCell<Vec<EventListener>>,
}

impl AppContext {
    // Binds the canvas tools against whatever surfaces the current markup
    // provides. A missing surface pair disables that tool.
    pub(crate) fn new() -> Self {
        Self {
            registry: field_registry(),
            dispatcher: FieldDispatcher::new(),
            hold: TargetDiagram::bind(
                DiagramKind::Hold,
                "canvas-hold",
                "mobile-canvas-hold",
                "clear-hold-btn",
            ),
            shot: TargetDiagram::bind(
                DiagramKind::Shot,
                "canvas-shot",
                "mobile-canvas-shot",
                "clear-shot-btn",
            ),
            ink: InkTool::bind(
                &["pencil-canvas", "mobile-pencil-canvas"],
                "pencil-toggle",
                "clear-pencil",
            ),
            capture_pending: Rc::new(Cell::new(false)),
            autosave_warned: Cell::new(false),
            library_listeners: RefCell::new(Vec::new()),
            preview_listeners: RefCell::new(Vec::new()),
        }
    }
}
