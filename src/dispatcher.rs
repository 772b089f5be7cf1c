// Field-change dispatch. Components subscribe to named field events once
// at wire time; publish invokes matching subscribers synchronously in
// registration order within the current tick. Subscribers carry no
// ordering contract among themselves.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub(crate) enum FieldFilter {
    Any,
    Fields(Vec<String>),
}

impl FieldFilter {
    fn matches(&self, field_id: &str) -> bool {
        match self {
            FieldFilter::Any => true,
            FieldFilter::Fields(ids) => ids.iter().any(|id| id == field_id),
        }
    }
}

struct Subscriber {
    filter: FieldFilter,
    handler: Rc<dyn Fn(&str)>,
}

#[derive(Clone)]
pub(crate) struct FieldDispatcher {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl FieldDispatcher {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn subscribe<F>(&self, filter: FieldFilter, handler: F)
    where
        F: Fn(&str) + 'static,
    {
        self.subscribers.borrow_mut().push(Subscriber {
            filter,
            handler: Rc::new(handler),
        });
    }

    // The subscriber list is snapshotted first so a handler may publish
    // (or subscribe) again without re-entrancy trouble.
    pub(crate) fn publish(&self, field_id: &str) {
        let matching: Vec<Rc<dyn Fn(&str)>> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|subscriber| subscriber.filter.matches(field_id))
            .map(|subscriber| subscriber.handler.clone())
            .collect();
        for handler in matching {
            handler(field_id);
        }
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
