// Listener registry for change and path notifications

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) struct Listeners<T: ?Sized> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Listeners<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, listener: Box<dyn FnMut(&T)>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, value: &T) {
        for (_, listener) in self.entries.iter_mut() {
            listener(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_and_remove() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<str> = Listeners::new();

        let sink = seen.clone();
        let first = listeners.add(Box::new(move |v: &str| sink.borrow_mut().push(format!("a:{v}"))));
        let sink = seen.clone();
        listeners.add(Box::new(move |v: &str| sink.borrow_mut().push(format!("b:{v}"))));

        listeners.emit("x");
        assert!(listeners.remove(first));
        assert!(!listeners.remove(first));
        listeners.emit("y");

        assert_eq!(*seen.borrow(), ["a:x", "b:x", "b:y"]);
    }
}
