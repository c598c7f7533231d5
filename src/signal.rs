// src/signal.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Lista de observadores: quien muta el estado llama a `publish` y cada
/// suscriptor recibe el valor nuevo, en orden de registro.
pub struct Observers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Devuelve `false` si el id ya no estaba registrado.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn publish(&mut self, value: &T) {
        for (_, observer) in self.entries.iter_mut() {
            observer(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

/// Cola compartida donde un observador deja lo publicado, para que el dueño
/// lo recoja después con `drain` sin pedir prestado al publicador.
pub struct Inbox<T> {
    queue: Rc<RefCell<VecDeque<T>>>,
}

impl<T: Clone + 'static> Inbox<T> {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Observador para `subscribe`: copia cada valor publicado en la cola.
    pub fn observer(&self) -> impl FnMut(&T) + 'static {
        let queue = Rc::clone(&self.queue);
        move |value: &T| queue.borrow_mut().push_back(value.clone())
    }

    /// Saca todo lo recibido, en orden de publicación.
    pub fn drain(&self) -> Vec<T> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl<T: Clone + 'static> Default for Inbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Inbox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inbox")
            .field("queued", &self.queue.borrow().len())
            .finish()
    }
}
