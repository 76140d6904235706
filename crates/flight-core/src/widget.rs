use crate::cvar::{ControlVariable, Cvar};
use crate::error::CvarError;
use crate::format::format_value;
use crate::notify::{ListenerId, Listeners};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Decrement,
    Increment,
}

impl Button {
    pub fn symbol(self) -> &'static str {
        match self {
            Button::Decrement => "-",
            Button::Increment => "+",
        }
    }
}

/// Raised after every press, carrying the cvar's value after the press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChanged {
    pub value: f64,
}

/// Increment/decrement control bound to one cvar.
///
/// Display is derived entirely from the cvar; the widget keeps no other state.
#[derive(Debug)]
pub struct IncDecWidget {
    cvar: Cvar,
    listeners: Listeners<ValueChanged>,
}

impl IncDecWidget {
    pub fn new(cvar: impl Into<Cvar>) -> Self {
        Self {
            cvar: cvar.into(),
            listeners: Listeners::new(),
        }
    }

    pub fn cvar(&self) -> &Cvar {
        &self.cvar
    }

    pub fn value(&self) -> f64 {
        self.cvar.value()
    }

    pub fn label(&self) -> &str {
        self.cvar.name()
    }

    pub fn display(&self) -> String {
        format_value(self.cvar.value())
    }

    /// Step the cvar and notify. A press stopped at a bound still notifies,
    /// with the unchanged value.
    pub fn press(&mut self, button: Button) -> f64 {
        match button {
            Button::Increment => self.cvar.increment(),
            Button::Decrement => self.cvar.decrement(),
        }
        let value = self.cvar.value();
        log::debug!("[widget] {} {} -> {}", self.cvar.name(), button.symbol(), value);
        self.listeners.emit(&ValueChanged { value });
        value
    }

    /// Set the cvar from outside without notifying.
    pub fn sync(&mut self, value: f64) -> Result<(), CvarError> {
        self.cvar.set_value(value)
    }

    pub fn on_change(&mut self, callback: impl FnMut(&ValueChanged) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
