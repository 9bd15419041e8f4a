//! Root-level effects.

use crate::mvi::Effect;
use crate::screens::cart::CartEff;
use crate::screens::dish::DishEff;
use crate::screens::dishes::DishesEff;

use super::intent::{Msg, NavigateCommand};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Eff {
    Dishes(DishesEff),
    Dish(DishEff),
    Cart(CartEff),
    /// Re-read the cart total and commit it.
    SyncCounter,
    Notification(Notification),
    /// Navigation requested by a screen; committed back as a message.
    Navigate(NavigateCommand),
    Host(HostCommand),
}

impl Effect for Eff {}

impl Eff {
    /// Effects that tear down a screen's scoped work.
    ///
    /// The fold loop runs these before spawning the rest of the set, so a
    /// leaving screen is cancelled before the entering screen starts.
    pub fn is_teardown(&self) -> bool {
        matches!(self, Eff::Dish(DishEff::Terminate))
    }

    /// Short variant name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Eff::Dishes(_) => "dishes",
            Eff::Dish(_) => "dish",
            Eff::Cart(_) => "cart",
            Eff::SyncCounter => "sync_counter",
            Eff::Notification(_) => "notification",
            Eff::Navigate(_) => "navigate",
            Eff::Host(_) => "host",
        }
    }
}

/// Transient message for the UI surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Notification {
    Text {
        message: String,
    },
    /// Message with a button that submits `action` when pressed.
    Action {
        message: String,
        label: String,
        action: Msg,
    },
    Error {
        message: String,
        label: Option<String>,
        action: Option<Msg>,
    },
}

impl Notification {
    pub fn text(message: impl Into<String>) -> Self {
        Notification::Text {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification::Error {
            message: message.into(),
            label: None,
            action: None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Text { message }
            | Notification::Action { message, .. }
            | Notification::Error { message, .. } => message,
        }
    }
}

/// Commands for whatever hosts the session (window, process, activity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// Close the application.
    Finish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dish_terminate_is_teardown() {
        assert!(Eff::Dish(DishEff::Terminate).is_teardown());
        assert!(!Eff::Dish(DishEff::LoadDish("1".into())).is_teardown());
        assert!(!Eff::SyncCounter.is_teardown());
    }

    #[test]
    fn notification_message_accessor() {
        assert_eq!(Notification::text("hi").message(), "hi");
        assert_eq!(Notification::error("boom").message(), "boom");
        let action = Notification::Action {
            message: "added".into(),
            label: "Undo".into(),
            action: Msg::UpdateCartCount(0),
        };
        assert_eq!(action.message(), "added");
    }
}
