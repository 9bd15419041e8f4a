//! Composed application state.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mvi::{Effects, UiState};
use crate::screens::cart::{self, CartState};
use crate::screens::dish::{self, DishState};
use crate::screens::dishes::{self, DishesState};

use super::effect::Eff;

/// Identifies a screen in [`RootState::screens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dishes,
    Dish,
    Cart,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Dishes => dishes::ROUTE,
            Route::Dish => dish::ROUTE,
            Route::Cart => cart::ROUTE,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A screen's feature state, tagged with the screen it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenState {
    Dishes(DishesState),
    Dish(DishState),
    Cart(CartState),
}

impl ScreenState {
    pub fn route(&self) -> Route {
        match self {
            ScreenState::Dishes(_) => Route::Dishes,
            ScreenState::Dish(_) => Route::Dish,
            ScreenState::Cart(_) => Route::Cart,
        }
    }

    /// App bar title.
    pub fn title(&self) -> &str {
        match self {
            ScreenState::Dishes(_) => dishes::TITLE,
            ScreenState::Dish(state) => &state.title,
            ScreenState::Cart(_) => cart::TITLE,
        }
    }
}

/// Reasons a snapshot cannot seed a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("No screen state for current route '{route}'")]
    MissingCurrentScreen { route: Route },

    #[error("Screen state for '{found}' stored under route '{key}'")]
    MisplacedScreen { key: Route, found: Route },
}

/// The single live application state. Replaced, never mutated, per message.
///
/// Invariant: `screens` always holds an entry for `current_route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RootSnapshot")]
pub struct RootState {
    pub(crate) screens: HashMap<Route, ScreenState>,
    pub(crate) current_route: Route,
    pub(crate) backstack: Vec<ScreenState>,
    pub(crate) cart_count: u32,
}

/// Unvalidated wire form of [`RootState`].
#[derive(Deserialize)]
struct RootSnapshot {
    screens: HashMap<Route, ScreenState>,
    current_route: Route,
    #[serde(default)]
    backstack: Vec<ScreenState>,
    #[serde(default)]
    cart_count: u32,
}

impl TryFrom<RootSnapshot> for RootState {
    type Error = StateError;

    fn try_from(snapshot: RootSnapshot) -> Result<Self, Self::Error> {
        RootState::restore(RootState {
            screens: snapshot.screens,
            current_route: snapshot.current_route,
            backstack: snapshot.backstack,
            cart_count: snapshot.cart_count,
        })
    }
}

impl UiState for RootState {}

impl Default for RootState {
    fn default() -> Self {
        Self::initial()
    }
}

impl RootState {
    /// Fresh session state: every screen at its default, catalog on top.
    pub fn initial() -> Self {
        let screens = HashMap::from([
            (Route::Dishes, ScreenState::Dishes(dishes::initial_state())),
            (Route::Dish, ScreenState::Dish(DishState::default())),
            (Route::Cart, ScreenState::Cart(cart::initial_state())),
        ]);
        Self {
            screens,
            current_route: Route::Dishes,
            backstack: Vec::new(),
            cart_count: 0,
        }
    }

    /// Effects dispatched once when a session starts.
    pub fn initial_effects() -> Effects<Eff> {
        let mut effects: Effects<Eff> = dishes::initial_effects()
            .into_iter()
            .map(Eff::Dishes)
            .collect();
        effects.insert(Eff::SyncCounter);
        effects
    }

    /// Accept a previously saved state after checking its invariants.
    pub fn restore(state: RootState) -> Result<Self, StateError> {
        for (key, screen) in &state.screens {
            if screen.route() != *key {
                return Err(StateError::MisplacedScreen {
                    key: *key,
                    found: screen.route(),
                });
            }
        }
        if !state.screens.contains_key(&state.current_route) {
            return Err(StateError::MissingCurrentScreen {
                route: state.current_route,
            });
        }
        Ok(state)
    }

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    /// State of the screen on top.
    ///
    /// # Panics
    /// If the current route has no screen entry; construction and
    /// [`restore`](Self::restore) rule that out.
    pub fn current_screen(&self) -> &ScreenState {
        self.screens
            .get(&self.current_route)
            .expect("current route has no screen state")
    }

    pub fn screen(&self, route: Route) -> Option<&ScreenState> {
        self.screens.get(&route)
    }

    pub fn backstack(&self) -> &[ScreenState] {
        &self.backstack
    }

    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    pub fn title(&self) -> &str {
        self.current_screen().title()
    }

    /// Replace the current screen's state, leaving other screens untouched.
    pub(crate) fn with_current_screen(mut self, screen: ScreenState) -> Self {
        debug_assert_eq!(screen.route(), self.current_route);
        self.screens.insert(self.current_route, screen);
        self
    }

    pub(crate) fn with_cart_count(self, cart_count: u32) -> Self {
        Self { cart_count, ..self }
    }
}
