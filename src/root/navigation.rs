//! Backstack transitions.

use crate::mvi::Effects;
use crate::screens::dish::DishEff;
use crate::screens::{cart, dish, dishes};

use super::effect::{Eff, HostCommand};
use super::intent::{NavigateCommand, ScreenTarget};
use super::state::{Route, RootState, ScreenState};

/// Apply a navigation command.
///
/// Leaving the dish screen, by any command, always adds
/// `Dish(Terminate)` so the visit's in-flight work is cancelled.
pub fn reduce_navigate(root: RootState, command: NavigateCommand) -> (RootState, Effects<Eff>) {
    let leaving_dish = root.current_route() == Route::Dish;

    let (next, mut effects) = match command {
        NavigateCommand::ToBack => back(root),
        NavigateCommand::ToScreen(target) => open(root, target),
        NavigateCommand::ToCart if root.current_route() == Route::Cart => {
            (root, Effects::new())
        }
        NavigateCommand::ToCart => open(root, ScreenTarget::Cart),
    };

    if leaving_dish {
        effects.insert(Eff::Dish(DishEff::Terminate));
    }
    (next, effects)
}

fn back(mut root: RootState) -> (RootState, Effects<Eff>) {
    match root.backstack.pop() {
        Some(previous) => {
            let route = previous.route();
            root.screens.insert(route, previous);
            root.current_route = route;
            (root, Effects::new())
        }
        None => (root, Effects::from([Eff::Host(HostCommand::Finish)])),
    }
}

fn open(mut root: RootState, target: ScreenTarget) -> (RootState, Effects<Eff>) {
    let (screen, effects): (ScreenState, Effects<Eff>) = match target {
        ScreenTarget::Dishes => (
            ScreenState::Dishes(dishes::initial_state()),
            dishes::initial_effects().into_iter().map(Eff::Dishes).collect(),
        ),
        ScreenTarget::Dish { id, title } => (
            ScreenState::Dish(dish::initial_state(&id, &title)),
            dish::initial_effects(&id).into_iter().map(Eff::Dish).collect(),
        ),
        ScreenTarget::Cart => (
            ScreenState::Cart(cart::initial_state()),
            cart::initial_effects().into_iter().map(Eff::Cart).collect(),
        ),
    };

    let current = root.current_screen().clone();
    root.backstack.push(current);
    let route = screen.route();
    root.screens.insert(route, screen);
    root.current_route = route;
    (root, effects)
}
