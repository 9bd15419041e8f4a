//! Routes root messages to feature reducers.

use crate::mvi::{Effects, Reducer};
use crate::screens::cart::CartReducer;
use crate::screens::dish::DishReducer;
use crate::screens::dishes::DishesReducer;

use super::effect::Eff;
use super::intent::Msg;
use super::navigation::reduce_navigate;
use super::state::{RootState, ScreenState};

/// Pure dispatch of one [`Msg`] against the whole [`RootState`].
///
/// A feature message only reaches its reducer while that feature's screen
/// is current. Anything else is a stale callback from a screen the user
/// already left, and is dropped without touching state.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = Msg;
    type Effect = Eff;

    fn reduce(root: Self::State, msg: Self::Intent) -> (Self::State, Effects<Self::Effect>) {
        match msg {
            Msg::Navigate(command) => reduce_navigate(root, command),

            Msg::UpdateCartCount(count) => (root.with_cart_count(count), Effects::new()),

            Msg::Dishes(msg) => reduce_on_screen::<DishesReducer>(
                root,
                msg,
                |screen| match screen {
                    ScreenState::Dishes(state) => Some(state),
                    _ => None,
                },
                ScreenState::Dishes,
            ),

            Msg::Dish(msg) => reduce_on_screen::<DishReducer>(
                root,
                msg,
                |screen| match screen {
                    ScreenState::Dish(state) => Some(state),
                    _ => None,
                },
                ScreenState::Dish,
            ),

            Msg::Cart(msg) => reduce_on_screen::<CartReducer>(
                root,
                msg,
                |screen| match screen {
                    ScreenState::Cart(state) => Some(state),
                    _ => None,
                },
                ScreenState::Cart,
            ),
        }
    }
}

fn reduce_on_screen<R>(
    root: RootState,
    msg: R::Intent,
    project: fn(&ScreenState) -> Option<&R::State>,
    embed: fn(R::State) -> ScreenState,
) -> (RootState, Effects<Eff>)
where
    R: Reducer<Effect = Eff>,
{
    let Some(state) = project(root.current_screen()).cloned() else {
        tracing::debug!(
            "Discarding {:?} on '{}' screen",
            msg,
            root.current_route()
        );
        return (root, Effects::new());
    };
    let (state, effects) = R::reduce(state, msg);
    (root.with_current_screen(embed(state)), effects)
}
