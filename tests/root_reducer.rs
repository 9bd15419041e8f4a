use sbdelivery::mvi::Reducer;
use sbdelivery::repository::{CartItem, Dish};
use sbdelivery::root::{
    Msg, NavigateCommand, Route, RootReducer, RootState, ScreenState, ScreenTarget,
};
use sbdelivery::screens::cart::CartMsg;
use sbdelivery::screens::dish::DishMsg;
use sbdelivery::screens::dishes::DishesMsg;

fn navigate(root: RootState, command: NavigateCommand) -> RootState {
    RootReducer::reduce(root, Msg::Navigate(command)).0
}

/// One state per screen, each with some history behind it.
fn states_on_every_screen() -> Vec<RootState> {
    let dishes = RootState::initial();
    let dish = navigate(
        dishes.clone(),
        NavigateCommand::ToScreen(ScreenTarget::Dish {
            id: "42".into(),
            title: "Pizza".into(),
        }),
    );
    let cart = navigate(dish.clone(), NavigateCommand::ToCart);
    vec![dishes, dish, cart]
}

fn dishes_messages() -> Vec<Msg> {
    vec![
        DishesMsg::SearchInput("a".into()).into(),
        DishesMsg::SearchToggle.into(),
        DishesMsg::ShowDishes(vec![Dish::new("1", "Soup", 1)]).into(),
        DishesMsg::ShowError.into(),
        DishesMsg::ClickDish {
            id: "1".into(),
            title: "Soup".into(),
        }
        .into(),
    ]
}

fn dish_messages() -> Vec<Msg> {
    vec![
        DishMsg::IncrementCount.into(),
        DishMsg::ToggleLike.into(),
        DishMsg::ShowDish(Dish::new("42", "Pizza", 500)).into(),
        DishMsg::AddToCart {
            id: "42".into(),
            count: 2,
        }
        .into(),
    ]
}

fn cart_messages() -> Vec<Msg> {
    vec![
        CartMsg::SendOrder.into(),
        CartMsg::HideConfirm.into(),
        CartMsg::IncrementCount("1".into()).into(),
        CartMsg::ShowCart(vec![CartItem {
            id: "1".into(),
            title: "Soup".into(),
            image: String::new(),
            price: 1,
            count: 1,
        }])
        .into(),
    ]
}

#[test]
fn messages_for_other_screens_are_no_ops() {
    for root in states_on_every_screen() {
        let foreign: Vec<Msg> = match root.current_route() {
            Route::Dishes => [dish_messages(), cart_messages()].concat(),
            Route::Dish => [dishes_messages(), cart_messages()].concat(),
            Route::Cart => [dishes_messages(), dish_messages()].concat(),
        };
        for msg in foreign {
            let (next, effects) = RootReducer::reduce(root.clone(), msg.clone());
            assert_eq!(next, root, "{msg:?} changed state on {}", root.current_route());
            assert!(effects.is_empty(), "{msg:?} emitted effects");
        }
    }
}

#[test]
fn messages_for_current_screen_are_reduced() {
    let root = RootState::initial();
    let (next, _) = RootReducer::reduce(root.clone(), DishesMsg::ShowError.into());
    assert_ne!(next, root);
    assert!(matches!(next.current_screen(), ScreenState::Dishes(_)));
}

#[test]
fn cart_count_is_root_scoped() {
    for root in states_on_every_screen() {
        let (next, effects) = RootReducer::reduce(root.clone(), Msg::UpdateCartCount(9));
        assert_eq!(next.cart_count(), 9);
        assert_eq!(next.current_route(), root.current_route());
        assert!(effects.is_empty());
    }
}

#[test]
fn initial_state_round_trips_through_zero_messages() {
    let initial = RootState::initial();
    let folded = Vec::<Msg>::new()
        .into_iter()
        .fold(initial.clone(), |state, msg| RootReducer::reduce(state, msg).0);
    assert_eq!(folded, initial);
}
