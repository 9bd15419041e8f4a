use sbdelivery::mvi::{Effects, Reducer};
use sbdelivery::root::{
    Eff, HostCommand, Msg, NavigateCommand, Route, RootReducer, RootState, ScreenState,
    ScreenTarget,
};
use sbdelivery::screens::cart::CartEff;
use sbdelivery::screens::dish::{DishEff, DishMsg};

fn navigate(root: RootState, command: NavigateCommand) -> (RootState, Effects<Eff>) {
    RootReducer::reduce(root, Msg::Navigate(command))
}

fn open_dish(root: RootState, id: &str) -> RootState {
    navigate(
        root,
        NavigateCommand::ToScreen(ScreenTarget::Dish {
            id: id.into(),
            title: format!("Dish {id}"),
        }),
    )
    .0
}

fn all_commands() -> Vec<NavigateCommand> {
    vec![
        NavigateCommand::ToBack,
        NavigateCommand::ToCart,
        NavigateCommand::ToScreen(ScreenTarget::Dishes),
        NavigateCommand::ToScreen(ScreenTarget::Cart),
        NavigateCommand::ToScreen(ScreenTarget::Dish {
            id: "7".into(),
            title: "Soup".into(),
        }),
    ]
}

#[test]
fn back_pops_exactly_one_entry() {
    let mut root = RootState::initial();
    for id in ["1", "2"] {
        root = open_dish(root, id);
    }
    root = navigate(root, NavigateCommand::ToCart).0;

    while !root.backstack().is_empty() {
        let depth = root.backstack().len();
        let expected = root.backstack()[depth - 1].route();
        let (next, effects) = navigate(root, NavigateCommand::ToBack);
        assert_eq!(next.backstack().len(), depth - 1);
        assert_eq!(next.current_route(), expected);
        assert!(!effects.contains(&Eff::Host(HostCommand::Finish)));
        root = next;
    }

    let (last, effects) = navigate(root.clone(), NavigateCommand::ToBack);
    assert_eq!(last, root);
    assert_eq!(effects, Effects::from([Eff::Host(HostCommand::Finish)]));
}

#[test]
fn to_cart_on_cart_is_no_op() {
    let root = navigate(open_dish(RootState::initial(), "1"), NavigateCommand::ToCart).0;
    assert_eq!(root.current_route(), Route::Cart);

    let (next, effects) = navigate(root.clone(), NavigateCommand::ToCart);
    assert_eq!(next, root);
    assert!(effects.is_empty());
}

#[test]
fn leaving_dish_always_terminates() {
    let on_dish = open_dish(open_dish(RootState::initial(), "1"), "2");
    for command in all_commands() {
        let (_, effects) = navigate(on_dish.clone(), command.clone());
        assert!(
            effects.contains(&Eff::Dish(DishEff::Terminate)),
            "{command:?} did not terminate"
        );
    }
}

#[test]
fn terminate_is_added_on_top_of_branch_effects() {
    let on_dish = open_dish(RootState::initial(), "1");

    let (_, effects) = navigate(on_dish.clone(), NavigateCommand::ToCart);
    assert_eq!(
        effects,
        Effects::from([
            Eff::Dish(DishEff::Terminate),
            Eff::Cart(CartEff::LoadCart),
        ])
    );

    let (_, effects) = navigate(on_dish, NavigateCommand::ToBack);
    assert_eq!(effects, Effects::from([Eff::Dish(DishEff::Terminate)]));
}

#[test]
fn other_screens_never_terminate() {
    let on_cart = navigate(RootState::initial(), NavigateCommand::ToCart).0;
    for root in [RootState::initial(), on_cart] {
        for command in all_commands() {
            let (_, effects) = navigate(root.clone(), command);
            assert!(!effects.contains(&Eff::Dish(DishEff::Terminate)));
        }
    }
}

#[test]
fn reopening_a_screen_resets_its_state() {
    let root = open_dish(RootState::initial(), "1");
    let (root, _) = RootReducer::reduce(root, DishMsg::ToggleLike.into());
    let root = navigate(root, NavigateCommand::ToBack).0;
    let root = open_dish(root, "1");
    match root.current_screen() {
        ScreenState::Dish(state) => assert!(!state.is_liked),
        other => panic!("unexpected {other:?}"),
    }
}
