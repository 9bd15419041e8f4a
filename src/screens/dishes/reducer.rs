//! Reducer for the dishes screen.

use std::collections::BTreeMap;

use crate::mvi::{Effects, Reducer};
use crate::root::{Eff, NavigateCommand, ScreenTarget};

use super::effect::DishesEff;
use super::intent::DishesMsg;
use super::state::{DishesContent, DishesState};

pub struct DishesReducer;

impl Reducer for DishesReducer {
    type State = DishesState;
    type Intent = DishesMsg;
    type Effect = Eff;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>) {
        match intent {
            DishesMsg::SearchInput(input) => (DishesState { input, ..state }, Effects::new()),

            DishesMsg::SearchSubmit(query) => (
                DishesState {
                    content: DishesContent::Loading,
                    ..state
                },
                wrap([DishesEff::SearchDishes(query)]),
            ),

            DishesMsg::SearchToggle => {
                if !state.input.is_empty() && state.is_search {
                    // Clearing an active search reloads the full catalog
                    (
                        DishesState {
                            input: String::new(),
                            suggestions: BTreeMap::new(),
                            ..state
                        },
                        wrap([DishesEff::FindAllDishes]),
                    )
                } else if state.input.is_empty() && !state.is_search {
                    (
                        DishesState {
                            is_search: true,
                            ..state
                        },
                        Effects::new(),
                    )
                } else {
                    (
                        DishesState {
                            is_search: false,
                            suggestions: BTreeMap::new(),
                            ..state
                        },
                        Effects::new(),
                    )
                }
            }

            DishesMsg::ShowDishes(dishes) => {
                let content = if dishes.is_empty() {
                    DishesContent::Empty
                } else {
                    DishesContent::Populated(dishes)
                };
                (
                    DishesState {
                        content,
                        suggestions: BTreeMap::new(),
                        ..state
                    },
                    Effects::new(),
                )
            }

            DishesMsg::ShowError => (
                DishesState {
                    content: DishesContent::Error,
                    suggestions: BTreeMap::new(),
                    ..state
                },
                Effects::new(),
            ),

            DishesMsg::ShowLoading => (
                DishesState {
                    content: DishesContent::Loading,
                    ..state
                },
                Effects::new(),
            ),

            DishesMsg::ClickDish { id, title } => (
                DishesState {
                    input: String::new(),
                    is_search: false,
                    suggestions: BTreeMap::new(),
                    ..state
                },
                Effects::from([Eff::Navigate(NavigateCommand::ToScreen(
                    ScreenTarget::Dish { id, title },
                ))]),
            ),

            DishesMsg::AddToCart { id, title } => {
                (state, wrap([DishesEff::AddToCart { id, title }]))
            }

            DishesMsg::RemoveFromCart { id, title } => {
                (state, wrap([DishesEff::RemoveFromCart { id, title }]))
            }

            DishesMsg::UpdateSuggestionResult(query) => {
                (state, wrap([DishesEff::FindSuggestions(query)]))
            }

            DishesMsg::ShowSuggestions(suggestions) => (
                DishesState {
                    suggestions,
                    ..state
                },
                Effects::new(),
            ),

            DishesMsg::SuggestionSelect(suggestion) => (
                DishesState {
                    input: suggestion.clone(),
                    suggestions: BTreeMap::new(),
                    ..state
                },
                wrap([DishesEff::SearchDishes(suggestion)]),
            ),
        }
    }
}

fn wrap<const N: usize>(effects: [DishesEff; N]) -> Effects<Eff> {
    effects.into_iter().map(Eff::Dishes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Dish;

    fn searching(input: &str) -> DishesState {
        DishesState {
            input: input.to_string(),
            is_search: true,
            suggestions: BTreeMap::from([("soup".to_string(), 2)]),
            ..Default::default()
        }
    }

    #[test]
    fn search_input_updates_text_only() {
        let (state, effs) =
            DishesReducer::reduce(DishesState::default(), DishesMsg::SearchInput("pi".into()));
        assert_eq!(state.input, "pi");
        assert!(effs.is_empty());
    }

    #[test]
    fn search_submit_shows_loading_and_searches() {
        let state = DishesState {
            content: DishesContent::Empty,
            ..Default::default()
        };
        let (state, effs) = DishesReducer::reduce(state, DishesMsg::SearchSubmit("soup".into()));
        assert!(state.is_loading());
        assert_eq!(
            effs,
            Effects::from([Eff::Dishes(DishesEff::SearchDishes("soup".into()))])
        );
    }

    #[test]
    fn toggle_with_active_search_clears_and_reloads() {
        let (state, effs) = DishesReducer::reduce(searching("so"), DishesMsg::SearchToggle);
        assert!(state.input.is_empty());
        assert!(state.suggestions.is_empty());
        assert!(state.is_search);
        assert_eq!(effs, Effects::from([Eff::Dishes(DishesEff::FindAllDishes)]));
    }

    #[test]
    fn toggle_when_idle_opens_search() {
        let (state, effs) = DishesReducer::reduce(DishesState::default(), DishesMsg::SearchToggle);
        assert!(state.is_search);
        assert!(effs.is_empty());
    }

    #[test]
    fn toggle_with_empty_search_closes_it() {
        let (state, effs) = DishesReducer::reduce(searching(""), DishesMsg::SearchToggle);
        assert!(!state.is_search);
        assert!(state.suggestions.is_empty());
        assert!(effs.is_empty());
    }

    #[test]
    fn show_dishes_empty_list_is_empty_state() {
        let (state, _) =
            DishesReducer::reduce(DishesState::default(), DishesMsg::ShowDishes(Vec::new()));
        assert_eq!(state.content, DishesContent::Empty);
    }

    #[test]
    fn show_dishes_populates_and_drops_suggestions() {
        let dishes = vec![Dish::new("1", "Soup", 250)];
        let (state, _) =
            DishesReducer::reduce(searching("so"), DishesMsg::ShowDishes(dishes.clone()));
        assert_eq!(state.content, DishesContent::Populated(dishes));
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn show_error_sets_error_content() {
        let (state, effs) = DishesReducer::reduce(DishesState::default(), DishesMsg::ShowError);
        assert_eq!(state.content, DishesContent::Error);
        assert!(effs.is_empty());
    }

    #[test]
    fn click_dish_resets_search_and_navigates() {
        let (state, effs) = DishesReducer::reduce(
            searching("so"),
            DishesMsg::ClickDish {
                id: "7".into(),
                title: "Soup".into(),
            },
        );
        assert!(!state.is_search);
        assert!(state.input.is_empty());
        assert_eq!(
            effs,
            Effects::from([Eff::Navigate(NavigateCommand::ToScreen(ScreenTarget::Dish {
                id: "7".into(),
                title: "Soup".into(),
            }))])
        );
    }

    #[test]
    fn suggestion_select_fills_input_and_searches() {
        let (state, effs) =
            DishesReducer::reduce(searching("so"), DishesMsg::SuggestionSelect("soup".into()));
        assert_eq!(state.input, "soup");
        assert!(state.suggestions.is_empty());
        assert_eq!(
            effs,
            Effects::from([Eff::Dishes(DishesEff::SearchDishes("soup".into()))])
        );
    }

    #[test]
    fn cart_intents_forward_to_effects() {
        let (state, effs) = DishesReducer::reduce(
            DishesState::default(),
            DishesMsg::AddToCart {
                id: "1".into(),
                title: "Soup".into(),
            },
        );
        assert_eq!(state, DishesState::default());
        assert_eq!(
            effs,
            Effects::from([Eff::Dishes(DishesEff::AddToCart {
                id: "1".into(),
                title: "Soup".into(),
            })])
        );
    }
}
