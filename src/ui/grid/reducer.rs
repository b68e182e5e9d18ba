use crate::ui::mvi::Reducer;

use super::intent::GridIntent;
use super::sort::SortKey;
use super::state::GridState;

pub struct GridReducer;

impl Reducer for GridReducer {
    type State = GridState;
    type Intent = GridIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GridIntent::SortSelected(sort) if sort == state.sort => state,
            GridIntent::SortSelected(sort) => GridState { sort },
            GridIntent::ResetSort => GridState {
                sort: SortKey::default(),
            },
        }
    }
}
