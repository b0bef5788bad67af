use crate::model::{FavoriteSet, ProductId};
use std::rc::Rc;
use yew::prelude::*;

/// One toggle: `id` is a favorite afterwards iff `active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChange {
    pub id: ProductId,
    pub active: bool,
}

pub enum FavoriteAction {
    Toggle(ProductId),
}

/// Reducer state: the current set plus the change that produced it.
/// `revision` bumps on every toggle so repeated identical changes still
/// trigger the persisting effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesState {
    set: FavoriteSet,
    last_change: Option<FavoriteChange>,
    revision: u64,
}

impl FavoritesState {
    pub fn new(set: FavoriteSet) -> Self {
        Self {
            set,
            ..Self::default()
        }
    }
}

impl Reducible for FavoritesState {
    type Action = FavoriteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FavoriteAction::Toggle(id) => {
                let mut set = self.set.clone();
                let active = set.toggle(&id);
                Rc::new(FavoritesState {
                    set,
                    last_change: Some(FavoriteChange { id, active }),
                    revision: self.revision + 1,
                })
            }
        }
    }
}

/// Favorite state owned by the carousel component.
#[derive(Clone)]
pub struct Favorites {
    /// Current favorites; the buttons' `active` class is derived from this.
    pub set: FavoriteSet,
    /// Flip membership of one product id.
    pub toggle: Callback<ProductId>,
}

/// Holds the favorite set for the lifetime of the component and reports each
/// toggle (never the initial value) to `on_change`, which persists it.
#[hook]
pub fn use_favorites(initial: FavoriteSet, on_change: Callback<FavoriteChange>) -> Favorites {
    let state = use_reducer(move || FavoritesState::new(initial));

    {
        let change = state.last_change.clone();
        use_effect_with(state.revision, move |_| {
            if let Some(change) = change {
                on_change.emit(change);
            }
            || ()
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |id: ProductId| state.dispatch(FavoriteAction::Toggle(id)))
    };

    Favorites {
        set: state.set.clone(),
        toggle,
    }
}
