use crate::view::ViewTree;

/// Something the user can trigger from a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pick and show a random country, fetching the list if needed.
    GetCountry,
    /// Save the currently shown country.
    AddFavorite,
    /// Drop the favorite with this name.
    RemoveFavorite(String),
}

/// Receives every freshly rendered view.
pub trait ViewSink {
    fn show(&mut self, view: &ViewTree);
}

/// Remembers only the last view it was given.
#[derive(Debug, Default)]
pub struct LastView {
    pub view: Option<ViewTree>,
    pub renders: usize,
}

impl ViewSink for LastView {
    fn show(&mut self, view: &ViewTree) {
        self.view = Some(view.clone());
        self.renders += 1;
    }
}
