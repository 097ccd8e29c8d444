use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod details;
pub mod favorites;
pub mod navigation;
pub mod system;

use catalog::CatalogMsg;
use details::DetailsMsg;
use favorites::FavoritesMsg;
use navigation::NavMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never carry terminal input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Screen transitions (coordinated across states)
    Nav(NavMsg),

    // Movie list screen (delegated to CatalogState)
    Catalog(CatalogMsg),

    // Movie details screen (delegated to DetailsState)
    Details(DetailsMsg),

    // Favorite set (delegated to FavoritesState)
    Favorites(FavoritesMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
