use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::grid::GridItem;

/// Custom hook owning the decorative tiles of one grid-screen visit. The
/// batch is drawn when the screen mounts and stays fixed across re-renders;
/// a later visit mounts a fresh screen and draws a fresh batch.
#[hook]
pub fn use_grid_items() -> Rc<Vec<GridItem>> {
    use_memo((), |_| GridItem::generate(Config::GRID_ITEM_COUNT))
}
