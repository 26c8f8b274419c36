pub mod controller;
pub mod gateway;
pub mod render;
pub mod state;

pub use controller::{FailureKind, NewsController};
pub use gateway::{HttpGateway, NewsGateway};
pub use render::{render_grid, render_page};
pub use state::ViewState;

pub mod prelude {
    pub use nf_core::{Article, Error, Headlines, Result};

    pub use crate::{NewsController, NewsGateway, ViewState};
}
