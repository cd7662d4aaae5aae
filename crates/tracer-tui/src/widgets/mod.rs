//! Custom widget components

mod block_list;
mod detail_pane;
mod footer;
mod rule;
mod title;

pub use block_list::BlockList;
pub use detail_pane::{slice_columns, DetailPane};
pub use footer::Footer;
pub use rule::Rule;
pub use title::TitleBar;
