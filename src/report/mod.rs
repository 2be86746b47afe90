//! Aggregation over a ticker list: batch fetching, the result table, statistics and
//! text rendering.

mod batch;
pub mod render;
mod source;
mod stats;
mod table;

pub use batch::EsgBatch;
pub use render::{render_detail, render_overview};
pub use source::EsgSource;
pub use stats::{ComponentAverages, Summary};
pub use table::{EsgRow, EsgTable};
