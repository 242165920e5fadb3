//! Table view pipeline.
//!
//! Turns a slice of rows plus column descriptors into the rows a table shows:
//!
//! 1. **Filter** by a search term over the usable columns' raw values
//! 2. **Sort** stably by one column, nulls last
//! 3. **Paginate** into 1-based pages
//!
//! [`compute`] is a pure function over borrowed rows; [`TableState`] holds the
//! interactive state (search, sort, page) and applies the page-reset rules.
//!
//! # Example
//!
//! ```
//! use dashboard_lib::model::Row;
//! use dashboard_lib::view::{ColumnDescriptor, TableState};
//!
//! let rows = vec![
//!     Row::new().set("name", "carol"),
//!     Row::new().set("name", "Amy"),
//!     Row::new().set("name", "amber"),
//! ];
//! let columns = vec![ColumnDescriptor::new("name", "Name")];
//!
//! let mut state = TableState::new(10);
//! state.set_search("am");
//! state.toggle_sort(&columns[0]);
//!
//! let view = state.view(&rows, &columns);
//! let names: Vec<_> = view.rows().map(|r| r.get_string("name").unwrap().unwrap()).collect();
//! assert_eq!(names, ["amber", "Amy"]);
//! ```

mod column;
mod pipeline;
mod search;
mod sort;
mod state;

pub use column::*;
pub use pipeline::*;
pub use search::*;
pub use sort::{compare_values, Direction, SortConfig};
pub use state::*;
