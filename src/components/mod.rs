//! UI Components
//!
//! Leptos components for the todo page.

mod todo_row;
mod todo_adder;
mod todo_list;

pub use todo_row::TodoRow;
pub use todo_adder::TodoAdder;
pub use todo_list::TodoList;
