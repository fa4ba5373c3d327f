pub mod index_ops;
pub mod picker;
pub mod row_actions;
pub mod stack_ops;
pub mod suggestion_ops;
