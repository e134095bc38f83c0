pub mod lists;
pub mod mountains;
