pub(crate) mod layout;
pub(crate) mod utils;
pub(crate) mod visitor;
