mod escape;
#[cfg(test)]
mod test_utils;

pub use escape::escape_value;
#[cfg(test)]
pub use test_utils::get_test_resource;
